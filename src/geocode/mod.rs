//! Geocoding collaborator and great-circle distance
//!
//! Place names are resolved to coordinates through a Nominatim-compatible
//! search endpoint; the distance between two resolved points is the
//! haversine great-circle distance in kilometers.

use crate::core::{Error, GeocodingConfig, Result};
use serde::Deserialize;
use std::time::Duration;

const USER_AGENT: &str = concat!("freightcalc/", env!("CARGO_PKG_VERSION"));

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A resolved latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Resolves a free-text place name to coordinates.
///
/// The trait is the seam the orchestrator depends on; tests substitute a
/// canned implementation so no lookup ever leaves the process.
pub trait Geocoder {
    fn lookup(&self, place: &str) -> Result<GeoPoint>;
}

/// Great-circle distance between two points, in kilometers
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Blocking client for a Nominatim-compatible search endpoint
pub struct NominatimClient {
    http: reqwest::blocking::Client,
    base_url: String,
    country_hint: Option<String>,
}

impl NominatimClient {
    /// Build a client from the geocoding configuration.
    ///
    /// The timeout is mandatory: a hung lookup surfaces as a recoverable
    /// error instead of blocking the whole session.
    pub fn from_config(config: &GeocodingConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            country_hint: config.country_hint.clone(),
        })
    }
}

impl Geocoder for NominatimClient {
    fn lookup(&self, place: &str) -> Result<GeoPoint> {
        let query = compose_query(place, self.country_hint.as_deref());
        log::debug!("geocoding {:?}", query);

        let places: Vec<NominatimPlace> = self
            .http
            .get(&self.base_url)
            .query(&[("q", query.as_str()), ("format", "json"), ("limit", "1")])
            .send()?
            .error_for_status()?
            .json()?;

        let first = places
            .into_iter()
            .next()
            .ok_or_else(|| Error::PlaceNotFound(place.to_string()))?;

        let lat: f64 = first
            .lat
            .parse()
            .map_err(|_| Error::Geocoding(format!("bad latitude {:?}", first.lat)))?;
        let lon: f64 = first
            .lon
            .parse()
            .map_err(|_| Error::Geocoding(format!("bad longitude {:?}", first.lon)))?;

        Ok(GeoPoint { lat, lon })
    }
}

/// Append the configured country hint to queries that carry no hint of
/// their own (detected by the absence of a comma)
fn compose_query(place: &str, country_hint: Option<&str>) -> String {
    match country_hint {
        Some(hint) if !place.contains(',') => format!("{}, {}", place.trim(), hint),
        _ => place.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_known_city_pair() {
        // Sao Paulo to Rio de Janeiro, roughly 360 km great-circle
        let sao_paulo = GeoPoint { lat: -23.5505, lon: -46.6333 };
        let rio = GeoPoint { lat: -22.9068, lon: -43.1729 };

        let d = haversine_km(sao_paulo, rio);
        assert!((d - 360.0).abs() < 10.0, "distance was {}", d);

        // Symmetric
        assert!((d - haversine_km(rio, sao_paulo)).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_same_point_is_zero() {
        let p = GeoPoint { lat: -15.7939, lon: -47.8828 };
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_compose_query_appends_hint_when_absent() {
        assert_eq!(compose_query("Campinas", Some("Brasil")), "Campinas, Brasil");
        assert_eq!(compose_query(" Campinas ", Some("Brasil")), "Campinas, Brasil");
        // A query that already carries a hint is left alone
        assert_eq!(compose_query("Campinas, SP", Some("Brasil")), "Campinas, SP");
        assert_eq!(compose_query("Campinas", None), "Campinas");
    }
}
