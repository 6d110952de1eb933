//! Multi-leg trip accumulation
//!
//! A trip may collect several origin/destination legs before being priced
//! as a single calculation: the distances are summed (and doubled for a
//! round trip), the origin is the first leg's origin, and the destinations
//! are joined in order so a composed route stays distinguishable from a
//! plain destination name.

use crate::core::{AxleCount, CalculationRecord, Error, Result, TripType};
use crate::pricing::PricingEngine;

/// Separator between the destinations of a composed route
pub const LEG_SEPARATOR: &str = " -> ";

/// One origin-to-destination segment of a trip
#[derive(Debug, Clone, PartialEq)]
pub struct TripLeg {
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
}

/// Legs accumulated for a calculation that has not been priced yet
#[derive(Debug, Clone, Default)]
pub struct TripDraft {
    legs: Vec<TripLeg>,
    trip_type: TripType,
}

impl TripDraft {
    pub fn new(trip_type: TripType) -> Self {
        Self {
            legs: Vec::new(),
            trip_type,
        }
    }

    /// Add one leg; the distance must be positive
    pub fn add_leg(&mut self, origin: &str, destination: &str, distance_km: f64) -> Result<()> {
        if origin.trim().is_empty() || destination.trim().is_empty() {
            return Err(Error::Validation(
                "leg origin and destination must not be empty".into(),
            ));
        }
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(Error::Validation(format!(
                "leg distance must be positive, got {}",
                distance_km
            )));
        }

        self.legs.push(TripLeg {
            origin: origin.trim().to_string(),
            destination: destination.trim().to_string(),
            distance_km,
        });
        Ok(())
    }

    pub fn legs(&self) -> &[TripLeg] {
        &self.legs
    }

    pub fn trip_type(&self) -> TripType {
        self.trip_type
    }

    /// Sum of the leg distances, before any round-trip doubling
    pub fn one_way_km(&self) -> f64 {
        self.legs.iter().map(|l| l.distance_km).sum()
    }

    /// Total trip distance, doubled for round trips
    pub fn total_km(&self) -> f64 {
        if self.trip_type.is_round_trip() {
            self.one_way_km() * 2.0
        } else {
            self.one_way_km()
        }
    }

    /// All leg destinations joined in order
    pub fn composed_destination(&self) -> String {
        self.legs
            .iter()
            .map(|l| l.destination.as_str())
            .collect::<Vec<_>>()
            .join(LEG_SEPARATOR)
    }

    /// Price the accumulated legs and produce the record to be appended.
    ///
    /// Fails when no legs were added; the engine re-checks that the summed
    /// distance is positive.
    pub fn into_record(self, engine: &PricingEngine, axles: AxleCount) -> Result<CalculationRecord> {
        let first = self
            .legs
            .first()
            .ok_or_else(|| Error::Validation("trip has no legs".into()))?;

        let amount = engine.estimate(self.one_way_km(), axles, self.trip_type)?;

        Ok(CalculationRecord {
            timestamp: chrono::Local::now().format("%d/%m/%Y %H:%M").to_string(),
            origin: first.origin.clone(),
            destination: self.composed_destination(),
            distance_km: self.total_km(),
            axle_count: axles,
            amount,
            trip_type: self.trip_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PricingConfig;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_two_leg_round_trip_distance() {
        let mut draft = TripDraft::new(TripType::RoundTrip);
        draft.add_leg("Campinas", "Sorocaba", 100.0).unwrap();
        draft.add_leg("Sorocaba", "Santos", 150.0).unwrap();

        assert!((draft.one_way_km() - 250.0).abs() < EPS);
        assert!((draft.total_km() - 500.0).abs() < EPS);
    }

    #[test]
    fn test_record_from_multi_leg_trip() {
        let engine = PricingEngine::new(&PricingConfig::default());

        let mut draft = TripDraft::new(TripType::RoundTrip);
        draft.add_leg("Campinas", "Sorocaba", 100.0).unwrap();
        draft.add_leg("Sorocaba", "Santos", 150.0).unwrap();

        let record = draft.into_record(&engine, AxleCount::Four).unwrap();
        assert_eq!(record.origin, "Campinas");
        assert_eq!(record.destination, "Sorocaba -> Santos");
        assert_eq!(record.trip_type, TripType::RoundTrip);
        assert!((record.distance_km - 500.0).abs() < EPS);
        // (100 + 150) * 2 * 5.1559 + 503.95
        let expected = engine
            .estimate(500.0, AxleCount::Four, TripType::OneWay)
            .unwrap();
        assert!((record.amount - expected).abs() < EPS);
        assert!((record.amount - 3081.90).abs() < 1e-6);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_single_leg_keeps_plain_destination() {
        let engine = PricingEngine::new(&PricingConfig::default());

        let mut draft = TripDraft::new(TripType::OneWay);
        draft.add_leg("Curitiba", "Joinville", 130.0).unwrap();

        let record = draft.into_record(&engine, AxleCount::Two).unwrap();
        assert_eq!(record.destination, "Joinville");
        assert!(!record.destination.contains(LEG_SEPARATOR));
    }

    #[test]
    fn test_rejects_empty_draft_and_bad_legs() {
        let engine = PricingEngine::new(&PricingConfig::default());

        let draft = TripDraft::new(TripType::OneWay);
        assert!(draft.into_record(&engine, AxleCount::Two).is_err());

        let mut draft = TripDraft::new(TripType::OneWay);
        assert!(draft.add_leg("", "Santos", 10.0).is_err());
        assert!(draft.add_leg("Campinas", "Santos", 0.0).is_err());
        assert!(draft.add_leg("Campinas", "Santos", -5.0).is_err());
        assert!(draft.legs().is_empty());
    }
}
