//! Pricing engine for road freight cost estimation
//!
//! The amount is linear in the distance traveled:
//! `distance_km * rate_per_km(axles) + surcharge`, where the per-kilometer
//! rate comes from a fixed table keyed by axle count and the surcharge
//! covers loading/unloading. Round trips double the distance before pricing.

use crate::core::{AxleCount, Error, PricingConfig, Result, TripType};

/// Pricing engine that calculates freight costs
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Create a new pricing engine with the given configuration
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Update the pricing configuration
    pub fn update_config(&mut self, config: &PricingConfig) {
        self.config = config.clone();
    }

    /// Get the per-kilometer rate for the given axle count
    pub fn rate_for(&self, axles: AxleCount) -> f64 {
        self.config.rates.rate_for(axles)
    }

    /// Estimate the freight amount for a trip.
    ///
    /// Rejects non-positive distances; callers must not record an estimate
    /// in that case. No rounding is applied, currency formatting is a
    /// presentation concern.
    pub fn estimate(&self, distance_km: f64, axles: AxleCount, trip_type: TripType) -> Result<f64> {
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(Error::Validation(format!(
                "distance must be positive, got {}",
                distance_km
            )));
        }

        let billed_km = if trip_type.is_round_trip() {
            distance_km * 2.0
        } else {
            distance_km
        };

        Ok(billed_km * self.rate_for(axles) + self.config.surcharge)
    }

    /// Get the currency symbol
    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }
}
