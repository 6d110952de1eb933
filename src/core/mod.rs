//! Core module - configuration, errors, and common types

mod config;
mod error;
mod types;

pub use config::{AxleRates, Config, GeneralConfig, GeocodingConfig, HistoryConfig, PricingConfig};
pub use error::{Error, Result};
pub use types::{AxleCount, CalculationRecord, TripType};
