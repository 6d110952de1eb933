//! Common types used across the application

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of axles on the freight vehicle.
///
/// Closed enumeration: only the axle counts that have an entry in the
/// per-kilometer rate table are representable. Anything else (including 8,
/// which some legacy history files contain) fails to parse and is treated
/// as a validation error rather than silently priced at a default rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AxleCount {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Nine,
}

impl AxleCount {
    /// All supported axle counts, in ascending order
    pub const ALL: [AxleCount; 7] = [
        AxleCount::Two,
        AxleCount::Three,
        AxleCount::Four,
        AxleCount::Five,
        AxleCount::Six,
        AxleCount::Seven,
        AxleCount::Nine,
    ];

    pub fn as_u8(self) -> u8 {
        match self {
            AxleCount::Two => 2,
            AxleCount::Three => 3,
            AxleCount::Four => 4,
            AxleCount::Five => 5,
            AxleCount::Six => 6,
            AxleCount::Seven => 7,
            AxleCount::Nine => 9,
        }
    }

    pub fn from_u8(n: u8) -> Result<Self> {
        match n {
            2 => Ok(AxleCount::Two),
            3 => Ok(AxleCount::Three),
            4 => Ok(AxleCount::Four),
            5 => Ok(AxleCount::Five),
            6 => Ok(AxleCount::Six),
            7 => Ok(AxleCount::Seven),
            9 => Ok(AxleCount::Nine),
            other => Err(Error::Validation(format!(
                "unsupported axle count: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for AxleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl FromStr for AxleCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let n: u8 = s
            .trim()
            .parse()
            .map_err(|_| Error::Validation(format!("invalid axle count: {:?}", s)))?;
        Self::from_u8(n)
    }
}

impl TryFrom<String> for AxleCount {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<AxleCount> for String {
    fn from(a: AxleCount) -> String {
        a.as_u8().to_string()
    }
}

/// Whether the quoted trip is one-way or includes the return journey.
///
/// The wire form keeps the Portuguese labels used by the legacy history
/// files; entries written before the field existed default to one-way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripType {
    #[default]
    #[serde(rename = "Apenas Ida")]
    OneWay,
    #[serde(rename = "Ida e Volta")]
    RoundTrip,
}

impl TripType {
    pub fn is_round_trip(self) -> bool {
        matches!(self, TripType::RoundTrip)
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripType::OneWay => write!(f, "Apenas Ida"),
            TripType::RoundTrip => write!(f, "Ida e Volta"),
        }
    }
}

/// One completed freight estimate, as persisted in the history file.
///
/// Field names are renamed to match the storage format, which predates
/// this implementation and must keep round-tripping old files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Creation date-time, already formatted for display
    #[serde(rename = "data")]
    pub timestamp: String,
    /// Origin place name
    #[serde(rename = "origem")]
    pub origin: String,
    /// Destination place name; multi-leg trips join destinations with " -> "
    #[serde(rename = "destino")]
    pub destination: String,
    /// Total trip distance in kilometers (doubled for round trips)
    #[serde(rename = "distancia")]
    pub distance_km: f64,
    #[serde(rename = "eixos")]
    pub axle_count: AxleCount,
    /// Computed freight amount
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "ida_volta", default)]
    pub trip_type: TripType,
}

impl CalculationRecord {
    /// Check the invariants a record must satisfy before it may be persisted
    pub fn validate(&self) -> Result<()> {
        if self.timestamp.trim().is_empty() {
            return Err(Error::Validation("record has no timestamp".into()));
        }
        if self.origin.trim().is_empty() {
            return Err(Error::Validation("record has no origin".into()));
        }
        if self.destination.trim().is_empty() {
            return Err(Error::Validation("record has no destination".into()));
        }
        if !self.distance_km.is_finite() || self.distance_km < 0.0 {
            return Err(Error::Validation(format!(
                "invalid distance: {}",
                self.distance_km
            )));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(Error::Validation(format!("invalid amount: {}", self.amount)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> CalculationRecord {
        CalculationRecord {
            timestamp: "01/03/2025 14:30".to_string(),
            origin: "Campinas".to_string(),
            destination: "Santos".to_string(),
            distance_km: 160.0,
            axle_count: AxleCount::Four,
            amount: 1328.89,
            trip_type: TripType::OneWay,
        }
    }

    #[test]
    fn test_axle_count_parsing() {
        assert_eq!("4".parse::<AxleCount>().unwrap(), AxleCount::Four);
        assert_eq!(" 9 ".parse::<AxleCount>().unwrap(), AxleCount::Nine);
        assert!("8".parse::<AxleCount>().is_err());
        assert!("0".parse::<AxleCount>().is_err());
        assert!("four".parse::<AxleCount>().is_err());
    }

    #[test]
    fn test_record_wire_format() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(json["origem"], "Campinas");
        assert_eq!(json["destino"], "Santos");
        assert_eq!(json["eixos"], "4");
        assert_eq!(json["ida_volta"], "Apenas Ida");
        assert_eq!(json["distancia"], 160.0);
    }

    #[test]
    fn test_record_missing_trip_type_defaults_to_one_way() {
        let json = r#"{
            "data": "01/03/2025 14:30",
            "origem": "Campinas",
            "destino": "Santos",
            "distancia": 160.0,
            "eixos": "4",
            "valor": 1328.89
        }"#;
        let record: CalculationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.trip_type, TripType::OneWay);
    }

    #[test]
    fn test_record_validation() {
        assert!(sample_record().validate().is_ok());

        let mut r = sample_record();
        r.origin = "  ".to_string();
        assert!(r.validate().is_err());

        let mut r = sample_record();
        r.distance_km = -1.0;
        assert!(r.validate().is_err());

        let mut r = sample_record();
        r.amount = f64::NAN;
        assert!(r.validate().is_err());
    }
}
