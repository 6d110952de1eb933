//! Configuration management

use crate::core::{AxleCount, Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("freightcalc");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "pt"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// Pricing configuration
///
/// The defaults reproduce the published per-axle freight rate table and the
/// fixed loading/unloading surcharge; a config file can override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Currency code (BRL, EUR, USD, etc.)
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Currency symbol
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Fixed loading/unloading surcharge added to every estimate
    #[serde(default = "default_surcharge")]
    pub surcharge: f64,
    /// Per-kilometer rates keyed by axle count
    #[serde(default)]
    pub rates: AxleRates,
}

fn default_currency() -> String { "BRL".to_string() }
fn default_currency_symbol() -> String { "R$".to_string() }
fn default_surcharge() -> f64 { 503.95 }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
            surcharge: default_surcharge(),
            rates: AxleRates::default(),
        }
    }
}

/// Per-kilometer rate table, one entry per supported axle count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxleRates {
    #[serde(default = "default_rate_2")]
    pub two: f64,
    #[serde(default = "default_rate_3")]
    pub three: f64,
    #[serde(default = "default_rate_4")]
    pub four: f64,
    #[serde(default = "default_rate_5")]
    pub five: f64,
    #[serde(default = "default_rate_6")]
    pub six: f64,
    #[serde(default = "default_rate_7")]
    pub seven: f64,
    #[serde(default = "default_rate_9")]
    pub nine: f64,
}

fn default_rate_2() -> f64 { 3.4712 }
fn default_rate_3() -> f64 { 4.3390 }
fn default_rate_4() -> f64 { 5.1559 }
fn default_rate_5() -> f64 { 5.5159 }
fn default_rate_6() -> f64 { 6.1069 }
fn default_rate_7() -> f64 { 6.8288 }
fn default_rate_9() -> f64 { 8.0526 }

impl Default for AxleRates {
    fn default() -> Self {
        Self {
            two: default_rate_2(),
            three: default_rate_3(),
            four: default_rate_4(),
            five: default_rate_5(),
            six: default_rate_6(),
            seven: default_rate_7(),
            nine: default_rate_9(),
        }
    }
}

impl AxleRates {
    /// Rate per kilometer for the given axle count
    pub fn rate_for(&self, axles: AxleCount) -> f64 {
        match axles {
            AxleCount::Two => self.two,
            AxleCount::Three => self.three,
            AxleCount::Four => self.four,
            AxleCount::Five => self.five,
            AxleCount::Six => self.six,
            AxleCount::Seven => self.seven,
            AxleCount::Nine => self.nine,
        }
    }
}

/// Geocoding collaborator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL of the Nominatim-compatible search endpoint
    #[serde(default = "default_geocoding_url")]
    pub base_url: String,
    /// Request timeout in seconds; a hung lookup is a recoverable failure
    #[serde(default = "default_geocoding_timeout")]
    pub timeout_secs: u64,
    /// Country appended to queries that carry no hint of their own
    #[serde(default = "default_country_hint")]
    pub country_hint: Option<String>,
}

fn default_geocoding_url() -> String { "https://nominatim.openstreetmap.org/search".to_string() }
fn default_geocoding_timeout() -> u64 { 10 }
fn default_country_hint() -> Option<String> { Some("Brasil".to_string()) }

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_url(),
            timeout_secs: default_geocoding_timeout(),
            country_hint: default_country_hint(),
        }
    }
}

/// History display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// How many recent records the display and statistics windows consider
    #[serde(default = "default_recent_window")]
    pub recent_window: usize,
}

fn default_recent_window() -> usize { 10 }

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            recent_window: default_recent_window(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate_table_matches_published_rates() {
        let rates = AxleRates::default();
        assert_eq!(rates.rate_for(AxleCount::Two), 3.4712);
        assert_eq!(rates.rate_for(AxleCount::Four), 5.1559);
        assert_eq!(rates.rate_for(AxleCount::Nine), 8.0526);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [general]
            language = "pt"

            [pricing.rates]
            two = 4.0
            "#,
        )
        .unwrap();

        assert_eq!(config.general.language, "pt");
        assert_eq!(config.pricing.rates.two, 4.0);
        // Untouched fields come from the defaults
        assert_eq!(config.pricing.rates.three, 4.3390);
        assert_eq!(config.pricing.surcharge, 503.95);
        assert_eq!(config.history.recent_window, 10);
    }
}
