//! Serializable configuration.

use crate::codec::{DEFAULT_PRECISION, encode};
use crate::error::{GeohashError, Result};
use crate::validation::validate_precision;
use serde::de::Error;
use serde::{Deserialize, Serialize};

/// Geohash configuration
///
/// Designed to be loaded from JSON or TOML alongside the rest of an
/// application's settings.
///
/// # Example
///
/// ```rust
/// use spatio_geohash::Config;
///
/// let config = Config::default();
/// assert_eq!(config.default_precision, 6);
///
/// let json = r#"{ "default_precision": 9 }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.encode(52.5174, 13.409).unwrap(), "u33dc0s0h");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Length of hashes produced by [`Config::encode`] (1-12, default: 6)
    #[serde(default = "Config::default_precision")]
    pub default_precision: usize,
}

impl Config {
    const fn default_precision() -> usize {
        DEFAULT_PRECISION
    }

    pub fn with_default_precision(precision: usize) -> Result<Self> {
        let config = Self {
            default_precision: precision,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        validate_precision(self.default_precision).map_err(|e| {
            log::warn!("Rejecting geohash configuration: {e}");
            GeohashError::InvalidConfig(e.to_string())
        })
    }

    /// Encode a coordinate at the configured precision.
    pub fn encode(&self, lat: f64, lon: f64) -> Result<String> {
        encode(lat, lon, self.default_precision)
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_precision: Self::default_precision(),
        }
    }
}
