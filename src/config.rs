//! Application configuration

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::errors::MarineError;
use crate::service::VesselProfile;
use crate::spots::DEFAULT_RADIUS_KM;

/// Indian Standard Time, UTC+05:30
const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub vessel: VesselProfile,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for reproducible runs; OS entropy if unset
    pub seed: Option<u64>,
    /// Fishing spot search radius when a request does not give one
    pub default_radius_km: f64,
    /// Offset from UTC of local time at the fishing grounds
    pub utc_offset_minutes: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_radius_km: DEFAULT_RADIUS_KM,
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config/default")
    }

    /// Load from an optional config file, overridden by `MARINESIM__*` variables
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("MARINESIM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), MarineError> {
        self.engine.validate()?;
        self.vessel
            .validate()
            .map_err(|e| MarineError::ConfigurationError {
                message: e.to_string(),
            })?;
        Ok(())
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), MarineError> {
        self.validate_radius()?;
        self.validate_utc_offset()?;
        Ok(())
    }

    fn validate_radius(&self) -> Result<(), MarineError> {
        if !(self.default_radius_km.is_finite() && self.default_radius_km > 0.0) {
            return Err(MarineError::ConfigurationError {
                message: format!(
                    "Default radius must be greater than zero, got {}",
                    self.default_radius_km
                ),
            });
        }
        Ok(())
    }

    fn validate_utc_offset(&self) -> Result<(), MarineError> {
        if self.utc_offset_minutes.abs() >= 24 * 60 {
            return Err(MarineError::ConfigurationError {
                message: format!(
                    "UTC offset must be within 24 hours, got {} minutes",
                    self.utc_offset_minutes
                ),
            });
        }
        Ok(())
    }
}
