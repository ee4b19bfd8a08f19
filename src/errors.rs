//! Errors for the marine simulation request layer
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarineError {
    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid coordinates: lat={lat}, lng={lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("Invalid search radius: {0}")]
    InvalidRadius(f64),

    #[error("Invalid vessel profile: {0}")]
    InvalidVessel(String),

    #[error("Unknown destination: {0}")]
    UnknownDestination(String),

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
