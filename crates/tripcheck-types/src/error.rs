//! Error types for tripcheck

use thiserror::Error;

/// Rejected numeric or textual input, tagged with the field that failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: latitude {value} is outside [-90, 90]")]
    LatitudeOutOfRange { field: String, value: f64 },

    #[error("{field}: longitude {value} is outside [-180, 180]")]
    LongitudeOutOfRange { field: String, value: f64 },

    #[error("{field}: value {value} is not a finite number")]
    NotFinite { field: String, value: f64 },

    #[error("{field}: distance {value} must not be negative")]
    NegativeDistance { field: String, value: f64 },

    #[error("cycle hours used must be between 0 and 70 (got {value})")]
    CycleHoursOutOfRange { value: f64 },

    #[error("{field}: location is required")]
    EmptyLocation { field: String },

    #[error("departure {departure}: trip runs past the supported date range")]
    DepartureOutOfRange { departure: String },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Gazetteer error: {0}")]
    Gazetteer(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
