//! Error types for geohash operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeohashError>;

/// Errors raised by geohash operations.
///
/// Every variant except [`GeohashError::InvalidConfig`] is an input
/// validation failure: the caller passed a value outside the domain of the
/// operation. Nothing here is transient, so retrying with the same input
/// always fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeohashError {
    #[error("Latitude out of range [-90.0, 90.0]: {0}")]
    LatitudeOutOfRange(f64),

    #[error("Longitude out of range [-180.0, 180.0]: {0}")]
    LongitudeOutOfRange(f64),

    #[error("Geohash precision must be between 1 and 12, got: {0}")]
    InvalidPrecision(usize),

    #[error("Geohash must not be empty")]
    EmptyGeohash,

    #[error("Geohash length must not exceed 12 characters, got: {0}")]
    GeohashTooLong(usize),

    #[error("Invalid geohash character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Geohash of length {0} has no sub-cells within the 12 character limit")]
    PrecisionExhausted(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GeohashError {
    /// True when the error was caused by a bad argument to an operation.
    pub fn is_input_validation(&self) -> bool {
        !matches!(self, GeohashError::InvalidConfig(_))
    }
}
