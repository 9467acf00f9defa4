//! Validation for coordinates, precisions and geohash strings.

use crate::base32;
use crate::error::{GeohashError, Result};

/// Longest geohash this crate produces or accepts (about 1cm cells).
pub const MAX_PRECISION: usize = 12;

/// Validates a coordinate.
///
/// Latitude: [-90.0, 90.0], Longitude: [-180.0, 180.0], both inclusive.
/// NaN and infinities fail the range check.
///
/// # Examples
///
/// ```
/// use spatio_geohash::validation::validate_coordinate;
///
/// assert!(validate_coordinate(52.5174, 13.409).is_ok());
/// assert!(validate_coordinate(90.0, -180.0).is_ok());
/// assert!(validate_coordinate(95.0, 13.409).is_err());
/// assert!(validate_coordinate(52.5174, f64::NAN).is_err());
/// ```
pub fn validate_coordinate(lat: f64, lon: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(GeohashError::LatitudeOutOfRange(lat));
    }

    if !(-180.0..=180.0).contains(&lon) {
        return Err(GeohashError::LongitudeOutOfRange(lon));
    }

    Ok(())
}

/// Validates a precision (geohash length) is within [1, 12].
pub fn validate_precision(precision: usize) -> Result<()> {
    if !(1..=MAX_PRECISION).contains(&precision) {
        return Err(GeohashError::InvalidPrecision(precision));
    }
    Ok(())
}

/// Validates a geohash string.
///
/// The hash must be non-empty, at most 12 characters, and made only of
/// characters from the geohash alphabet. Uppercase letters are rejected.
///
/// # Examples
///
/// ```
/// use spatio_geohash::validation::validate_geohash;
///
/// assert!(validate_geohash("u33dc0").is_ok());
/// assert!(validate_geohash("").is_err());
/// assert!(validate_geohash("u33dca").is_err()); // 'a' is not in the alphabet
/// assert!(validate_geohash("u33dc0u33dc0u").is_err()); // 13 characters
/// ```
pub fn validate_geohash(geohash: &str) -> Result<()> {
    if geohash.is_empty() {
        return Err(GeohashError::EmptyGeohash);
    }

    let len = geohash.chars().count();
    if len > MAX_PRECISION {
        return Err(GeohashError::GeohashTooLong(len));
    }

    if let Some((position, character)) = geohash
        .chars()
        .enumerate()
        .find(|(_, c)| base32::decode_char(*c).is_none())
    {
        return Err(GeohashError::InvalidCharacter {
            character,
            position,
        });
    }

    Ok(())
}
