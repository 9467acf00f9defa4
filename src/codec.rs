//! Encoding, decoding and the cell hierarchy.
//!
//! A geohash of length `n` names a rectangle reached by `5 * n` interleaved
//! bisections of the latitude/longitude domain. Appending a character
//! subdivides the rectangle into 32 children; removing one returns to the
//! parent. Encode and decode share [`Bisector`] so they always agree on the
//! cell a string denotes.

use crate::base32::{self, BIT_MASKS, BITS_PER_CHAR};
use crate::bisect::Bisector;
use crate::error::{GeohashError, Result};
use crate::validation::{MAX_PRECISION, validate_coordinate, validate_geohash, validate_precision};
use geo::{Point, Rect};
use spatio_geohash_types::bbox::BoundingBox;

/// Precision used by [`encode_default`]; cells are about 1.2km x 0.6km.
pub const DEFAULT_PRECISION: usize = 6;

/// Encode a coordinate as a geohash of `precision` characters.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees, [-90, 90]
/// * `lon` - Longitude in degrees, [-180, 180]
/// * `precision` - Output length, [1, 12]
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::encode;
///
/// assert_eq!(encode(52.5174, 13.409, 6)?, "u33dc0");
/// assert_eq!(encode(52.517395, 13.408813, 11)?, "u33dc07zzzz");
/// assert!(encode(152.517395, 13.408813, 6).is_err());
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn encode(lat: f64, lon: f64, precision: usize) -> Result<String> {
    validate_coordinate(lat, lon)?;
    validate_precision(precision)?;

    let mut bisector = Bisector::new();
    let mut geohash = String::with_capacity(precision);

    for _ in 0..precision {
        let mut value = 0u8;
        for mask in BIT_MASKS {
            if bisector.push_coordinate(lat, lon) {
                value |= mask;
            }
        }
        geohash.push(base32::encode_char(value));
    }

    Ok(geohash)
}

/// Encode at [`DEFAULT_PRECISION`].
pub fn encode_default(lat: f64, lon: f64) -> Result<String> {
    encode(lat, lon, DEFAULT_PRECISION)
}

/// Encode a `geo::Point` (x = longitude, y = latitude).
pub fn encode_point(point: &Point, precision: usize) -> Result<String> {
    encode(point.y(), point.x(), precision)
}

/// Rectangle denoted by a geohash.
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::bounding_box;
///
/// let bbox = bounding_box("u")?;
/// assert_eq!(bbox.to_array(), [45.0, 90.0, 0.0, 45.0]);
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn bounding_box(geohash: &str) -> Result<BoundingBox> {
    validate_geohash(geohash)?;

    let mut bisector = Bisector::new();
    for (position, character) in geohash.chars().enumerate() {
        let value = base32::decode_char(character).ok_or(GeohashError::InvalidCharacter {
            character,
            position,
        })?;
        for mask in BIT_MASKS {
            bisector.push_bit(value & mask != 0);
        }
    }

    Ok(bisector.bounding_box())
}

/// Bounding box as a `geo::Rect` (x = longitude, y = latitude).
pub fn bounding_rect(geohash: &str) -> Result<Rect> {
    bounding_box(geohash).map(|bbox| bbox.to_rect())
}

/// Centroid of a geohash cell as `(latitude, longitude)`.
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::decode;
///
/// let (lat, lon) = decode("u33dc0")?;
/// assert!((lat - 52.5174).abs() < 0.00005);
/// assert!((lon - 13.409).abs() < 0.0005);
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn decode(geohash: &str) -> Result<(f64, f64)> {
    bounding_box(geohash).map(|bbox| bbox.center())
}

/// Centroid of a geohash cell as a `geo::Point`.
pub fn decode_point(geohash: &str) -> Result<Point> {
    let (lat, lon) = decode(geohash)?;
    Ok(Point::new(lon, lat))
}

/// Centroid plus error margins: `(lat, lon, lat_err, lon_err)`.
///
/// The margins are half the cell height and width, so the true coordinate
/// lies within `lat ± lat_err` and `lon ± lon_err`.
pub fn decode_exactly(geohash: &str) -> Result<(f64, f64, f64, f64)> {
    let bbox = bounding_box(geohash)?;
    let (lat, lon) = bbox.center();
    Ok((lat, lon, bbox.lat_span() / 2.0, bbox.lon_span() / 2.0))
}

/// Height and width in degrees, `(lat, lon)`, of any cell at `precision`.
///
/// ```rust
/// use spatio_geohash::cell_dimensions;
///
/// assert_eq!(cell_dimensions(1)?, (45.0, 45.0));
/// assert_eq!(cell_dimensions(2)?, (5.625, 11.25));
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn cell_dimensions(precision: usize) -> Result<(f64, f64)> {
    validate_precision(precision)?;

    let bits = precision * BITS_PER_CHAR;
    let lon_bits = bits.div_ceil(2);
    let lat_bits = bits / 2;

    Ok((
        180.0 / 2f64.powi(lat_bits as i32),
        360.0 / 2f64.powi(lon_bits as i32),
    ))
}

/// The 32 children of a geohash, in alphabet order.
///
/// Together they tile the parent cell: 8 columns by 4 rows when the parent
/// has even length, 4 columns by 8 rows when odd.
///
/// # Errors
///
/// Fails for invalid input and for 12 character hashes, whose children would
/// exceed the maximum precision.
pub fn subhashes(geohash: &str) -> Result<Vec<String>> {
    validate_geohash(geohash)?;

    let len = geohash.chars().count();
    if len >= MAX_PRECISION {
        return Err(GeohashError::PrecisionExhausted(len));
    }

    Ok(base32::chars()
        .map(|c| {
            let mut child = String::with_capacity(len + 1);
            child.push_str(geohash);
            child.push(c);
            child
        })
        .collect())
}

/// The enclosing cell one level up: the input minus its last character.
///
/// A single character hash has the whole world as its parent, returned as
/// the empty string.
///
/// ```rust
/// use spatio_geohash::parent;
///
/// assert_eq!(parent("u33dbc")?, "u33db");
/// assert_eq!(parent("u")?, "");
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn parent(geohash: &str) -> Result<String> {
    validate_geohash(geohash)?;

    let mut parent = geohash.to_string();
    parent.pop();
    Ok(parent)
}

/// True if `geohash` would be accepted by [`bounding_box`].
pub fn is_valid(geohash: &str) -> bool {
    validate_geohash(geohash).is_ok()
}
