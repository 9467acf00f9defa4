//! Geohash encoding with bounding boxes, neighbors and the cell hierarchy.
//!
//! ```rust
//! use spatio_geohash::{Direction, decode, encode, neighbor, parent, subhashes};
//!
//! let hash = encode(52.5174, 13.409, 6)?;
//! assert_eq!(hash, "u33dc0");
//!
//! let (lat, lon) = decode(&hash)?;
//! assert!((lat - 52.5174).abs() < 0.003 && (lon - 13.409).abs() < 0.006);
//!
//! assert_eq!(neighbor(&hash, Direction::North)?, "u33dc1");
//! assert_eq!(parent(&hash)?, "u33dc");
//! assert_eq!(subhashes(&hash)?.len(), 32);
//! # Ok::<(), spatio_geohash::GeohashError>(())
//! ```

pub mod base32;
mod bisect;
pub mod codec;
pub mod config;
pub mod error;
pub mod neighbors;
pub mod validation;

pub use base32::ALPHABET;
pub use codec::{
    DEFAULT_PRECISION, bounding_box, bounding_rect, cell_dimensions, decode, decode_exactly,
    decode_point, encode, encode_default, encode_point, is_valid, parent, subhashes,
};
pub use config::Config;
pub use error::{GeohashError, Result};
pub use neighbors::{Neighbors, neighbor, neighbors};
pub use validation::MAX_PRECISION;

pub use spatio_geohash_types::bbox::BoundingBox;
pub use spatio_geohash_types::direction::{Direction, ParseDirectionError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{
        BoundingBox, Config, Direction, GeohashError, Neighbors, Result, bounding_box, decode,
        encode, neighbor, neighbors, parent, subhashes,
    };

    pub use geo::{Point, Rect};
}
