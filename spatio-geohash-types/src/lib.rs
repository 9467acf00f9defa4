//! # spatio-geohash-types
//!
//! Value types shared by the `spatio-geohash` crate:
//!
//! - **Cell bounds**: `BoundingBox`, the rectangle a geohash denotes
//! - **Compass directions**: `Direction`, the key of a neighbor lookup
//!
//! All types are serializable with Serde and convert to and from the `geo`
//! crate's primitives where that makes sense.
//!
//! ## Examples
//!
//! ```rust
//! use spatio_geohash_types::bbox::BoundingBox;
//! use spatio_geohash_types::direction::Direction;
//!
//! let cell = BoundingBox::new(45.0, 90.0, 0.0, 45.0);
//! assert_eq!(cell.center(), (67.5, 22.5));
//! assert_eq!(Direction::North.opposite(), Direction::South);
//! ```

pub mod bbox;
pub mod direction;
