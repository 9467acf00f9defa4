//! Adjacent cells of a geohash.
//!
//! Neighbors are found arithmetically rather than through lookup tables: take
//! the cell's bounding box, step one cell height or width past the edge,
//! wrap around the domain if needed and re-encode at the same precision.
//! Diagonal neighbors are derived by stepping east or west from the north or
//! south neighbor, never from the original cell.
//!
//! Crossing a pole reflects the latitude into the opposite hemisphere and
//! keeps the longitude unchanged, so the result is not the geodesically
//! adjacent cell (that one sits 180° of longitude away).

use crate::codec::{bounding_box, encode};
use crate::error::Result;
use crate::validation::validate_geohash;
use serde::{Deserialize, Serialize};
use spatio_geohash_types::direction::Direction;
use std::collections::BTreeMap;
use std::ops::Index;

/// The eight neighbors of a geohash, one per [`Direction`].
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::{Direction, neighbors};
///
/// let around = neighbors("u33dc0")?;
/// assert_eq!(around.north, "u33dc1");
/// assert_eq!(&around[Direction::SouthWest], "u33d8z");
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub north: String,
    pub north_east: String,
    pub east: String,
    pub south_east: String,
    pub south: String,
    pub south_west: String,
    pub west: String,
    pub north_west: String,
}

impl Neighbors {
    /// Neighbor in the given direction.
    pub fn get(&self, direction: Direction) -> &str {
        match direction {
            Direction::North => &self.north,
            Direction::NorthEast => &self.north_east,
            Direction::East => &self.east,
            Direction::SouthEast => &self.south_east,
            Direction::South => &self.south,
            Direction::SouthWest => &self.south_west,
            Direction::West => &self.west,
            Direction::NorthWest => &self.north_west,
        }
    }

    /// Iterate `(direction, geohash)` pairs clockwise from north.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &str)> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |direction| (direction, self.get(direction)))
    }

    /// Copy into an ordered map keyed by direction.
    pub fn to_map(&self) -> BTreeMap<Direction, String> {
        self.iter()
            .map(|(direction, hash)| (direction, hash.to_string()))
            .collect()
    }
}

impl Index<Direction> for Neighbors {
    type Output = str;

    fn index(&self, direction: Direction) -> &str {
        self.get(direction)
    }
}

/// Neighbor of `geohash` in one direction, at the same precision.
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::{Direction, neighbor};
///
/// assert_eq!(neighbor("9", Direction::East)?, "d");
/// assert_eq!(neighbor("u", Direction::North)?, "h"); // across the pole
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn neighbor(geohash: &str, direction: Direction) -> Result<String> {
    validate_geohash(geohash)?;

    match direction {
        Direction::North => north(geohash),
        Direction::NorthEast => east(&north(geohash)?),
        Direction::East => east(geohash),
        Direction::SouthEast => east(&south(geohash)?),
        Direction::South => south(geohash),
        Direction::SouthWest => west(&south(geohash)?),
        Direction::West => west(geohash),
        Direction::NorthWest => west(&north(geohash)?),
    }
}

/// All eight neighbors of `geohash`.
///
/// North and south are computed once and the diagonals derived from them.
pub fn neighbors(geohash: &str) -> Result<Neighbors> {
    validate_geohash(geohash)?;

    let n = north(geohash)?;
    let s = south(geohash)?;

    Ok(Neighbors {
        north_east: east(&n)?,
        north_west: west(&n)?,
        south_east: east(&s)?,
        south_west: west(&s)?,
        east: east(geohash)?,
        west: west(geohash)?,
        north: n,
        south: s,
    })
}

fn precision(geohash: &str) -> usize {
    geohash.chars().count()
}

fn north(geohash: &str) -> Result<String> {
    let bbox = bounding_box(geohash)?;
    let (_, lon) = bbox.center();
    let mut lat = bbox.lat_max + bbox.lat_span() / 2.0;

    if lat > 90.0 {
        let wrapped = -(90.0 - (lat - 90.0));
        log::trace!("{geohash}: north crosses the pole, latitude {lat} -> {wrapped}");
        lat = wrapped;
    }

    encode(lat, lon, precision(geohash))
}

fn south(geohash: &str) -> Result<String> {
    let bbox = bounding_box(geohash)?;
    let (_, lon) = bbox.center();
    let mut lat = bbox.lat_min - bbox.lat_span() / 2.0;

    if lat < -90.0 {
        let wrapped = -((-90.0) + (-90.0 - lat));
        log::trace!("{geohash}: south crosses the pole, latitude {lat} -> {wrapped}");
        lat = wrapped;
    }

    encode(lat, lon, precision(geohash))
}

fn east(geohash: &str) -> Result<String> {
    let bbox = bounding_box(geohash)?;
    let (lat, _) = bbox.center();
    let mut lon = bbox.lon_max + bbox.lon_span() / 2.0;

    if lon > 180.0 {
        let mut wrapped = -180.0 + (lon - 180.0);
        if wrapped < -180.0 {
            wrapped = -180.0;
        }
        log::trace!("{geohash}: east crosses the antimeridian, longitude {lon} -> {wrapped}");
        lon = wrapped;
    }

    encode(lat, lon, precision(geohash))
}

fn west(geohash: &str) -> Result<String> {
    let bbox = bounding_box(geohash)?;
    let (lat, _) = bbox.center();
    let mut lon = bbox.lon_min - bbox.lon_span() / 2.0;

    if lon < -180.0 {
        let mut wrapped = 180.0 - (lon + 180.0);
        if wrapped > 180.0 {
            wrapped = 180.0;
        }
        log::trace!("{geohash}: west crosses the antimeridian, longitude {lon} -> {wrapped}");
        lon = wrapped;
    }

    encode(lat, lon, precision(geohash))
}
