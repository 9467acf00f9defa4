//! Cross-checks against the `geohash` crate.
//!
//! The two implementations disagree only for coordinates sitting exactly on
//! a bisection midpoint (this crate sends those to the lower half), so the
//! sampled coordinates are deliberately irregular.

use spatio_geohash::{bounding_box, encode};

fn sample_coordinates() -> impl Iterator<Item = (f64, f64)> {
    (0..500).map(|i| {
        let t = i as f64;
        let lat = ((t * 37.236_067_977_499_79) % 179.0) - 89.5;
        let lon = ((t * 71.414_213_562_373_1) % 359.0) - 179.5;
        (lat + 0.000_123_456_7, lon - 0.000_765_432_1)
    })
}

#[test]
fn test_encode_matches_geohash_crate() {
    for (lat, lon) in sample_coordinates() {
        for precision in 1..=9 {
            let ours = encode(lat, lon, precision).unwrap();
            let theirs = geohash::encode(geohash::Coord { x: lon, y: lat }, precision).unwrap();
            assert_eq!(ours, theirs, "({lat}, {lon}) at precision {precision}");
        }
    }
}

#[test]
fn test_bounding_box_matches_geohash_crate() {
    for (lat, lon) in sample_coordinates().step_by(5) {
        let hash = encode(lat, lon, 8).unwrap();
        let ours = bounding_box(&hash).unwrap();
        let theirs = geohash::decode_bbox(&hash).unwrap();

        assert!((ours.lat_min - theirs.min().y).abs() < 1e-9, "{hash}");
        assert!((ours.lat_max - theirs.max().y).abs() < 1e-9, "{hash}");
        assert!((ours.lon_min - theirs.min().x).abs() < 1e-9, "{hash}");
        assert!((ours.lon_max - theirs.max().x).abs() < 1e-9, "{hash}");
    }
}

#[test]
fn test_interior_neighbors_match_geohash_crate() {
    let hash = "u33dc0";
    let ours = spatio_geohash::neighbors(hash).unwrap();
    let theirs = geohash::neighbors(hash).unwrap();

    assert_eq!(ours.north, theirs.n);
    assert_eq!(ours.north_east, theirs.ne);
    assert_eq!(ours.east, theirs.e);
    assert_eq!(ours.south_east, theirs.se);
    assert_eq!(ours.south, theirs.s);
    assert_eq!(ours.south_west, theirs.sw);
    assert_eq!(ours.west, theirs.w);
    assert_eq!(ours.north_west, theirs.nw);
}
