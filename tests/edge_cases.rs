use spatio_geohash::{
    Direction, GeohashError, bounding_box, decode, encode, neighbor, neighbors, parent, subhashes,
};
use std::thread;

/// Test 1: Domain corners and edges encode without error
#[test]
fn test_extreme_coordinates() {
    let corners = [
        (90.0, 180.0),
        (90.0, -180.0),
        (-90.0, 180.0),
        (-90.0, -180.0),
        (0.0, 180.0),
        (0.0, -180.0),
        (90.0, 0.0),
        (-90.0, 0.0),
    ];

    for (lat, lon) in corners {
        for precision in 1..=12 {
            let hash = encode(lat, lon, precision)
                .unwrap_or_else(|e| panic!("({lat}, {lon}) at {precision}: {e}"));
            assert!(bounding_box(&hash).unwrap().contains(lat, lon));
        }
    }
}

/// Test 2: Non-finite input is a validation error, not a panic
#[test]
fn test_non_finite_coordinates() {
    assert!(encode(f64::NAN, 0.0, 6).is_err());
    assert!(encode(0.0, f64::NAN, 6).is_err());
    assert!(encode(f64::INFINITY, 0.0, 6).is_err());
    assert!(encode(0.0, f64::NEG_INFINITY, 6).is_err());
}

/// Test 3: Malformed geohash strings are rejected by every operation
#[test]
fn test_malformed_geohashes() {
    let bad = ["", "u33dc07zzzzzz", "U33DC0", "u33dc0!", "aiol", "ü"];

    for hash in bad {
        assert!(bounding_box(hash).is_err(), "bounding_box({hash:?})");
        assert!(decode(hash).is_err(), "decode({hash:?})");
        assert!(subhashes(hash).is_err(), "subhashes({hash:?})");
        assert!(parent(hash).is_err(), "parent({hash:?})");
        assert!(neighbors(hash).is_err(), "neighbors({hash:?})");
        for direction in Direction::ALL {
            assert!(neighbor(hash, direction).is_err());
        }
    }
}

/// Test 4: The first failing condition is reported
#[test]
fn test_error_precedence() {
    assert_eq!(bounding_box(""), Err(GeohashError::EmptyGeohash));
    assert_eq!(
        bounding_box("aaaaaaaaaaaaa"),
        Err(GeohashError::GeohashTooLong(13))
    );
    assert_eq!(
        encode(100.0, 200.0, 0),
        Err(GeohashError::LatitudeOutOfRange(100.0))
    );
    assert_eq!(encode(10.0, 20.0, 0), Err(GeohashError::InvalidPrecision(0)));
}

/// Test 5: Pole crossing reflects latitude but keeps the longitude band.
///
/// Geodesically the cell across the north pole from "u" lies 180° away, but
/// the arithmetic neighbor stays in the same band. Pinned so that a change
/// to this behavior is deliberate.
#[test]
fn test_pole_wrap_keeps_longitude_band() {
    for hash in ["b", "c", "f", "g", "u", "v", "y", "z"] {
        let origin = bounding_box(hash).unwrap();
        assert_eq!(origin.lat_max, 90.0);

        let across = bounding_box(&neighbor(hash, Direction::North).unwrap()).unwrap();
        assert_eq!(across.lat_min, -90.0);
        assert_eq!(across.lon_min, origin.lon_min);
        assert_eq!(across.lon_max, origin.lon_max);
    }
}

/// Test 6: Crossing the antimeridian lands on the opposite edge
#[test]
fn test_antimeridian_crossing() {
    let east_edge = encode(10.0, 179.99, 4).unwrap();
    let west_edge = encode(10.0, -179.99, 4).unwrap();

    assert_eq!(neighbor(&east_edge, Direction::East).unwrap(), west_edge);
    assert_eq!(neighbor(&west_edge, Direction::West).unwrap(), east_edge);
}

/// Test 7: Parent of a single character hash is the empty string
#[test]
fn test_parent_of_root_cell() {
    for hash in ["0", "u", "z"] {
        let root = parent(hash).unwrap();
        assert!(root.is_empty());
        assert!(bounding_box(&root).is_err());
    }
}

/// Test 8: Operations are safe to call from many threads at once
#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let lat = -80.0 + i as f64 * 20.0;
                let hash = encode(lat, 13.409, 8).unwrap();
                let all = neighbors(&hash).unwrap();
                (hash, all)
            })
        })
        .collect();

    for handle in handles {
        let (hash, all) = handle.join().expect("worker panicked");
        assert_eq!(all, neighbors(&hash).unwrap());
    }
}
