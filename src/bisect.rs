//! Interleaved interval bisection shared by encoding and decoding.
//!
//! Encoding asks the bisector which half a coordinate falls in and records
//! the answer as a bit. Decoding feeds recorded bits back in. Both walk the
//! same alternation (longitude on even bit indices, latitude on odd ones), so
//! a hash always decodes to the cell it was encoded from.

use spatio_geohash_types::bbox::BoundingBox;

/// A closed range of degrees narrowed one half at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Interval {
    pub(crate) min: f64,
    pub(crate) max: f64,
}

impl Interval {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Keep the upper half for `true`, the lower half for `false`.
    #[inline]
    fn narrow(&mut self, upper: bool) {
        let mid = self.mid();
        if upper {
            self.min = mid;
        } else {
            self.max = mid;
        }
    }

    /// Narrow toward `value` and report which half was kept.
    ///
    /// A value exactly on the midpoint goes to the lower half.
    #[inline]
    fn bisect(&mut self, value: f64) -> bool {
        let upper = value > self.mid();
        self.narrow(upper);
        upper
    }
}

/// Latitude/longitude intervals plus the global bit index.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bisector {
    lat: Interval,
    lon: Interval,
    bit: usize,
}

impl Bisector {
    pub(crate) const fn new() -> Self {
        Self {
            lat: Interval::new(-90.0, 90.0),
            lon: Interval::new(-180.0, 180.0),
            bit: 0,
        }
    }

    #[inline]
    fn on_longitude(&self) -> bool {
        self.bit % 2 == 0
    }

    /// Bisect the current axis toward the coordinate and return the bit.
    #[inline]
    pub(crate) fn push_coordinate(&mut self, lat: f64, lon: f64) -> bool {
        let upper = if self.on_longitude() {
            self.lon.bisect(lon)
        } else {
            self.lat.bisect(lat)
        };
        self.bit += 1;
        upper
    }

    /// Replay a previously emitted bit on the current axis.
    #[inline]
    pub(crate) fn push_bit(&mut self, upper: bool) {
        if self.on_longitude() {
            self.lon.narrow(upper);
        } else {
            self.lat.narrow(upper);
        }
        self.bit += 1;
    }

    pub(crate) fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.lat.min, self.lat.max, self.lon.min, self.lon.max)
    }
}
