use geo::Rect;
use serde::{Deserialize, Serialize};

/// The latitude/longitude rectangle denoted by a geohash.
///
/// Bounds are kept in degrees. Latitude is the y axis and longitude the x
/// axis when converting to or from `geo::Rect`.
///
/// # Examples
///
/// ```
/// use spatio_geohash_types::bbox::BoundingBox;
///
/// let bbox = BoundingBox::new(0.0, 45.0, -135.0, -90.0);
/// assert_eq!(bbox.to_array(), [0.0, 45.0, -135.0, -90.0]);
/// assert!(bbox.contains(10.0, -100.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern edge in degrees
    pub lat_min: f64,
    /// Northern edge in degrees
    pub lat_max: f64,
    /// Western edge in degrees
    pub lon_min: f64,
    /// Eastern edge in degrees
    pub lon_max: f64,
}

impl BoundingBox {
    /// Create a bounding box from its four edges.
    ///
    /// # Arguments
    ///
    /// * `lat_min` - Southern edge
    /// * `lat_max` - Northern edge
    /// * `lon_min` - Western edge
    /// * `lon_max` - Eastern edge
    pub fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    /// The edges as `[lat_min, lat_max, lon_min, lon_max]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.lat_min, self.lat_max, self.lon_min, self.lon_max]
    }

    /// Centroid as `(latitude, longitude)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.lat_min + self.lat_max) / 2.0,
            (self.lon_min + self.lon_max) / 2.0,
        )
    }

    /// Height of the box in degrees of latitude.
    pub fn lat_span(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    /// Width of the box in degrees of longitude.
    pub fn lon_span(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    /// Check whether a coordinate lies inside the box, edges included.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.lat_min && lat <= self.lat_max && lon >= self.lon_min && lon <= self.lon_max
    }

    /// Check whether `other` lies entirely inside this box.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        other.lat_min >= self.lat_min
            && other.lat_max <= self.lat_max
            && other.lon_min >= self.lon_min
            && other.lon_max <= self.lon_max
    }

    /// Convert to a `geo::Rect` with x = longitude and y = latitude.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            geo::coord! { x: self.lon_min, y: self.lat_min },
            geo::coord! { x: self.lon_max, y: self.lat_max },
        )
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        Self::new(rect.min().y, rect.max().y, rect.min().x, rect.max().x)
    }
}

impl From<BoundingBox> for Rect {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_rect()
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_and_center() {
        let bbox = BoundingBox::new(45.0, 90.0, 0.0, 45.0);
        assert_eq!(bbox.lat_span(), 45.0);
        assert_eq!(bbox.lon_span(), 45.0);
        assert_eq!(bbox.center(), (67.5, 22.5));
    }

    #[test]
    fn test_contains_includes_edges() {
        let bbox = BoundingBox::new(0.0, 45.0, -135.0, -90.0);
        assert!(bbox.contains(0.0, -135.0));
        assert!(bbox.contains(45.0, -90.0));
        assert!(!bbox.contains(45.1, -100.0));
        assert!(!bbox.contains(10.0, -89.9));
    }

    #[test]
    fn test_contains_box() {
        let outer = BoundingBox::new(0.0, 45.0, -135.0, -90.0);
        let inner = BoundingBox::new(10.0, 20.0, -120.0, -100.0);
        assert!(outer.contains_box(&inner));
        assert!(!inner.contains_box(&outer));
    }

    #[test]
    fn test_rect_conversion_swaps_axes() {
        let bbox = BoundingBox::new(-10.0, 10.0, 100.0, 120.0);
        let rect = bbox.to_rect();
        assert_eq!(rect.min().x, 100.0);
        assert_eq!(rect.min().y, -10.0);
        assert_eq!(rect.max().x, 120.0);
        assert_eq!(rect.max().y, 10.0);
        assert_eq!(BoundingBox::from(rect), bbox);
    }

    #[test]
    fn test_serde_field_names() {
        let bbox = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&bbox).unwrap();
        assert_eq!(
            json,
            r#"{"lat_min":1.0,"lat_max":2.0,"lon_min":3.0,"lon_max":4.0}"#
        );
        let back: BoundingBox = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bbox);
    }
}
