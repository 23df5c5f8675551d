//! Axis-aligned bounding boxes in degrees.

use crate::Coordinate;
use serde::{Deserialize, Serialize};

/// Default padding for [`expand_bounds`]: 10% of the span on each side.
pub const DEFAULT_EXPAND_FACTOR: f64 = 0.1;

/// A latitude/longitude bounding box.
///
/// Assumes `west <= east`; boxes crossing the antimeridian are not represented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum latitude
    pub south: f64,
    /// Minimum longitude
    pub west: f64,
    /// Maximum latitude
    pub north: f64,
    /// Maximum longitude
    pub east: f64,
}

impl BoundingBox {
    /// Creates a box from its edges in `(south, west, north, east)` order.
    #[inline]
    pub const fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self { south, west, north, east }
    }

    /// Returns the box grown by `factor` times its span on every side.
    ///
    /// See [`expand_bounds`].
    #[inline]
    pub fn expand(&self, factor: f64) -> Self {
        expand_bounds(self, factor)
    }

    /// Returns true if the coordinate lies within the box, edges included.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.latitude >= self.south
            && coord.latitude <= self.north
            && coord.longitude >= self.west
            && coord.longitude <= self.east
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// Edges as `[south, west, north, east]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.south, self.west, self.north, self.east]
    }

    /// Edges as `[west, south, east, north]`, the order area-query REST
    /// endpoints (fire detections, occurrence searches) expect.
    #[inline]
    pub fn to_wsen(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([south, west, north, east]: [f64; 4]) -> Self {
        Self::new(south, west, north, east)
    }
}

/// Expands a bounding box by a fraction of its span.
///
/// Latitude padding is `(north - south) * factor` and longitude padding is
/// `(east - west) * factor`; each is applied to both sides. A factor of `0.0`
/// returns the box unchanged. A zero-span box (single point) stays a point.
///
/// # Example
/// ```
/// use landbook_geo::{expand_bounds, BoundingBox, DEFAULT_EXPAND_FACTOR};
///
/// let bbox = BoundingBox::new(37.0, -8.01, 37.01, -8.0);
/// let padded = expand_bounds(&bbox, DEFAULT_EXPAND_FACTOR);
/// assert!((padded.south - 36.999).abs() < 1e-9);
/// assert!((padded.east - -7.999).abs() < 1e-9);
/// ```
pub fn expand_bounds(bbox: &BoundingBox, factor: f64) -> BoundingBox {
    let lat_pad = (bbox.north - bbox.south) * factor;
    let lng_pad = (bbox.east - bbox.west) * factor;

    BoundingBox::new(
        bbox.south - lat_pad,
        bbox.west - lng_pad,
        bbox.north + lat_pad,
        bbox.east + lng_pad,
    )
}
