//! Parcel-level statistics and the record handed to storage.
//!
//! [`ParcelStats`] is what a drawing surface shows while the user is still
//! placing points; [`ParcelRecord`] is the finalized parcel with its derived
//! metrics, which storage keeps verbatim.

use crate::{
    expand_bounds, format_area, format_coordinate, format_distance, polygon_area, polygon_bounds,
    polygon_centroid, polygon_perimeter, sqm_to_hectares, BoundingBox, Coordinate,
};
use serde::{Deserialize, Serialize};

/// Minimum number of vertices for a parcel to have an area.
pub const MIN_PARCEL_POINTS: usize = 3;

/// Placeholder shown for statistics that are not available yet.
pub const UNAVAILABLE: &str = "—";

/// Live statistics for a boundary under construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParcelStats {
    /// Number of vertices placed so far
    pub point_count: usize,
    /// Area in square meters, once there are at least 3 points
    pub area_sqm: Option<f64>,
    /// Perimeter in meters, once there are at least 3 points
    pub perimeter_m: Option<f64>,
    /// Vertex centroid, once there are at least 3 points
    pub center: Option<Coordinate>,
}

impl ParcelStats {
    /// Computes statistics for the current boundary.
    ///
    /// # Example
    /// ```
    /// use landbook_geo::{Coordinate, ParcelStats};
    ///
    /// let drawing = [Coordinate::new(37.0, -8.0), Coordinate::new(37.001, -8.0)];
    /// let stats = ParcelStats::from_boundary(&drawing);
    /// assert_eq!(stats.point_count, 2);
    /// assert_eq!(stats.area_label(), "—");
    /// ```
    pub fn from_boundary(boundary: &[Coordinate]) -> Self {
        let point_count = boundary.len();
        if point_count < MIN_PARCEL_POINTS {
            return Self {
                point_count,
                area_sqm: None,
                perimeter_m: None,
                center: None,
            };
        }

        Self {
            point_count,
            area_sqm: Some(polygon_area(boundary)),
            perimeter_m: Some(polygon_perimeter(boundary)),
            center: Some(polygon_centroid(boundary)),
        }
    }

    /// Area in hectares, if known.
    pub fn hectares(&self) -> Option<f64> {
        self.area_sqm.map(sqm_to_hectares)
    }

    /// Formatted area, or `"—"`.
    pub fn area_label(&self) -> String {
        self.area_sqm
            .map(format_area)
            .unwrap_or_else(|| UNAVAILABLE.to_string())
    }

    /// Formatted perimeter, or `"—"`.
    pub fn perimeter_label(&self) -> String {
        self.perimeter_m
            .map(format_distance)
            .unwrap_or_else(|| UNAVAILABLE.to_string())
    }

    /// Formatted center, or `"—"`.
    pub fn center_label(&self) -> String {
        self.center
            .as_ref()
            .map(format_coordinate)
            .unwrap_or_else(|| UNAVAILABLE.to_string())
    }

    /// Whether the parcel may be finalized: the user has closed the ring and
    /// it has enough points to enclose an area.
    pub fn can_finalize(&self, closed: bool) -> bool {
        closed && self.point_count >= MIN_PARCEL_POINTS
    }
}

/// A finalized parcel as stored by the persistence layer.
///
/// Derived metrics are computed once at creation and stored as-is; readers
/// must not expect them to be recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelRecord {
    /// Boundary vertices as `[lat, lng]` pairs
    pub boundary: Vec<[f64; 2]>,
    /// Vertex centroid as `[lat, lng]`
    pub center: Option<[f64; 2]>,
    /// Area in square meters
    pub area: Option<f64>,
    /// Perimeter in meters
    pub perimeter: Option<f64>,
    /// Reverse-geocoded address, empty if unknown
    #[serde(default)]
    pub address: String,
}

impl ParcelRecord {
    /// Builds a record with metrics derived from `boundary`.
    ///
    /// Metrics are `None` for fewer than 3 points.
    pub fn from_boundary(boundary: &[Coordinate], address: impl Into<String>) -> Self {
        let stats = ParcelStats::from_boundary(boundary);
        Self {
            boundary: boundary.iter().map(Coordinate::to_lat_lng).collect(),
            center: stats.center.map(|c| c.to_lat_lng()),
            area: stats.area_sqm,
            perimeter: stats.perimeter_m,
            address: address.into(),
        }
    }

    /// The stored boundary as coordinates.
    pub fn boundary_coordinates(&self) -> Vec<Coordinate> {
        self.boundary.iter().copied().map(Coordinate::from).collect()
    }
}

/// Padded bounds used to parameterize area queries around a parcel.
///
/// Returns `None` for fewer than 3 points, where there is no parcel to query
/// around yet.
pub fn query_bounds(boundary: &[Coordinate], factor: f64) -> Option<BoundingBox> {
    if boundary.len() < MIN_PARCEL_POINTS {
        return None;
    }
    Some(expand_bounds(&polygon_bounds(boundary), factor))
}
