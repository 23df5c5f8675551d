//! Geodetic polygon geometry for Landbook land parcels.
//!
//! This crate provides:
//! - Area, perimeter, centroid and bounding box of a parcel boundary
//! - Point-in-polygon testing (even-odd ray casting)
//! - Haversine distance on a fixed-radius sphere
//! - GeoJSON ring conversion and boundary parsing
//! - Human-scaled area/distance formatting
//! - Batch parcel summaries with optional parallelism
//! - WASM bindings for browser usage
//!
//! Every geometry function is total: degenerate input (an empty boundary, or
//! one with too few points for the requested quantity) yields a default value
//! instead of an error, so callers can refresh statistics while a boundary is
//! still being drawn.
//!
//! The math assumes a boundary that does not cross the antimeridian or
//! enclose a pole. Coordinates are not range-checked; out-of-range or NaN
//! input produces meaningless (but non-panicking) output.
//!
//! # Example
//!
//! ```
//! use landbook_geo::{format_area, polygon_area, polygon_centroid, Coordinate};
//!
//! let boundary = [
//!     Coordinate::new(37.0, -8.0),
//!     Coordinate::new(37.001, -8.0),
//!     Coordinate::new(37.001, -8.001),
//!     Coordinate::new(37.0, -8.001),
//! ];
//!
//! let area = polygon_area(&boundary);
//! assert!(area > 0.0);
//! assert_eq!(format_area(area), "9875 m²");
//!
//! let center = polygon_centroid(&boundary);
//! assert!((center.latitude - 37.0005).abs() < 1e-9);
//! ```

mod bounds;
mod error;
mod format;
mod haversine;
mod polygon;
pub mod batch;
pub mod geojson;
pub mod parcel;

#[cfg(feature = "wasm")]
mod wasm;

pub use batch::{summarize_parcels, ParcelInput, ParcelSummary};
pub use bounds::{expand_bounds, BoundingBox, DEFAULT_EXPAND_FACTOR};
pub use error::{GeoError, GeoErrorCode, Result};
pub use format::{format_area, format_coordinate, format_distance, sqm_to_hectares};
pub use geojson::{from_geojson, parse_boundary, to_geojson, PolygonFeature, PolygonGeometry};
pub use haversine::{haversine_distance, haversine_distance_meters, EARTH_RADIUS_KM, EARTH_RADIUS_M};
pub use parcel::{query_bounds, ParcelRecord, ParcelStats};
pub use polygon::{point_in_polygon, polygon_area, polygon_bounds, polygon_centroid, polygon_perimeter};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if the coordinate has valid values.
    ///
    /// The geometry functions never call this; it is offered to callers that
    /// want to validate before finalizing a boundary.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }

    /// The coordinate as a `[lat, lng]` pair, the order used for stored boundaries.
    #[inline]
    pub fn to_lat_lng(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self::new(lat, lng)
    }
}
