//! Error types for the geo crate.
//!
//! The geometry functions never fail. Errors only come from the strict
//! parsing entry points ([`crate::parse_boundary`],
//! [`crate::PolygonFeature::try_from_value`]).

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur while parsing boundaries.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Input is not a list of `[lat, lng]` pairs
    #[error("Invalid boundary: {0}")]
    InvalidBoundary(String),

    /// Input is not a GeoJSON Polygon
    #[error("Invalid GeoJSON: {0}")]
    InvalidGeoJson(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for integration with caller error reporting.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Invalid boundary list
    InvalidBoundary = 10001,
    /// Invalid GeoJSON polygon
    InvalidGeoJson = 10002,
    /// JSON parsing error
    JsonParsing = 10003,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidBoundary(_) => GeoErrorCode::InvalidBoundary,
            GeoError::InvalidGeoJson(_) => GeoErrorCode::InvalidGeoJson,
            GeoError::JsonError(_) => GeoErrorCode::JsonParsing,
        }
    }
}
