//! GeoJSON ring conversion.
//!
//! Boundaries in this crate are `(latitude, longitude)` and open (the first
//! point is not repeated). GeoJSON positions are `[longitude, latitude]` and
//! rings must be explicitly closed. The functions here translate between the
//! two conventions; the axis swap happens only at this boundary.
//!
//! Supports:
//! - Feature: `{"type": "Feature", "geometry": {"type": "Polygon", "coordinates": [[[lng, lat], ...]]}}`
//! - Bare geometry: `{"type": "Polygon", "coordinates": [...]}` (via [`parse_boundary`])
//! - Plain boundary lists: `[[lat, lng], ...]` (via [`parse_boundary`])

use crate::{Coordinate, GeoError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// A GeoJSON Feature holding a single-ring Polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonFeature {
    /// Always "Feature"
    #[serde(rename = "type")]
    pub feature_type: String,
    /// The polygon geometry
    pub geometry: PolygonGeometry,
    /// Free-form properties (empty when produced by [`to_geojson`])
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// GeoJSON Polygon geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonGeometry {
    /// Always "Polygon"
    #[serde(rename = "type")]
    pub geometry_type: String,
    /// Rings of `[longitude, latitude]` positions. Only the exterior ring
    /// (index 0) is ever produced or read.
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

impl PolygonFeature {
    /// Builds a feature from a boundary; see [`to_geojson`].
    pub fn from_boundary(boundary: &[Coordinate]) -> Option<Self> {
        if boundary.len() < 3 {
            return None;
        }

        let mut ring: Vec<[f64; 2]> = boundary
            .iter()
            .map(|c| [c.longitude, c.latitude])
            .collect();

        let first = ring[0];
        if ring[ring.len() - 1] != first {
            ring.push(first);
        }

        Some(Self {
            feature_type: "Feature".to_string(),
            geometry: PolygonGeometry {
                geometry_type: "Polygon".to_string(),
                coordinates: vec![ring],
            },
            properties: Map::new(),
        })
    }

    /// Converts the exterior ring back to an open `(lat, lng)` boundary.
    ///
    /// The last ring position is always dropped as the closing duplicate.
    pub fn to_boundary(&self) -> Vec<Coordinate> {
        let Some(ring) = self.geometry.coordinates.first() else {
            return Vec::new();
        };
        let open = &ring[..ring.len().saturating_sub(1)];

        open.iter().map(|&[lng, lat]| Coordinate::new(lat, lng)).collect()
    }

    /// Strictly parses a Polygon feature from a JSON value.
    ///
    /// Only `geometry.type` is checked; the feature's own `type` member is
    /// optional. Positions may carry extra ordinates (altitude), which are
    /// ignored. Interior rings are discarded.
    pub fn try_from_value(value: &Value) -> Result<Self> {
        let geometry = value
            .get("geometry")
            .filter(|g| g.is_object())
            .ok_or_else(|| GeoError::InvalidGeoJson("missing geometry object".into()))?;

        match geometry.get("type").and_then(Value::as_str) {
            Some("Polygon") => {}
            Some(other) => {
                return Err(GeoError::InvalidGeoJson(format!(
                    "expected Polygon geometry, got {}",
                    other
                )))
            }
            None => return Err(GeoError::InvalidGeoJson("geometry has no type".into())),
        }

        let rings = geometry
            .get("coordinates")
            .and_then(Value::as_array)
            .ok_or_else(|| GeoError::InvalidGeoJson("coordinates is not an array".into()))?;

        let exterior = rings
            .first()
            .and_then(Value::as_array)
            .ok_or_else(|| GeoError::InvalidGeoJson("polygon has no exterior ring".into()))?;

        if rings.len() > 1 {
            debug!(interior_rings = rings.len() - 1, "Ignoring polygon holes");
        }

        let ring = exterior
            .iter()
            .enumerate()
            .map(|(i, position)| {
                parse_position(position).ok_or_else(|| {
                    GeoError::InvalidGeoJson(format!("position {} is not [lng, lat]", i))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let properties = value
            .get("properties")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        Ok(Self {
            feature_type: "Feature".to_string(),
            geometry: PolygonGeometry {
                geometry_type: "Polygon".to_string(),
                coordinates: vec![ring],
            },
            properties,
        })
    }
}

/// Converts a boundary to a GeoJSON Polygon feature.
///
/// Positions are emitted in GeoJSON `[longitude, latitude]` order, the
/// reverse of [`Coordinate`]'s `(latitude, longitude)`. The ring is closed by
/// repeating the first position unless the boundary already ends on it.
///
/// Returns `None` for fewer than 3 points.
///
/// # Example
/// ```
/// use landbook_geo::{to_geojson, Coordinate};
///
/// let boundary = [
///     Coordinate::new(37.0, -8.0),
///     Coordinate::new(37.001, -8.0),
///     Coordinate::new(37.001, -8.001),
/// ];
/// let feature = to_geojson(&boundary).unwrap();
/// let ring = &feature.geometry.coordinates[0];
/// assert_eq!(ring.len(), 4);
/// assert_eq!(ring[0], [-8.0, 37.0]);
/// assert_eq!(ring[3], ring[0]);
/// ```
pub fn to_geojson(boundary: &[Coordinate]) -> Option<PolygonFeature> {
    PolygonFeature::from_boundary(boundary)
}

/// Converts a GeoJSON Polygon feature back to a boundary.
///
/// Takes the exterior ring, drops its closing position and swaps each
/// `[lng, lat]` back to `(lat, lng)`. Anything that is not a feature with a
/// Polygon geometry yields an empty boundary.
///
/// # Example
/// ```
/// use landbook_geo::from_geojson;
/// use serde_json::json;
///
/// let feature = json!({
///     "type": "Feature",
///     "geometry": {
///         "type": "Polygon",
///         "coordinates": [[[-8.0, 37.0], [-8.0, 37.001], [-8.001, 37.001], [-8.0, 37.0]]]
///     },
///     "properties": {}
/// });
/// let boundary = from_geojson(&feature);
/// assert_eq!(boundary.len(), 3);
/// assert_eq!(boundary[1].latitude, 37.001);
///
/// assert!(from_geojson(&json!({"type": "Point"})).is_empty());
/// ```
pub fn from_geojson(value: &Value) -> Vec<Coordinate> {
    match PolygonFeature::try_from_value(value) {
        Ok(feature) => feature.to_boundary(),
        Err(e) => {
            debug!(error = %e, "Not a polygon feature, returning empty boundary");
            Vec::new()
        }
    }
}

/// Parses a boundary from JSON text.
///
/// Accepts, in order of precedence:
/// - an array of `[lat, lng]` pairs or `{"latitude", "longitude"}` objects
/// - a GeoJSON Feature with a Polygon geometry
/// - a bare GeoJSON Polygon geometry
///
/// Unlike [`from_geojson`] this reports why the input was rejected.
///
/// # Example
/// ```
/// use landbook_geo::parse_boundary;
///
/// let boundary = parse_boundary("[[37.0, -8.0], [37.001, -8.0], [37.001, -8.001]]").unwrap();
/// assert_eq!(boundary.len(), 3);
///
/// assert!(parse_boundary("\"POINT(1 2)\"").is_err());
/// ```
pub fn parse_boundary(input: &str) -> Result<Vec<Coordinate>> {
    let value: Value = serde_json::from_str(input)?;
    boundary_from_value(&value)
}

/// Parses a boundary from an already decoded JSON value; see [`parse_boundary`].
pub fn boundary_from_value(value: &Value) -> Result<Vec<Coordinate>> {
    match value {
        Value::Array(points) => {
            trace!(points = points.len(), "Parsing boundary list");
            points
                .iter()
                .enumerate()
                .map(|(i, point)| {
                    parse_lat_lng(point).ok_or_else(|| {
                        GeoError::InvalidBoundary(format!("point {} is not a [lat, lng] pair", i))
                    })
                })
                .collect()
        }
        Value::Object(map) if map.contains_key("geometry") => {
            PolygonFeature::try_from_value(value).map(|f| f.to_boundary())
        }
        Value::Object(map) if map.get("type").and_then(Value::as_str).is_some() => {
            let wrapped = serde_json::json!({ "geometry": value });
            PolygonFeature::try_from_value(&wrapped).map(|f| f.to_boundary())
        }
        _ => Err(GeoError::InvalidBoundary(
            "expected an array of [lat, lng] pairs or a GeoJSON Polygon".into(),
        )),
    }
}

/// Reads `[lng, lat, ...]` into `[lng, lat]`.
fn parse_position(value: &Value) -> Option<[f64; 2]> {
    let coords = value.as_array()?;
    if coords.len() < 2 {
        return None;
    }
    Some([coords[0].as_f64()?, coords[1].as_f64()?])
}

fn parse_lat_lng(value: &Value) -> Option<Coordinate> {
    if value.is_object() {
        return serde_json::from_value(value.clone()).ok();
    }

    let pair = value.as_array()?;
    if pair.len() != 2 {
        return None;
    }
    Some(Coordinate::new(pair[0].as_f64()?, pair[1].as_f64()?))
}
