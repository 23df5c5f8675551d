//! WASM bindings for the geo crate.
//!
//! These bindings let the drawing page call the geometry engine from
//! JavaScript. Boundaries cross the boundary as JSON strings in any format
//! [`parse_boundary`] accepts.

use crate::{
    format_area, format_distance, from_geojson, parse_boundary, point_in_polygon, to_geojson,
    Coordinate, ParcelStats,
};
use wasm_bindgen::prelude::*;

fn boundary_arg(boundary_json: &str) -> Result<Vec<Coordinate>, JsValue> {
    parse_boundary(boundary_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Live statistics for a boundary.
///
/// # Returns
/// JSON string of `{point_count, area_sqm, perimeter_m, center}`
#[wasm_bindgen]
pub fn parcel_stats(boundary_json: &str) -> Result<String, JsValue> {
    let boundary = boundary_arg(boundary_json)?;
    to_json(&ParcelStats::from_boundary(&boundary))
}

/// Convert a boundary to a GeoJSON Polygon feature.
///
/// # Returns
/// JSON string of the feature, or `null` for fewer than 3 points
#[wasm_bindgen]
pub fn boundary_to_geojson(boundary_json: &str) -> Result<String, JsValue> {
    let boundary = boundary_arg(boundary_json)?;
    to_json(&to_geojson(&boundary))
}

/// Convert a GeoJSON Polygon feature to a boundary.
///
/// # Returns
/// JSON string of `[lat, lng]` pairs (empty if the feature is not a polygon)
#[wasm_bindgen]
pub fn geojson_to_boundary(geojson_json: &str) -> Result<String, JsValue> {
    let value: serde_json::Value = serde_json::from_str(geojson_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let pairs: Vec<[f64; 2]> = from_geojson(&value).iter().map(Coordinate::to_lat_lng).collect();
    to_json(&pairs)
}

/// Check whether a point lies inside a boundary.
#[wasm_bindgen]
pub fn contains_point(lat: f64, lng: f64, boundary_json: &str) -> Result<bool, JsValue> {
    let boundary = boundary_arg(boundary_json)?;
    Ok(point_in_polygon(&Coordinate::new(lat, lng), &boundary))
}

/// Format an area in square meters.
#[wasm_bindgen(js_name = formatArea)]
pub fn format_area_js(sqm: f64) -> String {
    format_area(sqm)
}

/// Format a distance in meters.
#[wasm_bindgen(js_name = formatDistance)]
pub fn format_distance_js(meters: f64) -> String {
    format_distance(meters)
}
