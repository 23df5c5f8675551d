//! Command implementations

pub mod batch;
pub mod bounds;
pub mod contains;
pub mod distance;
pub mod geojson;
pub mod record;
pub mod stats;

use crate::config::Config;
use crate::output::Format;
use anyhow::{Context as _, Result};
use landbook_geo::{parse_boundary, Coordinate};
use std::io::Read;
use std::path::Path;

/// Shared state for every command
pub struct Context {
    pub config: Config,
    pub format: Format,
}

/// Read a whole input file, or stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read boundary from stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Read and parse a boundary (list of `[lat, lng]` pairs or GeoJSON polygon)
pub fn read_boundary(path: &Path) -> Result<Vec<Coordinate>> {
    let text = read_input(path)?;
    let boundary = parse_boundary(&text)
        .with_context(|| format!("Failed to parse boundary from {}", path.display()))?;

    tracing::debug!(points = boundary.len(), input = %path.display(), "Loaded boundary");
    Ok(boundary)
}

/// Parse a `LAT,LNG` argument
pub fn parse_lat_lng(value: &str) -> std::result::Result<Coordinate, String> {
    let (lat, lng) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LNG, got '{}'", value))?;

    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lng.trim()))?;

    Ok(Coordinate::new(lat, lng))
}
