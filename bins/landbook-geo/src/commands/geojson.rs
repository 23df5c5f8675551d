//! GeoJSON conversion

use super::read_boundary;
use crate::output::print_json;
use anyhow::{bail, Result};
use landbook_geo::to_geojson;
use std::path::Path;

/// Print the boundary as a GeoJSON Feature; always JSON regardless of `--format`.
pub fn run(input: &Path) -> Result<()> {
    let boundary = read_boundary(input)?;

    match to_geojson(&boundary) {
        Some(feature) => print_json(&feature),
        None => bail!(
            "At least 3 points are required to form a polygon (got {})",
            boundary.len()
        ),
    }
}
