//! Bounding boxes for a boundary

use super::{read_boundary, Context};
use crate::output::{degrees, print_json, Format, Status};
use anyhow::{bail, Result};
use landbook_geo::{polygon_bounds, query_bounds, BoundingBox};
use std::path::Path;

/// Print the bounding box, optionally padded.
///
/// `expand` is `None` without `--expand`, `Some(None)` for a bare `--expand`
/// (configured factor) and `Some(Some(f))` for an explicit factor.
pub fn run(ctx: &Context, input: &Path, expand: Option<Option<f64>>) -> Result<()> {
    let boundary = read_boundary(input)?;
    let mut bbox = polygon_bounds(&boundary);

    if let Some(factor) = expand {
        let factor = factor.unwrap_or(ctx.config.bounds.expand_factor);
        check_factor(factor)?;
        bbox = bbox.expand(factor);
    }

    match ctx.format {
        Format::Json => print_json(&bbox),
        Format::Text => {
            print_box(&bbox);
            Ok(())
        }
    }
}

/// Print padded bounds for external area queries in `west,south,east,north` order.
pub fn run_query(ctx: &Context, input: &Path, factor: Option<f64>) -> Result<()> {
    let boundary = read_boundary(input)?;
    let factor = factor.unwrap_or(ctx.config.bounds.query_factor);
    check_factor(factor)?;

    let Some(bbox) = query_bounds(&boundary, factor) else {
        bail!("At least 3 points are required to query around a parcel");
    };

    match ctx.format {
        Format::Json => print_json(&serde_json::json!({
            "factor": factor,
            "bounds": bbox,
            "wsen": bbox.to_wsen(),
        })),
        Format::Text => {
            let wsen: Vec<String> = bbox.to_wsen().iter().map(|v| v.to_string()).collect();
            println!("{}", wsen.join(","));
            Ok(())
        }
    }
}

fn check_factor(factor: f64) -> Result<()> {
    if !(factor >= 0.0) {
        bail!("Expansion factor must be a non-negative number, got {}", factor);
    }
    Ok(())
}

fn print_box(bbox: &BoundingBox) {
    Status::header("Bounds");
    Status::stat("South", &degrees(bbox.south));
    Status::stat("West", &degrees(bbox.west));
    Status::stat("North", &degrees(bbox.north));
    Status::stat("East", &degrees(bbox.east));
}
