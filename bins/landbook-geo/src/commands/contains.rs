//! Point-in-parcel test

use super::{read_boundary, Context};
use crate::output::{print_json, Format};
use anyhow::Result;
use landbook_geo::{point_in_polygon, Coordinate};
use std::path::Path;

pub fn run(ctx: &Context, input: &Path, point: Coordinate) -> Result<()> {
    let boundary = read_boundary(input)?;
    let inside = point_in_polygon(&point, &boundary);

    match ctx.format {
        Format::Json => print_json(&serde_json::json!({
            "point": point,
            "inside": inside,
        })),
        Format::Text => {
            println!("{}", if inside { "inside" } else { "outside" });
            Ok(())
        }
    }
}
