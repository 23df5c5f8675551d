//! Live parcel statistics

use super::{read_boundary, Context};
use crate::output::{print_json, Format, Status};
use anyhow::Result;
use landbook_geo::ParcelStats;
use std::path::Path;

pub fn run(ctx: &Context, input: &Path) -> Result<()> {
    let boundary = read_boundary(input)?;
    let stats = ParcelStats::from_boundary(&boundary);

    match ctx.format {
        Format::Json => print_json(&serde_json::json!({
            "point_count": stats.point_count,
            "area_sqm": stats.area_sqm,
            "hectares": stats.hectares(),
            "perimeter_m": stats.perimeter_m,
            "center": stats.center,
            "labels": {
                "area": stats.area_label(),
                "perimeter": stats.perimeter_label(),
                "center": stats.center_label(),
            },
        })),
        Format::Text => {
            Status::header("Parcel");
            Status::stat("Points", &stats.point_count.to_string());
            let area = match stats.hectares() {
                Some(ha) => format!("{} ({:.2} ha)", stats.area_label(), ha),
                None => stats.area_label(),
            };
            Status::stat("Area", &area);
            Status::stat("Perimeter", &stats.perimeter_label());
            Status::stat("Center", &stats.center_label());

            if stats.point_count < landbook_geo::parcel::MIN_PARCEL_POINTS {
                Status::warning("At least 3 points are required to describe a parcel");
            }
            Ok(())
        }
    }
}
