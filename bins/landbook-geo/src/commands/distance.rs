//! Great-circle distance between two points

use super::Context;
use crate::output::{print_json, Format};
use anyhow::Result;
use landbook_geo::{format_distance, haversine_distance, haversine_distance_meters, Coordinate};

pub fn run(ctx: &Context, from: Coordinate, to: Coordinate) -> Result<()> {
    let meters = haversine_distance_meters(&from, &to);

    match ctx.format {
        Format::Json => print_json(&serde_json::json!({
            "from": from,
            "to": to,
            "meters": meters,
            "kilometers": haversine_distance(&from, &to),
            "label": format_distance(meters),
        })),
        Format::Text => {
            println!("{}", format_distance(meters));
            Ok(())
        }
    }
}
