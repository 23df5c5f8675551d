//! Summaries for many parcels at once

use super::{read_input, Context};
use crate::output::{print_json, Format, Status};
use anyhow::{Context as _, Result};
use landbook_geo::batch::{largest_parcels, ParcelInput};
use landbook_geo::{format_area, format_distance, summarize_parcels};
use std::path::Path;

pub fn run(ctx: &Context, input: &Path, largest: Option<usize>) -> Result<()> {
    let text = read_input(input)?;
    let parcels: Vec<ParcelInput> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse parcel list from {}", input.display()))?;

    let summaries = match largest {
        Some(n) => largest_parcels(&parcels, Some(n)),
        None => summarize_parcels(&parcels),
    };

    match ctx.format {
        Format::Json => print_json(&summaries),
        Format::Text => {
            Status::header(&format!("{} parcels", summaries.len()));
            for s in &summaries {
                println!(
                    "{:<20} {:>4} pts  {:>12}  {:>10}",
                    s.id,
                    s.point_count,
                    format_area(s.area),
                    format_distance(s.perimeter)
                );
            }

            let drafts = summaries.iter().filter(|s| s.point_count < 3).count();
            if drafts > 0 {
                Status::warning(&format!("{} parcels have fewer than 3 points", drafts));
            }
            Ok(())
        }
    }
}
