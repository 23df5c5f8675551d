//! Parcel record for storage

use super::read_boundary;
use crate::output::print_json;
use anyhow::{bail, Result};
use landbook_geo::parcel::{ParcelRecord, MIN_PARCEL_POINTS};
use std::path::Path;

/// Print the record a finalized parcel is stored as.
pub fn run(input: &Path, address: &str) -> Result<()> {
    let boundary = read_boundary(input)?;
    if boundary.len() < MIN_PARCEL_POINTS {
        bail!(
            "At least {} points are required to finalize a parcel (got {})",
            MIN_PARCEL_POINTS,
            boundary.len()
        );
    }

    print_json(&ParcelRecord::from_boundary(&boundary, address))
}
