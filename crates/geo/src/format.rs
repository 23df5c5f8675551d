//! Human-readable area and distance labels.

use crate::Coordinate;

const SQM_PER_HECTARE: f64 = 10_000.0;
const HECTARES_PER_SQ_KM: f64 = 100.0;

/// Converts square meters to hectares.
#[inline]
pub fn sqm_to_hectares(sqm: f64) -> f64 {
    sqm / SQM_PER_HECTARE
}

/// Formats an area with the most readable unit.
///
/// * below 1 ha: whole square meters, e.g. `"9999 m²"`
/// * 1 ha up to 100 ha: hectares with 2 decimals, e.g. `"1.00 ha"`
/// * 100 ha (1 km²) and above: square kilometers with 1 decimal, e.g. `"1.0 km²"`
///
/// # Example
/// ```
/// use landbook_geo::format_area;
///
/// assert_eq!(format_area(9_999.0), "9999 m²");
/// assert_eq!(format_area(10_000.0), "1.00 ha");
/// assert_eq!(format_area(1_000_000.0), "1.0 km²");
/// ```
pub fn format_area(sqm: f64) -> String {
    let ha = sqm_to_hectares(sqm);
    if ha >= HECTARES_PER_SQ_KM {
        format!("{:.1} km²", round_half_up_to(ha / HECTARES_PER_SQ_KM, 1))
    } else if ha >= 1.0 {
        format!("{:.2} ha", round_half_up_to(ha, 2))
    } else {
        format!("{} m²", round_half_up(sqm))
    }
}

/// Formats a distance in meters, switching to kilometers at 1000 m.
///
/// # Example
/// ```
/// use landbook_geo::format_distance;
///
/// assert_eq!(format_distance(999.0), "999 m");
/// assert_eq!(format_distance(1_000.0), "1.0 km");
/// ```
pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.1} km", round_half_up_to(meters / 1000.0, 1))
    } else {
        format!("{} m", round_half_up(meters))
    }
}

/// Formats a coordinate as `"lat, lng"` with 5 decimals (about 1 m).
pub fn format_coordinate(coord: &Coordinate) -> String {
    format!("{:.5}, {:.5}", coord.latitude, coord.longitude)
}

/// Rounds halves toward positive infinity; `-0` is printed as `0`.
fn round_half_up(value: f64) -> f64 {
    let rounded = (value + 0.5).floor();
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// [`round_half_up`] at `decimals` places, so `{:.N}` never sees a tie
/// (plain `{:.N}` rounds exact ties to even: 1.25 would print as 1.2).
fn round_half_up_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    round_half_up(value * scale) / scale
}
