//! Batch parcel summaries with optional parallelism.
//!
//! Used when listing many stored parcels at once (directory views, exports),
//! where computing each summary independently is embarrassingly parallel.

use crate::{
    point_in_polygon, polygon_area, polygon_bounds, polygon_centroid, polygon_perimeter,
    BoundingBox, Coordinate,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Input parcel for batch processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParcelInput {
    /// Parcel ID
    pub id: String,
    /// Boundary as `[lat, lng]` pairs
    pub boundary: Vec<[f64; 2]>,
}

impl ParcelInput {
    fn coordinates(&self) -> Vec<Coordinate> {
        self.boundary.iter().copied().map(Coordinate::from).collect()
    }
}

/// Geometry summary for a single parcel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParcelSummary {
    /// The parcel ID
    pub id: String,
    /// Number of boundary vertices
    pub point_count: usize,
    /// Area in square meters (0 below 3 points)
    pub area: f64,
    /// Perimeter in meters (0 below 2 points)
    pub perimeter: f64,
    /// Vertex centroid
    pub center: Coordinate,
    /// Bounding box
    pub bounds: BoundingBox,
}

/// Summarizes every parcel, preserving input order.
///
/// # Example
/// ```
/// use landbook_geo::{summarize_parcels, ParcelInput};
///
/// let parcels = vec![
///     ParcelInput {
///         id: "horta".into(),
///         boundary: vec![[37.0, -8.0], [37.001, -8.0], [37.001, -8.001], [37.0, -8.001]],
///     },
///     ParcelInput { id: "pin".into(), boundary: vec![[37.5, -8.5]] },
/// ];
///
/// let summaries = summarize_parcels(&parcels);
/// assert_eq!(summaries.len(), 2);
/// assert!(summaries[0].area > 0.0);
/// assert_eq!(summaries[1].area, 0.0);
/// ```
pub fn summarize_parcels(parcels: &[ParcelInput]) -> Vec<ParcelSummary> {
    debug!(parcels = parcels.len(), "Summarizing parcels");

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        parcels.par_iter().map(summarize_single).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        parcels.iter().map(summarize_single).collect()
    }
}

/// Summarizes parcels and returns them sorted by area, largest first.
///
/// # Arguments
/// * `parcels` - Parcels to summarize
/// * `max_results` - Maximum number of summaries to return (None for all)
pub fn largest_parcels(parcels: &[ParcelInput], max_results: Option<usize>) -> Vec<ParcelSummary> {
    let mut results = summarize_parcels(parcels);

    // NaN areas compare as equal and keep their relative order
    results.sort_by(|a, b| {
        b.area.partial_cmp(&a.area).unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(max) = max_results {
        results.truncate(max);
    }

    results
}

/// IDs of the parcels whose boundary contains `point`, in input order.
pub fn parcels_containing(point: &Coordinate, parcels: &[ParcelInput]) -> Vec<String> {
    parcels
        .iter()
        .filter(|p| point_in_polygon(point, &p.coordinates()))
        .map(|p| p.id.clone())
        .collect()
}

#[inline]
fn summarize_single(parcel: &ParcelInput) -> ParcelSummary {
    let boundary = parcel.coordinates();

    ParcelSummary {
        id: parcel.id.clone(),
        point_count: boundary.len(),
        area: polygon_area(&boundary),
        perimeter: polygon_perimeter(&boundary),
        center: polygon_centroid(&boundary),
        bounds: polygon_bounds(&boundary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(id: &str, lat: f64, lng: f64, side: f64) -> ParcelInput {
        ParcelInput {
            id: id.to_string(),
            boundary: vec![
                [lat, lng],
                [lat + side, lng],
                [lat + side, lng + side],
                [lat, lng + side],
            ],
        }
    }

    fn create_test_parcels() -> Vec<ParcelInput> {
        vec![
            square("small", 37.0, -8.0, 0.001),
            square("large", 37.1, -8.1, 0.01),
            square("medium", 37.2, -8.2, 0.005),
            // Still being drawn
            ParcelInput {
                id: "draft".to_string(),
                boundary: vec![[37.3, -8.3], [37.31, -8.3]],
            },
        ]
    }

    #[test]
    fn test_summaries_keep_order() {
        let parcels = create_test_parcels();
        let results = summarize_parcels(&parcels);

        let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["small", "large", "medium", "draft"]);

        let draft = &results[3];
        assert_eq!(draft.point_count, 2);
        assert_eq!(draft.area, 0.0);
        assert!(draft.perimeter > 0.0);
    }

    #[test]
    fn test_summary_matches_single_calls() {
        let parcel = square("p", 37.0, -8.0, 0.001);
        let boundary = parcel.coordinates();
        let summary = &summarize_parcels(&[parcel])[0];

        assert_eq!(summary.area, polygon_area(&boundary));
        assert_eq!(summary.bounds, polygon_bounds(&boundary));
        assert_eq!(summary.center, polygon_centroid(&boundary));
    }

    #[test]
    fn test_largest_parcels() {
        let parcels = create_test_parcels();
        let results = largest_parcels(&parcels, None);

        for window in results.windows(2) {
            assert!(window[0].area >= window[1].area);
        }
        assert_eq!(results[0].id, "large");
    }

    #[test]
    fn test_max_results() {
        let parcels = create_test_parcels();
        let results = largest_parcels(&parcels, Some(2));

        assert_eq!(results.len(), 2);
        assert_eq!(results[1].id, "medium");
    }

    #[test]
    fn test_parcels_containing() {
        let parcels = create_test_parcels();

        let hits = parcels_containing(&Coordinate::new(37.105, -8.095), &parcels);
        assert_eq!(hits, vec!["large".to_string()]);

        assert!(parcels_containing(&Coordinate::new(0.0, 0.0), &parcels).is_empty());
    }
}
