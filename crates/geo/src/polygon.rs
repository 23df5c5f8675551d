//! Polygon measurements over a parcel boundary.
//!
//! A boundary is an ordered slice of coordinates describing a simple ring.
//! The ring is implicitly closed (the last vertex connects back to the first)
//! and may wind in either direction.

use crate::{haversine_distance_meters, BoundingBox, Coordinate, EARTH_RADIUS_M};

/// Calculates the area of a boundary in square meters.
///
/// Uses the spherical ring-area summation over consecutive vertex triples:
/// for each vertex `i` (indices wrapping around the ring) it accumulates
/// `(lng[i + 2] - lng[i]) * sin(lat[i + 1])` in radians, then scales the
/// absolute sum by `R² / 2`. The absolute value makes the result independent
/// of winding order.
///
/// Records written by the older web app used `(lng[i + 1] - lng[i]) *
/// sin(lat[i + 2])`, which agrees with this for triangles but gives about
/// half the true area for quadrilaterals. Compare against those stored
/// areas with that in mind.
///
/// This is accurate for parcels that are small relative to the Earth and
/// degrades for rings spanning a large part of a hemisphere.
///
/// Returns `0.0` for fewer than 3 points.
///
/// # Example
/// ```
/// use landbook_geo::{polygon_area, Coordinate};
///
/// let line = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)];
/// assert_eq!(polygon_area(&line), 0.0);
/// ```
pub fn polygon_area(boundary: &[Coordinate]) -> f64 {
    let n = boundary.len();
    if n < 3 {
        return 0.0;
    }

    let total: f64 = (0..n)
        .map(|i| {
            let lower = &boundary[i];
            let middle = &boundary[(i + 1) % n];
            let upper = &boundary[(i + 2) % n];
            (upper.longitude - lower.longitude).to_radians() * middle.latitude.to_radians().sin()
        })
        .sum();

    (total * EARTH_RADIUS_M * EARTH_RADIUS_M / 2.0).abs()
}

/// Calculates the perimeter of a boundary in meters.
///
/// The closing edge from the last vertex back to the first is always
/// included, so callers never need to repeat the first point.
///
/// Returns `0.0` for fewer than 2 points.
pub fn polygon_perimeter(boundary: &[Coordinate]) -> f64 {
    let n = boundary.len();
    if n < 2 {
        return 0.0;
    }

    (0..n)
        .map(|i| haversine_distance_meters(&boundary[i], &boundary[(i + 1) % n]))
        .sum()
}

/// Calculates the vertex centroid of a boundary.
///
/// This is the arithmetic mean of the vertices, not the area-weighted
/// centroid of the enclosed region. It is biased toward densely sampled
/// sides of irregular shapes, which is acceptable for centering a map or
/// picking a reverse-geocoding point.
///
/// Returns `(0, 0)` for an empty boundary.
pub fn polygon_centroid(boundary: &[Coordinate]) -> Coordinate {
    if boundary.is_empty() {
        return Coordinate::new(0.0, 0.0);
    }

    let n = boundary.len() as f64;
    let (lat_sum, lng_sum) = boundary
        .iter()
        .fold((0.0, 0.0), |(lat, lng), c| (lat + c.latitude, lng + c.longitude));

    Coordinate::new(lat_sum / n, lng_sum / n)
}

/// Calculates the axis-aligned bounding box of a boundary.
///
/// Longitude wraparound at ±180° is not handled: a ring crossing the
/// antimeridian gets a box spanning nearly the whole globe.
///
/// Returns `(0, 0, 0, 0)` for an empty boundary.
pub fn polygon_bounds(boundary: &[Coordinate]) -> BoundingBox {
    if boundary.is_empty() {
        return BoundingBox::default();
    }

    let mut bbox = BoundingBox::new(
        f64::INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
    );
    for c in boundary {
        if c.latitude < bbox.south {
            bbox.south = c.latitude;
        }
        if c.latitude > bbox.north {
            bbox.north = c.latitude;
        }
        if c.longitude < bbox.west {
            bbox.west = c.longitude;
        }
        if c.longitude > bbox.east {
            bbox.east = c.longitude;
        }
    }
    bbox
}

/// Tests whether `point` lies inside `boundary` using even-odd ray casting.
///
/// A horizontal ray is cast from the point; every boundary edge it crosses
/// toggles the result. Points exactly on an edge or vertex get whatever the
/// crossing test yields.
///
/// Boundaries with fewer than 3 points never contain anything.
pub fn point_in_polygon(point: &Coordinate, boundary: &[Coordinate]) -> bool {
    let (y, x) = (point.latitude, point.longitude);
    let n = boundary.len();
    let mut inside = false;

    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let (yi, xi) = (boundary[i].latitude, boundary[i].longitude);
        let (yj, xj) = (boundary[j].latitude, boundary[j].longitude);

        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parcel() -> Vec<Coordinate> {
        vec![
            Coordinate::new(37.0, -8.0),
            Coordinate::new(37.001, -8.0),
            Coordinate::new(37.001, -8.001),
            Coordinate::new(37.0, -8.001),
        ]
    }

    /// Square with sides of roughly 100 m sitting on the equator.
    fn equator_square() -> Vec<Coordinate> {
        let d = 0.0009;
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(d, 0.0),
            Coordinate::new(d, d),
            Coordinate::new(0.0, d),
        ]
    }

    #[test]
    fn test_degenerate_area() {
        let p = Coordinate::new(37.0, -8.0);
        let q = Coordinate::new(37.1, -8.1);
        assert_eq!(polygon_area(&[]), 0.0);
        assert_eq!(polygon_area(&[p]), 0.0);
        assert_eq!(polygon_area(&[p, q]), 0.0);
    }

    #[test]
    fn test_degenerate_perimeter() {
        assert_eq!(polygon_perimeter(&[]), 0.0);
        assert_eq!(polygon_perimeter(&[Coordinate::new(37.0, -8.0)]), 0.0);
    }

    #[test]
    fn test_two_point_perimeter_is_out_and_back() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 0.001);
        let leg = haversine_distance_meters(&a, &b);
        assert!((polygon_perimeter(&[a, b]) - 2.0 * leg).abs() < 1e-9);
    }

    #[test]
    fn test_equator_square_area() {
        let square = equator_square();
        let side = haversine_distance_meters(&square[0], &square[1]);
        let area = polygon_area(&square);
        let expected = side * side;
        assert!(
            ((area - expected) / expected).abs() < 0.01,
            "area {} vs expected {}",
            area,
            expected
        );
    }

    #[test]
    fn test_area_ignores_winding() {
        let forward = parcel();
        let mut backward = forward.clone();
        backward.reverse();
        assert!((polygon_area(&forward) - polygon_area(&backward)).abs() < 1e-6);
    }

    #[test]
    fn test_triangle_area() {
        let d = 0.0009;
        let triangle = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(d, 0.0),
            Coordinate::new(0.0, d),
        ];
        let half_square = polygon_area(&equator_square()) / 2.0;
        let area = polygon_area(&triangle);
        assert!(((area - half_square) / half_square).abs() < 0.01);
    }

    #[test]
    fn test_area_nan_propagates() {
        let mut boundary = parcel();
        boundary[1].latitude = f64::NAN;
        assert!(polygon_area(&boundary).is_nan());
    }

    #[test]
    fn test_perimeter_closes_ring() {
        let square = equator_square();
        let side = haversine_distance_meters(&square[0], &square[1]);
        let perimeter = polygon_perimeter(&square);
        assert!(((perimeter - 4.0 * side) / (4.0 * side)).abs() < 0.001);
    }

    #[test]
    fn test_centroid_empty() {
        assert_eq!(polygon_centroid(&[]), Coordinate::new(0.0, 0.0));
    }

    #[test]
    fn test_centroid_is_vertex_mean() {
        let c = polygon_centroid(&parcel());
        assert!((c.latitude - 37.0005).abs() < 1e-9);
        assert!((c.longitude - -8.0005).abs() < 1e-9);

        // Extra vertices on one side pull the vertex mean toward that side.
        let lopsided = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(0.0, 2.0),
            Coordinate::new(0.0, 3.0),
            Coordinate::new(4.0, 3.0),
            Coordinate::new(4.0, 0.0),
        ];
        assert!(polygon_centroid(&lopsided).latitude < 2.0);
    }

    #[test]
    fn test_bounds_empty() {
        assert_eq!(polygon_bounds(&[]), BoundingBox::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_bounds_parcel() {
        let bbox = polygon_bounds(&parcel());
        assert_eq!(bbox, BoundingBox::new(37.0, -8.001, 37.001, -8.0));
    }

    #[test]
    fn test_bounds_single_point() {
        let bbox = polygon_bounds(&[Coordinate::new(37.0, -8.0)]);
        assert_eq!(bbox, BoundingBox::new(37.0, -8.0, 37.0, -8.0));
    }

    #[test]
    fn test_point_in_polygon() {
        let square = parcel();
        assert!(point_in_polygon(&polygon_centroid(&square), &square));
        assert!(!point_in_polygon(&Coordinate::new(38.0, -9.0), &square));
        assert!(!point_in_polygon(&Coordinate::new(37.0005, -7.9), &square));
    }

    #[test]
    fn test_point_in_concave_polygon() {
        // U shape opening to the north.
        let u = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 3.0),
            Coordinate::new(3.0, 3.0),
            Coordinate::new(3.0, 2.0),
            Coordinate::new(1.0, 2.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(3.0, 1.0),
            Coordinate::new(3.0, 0.0),
        ];
        assert!(point_in_polygon(&Coordinate::new(0.5, 1.5), &u));
        assert!(point_in_polygon(&Coordinate::new(2.0, 0.5), &u));
        assert!(!point_in_polygon(&Coordinate::new(2.0, 1.5), &u));
    }

    #[test]
    fn test_point_in_degenerate_polygon() {
        let p = Coordinate::new(0.0, 0.0);
        assert!(!point_in_polygon(&p, &[]));
        assert!(!point_in_polygon(&p, &[Coordinate::new(0.0, 0.0)]));
        assert!(!point_in_polygon(
            &p,
            &[Coordinate::new(-1.0, -1.0), Coordinate::new(1.0, 1.0)]
        ));
    }
}
