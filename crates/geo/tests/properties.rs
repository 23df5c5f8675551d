//! Property tests for the geometry engine.

use landbook_geo::{
    expand_bounds, from_geojson, haversine_distance_meters, polygon_area, polygon_bounds,
    polygon_centroid, polygon_perimeter, to_geojson, BoundingBox, Coordinate,
};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0..=90.0f64, -180.0..=180.0f64).prop_map(|(lat, lng)| Coordinate::new(lat, lng))
}

/// Parcel-sized boundaries: 3 to 24 vertices within ~10 km of an anchor
/// that stays clear of the poles and the antimeridian.
fn parcel_boundary() -> impl Strategy<Value = Vec<Coordinate>> {
    (-70.0..70.0f64, -170.0..170.0f64).prop_flat_map(|(lat, lng)| {
        prop::collection::vec((-0.1..0.1f64, -0.1..0.1f64), 3..24).prop_map(move |offsets| {
            offsets
                .into_iter()
                .map(|(dlat, dlng)| Coordinate::new(lat + dlat, lng + dlng))
                .collect()
        })
    })
}

proptest! {
    #[test]
    fn area_and_perimeter_are_non_negative(boundary in parcel_boundary()) {
        prop_assert!(polygon_area(&boundary) >= 0.0);
        prop_assert!(polygon_perimeter(&boundary) >= 0.0);
    }

    #[test]
    fn haversine_is_symmetric_and_non_negative(a in coordinate(), b in coordinate()) {
        let ab = haversine_distance_meters(&a, &b);
        prop_assert!(ab >= 0.0);
        prop_assert_eq!(ab, haversine_distance_meters(&b, &a));
    }

    #[test]
    fn geojson_round_trip_preserves_vertices(boundary in parcel_boundary()) {
        prop_assume!(boundary.first() != boundary.last());

        let feature = to_geojson(&boundary).expect("at least 3 points");
        let value = serde_json::to_value(&feature).unwrap();
        prop_assert_eq!(from_geojson(&value), boundary);
    }

    #[test]
    fn geojson_ring_is_closed_lng_lat(boundary in parcel_boundary()) {
        let feature = to_geojson(&boundary).expect("at least 3 points");
        let ring = &feature.geometry.coordinates[0];
        prop_assert_eq!(ring.first(), ring.last());
        prop_assert_eq!(ring[0], [boundary[0].longitude, boundary[0].latitude]);
    }

    #[test]
    fn bounds_contain_every_vertex(boundary in parcel_boundary()) {
        let bbox = polygon_bounds(&boundary);
        prop_assert!(bbox.south <= bbox.north);
        prop_assert!(bbox.west <= bbox.east);
        for c in &boundary {
            prop_assert!(bbox.contains(c));
        }
    }

    #[test]
    fn expand_by_zero_is_identity(
        south in -90.0..90.0f64,
        west in -180.0..180.0f64,
        height in 0.0..10.0f64,
        width in 0.0..10.0f64,
    ) {
        let bbox = BoundingBox::new(south, west, south + height, west + width);
        prop_assert_eq!(expand_bounds(&bbox, 0.0), bbox);
    }

    #[test]
    fn expanded_bounds_enclose_original(boundary in parcel_boundary(), factor in 0.0..2.0f64) {
        let bbox = polygon_bounds(&boundary);
        let padded = expand_bounds(&bbox, factor);
        prop_assert!(padded.south <= bbox.south && padded.north >= bbox.north);
        prop_assert!(padded.west <= bbox.west && padded.east >= bbox.east);
    }

    #[test]
    fn area_ignores_winding(boundary in parcel_boundary()) {
        let mut reversed = boundary.clone();
        reversed.reverse();
        let forward = polygon_area(&boundary);
        let backward = polygon_area(&reversed);
        prop_assert!((forward - backward).abs() <= 1e-3 * forward.max(1.0));
    }
}

#[test]
fn end_to_end_parcel() {
    let boundary = [
        Coordinate::new(37.0, -8.0),
        Coordinate::new(37.001, -8.0),
        Coordinate::new(37.001, -8.001),
        Coordinate::new(37.0, -8.001),
    ];

    assert_eq!(polygon_bounds(&boundary), BoundingBox::new(37.0, -8.001, 37.001, -8.0));

    let center = polygon_centroid(&boundary);
    assert!((center.latitude - 37.0005).abs() < 1e-9);
    assert!((center.longitude - -8.0005).abs() < 1e-9);

    assert!(polygon_area(&boundary) > 0.0);
    assert!(polygon_perimeter(&boundary) > 0.0);

    let feature = to_geojson(&boundary).unwrap();
    let ring = &feature.geometry.coordinates[0];
    assert_eq!(ring.len(), 5);
    assert_eq!(ring[0], [-8.0, 37.0]);
    assert_eq!(ring[4], [-8.0, 37.0]);
}

#[test]
fn hectare_square_at_equator() {
    // 0.0009° is a little over 100 m at the equator.
    let d = 0.0009;
    let square = [
        Coordinate::new(0.0, 0.0),
        Coordinate::new(0.0, d),
        Coordinate::new(d, d),
        Coordinate::new(d, 0.0),
    ];
    let side = haversine_distance_meters(&square[0], &square[1]);
    let area = polygon_area(&square);

    assert!(((area - side * side) / (side * side)).abs() < 0.01);
    assert_eq!(landbook_geo::format_area(area), "1.00 ha");
}
