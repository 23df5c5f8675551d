//! Haversine distance calculation.
//!
//! Great-circle distance on a sphere of fixed radius. The same radius is used
//! for polygon area, so all lengths and areas in this crate are consistent
//! with each other.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// # Example
/// ```
/// use landbook_geo::{haversine_distance, Coordinate};
///
/// let lisbon = Coordinate::new(38.7223, -9.1393);
/// let odemira = Coordinate::new(37.5967, -8.6400);
///
/// let distance = haversine_distance(&lisbon, &odemira);
/// assert!((distance - 132.0).abs() < 5.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Calculates the great-circle distance between two coordinates in meters.
///
/// Always non-negative and symmetric in its arguments.
#[inline]
pub fn haversine_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_M)
}

#[inline]
fn haversine_distance_with_radius(from: &Coordinate, to: &Coordinate, radius: f64) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISBON: Coordinate = Coordinate { latitude: 38.7223, longitude: -9.1393 };
    const ODEMIRA: Coordinate = Coordinate { latitude: 37.5967, longitude: -8.6400 };
    const BERLIN: Coordinate = Coordinate { latitude: 52.5200, longitude: 13.4050 };
    const PARIS: Coordinate = Coordinate { latitude: 48.8566, longitude: 2.3522 };

    #[test]
    fn test_berlin_to_paris() {
        let distance = haversine_distance(&BERLIN, &PARIS);
        // Expected: ~878 km
        assert!((distance - 878.0).abs() < 5.0, "Berlin-Paris: {}", distance);
    }

    #[test]
    fn test_same_point_zero_distance() {
        assert_eq!(haversine_distance_meters(&ODEMIRA, &ODEMIRA), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let d1 = haversine_distance_meters(&LISBON, &ODEMIRA);
        let d2 = haversine_distance_meters(&ODEMIRA, &LISBON);
        assert_eq!(d1, d2);
    }

    #[test]
    fn test_meters_conversion() {
        let km = haversine_distance(&BERLIN, &PARIS);
        let meters = haversine_distance_meters(&BERLIN, &PARIS);
        assert!((meters - km * 1000.0).abs() < 1.0);
    }

    #[test]
    fn test_one_millidegree_of_latitude() {
        let a = Coordinate::new(37.0, -8.0);
        let b = Coordinate::new(37.001, -8.0);
        // 0.001° of arc on a 6371 km sphere
        let expected = 0.001_f64.to_radians() * EARTH_RADIUS_M;
        assert!((haversine_distance_meters(&a, &b) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_antipodal_points() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((haversine_distance(&a, &b) - half_circumference).abs() < 1e-6);
    }
}
