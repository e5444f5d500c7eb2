//! Great-circle distance primitives.
//!
//! Everything here works on a sphere of radius [`EARTH_RADIUS_KM`] and takes
//! raw degrees. Callers are expected to pass coordinates that already went
//! through [`GeoPoint::new`](crate::models::GeoPoint::new); out-of-range values
//! produce defined but meaningless numbers rather than errors.

mod format;
mod segment;

pub use format::format_distance;
pub use segment::point_to_segment_km;

use crate::models::BorderPoint;

/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Round to 2 decimal places
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// Haversine distance in kilometers, unrounded.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Great-circle distance in kilometers, rounded to 2 decimals.
///
/// Inputs are degrees; latitude in [-90, 90] and longitude in [-180, 180]
/// is a precondition, not checked here.
pub fn great_circle_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    round_km(haversine_km(lat1, lon1, lat2, lon2))
}

/// Minimum great-circle distance from a point to any of the samples.
///
/// Returns `f64::INFINITY` for an empty sample set.
pub fn min_distance_to_points<'a, I>(lat: f64, lon: f64, samples: I) -> f64
where
    I: IntoIterator<Item = &'a BorderPoint>,
{
    samples
        .into_iter()
        .map(|p| great_circle_km(lat, lon, p.lat, p.lng))
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NYC: (f64, f64) = (40.7128, -74.0060);
    const LA: (f64, f64) = (34.0522, -118.2437);
    const LONDON: (f64, f64) = (51.5074, -0.1278);
    const PARIS: (f64, f64) = (48.8566, 2.3522);

    fn km(a: (f64, f64), b: (f64, f64)) -> f64 {
        great_circle_km(a.0, a.1, b.0, b.1)
    }

    #[test]
    fn test_same_point_is_zero() {
        for p in [NYC, LA, LONDON, (90.0, 0.0), (-90.0, 180.0), (0.0, 0.0)] {
            assert_eq!(km(p, p), 0.0);
        }
    }

    #[test]
    fn test_known_distances() {
        // NYC to LA is about 3,936 km
        assert!((km(NYC, LA) - 3936.0).abs() < 5.0);
        // London to Paris is about 344 km
        assert!((km(LONDON, PARIS) - 343.5).abs() < 2.0);
        // Quarter of the circumference from the equator to a pole
        let quarter = std::f64::consts::PI * EARTH_RADIUS_KM / 2.0;
        assert_eq!(km((0.0, 0.0), (90.0, 0.0)), round_km(quarter));
    }

    #[test]
    fn test_symmetry() {
        assert_eq!(km(NYC, LA), km(LA, NYC));
        assert_eq!(km(LONDON, PARIS), km(PARIS, LONDON));
        assert_eq!(km((90.0, 0.0), NYC), km(NYC, (90.0, 0.0)));
    }

    #[test]
    fn test_triangle_inequality() {
        let points = [NYC, LA, LONDON, PARIS, (-33.8688, 151.2093), (90.0, 0.0)];
        for a in points {
            for b in points {
                for c in points {
                    assert!(km(a, c) <= km(a, b) + km(b, c) + 0.02);
                }
            }
        }
    }

    #[test]
    fn test_rounded_to_two_decimals() {
        let d = km(NYC, LA);
        assert_eq!(d, (d * 100.0).round() / 100.0);
    }

    #[test]
    fn test_min_distance_to_points() {
        let samples = [
            BorderPoint::new(LA.0, LA.1),
            BorderPoint::new(NYC.0, NYC.1),
            BorderPoint::new(LONDON.0, LONDON.1),
        ];
        assert_eq!(min_distance_to_points(NYC.0, NYC.1, &samples), 0.0);
        assert_eq!(
            min_distance_to_points(PARIS.0, PARIS.1, &samples),
            km(PARIS, LONDON)
        );
        assert_eq!(min_distance_to_points(0.0, 0.0, &[]), f64::INFINITY);
    }
}
