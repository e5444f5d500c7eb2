//! Approximated borders for countries without geometry or explicit points.
//!
//! The border is modelled as a circle around the country's center with a
//! radius picked from its [`SizeTier`]. This is coarse: real borders are not
//! circles, so distances carry a systematic bias, and the ring is not wrapped
//! at the antimeridian. Good enough for ranking nearby countries.

mod tiers;

pub use tiers::{large_countries, medium_countries, SizeTier};

use crate::models::BorderPoint;

/// Number of samples on the ring (one every 22.5 degrees)
pub const RING_SAMPLES: usize = 16;

/// Kilometers per degree of latitude
const KM_PER_DEGREE: f64 = 111.0;

/// Generate the approximated border ring for a country.
///
/// Returns [`RING_SAMPLES`] points on the ring followed by the center itself.
pub fn generate_border_points(center_lat: f64, center_lng: f64, name: &str) -> Vec<BorderPoint> {
    let radius = SizeTier::for_country(name).radius_km();
    generate_border_points_with_radius(center_lat, center_lng, radius)
}

/// Generate a ring of samples at `radius_km` around the center, plus the center.
pub fn generate_border_points_with_radius(
    center_lat: f64,
    center_lng: f64,
    radius_km: f64,
) -> Vec<BorderPoint> {
    let step = 360.0 / RING_SAMPLES as f64;
    let lat_scale = radius_km / KM_PER_DEGREE;
    // Meridians converge away from the equator
    let lng_scale = radius_km / (KM_PER_DEGREE * center_lat.to_radians().cos());

    let mut points = Vec::with_capacity(RING_SAMPLES + 1);
    for i in 0..RING_SAMPLES {
        let angle = (i as f64 * step).to_radians();
        points.push(BorderPoint::new(
            center_lat + lat_scale * angle.cos(),
            center_lng + lng_scale * angle.sin(),
        ));
    }

    points.push(BorderPoint::new(center_lat, center_lng));
    points
}
