//! Containment and boundary distance for precise country geometry.

use geo::{Contains, LineString, Polygon};

use crate::distance::point_to_segment_km;
use crate::models::{BorderPoint, GeoPoint};

/// Geometry operations needed by the estimator's precise path.
///
/// Implementations must be pure. Distances are in kilometers and need not be
/// rounded; the estimator rounds the final result.
pub trait BoundaryMetric: Send + Sync {
    /// Whether the point lies inside the polygon (holes excluded)
    fn point_in_polygon(&self, point: GeoPoint, polygon: &Polygon<f64>) -> bool;

    /// Shortest distance from the point to any ring of the polygon
    fn distance_to_boundary(&self, point: GeoPoint, polygon: &Polygon<f64>) -> f64;
}

/// Default metric: planar containment in lon/lat, great-circle edge distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct SphericalBoundary;

impl SphericalBoundary {
    fn ring_distance(point: BorderPoint, ring: &LineString<f64>) -> f64 {
        ring.lines()
            .map(|line| {
                point_to_segment_km(
                    point,
                    BorderPoint::new(line.start.y, line.start.x),
                    BorderPoint::new(line.end.y, line.end.x),
                )
            })
            .fold(f64::INFINITY, f64::min)
    }
}

impl BoundaryMetric for SphericalBoundary {
    fn point_in_polygon(&self, point: GeoPoint, polygon: &Polygon<f64>) -> bool {
        polygon.contains(&point.to_geo())
    }

    fn distance_to_boundary(&self, point: GeoPoint, polygon: &Polygon<f64>) -> f64 {
        let point = BorderPoint::from(point);
        std::iter::once(polygon.exterior())
            .chain(polygon.interiors())
            .map(|ring| Self::ring_distance(point, ring))
            .fold(f64::INFINITY, f64::min)
    }
}
