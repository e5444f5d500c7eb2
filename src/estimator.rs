//! Distance from a point to a country's border.
//!
//! The border representation is chosen per country: precise geometry first,
//! then explicit border points, then a generated approximation (see
//! [`Country::border_source`]). Results are kilometers rounded to two
//! decimals. Being inside a country's polygon counts as distance 0.

use geo::Polygon;
use tracing::debug;

use crate::distance::{great_circle_km, min_distance_to_points, round_km};
use crate::models::{BorderSource, BoundaryGeometry, CoordinateTree, Country, GeoPoint};
use crate::pip::{BoundaryMetric, SphericalBoundary};

/// Border distance estimator, generic over the geometry backend.
#[derive(Debug, Clone, Default)]
pub struct BorderEstimator<M = SphericalBoundary> {
    metric: M,
}

impl BorderEstimator<SphericalBoundary> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: BoundaryMetric> BorderEstimator<M> {
    pub fn with_metric(metric: M) -> Self {
        Self { metric }
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Minimum distance in km from `point` to the country's border.
    pub fn distance(&self, point: GeoPoint, country: &Country) -> f64 {
        match country.border_source() {
            BorderSource::Geometry(geometry) => self.geometry_distance(point, geometry),
            BorderSource::Points(points) => {
                min_distance_to_points(point.lat(), point.lon(), points)
            }
            BorderSource::Approximated(points) => {
                min_distance_to_points(point.lat(), point.lon(), &points)
            }
        }
    }

    /// Distance to precise geometry, falling back to a vertex sweep
    pub fn geometry_distance(&self, point: GeoPoint, geometry: &BoundaryGeometry) -> f64 {
        match geometry {
            BoundaryGeometry::Polygon(polygon) => {
                self.polygons_distance(point, std::slice::from_ref(polygon))
            }
            BoundaryGeometry::MultiPolygon(multi) => self.polygons_distance(point, &multi.0),
            BoundaryGeometry::Unresolved { kind, coordinates } => {
                debug!("Sweeping vertices of unresolved {} geometry", kind);
                vertex_sweep(point, coordinates)
            }
        }
    }

    fn polygons_distance(&self, point: GeoPoint, polygons: &[Polygon<f64>]) -> f64 {
        if polygons
            .iter()
            .any(|polygon| self.metric.point_in_polygon(point, polygon))
        {
            return 0.0;
        }

        let nearest = polygons
            .iter()
            .map(|polygon| self.metric.distance_to_boundary(point, polygon))
            .fold(f64::INFINITY, f64::min);

        round_km(nearest)
    }
}

/// Minimum distance to any vertex of a coordinate tree.
///
/// A tree without usable positions yields 0.
pub fn vertex_sweep(point: GeoPoint, coordinates: &CoordinateTree) -> f64 {
    let nearest = coordinates
        .positions()
        .map(|p| great_circle_km(point.lat(), point.lon(), p.lat, p.lng))
        .reduce(f64::min);

    nearest.unwrap_or_else(|| {
        debug!("No coordinates found in geometry, reporting 0 km");
        0.0
    })
}

/// Distance from a point to a country's border using the default metric.
pub fn distance_to_country_border(point: GeoPoint, country: &Country) -> f64 {
    BorderEstimator::new().distance(point, country)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::generate_border_points;
    use crate::models::BorderPoint;
    use geo::{polygon, MultiPolygon};

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn unit_square() -> Polygon<f64> {
        polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)]
    }

    /// Rough box around the contiguous United States
    fn contiguous_us() -> Polygon<f64> {
        polygon![
            (x: -124.7, y: 48.4),
            (x: -124.2, y: 32.5),
            (x: -97.4, y: 25.8),
            (x: -80.0, y: 25.0),
            (x: -67.0, y: 44.8),
            (x: -95.2, y: 49.0),
        ]
    }

    #[test]
    fn test_inside_polygon_is_zero() {
        let us = Country::new("United States", "US", 37.09, -95.71)
            .with_geometry(contiguous_us());
        assert_eq!(distance_to_country_border(point(40.7128, -74.0060), &us), 0.0);
        assert_eq!(distance_to_country_border(point(37.09, -95.71), &us), 0.0);
    }

    #[test]
    fn test_outside_polygon_uses_edges() {
        let square = polygon![
            (x: 0.0, y: 0.0),
            (x: 10.0, y: 0.0),
            (x: 10.0, y: 10.0),
            (x: 0.0, y: 10.0),
        ];
        let country = Country::new("Squareland", "SQ", 5.0, 5.0).with_geometry(square);

        let d = distance_to_country_border(point(-1.0, 5.0), &country);
        assert_eq!(d, great_circle_km(-1.0, 5.0, 0.0, 5.0));

        // Edge distance beats the nearest vertex
        let vertex = great_circle_km(-1.0, 5.0, 0.0, 0.0);
        assert!(d < vertex);
    }

    #[test]
    fn test_multipolygon_takes_nearest_part() {
        let a = unit_square();
        let b = polygon![
            (x: 20.0, y: 0.0),
            (x: 21.0, y: 0.0),
            (x: 21.0, y: 1.0),
            (x: 20.0, y: 1.0),
        ];
        let country = Country::new("Archipelago", "AR", 0.5, 10.0)
            .with_geometry(MultiPolygon::new(vec![a, b]));

        // Inside the second part
        assert_eq!(distance_to_country_border(point(0.5, 20.5), &country), 0.0);

        // Closer to the second part's western edge
        let d = distance_to_country_border(point(0.5, 18.0), &country);
        assert!((d - great_circle_km(0.5, 18.0, 0.5, 20.0)).abs() < 0.05);
    }

    #[test]
    fn test_geometry_beats_border_points() {
        let square = unit_square();
        let country = Country::new("Squareland", "SQ", 0.5, 0.5)
            .with_border_points(vec![BorderPoint::new(50.0, 50.0)])
            .with_geometry(square);

        assert_eq!(distance_to_country_border(point(0.5, 0.5), &country), 0.0);
    }

    #[test]
    fn test_explicit_points() {
        let country = Country::new("Dotland", "DT", 0.0, 0.0).with_border_points(vec![
            BorderPoint::new(10.0, 10.0),
            BorderPoint::new(0.0, 3.0),
        ]);

        let d = distance_to_country_border(point(0.0, 0.0), &country);
        assert_eq!(d, great_circle_km(0.0, 0.0, 0.0, 3.0));
    }

    #[test]
    fn test_point_at_center_without_geometry_is_zero() {
        let austria = Country::new("Austria", "AT", 47.516231, 14.550072);
        assert_eq!(
            distance_to_country_border(point(47.516231, 14.550072), &austria),
            0.0
        );
    }

    #[test]
    fn test_approximation_matches_generated_ring() {
        let chad = Country::new("Chad", "TD", 15.454166, 18.732207);
        let p = point(20.0, 30.0);
        let ring = generate_border_points(chad.latitude, chad.longitude, &chad.name);
        assert_eq!(
            distance_to_country_border(p, &chad),
            min_distance_to_points(p.lat(), p.lon(), &ring)
        );
    }

    #[test]
    fn test_unresolved_geometry_sweeps_vertices() {
        let geometry: BoundaryGeometry =
            serde_json::from_str(r#"{"type": "LineString", "coordinates": [[0, 0], [0, 10]]}"#)
                .unwrap();
        let country = Country::new("Lineland", "LL", 0.0, 5.0).with_geometry(geometry);

        // Midpoint of the line is not a vertex, so the sweep reports the vertex distance
        let d = distance_to_country_border(point(5.0, 0.0), &country);
        assert_eq!(d, great_circle_km(5.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_empty_geometry_reports_zero() {
        let geometry: BoundaryGeometry =
            serde_json::from_str(r#"{"type": "MultiPolygon", "coordinates": []}"#).unwrap();
        let country = Country::new("Nowhere", "NW", 10.0, 10.0).with_geometry(geometry);
        assert_eq!(distance_to_country_border(point(-40.0, 100.0), &country), 0.0);
    }

    #[test]
    fn test_custom_metric() {
        struct AlwaysInside;

        impl BoundaryMetric for AlwaysInside {
            fn point_in_polygon(&self, _: GeoPoint, _: &Polygon<f64>) -> bool {
                true
            }

            fn distance_to_boundary(&self, _: GeoPoint, _: &Polygon<f64>) -> f64 {
                unreachable!("inside check short-circuits")
            }
        }

        let square = unit_square();
        let country = Country::new("Squareland", "SQ", 0.5, 0.5).with_geometry(square);
        let estimator = BorderEstimator::with_metric(AlwaysInside);
        assert_eq!(estimator.distance(point(60.0, 60.0), &country), 0.0);
    }

    #[test]
    fn test_north_pole() {
        let pole = point(90.0, 0.0);
        let norway = Country::new("Norway", "NO", 60.472024, 8.468946);
        let d = distance_to_country_border(pole, &norway);
        assert!(d.is_finite() && d > 0.0);
    }
}
