//! Point-in-Polygon (PIP) and boundary distance for precise geometry.
//!
//! Resolves GeoJSON geometry into `geo` polygons and measures points against
//! them through the [`BoundaryMetric`] trait.

mod boundary;
mod geometry;

pub use boundary::{BoundaryMetric, SphericalBoundary};
pub use geometry::{resolve_multipolygon, resolve_polygon, resolve_ring};
