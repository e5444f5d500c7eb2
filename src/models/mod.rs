//! Core data models for the distance engine.

pub mod country;
pub mod geometry;
pub mod point;

pub use country::{BorderSource, Country};
pub use geometry::{BoundaryGeometry, CoordinateTree, GeometryValue, RawGeometry, UNKNOWN_KIND};
pub use point::{validate_coordinates, BorderPoint, GeoPoint};
