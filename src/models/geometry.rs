//! Boundary geometry types.
//!
//! Geometry arrives as GeoJSON (`{"type": ..., "coordinates": ...}`) and is
//! resolved into `geo` polygons when it is well formed. Anything else is kept
//! as a raw [`CoordinateTree`] so the estimator can still sweep its vertices.

use geo_types::{MultiPolygon, Polygon};
use serde::de::IgnoredAny;
use serde::Deserialize;

use super::BorderPoint;

/// Nested GeoJSON coordinate arrays.
///
/// A position is a flat array of numbers (`[lng, lat]`, optionally with
/// altitude). Rings, polygons and multipolygons are nested arrays of those.
/// Values that are neither become `Invalid` leaves instead of failing the
/// whole document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CoordinateTree {
    Position(Vec<f64>),
    Nested(Vec<CoordinateTree>),
    Invalid(IgnoredAny),
}

impl CoordinateTree {
    /// Walk every usable position in the tree.
    ///
    /// Positions with fewer than two numbers are skipped. The first number is
    /// the longitude, the second the latitude.
    pub fn positions(&self) -> Positions<'_> {
        Positions { stack: vec![self] }
    }
}

/// Depth-first iterator over the positions of a [`CoordinateTree`].
pub struct Positions<'a> {
    stack: Vec<&'a CoordinateTree>,
}

impl Iterator for Positions<'_> {
    type Item = BorderPoint;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                CoordinateTree::Position(values) if values.len() >= 2 => {
                    return Some(BorderPoint::new(values[1], values[0]));
                }
                CoordinateTree::Nested(children) => {
                    // Reverse so children come out in document order
                    self.stack.extend(children.iter().rev());
                }
                _ => {}
            }
        }
        None
    }
}

/// Geometry value as found on disk: an object, or anything else.
///
/// Values that are not geometry objects (strings, numbers, objects with a
/// non-string `type`) become `Other` instead of failing the whole document.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GeometryValue {
    Object(RawGeometry),
    Other(IgnoredAny),
}

/// GeoJSON geometry object.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGeometry {
    /// Missing or null when the source omits it
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub coordinates: Option<CoordinateTree>,

    /// Members of a GeometryCollection
    #[serde(default)]
    pub geometries: Vec<GeometryValue>,
}

impl RawGeometry {
    /// Type name, `"Unknown"` when missing
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or(UNKNOWN_KIND)
    }
}

/// Kind reported for geometry without a usable `type`
pub const UNKNOWN_KIND: &str = "Unknown";

/// Boundary of a country.
///
/// Deserializes from GeoJSON and never fails on shape: malformed polygons and
/// unsupported geometry types end up as [`BoundaryGeometry::Unresolved`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "GeometryValue")]
pub enum BoundaryGeometry {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
    /// Geometry that could not be turned into polygons.
    Unresolved {
        kind: String,
        coordinates: CoordinateTree,
    },
}

impl BoundaryGeometry {
    /// GeoJSON type name of this geometry
    pub fn kind(&self) -> &str {
        match self {
            BoundaryGeometry::Polygon(_) => "Polygon",
            BoundaryGeometry::MultiPolygon(_) => "MultiPolygon",
            BoundaryGeometry::Unresolved { kind, .. } => kind,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, BoundaryGeometry::Unresolved { .. })
    }
}

impl From<Polygon<f64>> for BoundaryGeometry {
    fn from(polygon: Polygon<f64>) -> Self {
        BoundaryGeometry::Polygon(polygon)
    }
}

impl From<MultiPolygon<f64>> for BoundaryGeometry {
    fn from(multi: MultiPolygon<f64>) -> Self {
        BoundaryGeometry::MultiPolygon(multi)
    }
}
