//! Resolving GeoJSON coordinate trees into `geo` polygons.

use geo::{Coord, LineString, MultiPolygon, Polygon};
use tracing::debug;

use crate::models::{BoundaryGeometry, CoordinateTree, GeometryValue, RawGeometry, UNKNOWN_KIND};

impl From<GeometryValue> for BoundaryGeometry {
    fn from(value: GeometryValue) -> Self {
        match value {
            GeometryValue::Object(raw) => raw.into(),
            GeometryValue::Other(_) => {
                debug!("Geometry is not a GeoJSON object, keeping it empty");
                BoundaryGeometry::Unresolved {
                    kind: UNKNOWN_KIND.to_string(),
                    coordinates: CoordinateTree::Nested(Vec::new()),
                }
            }
        }
    }
}

impl From<RawGeometry> for BoundaryGeometry {
    fn from(raw: RawGeometry) -> Self {
        let resolved = match (raw.kind(), raw.coordinates.as_ref()) {
            ("Polygon", Some(tree)) => resolve_polygon(tree).map(BoundaryGeometry::Polygon),
            ("MultiPolygon", Some(tree)) => {
                resolve_multipolygon(tree).map(BoundaryGeometry::MultiPolygon)
            }
            _ => None,
        };

        resolved.unwrap_or_else(|| {
            let kind = raw.kind().to_string();
            debug!("Keeping unresolved {} geometry for vertex sweep", kind);
            BoundaryGeometry::Unresolved {
                kind,
                coordinates: flatten_raw(raw),
            }
        })
    }
}

/// Collect the coordinates of a geometry and any collection members into one tree
fn flatten_raw(raw: RawGeometry) -> CoordinateTree {
    if raw.geometries.is_empty() {
        return raw.coordinates.unwrap_or(CoordinateTree::Nested(Vec::new()));
    }

    let mut children: Vec<CoordinateTree> = raw.coordinates.into_iter().collect();
    children.extend(raw.geometries.into_iter().filter_map(|member| match member {
        GeometryValue::Object(raw) => Some(flatten_raw(raw)),
        GeometryValue::Other(_) => None,
    }));
    CoordinateTree::Nested(children)
}

/// Resolve a ring: an array of `[lng, lat, ...]` positions.
///
/// Unclosed rings are closed. Rings with fewer than four positions after
/// closing are rejected.
pub fn resolve_ring(tree: &CoordinateTree) -> Option<LineString<f64>> {
    let CoordinateTree::Nested(positions) = tree else {
        return None;
    };

    let mut ring: Vec<Coord<f64>> = positions
        .iter()
        .map(|p| match p {
            CoordinateTree::Position(values) if values.len() >= 2 => Some(Coord {
                x: values[0],
                y: values[1],
            }),
            _ => None,
        })
        .collect::<Option<_>>()?;

    if ring.len() < 3 {
        return None;
    }

    // Close the ring if needed
    if ring.first() != ring.last() {
        ring.push(ring[0]);
    }

    if ring.len() < 4 {
        return None;
    }

    Some(LineString::new(ring))
}

/// Resolve a polygon: exterior ring followed by optional holes
pub fn resolve_polygon(tree: &CoordinateTree) -> Option<Polygon<f64>> {
    let CoordinateTree::Nested(rings) = tree else {
        return None;
    };

    let mut rings = rings.iter();
    let exterior = resolve_ring(rings.next()?)?;
    let interiors = rings.map(resolve_ring).collect::<Option<Vec<_>>>()?;

    Some(Polygon::new(exterior, interiors))
}

/// Resolve a multipolygon: one polygon per part, at least one part
pub fn resolve_multipolygon(tree: &CoordinateTree) -> Option<MultiPolygon<f64>> {
    let CoordinateTree::Nested(parts) = tree else {
        return None;
    };

    if parts.is_empty() {
        return None;
    }

    let polygons = parts
        .iter()
        .map(resolve_polygon)
        .collect::<Option<Vec<_>>>()?;

    Some(MultiPolygon::new(polygons))
}
