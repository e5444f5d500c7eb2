//! Country record as stored in the catalog.

use serde::Deserialize;

use super::{BorderPoint, BoundaryGeometry};
use crate::border::generate_border_points;

/// A country with its center and optional border data
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    pub name: String,

    /// ISO 3166-1 alpha-2 code
    pub code: String,

    /// Center point latitude
    pub latitude: f64,

    /// Center point longitude
    pub longitude: f64,

    /// Precise boundary, when known
    #[serde(default)]
    pub geometry: Option<BoundaryGeometry>,

    /// Hand-picked points along the border
    #[serde(default, alias = "borderPoints")]
    pub border_points: Option<Vec<BorderPoint>>,
}

/// The border representation chosen for a country.
#[derive(Debug)]
pub enum BorderSource<'a> {
    Geometry(&'a BoundaryGeometry),
    Points(&'a [BorderPoint]),
    Approximated(Vec<BorderPoint>),
}

impl Country {
    pub fn new(name: &str, code: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            latitude,
            longitude,
            geometry: None,
            border_points: None,
        }
    }

    pub fn with_geometry(mut self, geometry: impl Into<BoundaryGeometry>) -> Self {
        self.geometry = Some(geometry.into());
        self
    }

    pub fn with_border_points(mut self, points: Vec<BorderPoint>) -> Self {
        self.border_points = Some(points);
        self
    }

    /// Resolve which border representation to measure against.
    ///
    /// Geometry wins over explicit points, which win over the generated
    /// approximation. An empty point list counts as missing.
    pub fn border_source(&self) -> BorderSource<'_> {
        if let Some(geometry) = &self.geometry {
            return BorderSource::Geometry(geometry);
        }
        match &self.border_points {
            Some(points) if !points.is_empty() => BorderSource::Points(points),
            _ => BorderSource::Approximated(generate_border_points(
                self.latitude,
                self.longitude,
                &self.name,
            )),
        }
    }
}
