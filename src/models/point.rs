//! Point types used by the distance engine.

use serde::{Deserialize, Serialize};

use crate::error::CoordinateError;

/// Check that a latitude/longitude pair is inside the valid ranges.
///
/// Bounds are inclusive: latitude in [-90, 90], longitude in [-180, 180].
/// NaN fails every comparison and is therefore rejected.
pub fn validate_coordinates(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

/// Validated geographic point (degrees).
///
/// Fields are private so that every `GeoPoint` in circulation has passed
/// [`GeoPoint::new`]. The distance engine relies on this and performs no
/// range checks of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(CoordinateError::NotFinite { lat, lon });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateError::LongitudeOutOfRange(lon));
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Convert to a `geo` point (x = longitude, y = latitude)
    pub fn to_geo(self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }
}

/// A sampled coordinate standing in for a point on a country's boundary.
///
/// Not validated: generated samples can drift outside the usual ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderPoint {
    pub lat: f64,
    #[serde(alias = "lon")]
    pub lng: f64,
}

impl BorderPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<GeoPoint> for BorderPoint {
    fn from(point: GeoPoint) -> Self {
        Self::new(point.lat, point.lon)
    }
}
