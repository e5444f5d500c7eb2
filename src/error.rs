//! Error types shared across the library.

/// Error returned when a coordinate pair cannot be turned into a [`GeoPoint`].
///
/// [`GeoPoint`]: crate::models::GeoPoint
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    /// Latitude or longitude is NaN or infinite.
    #[error("Coordinates must be finite numbers (got {lat}, {lon})")]
    NotFinite { lat: f64, lon: f64 },

    /// Latitude outside [-90, 90].
    #[error("Latitude {0} is out of range (-90 to 90)")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180].
    #[error("Longitude {0} is out of range (-180 to 180)")]
    LongitudeOutOfRange(f64),
}
