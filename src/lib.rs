//! Borderline - nearest countries by distance to their borders
//!
//! This library provides the distance engine, the country catalog and the
//! ranking used by the `closest` binary.

pub mod border;
pub mod catalog;
pub mod config;
pub mod distance;
pub mod error;
pub mod estimator;
pub mod models;
pub mod pip;
pub mod ranking;

pub use catalog::Catalog;
pub use error::CoordinateError;
pub use estimator::{distance_to_country_border, BorderEstimator};
pub use models::{BorderPoint, BoundaryGeometry, Country, GeoPoint};
pub use ranking::{rank_countries, CountryDistance};
