//! Ranking countries by border distance.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::estimator::BorderEstimator;
use crate::models::{Country, GeoPoint};
use crate::pip::BoundaryMetric;

/// Default number of countries returned by a ranking
pub const DEFAULT_TOP_K: usize = 5;

/// A country paired with its distance from the query point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryDistance<'a> {
    pub country: &'a Country,
    pub distance_km: f64,
}

/// Serializable ranking entry
#[derive(Debug, Clone, Serialize)]
pub struct RankedCountry {
    pub rank: usize,
    pub name: String,
    pub code: String,
    pub distance_km: f64,
}

impl RankedCountry {
    pub fn from_ranking(ranking: &[CountryDistance<'_>]) -> Vec<Self> {
        ranking
            .iter()
            .enumerate()
            .map(|(i, entry)| Self {
                rank: i + 1,
                name: entry.country.name.clone(),
                code: entry.country.code.clone(),
                distance_km: entry.distance_km,
            })
            .collect()
    }
}

/// Ranking options
#[derive(Debug, Clone, Copy)]
pub struct RankOptions {
    /// Number of countries to keep
    pub limit: usize,
    /// Compute distances on the rayon thread pool
    pub parallel: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_TOP_K,
            parallel: true,
        }
    }
}

impl<M: BoundaryMetric> BorderEstimator<M> {
    /// Rank countries by ascending border distance and keep the closest `limit`.
    ///
    /// Ties keep catalog order, so the result is deterministic whether or not
    /// distances were computed in parallel.
    pub fn rank<'a>(
        &self,
        point: GeoPoint,
        countries: &'a [Country],
        options: RankOptions,
    ) -> Vec<CountryDistance<'a>> {
        let measure = |country: &'a Country| CountryDistance {
            country,
            distance_km: self.distance(point, country),
        };

        let mut ranked: Vec<CountryDistance<'a>> = if options.parallel {
            countries.par_iter().map(measure).collect()
        } else {
            countries.iter().map(measure).collect()
        };

        ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        ranked.truncate(options.limit);

        debug!(
            "Ranked {} countries around ({}, {}), kept {}",
            countries.len(),
            point.lat(),
            point.lon(),
            ranked.len()
        );

        ranked
    }
}

/// Rank countries with the default metric, computing distances in parallel.
pub fn rank_countries(
    point: GeoPoint,
    countries: &[Country],
    limit: usize,
) -> Vec<CountryDistance<'_>> {
    BorderEstimator::new().rank(
        point,
        countries,
        RankOptions {
            limit,
            parallel: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use geo::polygon;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn codes(ranking: &[CountryDistance<'_>]) -> Vec<String> {
        ranking.iter().map(|r| r.country.code.clone()).collect()
    }

    #[test]
    fn test_sorted_and_truncated() {
        let catalog = Catalog::builtin().unwrap();
        let ranking = rank_countries(point(48.8566, 2.3522), catalog.countries(), 5);

        assert_eq!(ranking.len(), 5);
        assert!(ranking
            .windows(2)
            .all(|w| w[0].distance_km <= w[1].distance_km));
    }

    #[test]
    fn test_limit_larger_than_catalog() {
        let countries = vec![
            Country::new("Malta", "MT", 35.937496, 14.375416),
            Country::new("Tunisia", "TN", 33.886917, 9.537499),
        ];
        let ranking = rank_countries(point(36.0, 14.0), &countries, 10);
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].country.code, "MT");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let countries = vec![
            Country::new("Twin A", "TA", 10.0, 10.0),
            Country::new("Twin B", "TB", 10.0, 10.0),
            Country::new("Far", "FR", -40.0, -100.0),
        ];
        let ranking = rank_countries(point(10.0, 10.0), &countries, 3);
        assert_eq!(codes(&ranking), vec!["TA", "TB", "FR"]);
    }

    #[test]
    fn test_deterministic_and_parallel_agrees() {
        let catalog = Catalog::builtin().unwrap();
        let p = point(-1.2921, 36.8219);
        let estimator = BorderEstimator::new();

        let parallel = RankOptions {
            limit: 10,
            parallel: true,
        };
        let sequential = RankOptions {
            limit: 10,
            parallel: false,
        };

        let first = estimator.rank(p, catalog.countries(), parallel);
        let second = estimator.rank(p, catalog.countries(), parallel);
        let third = estimator.rank(p, catalog.countries(), sequential);

        assert_eq!(first, second);
        assert_eq!(first, third);
    }

    #[test]
    fn test_new_york_ranks_united_states_first() {
        let catalog = Catalog::builtin().unwrap();
        let ranking = rank_countries(point(40.7128, -74.0060), catalog.countries(), 5);

        assert_eq!(ranking[0].country.code, "US");
        // The catalog's explicit points include one in Manhattan
        assert!(ranking[0].distance_km < 10.0, "{}", ranking[0].distance_km);
    }

    #[test]
    fn test_new_york_with_geometry_is_zero() {
        let mut catalog = Catalog::builtin().unwrap();
        let box_us = polygon![
            (x: -124.7, y: 48.4),
            (x: -124.2, y: 32.5),
            (x: -97.4, y: 25.8),
            (x: -80.0, y: 25.0),
            (x: -67.0, y: 44.8),
            (x: -95.2, y: 49.0),
        ];
        catalog
            .get_mut("US")
            .expect("US in catalog")
            .geometry = Some(box_us.into());

        let ranking = rank_countries(point(40.7128, -74.0060), catalog.countries(), 5);
        assert_eq!(ranking[0].country.code, "US");
        assert_eq!(ranking[0].distance_km, 0.0);
    }

    #[test]
    fn test_north_pole_ranks_every_country() {
        let catalog = Catalog::builtin().unwrap();
        let ranking = rank_countries(point(90.0, 0.0), catalog.countries(), usize::MAX);

        assert_eq!(ranking.len(), catalog.len());
        assert!(ranking.iter().all(|r| r.distance_km.is_finite()));
    }

    #[test]
    fn test_ranked_country_serialization() {
        let countries = vec![Country::new("Malta", "MT", 35.937496, 14.375416)];
        let ranking = rank_countries(point(35.937496, 14.375416), &countries, 5);
        let rows = RankedCountry::from_ranking(&ranking);

        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[0]["rank"], 1);
        assert_eq!(json[0]["code"], "MT");
        assert_eq!(json[0]["distance_km"], 0.0);
    }
}
