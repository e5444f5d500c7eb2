//! Static country catalog.
//!
//! The catalog is loaded once (from the embedded dataset or a JSON file) and
//! treated as read-only afterwards. Precise boundaries can be overlaid from a
//! GeoJSON FeatureCollection keyed by ISO alpha-2 code.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::models::{BoundaryGeometry, Country};

/// Embedded country list: name, code, center and a few hand-picked borders
const BUILTIN_COUNTRIES: &str = include_str!("../data/countries.json");

/// GeoJSON FeatureCollection carrying country boundaries
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<FeatureProperties>,
    #[serde(default)]
    pub geometry: Option<BoundaryGeometry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureProperties {
    #[serde(default)]
    pub code: Option<String>,
    /// ISO 3166-1 alpha-2 code as written by Natural Earth exports
    #[serde(default, rename = "ISO_A2")]
    pub iso_a2: Option<String>,
    #[serde(default, rename = "iso_a2")]
    pub iso_a2_lower: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl FeatureProperties {
    /// First non-empty code among `code`, `ISO_A2` and `iso_a2`
    pub fn code(&self) -> Option<&str> {
        [&self.code, &self.iso_a2, &self.iso_a2_lower]
            .into_iter()
            .filter_map(|c| c.as_deref().map(str::trim))
            .find(|c| !c.is_empty())
    }
}

/// Read-only list of countries
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Catalog {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    /// The embedded catalog
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_COUNTRIES).context("Failed to parse built-in country catalog")
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let countries: Vec<Country> = serde_json::from_str(json)?;
        Ok(Self::new(countries))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let catalog = Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;
        info!(
            "Loaded {} countries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Attach feature geometries to the countries with matching codes.
    ///
    /// Returns the number of countries updated. Features without a code, a
    /// geometry or a matching country are skipped.
    pub fn apply_boundaries(&mut self, collection: FeatureCollection) -> usize {
        let mut updated = 0;

        for feature in collection.features {
            let code = feature.properties.as_ref().and_then(FeatureProperties::code);
            let (Some(code), Some(geometry)) = (code, feature.geometry) else {
                debug!("Skipping boundary feature without code or geometry");
                continue;
            };

            match self.get_mut(code) {
                Some(country) => {
                    if !geometry.is_resolved() {
                        debug!(
                            "Boundary for {} is an unresolved {} geometry",
                            code,
                            geometry.kind()
                        );
                    }
                    country.geometry = Some(geometry);
                    updated += 1;
                }
                None => debug!("No country with code {} for boundary feature", code),
            }
        }

        updated
    }

    /// Load a GeoJSON FeatureCollection from disk and apply it
    pub fn load_boundaries<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read boundary file {}", path.display()))?;
        let collection: FeatureCollection = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse boundary file {}", path.display()))?;

        let total = collection.features.len();
        let updated = self.apply_boundaries(collection);
        info!(
            "Applied {} of {} boundary features from {}",
            updated,
            total,
            path.display()
        );
        Ok(updated)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Look up a country by ISO alpha-2 code (case-insensitive)
    pub fn get(&self, code: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    pub fn get_mut(&mut self, code: &str) -> Option<&mut Country> {
        self.countries
            .iter_mut()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }
}
