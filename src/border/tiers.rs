//! Size tiers used to pick the radius of an approximated border.
//!
//! Membership is hand-curated reference data, not derived from land area.

use hashbrown::HashSet;
use std::sync::LazyLock;

static LARGE_COUNTRIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "Russia",
        "Canada",
        "United States",
        "China",
        "Brazil",
        "Australia",
        "India",
        "Argentina",
        "Kazakhstan",
        "Algeria",
    ]
    .into_iter()
    .collect()
});

static MEDIUM_COUNTRIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "Mexico",
        "Indonesia",
        "Iran",
        "Libya",
        "Chad",
        "Niger",
        "Angola",
        "Mali",
        "South Africa",
        "Colombia",
        "Ethiopia",
        "Bolivia",
        "Mauritania",
        "Egypt",
        "Tanzania",
        "Nigeria",
        "Venezuela",
        "Pakistan",
        "Turkey",
        "Mozambique",
        "Zambia",
        "Myanmar",
        "Afghanistan",
        "Somalia",
        "Central African Republic",
        "Ukraine",
        "Madagascar",
        "Botswana",
        "Kenya",
        "France",
        "Yemen",
        "Thailand",
        "Spain",
        "Turkmenistan",
        "Cameroon",
        "Papua New Guinea",
        "Sweden",
        "Uzbekistan",
        "Morocco",
        "Iraq",
    ]
    .into_iter()
    .collect()
});

/// Rough size class of a country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SizeTier {
    Small,
    Medium,
    Large,
}

impl SizeTier {
    /// Look up the tier by exact country name. Unknown names are `Small`.
    pub fn for_country(name: &str) -> Self {
        if LARGE_COUNTRIES.contains(name) {
            SizeTier::Large
        } else if MEDIUM_COUNTRIES.contains(name) {
            SizeTier::Medium
        } else {
            SizeTier::Small
        }
    }

    /// Radius of the approximated border circle
    pub fn radius_km(&self) -> f64 {
        match self {
            SizeTier::Small => 150.0,
            SizeTier::Medium => 400.0,
            SizeTier::Large => 800.0,
        }
    }

    pub fn all() -> &'static [SizeTier] {
        &[SizeTier::Small, SizeTier::Medium, SizeTier::Large]
    }
}

/// Names in the large tier
pub fn large_countries() -> impl Iterator<Item = &'static str> {
    LARGE_COUNTRIES.iter().copied()
}

/// Names in the medium tier
pub fn medium_countries() -> impl Iterator<Item = &'static str> {
    MEDIUM_COUNTRIES.iter().copied()
}
