//! Closest countries finder.
//!
//! Ranks the country catalog by distance from a coordinate to each country's
//! border and prints the closest ones.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use borderline::config::Config;
use borderline::distance::format_distance;
use borderline::ranking::{RankOptions, RankedCountry};
use borderline::{BorderEstimator, Catalog, GeoPoint};

#[derive(Parser, Debug)]
#[command(name = "closest")]
#[command(about = "Find the countries closest to a coordinate")]
struct Args {
    /// Latitude in degrees (-90 to 90)
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude in degrees (-180 to 180)
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// Number of countries to show
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Only report the distance to this country (ISO alpha-2 code)
    #[arg(long)]
    country: Option<String>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Country catalog JSON (defaults to the built-in list)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// GeoJSON FeatureCollection with precise country boundaries
    #[arg(long)]
    boundaries: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Compute distances on a single thread
    #[arg(long)]
    sequential: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let builder = FmtSubscriber::builder().with_writer(std::io::stderr);
    if std::env::var_os("RUST_LOG").is_some() {
        let subscriber = builder.with_env_filter(EnvFilter::from_default_env()).finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = builder.with_max_level(level).finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    let point = GeoPoint::new(args.lat, args.lon).context("Invalid coordinates")?;

    let mut catalog = match args.catalog.as_ref().or(config.catalog.path.as_ref()) {
        Some(path) => Catalog::load_from_file(path)?,
        None => Catalog::builtin()?,
    };
    debug!("Catalog has {} countries", catalog.len());

    if let Some(path) = args.boundaries.as_ref().or(config.catalog.boundaries.as_ref()) {
        catalog.load_boundaries(path)?;
    }

    let estimator = BorderEstimator::new();

    if let Some(code) = &args.country {
        let country = catalog
            .get(code)
            .with_context(|| format!("No country with code {}", code))?;
        let distance = estimator.distance(point, country);

        if args.json {
            let row = RankedCountry {
                rank: 1,
                name: country.name.clone(),
                code: country.code.clone(),
                distance_km: distance,
            };
            println!("{}", serde_json::to_string_pretty(&row)?);
        } else {
            println!("{} ({})  {}", country.name, country.code, format_distance(distance));
        }
        return Ok(());
    }

    let mut options = RankOptions::from(&config.ranking);
    if let Some(top) = args.top {
        options.limit = top;
    }
    if args.sequential {
        options.parallel = false;
    }

    info!(
        "Ranking {} countries around ({}, {})",
        catalog.len(),
        point.lat(),
        point.lon()
    );
    let ranking = estimator.rank(point, catalog.countries(), options);
    let rows = RankedCountry::from_ranking(&ranking);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!(
                "{:>3}. {} ({})  {}",
                row.rank,
                row.name,
                row.code,
                format_distance(row.distance_km)
            );
        }
    }

    Ok(())
}
