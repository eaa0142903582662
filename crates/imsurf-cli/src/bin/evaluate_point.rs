//! Evaluate a single obstruction against the configured runway's
//! imaginary surfaces and print a report.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use imsurf_cli::{elevation, report};
use imsurf_core::{evaluate, InstallationConfig, LatLon, RunwayGeometry};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Installation config file (JSON)
    #[arg(long)]
    config: PathBuf,

    /// Runway id to evaluate against (defaults to the first configured)
    #[arg(long)]
    runway: Option<String>,

    /// Obstruction latitude, decimal degrees
    #[arg(long)]
    lat: f64,

    /// Obstruction longitude, decimal degrees
    #[arg(long)]
    lon: f64,

    /// Obstruction height above ground, feet
    #[arg(long)]
    height: f64,

    /// Ground elevation at the point, feet MSL. Fetched from the elevation
    /// provider when omitted.
    #[arg(long)]
    ground_elevation: Option<f64>,

    /// Skip the elevation lookup and fall back to the field elevation
    #[arg(long)]
    offline: bool,

    /// Elevation provider URL
    #[arg(long, default_value = elevation::DEFAULT_PROVIDER_URL)]
    provider_url: String,

    /// Print the full analysis as JSON instead of a text report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if !args.height.is_finite() || args.height < 0.0 {
        bail!("obstruction height must be non-negative");
    }

    let config = InstallationConfig::from_path(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let runway_config = match &args.runway {
        Some(id) => config
            .runways
            .iter()
            .find(|r| r.id == *id)
            .with_context(|| format!("runway {id} not found in config"))?,
        None => config.runways.first().context("config has no runways")?,
    };
    let rwy = RunwayGeometry::from_config(runway_config);
    let point = LatLon { lat: args.lat, lon: args.lon };

    let ground_elevation = match (args.ground_elevation, args.offline) {
        (Some(explicit), _) => Some(explicit),
        (None, true) => None,
        (None, false) => {
            let client = reqwest::blocking::Client::new();
            let fetched = elevation::fetch_elevation_ft(&client, &args.provider_url, point);
            match fetched {
                Some(ft) => tracing::info!("ground elevation: {ft:.1} ft MSL"),
                None => tracing::warn!(
                    "elevation lookup failed; using field elevation ({} ft MSL)",
                    config.elevation_msl_ft
                ),
            }
            fetched
        }
    };

    let analysis = evaluate(
        point,
        args.height,
        ground_elevation,
        &rwy,
        config.elevation_msl_ft,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!(
            "{} evaluated {}",
            config.name,
            Utc::now().format("%Y-%m-%d %H:%M:%SZ")
        );
        print!("{}", report::render(&analysis, &config.icao, &runway_config.id));
    }

    Ok(())
}
