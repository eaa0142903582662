//! Export the configured runway's imaginary surface boundaries as a
//! GeoJSON FeatureCollection for map display.

use anyhow::{Context, Result};
use clap::Parser;
use imsurf_core::{polygons, InstallationConfig, LatLon, RunwayGeometry};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Installation config file (JSON)
    #[arg(long)]
    config: PathBuf,

    /// Runway id to export (defaults to the first configured)
    #[arg(long)]
    runway: Option<String>,

    /// Output file (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn ring_coordinates(ring: &[LatLon]) -> Value {
    // GeoJSON is [lon, lat]
    json!([ring.iter().map(|p| json!([p.lon, p.lat])).collect::<Vec<_>>()])
}

fn feature(name: &str, ring: &[LatLon]) -> Value {
    json!({
        "type": "Feature",
        "properties": { "surface": name },
        "geometry": {
            "type": "Polygon",
            "coordinates": ring_coordinates(ring),
        },
    })
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
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

    let approach = polygons::approach_departure_rings(&rwy);
    let transitional = polygons::transitional_rings(&rwy);
    let features = vec![
        feature("runway", &polygons::runway_ring(&rwy)),
        feature("primary", &polygons::primary_surface_ring(&rwy)),
        feature("approach_departure_end1", &approach.end1),
        feature("approach_departure_end2", &approach.end2),
        feature("transitional_left", &transitional.left),
        feature("transitional_right", &transitional.right),
        feature("inner_horizontal", &polygons::inner_horizontal_ring(&rwy)),
        feature("conical", &polygons::conical_outer_ring(&rwy)),
        feature("outer_horizontal", &polygons::outer_horizontal_ring(&rwy)),
    ];

    let collection = json!({
        "type": "FeatureCollection",
        "features": features,
    });
    let rendered = serde_json::to_string_pretty(&collection)?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
