//! geosplash binary entry point.
//!
//! Wires the platform adapters into the splash sequencer and runs the
//! sequence once.

mod display;
mod navigation;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use splash_app::{ResolveLocation, SplashSequencer};
use splash_core::GeoFix;
use splash_platform::geocoder::build_geocoder;
use splash_platform::location::ScriptedLocationService;
use splash_platform::settings::load_settings;

use crate::display::TerminalDisplay;
use crate::navigation::TerminalNavigation;

#[derive(Debug, Parser)]
#[command(name = "geosplash", version, about = "Scripted splash sequence demo")]
struct Cli {
    /// Settings file to load instead of the default location.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the scripted fix latitude.
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Override the scripted fix longitude.
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Pretend the device has no location capability.
    #[arg(long)]
    no_location: bool,

    /// Make the scripted permission prompt answer "deny".
    #[arg(long)]
    deny_permission: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = load_settings(cli.config.as_deref())?;

    if let (Some(latitude), Some(longitude)) = (cli.lat, cli.lon) {
        config.location.fix = Some(GeoFix {
            latitude,
            longitude,
        });
    }
    if cli.no_location {
        config.location.available = false;
    }
    if cli.deny_permission {
        config.location.prompt_grants = false;
    }

    info!(
        backend = ?config.location.geocoder.backend,
        available = config.location.available,
        "starting splash sequence"
    );

    let geocoder = build_geocoder(&config.location.geocoder)?;
    let location = Arc::new(ScriptedLocationService::new(config.location.clone()));
    let resolve_location = Arc::new(ResolveLocation::new(location, geocoder));

    let sequencer = SplashSequencer::new(
        config.timings.clone(),
        resolve_location,
        Arc::new(TerminalDisplay::new(config.profile.clone())),
        Arc::new(TerminalNavigation),
    );
    sequencer.run().await?;

    Ok(())
}
