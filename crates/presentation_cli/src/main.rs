//! CanWeatherWatch CLI
//!
//! Terminal front end for the point query and regional polling flows.

#![allow(clippy::print_stdout)]

mod explore;
mod render;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use application::{
    AlertPanel, HealthService, PointQueryService, PointQuerySession, PopupView,
    RegionalAlertPoller, WeatherBackendPort,
};
use clap::{Parser, Subcommand};
use domain::{Coordinate, find_city};
use infrastructure::{AppConfig, WeatherBackendAdapter, init_logging};
use tracing::warn;

/// CanWeatherWatch CLI
#[derive(Parser)]
#[command(name = "canweather-cli")]
#[command(author, version, about = "Weather conditions and alerts across Canada", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./canweather.toml if present)
    #[arg(short, long, env = "CANWEATHER_CONFIG")]
    config: Option<PathBuf>,

    /// Backend base URL, overrides the configuration
    #[arg(long)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query conditions and alerts at a point
    ///
    /// Example: canweather-cli point --lat 45.5017 --lon -73.5673
    /// Example: canweather-cli point --city Montreal
    Point {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true, requires = "lon", conflicts_with = "city")]
        lat: Option<f64>,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,

        /// Major city name instead of coordinates
        #[arg(long)]
        city: Option<String>,

        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch the active alerts across major Canadian cities once
    Alerts {
        /// Print the raw alert set as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check backend health
    Health,

    /// List the predefined major cities
    Cities,

    /// Interactive explorer with live regional polling
    Explore {
        /// Override the polling interval in seconds
        #[arg(long)]
        interval_secs: Option<u64>,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Resolve the queried coordinate from `--lat/--lon` or `--city`
fn resolve_coordinate(
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<&str>,
) -> anyhow::Result<Coordinate> {
    match (lat, lon, city) {
        (Some(lat), Some(lon), None) => Ok(Coordinate::new(lat, lon)),
        (None, None, Some(city)) => Ok(find_city(city)?.coordinate),
        _ => anyhow::bail!("Specify either --lat and --lon, or --city"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.verbose > 0 {
        config.logging.filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    if let Some(url) = cli.backend_url {
        config.backend.base_url = url;
        config.validate().context("Invalid --backend-url")?;
    }

    init_logging(&config.logging)?;

    let base_url = config.backend.base_url.clone();
    let backend: Arc<dyn WeatherBackendPort> =
        Arc::new(WeatherBackendAdapter::with_config(config.backend.clone())?);

    match cli.command {
        Commands::Point {
            lat,
            lon,
            city,
            json,
        } => {
            let coordinate = resolve_coordinate(lat, lon, city.as_deref())?;
            if !coordinate.is_valid() {
                warn!(coordinate = %coordinate, "Coordinate out of range, querying anyway");
            }

            let session = PointQuerySession::new(PointQueryService::new(backend));
            session.query_now(coordinate).await;
            let state = session.state();

            if json {
                println!("{}", serde_json::to_string_pretty(&state.result)?);
            } else if let Some(popup) = PopupView::from_state(&state) {
                println!("{}", render::render_popup(&popup));
            }
        },

        Commands::Alerts { json } => {
            let handle = RegionalAlertPoller::new(backend).start();
            let mut updates = handle.subscribe();
            let timeout = Duration::from_secs(config.backend.timeout_secs.saturating_add(5));
            let state = tokio::time::timeout(
                timeout,
                updates.wait_for(|state| state.completed_fetches() > 0),
            )
            .await
            .context("Timed out waiting for regional alerts")??
            .clone();
            handle.stop().await;

            if json {
                println!("{}", serde_json::to_string_pretty(&state.alerts)?);
            } else {
                println!("{}", render::render_panel(&AlertPanel::new().view(&state)));
            }
        },

        Commands::Health => {
            let health = HealthService::new(backend)
                .with_timeout(Duration::from_secs(config.backend.timeout_secs))
                .check()
                .await;
            println!("{}", render::render_health(&base_url, &health));
            if !health.healthy {
                std::process::exit(1);
            }
        },

        Commands::Cities => {
            print!("{}", render::render_cities());
        },

        Commands::Explore { interval_secs } => {
            let interval = interval_secs.map_or_else(
                || config.polling.interval(),
                Duration::from_secs,
            );
            let poller = RegionalAlertPoller::new(Arc::clone(&backend)).with_interval(interval);
            explore::run(backend, poller).await?;
        },
    }

    Ok(())
}
