//! Fare Quote Entry Point
//!
//! Thin command line front end over the fare use case. Uses `anyhow` for
//! startup errors; fare errors are logged with `FareError::log` first.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use fare::domain::repository::{RateScheduleSource, RouteInfo};
use fare::infra::rate_source::{JsonFileRateSource, StaticRateSource};
use fare::infra::routing::StraightLineRouter;
use fare::{
    Coordinate, EstimateFareInput, EstimateFareUseCase, FareConfig, FareError, nearest_drivers,
};
use kernel::id::DriverId;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "quote")]
#[command(about = "Estimate ride fares and rank nearby drivers.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Price an already-resolved route
    #[command(allow_negative_numbers = true)]
    Quote {
        /// Route length in meters
        distance_meters: f64,
        /// Travel time in seconds
        duration_seconds: f64,
    },

    /// Route between two planar points (meters) in a straight line, then price it
    #[command(allow_negative_numbers = true)]
    Route {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },

    /// Rank drivers by straight-line distance to a pickup point
    #[command(allow_negative_numbers = true)]
    Nearest {
        x: f64,
        y: f64,
        /// Drivers as <driver_id>@<x>,<y>
        #[arg(required = true, value_parser = parse_candidate)]
        candidates: Vec<Candidate>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    driver: DriverId,
    coords: Coordinate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quote=info,fare=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = FareConfig::from_env()?;
    tracing::debug!(?config, "Loaded fare configuration");

    match &config.rates_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Using rate file");
            run(cli.command, &config, JsonFileRateSource::new(path)).await
        }
        None => {
            tracing::info!("Using rates from environment");
            run(
                cli.command,
                &config,
                StaticRateSource::new(config.fallback_rates.clone()),
            )
            .await
        }
    }
}

async fn run<S>(command: Command, config: &FareConfig, rate_source: S) -> anyhow::Result<()>
where
    S: RateScheduleSource,
{
    let router = StraightLineRouter::new(config.average_speed_mps).inspect_err(FareError::log)?;
    let use_case = EstimateFareUseCase::new(Arc::new(router), Arc::new(rate_source));

    let json = match command {
        Command::Quote {
            distance_meters,
            duration_seconds,
        } => {
            let output = use_case
                .quote(RouteInfo::new(distance_meters, duration_seconds))
                .await
                .inspect_err(FareError::log)?;
            serde_json::to_string_pretty(&output)?
        }
        Command::Route { x1, y1, x2, y2 } => {
            let output = use_case
                .execute(EstimateFareInput {
                    origin: Coordinate::new(x1, y1),
                    destination: Coordinate::new(x2, y2),
                })
                .await
                .inspect_err(FareError::log)?;
            serde_json::to_string_pretty(&output)?
        }
        Command::Nearest { x, y, candidates } => {
            let ranked = nearest_drivers(
                candidates.into_iter().map(|c| (c.driver, c.coords)),
                Coordinate::new(x, y),
            );
            serde_json::to_string_pretty(&ranked)?
        }
    };

    println!("{}", json);
    Ok(())
}

/// `<driver_id>@<x>,<y>`
fn parse_candidate(raw: &str) -> Result<Candidate, String> {
    let (id, coords) = raw
        .split_once('@')
        .ok_or_else(|| format!("expected <driver_id>@<x>,<y>, got {:?}", raw))?;
    let (x, y) = coords
        .split_once(',')
        .ok_or_else(|| format!("expected <x>,<y>, got {:?}", coords))?;

    let driver = DriverId::parse(id).map_err(|e| format!("invalid driver id {:?}: {}", id, e))?;
    let number = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate {:?}: {}", s, e))
    };

    Ok(Candidate {
        driver,
        coords: Coordinate::new(number(x)?, number(y)?),
    })
}
