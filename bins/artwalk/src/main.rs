//! artwalk: drive ArtWalk tour sessions from the command line.
//!
//! Stands in for the browser client: lists the tour catalog, replays a GPS
//! track through a tour session and prints the events a UI would render.

use artwalk_cli::output::Status;
use artwalk_cli::render::RenderFormat;
use artwalk_telemetry::TelemetryConfig;
use artwalk_tour::{Config, TourCatalog, TourError};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod commands;
mod track;

/// Location-triggered walking tours
#[derive(Parser)]
#[command(name = "artwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Configuration file (defaults to ./.artwalk.toml if present)
    #[arg(short, long, global = true, env = "ARTWALK_CONFIG")]
    config: Option<String>,

    /// Tour catalog JSON file (overrides the configured one)
    #[arg(long, global = true, env = "ARTWALK_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tours in the catalog
    Tours,

    /// Replay a GPS track through a tour and print the triggered artworks
    Walk {
        /// Tour to start
        tour_id: String,

        /// Track file: JSON array of {lat, lon} or `lat,lon` lines
        track: PathBuf,

        /// Trigger radius in meters (overrides the configuration)
        #[arg(short, long)]
        radius: Option<f64>,

        /// Print walk statistics at the end
        #[arg(short, long)]
        stats: bool,
    },

    /// Great-circle distance between two points, in meters
    Distance {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lon2: f64,
    },

    /// Show where each pin of a tour sits on the display (percent)
    Layout {
        /// Tour to lay out
        tour_id: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            Status::error(&e.to_string());
            return ExitCode::from(exit_code(&e));
        }
    };

    let mut telemetry = TelemetryConfig::from(&config.schema.logging);
    if cli.verbose {
        telemetry = telemetry.verbose();
    }
    if let Err(e) = artwalk_telemetry::init_with_config(telemetry) {
        Status::warning(&e.to_string());
    }

    let format = if cli.json { RenderFormat::Json } else { RenderFormat::Text };

    let result = match cli.command {
        Commands::Tours => load_catalog(cli.catalog.as_deref(), &config)
            .and_then(|catalog| commands::tours::run(&catalog, format)),
        Commands::Walk { tour_id, track, radius, stats } => {
            load_catalog(cli.catalog.as_deref(), &config).and_then(|catalog| {
                let mut session = config.schema.session.clone();
                if let Some(radius) = radius {
                    session = session.with_trigger_radius(radius);
                }
                commands::walk::run(catalog, session, &tour_id, &track, format, stats)
            })
        }
        Commands::Distance { lat1, lon1, lat2, lon2 } => {
            commands::distance::run(lat1, lon1, lat2, lon2, format)
        }
        Commands::Layout { tour_id } => load_catalog(cli.catalog.as_deref(), &config)
            .and_then(|catalog| commands::layout::run(catalog, &config, &tour_id, format)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Status::error(&format!("{:#}", e));
            let code = e.downcast_ref::<TourError>().map_or(1, exit_code);
            ExitCode::from(code)
        }
    }
}

fn load_catalog(path: Option<&Path>, config: &Config) -> anyhow::Result<TourCatalog> {
    let path = path.or(config.schema.catalog.path.as_deref());
    tracing::debug!(path = ?path, "Loading tour catalog");
    let catalog = match path {
        Some(path) => TourCatalog::from_path(path)?,
        None => TourCatalog::builtin()?,
    };
    Ok(catalog)
}

/// Exit codes: 2 for rejected input, 3 for configuration or catalog problems.
fn exit_code(err: &TourError) -> u8 {
    if err.is_rejected_input() {
        2
    } else {
        match err {
            TourError::Config(_) | TourError::Catalog(_) | TourError::Toml(_) => 3,
            _ => 1,
        }
    }
}
