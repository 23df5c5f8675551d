//! landbook: parcel geometry from the command line.
//!
//! Reads a land boundary (a JSON list of `[lat, lng]` pairs or a GeoJSON
//! Polygon) and reports the measurements the Landbook drawing page shows.

use clap::{Parser, Subcommand};
use landbook_geo::Coordinate;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

use commands::{batch, bounds, contains, distance, geojson, parse_lat_lng, record, stats, Context};
use config::Config;
use output::{Format, Status};

/// Parcel geometry CLI for Landbook
#[derive(Parser)]
#[command(name = "landbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    format: Option<Format>,

    /// Path to a config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show point count, area, perimeter and center
    Stats {
        /// Boundary file, or - for stdin
        input: PathBuf,
    },

    /// Show the bounding box
    Bounds {
        /// Boundary file, or - for stdin
        input: PathBuf,

        /// Pad each side by this fraction of the span (configured default if no value)
        #[arg(short, long, num_args = 0..=1, value_name = "FACTOR")]
        expand: Option<Option<f64>>,
    },

    /// Padded bounds for area queries, as west,south,east,north
    QueryBounds {
        /// Boundary file, or - for stdin
        input: PathBuf,

        /// Padding factor (defaults to bounds.query_factor)
        #[arg(long)]
        factor: Option<f64>,
    },

    /// Check whether a point lies inside the boundary
    Contains {
        /// Boundary file, or - for stdin
        input: PathBuf,

        /// Latitude of the point
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude of the point
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },

    /// Convert the boundary to a GeoJSON Feature
    Geojson {
        /// Boundary file, or - for stdin
        input: PathBuf,
    },

    /// Build the stored parcel record with derived metrics
    Record {
        /// Boundary file, or - for stdin
        input: PathBuf,

        /// Reverse-geocoded address to store with the parcel
        #[arg(short, long, default_value = "")]
        address: String,
    },

    /// Summarize a JSON list of parcels ({id, boundary})
    Batch {
        /// Parcel list file, or - for stdin
        input: PathBuf,

        /// Only show the N largest parcels
        #[arg(short, long, value_name = "N")]
        largest: Option<usize>,
    },

    /// Great-circle distance between two points
    Distance {
        /// Start point as LAT,LNG
        #[arg(long, value_parser = parse_lat_lng, allow_hyphen_values = true)]
        from: Coordinate,

        /// End point as LAT,LNG
        #[arg(long, value_parser = parse_lat_lng, allow_hyphen_values = true)]
        to: Coordinate,
    },
}

fn init_logging(level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("landbook_geo=debug,landbook=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    // A subscriber may already be installed when embedded; keep going.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    init_logging(&config.logging.level, cli.verbose);

    let format = match cli.format {
        Some(f) => f,
        None => Format::from_config(&config.output.format)?,
    };
    tracing::debug!(?format, "Configuration loaded");

    let ctx = Context { config, format };

    match cli.command {
        Commands::Stats { input } => stats::run(&ctx, &input),
        Commands::Bounds { input, expand } => bounds::run(&ctx, &input, expand),
        Commands::QueryBounds { input, factor } => bounds::run_query(&ctx, &input, factor),
        Commands::Contains { input, lat, lng } => {
            contains::run(&ctx, &input, Coordinate::new(lat, lng))
        }
        Commands::Geojson { input } => geojson::run(&input),
        Commands::Record { input, address } => record::run(&input, &address),
        Commands::Batch { input, largest } => batch::run(&ctx, &input, largest),
        Commands::Distance { from, to } => distance::run(&ctx, from, to),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Status::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
