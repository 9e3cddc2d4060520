//! Command-line argument definitions for the route planner
//!
//! Defines the CLI interface using the clap derive API. Options that feed
//! the layered configuration are global so they can follow any subcommand.

use crate::models::GeoCoordinate;
use crate::planner::EdgeWeight;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Elcano junction route planner
///
/// Loads the regional map nearest to a geographic position and plans
/// routes between its junctions.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "elcano-route",
    version,
    about = "Plan routes over Elcano junction maps",
    long_about = "Selects the regional map closest to the vehicle from a map catalog, \
                  loads its junction file and plans an A* route between two junctions. \
                  Malformed catalog or junction files are reported with the line and \
                  field where parsing stopped."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (JSON)
    ///
    /// Defaults to <config dir>/elcano-planner/config.json when that file exists.
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Directory holding the catalog and junction files
    #[arg(short = 'm', long = "map-dir", value_name = "PATH", global = true)]
    pub map_dir: Option<PathBuf>,

    /// Catalog file name inside the map directory
    #[arg(long = "catalog", value_name = "NAME", global = true)]
    pub catalog: Option<String>,

    /// Destination slots consulted per junction (1-4)
    #[arg(long = "edge-slots", value_name = "N", global = true)]
    pub edge_slots: Option<usize>,

    /// Edge cost model: manhattan or surveyed
    #[arg(long = "edge-weight", value_name = "MODEL", global = true)]
    pub edge_weight: Option<EdgeWeight>,

    /// Increase logging verbosity
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only log errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load the nearest map and plan a route between two junctions
    Route(RouteArgs),
    /// Load the nearest map and report what was selected
    Check(CheckArgs),
    /// Describe a numeric failure code
    Explain(ExplainArgs),
}

/// Vehicle position options shared by `route` and `check`
#[derive(Debug, Clone, Parser)]
pub struct PositionArgs {
    /// Latitude of the vehicle in degrees
    #[arg(long = "lat", allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude of the vehicle in degrees
    #[arg(long = "lon", allow_negative_numbers = true)]
    pub longitude: f64,
}

impl PositionArgs {
    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Parser)]
pub struct RouteArgs {
    #[command(flatten)]
    pub position: PositionArgs,

    /// Start junction index
    #[arg(long = "start")]
    pub start: usize,

    /// Goal junction index
    #[arg(long = "goal")]
    pub goal: usize,

    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub position: PositionArgs,

    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Parser)]
pub struct ExplainArgs {
    /// Failure code as returned by the loader
    #[arg(value_name = "CODE", allow_negative_numbers = true)]
    pub code: i32,

    /// Junction file name to show for junction-file codes
    #[arg(long = "file", value_name = "NAME")]
    pub file: Option<String>,

    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Log level implied by -v/-q
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
