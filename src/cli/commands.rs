//! Command implementations for the route planner CLI
//!
//! Each command returns the process exit code it wants. Load failures are
//! not errors at this level: the diagnostic goes to stderr and the command
//! exits with status 1.

use crate::cli::args::{Args, Commands};
use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::debug;

pub mod check;
pub mod explain;
pub mod route;
pub mod shared;

/// Exit status when the map loaded but no route joins the endpoints
pub const NO_ROUTE_EXIT: u8 = 2;

/// Main command runner
///
/// Sets up logging, resolves the layered configuration for commands that
/// read maps, then dispatches.
pub fn run(args: Args) -> Result<ExitCode> {
    shared::setup_logging(&args).context("Failed to initialise logging")?;
    debug!("Parsed arguments: {:?}", args);

    match &args.command {
        Commands::Route(route_args) => {
            let config = shared::load_configuration(&args).context("Failed to load configuration")?;
            route::run(route_args, &config)
        }
        Commands::Check(check_args) => {
            let config = shared::load_configuration(&args).context("Failed to load configuration")?;
            check::run(check_args, &config)
        }
        Commands::Explain(explain_args) => explain::run(explain_args),
    }
}
