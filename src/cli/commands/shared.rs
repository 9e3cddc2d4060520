//! Shared components for CLI commands
//!
//! Logging setup, configuration layering and map loading used by more than
//! one command.

use crate::catalog::{LoadedMap, MapCatalogLoader};
use crate::cli::args::Args;
use crate::config::PlannerConfig;
use crate::error::{LoadError, PlannerError, Result};
use crate::models::GeoCoordinate;
use crate::reporter::ErrorReporter;
use std::io;
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("elcano_planner={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| PlannerError::configuration(format!("logging already initialised: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &Args) -> Result<PlannerConfig> {
    let default_config_path = if args.config_file.is_none() {
        PlannerConfig::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        debug!("No config file found, using defaults and environment variables");
    }

    let mut config = PlannerConfig::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut PlannerConfig, args: &Args) {
    if let Some(map_dir) = &args.map_dir {
        config.map_dir = map_dir.clone();
    }
    if let Some(catalog) = &args.catalog {
        config.catalog = catalog.clone();
    }
    if let Some(edge_slots) = args.edge_slots {
        config.search.edge_slots = edge_slots;
    }
    if let Some(edge_weight) = args.edge_weight {
        config.search.edge_weight = edge_weight;
    }
}

/// Load the map nearest to `here` from the configured directory
pub fn load_map(config: &PlannerConfig, here: &GeoCoordinate) -> std::result::Result<LoadedMap, LoadError> {
    MapCatalogLoader::new(config.store()).load(&config.catalog, here)
}

/// Write the diagnostic for a load failure to stderr
pub fn report_load_failure(error: &LoadError) -> io::Result<()> {
    ErrorReporter::new(io::stderr().lock()).report_load_error(error)
}
