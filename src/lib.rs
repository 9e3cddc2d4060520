//! Elcano junction route planner
//!
//! Route-planning core for an autonomous ground vehicle. Provides:
//! - A non-backtracking grammar for map catalogs and junction files, with
//!   per-row, per-field failure codes
//! - Selection of the regional map nearest to the vehicle and loading of
//!   its junction graph
//! - Deterministic A* planning over the junction graph
//! - Human-readable diagnostics for every failure code
//!
//! ```no_run
//! use elcano_planner::{DirectoryStore, GeoCoordinate, MapCatalogLoader, PathPlanner};
//!
//! let loader = MapCatalogLoader::new(DirectoryStore::new("/media/sd"));
//! let loaded = loader.load("MAP_DEFS.TXT", &GeoCoordinate::new(47.6, -122.3))?;
//! let route = PathPlanner::with_defaults(&loaded.graph).find_path(0, 2)?;
//! println!("{:?}", route.nodes);
//! # Ok::<(), elcano_planner::PlannerError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod grammar;
pub mod models;
pub mod planner;
pub mod reporter;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use catalog::{DirectoryStore, LoadedMap, MapCatalogLoader, MapStore, MemoryStore};
pub use config::PlannerConfig;
pub use error::{GraphError, LoadError, PathFailure, PlannerError, Result};
pub use models::{
    GeoCoordinate, Junction, JunctionGraph, MapDefinition, Position2D, Route, RouteWaypoint,
};
pub use planner::{EdgeWeight, PathPlanner, SearchConfig};
pub use reporter::{Diagnostic, ErrorReporter};
