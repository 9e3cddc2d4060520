//! Application constants for the Elcano route planner
//!
//! Capacities, sentinel values, failure-code offsets and default names used
//! throughout the loader, planner and CLI.

// =============================================================================
// Capacities
// =============================================================================

/// Maximum number of regional maps read from one catalog
pub const MAX_MAPS: usize = 10;

/// Maximum number of junctions read from one junction file
pub const MAX_JUNCTIONS: usize = 30;

/// Destination/distance slots per junction row
pub const EDGE_SLOTS: usize = 4;

/// Destination slots the planner consults unless configured otherwise
pub const DEFAULT_EDGE_SLOTS_CONSULTED: usize = 3;

// =============================================================================
// Grammar
// =============================================================================

/// Literal marking an unused destination slot in a junction file
pub const END_LITERAL: &[u8] = b"END";

// =============================================================================
// Failure Codes
// =============================================================================

/// Failure code encoding shared by the loader and the error reporter
pub mod codes {
    /// Catalog source could not be opened
    pub const CATALOG_OPEN: i32 = -1;

    /// Selected junction source could not be opened
    pub const JUNCTION_FILE_OPEN: i32 = -2;

    /// Catalog parsed but contained no maps
    pub const NO_MAP_FOUND: i32 = -3;

    /// Junction file parsed but an edge points outside the graph
    pub const INVALID_GRAPH: i32 = -4;

    /// Multiplier applied to the zero-based row index of a grammar failure
    pub const ROW_STRIDE: i32 = 100;

    /// Offset distinguishing junction-file failures from catalog failures
    pub const JUNCTION_OFFSET: i32 = 10_000;

    /// Highest field code a catalog row can report
    pub const MAX_MAP_FIELD: i32 = 20;

    /// Highest field code a junction row can report
    pub const MAX_JUNCTION_FIELD: i32 = 20;
}

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Default catalog file name
pub const DEFAULT_CATALOG_NAME: &str = "MAP_DEFS.TXT";

/// Directory (under the platform config dir) holding the config file
pub const CONFIG_DIR_NAME: &str = "elcano-planner";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment overrides
pub mod env {
    pub const MAP_DIR: &str = "ELCANO_MAP_DIR";
    pub const CATALOG: &str = "ELCANO_CATALOG";
    pub const EDGE_SLOTS: &str = "ELCANO_EDGE_SLOTS";
    pub const EDGE_WEIGHT: &str = "ELCANO_EDGE_WEIGHT";
}
