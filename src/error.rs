//! Error handling for map loading and route planning.
//!
//! Load failures carry the numeric failure code used on the vehicle's
//! diagnostic channel (see [`LoadError::code`]); search failures are kept
//! separate because a search that finds nothing still ran successfully.

use crate::constants::codes;
use crate::grammar::RowFailure;
use std::path::PathBuf;
use thiserror::Error;

/// Structural problems found while assembling a junction graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error(
        "junction {row} destination slot {slot} points at node {target}, but the graph has {node_count} nodes"
    )]
    DanglingEdge {
        row: usize,
        slot: usize,
        target: usize,
        node_count: usize,
    },

    #[error("graph holds {count} junctions, capacity is {capacity}")]
    CapacityExceeded { count: usize, capacity: usize },
}

/// Failures of the map catalog loader.
///
/// Every variant maps onto exactly one failure code; the loader never
/// returns a partially populated graph alongside one of these.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open map catalog '{catalog}': {source}")]
    CatalogOpen {
        catalog: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open junction file '{file}': {source}")]
    JunctionFileOpen {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no map definitions found in catalog '{catalog}'")]
    NoMapFound { catalog: String },

    #[error("map definition error in '{catalog}': {failure}")]
    CatalogGrammar {
        catalog: String,
        failure: RowFailure,
    },

    #[error("junction definition error in '{file}': {failure}")]
    JunctionGrammar { file: String, failure: RowFailure },

    #[error("invalid junction graph in '{file}': {source}")]
    InvalidGraph {
        file: String,
        #[source]
        source: GraphError,
    },
}

impl LoadError {
    /// Numeric failure code for this error
    ///
    /// Negative for file-level failures, `row*100 + field` for catalog rows,
    /// and the same shifted by 10000 for junction rows.
    pub fn code(&self) -> i32 {
        match self {
            Self::CatalogOpen { .. } => codes::CATALOG_OPEN,
            Self::JunctionFileOpen { .. } => codes::JUNCTION_FILE_OPEN,
            Self::NoMapFound { .. } => codes::NO_MAP_FOUND,
            Self::CatalogGrammar { failure, .. } => failure.code(),
            Self::JunctionGrammar { failure, .. } => codes::JUNCTION_OFFSET + failure.code(),
            Self::InvalidGraph { .. } => codes::INVALID_GRAPH,
        }
    }

    /// Junction file involved in the failure, when one had been selected
    pub fn junction_file(&self) -> Option<&str> {
        match self {
            Self::JunctionFileOpen { file, .. }
            | Self::JunctionGrammar { file, .. }
            | Self::InvalidGraph { file, .. } => Some(file),
            _ => None,
        }
    }
}

/// Reasons the planner returns no route
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathFailure {
    #[error("no route from junction {start} to junction {goal}")]
    NoPath { start: usize, goal: usize },

    #[error("start junction {start} is outside the graph ({node_count} nodes)")]
    StartOutOfRange { start: usize, node_count: usize },

    #[error("goal junction {goal} is outside the graph ({node_count} nodes)")]
    GoalOutOfRange { goal: usize, node_count: usize },
}

/// Application-level error for configuration, CLI and I/O failures
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config file {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Path(#[from] PathFailure),
}

impl PlannerError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
