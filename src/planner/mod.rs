//! A* route planning over junction graphs.
//!
//! The open set is scanned linearly for the smallest f-score rather than
//! kept in a heap; graphs hold at most 30 junctions and the linear scan
//! makes the lowest-index tie-break explicit.

mod astar;
mod types;

pub use astar::PathPlanner;
pub use types::{EdgeWeight, SearchConfig};

use crate::error::PathFailure;
use crate::models::{JunctionGraph, Route};

/// Quick route planning with the default configuration
pub fn find_path(graph: &JunctionGraph, start: usize, goal: usize) -> Result<Route, PathFailure> {
    PathPlanner::with_defaults(graph).find_path(start, goal)
}

/// Check whether any route exists
pub fn path_exists(graph: &JunctionGraph, start: usize, goal: usize) -> bool {
    find_path(graph, start, goal).is_ok()
}
