//! Search configuration types.

use crate::constants::{DEFAULT_EDGE_SLOTS_CONSULTED, EDGE_SLOTS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cost assigned to traversing an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeWeight {
    /// Manhattan distance between the two junction positions
    #[default]
    Manhattan,
    /// Distance recorded in the junction file for that slot
    Surveyed,
}

impl fmt::Display for EdgeWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manhattan => write!(f, "manhattan"),
            Self::Surveyed => write!(f, "surveyed"),
        }
    }
}

impl FromStr for EdgeWeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Self::Manhattan),
            "surveyed" => Ok(Self::Surveyed),
            other => Err(format!(
                "unknown edge weight '{}', expected 'manhattan' or 'surveyed'",
                other
            )),
        }
    }
}

/// A* search configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Destination slots consulted per junction (1..=4)
    pub edge_slots: usize,
    /// Edge cost model
    pub edge_weight: EdgeWeight,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            edge_slots: DEFAULT_EDGE_SLOTS_CONSULTED,
            edge_weight: EdgeWeight::Manhattan,
        }
    }
}

impl SearchConfig {
    /// Set the number of destination slots consulted
    pub fn with_edge_slots(mut self, edge_slots: usize) -> Self {
        self.edge_slots = edge_slots;
        self
    }

    /// Set the edge cost model
    pub fn with_edge_weight(mut self, edge_weight: EdgeWeight) -> Self {
        self.edge_weight = edge_weight;
        self
    }

    /// Slots actually consulted; out-of-range values are clamped
    pub(crate) fn effective_edge_slots(&self) -> usize {
        self.edge_slots.clamp(1, EDGE_SLOTS)
    }
}
