//! A* search over a junction graph.

use super::types::{EdgeWeight, SearchConfig};
use crate::error::PathFailure;
use crate::models::{JunctionGraph, Route};
use tracing::{debug, trace};

/// A* route planner bound to one graph
#[derive(Debug, Clone)]
pub struct PathPlanner<'a> {
    graph: &'a JunctionGraph,
    config: SearchConfig,
}

/// Per-node search state, indexed by junction
struct SearchState {
    open: Vec<bool>,
    closed: Vec<bool>,
    g_score: Vec<Option<u64>>,
    f_score: Vec<Option<u64>>,
    came_from: Vec<Option<usize>>,
}

impl SearchState {
    fn new(node_count: usize) -> Self {
        Self {
            open: vec![false; node_count],
            closed: vec![false; node_count],
            g_score: vec![None; node_count],
            f_score: vec![None; node_count],
            came_from: vec![None; node_count],
        }
    }

    /// Open node with the smallest f-score; ties go to the lowest index
    fn lowest_open(&self) -> Option<usize> {
        self.open
            .iter()
            .enumerate()
            .filter(|&(_, &open)| open)
            .filter_map(|(index, _)| self.f_score[index].map(|f| (index, f)))
            .min_by_key(|&(_, f)| f)
            .map(|(index, _)| index)
    }
}

impl<'a> PathPlanner<'a> {
    pub fn new(graph: &'a JunctionGraph, config: SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Planner with the default search configuration
    pub fn with_defaults(graph: &'a JunctionGraph) -> Self {
        Self::new(graph, SearchConfig::default())
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find a route from `start` to `goal`, both junction indices.
    ///
    /// The search is deterministic: the same graph, endpoints and config
    /// always yield the same route.
    pub fn find_path(&self, start: usize, goal: usize) -> Result<Route, PathFailure> {
        let node_count = self.graph.len();
        trace!(
            "[AStar] find_path: start={} goal={} nodes={}",
            start, goal, node_count
        );

        if start >= node_count {
            debug!("[AStar] FAILED: start {} out of range", start);
            return Err(PathFailure::StartOutOfRange { start, node_count });
        }
        if goal >= node_count {
            debug!("[AStar] FAILED: goal {} out of range", goal);
            return Err(PathFailure::GoalOutOfRange { goal, node_count });
        }

        let edge_slots = self.config.effective_edge_slots();
        let mut state = SearchState::new(node_count);
        state.open[start] = true;
        state.g_score[start] = Some(0);
        state.f_score[start] = Some(self.graph.manhattan(start, goal));

        let mut nodes_expanded = 0;

        while let Some(current) = state.lowest_open() {
            if current == goal {
                let route = Self::reconstruct_path(&state, goal, nodes_expanded);
                debug!(
                    "[AStar] Found route of {} junctions, cost {} mm, {} nodes expanded",
                    route.len(),
                    route.cost_mm,
                    nodes_expanded
                );
                return Ok(route);
            }

            state.open[current] = false;
            state.closed[current] = true;
            nodes_expanded += 1;

            let (Some(junction), Some(current_g)) =
                (self.graph.node(current), state.g_score[current])
            else {
                continue;
            };
            trace!("[AStar] expand {} (g={})", current, current_g);

            for (slot, neighbor, surveyed_mm) in junction.edges(edge_slots) {
                if state.closed[neighbor] {
                    continue;
                }

                let tentative_g = current_g.saturating_add(self.edge_cost(current, neighbor, surveyed_mm));
                if state.open[neighbor]
                    && state.g_score[neighbor].is_some_and(|known| tentative_g >= known)
                {
                    continue;
                }

                trace!(
                    "[AStar]   slot {} -> {} (g={})",
                    slot, neighbor, tentative_g
                );
                state.open[neighbor] = true;
                state.came_from[neighbor] = Some(current);
                state.g_score[neighbor] = Some(tentative_g);
                state.f_score[neighbor] =
                    Some(tentative_g.saturating_add(self.graph.manhattan(neighbor, goal)));
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        Err(PathFailure::NoPath { start, goal })
    }

    fn edge_cost(&self, from: usize, to: usize, surveyed_mm: u64) -> u64 {
        match self.config.edge_weight {
            EdgeWeight::Manhattan => self.graph.manhattan(from, to),
            EdgeWeight::Surveyed => surveyed_mm,
        }
    }

    /// Walk predecessors back from the goal and reverse
    fn reconstruct_path(state: &SearchState, goal: usize, nodes_expanded: usize) -> Route {
        let mut nodes = vec![goal];
        let mut current = goal;

        while let Some(previous) = state.came_from[current] {
            nodes.push(previous);
            current = previous;
        }
        nodes.reverse();

        Route {
            nodes,
            cost_mm: state.g_score[goal].unwrap_or_default(),
            nodes_expanded,
        }
    }
}
