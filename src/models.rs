//! Core data structures for map loading and route planning.
//!
//! Defines the planar and geographic coordinate types, the catalog's map
//! definitions, junctions and the immutable junction graph the planner
//! searches, plus the route it produces.

use crate::constants::{EDGE_SLOTS, MAX_JUNCTIONS};
use crate::error::GraphError;
use serde::{Deserialize, Serialize};

// =============================================================================
// Coordinates
// =============================================================================

/// Local planar position in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position2D {
    pub east_mm: i64,
    pub north_mm: i64,
}

impl Position2D {
    pub fn new(east_mm: i64, north_mm: i64) -> Self {
        Self { east_mm, north_mm }
    }

    /// Grid distance `|Δeast| + |Δnorth|` in millimeters
    pub fn manhattan_distance(&self, other: &Position2D) -> u64 {
        self.east_mm
            .abs_diff(other.east_mm)
            .saturating_add(self.north_mm.abs_diff(other.north_mm))
    }
}

/// Geographic position used only to pick the nearest regional map
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Squared coordinate difference `(Δlat)² + (Δlon)²`.
    ///
    /// Not a geodesic distance; only its ordering matters.
    pub fn squared_distance(&self, other: &GeoCoordinate) -> f64 {
        let lat_diff = self.latitude - other.latitude;
        let lon_diff = self.longitude - other.longitude;
        lat_diff * lat_diff + lon_diff * lon_diff
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// One candidate regional map from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDefinition {
    pub position: GeoCoordinate,
    pub filename: String,
}

impl MapDefinition {
    pub fn new(position: GeoCoordinate, filename: impl Into<String>) -> Self {
        Self {
            position,
            filename: filename.into(),
        }
    }
}

// =============================================================================
// Junctions
// =============================================================================

/// A node of the routing graph.
///
/// Edges are directional. An unused destination slot is `None`; the
/// matching distance is still stored because the file format always
/// carries four distances.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Junction {
    pub position: Position2D,
    pub destinations: [Option<usize>; EDGE_SLOTS],
    pub distances_mm: [u64; EDGE_SLOTS],
}

impl Junction {
    pub fn new(
        position: Position2D,
        destinations: [Option<usize>; EDGE_SLOTS],
        distances_mm: [u64; EDGE_SLOTS],
    ) -> Self {
        Self {
            position,
            destinations,
            distances_mm,
        }
    }

    /// Used edges among the first `slots` destination slots, as
    /// `(slot, target, surveyed_distance_mm)`
    pub fn edges(&self, slots: usize) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        self.destinations
            .iter()
            .take(slots.min(EDGE_SLOTS))
            .enumerate()
            .filter_map(|(slot, target)| target.map(|t| (slot, t, self.distances_mm[slot])))
    }
}

/// Immutable junction graph built once per load.
///
/// Deserialization goes through [`JunctionGraph::new`], so a deserialized
/// graph is checked the same way as a loaded one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGraph")]
pub struct JunctionGraph {
    nodes: Vec<Junction>,
}

/// Serialized form of [`JunctionGraph`] before validation
#[derive(Deserialize)]
struct UncheckedGraph {
    nodes: Vec<Junction>,
}

impl TryFrom<UncheckedGraph> for JunctionGraph {
    type Error = GraphError;

    fn try_from(unchecked: UncheckedGraph) -> Result<Self, Self::Error> {
        Self::new(unchecked.nodes)
    }
}

impl JunctionGraph {
    /// Build a graph, checking capacity and that every used destination
    /// slot names a node of this graph
    pub fn new(nodes: Vec<Junction>) -> Result<Self, GraphError> {
        if nodes.len() > MAX_JUNCTIONS {
            return Err(GraphError::CapacityExceeded {
                count: nodes.len(),
                capacity: MAX_JUNCTIONS,
            });
        }

        let node_count = nodes.len();
        for (row, junction) in nodes.iter().enumerate() {
            if let Some((slot, target, _)) = junction
                .edges(EDGE_SLOTS)
                .find(|&(_, target, _)| target >= node_count)
            {
                return Err(GraphError::DanglingEdge {
                    row,
                    slot,
                    target,
                    node_count,
                });
            }
        }

        Ok(Self { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> Option<&Junction> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[Junction] {
        &self.nodes
    }

    /// Manhattan distance between two nodes; both indices must be in range
    pub(crate) fn manhattan(&self, from: usize, to: usize) -> u64 {
        self.nodes[from]
            .position
            .manhattan_distance(&self.nodes[to].position)
    }
}

// =============================================================================
// Routes
// =============================================================================

/// Ordered junction indices from start to goal inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub nodes: Vec<usize>,
    /// Accumulated g-score of the goal, in millimeters
    pub cost_mm: u64,
    /// Nodes moved to the closed set before the goal was selected
    pub nodes_expanded: usize,
}

impl Route {
    pub fn start(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    pub fn goal(&self) -> Option<usize> {
        self.nodes.last().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Expand the route into positioned waypoints.
    ///
    /// Cumulative distance is the Manhattan length along the route. Indices
    /// not present in `graph` are skipped.
    pub fn waypoints(&self, graph: &JunctionGraph) -> Vec<RouteWaypoint> {
        let mut waypoints = Vec::with_capacity(self.nodes.len());
        let mut cumulative_mm = 0u64;
        let mut previous: Option<Position2D> = None;

        for &junction in &self.nodes {
            let Some(node) = graph.node(junction) else {
                continue;
            };
            if let Some(prev) = previous {
                cumulative_mm = cumulative_mm.saturating_add(prev.manhattan_distance(&node.position));
            }
            waypoints.push(RouteWaypoint {
                sequence: waypoints.len(),
                junction,
                position: node.position,
                cumulative_mm,
            });
            previous = Some(node.position);
        }

        waypoints
    }
}

/// A route step resolved to a planar position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteWaypoint {
    pub sequence: usize,
    pub junction: usize,
    pub position: Position2D,
    pub cumulative_mm: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn junction(east: i64, north: i64, destinations: [Option<usize>; 4]) -> Junction {
        Junction::new(Position2D::new(east, north), destinations, [0; 4])
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Position2D::new(-100, 50);
        let b = Position2D::new(200, -50);
        assert_eq!(a.manhattan_distance(&b), 400);
        assert_eq!(b.manhattan_distance(&a), 400);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn test_squared_distance() {
        let here = GeoCoordinate::new(47.0, -122.0);
        let there = GeoCoordinate::new(50.0, -118.0);
        assert!((here.squared_distance(&there) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_edges_skip_unused_slots() {
        let mut node = junction(0, 0, [Some(1), None, Some(2), Some(3)]);
        node.distances_mm = [10, 20, 30, 40];

        let edges: Vec<_> = node.edges(3).collect();
        assert_eq!(edges, vec![(0, 1, 10), (2, 2, 30)]);

        let all: Vec<_> = node.edges(4).collect();
        assert_eq!(all.len(), 3);
        assert_eq!(all[2], (3, 3, 40));
    }

    #[test]
    fn test_graph_rejects_dangling_edge() {
        let nodes = vec![
            junction(0, 0, [Some(1), None, None, None]),
            junction(100, 0, [Some(5), None, None, None]),
        ];
        let err = JunctionGraph::new(nodes).unwrap_err();
        assert_eq!(
            err,
            GraphError::DanglingEdge {
                row: 1,
                slot: 0,
                target: 5,
                node_count: 2
            }
        );
    }

    #[test]
    fn test_graph_rejects_dangling_fourth_slot() {
        // The fourth slot is validated even though the default search ignores it
        let nodes = vec![junction(0, 0, [None, None, None, Some(1)])];
        assert!(matches!(
            JunctionGraph::new(nodes),
            Err(GraphError::DanglingEdge { slot: 3, .. })
        ));
    }

    #[test]
    fn test_graph_capacity() {
        let nodes = vec![Junction::default(); MAX_JUNCTIONS + 1];
        assert!(matches!(
            JunctionGraph::new(nodes),
            Err(GraphError::CapacityExceeded { count: 31, .. })
        ));
    }

    #[test]
    fn test_route_waypoints() {
        let graph = JunctionGraph::new(vec![
            junction(0, 0, [Some(1), None, None, None]),
            junction(100, 0, [Some(2), None, None, None]),
            junction(100, 250, [None, None, None, None]),
        ])
        .unwrap();
        let route = Route {
            nodes: vec![0, 1, 2],
            cost_mm: 350,
            nodes_expanded: 2,
        };

        let waypoints = route.waypoints(&graph);
        assert_eq!(waypoints.len(), 3);
        assert_eq!(waypoints[0].cumulative_mm, 0);
        assert_eq!(waypoints[1].cumulative_mm, 100);
        assert_eq!(waypoints[2].cumulative_mm, 350);
        assert_eq!(waypoints[2].position, Position2D::new(100, 250));
        assert_eq!(route.start(), Some(0));
        assert_eq!(route.goal(), Some(2));
    }

    #[test]
    fn test_graph_serde_round_trip() {
        let graph = JunctionGraph::new(vec![
            junction(0, 0, [Some(1), None, None, None]),
            junction(100, 0, [Some(0), None, None, None]),
        ])
        .unwrap();
        let json = serde_json::to_string(&graph).unwrap();
        let deserialized: JunctionGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(graph, deserialized);
    }

    #[test]
    fn test_graph_deserialize_rejects_dangling_edge() {
        let nodes = vec![
            junction(0, 0, [Some(7), None, None, None]),
            junction(100, 0, [None, None, None, None]),
        ];
        let json = serde_json::json!({ "nodes": nodes }).to_string();

        let err = serde_json::from_str::<JunctionGraph>(&json).unwrap_err();
        assert!(err.to_string().contains("points at node 7"));
    }

    #[test]
    fn test_graph_deserialize_rejects_over_capacity() {
        let nodes = vec![Junction::default(); MAX_JUNCTIONS + 1];
        let json = serde_json::json!({ "nodes": nodes }).to_string();
        assert!(serde_json::from_str::<JunctionGraph>(&json).is_err());
    }

    #[test]
    fn test_serde_serialization() {
        let definition = MapDefinition::new(GeoCoordinate::new(47.6, -122.3), "MAP1.TXT");
        let json = serde_json::to_string(&definition).unwrap();
        let deserialized: MapDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(definition, deserialized);
    }
}
