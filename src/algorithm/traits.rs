use std::collections::HashMap;

use crate::algorithm::path;
use crate::graph::{NodeId, WeightedGraph};
use crate::Result;

/// Result of a shortest path algorithm execution
///
/// The record is independent of the graph it was computed on; node ids are
/// resolved back to names through that graph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShortestPathResult {
    /// Distances from source to each node, `f64::INFINITY` when unreached
    pub distances: Vec<f64>,

    /// Predecessor nodes in the shortest path tree
    pub predecessors: Vec<Option<NodeId>>,

    /// Source node ID
    pub source: NodeId,

    /// Number of connections the graph had when this result was computed
    pub edge_count: usize,
}

impl ShortestPathResult {
    /// Number of nodes the graph had when this result was computed
    pub fn node_count(&self) -> usize {
        self.distances.len()
    }

    /// Distance to a node, infinite when unreached or unknown
    pub fn distance(&self, node: NodeId) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// Returns true if the node has a finite distance
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_finite()
    }

    /// Number of nodes with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Predecessor of a node on its shortest path
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node).copied().flatten()
    }

    /// Distances keyed by node name
    pub fn distance_map<G: WeightedGraph>(&self, graph: &G) -> HashMap<String, f64> {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(id, &distance)| {
                graph.node_name(id).map(|name| (name.to_string(), distance))
            })
            .collect()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<G>
where
    G: WeightedGraph,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: NodeId) -> Result<ShortestPathResult>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    ///
    /// Returns `None` if the target is unreachable or the predecessors do not
    /// lead back to the source.
    fn get_path(&self, result: &ShortestPathResult, target: NodeId) -> Option<Vec<NodeId>> {
        path::walk_back(result, target)
    }
}
