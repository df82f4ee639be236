//! Graph Shortest Path - Dijkstra over named, weighted graphs
//!
//! Nodes are identified by case-sensitive string names and joined by directed
//! connections with positive weights. A "two-way" connection is stored as two
//! independent directed records of equal weight.
//!
//! A computation never mutates the graph: [`Dijkstra`] produces a
//! [`ShortestPathResult`] holding the distance and predecessor of every node,
//! from which the path to any reachable destination can be extracted.
//!
//! ```
//! use graph_shortest_path::{compute_distances, extract_path, Dijkstra, Graph, MutableGraph};
//!
//! let mut graph = Graph::new();
//! for name in ["A", "B", "C"] {
//!     graph.add_node(name).unwrap();
//! }
//! graph.add_connection("A", "B", 1, true).unwrap();
//! graph.add_connection("B", "C", 2, true).unwrap();
//!
//! let distances = compute_distances(&graph, "A").unwrap();
//! assert_eq!(distances["C"], 3.0);
//!
//! let result = Dijkstra::new().compute(&graph, "A").unwrap();
//! assert_eq!(extract_path(&graph, &result, "A", "C").unwrap(), ["A", "B", "C"]);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    compute_distances,
    dijkstra::{Dijkstra, Frontier},
    path::{extract_path, shortest_path},
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{Connection, Graph, MutableGraph, NodeId, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Node already exists: {0}")]
    DuplicateNode(String),

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Node may not connect to itself: {0}")]
    SelfLoop(String),

    #[error("Connection weight must be positive, got {0}")]
    NonPositiveWeight(f64),

    #[error("Connection weight must be finite, got {0}")]
    NonFiniteWeight(f64),

    #[error("Starting node must be in graph: {0}")]
    UnknownSource(String),

    #[error("Destination is not reachable from the source: {0}")]
    UnreachableDestination(String),

    #[error("No path from {from} to {to} in the computed predecessors")]
    NoPath { from: String, to: String },

    #[error("Path length to {0} exceeds the largest finite distance")]
    DistanceOverflow(String),

    #[error(
        "Result was computed over {computed_nodes} nodes and {computed_edges} connections \
         but the graph now has {current_nodes} and {current_edges}"
    )]
    StaleResult {
        computed_nodes: usize,
        current_nodes: usize,
        computed_edges: usize,
        current_edges: usize,
    },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
