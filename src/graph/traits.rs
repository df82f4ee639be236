use num_traits::ToPrimitive;
use std::fmt::Debug;

use crate::Result;

/// Dense identifier of a node inside one graph
pub type NodeId = usize;

/// Trait representing a weighted directed graph with named nodes
pub trait WeightedGraph: Debug {
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of directed connections in the graph
    fn edge_count(&self) -> usize;

    /// Resolves a node name to its identifier
    fn node_id(&self, name: &str) -> Option<NodeId>;

    /// Resolves a node identifier back to its name
    fn node_name(&self, id: NodeId) -> Option<&str>;

    /// Returns an iterator over the outgoing connections of a node as `(target, weight)`
    fn outgoing_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, f64)> + '_>;

    /// Returns true if a node with this name exists
    fn contains_node(&self, name: &str) -> bool {
        self.node_id(name).is_some()
    }

    /// Returns true if there's at least one connection from `from` to `to`
    fn has_connection(&self, from: &str, to: &str) -> bool {
        self.connection_weight(from, to).is_some()
    }

    /// Gets the cheapest weight of the connections from `from` to `to`
    fn connection_weight(&self, from: &str, to: &str) -> Option<f64> {
        let from = self.node_id(from)?;
        let to = self.node_id(to)?;
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .reduce(f64::min)
    }
}

/// Trait for graph construction
pub trait MutableGraph: WeightedGraph {
    /// Adds a node and returns its identifier
    fn add_node(&mut self, name: impl Into<String>) -> Result<NodeId>;

    /// Adds a directed connection, mirrored in the other direction when `two_way` is set.
    ///
    /// Integer weights are widened to `f64`. The call either succeeds completely
    /// or leaves the graph untouched.
    fn add_connection<W>(&mut self, from: &str, to: &str, weight: W, two_way: bool) -> Result<()>
    where
        W: ToPrimitive;
}
