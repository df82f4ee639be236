pub mod linear_scan;
pub mod priority_queue;

pub use linear_scan::LinearScanFrontier;
pub use priority_queue::BinaryHeapFrontier;

use crate::graph::NodeId;

/// The set of nodes Dijkstra has reached but not yet settled
pub trait FrontierQueue {
    /// Records a tentative distance for a node
    fn push(&mut self, node: NodeId, distance: f64);

    /// Removes and returns the unsettled node with the smallest finite distance.
    ///
    /// Returns `None` once every remaining node is settled or unreached.
    fn pop_min(&mut self, settled: &[bool]) -> Option<(NodeId, f64)>;
}
