use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::data_structures::FrontierQueue;
use crate::graph::NodeId;

/// Binary min-heap frontier with lazy deletion
///
/// A node may be pushed several times as its distance improves. Older entries
/// are discarded on pop because the node is already settled by then.
#[derive(Debug, Default)]
pub struct BinaryHeapFrontier {
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(OrderedFloat<f64>, NodeId)>>,
}

impl BinaryHeapFrontier {
    /// Creates a new empty frontier
    pub fn new() -> Self {
        BinaryHeapFrontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates a new empty frontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeapFrontier {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if no entries, stale or live, remain
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries including stale ones
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl FrontierQueue for BinaryHeapFrontier {
    fn push(&mut self, node: NodeId, distance: f64) {
        self.heap.push(Reverse((OrderedFloat(distance), node)));
    }

    fn pop_min(&mut self, settled: &[bool]) -> Option<(NodeId, f64)> {
        while let Some(Reverse((distance, node))) = self.heap.pop() {
            if settled.get(node).copied().unwrap_or(true) {
                continue;
            }
            let distance = distance.into_inner();
            if distance.is_finite() {
                return Some((node, distance));
            }
        }
        None
    }
}
