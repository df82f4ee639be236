use crate::data_structures::FrontierQueue;
use crate::graph::NodeId;

/// Frontier that scans every node for the smallest tentative distance
///
/// Each pop is O(V), so a full run is O(V²). Kept for small dense graphs and
/// as a cross-check for the heap frontier.
#[derive(Debug, Clone)]
pub struct LinearScanFrontier {
    tentative: Vec<f64>,
}

impl LinearScanFrontier {
    /// Creates a frontier over `nodes` nodes, all unreached
    pub fn new(nodes: usize) -> Self {
        LinearScanFrontier {
            tentative: vec![f64::INFINITY; nodes],
        }
    }
}

impl FrontierQueue for LinearScanFrontier {
    fn push(&mut self, node: NodeId, distance: f64) {
        if let Some(current) = self.tentative.get_mut(node) {
            if distance < *current {
                *current = distance;
            }
        }
    }

    fn pop_min(&mut self, settled: &[bool]) -> Option<(NodeId, f64)> {
        let mut best: Option<(NodeId, f64)> = None;
        for (node, &distance) in self.tentative.iter().enumerate() {
            if settled.get(node).copied().unwrap_or(true) || !distance.is_finite() {
                continue;
            }
            // First node wins ties
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((node, distance));
            }
        }
        best
    }
}
