use log::{debug, trace};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{BinaryHeapFrontier, FrontierQueue, LinearScanFrontier};
use crate::graph::{NodeId, WeightedGraph};
use crate::{Error, Result};

/// How Dijkstra picks the next node to settle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frontier {
    /// Binary heap with lazy deletion, O((V + E) log V)
    #[default]
    BinaryHeap,
    /// Scan all unsettled nodes on every step, O(V²)
    LinearScan,
}

/// Classic Dijkstra's algorithm implementation
///
/// Both frontier strategies produce the same distances. They may pick
/// different predecessors when several shortest paths have equal weight.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    frontier: Frontier,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance using the heap frontier
    pub fn new() -> Self {
        Dijkstra {
            frontier: Frontier::BinaryHeap,
        }
    }

    /// Set the frontier strategy
    pub fn with_frontier(mut self, frontier: Frontier) -> Self {
        self.frontier = frontier;
        self
    }

    /// The configured frontier strategy
    pub fn frontier(&self) -> Frontier {
        self.frontier
    }

    /// Compute shortest paths from the node called `source`
    pub fn compute<G: WeightedGraph>(&self, graph: &G, source: &str) -> Result<ShortestPathResult> {
        let id = graph
            .node_id(source)
            .ok_or_else(|| Error::UnknownSource(source.to_string()))?;
        self.compute_shortest_paths(graph, id)
    }

    fn run<G, F>(graph: &G, source: NodeId, mut frontier: F) -> Result<ShortestPathResult>
    where
        G: WeightedGraph,
        F: FrontierQueue,
    {
        let n = graph.node_count();

        // Initialize distances and predecessors
        let mut distances = vec![f64::INFINITY; n];
        let mut predecessors: Vec<Option<NodeId>> = vec![None; n];
        let mut settled = vec![false; n];

        distances[source] = 0.0;
        frontier.push(source, 0.0);

        let mut settled_count = 0usize;
        while let Some((u, _)) = frontier.pop_min(&settled) {
            settled[u] = true;
            settled_count += 1;
            let dist_u = distances[u];

            // Relax edges into the frontier only
            for (v, weight) in graph.outgoing_edges(u) {
                if settled[v] {
                    continue;
                }
                let candidate = dist_u + weight;
                // Finite operands summing to infinity
                if candidate.is_infinite() {
                    let name = graph
                        .node_name(v)
                        .map_or_else(|| format!("#{}", v), str::to_string);
                    return Err(Error::DistanceOverflow(name));
                }
                if candidate < distances[v] {
                    trace!("relax {} -> {}: {} -> {}", u, v, distances[v], candidate);
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    frontier.push(v, candidate);
                }
            }
        }

        debug!("dijkstra from {} settled {} of {} nodes", source, settled_count, n);

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
            edge_count: graph.edge_count(),
        })
    }
}

impl<G> ShortestPathAlgorithm<G> for Dijkstra
where
    G: WeightedGraph,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: NodeId) -> Result<ShortestPathResult> {
        let n = graph.node_count();
        if source >= n {
            return Err(Error::UnknownSource(format!("#{}", source)));
        }

        debug!(
            "dijkstra start: source={:?} nodes={} edges={} frontier={:?}",
            graph.node_name(source),
            n,
            graph.edge_count(),
            self.frontier
        );

        match self.frontier {
            Frontier::BinaryHeap => Self::run(graph, source, BinaryHeapFrontier::with_capacity(n)),
            Frontier::LinearScan => Self::run(graph, source, LinearScanFrontier::new(n)),
        }
    }
}
