pub mod traits;
pub mod dijkstra;
pub mod path;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};

use std::collections::HashMap;

use crate::graph::WeightedGraph;
use crate::Result;
use dijkstra::Dijkstra;

/// Computes the shortest distance from `source` to every node, keyed by node name.
///
/// Unreachable nodes map to `f64::INFINITY`. A path whose total weight exceeds
/// `f64::MAX` fails with [`Error::DistanceOverflow`](crate::Error::DistanceOverflow)
/// instead of reading as unreached.
pub fn compute_distances<G: WeightedGraph>(
    graph: &G,
    source: &str,
) -> Result<HashMap<String, f64>> {
    let result = Dijkstra::new().compute(graph, source)?;
    Ok(result.distance_map(graph))
}
