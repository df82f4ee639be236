use log::warn;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathResult;
use crate::graph::{NodeId, WeightedGraph};
use crate::{Error, Result};

/// Follows predecessor links from `target` back to the result's source.
///
/// Returns the node ids in source-to-target order, or `None` when the target
/// is unreached or the chain is broken. The walk is bounded by the node count
/// so a corrupted predecessor table cannot loop forever.
pub fn walk_back(result: &ShortestPathResult, target: NodeId) -> Option<Vec<NodeId>> {
    if !result.is_reachable(target) {
        return None;
    }

    let mut path = vec![target];
    let mut current = target;
    while current != result.source {
        if path.len() > result.node_count() {
            warn!("predecessor chain from {} exceeds {} nodes", target, result.node_count());
            return None;
        }
        current = result.predecessor(current)?;
        path.push(current);
    }

    path.reverse();
    Some(path)
}

/// Extracts the shortest path from `source` to `destination` as node names.
///
/// `result` must have been computed on `graph` with `source` as its source.
/// Both endpoints are included, so a path from a node to itself is `[source]`.
pub fn extract_path<G: WeightedGraph>(
    graph: &G,
    result: &ShortestPathResult,
    source: &str,
    destination: &str,
) -> Result<Vec<String>> {
    // Nodes and connections are only ever added, so equal counts mean an unchanged graph
    if result.node_count() != graph.node_count() || result.edge_count != graph.edge_count() {
        return Err(Error::StaleResult {
            computed_nodes: result.node_count(),
            current_nodes: graph.node_count(),
            computed_edges: result.edge_count,
            current_edges: graph.edge_count(),
        });
    }

    let source_id = graph
        .node_id(source)
        .ok_or_else(|| Error::UnknownNode(source.to_string()))?;
    let destination_id = graph
        .node_id(destination)
        .ok_or_else(|| Error::UnknownNode(destination.to_string()))?;

    let no_path = || Error::NoPath {
        from: source.to_string(),
        to: destination.to_string(),
    };

    if source_id != result.source {
        return Err(no_path());
    }
    if !result.is_reachable(destination_id) {
        return Err(Error::UnreachableDestination(destination.to_string()));
    }

    let ids = walk_back(result, destination_id).ok_or_else(no_path)?;
    ids.into_iter()
        .map(|id| graph.node_name(id).map(str::to_string).ok_or_else(no_path))
        .collect()
}

/// Runs Dijkstra from `source` and returns the distance and path to `destination`
pub fn shortest_path<G: WeightedGraph>(
    graph: &G,
    source: &str,
    destination: &str,
) -> Result<(f64, Vec<String>)> {
    let result = Dijkstra::new().compute(graph, source)?;
    let path = extract_path(graph, &result, source, destination)?;
    let destination_id = graph
        .node_id(destination)
        .ok_or_else(|| Error::UnknownNode(destination.to_string()))?;
    Ok((result.distance(destination_id), path))
}
