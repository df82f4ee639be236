use crate::graph::traits::{MutableGraph, NodeId, WeightedGraph};
use crate::{Error, Result};
use num_traits::ToPrimitive;
use std::collections::HashMap;

/// A directed connection owned by its source node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// Node the connection points to
    pub target: NodeId,
    /// Positive, finite weight
    pub weight: f64,
}

#[derive(Debug, Clone)]
struct Node {
    name: String,
    connections: Vec<Connection>,
}

/// A graph of named nodes stored as adjacency lists
///
/// Nodes live in a dense vector and are addressed by [`NodeId`]; a name index
/// maps the caller's names onto those ids. Nothing is ever removed, so ids stay
/// valid for the lifetime of the graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    edge_count: usize,
}

impl Graph {
    /// Creates a new empty graph
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Returns the node names in insertion order
    pub fn node_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|node| node.name.as_str())
    }

    /// Returns the outgoing connections of a named node
    pub fn connections(&self, name: &str) -> Result<&[Connection]> {
        let id = self.require(name)?;
        Ok(&self.nodes[id].connections)
    }

    fn require(&self, name: &str) -> Result<NodeId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownNode(name.to_string()))
    }
}

/// Validates and widens a weight to `f64`
fn validate_weight<W: ToPrimitive>(weight: W) -> Result<f64> {
    let weight = weight.to_f64().ok_or(Error::NonFiniteWeight(f64::NAN))?;
    // NaN fails this comparison as well
    if !(weight > 0.0) {
        return Err(Error::NonPositiveWeight(weight));
    }
    if !weight.is_finite() {
        return Err(Error::NonFiniteWeight(weight));
    }
    Ok(weight)
}

impl WeightedGraph for Graph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    fn node_name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).map(|node| node.name.as_str())
    }

    fn outgoing_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, f64)> + '_> {
        if let Some(node) = self.nodes.get(node) {
            Box::new(node.connections.iter().map(|c| (c.target, c.weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl MutableGraph for Graph {
    fn add_node(&mut self, name: impl Into<String>) -> Result<NodeId> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(Error::DuplicateNode(name));
        }

        let id = self.nodes.len();
        self.index.insert(name.clone(), id);
        self.nodes.push(Node {
            name,
            connections: Vec::new(),
        });
        Ok(id)
    }

    fn add_connection<W>(&mut self, from: &str, to: &str, weight: W, two_way: bool) -> Result<()>
    where
        W: ToPrimitive,
    {
        // Validate everything before touching the adjacency lists
        let from_id = self.require(from)?;
        let to_id = self.require(to)?;
        if from_id == to_id {
            return Err(Error::SelfLoop(from.to_string()));
        }
        let weight = validate_weight(weight)?;

        self.nodes[from_id].connections.push(Connection {
            target: to_id,
            weight,
        });
        self.edge_count += 1;

        if two_way {
            self.nodes[to_id].connections.push(Connection {
                target: from_id,
                weight,
            });
            self.edge_count += 1;
        }

        Ok(())
    }
}
