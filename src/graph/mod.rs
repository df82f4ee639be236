pub mod traits;
pub mod named;
pub mod generators;

pub use traits::{MutableGraph, NodeId, WeightedGraph};
pub use named::{Connection, Graph};
