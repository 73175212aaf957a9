//! Classic SSSP - Bellman-Ford, Dijkstra and Floyd-Warshall shortest paths
//!
//! This library computes shortest paths in weighted directed graphs with the
//! three classical algorithms and reconstructs the paths behind the reported
//! distances.
//!
//! Unreachable distances are `None` rather than a floating-point infinity, so
//! integer weights and `OrderedFloat<f64>` weights work the same way.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, floyd_warshall::FloydWarshall,
    AllPairsAlgorithm, AllPairsResult, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::{Graph, MutableGraph, Vertex, VertexIndex, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Negative weight cycle reachable from the source (still relaxing at {0})")]
    NegativeCycle(String),

    #[error("Negative edge weight {weight} on edge from {from} to {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Path reconstruction did not terminate within {0} steps")]
    PathCycle(usize),

    #[error("Broken path structure: {0}")]
    BrokenPath(String),
}

impl Error {
    pub(crate) fn unknown_vertex<V: std::fmt::Debug>(vertex: &V) -> Self {
        Error::UnknownVertex(format!("{:?}", vertex))
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
