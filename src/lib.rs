//! SSSP Engine - single-source shortest paths with a lazy-deletion Dijkstra
//!
//! The engine computes, for every node of a weighted directed graph, the minimum
//! sum of edge weights from a source node. Edge weights must be non-negative.
//! Unreachable nodes are reported as `None` in the returned [`DistanceMap`].
//!
//! Around the engine the crate ships a JSON graph loader, a result reporter,
//! a timing wrapper, a random graph generator and a small HTTP API.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod web;

pub use algorithm::{
    dijkstra::{compute_distances, Dijkstra},
    DistanceMap, ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, Graph, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid source node {node}: graph has {node_count} nodes")]
    InvalidSource { node: usize, node_count: usize },

    #[error("Invalid weight {weight} on edge {from} -> {to}: weights must be non-negative")]
    InvalidWeight {
        from: usize,
        to: usize,
        weight: String,
    },

    #[error("Invalid node count {node_count}: {reason}")]
    InvalidNodeCount { node_count: usize, reason: String },

    #[error("Distance to node {node} overflows the weight type")]
    DistanceOverflow { node: usize },

    #[error("Invalid generator config: {0}")]
    InvalidConfig(String),

    #[error("Malformed graph description: {0}")]
    MalformedGraph(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn node_out_of_range(node: usize, node_count: usize) -> Self {
        Error::InvalidNodeCount {
            node_count,
            reason: format!("node {} is outside [0, {})", node, node_count),
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
