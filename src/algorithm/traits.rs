use std::ops::Index;

use crate::graph::{Graph, Weight};
use crate::Result;

/// Distances from a source node, indexed by node ID
///
/// `None` marks a node with no path from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap<W>
where
    W: Weight,
{
    /// Source node ID
    source: usize,

    /// Distance from source to each node
    distances: Vec<Option<W>>,
}

impl<W> DistanceMap<W>
where
    W: Weight,
{
    pub fn new(source: usize, distances: Vec<Option<W>>) -> Self {
        DistanceMap { source, distances }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of nodes covered by the mapping
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance to `node`, or `None` if it is unreachable or out of range
    pub fn get(&self, node: usize) -> Option<W> {
        self.distances.get(node).copied().flatten()
    }

    pub fn is_reachable(&self, node: usize) -> bool {
        self.get(node).is_some()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Iterates over `(node, distance)` pairs in node order
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<W>)> + '_ {
        self.distances.iter().copied().enumerate()
    }

    pub fn as_slice(&self) -> &[Option<W>] {
        &self.distances
    }

    pub fn into_vec(self) -> Vec<Option<W>> {
        self.distances
    }

    /// Flattens the mapping, writing `sentinel` for unreachable nodes
    pub fn to_sentinel_vec(&self, sentinel: W) -> Vec<W> {
        self.distances.iter().map(|d| d.unwrap_or(sentinel)).collect()
    }
}

impl<W> Index<usize> for DistanceMap<W>
where
    W: Weight,
{
    type Output = Option<W>;

    fn index(&self, node: usize) -> &Self::Output {
        &self.distances[node]
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute distances from a source node to every node of the graph
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<DistanceMap<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
