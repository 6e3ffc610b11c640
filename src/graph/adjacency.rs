use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};
use std::collections::HashMap;

/// A directed graph implementation using adjacency lists indexed by node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each node: node -> [(target, weight)]
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> AdjacencyGraph<W>
where
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            adjacency: Vec::new(),
        }
    }

    /// Creates a graph with `nodes` isolated nodes
    pub fn with_nodes(nodes: usize) -> Self {
        AdjacencyGraph {
            adjacency: vec![Vec::new(); nodes],
        }
    }

    /// Builds a graph from a node -> edges mapping.
    ///
    /// Nodes missing from the mapping are isolated. Every key and every edge
    /// target must be below `node_count`, and every weight must be valid.
    pub fn from_adjacency(map: HashMap<usize, Vec<(usize, W)>>, node_count: usize) -> Result<Self> {
        let mut graph = Self::with_nodes(node_count);

        // Sorted so that errors are reported deterministically
        let mut entries: Vec<_> = map.into_iter().collect();
        entries.sort_unstable_by_key(|(node, _)| *node);

        for (from, edges) in entries {
            if from >= node_count {
                return Err(Error::node_out_of_range(from, node_count));
            }
            for (to, weight) in edges {
                graph.add_edge(from, to, weight)?;
            }
        }

        Ok(graph)
    }

    /// Builds a graph from per-node edge lists, validating targets and weights
    pub fn from_lists(lists: Vec<Vec<(usize, W)>>) -> Result<Self> {
        let node_count = lists.len();
        for (from, edges) in lists.iter().enumerate() {
            for &(to, weight) in edges {
                check_edge(from, to, weight, node_count)?;
            }
        }
        Ok(AdjacencyGraph { adjacency: lists })
    }

    /// Adds an isolated node and returns its ID
    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Adds a directed edge. Parallel edges are kept.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        let node_count = self.adjacency.len();
        check_edge(from, to, weight, node_count)?;
        self.adjacency[from].push((to, weight));
        Ok(())
    }

    /// Returns the edge lists, indexed by node
    pub fn lists(&self) -> &[Vec<(usize, W)>] {
        &self.adjacency
    }
}

impl<W> Default for AdjacencyGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

fn check_edge<W: Weight>(from: usize, to: usize, weight: W, node_count: usize) -> Result<()> {
    if from >= node_count {
        return Err(Error::node_out_of_range(from, node_count));
    }
    if to >= node_count {
        return Err(Error::node_out_of_range(to, node_count));
    }
    if !weight.is_valid_weight() {
        return Err(Error::InvalidWeight {
            from,
            to,
            weight: weight.to_string(),
        });
    }
    Ok(())
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(node) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}
