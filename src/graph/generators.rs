use crate::graph::{AdjacencyGraph, Graph};
use crate::{Error, Result};
use rand::seq::index;
use rand::Rng;
use serde_json::{json, Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Parameters for random graph generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of distinct neighbours sampled per node (self loops are dropped afterwards)
    pub max_neighbors: usize,
    /// Smallest edge weight, inclusive
    pub min_weight: i64,
    /// Largest edge weight, inclusive
    pub max_weight: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_neighbors: 5,
            min_weight: 1,
            max_weight: 60,
        }
    }
}

/// Generates a random directed graph with `n` nodes.
///
/// Each node samples `min(max_neighbors, n)` distinct candidate neighbours; a
/// candidate equal to the node itself is skipped, so a node may end up with one
/// edge fewer. Weights are uniform in `min_weight..=max_weight`.
pub fn generate_random_graph<R>(n: usize, config: &GeneratorConfig, rng: &mut R) -> Result<AdjacencyGraph<i64>>
where
    R: Rng + ?Sized,
{
    if config.min_weight > config.max_weight {
        return Err(Error::InvalidConfig(format!(
            "min_weight {} is greater than max_weight {}",
            config.min_weight, config.max_weight
        )));
    }

    let mut graph = AdjacencyGraph::with_nodes(n);
    let amount = config.max_neighbors.min(n);

    for i in 0..n {
        for j in index::sample(rng, n, amount).into_iter() {
            if j == i {
                continue;
            }
            let weight = rng.gen_range(config.min_weight..=config.max_weight);
            graph.add_edge(i, j, weight)?;
        }
    }

    log::debug!("generated graph with {} nodes and {} edges", n, graph.edge_count());
    Ok(graph)
}

/// Serializes a graph in the loader's JSON format: `{"0": [["1", 7], ...], ...}`
pub fn to_json_value(graph: &AdjacencyGraph<i64>) -> Value {
    let mut object = Map::with_capacity(graph.node_count());
    for (node, edges) in graph.lists().iter().enumerate() {
        let pairs: Vec<Value> = edges
            .iter()
            .map(|(target, weight)| json!([target.to_string(), weight]))
            .collect();
        object.insert(node.to_string(), Value::Array(pairs));
    }
    Value::Object(object)
}

/// Writes a graph as pretty-printed JSON to `path`
pub fn write_graph_json(graph: &AdjacencyGraph<i64>, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &to_json_value(graph))?;
    writer.flush()?;
    Ok(())
}
