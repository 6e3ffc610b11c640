//! JSON graph loader
//!
//! The accepted format is an object mapping node keys to lists of
//! `[neighbor, weight]` pairs:
//!
//! ```json
//! { "0": [["1", 4], [2, "1"]], "1": [[3, 1]], "2": [], "3": [] }
//! ```
//!
//! Neighbors and weights may be JSON integers or strings holding an integer.
//! The node count is the number of keys; keys and neighbors must lie in
//! `0..node_count`.

use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::graph::{AdjacencyGraph, Graph};
use crate::{Error, Result};

/// Loads a graph from a JSON file
pub fn load_graph_from_path<P: AsRef<Path>>(path: P) -> Result<AdjacencyGraph<i64>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let graph = load_graph_from_reader(BufReader::new(file))?;
    log::info!(
        "loaded graph from {}: {} nodes, {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

pub fn load_graph_from_reader<R: Read>(reader: R) -> Result<AdjacencyGraph<i64>> {
    let value: Value = serde_json::from_reader(reader)?;
    load_graph_from_value(&value)
}

pub fn load_graph_from_str(text: &str) -> Result<AdjacencyGraph<i64>> {
    let value: Value = serde_json::from_str(text)?;
    load_graph_from_value(&value)
}

/// Converts an already parsed JSON document into a graph
pub fn load_graph_from_value(value: &Value) -> Result<AdjacencyGraph<i64>> {
    let object = value.as_object().ok_or_else(|| {
        Error::MalformedGraph(format!(
            "expected an object mapping nodes to edge lists, found {}",
            kind_of(value)
        ))
    })?;

    let node_count = object.len();
    let mut adjacency: HashMap<usize, Vec<(usize, i64)>> = HashMap::with_capacity(node_count);

    for (key, neighbors) in object {
        let node = parse_integer(key)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| Error::MalformedGraph(format!("node key {:?} is not a node ID", key)))?;

        let entries = neighbors.as_array().ok_or_else(|| {
            Error::MalformedGraph(format!(
                "node {}: expected a list of [neighbor, weight] pairs, found {}",
                key,
                kind_of(neighbors)
            ))
        })?;

        let mut edges = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            edges.push(parse_edge(key, index, entry)?);
        }

        // "1" and "01" parse to the same node
        if adjacency.insert(node, edges).is_some() {
            return Err(Error::MalformedGraph(format!("node {} is listed more than once", node)));
        }
    }

    AdjacencyGraph::from_adjacency(adjacency, node_count)
}

fn parse_edge(key: &str, index: usize, entry: &Value) -> Result<(usize, i64)> {
    let pair = match entry.as_array() {
        Some(pair) if pair.len() == 2 => pair,
        _ => {
            return Err(Error::MalformedGraph(format!(
                "node {}, entry {}: expected a [neighbor, weight] pair, found {}",
                key, index, entry
            )))
        }
    };

    let neighbor = integer_field(&pair[0])
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| {
            Error::MalformedGraph(format!(
                "node {}, entry {}: neighbor {} is not a node ID",
                key, index, pair[0]
            ))
        })?;

    let weight = integer_field(&pair[1]).ok_or_else(|| {
        Error::MalformedGraph(format!(
            "node {}, entry {}: weight {} is not an integer",
            key, index, pair[1]
        ))
    })?;

    Ok((neighbor, weight))
}

fn integer_field(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => parse_integer(s),
        _ => None,
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
