use rayon::prelude::*;

use crate::algorithm::{DistanceMap, ShortestPathAlgorithm};
use crate::data_structures::Frontier;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a lazy-deletion binary heap
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs independent computations from several sources in parallel.
    ///
    /// The graph is shared read-only; each run owns its distances and frontier.
    /// If any run fails, the error of the first failing source (in slice order)
    /// is returned.
    pub fn compute_from_sources<W, G>(
        &self,
        graph: &G,
        sources: &[usize],
        node_count: usize,
    ) -> Result<Vec<DistanceMap<W>>>
    where
        W: Weight,
        G: Graph<W> + Sync,
    {
        let runs: Vec<Result<DistanceMap<W>>> = sources
            .par_iter()
            .map(|&source| compute_distances(graph, source, node_count))
            .collect();

        runs.into_iter().collect()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<DistanceMap<W>> {
        compute_distances(graph, source, graph.node_count())
    }
}

#[derive(Debug, Default)]
struct RunStats {
    pops: usize,
    stale: usize,
    relaxations: usize,
}

/// Computes the minimum distance from `source` to every node in `0..node_count`.
///
/// Inputs are validated before any work is done: `node_count` must be positive
/// and cover every node the graph references, `source` must be below
/// `node_count`, and every weight must be non-negative.
pub fn compute_distances<W, G>(graph: &G, source: usize, node_count: usize) -> Result<DistanceMap<W>>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    validate(graph, source, node_count)?;

    let mut distances: Vec<Option<W>> = vec![None; node_count];
    distances[source] = Some(W::zero());

    let mut frontier = Frontier::with_capacity(node_count);
    frontier.push(W::zero(), source);

    // Nodes that were offered a candidate distance too large for W
    let mut overflowed = vec![false; node_count];
    let mut stats = RunStats::default();

    while let Some((dist_u, u)) = frontier.pop() {
        stats.pops += 1;

        // A shorter path to u was recorded after this entry was pushed
        if let Some(best) = distances[u] {
            if dist_u > best {
                stats.stale += 1;
                continue;
            }
        }

        for (v, weight) in graph.outgoing_edges(u) {
            let new_dist = match dist_u.checked_sum(weight) {
                Some(sum) => sum,
                None => {
                    overflowed[v] = true;
                    continue;
                }
            };

            let should_update = match distances[v] {
                None => true,
                Some(current_dist) => new_dist < current_dist,
            };

            if should_update {
                distances[v] = Some(new_dist);
                frontier.push(new_dist, v);
                stats.relaxations += 1;
            }
        }
    }

    // A representable path found later supersedes an overflowing candidate
    if let Some(node) = (0..node_count).find(|&v| overflowed[v] && distances[v].is_none()) {
        return Err(Error::DistanceOverflow { node });
    }

    let result = DistanceMap::new(source, distances);
    log::debug!(
        "dijkstra from {}: {} pops, {} stale, {} relaxations, {}/{} reachable",
        source,
        stats.pops,
        stats.stale,
        stats.relaxations,
        result.reachable_count(),
        node_count
    );

    Ok(result)
}

fn validate<W, G>(graph: &G, source: usize, node_count: usize) -> Result<()>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    if node_count == 0 {
        return Err(Error::InvalidNodeCount {
            node_count,
            reason: "node count must be positive".to_string(),
        });
    }

    if source >= node_count {
        return Err(Error::InvalidSource { node: source, node_count });
    }

    for from in 0..graph.node_count() {
        for (to, weight) in graph.outgoing_edges(from) {
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
        }
    }

    Ok(())
}
