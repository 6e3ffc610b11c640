use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sssp_engine::algorithm::ShortestPathAlgorithm;
use sssp_engine::graph::generators::{generate_random_graph, GeneratorConfig};
use sssp_engine::{compute_distances, AdjacencyGraph, Dijkstra, Error, Graph};
use std::collections::HashMap;

// {0: [(1,4),(2,1)], 1: [(3,1)], 2: [(1,2),(3,5)], 3: []}
fn diamond_graph() -> AdjacencyGraph<i64> {
    let map = HashMap::from([
        (0, vec![(1, 4), (2, 1)]),
        (1, vec![(3, 1)]),
        (2, vec![(1, 2), (3, 5)]),
        (3, vec![]),
    ]);
    AdjacencyGraph::from_adjacency(map, 4).unwrap()
}

// Grid with cardinal moves costing 10 and diagonal moves costing 14; blocked cells have no edges
fn create_test_grid(width: usize, height: usize, blocked: &[(usize, usize)]) -> AdjacencyGraph<i64> {
    let mut graph = AdjacencyGraph::with_nodes(width * height);
    let is_blocked = |x: usize, y: usize| blocked.contains(&(x, y));

    for y in 0..height {
        for x in 0..width {
            if is_blocked(x, y) {
                continue;
            }
            let directions = [
                (0, -1, 10), (1, 0, 10), (0, 1, 10), (-1, 0, 10),
                (1, -1, 14), (1, 1, 14), (-1, 1, 14), (-1, -1, 14),
            ];
            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let (nx, ny) = (nx as usize, ny as usize);
                    if !is_blocked(nx, ny) {
                        graph.add_edge(y * width + x, ny * width + nx, cost).unwrap();
                    }
                }
            }
        }
    }

    graph
}

fn random_lists(rng: &mut StdRng, n: usize, edges: usize, max_weight: i64) -> Vec<Vec<(usize, i64)>> {
    let mut lists = vec![Vec::new(); n];
    for _ in 0..edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        lists[u].push((v, rng.gen_range(0..=max_weight)));
    }
    lists
}

// Minimum over all simple paths; with non-negative weights no shortest path needs a cycle
fn brute_force_distances(lists: &[Vec<(usize, i64)>], source: usize) -> Vec<Option<i64>> {
    fn walk(lists: &[Vec<(usize, i64)>], u: usize, cost: i64, on_path: &mut Vec<bool>, best: &mut Vec<Option<i64>>) {
        if best[u].map_or(true, |b| cost < b) {
            best[u] = Some(cost);
        }
        for &(v, w) in &lists[u] {
            if !on_path[v] {
                on_path[v] = true;
                walk(lists, v, cost + w, on_path, best);
                on_path[v] = false;
            }
        }
    }

    let mut best = vec![None; lists.len()];
    let mut on_path = vec![false; lists.len()];
    on_path[source] = true;
    walk(lists, source, 0, &mut on_path, &mut best);
    best
}

#[test]
fn test_diamond_graph_distances() {
    let graph = diamond_graph();
    let result = compute_distances(&graph, 0, 4).unwrap();

    assert_eq!(result.as_slice(), &[Some(0), Some(3), Some(1), Some(4)]);
    assert_eq!(result.source(), 0);
    assert_eq!(result.reachable_count(), 4);
}

#[test]
fn test_trait_uses_graph_node_count() {
    let graph = diamond_graph();
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, 2).unwrap();

    assert_eq!(result.as_slice(), &[None, Some(2), Some(0), Some(3)]);
    assert_eq!(<Dijkstra as ShortestPathAlgorithm<i64, AdjacencyGraph<i64>>>::name(&dijkstra), "Dijkstra");
}

#[test]
fn test_plain_adjacency_lists_are_graphs() {
    let lists: Vec<Vec<(usize, i64)>> = vec![vec![(1, 4), (2, 1)], vec![(3, 1)], vec![(1, 2), (3, 5)], vec![]];
    let result = compute_distances(&lists, 0, 4).unwrap();
    assert_eq!(result.into_vec(), vec![Some(0), Some(3), Some(1), Some(4)]);
}

#[test]
fn test_source_out_of_range() {
    let graph = diamond_graph();
    match compute_distances(&graph, 5, 4) {
        Err(Error::InvalidSource { node, node_count }) => {
            assert_eq!(node, 5);
            assert_eq!(node_count, 4);
        }
        other => panic!("expected InvalidSource, got {:?}", other),
    }
}

#[test]
fn test_negative_weight_is_rejected() {
    let lists: Vec<Vec<(usize, i64)>> = vec![vec![(1, 2)], vec![(2, -1)], vec![]];
    match compute_distances(&lists, 0, 3) {
        Err(Error::InvalidWeight { from, to, weight }) => {
            assert_eq!((from, to), (1, 2));
            assert_eq!(weight, "-1");
        }
        other => panic!("expected InvalidWeight, got {:?}", other),
    }
}

#[test]
fn test_negative_weight_in_unreachable_part_is_still_rejected() {
    let lists: Vec<Vec<(usize, i64)>> = vec![vec![], vec![(2, -5)], vec![]];
    assert!(matches!(compute_distances(&lists, 0, 3), Err(Error::InvalidWeight { .. })));
}

#[test]
fn test_zero_node_count() {
    let lists: Vec<Vec<(usize, i64)>> = Vec::new();
    assert!(matches!(
        compute_distances(&lists, 0, 0),
        Err(Error::InvalidNodeCount { node_count: 0, .. })
    ));
}

#[test]
fn test_node_count_smaller_than_graph() {
    let lists: Vec<Vec<(usize, i64)>> = vec![vec![(1, 1)], vec![(2, 1)], vec![(0, 1)]];
    assert!(matches!(
        compute_distances(&lists, 0, 2),
        Err(Error::InvalidNodeCount { node_count: 2, .. })
    ));

    let lists: Vec<Vec<(usize, i64)>> = vec![vec![(7, 1)]];
    assert!(matches!(compute_distances(&lists, 0, 1), Err(Error::InvalidNodeCount { .. })));
}

#[test]
fn test_isolated_nodes_beyond_edge_lists() {
    // Nodes 2 and 3 have no outgoing edges and no list of their own
    let lists: Vec<Vec<(usize, i64)>> = vec![vec![(1, 7)], vec![]];
    let result = compute_distances(&lists, 0, 4).unwrap();
    assert_eq!(result.as_slice(), &[Some(0), Some(7), None, None]);
}

#[test]
fn test_single_node() {
    let graph: AdjacencyGraph<i64> = AdjacencyGraph::with_nodes(1);
    let result = compute_distances(&graph, 0, 1).unwrap();
    assert_eq!(result.as_slice(), &[Some(0)]);
}

#[test]
fn test_disconnected_components() {
    let mut graph = AdjacencyGraph::with_nodes(6);
    graph.add_edge(0, 1, 3).unwrap();
    graph.add_edge(1, 2, 4).unwrap();
    graph.add_edge(2, 0, 1).unwrap();
    graph.add_edge(3, 4, 1).unwrap();
    graph.add_edge(4, 5, 1).unwrap();

    let result = compute_distances(&graph, 0, 6).unwrap();
    assert_eq!(result.as_slice(), &[Some(0), Some(3), Some(7), None, None, None]);
    assert!(!result.is_reachable(4));
    assert_eq!(result.to_sentinel_vec(i64::MAX), vec![0, 3, 7, i64::MAX, i64::MAX, i64::MAX]);

    let result = compute_distances(&graph, 3, 6).unwrap();
    assert_eq!(result.as_slice(), &[None, None, None, Some(0), Some(1), Some(2)]);
}

#[test]
fn test_zero_weights_self_loops_and_parallel_edges() {
    let mut graph = AdjacencyGraph::with_nodes(3);
    graph.add_edge(0, 0, 5).unwrap();
    graph.add_edge(0, 1, 9).unwrap();
    graph.add_edge(0, 1, 2).unwrap();
    graph.add_edge(1, 2, 0).unwrap();

    let result = compute_distances(&graph, 0, 3).unwrap();
    assert_eq!(result.as_slice(), &[Some(0), Some(2), Some(2)]);
}

#[test]
fn test_overflowing_path_does_not_hide_representable_one() {
    // 0->1->3 overflows, 0->2->3 does not; both 1 and 2 pop at the same distance
    let lists: Vec<Vec<(usize, u8)>> = vec![vec![(1, 250), (2, 250)], vec![(3, 10)], vec![(3, 0)], vec![]];
    let result = compute_distances(&lists, 0, 4).unwrap();
    assert_eq!(result.as_slice(), &[Some(0), Some(250), Some(250), Some(250)]);

    let big = i64::MAX - 5;
    let lists: Vec<Vec<(usize, i64)>> = vec![vec![(1, big), (2, big)], vec![(3, 10)], vec![(3, 0)], vec![]];
    let result = compute_distances(&lists, 0, 4).unwrap();
    assert_eq!(result[3], Some(big));
}

#[test]
fn test_overflow_on_every_path_is_reported() {
    let lists: Vec<Vec<(usize, i64)>> = vec![vec![(1, i64::MAX)], vec![(2, 1)], vec![]];
    assert!(matches!(
        compute_distances(&lists, 0, 3),
        Err(Error::DistanceOverflow { node: 2 })
    ));

    let lists: Vec<Vec<(usize, u8)>> = vec![vec![(1, 200), (2, 250)], vec![(3, 100)], vec![(3, 10)], vec![]];
    assert!(matches!(
        compute_distances(&lists, 0, 4),
        Err(Error::DistanceOverflow { node: 3 })
    ));
}

#[test]
fn test_overflow_on_already_reached_node_is_ignored() {
    let lists: Vec<Vec<(usize, i64)>> = vec![vec![(1, i64::MAX), (2, 0)], vec![(2, 1)], vec![]];
    let result = compute_distances(&lists, 0, 3).unwrap();
    assert_eq!(result.as_slice(), &[Some(0), Some(i64::MAX), Some(0)]);
}

#[test]
fn test_float_and_unsigned_weights() {
    let mut graph = AdjacencyGraph::with_nodes(3);
    graph.add_edge(0, 1, OrderedFloat(1.5)).unwrap();
    graph.add_edge(1, 2, OrderedFloat(0.25)).unwrap();
    graph.add_edge(0, 2, OrderedFloat(2.0)).unwrap();
    let result = compute_distances(&graph, 0, 3).unwrap();
    assert_eq!(result[2], Some(OrderedFloat(1.75)));

    assert!(matches!(
        graph.add_edge(0, 1, OrderedFloat(f64::NAN)),
        Err(Error::InvalidWeight { .. })
    ));

    let lists: Vec<Vec<(usize, u32)>> = vec![vec![(1, 10)], vec![(2, 5)], vec![]];
    let result = compute_distances(&lists, 1, 3).unwrap();
    assert_eq!(result.as_slice(), &[None, Some(0), Some(5)]);
}

#[test]
fn test_grid_without_obstacles() {
    let graph = create_test_grid(10, 10, &[]);
    let result = compute_distances(&graph, 0, graph.node_count()).unwrap();

    assert_eq!(result[99], Some(9 * 14));
    assert_eq!(result[9], Some(9 * 10));
    assert_eq!(result.reachable_count(), 100);
}

#[test]
fn test_grid_with_wall() {
    // Column 5 is blocked on rows 0..8
    let wall: Vec<(usize, usize)> = (0..8).map(|y| (5, y)).collect();
    let graph = create_test_grid(10, 10, &wall);
    let result = compute_distances(&graph, 0, graph.node_count()).unwrap();

    // Around the wall through (5, 8): 100 + 44
    assert_eq!(result[99], Some(144));
    for &(x, y) in &wall {
        assert_eq!(result[y * 10 + x], None, "blocked cell ({}, {}) must be unreachable", x, y);
    }
}

#[test]
fn test_matches_brute_force_on_small_graphs() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let n = rng.gen_range(1..=6);
        let edges = rng.gen_range(0..=12);
        let lists = random_lists(&mut rng, n, edges, 9);
        let source = rng.gen_range(0..n);

        let result = compute_distances(&lists, source, n).unwrap();
        assert_eq!(result.as_slice(), brute_force_distances(&lists, source).as_slice(), "graph {:?}", lists);
        assert_eq!(result[source], Some(0));
    }
}

#[test]
fn test_runs_are_idempotent() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = generate_random_graph(300, &GeneratorConfig::default(), &mut rng).unwrap();

    let first = compute_distances(&graph, 17, 300).unwrap();
    let second = compute_distances(&graph, 17, 300).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_adding_an_edge_never_increases_distances() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..50 {
        let n = rng.gen_range(2..=30);
        let lists = random_lists(&mut rng, n, n * 2, 20);
        let mut graph = AdjacencyGraph::from_lists(lists).unwrap();
        let before = compute_distances(&graph, 0, n).unwrap();

        let (u, v, w) = (rng.gen_range(0..n), rng.gen_range(0..n), rng.gen_range(0..=20));
        graph.add_edge(u, v, w).unwrap();
        let after = compute_distances(&graph, 0, n).unwrap();

        for node in 0..n {
            match (before[node], after[node]) {
                (Some(b), Some(a)) => assert!(a <= b, "node {} got worse: {} -> {}", node, b, a),
                (Some(_), None) => panic!("node {} became unreachable", node),
                _ => {}
            }
        }
        // Only the new edge's target and nodes downstream of it can change
        if before[u].is_none() {
            assert_eq!(before, after);
        }
    }
}

#[test]
fn test_batch_matches_sequential_runs() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = generate_random_graph(200, &GeneratorConfig::default(), &mut rng).unwrap();
    let sources: Vec<usize> = (0..200).step_by(13).collect();

    let batch = Dijkstra::new().compute_from_sources(&graph, &sources, 200).unwrap();

    assert_eq!(batch.len(), sources.len());
    for (result, &source) in batch.iter().zip(&sources) {
        assert_eq!(result.source(), source);
        assert_eq!(result, &compute_distances(&graph, source, 200).unwrap());
    }
}

#[test]
fn test_batch_reports_first_failing_source() {
    let graph = diamond_graph();
    match Dijkstra::new().compute_from_sources(&graph, &[0, 7, 9], 4) {
        Err(Error::InvalidSource { node, .. }) => assert_eq!(node, 7),
        other => panic!("expected InvalidSource, got {:?}", other),
    }
}
