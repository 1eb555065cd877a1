//! Comprehensive tests for the shortest-path engine
//!
//! Tests cover:
//! - Basic functionality across heap arities
//! - Edge cases (unreachable targets, source equals target, cycles, self loops)
//! - Correctness (optimal paths with decrease_key scenarios)
//! - Property-based testing against a Bellman-Ford reference
//! - Shared read-only graphs queried from several threads

use proptest::prelude::*;
use rust_indexed_dijkstra::dary::IndexedDaryHeap;
use rust_indexed_dijkstra::graph::{Edge, Graph};
use rust_indexed_dijkstra::pathfinding::{shortest_path, Dijkstra, PathResult};
use rust_indexed_dijkstra::PathError;

// ============================================================================
// Test Graphs
// ============================================================================

fn four_node_graph() -> Graph {
    let mut graph = Graph::new(4);
    graph.add_edge(0, 1, 1.0).unwrap();
    graph.add_edge(0, 2, 4.0).unwrap();
    graph.add_edge(1, 2, 2.0).unwrap();
    graph.add_edge(1, 3, 6.0).unwrap();
    graph.add_edge(2, 3, 1.0).unwrap();
    graph
}

/// 4-connected `size x size` grid with unit weights
fn grid_graph(size: usize) -> Graph {
    let mut graph = Graph::new(size * size);
    for y in 0..size {
        for x in 0..size {
            let node = y * size + x;
            if x + 1 < size {
                graph.add_edge(node, node + 1, 1.0).unwrap();
                graph.add_edge(node + 1, node, 1.0).unwrap();
            }
            if y + 1 < size {
                graph.add_edge(node, node + size, 1.0).unwrap();
                graph.add_edge(node + size, node, 1.0).unwrap();
            }
        }
    }
    graph
}

/// Dense graph shaped like the actor-hiring problem: a start node `n` with a
/// direct edge to every other node, plus discounted edges between all pairs.
fn hiring_graph(costs: &[f64], discount: f64) -> Graph {
    let n = costs.len();
    let mut graph = Graph::new(n + 1);
    for (i, &cost) in costs.iter().enumerate() {
        graph.add_edge(n, i, cost).unwrap();
    }
    for i in 0..n {
        for (j, &cost) in costs.iter().enumerate() {
            let weight = if i == j { cost } else { cost * (1.0 - discount) };
            graph.add_edge(i, j, weight).unwrap();
        }
    }
    graph
}

/// Reference distances by repeated edge relaxation
fn bellman_ford(graph: &Graph, source: usize) -> Vec<f64> {
    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    dist[source] = 0.0;
    for _ in 0..n {
        let mut changed = false;
        for node in 0..n {
            if dist[node] == f64::INFINITY {
                continue;
            }
            for edge in graph.edges(node) {
                let candidate = dist[node] + edge.weight();
                if candidate < dist[edge.target()] {
                    dist[edge.target()] = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

/// Sum of edge weights along `path`, taking the cheapest parallel edge
fn path_weight(graph: &Graph, path: &[usize]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .edges(pair[0])
                .iter()
                .filter(|edge| edge.target() == pair[1])
                .map(Edge::weight)
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}

// ============================================================================
// Basic Queries
// ============================================================================

#[test]
fn test_known_small_graph_all_arities() {
    let graph = four_node_graph();
    for arity in 2..=8 {
        let result = Dijkstra::new(&graph).arity(arity).shortest_path(0, 3).unwrap();
        assert_eq!(result.distance, 4.0);
        assert_eq!(result.path, vec![0, 1, 2, 3]);
    }
}

#[test]
fn test_unreachable_target() {
    let mut graph = Graph::new(5);
    graph.add_edge(0, 1, 1.0).unwrap();
    graph.add_edge(0, 2, 4.0).unwrap();
    graph.add_edge(1, 2, 2.0).unwrap();
    graph.add_edge(1, 3, 6.0).unwrap();
    graph.add_edge(2, 3, 1.0).unwrap();
    // Node 4 has no incoming edges.
    graph.add_edge(4, 0, 1.0).unwrap();

    let result = shortest_path(&graph, 0, 4).unwrap();
    assert_eq!(result.distance, f64::INFINITY);
    assert!(result.path.is_empty());

    // But 4 reaches everything.
    let result = shortest_path(&graph, 4, 3).unwrap();
    assert_eq!(result.distance, 5.0);
    assert_eq!(result.path, vec![4, 0, 1, 2, 3]);
}

#[test]
fn test_single_node_query() {
    let graph = Graph::new(1);
    let result = shortest_path(&graph, 0, 0).unwrap();
    assert_eq!(
        result,
        PathResult {
            distance: 0.0,
            path: vec![0]
        }
    );
}

#[test]
fn test_empty_graph_rejects_queries() {
    let graph = Graph::new(0);
    assert_eq!(
        shortest_path(&graph, 0, 0),
        Err(PathError::InvalidNodeIndex { node: 0, node_count: 0 })
    );
}

#[test]
fn test_self_loops_and_cycles() {
    let mut graph = Graph::new(3);
    graph.add_edge(0, 0, 1.0).unwrap();
    graph.add_edge(0, 1, 2.0).unwrap();
    graph.add_edge(1, 0, 0.5).unwrap();
    graph.add_edge(1, 2, 2.0).unwrap();
    graph.add_edge(2, 0, 0.0).unwrap();

    let result = shortest_path(&graph, 0, 2).unwrap();
    assert_eq!(result.distance, 4.0);
    assert_eq!(result.path, vec![0, 1, 2]);
}

#[test]
fn test_zero_weight_edges() {
    let mut graph = Graph::new(4);
    graph.add_edge(0, 1, 0.0).unwrap();
    graph.add_edge(1, 2, 0.0).unwrap();
    graph.add_edge(2, 3, 0.0).unwrap();
    graph.add_edge(0, 3, 0.5).unwrap();

    let result = shortest_path(&graph, 0, 3).unwrap();
    assert_eq!(result.distance, 0.0);
    assert_eq!(result.path, vec![0, 1, 2, 3]);
}

#[test]
fn test_parallel_edges_use_cheapest() {
    let mut graph = Graph::new(2);
    graph.add_edge(0, 1, 9.0).unwrap();
    graph.add_edge(0, 1, 3.0).unwrap();
    graph.add_edge(0, 1, 5.0).unwrap();

    assert_eq!(shortest_path(&graph, 0, 1).unwrap().distance, 3.0);
}

#[test]
fn test_many_decrease_keys() {
    // Node k is first reached through the expensive direct edge 0 -> k,
    // then improved along the cheap chain 0 -> 1 -> ... -> k.
    let n = 50;
    let mut graph = Graph::new(n);
    for k in 1..n {
        graph.add_edge(0, k, 1000.0).unwrap();
    }
    for k in 1..n {
        graph.add_edge(k - 1, k, 1.0).unwrap();
    }

    let result = Dijkstra::new(&graph).arity(3).shortest_path(0, n - 1).unwrap();
    assert_eq!(result.distance, (n - 1) as f64);
    assert_eq!(result.path, (0..n).collect::<Vec<_>>());
}

#[test]
fn test_grid_corner_to_corner() {
    let size = 12;
    let graph = grid_graph(size);
    let target = size * size - 1;

    let result = Dijkstra::new(&graph).arity(4).shortest_path(0, target).unwrap();
    assert_eq!(result.distance, (2 * (size - 1)) as f64);
    assert_eq!(result.path.len(), 2 * (size - 1) + 1);
    assert_eq!(result.path.first(), Some(&0));
    assert_eq!(result.path.last(), Some(&target));
    assert_eq!(path_weight(&graph, &result.path), result.distance);
}

#[test]
fn test_hiring_graph() {
    // Hiring 2 directly costs 10; hiring 0 first and then 2 at a 50%
    // discount costs 2 + 5 = 7; going through 1 costs at least 3 + 5.
    let graph = hiring_graph(&[2.0, 3.0, 10.0], 0.5);
    let start = 3;

    let result = shortest_path(&graph, start, 2).unwrap();
    assert_eq!(result.distance, 7.0);
    assert_eq!(result.path, vec![3, 0, 2]);
}

// ============================================================================
// Trees, Budgets and Early Exit
// ============================================================================

#[test]
fn test_distances_from_matches_bellman_ford() {
    // 0.75 * cost is exact in binary, so both sides sum without rounding.
    let graph = hiring_graph(&[4.0, 1.0, 7.0, 3.0, 9.0], 0.25);
    let tree = Dijkstra::new(&graph).distances_from(5).unwrap();
    assert_eq!(tree.distances(), bellman_ford(&graph, 5).as_slice());
    assert_eq!(tree.settle_order().len(), graph.node_count());
    assert_eq!(tree.source(), 5);
}

#[test]
fn test_settle_order_is_non_decreasing() {
    let graph = grid_graph(8);
    let tree = Dijkstra::new(&graph).distances_from(27).unwrap();
    let distances: Vec<f64> = tree
        .settle_order()
        .iter()
        .map(|&node| tree.distance(node).unwrap())
        .collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_rerunning_settled_search_changes_nothing() {
    let graph = four_node_graph();
    let engine = Dijkstra::new(&graph);
    let first = engine.distances_from(0).unwrap();
    let second = engine.distances_from(0).unwrap();
    assert_eq!(first.distances(), second.distances());
    assert_eq!(first.settle_order(), second.settle_order());
    for node in 0..4 {
        assert!(first.is_settled(node));
        assert_eq!(first.path_to(node), second.path_to(node));
    }
}

#[test]
fn test_reachable_within_budget() {
    let graph = grid_graph(5);
    let nearby = Dijkstra::new(&graph).reachable_within(12, 1.0).unwrap();
    let mut nodes: Vec<usize> = nearby.iter().map(|&(node, _)| node).collect();
    nodes.sort_unstable();
    assert_eq!(nodes, vec![7, 11, 12, 13, 17]);
    assert!(nearby.iter().all(|&(_, distance)| distance <= 1.0));
}

#[test]
fn test_search_with_trait_heap_agrees() {
    let graph = grid_graph(6);
    let engine = Dijkstra::new(&graph);
    let via_trait = engine.search_with::<IndexedDaryHeap<f64>>(0, 35).unwrap();
    let direct = engine.arity(5).search(0, 35).unwrap();
    assert_eq!(via_trait.distance(35), direct.distance(35));
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_queries_share_graph() {
    let graph = grid_graph(10);
    let expected = shortest_path(&graph, 0, 99).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (2..6)
            .map(|arity| {
                let graph = &graph;
                scope.spawn(move || Dijkstra::new(graph).arity(arity).shortest_path(0, 99))
            })
            .collect();
        for handle in handles {
            let result = handle.join().unwrap().unwrap();
            assert_eq!(result.distance, expected.distance);
        }
    });
}

// ============================================================================
// Property Tests
// ============================================================================

/// Random graph with integer-valued weights so float sums are exact
fn graph_strategy() -> impl Strategy<Value = Graph> {
    (1usize..25).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 0u32..20), 0..(n * 4)).prop_map(move |edges| {
            let mut graph = Graph::new(n);
            for (from, to, weight) in edges {
                graph.add_edge(from, to, f64::from(weight)).unwrap();
            }
            graph
        })
    })
}

proptest! {
    #[test]
    fn test_matches_bellman_ford(
        graph in graph_strategy(),
        source in 0usize..25,
        target in 0usize..25,
        arity in 2usize..7
    ) {
        let n = graph.node_count();
        let (source, target) = (source % n, target % n);
        let reference = bellman_ford(&graph, source);

        let result = Dijkstra::new(&graph).arity(arity).shortest_path(source, target).unwrap();
        prop_assert_eq!(result.distance, reference[target]);
        if result.distance.is_finite() {
            prop_assert_eq!(result.path.first(), Some(&source));
            prop_assert_eq!(result.path.last(), Some(&target));
            prop_assert_eq!(path_weight(&graph, &result.path), result.distance);
        } else {
            prop_assert!(result.path.is_empty());
        }
    }

    #[test]
    fn test_early_exit_matches_full_run(
        graph in graph_strategy(),
        source in 0usize..25,
        target in 0usize..25
    ) {
        let n = graph.node_count();
        let (source, target) = (source % n, target % n);
        let early = Dijkstra::new(&graph).shortest_path(source, target).unwrap();
        let full = Dijkstra::new(&graph).stop_at_target(false).shortest_path(source, target).unwrap();
        prop_assert_eq!(early, full);
    }

    #[test]
    fn test_deterministic(
        graph in graph_strategy(),
        source in 0usize..25,
        target in 0usize..25
    ) {
        let n = graph.node_count();
        let (source, target) = (source % n, target % n);
        let first = shortest_path(&graph, source, target).unwrap();
        let second = shortest_path(&graph, source, target).unwrap();
        prop_assert_eq!(first, second);
    }
}
