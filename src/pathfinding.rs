//! Dijkstra's shortest-path algorithm on an indexed D-ary heap
//!
//! This module computes minimum-weight paths in a [`Graph`] with non-negative
//! edge weights and reconstructs them from parent pointers.
//!
//! # Design
//!
//! Node ids are dense, so the per-node state lives in plain vectors indexed by
//! node: tentative distances, parent pointers and settled flags. The heap is
//! keyed by the same ids, which lets relaxation lower a queued node's distance
//! in place with `decrease_key` instead of pushing a duplicate entry.
//!
//! Each node moves through three states:
//!
//! - **unseen**: distance is `+inf`, not in the heap
//! - **frontier**: in the heap with a tentative distance
//! - **settled**: popped once; its distance is final and it is never relaxed again
//!
//! A search stops as soon as the target is settled. Because nodes settle in
//! non-decreasing distance order, running to completion would yield the same
//! distances; [`Dijkstra::stop_at_target`] turns the shortcut off.
//!
//! Negative weights are not supported and not checked.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_dijkstra::graph::Graph;
//! use rust_indexed_dijkstra::pathfinding::shortest_path;
//!
//! let mut graph = Graph::new(4);
//! graph.add_edge(0, 1, 1.0).unwrap();
//! graph.add_edge(0, 2, 4.0).unwrap();
//! graph.add_edge(1, 2, 2.0).unwrap();
//! graph.add_edge(1, 3, 6.0).unwrap();
//! graph.add_edge(2, 3, 1.0).unwrap();
//!
//! let result = shortest_path(&graph, 0, 3).unwrap();
//! assert_eq!(result.distance, 4.0);
//! assert_eq!(result.path, vec![0, 1, 2, 3]);
//! ```

use crate::dary::IndexedDaryHeap;
use crate::error::PathError;
use crate::graph::Graph;
use crate::traits::IndexedHeap;
use tracing::{debug, trace};

/// Default branching factor of the heap used by [`Dijkstra`]
pub const DEFAULT_ARITY: usize = 2;

/// Result of a point-to-point query.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Total weight of the path, `f64::INFINITY` if the target is unreachable
    pub distance: f64,
    /// Nodes from source to target inclusive; empty if unreachable
    pub path: Vec<usize>,
}

impl PathResult {
    /// Returns true if a path was found
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Distances, parent pointers and settled flags left behind by one search
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: usize,
    distances: Vec<f64>,
    parents: Vec<Option<usize>>,
    settled: Vec<bool>,
    settle_order: Vec<usize>,
}

impl ShortestPathTree {
    fn new(source: usize, node_count: usize) -> Self {
        ShortestPathTree {
            source,
            distances: vec![f64::INFINITY; node_count],
            parents: vec![None; node_count],
            settled: vec![false; node_count],
            settle_order: Vec::new(),
        }
    }

    /// The node the search started from
    pub fn source(&self) -> usize {
        self.source
    }

    /// Best known distance to `node`, or `None` if `node` is out of range
    ///
    /// The distance is final once the node is settled. After an early stop,
    /// frontier nodes may still carry tentative values.
    pub fn distance(&self, node: usize) -> Option<f64> {
        self.distances.get(node).copied()
    }

    /// All distances indexed by node
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Predecessor that last improved the distance to `node`
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parents.get(node).copied().flatten()
    }

    /// Returns true if the distance to `node` is final
    pub fn is_settled(&self, node: usize) -> bool {
        self.settled.get(node).copied().unwrap_or(false)
    }

    /// Nodes in the order they were settled
    pub fn settle_order(&self) -> &[usize] {
        &self.settle_order
    }

    /// Rebuilds the path from `source` to `target` by walking parent pointers
    ///
    /// Returns an empty path when `distance` is infinite. When
    /// `source == target` the path is `[source]`.
    ///
    /// # Errors
    /// - [`PathError::InvalidNodeIndex`] if either index is out of range
    /// - [`PathError::BrokenParentChain`] if the walk does not reach `source`
    ///   within `node_count` steps
    pub fn reconstruct_path(
        &self,
        source: usize,
        target: usize,
        distance: f64,
    ) -> Result<Vec<usize>, PathError> {
        let node_count = self.distances.len();
        for node in [source, target] {
            if node >= node_count {
                return Err(PathError::InvalidNodeIndex { node, node_count });
            }
        }
        if distance == f64::INFINITY {
            return Ok(Vec::new());
        }

        let broken = PathError::BrokenParentChain {
            from: source,
            to: target,
        };
        let mut path = vec![target];
        let mut current = target;
        while current != source {
            current = self.parents[current].ok_or_else(|| broken.clone())?;
            path.push(current);
            if path.len() > node_count {
                return Err(broken);
            }
        }
        path.reverse();
        Ok(path)
    }

    /// Path from this tree's source to `target`
    pub fn path_to(&self, target: usize) -> Result<Vec<usize>, PathError> {
        let distance = self.distance(target).ok_or(PathError::InvalidNodeIndex {
            node: target,
            node_count: self.distances.len(),
        })?;
        self.reconstruct_path(self.source, target, distance)
    }
}

/// Shortest-path engine over a borrowed graph.
///
/// Provides a fluent API for configuring the heap arity and the early exit.
/// The graph is only read, so any number of engines may share it across
/// threads; each search owns its heap and per-node state.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra<'g> {
    graph: &'g Graph,
    arity: usize,
    stop_at_target: bool,
}

impl<'g> Dijkstra<'g> {
    /// Creates an engine with a binary heap and early exit enabled.
    pub fn new(graph: &'g Graph) -> Self {
        Dijkstra {
            graph,
            arity: DEFAULT_ARITY,
            stop_at_target: true,
        }
    }

    /// Sets the heap branching factor (values below 2 become 2).
    pub fn arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    /// Whether to stop as soon as the target is settled.
    pub fn stop_at_target(mut self, stop: bool) -> Self {
        self.stop_at_target = stop;
        self
    }

    /// Runs the search from `source` toward `target`.
    pub fn search(&self, source: usize, target: usize) -> Result<ShortestPathTree, PathError> {
        let heap = IndexedDaryHeap::new(self.arity, self.graph.node_count());
        self.search_in(heap, Some(self.arity), source, target)
    }

    /// Runs the search with any [`IndexedHeap`] implementation.
    ///
    /// The configured arity is ignored; `H::with_capacity` decides the shape.
    pub fn search_with<H>(&self, source: usize, target: usize) -> Result<ShortestPathTree, PathError>
    where
        H: IndexedHeap<f64>,
    {
        self.search_in(H::with_capacity(self.graph.node_count()), None, source, target)
    }

    fn search_in<H>(
        &self,
        heap: H,
        arity: Option<usize>,
        source: usize,
        target: usize,
    ) -> Result<ShortestPathTree, PathError>
    where
        H: IndexedHeap<f64>,
    {
        self.graph.check_node(source)?;
        self.graph.check_node(target)?;
        let options = SearchOptions {
            arity,
            target: Some(target),
            stop_at_target: self.stop_at_target,
            max_distance: None,
        };
        search_impl(self.graph, heap, source, options)
    }

    /// Computes the distance and path from `source` to `target`.
    pub fn shortest_path(&self, source: usize, target: usize) -> Result<PathResult, PathError> {
        let tree = self.search(source, target)?;
        let distance = tree.distances[target];
        let path = tree.reconstruct_path(source, target, distance)?;
        Ok(PathResult { distance, path })
    }

    /// Settles every node reachable from `source`.
    pub fn distances_from(&self, source: usize) -> Result<ShortestPathTree, PathError> {
        let heap = IndexedDaryHeap::new(self.arity, self.graph.node_count());
        let options = SearchOptions {
            arity: Some(self.arity),
            ..SearchOptions::default()
        };
        search_impl(self.graph, heap, source, options)
    }

    /// Returns all nodes within `max_distance` of `source`, in settling order.
    ///
    /// This is useful for "what's nearby" queries. A negative or NaN budget
    /// admits nothing, not even the source, and yields an empty list.
    pub fn reachable_within(
        &self,
        source: usize,
        max_distance: f64,
    ) -> Result<Vec<(usize, f64)>, PathError> {
        let heap = IndexedDaryHeap::new(self.arity, self.graph.node_count());
        let options = SearchOptions {
            arity: Some(self.arity),
            max_distance: Some(max_distance),
            ..SearchOptions::default()
        };
        let tree = search_impl(self.graph, heap, source, options)?;
        Ok(tree
            .settle_order
            .iter()
            .map(|&node| (node, tree.distances[node]))
            .collect())
    }
}

/// Computes the shortest path from `source` to `target` with default settings.
///
/// # Returns
/// - `Ok(PathResult)` with a finite distance and the node sequence if a path exists
/// - `Ok(PathResult)` with `f64::INFINITY` and an empty path if it does not
/// - `Err(PathError::InvalidNodeIndex)` if either node is out of range
pub fn shortest_path(graph: &Graph, source: usize, target: usize) -> Result<PathResult, PathError> {
    Dijkstra::new(graph).shortest_path(source, target)
}

/// Per-search settings passed down to [`search_impl`]
#[derive(Debug, Clone, Copy, Default)]
struct SearchOptions {
    /// Heap branching factor, `None` when the heap type decides
    arity: Option<usize>,
    /// Node the caller asked about
    target: Option<usize>,
    /// Return as soon as `target` is settled
    stop_at_target: bool,
    /// Nodes farther than this are never settled
    max_distance: Option<f64>,
}

/// Returns true if `distance` fits the budget. NaN budgets admit nothing.
fn within_budget(max_distance: Option<f64>, distance: f64) -> bool {
    max_distance.map_or(true, |max| distance <= max)
}

/// Internal search implementation.
///
/// With `stop_at_target` set, returns right after the target is settled and
/// its edges relaxed. With `max_distance` set, nodes beyond the budget are
/// neither queued nor settled.
fn search_impl<H>(
    graph: &Graph,
    mut heap: H,
    source: usize,
    options: SearchOptions,
) -> Result<ShortestPathTree, PathError>
where
    H: IndexedHeap<f64>,
{
    graph.check_node(source)?;
    debug!(
        source,
        target_node = ?options.target,
        arity = ?options.arity,
        stop_at_target = options.stop_at_target,
        max_distance = ?options.max_distance,
        nodes = graph.node_count(),
        "starting shortest-path search"
    );
    let stop_at = options.target.filter(|_| options.stop_at_target);

    let mut tree = ShortestPathTree::new(source, graph.node_count());
    tree.distances[source] = 0.0;
    heap.insert(source, 0.0)?;

    while !heap.is_empty() {
        let (node, value) = heap.pop_min()?;

        // Obsolete pop, or a node that is already final.
        if value > tree.distances[node] || tree.settled[node] {
            trace!(node, value, "skipping stale entry");
            continue;
        }
        if !within_budget(options.max_distance, value) {
            trace!(node, value, "over budget");
            continue;
        }
        tree.settled[node] = true;
        tree.settle_order.push(node);

        for edge in graph.edges(node) {
            let next = edge.target();
            if tree.settled[next] {
                continue;
            }
            let candidate = tree.distances[node] + edge.weight();
            if !within_budget(options.max_distance, candidate) {
                continue;
            }
            if candidate < tree.distances[next] {
                trace!(from = node, to = next, distance = candidate, "relaxed edge");
                tree.distances[next] = candidate;
                tree.parents[next] = Some(node);
                if heap.contains(next)? {
                    heap.decrease_key(next, candidate)?;
                } else {
                    heap.insert(next, candidate)?;
                }
            }
        }

        if stop_at == Some(node) {
            debug!(
                node,
                distance = tree.distances[node],
                settled = tree.settle_order.len(),
                "target settled"
            );
            return Ok(tree);
        }
    }

    debug!(settled = tree.settle_order.len(), "search exhausted");
    Ok(tree)
}
