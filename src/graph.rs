//! Directed weighted graph stored as adjacency lists
//!
//! Node ids are dense indices in `[0, node_count)`. The graph owns no
//! algorithmic logic; it is built once and then shared read-only by any
//! number of searches.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_dijkstra::graph::Graph;
//!
//! let mut graph = Graph::new(3);
//! graph.add_edge(0, 1, 2.5).unwrap();
//! graph.add_edge(1, 2, 1.0).unwrap();
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! assert_eq!(graph.edges(0)[0].target(), 1);
//! assert!(graph.add_edge(0, 3, 1.0).is_err());
//! ```

use crate::error::PathError;

/// A directed edge: target node and non-negative weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    target: usize,
    weight: f64,
}

impl Edge {
    /// Creates an edge pointing at `target`
    pub fn new(target: usize, weight: f64) -> Self {
        Edge { target, weight }
    }

    /// The node this edge leads to
    pub fn target(&self) -> usize {
        self.target
    }

    /// The cost of traversing this edge
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Adjacency-list graph with one ordered edge list per node
///
/// Every edge target lies in `[0, node_count)`; the constructors enforce it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates a graph with `node_count` nodes and no edges
    pub fn new(node_count: usize) -> Self {
        Graph {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Builds a graph from prepared adjacency lists, validating every target
    pub fn from_adjacency(adjacency: Vec<Vec<Edge>>) -> Result<Self, PathError> {
        let node_count = adjacency.len();
        if let Some(edge) = adjacency
            .iter()
            .flatten()
            .find(|edge| edge.target >= node_count)
        {
            return Err(PathError::InvalidNodeIndex {
                node: edge.target,
                node_count,
            });
        }
        Ok(Graph { adjacency })
    }

    /// Appends the edge `from -> to` with the given weight
    ///
    /// Weights are expected to be non-negative; this is not checked.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<(), PathError> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.adjacency[from].push(Edge::new(to, weight));
        Ok(())
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns true if `node` is a valid index
    pub fn contains_node(&self, node: usize) -> bool {
        node < self.node_count()
    }

    /// Outgoing edges of `node` in insertion order
    ///
    /// # Panics
    /// Panics if `node` is out of range; use [`Graph::contains_node`] first
    /// when the index is untrusted.
    pub fn edges(&self, node: usize) -> &[Edge] {
        &self.adjacency[node]
    }

    pub(crate) fn check_node(&self, node: usize) -> Result<(), PathError> {
        if !self.contains_node(node) {
            return Err(PathError::InvalidNodeIndex {
                node,
                node_count: self.node_count(),
            });
        }
        Ok(())
    }
}
