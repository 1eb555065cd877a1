//! Indexed D-ary Heap and Dijkstra Shortest Paths for Rust
//!
//! This crate provides an indexed D-ary min-heap with efficient `decrease_key`
//! support and a Dijkstra shortest-path engine built on top of it.
//!
//! # Features
//!
//! - **Indexed D-ary Heap**: entries addressed by stable integer keys; O(log_D n) insert and
//!   decrease_key, O(D log_D n) delete-min and arbitrary delete, O(1) membership test
//! - **Adjacency-list Graph**: dense node ids, directed weighted edges, shareable read-only
//! - **Dijkstra**: point-to-point queries with early exit, full shortest-path trees,
//!   budgeted reachability, and path reconstruction from parent pointers
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_dijkstra::graph::Graph;
//! use rust_indexed_dijkstra::pathfinding::Dijkstra;
//!
//! let mut graph = Graph::new(3);
//! graph.add_edge(0, 1, 5.0).unwrap();
//! graph.add_edge(0, 2, 1.0).unwrap();
//! graph.add_edge(2, 1, 1.0).unwrap();
//!
//! let result = Dijkstra::new(&graph).arity(4).shortest_path(0, 1).unwrap();
//! assert_eq!(result.distance, 2.0);
//! assert_eq!(result.path, vec![0, 2, 1]);
//! ```

pub mod dary;
pub mod error;
pub mod graph;
pub mod pathfinding;
pub mod traits;

// Re-export the main types for convenience
pub use error::{HeapError, PathError};
pub use traits::IndexedHeap;
