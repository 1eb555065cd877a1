//! Error types for heap and shortest-path operations
//!
//! Every variant here is a precondition violation in the calling code. None of
//! them is retried or recovered from inside the crate. An unreachable target is
//! not an error: it is reported as an infinite distance and an empty path.

use thiserror::Error;

/// Error type for indexed heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The key lies outside `[0, capacity)`
    #[error("key {key} is out of bounds for a heap of capacity {capacity}")]
    InvalidKey {
        /// The offending key
        key: usize,
        /// The heap's key capacity
        capacity: usize,
    },
    /// The key is already present in the heap
    #[error("key {key} is already present in the heap")]
    DuplicateKey {
        /// The offending key
        key: usize,
    },
    /// The key is not present in the heap
    #[error("key {key} is not present in the heap")]
    KeyNotFound {
        /// The offending key
        key: usize,
    },
    /// The value cannot be ordered (for floats, NaN)
    #[error("value is not comparable with itself")]
    InvalidValue,
    /// Peek or pop on an empty heap
    #[error("heap underflow: the heap is empty")]
    EmptyHeap,
}

/// Error type for graph construction and shortest-path queries
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// A node index lies outside `[0, node_count)`
    #[error("invalid node index {node} for a graph of {node_count} nodes")]
    InvalidNodeIndex {
        /// The offending node index
        node: usize,
        /// Number of nodes in the graph
        node_count: usize,
    },
    /// The parent chain from `target` never reached `source`
    #[error("parent chain from node {to} does not lead back to source {from}")]
    BrokenParentChain {
        /// Start of the requested path
        from: usize,
        /// End of the requested path
        to: usize,
    },
    /// A heap precondition was violated while running the search
    #[error("heap error during search: {0}")]
    Heap(#[from] HeapError),
}
