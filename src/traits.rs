//! Common traits for indexed heap data structures
//!
//! An indexed heap addresses its entries by stable external keys in
//! `[0, capacity)` rather than by heap position. That is the primitive graph
//! relaxation needs: the shortest-path engine knows a node id and wants to
//! lower the tentative distance stored under it in O(log n).
//!
//! The [`pathfinding`](crate::pathfinding) engine is generic over
//! [`IndexedHeap`], with [`IndexedDaryHeap`](crate::dary::IndexedDaryHeap)
//! as the provided implementation.

use crate::error::HeapError;

/// Trait for min-heaps keyed by integers in `[0, capacity)`
///
/// Values only need `PartialOrd`: the heap compares with strict less-than and
/// rejects values that are not comparable with themselves.
///
/// # Example
///
/// ```rust
/// use rust_indexed_dijkstra::IndexedHeap;
/// use rust_indexed_dijkstra::dary::IndexedDaryHeap;
///
/// let mut heap: IndexedDaryHeap<f64> = IndexedHeap::with_capacity(4);
/// heap.insert(2, 7.5).unwrap();
/// heap.insert(0, 3.0).unwrap();
/// heap.decrease_key(2, 1.0).unwrap();
/// assert_eq!(heap.pop_min(), Ok((2, 1.0)));
/// ```
pub trait IndexedHeap<P: PartialOrd> {
    /// Creates an empty heap accepting keys in `[0, max_keys)`
    fn with_capacity(max_keys: usize) -> Self;

    /// Returns the number of distinct keys the heap can address
    fn capacity(&self) -> usize;

    /// Returns the number of keys currently in the heap
    fn len(&self) -> usize;

    /// Returns true if the heap holds no keys
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `key` is currently in the heap
    ///
    /// # Errors
    /// [`HeapError::InvalidKey`] if `key` is out of range.
    fn contains(&self, key: usize) -> Result<bool, HeapError>;

    /// Inserts `key` bound to `value`
    ///
    /// # Errors
    /// [`HeapError::InvalidKey`], [`HeapError::DuplicateKey`] or
    /// [`HeapError::InvalidValue`].
    fn insert(&mut self, key: usize, value: P) -> Result<(), HeapError>;

    /// Returns the key holding the minimum value
    fn peek_min_key(&self) -> Result<usize, HeapError>;

    /// Returns the minimum value
    fn peek_min_value(&self) -> Result<&P, HeapError>;

    /// Removes the minimum entry, returning its key and value
    fn pop_min(&mut self) -> Result<(usize, P), HeapError>;

    /// Lowers the value bound to `key`
    ///
    /// Returns `Ok(false)` and leaves the heap untouched if `value` is not
    /// strictly less than the current value.
    fn decrease_key(&mut self, key: usize, value: P) -> Result<bool, HeapError>;

    /// Removes `key` from the heap, returning its value
    fn delete(&mut self, key: usize) -> Result<P, HeapError>;
}
