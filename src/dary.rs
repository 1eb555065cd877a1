//! Indexed D-ary Min-Heap implementation
//!
//! A D-ary min-heap whose entries are addressed by external integer keys in
//! `[0, capacity)` instead of by their position in the heap array. Two arrays
//! are kept as exact inverses of each other:
//!
//! - `position[key]` is the slot the key currently occupies (or [`ABSENT`])
//! - `inverse[slot]` is the key stored in that slot (or [`ABSENT`])
//!
//! Values live in a third array indexed by key, so a swap only exchanges two
//! keys and patches two positions; values never move.
//!
//! A wider branching factor gives a shallower tree: sift-up touches
//! `log_D n` levels, while sift-down scans up to `D` children per level.
//! Dijkstra on sparse graphs performs many more decrease-keys than pops,
//! which is why arities of 4 or 8 often beat the binary heap.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity       |
//! |----------------|------------------|
//! | `insert`       | O(log_D n)       |
//! | `peek_min_*`   | O(1)             |
//! | `pop_min`      | O(D log_D n)     |
//! | `decrease_key` | O(log_D n)       |
//! | `increase_key` | O(D log_D n)     |
//! | `delete`       | O(D log_D n)     |
//! | `contains`     | O(1)             |
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_dijkstra::dary::IndexedDaryHeap;
//!
//! let mut heap = IndexedDaryHeap::new(4, 10);
//! heap.insert(3, 30).unwrap();
//! heap.insert(7, 10).unwrap();
//! heap.insert(1, 20).unwrap();
//!
//! heap.decrease_key(3, 5).unwrap();
//! assert_eq!(heap.peek_min_key(), Ok(3));
//! assert_eq!(heap.pop_min(), Ok((3, 5)));
//! assert_eq!(heap.pop_min(), Ok((7, 10)));
//! assert_eq!(heap.delete(1), Ok(20));
//! assert!(heap.is_empty());
//! ```

use crate::error::HeapError;
use crate::traits::IndexedHeap;

/// Marker for an absent key in `position` and an unused slot in `inverse`
pub const ABSENT: usize = usize::MAX;

/// Smallest supported branching factor
pub const MIN_ARITY: usize = 2;

/// An indexed min-heap with a configurable branching factor
///
/// Keys are `usize` values in `[0, capacity)`. Each present key is bound to a
/// value of type `P`, compared with strict less-than only, so equal values
/// never trigger a swap.
#[derive(Debug, Clone)]
pub struct IndexedDaryHeap<P> {
    /// Branching factor, always at least [`MIN_ARITY`]
    arity: usize,
    /// Number of occupied slots
    size: usize,
    /// key -> slot
    position: Vec<usize>,
    /// slot -> key
    inverse: Vec<usize>,
    /// key -> value, `Some` exactly for present keys
    values: Vec<Option<P>>,
}

impl<P: PartialOrd> IndexedDaryHeap<P> {
    /// Creates an empty heap with the given branching factor and key capacity
    ///
    /// An `arity` below 2 is raised to 2.
    pub fn new(arity: usize, max_keys: usize) -> Self {
        IndexedDaryHeap {
            arity: arity.max(MIN_ARITY),
            size: 0,
            position: vec![ABSENT; max_keys],
            inverse: vec![ABSENT; max_keys],
            values: (0..max_keys).map(|_| None).collect(),
        }
    }

    /// Creates an empty binary (D = 2) heap
    pub fn binary(max_keys: usize) -> Self {
        Self::new(MIN_ARITY, max_keys)
    }

    /// Returns the branching factor
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the number of distinct keys the heap can address
    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    /// Returns the number of keys currently in the heap
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the heap holds no keys
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns true if `key` is currently in the heap
    pub fn contains(&self, key: usize) -> Result<bool, HeapError> {
        self.check_bounds(key)?;
        Ok(self.position[key] != ABSENT)
    }

    /// Inserts `key` bound to `value` and sifts it up
    pub fn insert(&mut self, key: usize, value: P) -> Result<(), HeapError> {
        if self.contains(key)? {
            return Err(HeapError::DuplicateKey { key });
        }
        check_value(&value)?;

        let slot = self.size;
        self.position[key] = slot;
        self.inverse[slot] = key;
        self.values[key] = Some(value);
        self.size += 1;
        self.sift_up(slot);
        Ok(())
    }

    /// Returns the key at the root slot
    pub fn peek_min_key(&self) -> Result<usize, HeapError> {
        if self.is_empty() {
            return Err(HeapError::EmptyHeap);
        }
        Ok(self.inverse[0])
    }

    /// Returns the value bound to the root key
    pub fn peek_min_value(&self) -> Result<&P, HeapError> {
        let key = self.peek_min_key()?;
        self.values[key].as_ref().ok_or(HeapError::EmptyHeap)
    }

    /// Removes the minimum entry, returning its key and value
    pub fn pop_min(&mut self) -> Result<(usize, P), HeapError> {
        let key = self.peek_min_key()?;
        let value = self.delete(key)?;
        Ok((key, value))
    }

    /// Removes the minimum entry, returning its key
    pub fn pop_min_key(&mut self) -> Result<usize, HeapError> {
        self.pop_min().map(|(key, _)| key)
    }

    /// Removes the minimum entry, returning its value
    pub fn pop_min_value(&mut self) -> Result<P, HeapError> {
        self.pop_min().map(|(_, value)| value)
    }

    /// Returns the value bound to a present key
    pub fn value_of(&self, key: usize) -> Result<&P, HeapError> {
        self.check_present(key)?;
        self.values[key]
            .as_ref()
            .ok_or(HeapError::KeyNotFound { key })
    }

    /// Removes `key` from the heap and returns its value
    ///
    /// The last occupied slot is moved into the vacated one. The moved entry
    /// may be too large for its new position (it came from the bottom) or too
    /// small (it came from a different branch), so it is sifted down and then
    /// up.
    pub fn delete(&mut self, key: usize) -> Result<P, HeapError> {
        self.check_present(key)?;

        let slot = self.position[key];
        self.size -= 1;
        let last = self.size;
        self.swap(slot, last);
        if slot < last {
            self.sift_down(slot);
            self.sift_up(slot);
        }

        self.position[key] = ABSENT;
        self.inverse[last] = ABSENT;
        self.values[key]
            .take()
            .ok_or(HeapError::KeyNotFound { key })
    }

    /// Lowers the value bound to `key` and sifts it up
    ///
    /// Returns `Ok(false)` without touching the heap when `value` is not
    /// strictly less than the current value; this never raises a value.
    pub fn decrease_key(&mut self, key: usize, value: P) -> Result<bool, HeapError> {
        self.check_present(key)?;
        check_value(&value)?;

        match &self.values[key] {
            Some(current) if value < *current => {}
            _ => return Ok(false),
        }
        self.values[key] = Some(value);
        self.sift_up(self.position[key]);
        Ok(true)
    }

    /// Raises the value bound to `key` and sifts it down
    ///
    /// Returns `Ok(false)` without touching the heap when `value` is not
    /// strictly greater than the current value.
    pub fn increase_key(&mut self, key: usize, value: P) -> Result<bool, HeapError> {
        self.check_present(key)?;
        check_value(&value)?;

        match &self.values[key] {
            Some(current) if *current < value => {}
            _ => return Ok(false),
        }
        self.values[key] = Some(value);
        self.sift_down(self.position[key]);
        Ok(true)
    }

    /// Replaces the value bound to `key` in either direction, returning the old value
    pub fn update(&mut self, key: usize, value: P) -> Result<P, HeapError> {
        self.check_present(key)?;
        check_value(&value)?;

        let old = self.values[key]
            .replace(value)
            .ok_or(HeapError::KeyNotFound { key })?;
        let slot = self.position[key];
        self.sift_down(slot);
        self.sift_up(self.position[key]);
        Ok(old)
    }

    /// Removes every key, keeping the capacity and arity
    pub fn clear(&mut self) {
        for slot in 0..self.size {
            let key = self.inverse[slot];
            self.position[key] = ABSENT;
            self.values[key] = None;
            self.inverse[slot] = ABSENT;
        }
        self.size = 0;
    }

    /// Iterates over present `(key, value)` pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &P)> + '_ {
        self.inverse[..self.size]
            .iter()
            .filter_map(move |&key| self.values[key].as_ref().map(|value| (key, value)))
    }

    /// Recursively checks the min-heap property from the root
    ///
    /// Meant for tests; not used on any hot path.
    pub fn is_min_heap(&self) -> bool {
        self.is_min_heap_from(0)
    }

    fn is_min_heap_from(&self, slot: usize) -> bool {
        if slot >= self.size {
            return true;
        }
        self.children(slot)
            .all(|child| !self.less(child, slot) && self.is_min_heap_from(child))
    }

    /// Checks the heap property together with position/inverse consistency
    ///
    /// For every occupied slot `s`, `position[inverse[s]] == s`; for every
    /// present key `k`, `inverse[position[k]] == k`; unused slots and absent
    /// keys carry no stale data.
    pub fn check_invariants(&self) -> bool {
        let slots_ok = (0..self.capacity()).all(|slot| {
            if slot < self.size {
                let key = self.inverse[slot];
                key < self.capacity() && self.position[key] == slot && self.values[key].is_some()
            } else {
                self.inverse[slot] == ABSENT
            }
        });
        let keys_ok = (0..self.capacity()).all(|key| match self.position[key] {
            ABSENT => self.values[key].is_none(),
            slot => slot < self.size && self.inverse[slot] == key,
        });
        slots_ok && keys_ok && self.is_min_heap()
    }

    /// Moves the entry at `slot` toward the root while it is smaller than its parent
    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / self.arity;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    /// Moves the entry at `slot` toward the leaves while a child is smaller
    fn sift_down(&mut self, mut slot: usize) {
        while let Some(child) = self.min_child(slot) {
            self.swap(slot, child);
            slot = child;
        }
    }

    /// Returns the smallest child of `slot` if it is smaller than `slot` itself
    fn min_child(&self, slot: usize) -> Option<usize> {
        let mut best = slot;
        for child in self.children(slot) {
            if self.less(child, best) {
                best = child;
            }
        }
        (best != slot).then_some(best)
    }

    /// Occupied child slots of `slot`
    fn children(&self, slot: usize) -> std::ops::Range<usize> {
        let first = slot
            .saturating_mul(self.arity)
            .saturating_add(1)
            .min(self.size);
        let end = first.saturating_add(self.arity).min(self.size);
        first..end
    }

    /// Exchanges two slots, keeping `position` and `inverse` in lockstep
    fn swap(&mut self, a: usize, b: usize) {
        let key_a = self.inverse[a];
        let key_b = self.inverse[b];
        self.inverse.swap(a, b);
        self.position[key_a] = b;
        self.position[key_b] = a;
    }

    /// Strict less-than between the values stored in two occupied slots
    fn less(&self, a: usize, b: usize) -> bool {
        match (&self.values[self.inverse[a]], &self.values[self.inverse[b]]) {
            (Some(x), Some(y)) => x < y,
            _ => false,
        }
    }

    fn check_bounds(&self, key: usize) -> Result<(), HeapError> {
        if key >= self.capacity() {
            return Err(HeapError::InvalidKey {
                key,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    fn check_present(&self, key: usize) -> Result<(), HeapError> {
        if !self.contains(key)? {
            return Err(HeapError::KeyNotFound { key });
        }
        Ok(())
    }
}

/// Rejects values that cannot be ordered, such as `f64::NAN`
fn check_value<P: PartialOrd>(value: &P) -> Result<(), HeapError> {
    if value.partial_cmp(value).is_none() {
        return Err(HeapError::InvalidValue);
    }
    Ok(())
}

impl<P: PartialOrd> IndexedHeap<P> for IndexedDaryHeap<P> {
    fn with_capacity(max_keys: usize) -> Self {
        Self::binary(max_keys)
    }

    fn capacity(&self) -> usize {
        IndexedDaryHeap::capacity(self)
    }

    fn len(&self) -> usize {
        IndexedDaryHeap::len(self)
    }

    fn contains(&self, key: usize) -> Result<bool, HeapError> {
        IndexedDaryHeap::contains(self, key)
    }

    fn insert(&mut self, key: usize, value: P) -> Result<(), HeapError> {
        IndexedDaryHeap::insert(self, key, value)
    }

    fn peek_min_key(&self) -> Result<usize, HeapError> {
        IndexedDaryHeap::peek_min_key(self)
    }

    fn peek_min_value(&self) -> Result<&P, HeapError> {
        IndexedDaryHeap::peek_min_value(self)
    }

    fn pop_min(&mut self) -> Result<(usize, P), HeapError> {
        IndexedDaryHeap::pop_min(self)
    }

    fn decrease_key(&mut self, key: usize, value: P) -> Result<bool, HeapError> {
        IndexedDaryHeap::decrease_key(self, key, value)
    }

    fn delete(&mut self, key: usize) -> Result<P, HeapError> {
        IndexedDaryHeap::delete(self, key)
    }
}
