//! Array-embedded binary min-heap storage
//!
//! [`HeapStore`] keeps its elements in a flat vector interpreted as a
//! complete binary tree: the parent of position `i` is `(i - 1) / 2` and its
//! children are `2i + 1` and `2i + 2`. It owns the heap ordering and the
//! mechanical primitives (swap, sink, swim, resize) that the queues in this
//! crate are built from.
//!
//! # Reindexing
//!
//! Every store carries a companion [`Reindex`] value. The store reports each
//! slot it fills, empties or swaps to the companion from inside the primitive
//! that performs the move, so a companion index cannot miss an update:
//!
//! - [`NoIndex`]: ignores every report (plain heap)
//! - [`PositionIndex`](crate::position_index::PositionIndex): tracks which
//!   positions hold each value
//!
//! # Capacity
//!
//! The store tracks a logical capacity. Inserting into a full store doubles it
//! (an empty store grows to 1). Whether removals ever shrink it is decided by
//! the store's [`ShrinkPolicy`].

use crate::traits::HeapError;

/// Receiver of slot movements made by a [`HeapStore`]
///
/// Implementations see every change to which position holds which value, in
/// the order the store makes them.
pub trait Reindex<T> {
    /// `value` now occupies position `pos`, which was previously empty
    fn registered(&mut self, value: &T, pos: usize);

    /// `value` no longer occupies position `pos`, which is now empty
    fn unregistered(&mut self, value: &T, pos: usize);

    /// `first` moved from `from` to `to` while `second` moved from `to` to `from`
    fn swapped(&mut self, first: &T, from: usize, second: &T, to: usize);

    /// Every position was emptied
    fn cleared(&mut self);
}

/// A [`Reindex`] that records nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoIndex;

impl<T> Reindex<T> for NoIndex {
    #[inline]
    fn registered(&mut self, _value: &T, _pos: usize) {}

    #[inline]
    fn unregistered(&mut self, _value: &T, _pos: usize) {}

    #[inline]
    fn swapped(&mut self, _first: &T, _from: usize, _second: &T, _to: usize) {}

    #[inline]
    fn cleared(&mut self) {}
}

/// When a [`HeapStore`] gives storage back after removals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShrinkPolicy {
    /// Capacity never decreases
    #[default]
    Never,
    /// Capacity halves when a removal leaves the store at a quarter of it
    QuarterLoad,
}

/// A binary min-heap over a resizable array, with a companion [`Reindex`]
#[derive(Debug, Clone)]
pub struct HeapStore<T, R = NoIndex> {
    /// Heap slots; `data.len()` is the heap size
    data: Vec<T>,
    /// Logical capacity, always `>= data.len()`
    capacity: usize,
    policy: ShrinkPolicy,
    index: R,
}

impl<T: Ord, R: Reindex<T>> HeapStore<T, R> {
    /// Creates an empty store with room for `capacity` elements
    pub fn with_capacity(capacity: usize, policy: ShrinkPolicy, index: R) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            policy,
            index,
        }
    }

    /// Builds a store from unordered values in O(n)
    ///
    /// Every value is registered at its initial position, then each internal
    /// node is sunk, from the last parent back to the root. The capacity equals
    /// the number of values.
    pub fn heapify(values: Vec<T>, policy: ShrinkPolicy, index: R) -> Self {
        let mut store = Self {
            capacity: values.len(),
            data: values,
            policy,
            index,
        };
        for (pos, value) in store.data.iter().enumerate() {
            store.index.registered(value, pos);
        }
        for k in (0..store.data.len() / 2).rev() {
            store.sink(k);
        }
        store
    }

    /// Returns the number of stored elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no elements are stored
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the logical capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the shrink policy this store was created with
    pub fn policy(&self) -> ShrinkPolicy {
        self.policy
    }

    /// Returns the companion index
    pub fn index(&self) -> &R {
        &self.index
    }

    /// Returns the slots in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the element at heap position `pos`
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.data.get(pos)
    }

    /// Returns the minimum element
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the store is empty.
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Inserts `value`, growing the storage if it is full
    pub fn insert(&mut self, value: T) {
        if self.data.len() == self.capacity {
            self.resize((self.capacity * 2).max(1));
        }
        let pos = self.data.len();
        self.index.registered(&value, pos);
        self.data.push(value);
        self.swim(pos);
    }

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the store is empty.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        self.remove_at(0)
    }

    /// Removes and returns the element at heap position `pos`
    ///
    /// The last element takes the vacated position and is then sunk; if it
    /// cannot sink it is swum instead, since it may belong above `pos`.
    ///
    /// # Errors
    /// [`HeapError::IndexOutOfRange`] if `pos >= len()`.
    pub fn remove_at(&mut self, pos: usize) -> Result<T, HeapError> {
        let len = self.data.len();
        if pos >= len {
            return Err(HeapError::IndexOutOfRange { index: pos, len });
        }

        let last = len - 1;
        self.swap_and_reindex(pos, last);
        let removed = self.data.pop().ok_or(HeapError::Empty)?;
        self.index.unregistered(&removed, last);

        if pos != last && !self.sink(pos) {
            self.swim(pos);
        }

        if self.policy == ShrinkPolicy::QuarterLoad
            && !self.data.is_empty()
            && self.data.len() == self.capacity / 4
        {
            self.resize(self.capacity / 2);
        }

        Ok(removed)
    }

    /// Removes every element, keeping the current capacity
    pub fn clear(&mut self) {
        self.data.clear();
        self.index.cleared();
    }

    /// Moves the element at `k` up until its parent is not greater
    ///
    /// Returns true if the element moved; a position past the end never moves.
    pub fn swim(&mut self, mut k: usize) -> bool {
        if k >= self.data.len() {
            return false;
        }
        let mut moved = false;
        while k > 0 {
            let parent = (k - 1) / 2;
            if self.data[k] >= self.data[parent] {
                break;
            }
            self.swap_and_reindex(k, parent);
            k = parent;
            moved = true;
        }
        moved
    }

    /// Moves the element at `k` down until neither child is smaller
    ///
    /// The smaller child is followed at each step; equal children prefer the
    /// left one. Returns true if the element moved.
    pub fn sink(&mut self, mut k: usize) -> bool {
        let len = self.data.len();
        let mut moved = false;
        loop {
            let left = 2 * k + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < len && self.data[right] < self.data[left] {
                smallest = right;
            }

            if self.data[k] <= self.data[smallest] {
                break;
            }
            self.swap_and_reindex(k, smallest);
            k = smallest;
            moved = true;
        }
        moved
    }

    /// Reallocates the storage with room for `new_capacity` elements
    ///
    /// A capacity smaller than the current length is raised to the length.
    pub fn resize(&mut self, new_capacity: usize) {
        let new_capacity = new_capacity.max(self.data.len());
        let mut storage = Vec::with_capacity(new_capacity);
        storage.append(&mut self.data);
        self.data = storage;
        self.capacity = new_capacity;
    }

    /// Checks the heap property for the subtree rooted at `k`
    pub fn is_min_heap(&self, k: usize) -> bool {
        let len = self.data.len();
        if k >= len {
            return true;
        }

        let left = 2 * k + 1;
        let right = 2 * k + 2;
        if left < len && self.data[k] > self.data[left] {
            return false;
        }
        if right < len && self.data[k] > self.data[right] {
            return false;
        }

        self.is_min_heap(left) && self.is_min_heap(right)
    }

    /// Consumes the store, returning the slots in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Swaps two slots and reports the swap to the index
    ///
    /// This is the only place slots are exchanged.
    fn swap_and_reindex(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.data.swap(i, j);
        self.index.swapped(&self.data[j], i, &self.data[i], j);
    }
}
