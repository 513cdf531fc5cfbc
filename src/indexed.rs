//! Indexed binary min-heap
//!
//! [`IndexedPriorityQueue`] pairs an array-embedded binary heap with a
//! [`PositionIndex`] mapping every stored value to the positions holding it.
//! The index turns containment into a hash lookup and removal by value into a
//! lookup followed by an O(log n) positional removal, where a plain heap has
//! to scan.
//!
//! Duplicates are allowed. When a value is stored more than once,
//! [`index_of`](PriorityQueue::index_of) and [`remove`](PriorityQueue::remove)
//! use the largest position holding it.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity          |
//! |-------------|---------------------|
//! | `push`      | O(log n) amortized  |
//! | `pop`       | O(log n)            |
//! | `peek`      | O(1)                |
//! | `contains`  | O(1)                |
//! | `remove`    | O(log n)            |
//! | `remove_at` | O(log n)            |
//! | heapify     | O(n)                |
//!
//! Storage doubles when full and never shrinks.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::PriorityQueue;
//! use indexed_heaps::indexed::IndexedPriorityQueue;
//!
//! let mut queue = IndexedPriorityQueue::from(vec![2, 3, 1, 10, 4, 9, 5, 7, 6, 8]);
//! assert!(queue.is_min_heap(0));
//! assert!(queue.contains(&10));
//!
//! assert!(queue.remove(&10));
//! assert!(!queue.contains(&10));
//! assert_eq!(queue.pop(), Ok(1));
//! assert_eq!(queue.len(), 8);
//! ```

use crate::heap_store::{HeapStore, ShrinkPolicy};
use crate::position_index::PositionIndex;
use crate::traits::{HeapError, PriorityQueue};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;

/// A binary min-heap with a value-to-positions index
///
/// Values must be `Ord` for the heap and `Eq + Hash + Clone` for the index;
/// the two notions of equality have to agree.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<T: Ord + Hash + Clone> {
    store: HeapStore<T, PositionIndex<T>>,
}

impl<T: Ord + Hash + Clone> IndexedPriorityQueue<T> {
    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: HeapStore::with_capacity(capacity, ShrinkPolicy::Never, PositionIndex::new()),
        }
    }

    /// Returns the number of elements the queue can hold before growing
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Returns every heap position holding `element`
    pub fn positions_of(&self, element: &T) -> Option<&BTreeSet<usize>> {
        self.store.index().positions(element)
    }

    /// Returns the number of distinct values stored
    pub fn distinct_len(&self) -> usize {
        self.store.index().distinct_len()
    }

    /// Returns the elements in heap order
    pub fn as_slice(&self) -> &[T] {
        self.store.as_slice()
    }

    /// Iterates over the elements in heap order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.store.as_slice().iter()
    }

    /// Checks that the index and the heap describe the same placement
    ///
    /// Every position must be registered under the value it holds, and every
    /// registered position must hold that value. Intended for tests.
    pub fn is_index_consistent(&self) -> bool {
        let heap = self.store.as_slice();
        let index = self.store.index();

        let forward = heap
            .iter()
            .enumerate()
            .all(|(pos, value)| index.positions(value).is_some_and(|p| p.contains(&pos)));
        let backward = index.iter().all(|(value, positions)| {
            !positions.is_empty() && positions.iter().all(|&pos| heap.get(pos) == Some(value))
        });
        let registered: usize = index.iter().map(|(_, positions)| positions.len()).sum();

        forward && backward && registered == heap.len()
    }
}

impl<T: Ord + Hash + Clone> PriorityQueue<T> for IndexedPriorityQueue<T> {
    fn new() -> Self {
        Self::with_capacity(0)
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn clear(&mut self) {
        self.store.clear();
    }

    fn peek(&self) -> Result<&T, HeapError> {
        self.store.peek_min()
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        self.store.extract_min()
    }

    fn push(&mut self, element: T) {
        self.store.insert(element);
    }

    fn remove(&mut self, element: &T) -> bool {
        match self.store.index().lookup_any(element) {
            Some(pos) => self.store.remove_at(pos).is_ok(),
            None => false,
        }
    }

    fn remove_at(&mut self, index: usize) -> Result<T, HeapError> {
        self.store.remove_at(index)
    }

    fn contains(&self, element: &T) -> bool {
        self.store.index().contains(element)
    }

    fn index_of(&self, element: &T) -> Option<usize> {
        self.store.index().lookup_any(element)
    }

    fn is_min_heap(&self, k: usize) -> bool {
        self.store.is_min_heap(k)
    }
}

impl<T: Ord + Hash + Clone> Default for IndexedPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Hash + Clone> From<Vec<T>> for IndexedPriorityQueue<T> {
    /// Builds the queue by heapifying `values` in O(n)
    fn from(values: Vec<T>) -> Self {
        Self {
            store: HeapStore::heapify(values, ShrinkPolicy::Never, PositionIndex::new()),
        }
    }
}

impl<T: Ord + Hash + Clone, const N: usize> From<[T; N]> for IndexedPriorityQueue<T> {
    fn from(values: [T; N]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<T: Ord + Hash + Clone> FromIterator<T> for IndexedPriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord + Hash + Clone> Extend<T> for IndexedPriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T: Ord + Hash + Clone + fmt::Display> fmt::Display for IndexedPriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "]")
    }
}
