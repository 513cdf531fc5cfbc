//! Plain array-backed binary min-heap
//!
//! [`ArrayPriorityQueue`] is the same array-embedded heap as
//! [`IndexedPriorityQueue`](crate::indexed::IndexedPriorityQueue) without the
//! position index. It only needs `T: Ord`, and pays for that with linear
//! scans in `contains`, `index_of` and `remove`.
//!
//! Storage doubles when full and halves when a removal leaves it at a
//! quarter load.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity          |
//! |-------------|---------------------|
//! | `push`      | O(log n) amortized  |
//! | `pop`       | O(log n) amortized  |
//! | `peek`      | O(1)                |
//! | `contains`  | O(n)                |
//! | `remove`    | O(n)                |
//! | `remove_at` | O(log n) amortized  |
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::PriorityQueue;
//! use indexed_heaps::array::ArrayPriorityQueue;
//!
//! let mut queue = ArrayPriorityQueue::from(vec![4, 1, 3]);
//! assert_eq!(queue.peek(), Ok(&1));
//! assert!(queue.remove(&3));
//! assert_eq!(queue.pop(), Ok(1));
//! ```

use crate::heap_store::{HeapStore, NoIndex, ShrinkPolicy};
use crate::traits::{HeapError, PriorityQueue};
use std::fmt;

/// A binary min-heap over a resizable array
#[derive(Debug, Clone)]
pub struct ArrayPriorityQueue<T: Ord> {
    store: HeapStore<T, NoIndex>,
}

impl<T: Ord> ArrayPriorityQueue<T> {
    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: HeapStore::with_capacity(capacity, ShrinkPolicy::QuarterLoad, NoIndex),
        }
    }

    /// Returns the number of elements the queue can hold before growing
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Returns the elements in heap order
    pub fn as_slice(&self) -> &[T] {
        self.store.as_slice()
    }

    /// Iterates over the elements in heap order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.store.as_slice().iter()
    }
}

impl<T: Ord> PriorityQueue<T> for ArrayPriorityQueue<T> {
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
        match self.index_of(element) {
            Some(pos) => self.store.remove_at(pos).is_ok(),
            None => false,
        }
    }

    fn remove_at(&mut self, index: usize) -> Result<T, HeapError> {
        self.store.remove_at(index)
    }

    fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }

    /// Returns the smallest position holding `element`
    fn index_of(&self, element: &T) -> Option<usize> {
        self.store.as_slice().iter().position(|e| e == element)
    }

    fn is_min_heap(&self, k: usize) -> bool {
        self.store.is_min_heap(k)
    }
}

impl<T: Ord> Default for ArrayPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for ArrayPriorityQueue<T> {
    /// Builds the queue by heapifying `values` in O(n)
    fn from(values: Vec<T>) -> Self {
        Self {
            store: HeapStore::heapify(values, ShrinkPolicy::QuarterLoad, NoIndex),
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for ArrayPriorityQueue<T> {
    fn from(values: [T; N]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<T: Ord> FromIterator<T> for ArrayPriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> Extend<T> for ArrayPriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T: Ord + fmt::Display> fmt::Display for ArrayPriorityQueue<T> {
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
