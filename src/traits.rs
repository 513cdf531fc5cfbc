//! Common traits for the priority queues in this crate
//!
//! Both queues share one contract, [`PriorityQueue`], and one error type,
//! [`HeapError`]. The indexed variant answers `contains`/`remove` through its
//! position index; the array variant answers them with a linear scan.

use std::fmt;

/// Error type for priority queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// A value was required but none was supplied
    InvalidArgument,
    /// The queue holds no elements
    Empty,
    /// A position outside `[0, len)` was requested
    IndexOutOfRange {
        /// The requested position
        index: usize,
        /// The queue length at the time of the call
        len: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidArgument => write!(f, "a value is required but none was given"),
            HeapError::Empty => write!(f, "priority queue is empty"),
            HeapError::IndexOutOfRange { index, len } => {
                write!(f, "position {} is out of range for length {}", index, len)
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Min-priority queue over values that are their own priority
///
/// Elements are ordered by `T: Ord`; the smallest element is always at the
/// front. Equal elements may be stored more than once.
///
/// Positions returned by [`index_of`](PriorityQueue::index_of) and accepted by
/// [`remove_at`](PriorityQueue::remove_at) are heap-array positions. They are
/// invalidated by every mutation.
///
/// # Example
///
/// ```rust
/// use indexed_heaps::{HeapError, PriorityQueue};
/// use indexed_heaps::indexed::IndexedPriorityQueue;
///
/// let mut queue = IndexedPriorityQueue::new();
/// queue.push(3);
/// queue.push(1);
/// queue.push(2);
///
/// assert_eq!(queue.peek(), Ok(&1));
/// assert!(queue.remove(&2));
/// assert_eq!(queue.pop(), Ok(1));
/// assert_eq!(queue.pop(), Ok(3));
/// assert_eq!(queue.pop(), Err(HeapError::Empty));
/// ```
pub trait PriorityQueue<T: Ord> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element
    ///
    /// Calling this on an empty queue does nothing.
    fn clear(&mut self);

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the queue holds no elements.
    fn peek(&self) -> Result<&T, HeapError>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the queue holds no elements.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, HeapError>;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized (storage doubles when full)
    fn push(&mut self, element: T);

    /// Inserts an element that may be missing
    ///
    /// # Errors
    /// [`HeapError::InvalidArgument`] if `element` is `None`.
    fn try_push(&mut self, element: Option<T>) -> Result<(), HeapError> {
        match element {
            Some(element) => {
                self.push(element);
                Ok(())
            }
            None => Err(HeapError::InvalidArgument),
        }
    }

    /// Removes one occurrence of `element`, returning whether one was found
    fn remove(&mut self, element: &T) -> bool;

    /// Removes and returns the element at heap position `index`
    ///
    /// # Errors
    /// [`HeapError::IndexOutOfRange`] if `index >= len()`.
    fn remove_at(&mut self, index: usize) -> Result<T, HeapError>;

    /// Returns true if at least one occurrence of `element` is stored
    fn contains(&self, element: &T) -> bool;

    /// Returns a heap position currently holding `element`
    fn index_of(&self, element: &T) -> Option<usize>;

    /// Checks the heap property for the subtree rooted at position `k`
    ///
    /// Intended for tests; call with `k = 0` to check the whole heap.
    fn is_min_heap(&self, k: usize) -> bool;

    /// Drains the queue into a vector in non-decreasing order
    fn into_sorted_vec(mut self) -> Vec<T>
    where
        Self: Sized,
    {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(element) = self.pop() {
            sorted.push(element);
        }
        sorted
    }
}
