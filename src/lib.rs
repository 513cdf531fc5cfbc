//! Array-Embedded Binary Heaps for Rust
//!
//! This crate provides binary min-heap priority queues stored in a flat array,
//! where the tree shape is pure index arithmetic (parent `(i - 1) / 2`,
//! children `2i + 1` and `2i + 2`).
//!
//! # Features
//!
//! - **Indexed Priority Queue**: keeps a value→positions index next to the heap,
//!   giving O(1) `contains` and O(log n) removal of arbitrary values, duplicates included
//! - **Array Priority Queue**: the plain heap; `contains` and removal by value scan the array
//! - **Heapify**: O(n) construction from an unordered collection for both
//!
//! Both queues implement [`PriorityQueue`] and report contract violations through
//! [`HeapError`].
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::PriorityQueue;
//! use indexed_heaps::indexed::IndexedPriorityQueue;
//!
//! let mut queue = IndexedPriorityQueue::new();
//! queue.push(5);
//! queue.push(5);
//! queue.push(2);
//!
//! assert!(queue.contains(&5));
//! assert!(queue.remove(&5));
//! assert!(queue.remove(&5));
//! assert!(!queue.contains(&5));
//! assert_eq!(queue.pop(), Ok(2));
//! ```
//!
//! # Concurrency
//!
//! The queues do no internal locking. Share one between threads by wrapping the
//! whole queue in a single mutex.

pub mod array;
pub mod heap_store;
pub mod indexed;
pub mod position_index;
pub mod traits;

// Re-export the main types for convenience
pub use array::ArrayPriorityQueue;
pub use indexed::IndexedPriorityQueue;
pub use traits::{HeapError, PriorityQueue};
