//! Value-to-positions index for heap slots
//!
//! [`PositionIndex`] records, for each distinct value stored in a heap, the
//! set of heap positions currently holding it. Sets are ordered so that a
//! stable representative position can be picked for duplicates.
//!
//! The index is kept in step with a [`HeapStore`](crate::heap_store::HeapStore)
//! through its [`Reindex`] implementation; it never reads the heap itself.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity                 |
//! |--------------|----------------------------|
//! | `add`        | O(1) + O(log d)            |
//! | `remove`     | O(1) + O(log d)            |
//! | `swap`       | O(1) + O(log d)            |
//! | `lookup_any` | O(1) + O(log d)            |
//! | `contains`   | O(1)                       |
//!
//! where `d` is the number of duplicates of the value involved.

use crate::heap_store::Reindex;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::hash::Hash;

/// Map from each stored value to the heap positions holding it
///
/// Values with no positions have no entry, so membership in the map is
/// membership in the heap.
#[derive(Debug, Clone)]
pub struct PositionIndex<T> {
    map: FxHashMap<T, BTreeSet<usize>>,
}

impl<T> Default for PositionIndex<T> {
    fn default() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }
}

impl<T: Eq + Hash + Clone> PositionIndex<T> {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `pos` under `value`
    pub fn add(&mut self, value: &T, pos: usize) {
        match self.map.get_mut(value) {
            Some(positions) => {
                positions.insert(pos);
            }
            None => {
                self.map.insert(value.clone(), BTreeSet::from([pos]));
            }
        }
    }

    /// Unregisters `pos` from `value`, dropping the entry once it is empty
    ///
    /// Returns false if `pos` was not registered under `value`.
    pub fn remove(&mut self, value: &T, pos: usize) -> bool {
        let Some(positions) = self.map.get_mut(value) else {
            return false;
        };
        let removed = positions.remove(&pos);
        if positions.is_empty() {
            self.map.remove(value);
        }
        removed
    }

    /// Records that `first` moved from `from` to `to` and `second` from `to` to `from`
    ///
    /// Equal values share one position set that already holds both positions,
    /// so nothing changes for them. Returns false if either move was not
    /// registered.
    pub fn swap(&mut self, first: &T, from: usize, second: &T, to: usize) -> bool {
        if first == second {
            return self
                .map
                .get(first)
                .is_some_and(|positions| positions.contains(&from) && positions.contains(&to));
        }
        Self::relocate(&mut self.map, first, from, to)
            && Self::relocate(&mut self.map, second, to, from)
    }

    /// Returns one position holding `value`, the largest when there are several
    pub fn lookup_any(&self, value: &T) -> Option<usize> {
        self.map.get(value).and_then(|positions| positions.last().copied())
    }

    /// Returns true if `value` occupies at least one position
    pub fn contains(&self, value: &T) -> bool {
        self.map.contains_key(value)
    }

    /// Returns every position holding `value`
    pub fn positions(&self, value: &T) -> Option<&BTreeSet<usize>> {
        self.map.get(value)
    }

    /// Returns the number of distinct values indexed
    pub fn distinct_len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if nothing is indexed
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over each distinct value and its positions, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&T, &BTreeSet<usize>)> {
        self.map.iter()
    }

    /// Drops every entry
    pub fn clear(&mut self) {
        self.map.clear();
    }

    fn relocate(map: &mut FxHashMap<T, BTreeSet<usize>>, value: &T, from: usize, to: usize) -> bool {
        match map.get_mut(value) {
            Some(positions) => {
                let moved = positions.remove(&from);
                positions.insert(to);
                moved
            }
            None => false,
        }
    }
}

impl<T: Eq + Hash + Clone> Reindex<T> for PositionIndex<T> {
    fn registered(&mut self, value: &T, pos: usize) {
        self.add(value, pos);
    }

    fn unregistered(&mut self, value: &T, pos: usize) {
        let removed = self.remove(value, pos);
        debug_assert!(removed, "position {} was not indexed for its value", pos);
    }

    fn swapped(&mut self, first: &T, from: usize, second: &T, to: usize) {
        let moved = self.swap(first, from, second, to);
        debug_assert!(moved, "swap of positions {} and {} was not indexed", from, to);
    }

    fn cleared(&mut self) {
        self.clear();
    }
}
