//! Binary min-heap priority queue
//!
//! An array-backed binary heap over `(key, value)` pairs. The entry with the
//! smallest key is always at index 0; the children of index `i` live at
//! `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`.
//!
//! Keys are either passed explicitly with every [`enqueue`](PriorityQueue::enqueue),
//! or derived from the value by a key selector captured at construction and used
//! by [`enqueue_value`](PriorityQueue::enqueue_value). Both entry points share the
//! same sift-up path.
//!
//! Ties between equal keys are broken arbitrarily: the exchange-based sifting
//! does not preserve insertion order.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `enqueue`       | O(log n)   |
//! | `enqueue_value` | O(log n)   |
//! | `dequeue`       | O(log n)   |
//! | `peek`          | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use rust_keyed_collections::priority_queue::PriorityQueue;
//!
//! #[derive(Debug)]
//! struct Job {
//!     priority: u32,
//!     name: &'static str,
//! }
//!
//! let mut queue = PriorityQueue::with_key_selector(|job: &Job| job.priority);
//! queue.enqueue_value(Job { priority: 3, name: "compact" }).unwrap();
//! queue.enqueue_value(Job { priority: 1, name: "flush" }).unwrap();
//! queue.enqueue(2, Job { priority: 2, name: "sync" });
//!
//! assert_eq!(queue.peek().unwrap().name, "flush");
//! assert_eq!(queue.dequeue().unwrap().name, "flush");
//! assert_eq!(queue.dequeue().unwrap().name, "sync");
//! assert_eq!(queue.dequeue().unwrap().name, "compact");
//! assert!(queue.dequeue().is_err());
//! ```

use std::fmt;

use crate::error::{CollectionError, Result};
use crate::traits::{Heap, KeySelector};

/// Key strategy for queues that always receive an explicit key
///
/// [`PriorityQueue::enqueue_value`] fails with
/// [`CollectionError::MissingKeySelector`] under this strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExplicitKey;

impl<V, K> KeySelector<V, K> for ExplicitKey {
    fn select_key(&self, _value: &V) -> Option<K> {
        None
    }
}

/// Key strategy wrapping a `Fn(&V) -> K` selector
#[derive(Clone, Copy)]
pub struct SelectWith<F>(F);

impl<F> SelectWith<F> {
    /// Wraps a selector function
    pub fn new(selector: F) -> Self {
        SelectWith(selector)
    }
}

impl<V, K, F> KeySelector<V, K> for SelectWith<F>
where
    F: Fn(&V) -> K,
{
    fn select_key(&self, value: &V) -> Option<K> {
        Some((self.0)(value))
    }
}

impl<F> fmt::Debug for SelectWith<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SelectWith(..)")
    }
}

/// A binary min-heap priority queue
///
/// This queue stores (key, value) pairs and always returns the value with
/// the minimum key first. `S` is the key strategy fixed at construction:
/// [`ExplicitKey`] for [`new`](PriorityQueue::new), [`SelectWith`] for
/// [`with_key_selector`](PriorityQueue::with_key_selector).
#[derive(Clone)]
pub struct PriorityQueue<K: Ord, V, S = ExplicitKey> {
    /// The heap data stored as a vector of (key, value) pairs
    data: Vec<(K, V)>,
    selector: S,
}

impl<K: Ord, V> PriorityQueue<K, V, ExplicitKey> {
    /// Creates an empty queue without a key selector
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            selector: ExplicitKey,
        }
    }

    /// Creates an empty queue without a key selector, with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            selector: ExplicitKey,
        }
    }
}

impl<K: Ord, V, F> PriorityQueue<K, V, SelectWith<F>>
where
    F: Fn(&V) -> K,
{
    /// Creates an empty queue that derives keys with `selector`
    pub fn with_key_selector(selector: F) -> Self {
        Self::with_capacity_and_key_selector(0, selector)
    }

    /// Creates an empty queue that derives keys with `selector`, with room for
    /// `capacity` entries
    pub fn with_capacity_and_key_selector(capacity: usize, selector: F) -> Self {
        Self::with_capacity_and_strategy(capacity, SelectWith::new(selector))
    }
}

impl<K: Ord, V, S: KeySelector<V, K>> PriorityQueue<K, V, S> {
    /// Creates an empty queue that derives keys with a custom [`KeySelector`]
    ///
    /// A strategy may decline to derive a key for some values;
    /// [`enqueue_value`](PriorityQueue::enqueue_value) then fails with
    /// [`CollectionError::MissingKeySelector`].
    pub fn with_strategy(selector: S) -> Self {
        Self::with_capacity_and_strategy(0, selector)
    }

    /// Like [`with_strategy`](PriorityQueue::with_strategy), with room for `capacity` entries
    pub fn with_capacity_and_strategy(capacity: usize, selector: S) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            selector,
        }
    }

    /// Inserts `value` under the key derived by the queue's key selector
    ///
    /// # Errors
    /// [`CollectionError::MissingKeySelector`] if the queue was built without a
    /// selector, or its strategy derives no key for `value`. Nothing is
    /// inserted in that case.
    pub fn enqueue_value(&mut self, value: V) -> Result<()> {
        let key = self
            .selector
            .select_key(&value)
            .ok_or(CollectionError::MissingKeySelector)?;
        self.enqueue(key, value);
        Ok(())
    }
}

impl<K: Ord, V, S> PriorityQueue<K, V, S> {
    /// Returns the number of entries in the queue
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the queue holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts `value` with an explicit `key`
    pub fn enqueue(&mut self, key: K, value: V) {
        self.data.push((key, value));
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the value with the smallest key
    ///
    /// # Errors
    /// [`CollectionError::EmptyQueue`] if the queue is empty.
    pub fn peek(&self) -> Result<&V> {
        self.data
            .first()
            .map(|(_, value)| value)
            .ok_or(CollectionError::EmptyQueue)
    }

    /// Returns the smallest key and its value, or `None` if empty
    pub fn peek_entry(&self) -> Option<(&K, &V)> {
        self.data.first().map(|(k, v)| (k, v))
    }

    /// Removes and returns the value with the smallest key
    ///
    /// # Errors
    /// [`CollectionError::EmptyQueue`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<V> {
        self.dequeue_entry()
            .map(|(_, value)| value)
            .ok_or(CollectionError::EmptyQueue)
    }

    /// Removes and returns the smallest key and its value, or `None` if empty
    pub fn dequeue_entry(&mut self) -> Option<(K, V)> {
        if self.data.is_empty() {
            return None;
        }

        // Move the last entry into the root slot, then shrink by one
        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the entries in heap (array) order, which is unspecified
    /// beyond the first entry being the minimum
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.data.iter().map(|(k, v)| (k, v))
    }

    /// Consumes the queue, returning its entries in non-decreasing key order
    pub fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(entry) = self.dequeue_entry() {
            sorted.push(entry);
        }
        sorted
    }

    /// Returns true if every entry's key is <= the keys of its children
    pub fn is_heap_ordered(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2].0 <= self.data[i].0)
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].0 < self.data[parent].0 {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.data[left].0 < self.data[smallest].0 {
                smallest = left;
            }
            if right < len && self.data[right].0 < self.data[smallest].0 {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<K: Ord, V> Heap<V, K> for PriorityQueue<K, V, ExplicitKey> {
    fn new() -> Self {
        PriorityQueue::new()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, priority: K, item: V) {
        self.enqueue(priority, item);
    }

    fn peek(&self) -> Option<(&K, &V)> {
        self.peek_entry()
    }

    fn pop(&mut self) -> Option<(K, V)> {
        self.dequeue_entry()
    }

    fn merge(&mut self, other: Self) {
        // O(m log(n + m)); a bottom-up heapify would be O(n + m)
        self.extend(other.data);
    }
}

impl<K: Ord, V> Default for PriorityQueue<K, V, ExplicitKey> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V, S> Extend<(K, V)> for PriorityQueue<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.enqueue(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for PriorityQueue<K, V, ExplicitKey> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<K: Ord, V, S> fmt::Debug for PriorityQueue<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.data.len())
            .finish_non_exhaustive()
    }
}
