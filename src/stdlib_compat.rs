//! Standard library compatibility layer
//!
//! Provides a `std::collections::BinaryHeap`-shaped wrapper where each item is
//! its own priority.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: This is a min-heap, while `BinaryHeap` is a max-heap.
//!   Use `std::cmp::Reverse<T>` to get max-heap behavior.
//!
//! # Example
//!
//! ```rust
//! use rust_keyed_collections::stdlib_compat::StdHeap;
//!
//! let mut heap: StdHeap<i32> = StdHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&3)); // min-heap, unlike BinaryHeap's max-heap
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.into_sorted_vec(), vec![5, 7]);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::priority_queue::PriorityQueue;
use crate::traits::Heap;

/// A `BinaryHeap`-like min-heap over `Ord` items
///
/// # Type Parameters
/// - `T`: The item type, must implement `Ord`
/// - `H`: The underlying heap, [`PriorityQueue<T, ()>`] by default
pub struct StdHeap<T: Ord, H: Heap<(), T> = PriorityQueue<T, ()>> {
    heap: H,
    _phantom: PhantomData<T>,
}

impl<T: Ord, H: Heap<(), T>> StdHeap<T, H> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            heap: H::new(),
            _phantom: PhantomData,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of items in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item onto the heap
    pub fn push(&mut self, item: T) {
        self.heap.push(item, ())
    }

    /// Returns a reference to the smallest item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|(priority, _)| priority)
    }

    /// Removes and returns the smallest item
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|(priority, _)| priority)
    }

    /// Moves every item of `other` into this heap
    pub fn append(&mut self, other: Self) {
        self.heap.merge(other.heap)
    }

    /// Consumes the heap, returning its items in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }
}

impl<T: Ord, H: Heap<(), T>> Default for StdHeap<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord, H: Heap<(), T>> Extend<T> for StdHeap<T, H> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord, H: Heap<(), T>> FromIterator<T> for StdHeap<T, H> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord, H: Heap<(), T>> fmt::Debug for StdHeap<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdHeap")
            .field("len", &self.heap.len())
            .finish_non_exhaustive()
    }
}
