//! Common traits for queues and keyed collections
//!
//! This module holds the seams the rest of the crate is built on:
//!
//! - [`Heap`]: the min-heap contract (push/peek/pop/merge) shared by
//!   [`PriorityQueue`](crate::priority_queue::PriorityQueue) and consumed by
//!   [`StdHeap`](crate::stdlib_compat::StdHeap)
//! - [`KeySelector`]: how a priority is derived from a pending item
//! - [`Bucket`]: the insertion/membership contract of a per-key collection
//! - [`CollectionFactory`]: how an adapter builds an empty collection
//! - [`MapStorage`]: the backing map an adapter delegates to

/// Base trait for min-heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap` which stores values directly (using `Ord`), these heaps
/// store (priority, item) pairs to separate the ordering key from the data.
///
/// # Example
///
/// ```rust
/// use rust_keyed_collections::Heap;
/// use rust_keyed_collections::priority_queue::PriorityQueue;
///
/// let mut heap: PriorityQueue<i32, &str> = Heap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(Heap::peek(&heap), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<(P, T)>;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}

/// Strategy deriving a sort key from a value
///
/// A queue captures exactly one selector at construction. Selectors that cannot
/// derive a key (the explicit-key strategy) return `None`, which the queue
/// reports as [`CollectionError::MissingKeySelector`](crate::CollectionError::MissingKeySelector).
pub trait KeySelector<V, K> {
    /// Derives the key for `value`, or `None` if this strategy has no selector
    fn select_key(&self, value: &V) -> Option<K>;
}

/// Insertion and membership contract of a per-key collection
///
/// Implemented for list-like collections (which keep duplicates and insertion
/// order) and set-like collections (which reject duplicates).
pub trait Bucket<V> {
    /// Inserts a value, returning whether the collection accepted it
    fn insert_value(&mut self, value: V) -> bool;

    /// Returns true if the collection holds a value equal to `value`
    fn contains_value(&self, value: &V) -> bool;

    /// Removes one value equal to `value`, returning whether one was found
    fn remove_value(&mut self, value: &V) -> bool;

    /// Returns the number of values in the collection
    fn bucket_len(&self) -> usize;
}

/// Produces an empty collection for an adapter on demand
///
/// Every `Fn() -> C` is a factory, so closures and `C::default` work directly.
pub trait CollectionFactory<C> {
    /// Builds a new, empty collection
    fn create(&self) -> C;
}

impl<C, F: Fn() -> C> CollectionFactory<C> for F {
    fn create(&self) -> C {
        self()
    }
}

/// A backing key/value map
///
/// Adapters delegate their mapping contract verbatim to a `MapStorage`, so
/// iteration order, equality and capacity behaviour are whatever the chosen
/// map provides.
pub trait MapStorage<K, V> {
    /// Borrowing iterator over entries
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Mutably borrowing iterator over entries
    type IterMut<'a>: Iterator<Item = (&'a K, &'a mut V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Owning iterator over entries
    type IntoIter: Iterator<Item = (K, V)>;

    /// Returns the number of entries
    fn len(&self) -> usize;

    /// Returns true if there are no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value stored under `key`
    fn find(&self, key: &K) -> Option<&V>;

    /// Returns the value stored under `key` mutably
    fn find_mut(&mut self, key: &K) -> Option<&mut V>;

    /// Returns true if `key` is present
    fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Inserts or overwrites, returning the previous value
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Inserts or overwrites, returning a reference to the stored value
    fn insert_and_get(&mut self, key: K, value: V) -> &mut V;

    /// Returns the value under `key`, inserting `default()` first if absent
    fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, default: F) -> &mut V;

    /// Removes `key`, returning its value
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes every entry
    fn clear(&mut self);

    /// Iterates over entries in the backing map's order
    fn iter(&self) -> Self::Iter<'_>;

    /// Iterates mutably over entries in the backing map's order
    fn iter_mut(&mut self) -> Self::IterMut<'_>;

    /// Consumes the map, yielding owned entries
    fn into_entries(self) -> Self::IntoIter;
}
