//! Maps whose values are collections
//!
//! A [`CollectionMap`] presents a mapping from key to collection where reading
//! a missing key through [`get`](CollectionMap::get) creates, stores and returns
//! an empty collection instead of signalling absence.
//!
//! The adapter is one generic type composed from two strategy values:
//!
//! - the backing map `M` ([`MapStorage`]), which decides key order and hashing
//! - the collection factory `F` ([`CollectionFactory`]), which produces an
//!   empty collection on demand (by default `C::default`)
//!
//! The collection type `C` decides value semantics through [`Bucket`]: lists
//! keep duplicates and insertion order, sets reject duplicates. The aliases at
//! the bottom of this module name the common combinations.
//!
//! # Example
//!
//! ```rust
//! use rust_keyed_collections::collection_map::{ListMap, SetMap};
//!
//! let mut lists: ListMap<&str, i32> = ListMap::new();
//! lists.add("x", 5);
//! lists.add("x", 7);
//! lists.add("x", 5);
//! assert_eq!(lists.get("x"), &vec![5, 7, 5]);
//!
//! let mut sets: SetMap<&str, i32> = SetMap::new();
//! sets.add("x", 5);
//! sets.add("x", 7);
//! assert!(!sets.add("x", 5));
//! assert_eq!(sets.get("x").len(), 2);
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::marker::PhantomData;

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use tracing::trace;

use crate::bucket::OrderedBucket;
use crate::error::{CollectionError, Result};
use crate::traits::{Bucket, CollectionFactory, MapStorage};

/// A map from key to a lazily created collection
///
/// # Type Parameters
/// - `K`: key type
/// - `C`: collection stored under each key
/// - `M`: backing map, `HashMap<K, C>` unless chosen otherwise
/// - `F`: collection factory, `fn() -> C` (`C::default`) unless chosen otherwise
pub struct CollectionMap<K, C, M = HashMap<K, C>, F = fn() -> C> {
    map: M,
    factory: F,
    _marker: PhantomData<fn() -> (K, C)>,
}

impl<K, C, M> CollectionMap<K, C, M>
where
    C: Default,
    M: MapStorage<K, C> + Default,
{
    /// Creates an empty adapter whose collections are built with `C::default`
    pub fn new() -> Self {
        Self::with_map(M::default())
    }
}

impl<K, C, M> CollectionMap<K, C, M>
where
    C: Default,
    M: MapStorage<K, C>,
{
    /// Wraps an existing backing map; collections are built with `C::default`
    pub fn with_map(map: M) -> Self {
        Self::with_factory(map, C::default)
    }
}

impl<K, C, M, F> CollectionMap<K, C, M, F>
where
    M: MapStorage<K, C>,
    F: CollectionFactory<C>,
{
    /// Wraps `map`, building new collections with `factory`
    pub fn with_factory(map: M, factory: F) -> Self {
        Self {
            map,
            factory,
            _marker: PhantomData,
        }
    }

    /// Returns the collection under `key`, creating and storing an empty one
    /// first if the key is absent
    pub fn get(&mut self, key: K) -> &mut C {
        let factory = &self.factory;
        self.map.get_or_insert_with(key, || {
            trace!("creating collection for absent key");
            factory.create()
        })
    }

    /// Returns the collection under `key` without creating one
    pub fn try_get(&self, key: &K) -> Option<&C> {
        self.map.find(key)
    }

    /// Returns the collection under `key` mutably without creating one
    pub fn try_get_mut(&mut self, key: &K) -> Option<&mut C> {
        self.map.find_mut(key)
    }

    /// Stores `collection` under `key`, returning the collection it replaced
    pub fn set(&mut self, key: K, collection: C) -> Option<C> {
        self.map.insert(key, collection)
    }

    /// Stores `collection` under a key that must not be present yet
    ///
    /// # Errors
    /// [`CollectionError::DuplicateKey`] if `key` already has a collection; the
    /// existing collection is left untouched.
    pub fn insert_collection(&mut self, key: K, collection: C) -> Result<()> {
        if self.map.contains_key(&key) {
            return Err(CollectionError::DuplicateKey);
        }
        self.map.insert(key, collection);
        Ok(())
    }

    /// Stores a fresh empty collection under `key`, discarding any existing one
    pub fn initialize_collection(&mut self, key: K) -> &mut C {
        let fresh = self.factory.create();
        if self.map.contains_key(&key) {
            trace!("resetting existing collection");
        }
        self.map.insert_and_get(key, fresh)
    }

    /// Inserts `value` into the collection under `key`, creating the
    /// collection first if needed
    ///
    /// Returns whether the collection accepted the value: list-like
    /// collections always do, set-like collections reject duplicates.
    pub fn add<V>(&mut self, key: K, value: V) -> bool
    where
        C: Bucket<V>,
    {
        self.get(key).insert_value(value)
    }

    /// Returns true if the collection under `key` holds `value`
    ///
    /// Never creates a collection.
    pub fn contains<V>(&self, key: &K, value: &V) -> bool
    where
        C: Bucket<V>,
    {
        self.map
            .find(key)
            .is_some_and(|bucket| bucket.contains_value(value))
    }

    /// Removes one `value` from the collection under `key`
    ///
    /// The collection stays in place even if it becomes empty.
    pub fn remove_value<V>(&mut self, key: &K, value: &V) -> bool
    where
        C: Bucket<V>,
    {
        self.map
            .find_mut(key)
            .is_some_and(|bucket| bucket.remove_value(value))
    }

    /// Returns true if `key` has a collection
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Removes `key` and returns its collection
    pub fn remove(&mut self, key: &K) -> Option<C> {
        self.map.remove(key)
    }

    /// Returns the number of keys
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if there are no keys
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Removes every key and collection
    pub fn clear(&mut self) {
        self.map.clear()
    }

    /// Iterates over the keys in the backing map's order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.map.iter().map(|(key, _)| key)
    }

    /// Iterates over the collections in the backing map's order
    pub fn values(&self) -> impl Iterator<Item = &C> + '_ {
        self.map.iter().map(|(_, collection)| collection)
    }

    /// Iterates mutably over the collections in the backing map's order
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut C> + '_ {
        self.map.iter_mut().map(|(_, collection)| collection)
    }

    /// Iterates over `(key, collection)` pairs in the backing map's order
    pub fn iter(&self) -> M::Iter<'_> {
        self.map.iter()
    }

    /// Iterates mutably over `(key, collection)` pairs in the backing map's order
    pub fn iter_mut(&mut self) -> M::IterMut<'_> {
        self.map.iter_mut()
    }

    /// Returns the backing map
    pub fn as_map(&self) -> &M {
        &self.map
    }

    /// Consumes the adapter, returning the backing map
    pub fn into_inner(self) -> M {
        self.map
    }
}

impl<K: Ord, V> ComparerSetMap<K, V> {
    /// Creates an adapter whose collections are sets ordered by `comparer`
    ///
    /// Every new key gets an [`OrderedBucket`] sharing the same comparer.
    pub fn with_comparer(comparer: fn(&V, &V) -> Ordering) -> Self {
        Self::with_factory(BTreeMap::new(), ComparerFactory::new(comparer))
    }
}

/// Builds empty [`ComparerSet`]s that all share one comparer
pub struct ComparerFactory<V> {
    comparer: fn(&V, &V) -> Ordering,
}

impl<V> ComparerFactory<V> {
    /// Wraps `comparer`
    pub fn new(comparer: fn(&V, &V) -> Ordering) -> Self {
        Self { comparer }
    }
}

impl<V> CollectionFactory<ComparerSet<V>> for ComparerFactory<V> {
    fn create(&self) -> ComparerSet<V> {
        OrderedBucket::new(self.comparer)
    }
}

impl<V> Clone for ComparerFactory<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for ComparerFactory<V> {}

impl<V> fmt::Debug for ComparerFactory<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ComparerFactory(..)")
    }
}

impl<K, C, M> Default for CollectionMap<K, C, M>
where
    C: Default,
    M: MapStorage<K, C> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C, M, F> Clone for CollectionMap<K, C, M, F>
where
    M: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
            factory: self.factory.clone(),
            _marker: PhantomData,
        }
    }
}

impl<K, C, M: fmt::Debug, F> fmt::Debug for CollectionMap<K, C, M, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionMap")
            .field("map", &self.map)
            .finish_non_exhaustive()
    }
}

impl<K, V, C, M, F> Extend<(K, V)> for CollectionMap<K, C, M, F>
where
    C: Bucket<V>,
    M: MapStorage<K, C>,
    F: CollectionFactory<C>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K, V, C, M> FromIterator<(K, V)> for CollectionMap<K, C, M>
where
    C: Bucket<V> + Default,
    M: MapStorage<K, C> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, C, M, F> IntoIterator for CollectionMap<K, C, M, F>
where
    M: MapStorage<K, C>,
{
    type Item = (K, C);
    type IntoIter = M::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_entries()
    }
}

impl<'a, K, C, M, F> IntoIterator for &'a CollectionMap<K, C, M, F>
where
    K: 'a,
    C: 'a,
    M: MapStorage<K, C> + 'a,
{
    type Item = (&'a K, &'a C);
    type IntoIter = M::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

/// A `CollectionMap` is itself a backing map, so it can be the inner map of a
/// [`NestedMap`](crate::nested_map::NestedMap)
impl<K, C, M, F> MapStorage<K, C> for CollectionMap<K, C, M, F>
where
    M: MapStorage<K, C>,
{
    type Iter<'a> = M::Iter<'a>
    where
        Self: 'a,
        K: 'a,
        C: 'a;
    type IterMut<'a> = M::IterMut<'a>
    where
        Self: 'a,
        K: 'a,
        C: 'a;
    type IntoIter = M::IntoIter;

    fn len(&self) -> usize {
        self.map.len()
    }

    fn find(&self, key: &K) -> Option<&C> {
        self.map.find(key)
    }

    fn find_mut(&mut self, key: &K) -> Option<&mut C> {
        self.map.find_mut(key)
    }

    fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn insert(&mut self, key: K, value: C) -> Option<C> {
        self.map.insert(key, value)
    }

    fn insert_and_get(&mut self, key: K, value: C) -> &mut C {
        self.map.insert_and_get(key, value)
    }

    fn get_or_insert_with<G: FnOnce() -> C>(&mut self, key: K, default: G) -> &mut C {
        self.map.get_or_insert_with(key, default)
    }

    fn remove(&mut self, key: &K) -> Option<C> {
        self.map.remove(key)
    }

    fn clear(&mut self) {
        self.map.clear()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.map.iter()
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.map.iter_mut()
    }

    fn into_entries(self) -> Self::IntoIter {
        self.map.into_entries()
    }
}

/// Key to list of values; duplicates and insertion order are kept
pub type ListMap<K, V> = CollectionMap<K, Vec<V>>;

/// Key to hash set of values; duplicates are rejected
pub type SetMap<K, V> = CollectionMap<K, HashSet<V>>;

/// Keys in `Ord` order, each mapping to a list of values
pub type SortedListMap<K, V> = CollectionMap<K, Vec<V>, BTreeMap<K, Vec<V>>>;

/// Keys in `Ord` order, each mapping to a sorted set of values
pub type SortedSetMap<K, V> = CollectionMap<K, BTreeSet<V>, BTreeMap<K, BTreeSet<V>>>;

/// Set ordered by a comparer function
pub type ComparerSet<V> = OrderedBucket<V, fn(&V, &V) -> Ordering>;

/// Keys in `Ord` order, each mapping to a set sorted by a caller comparer
pub type ComparerSetMap<K, V> =
    CollectionMap<K, ComparerSet<V>, BTreeMap<K, ComparerSet<V>>, ComparerFactory<V>>;

/// [`ListMap`] over `FxHashMap`
pub type FxListMap<K, V> = CollectionMap<K, Vec<V>, FxHashMap<K, Vec<V>>>;

/// [`SetMap`] over `FxHashMap`/`FxHashSet`
pub type FxSetMap<K, V> = CollectionMap<K, FxHashSet<V>, FxHashMap<K, FxHashSet<V>>>;

/// Key to inline small vector of values
pub type SmallListMap<K, A> = CollectionMap<K, SmallVec<A>>;

/// Keys in insertion order, each mapping to a list of values
#[cfg(feature = "indexmap")]
pub type IndexListMap<K, V> = CollectionMap<K, Vec<V>, indexmap::IndexMap<K, Vec<V>>>;
