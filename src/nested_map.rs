//! Two-level maps
//!
//! A [`NestedMap`] maps an outer key to an inner map of inner key to value.
//! Reading an absent outer key through [`get`](NestedMap::get) creates an empty
//! inner map, exactly like [`CollectionMap`] does for collections; the outer
//! level is in fact a `CollectionMap` whose "collections" are inner maps.
//!
//! Inner removal never cascades: removing the last inner key leaves an empty
//! inner map under the outer key, and `contains_key(outer)` stays true. Call
//! [`remove`](NestedMap::remove) to drop an outer key explicitly.
//!
//! # Example
//!
//! ```rust
//! use rust_keyed_collections::nested_map::NestedHashMap;
//!
//! let mut routes: NestedHashMap<&str, &str, u16> = NestedHashMap::new();
//! routes.add("eu", "fra", 443).unwrap();
//! routes.add("eu", "ams", 8443).unwrap();
//! assert!(routes.add("eu", "fra", 80).is_err());
//!
//! assert_eq!(routes.get_value(&"eu", &"fra"), Some(&443));
//! assert!(routes.remove_inner("eu", &"fra"));
//! assert!(routes.remove_inner("eu", &"ams"));
//! assert!(routes.contains_key(&"eu"));
//! assert!(routes.get("eu").is_empty());
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use crate::collection_map::{CollectionMap, ListMap, SetMap};
use crate::error::{CollectionError, Result};
use crate::traits::MapStorage;

/// A map from outer key to a lazily created inner map
///
/// # Type Parameters
/// - `K1`: outer key
/// - `K2`: inner key
/// - `V`: inner value
/// - `IM`: inner map, `HashMap<K2, V>` unless chosen otherwise
/// - `OM`: outer backing map, `HashMap<K1, IM>` unless chosen otherwise
pub struct NestedMap<K1, K2, V, IM = HashMap<K2, V>, OM = HashMap<K1, IM>> {
    outer: CollectionMap<K1, IM, OM>,
    _marker: PhantomData<fn() -> (K2, V)>,
}

impl<K1, K2, V, IM, OM> NestedMap<K1, K2, V, IM, OM>
where
    IM: MapStorage<K2, V> + Default,
    OM: MapStorage<K1, IM> + Default,
{
    /// Creates an empty two-level map
    pub fn new() -> Self {
        Self::with_map(OM::default())
    }
}

impl<K1, K2, V, IM, OM> NestedMap<K1, K2, V, IM, OM>
where
    IM: MapStorage<K2, V> + Default,
    OM: MapStorage<K1, IM>,
{
    /// Wraps an existing outer map
    pub fn with_map(outer: OM) -> Self {
        Self {
            outer: CollectionMap::with_map(outer),
            _marker: PhantomData,
        }
    }

    /// Returns the inner map under `outer`, creating an empty one if absent
    pub fn get(&mut self, outer: K1) -> &mut IM {
        self.outer.get(outer)
    }

    /// Returns the inner map under `outer` without creating one
    pub fn try_get(&self, outer: &K1) -> Option<&IM> {
        self.outer.try_get(outer)
    }

    /// Returns the inner map under `outer` mutably without creating one
    pub fn try_get_mut(&mut self, outer: &K1) -> Option<&mut IM> {
        self.outer.try_get_mut(outer)
    }

    /// Stores `inner` under `outer`, returning the inner map it replaced
    pub fn set(&mut self, outer: K1, inner: IM) -> Option<IM> {
        self.outer.set(outer, inner)
    }

    /// Stores `inner` under an outer key that must not be present yet
    ///
    /// # Errors
    /// [`CollectionError::DuplicateKey`] if `outer` is already present.
    pub fn insert_inner_map(&mut self, outer: K1, inner: IM) -> Result<()> {
        self.outer.insert_collection(outer, inner)
    }

    /// Adds `value` under `(outer, inner)`, creating the inner map if needed
    ///
    /// # Errors
    /// [`CollectionError::DuplicateKey`] if `inner` already exists under
    /// `outer`. Nothing is modified in that case.
    pub fn add(&mut self, outer: K1, inner: K2, value: V) -> Result<()> {
        let map = self.outer.get(outer);
        if map.contains_key(&inner) {
            return Err(CollectionError::DuplicateKey);
        }
        map.insert(inner, value);
        Ok(())
    }

    /// Stores `value` under `(outer, inner)`, returning the value it replaced
    pub fn insert(&mut self, outer: K1, inner: K2, value: V) -> Option<V> {
        self.outer.get(outer).insert(inner, value)
    }

    /// Returns the value under `(outer, inner)` without creating anything
    pub fn get_value(&self, outer: &K1, inner: &K2) -> Option<&V> {
        self.outer.try_get(outer).and_then(|map| map.find(inner))
    }

    /// Returns the value under `(outer, inner)` mutably without creating anything
    pub fn get_value_mut(&mut self, outer: &K1, inner: &K2) -> Option<&mut V> {
        self.outer
            .try_get_mut(outer)
            .and_then(|map| map.find_mut(inner))
    }

    /// Returns true if `inner` exists under `outer`
    pub fn contains(&self, outer: &K1, inner: &K2) -> bool {
        self.outer
            .try_get(outer)
            .is_some_and(|map| map.contains_key(inner))
    }

    /// Removes the outer key and its whole inner map
    pub fn remove(&mut self, outer: &K1) -> Option<IM> {
        self.outer.remove(outer)
    }

    /// Removes `inner` from the inner map under `outer`
    ///
    /// The outer key is looked up through [`get`](NestedMap::get), so an absent
    /// outer key ends up present with an empty inner map. An inner map emptied
    /// by this call is kept in place.
    pub fn remove_inner(&mut self, outer: K1, inner: &K2) -> bool {
        let map = self.outer.get(outer);
        let removed = map.remove(inner).is_some();
        if removed && map.is_empty() {
            trace!("inner map left empty after removal");
        }
        removed
    }

    /// Returns true if `outer` has an inner map
    pub fn contains_key(&self, outer: &K1) -> bool {
        self.outer.contains_key(outer)
    }

    /// Returns the number of outer keys
    pub fn len(&self) -> usize {
        self.outer.len()
    }

    /// Returns true if there are no outer keys
    pub fn is_empty(&self) -> bool {
        self.outer.is_empty()
    }

    /// Removes every outer key
    pub fn clear(&mut self) {
        self.outer.clear()
    }

    /// Iterates over the outer keys in the outer map's order
    pub fn keys(&self) -> impl Iterator<Item = &K1> + '_ {
        self.outer.keys()
    }

    /// Iterates over the inner maps in the outer map's order
    pub fn values(&self) -> impl Iterator<Item = &IM> + '_ {
        self.outer.values()
    }

    /// Iterates over `(outer key, inner map)` pairs
    pub fn iter(&self) -> OM::Iter<'_> {
        self.outer.iter()
    }

    /// Iterates mutably over `(outer key, inner map)` pairs
    pub fn iter_mut(&mut self) -> OM::IterMut<'_> {
        self.outer.iter_mut()
    }

    /// Total number of inner entries across all outer keys
    pub fn inner_len(&self) -> usize {
        self.outer.values().map(|map| map.len()).sum()
    }

    /// Consumes the map, returning the outer backing map
    pub fn into_inner(self) -> OM {
        self.outer.into_inner()
    }
}

impl<K1, K2, V, IM, OM> Default for NestedMap<K1, K2, V, IM, OM>
where
    IM: MapStorage<K2, V> + Default,
    OM: MapStorage<K1, IM> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K1, K2, V, IM, OM: Clone> Clone for NestedMap<K1, K2, V, IM, OM> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            _marker: PhantomData,
        }
    }
}

impl<K1, K2, V, IM, OM: fmt::Debug> fmt::Debug for NestedMap<K1, K2, V, IM, OM> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestedMap")
            .field("outer", &self.outer)
            .finish()
    }
}

impl<K1, K2, V, IM, OM> IntoIterator for NestedMap<K1, K2, V, IM, OM>
where
    OM: MapStorage<K1, IM>,
{
    type Item = (K1, IM);
    type IntoIter = OM::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.outer.into_iter()
    }
}

/// Hash map of hash maps
pub type NestedHashMap<K1, K2, V> = NestedMap<K1, K2, V>;

/// Both levels ordered by key
pub type SortedNestedMap<K1, K2, V> =
    NestedMap<K1, K2, V, BTreeMap<K2, V>, BTreeMap<K1, BTreeMap<K2, V>>>;

/// Hashed outer level, key-ordered inner maps
pub type HashSortedNestedMap<K1, K2, V> =
    NestedMap<K1, K2, V, BTreeMap<K2, V>, HashMap<K1, BTreeMap<K2, V>>>;

/// Outer key to a [`ListMap`] of inner key to values
pub type ListNestedMap<K1, K2, V> =
    NestedMap<K1, K2, Vec<V>, ListMap<K2, V>, HashMap<K1, ListMap<K2, V>>>;

/// Outer key to a [`SetMap`] of inner key to values
pub type SetNestedMap<K1, K2, V> =
    NestedMap<K1, K2, HashSet<V>, SetMap<K2, V>, HashMap<K1, SetMap<K2, V>>>;
