//! Pluggable backing maps for the keyed adapters
//!
//! This module implements [`MapStorage`] for the map types an adapter can
//! delegate to:
//!
//! - `HashMap<K, V, S>` for any `BuildHasher`, which covers both the std
//!   `RandomState` map and `rustc_hash::FxHashMap`
//! - `BTreeMap<K, V>` for key-ordered iteration
//! - `IndexMap<K, V, S>` for insertion-ordered iteration (feature `indexmap`)
//!
//! # Design
//!
//! The adapters never reorder, rehash or otherwise interpret entries: lookups,
//! removal and iteration go straight to the backing map, so enumeration order
//! and capacity behaviour are inherited from it unchanged.

use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::traits::MapStorage;

// ============================================================================
// HashMap
// ============================================================================

impl<K, V, S> MapStorage<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Iter<'a> = hash_map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;
    type IterMut<'a> = hash_map::IterMut<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;
    type IntoIter = hash_map::IntoIter<K, V>;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn find(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        HashMap::get_mut(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn insert_and_get(&mut self, key: K, value: V) -> &mut V {
        match self.entry(key) {
            hash_map::Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                *slot = value;
                slot
            }
            hash_map::Entry::Vacant(entry) => entry.insert(value),
        }
    }

    fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, default: F) -> &mut V {
        self.entry(key).or_insert_with(default)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        HashMap::iter_mut(self)
    }

    fn into_entries(self) -> Self::IntoIter {
        IntoIterator::into_iter(self)
    }
}

// ============================================================================
// BTreeMap
// ============================================================================

impl<K: Ord, V> MapStorage<K, V> for BTreeMap<K, V> {
    type Iter<'a> = btree_map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;
    type IterMut<'a> = btree_map::IterMut<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;
    type IntoIter = btree_map::IntoIter<K, V>;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn find(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        BTreeMap::get_mut(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn insert_and_get(&mut self, key: K, value: V) -> &mut V {
        match self.entry(key) {
            btree_map::Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                *slot = value;
                slot
            }
            btree_map::Entry::Vacant(entry) => entry.insert(value),
        }
    }

    fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, default: F) -> &mut V {
        self.entry(key).or_insert_with(default)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeMap::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        BTreeMap::iter_mut(self)
    }

    fn into_entries(self) -> Self::IntoIter {
        IntoIterator::into_iter(self)
    }
}

// ============================================================================
// IndexMap - insertion-ordered storage
// ============================================================================

#[cfg(feature = "indexmap")]
mod index {
    use std::hash::{BuildHasher, Hash};

    use indexmap::{map, IndexMap};

    use crate::traits::MapStorage;

    /// `IndexMap` storage
    ///
    /// `remove` uses `shift_remove`, so the remaining entries keep their
    /// insertion order at O(n) cost per removal.
    impl<K, V, S> MapStorage<K, V> for IndexMap<K, V, S>
    where
        K: Hash + Eq,
        S: BuildHasher,
    {
        type Iter<'a> = map::Iter<'a, K, V>
        where
            Self: 'a,
            K: 'a,
            V: 'a;
        type IterMut<'a> = map::IterMut<'a, K, V>
        where
            Self: 'a,
            K: 'a,
            V: 'a;
        type IntoIter = map::IntoIter<K, V>;

        fn len(&self) -> usize {
            IndexMap::len(self)
        }

        fn find(&self, key: &K) -> Option<&V> {
            IndexMap::get(self, key)
        }

        fn find_mut(&mut self, key: &K) -> Option<&mut V> {
            IndexMap::get_mut(self, key)
        }

        fn contains_key(&self, key: &K) -> bool {
            IndexMap::contains_key(self, key)
        }

        fn insert(&mut self, key: K, value: V) -> Option<V> {
            IndexMap::insert(self, key, value)
        }

        fn insert_and_get(&mut self, key: K, value: V) -> &mut V {
            match self.entry(key) {
                map::Entry::Occupied(entry) => {
                    let slot = entry.into_mut();
                    *slot = value;
                    slot
                }
                map::Entry::Vacant(entry) => entry.insert(value),
            }
        }

        fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, default: F) -> &mut V {
            self.entry(key).or_insert_with(default)
        }

        fn remove(&mut self, key: &K) -> Option<V> {
            IndexMap::shift_remove(self, key)
        }

        fn clear(&mut self) {
            IndexMap::clear(self)
        }

        fn iter(&self) -> Self::Iter<'_> {
            IndexMap::iter(self)
        }

        fn iter_mut(&mut self) -> Self::IterMut<'_> {
            IndexMap::iter_mut(self)
        }

        fn into_entries(self) -> Self::IntoIter {
            IntoIterator::into_iter(self)
        }
    }
}
