//! Per-key collection types
//!
//! [`Bucket`] implementations for the collections a
//! [`CollectionMap`](crate::collection_map::CollectionMap) can hold under each key:
//!
//! | Collection        | Duplicates | Iteration order         |
//! |-------------------|------------|-------------------------|
//! | `Vec<V>`          | kept       | insertion               |
//! | `SmallVec<[V; N]>`| kept       | insertion               |
//! | `HashSet<V>`      | rejected   | unspecified             |
//! | `BTreeSet<V>`     | rejected   | `Ord`                   |
//! | [`OrderedBucket`] | rejected   | caller-supplied comparer|

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use smallvec::{Array, SmallVec};

use crate::traits::Bucket;

impl<V: PartialEq> Bucket<V> for Vec<V> {
    fn insert_value(&mut self, value: V) -> bool {
        self.push(value);
        true
    }

    fn contains_value(&self, value: &V) -> bool {
        self.contains(value)
    }

    fn remove_value(&mut self, value: &V) -> bool {
        match self.iter().position(|v| v == value) {
            Some(pos) => {
                self.remove(pos);
                true
            }
            None => false,
        }
    }

    fn bucket_len(&self) -> usize {
        self.len()
    }
}

impl<A> Bucket<A::Item> for SmallVec<A>
where
    A: Array,
    A::Item: PartialEq,
{
    fn insert_value(&mut self, value: A::Item) -> bool {
        self.push(value);
        true
    }

    fn contains_value(&self, value: &A::Item) -> bool {
        self.contains(value)
    }

    fn remove_value(&mut self, value: &A::Item) -> bool {
        match self.iter().position(|v| v == value) {
            Some(pos) => {
                self.remove(pos);
                true
            }
            None => false,
        }
    }

    fn bucket_len(&self) -> usize {
        self.len()
    }
}

impl<V, S> Bucket<V> for HashSet<V, S>
where
    V: Hash + Eq,
    S: BuildHasher,
{
    fn insert_value(&mut self, value: V) -> bool {
        self.insert(value)
    }

    fn contains_value(&self, value: &V) -> bool {
        self.contains(value)
    }

    fn remove_value(&mut self, value: &V) -> bool {
        self.remove(value)
    }

    fn bucket_len(&self) -> usize {
        self.len()
    }
}

impl<V: Ord> Bucket<V> for BTreeSet<V> {
    fn insert_value(&mut self, value: V) -> bool {
        self.insert(value)
    }

    fn contains_value(&self, value: &V) -> bool {
        self.contains(value)
    }

    fn remove_value(&mut self, value: &V) -> bool {
        self.remove(value)
    }

    fn bucket_len(&self) -> usize {
        self.len()
    }
}

/// A sorted set ordered by a caller-supplied comparer
///
/// Values comparing [`Ordering::Equal`] under the comparer are treated as
/// duplicates and rejected. Values are kept in a sorted `Vec`, so insertion is
/// O(n) and lookup O(log n).
#[derive(Clone)]
pub struct OrderedBucket<V, C> {
    values: Vec<V>,
    comparer: C,
}

impl<V, C> OrderedBucket<V, C>
where
    C: Fn(&V, &V) -> Ordering,
{
    /// Creates an empty bucket ordered by `comparer`
    pub fn new(comparer: C) -> Self {
        Self {
            values: Vec::new(),
            comparer,
        }
    }

    /// Returns the values in comparer order
    pub fn as_slice(&self) -> &[V] {
        &self.values
    }

    /// Iterates over the values in comparer order
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    /// Returns the number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the bucket holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the smallest value under the comparer
    pub fn first(&self) -> Option<&V> {
        self.values.first()
    }

    /// Returns the largest value under the comparer
    pub fn last(&self) -> Option<&V> {
        self.values.last()
    }

    fn search(&self, value: &V) -> std::result::Result<usize, usize> {
        self.values
            .binary_search_by(|item| (self.comparer)(item, value))
    }
}

impl<V, C> Bucket<V> for OrderedBucket<V, C>
where
    C: Fn(&V, &V) -> Ordering,
{
    fn insert_value(&mut self, value: V) -> bool {
        match self.search(&value) {
            Ok(_) => false,
            Err(pos) => {
                self.values.insert(pos, value);
                true
            }
        }
    }

    fn contains_value(&self, value: &V) -> bool {
        self.search(value).is_ok()
    }

    fn remove_value(&mut self, value: &V) -> bool {
        match self.search(value) {
            Ok(pos) => {
                self.values.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    fn bucket_len(&self) -> usize {
        self.values.len()
    }
}

impl<'a, V, C> IntoIterator for &'a OrderedBucket<V, C> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<V: fmt::Debug, C> fmt::Debug for OrderedBucket<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.values.iter()).finish()
    }
}
