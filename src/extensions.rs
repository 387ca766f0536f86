//! Merge and loose-comparison helpers for maps and collections
//!
//! - [`merge`] builds a new map from two maps, the second winning on key collisions
//! - [`MergeExt`] applies entries onto an existing map in place
//! - [`equivalent`] and [`maps_equivalent`] compare collections loosely
//!
//! # Loose equivalence
//!
//! [`equivalent`] treats two sequences as equal when they have the same length
//! and each pair of elements, taken in iteration order, is either `==` or has
//! the same `Display` text. This is order-dependent (two hash maps with the
//! same contents can compare unequal), and values that are not `==` still match
//! when they print alike (`NaN`, or types whose `Display` omits fields). Use it
//! for diagnostics and test assertions, not as a general equality.

use std::fmt::Display;

use crate::traits::MapStorage;

/// Returns a new map with the entries of `first` overwritten and extended by
/// the entries of `second`
///
/// When either side is empty the other is returned as a clone.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use rust_keyed_collections::extensions::merge;
///
/// let first = HashMap::from([("a", 1), ("b", 2)]);
/// let second = HashMap::from([("b", 20), ("c", 30)]);
/// let merged = merge(&first, &second);
/// assert_eq!(merged, HashMap::from([("a", 1), ("b", 20), ("c", 30)]));
/// ```
pub fn merge<K, V, M>(first: &M, second: &M) -> M
where
    K: Clone,
    V: Clone,
    M: MapStorage<K, V> + Clone,
{
    if first.is_empty() {
        return second.clone();
    }
    if second.is_empty() {
        return first.clone();
    }

    let mut result = first.clone();
    for (key, value) in second.iter() {
        result.insert(key.clone(), value.clone());
    }
    result
}

/// In-place merging for any [`MapStorage`]
pub trait MergeExt<K, V>: MapStorage<K, V> + Sized {
    /// Inserts every entry of `other`, overwriting existing keys
    fn merge_from<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in other {
            self.insert(key, value);
        }
    }

    /// By-value form of [`merge_from`](MergeExt::merge_from)
    fn merged<I>(mut self, other: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.merge_from(other);
        self
    }
}

impl<K, V, M: MapStorage<K, V>> MergeExt<K, V> for M {}

/// Loosely compares two sequences element by element in iteration order
///
/// Returns true when both have the same length and every pair is equal by
/// `==` or by `Display` text. See the [module docs](self) for the caveats.
///
/// ```rust
/// use rust_keyed_collections::extensions::equivalent;
///
/// assert!(equivalent(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!equivalent(&[1, 2, 3], &[3, 2, 1]));
/// assert!(!equivalent(&[1, 2], &[1, 2, 3]));
/// ```
pub fn equivalent<A, B>(current: A, other: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item> + Display,
    B::Item: Display,
{
    let mut current = current.into_iter();
    let mut other = other.into_iter();
    loop {
        match (current.next(), other.next()) {
            (Some(a), Some(b)) => {
                if a != b && a.to_string() != b.to_string() {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// Loosely compares two maps: values first, then keys, each with [`equivalent`]
pub fn maps_equivalent<K1, V1, K2, V2, M1, M2>(current: &M1, other: &M2) -> bool
where
    M1: MapStorage<K1, V1>,
    M2: MapStorage<K2, V2>,
    K1: PartialEq<K2> + Display,
    K2: Display,
    V1: PartialEq<V2> + Display,
    V2: Display,
{
    if current.len() != other.len() {
        return false;
    }
    equivalent(
        current.iter().map(|(_, v)| Loose(v)),
        other.iter().map(|(_, v)| Loose(v)),
    ) && equivalent(
        current.iter().map(|(k, _)| Loose(k)),
        other.iter().map(|(k, _)| Loose(k)),
    )
}

/// Borrowed element compared through its referent
struct Loose<'a, T>(&'a T);

impl<'a, 'b, T: PartialEq<U>, U> PartialEq<Loose<'b, U>> for Loose<'a, T> {
    fn eq(&self, other: &Loose<'b, U>) -> bool {
        self.0 == other.0
    }
}

impl<T: Display> Display for Loose<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn test_merge_second_wins() {
        let first = BTreeMap::from([(1, "a"), (2, "b")]);
        let second = BTreeMap::from([(2, "B"), (3, "C")]);
        let merged = merge(&first, &second);
        assert_eq!(merged, BTreeMap::from([(1, "a"), (2, "B"), (3, "C")]));
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_merge_with_empty_side() {
        let full = HashMap::from([("k", 1)]);
        let empty = HashMap::new();
        assert_eq!(merge(&full, &empty), full);
        assert_eq!(merge(&empty, &full), full);
    }

    #[test]
    fn test_merge_from_in_place() {
        let mut target = HashMap::from([("a", 1), ("b", 2)]);
        target.merge_from([("b", 3), ("c", 4)]);
        assert_eq!(target, HashMap::from([("a", 1), ("b", 3), ("c", 4)]));

        let target = target.merged(Vec::new());
        assert_eq!(target.len(), 3);
    }

    #[test]
    fn test_equivalent_falls_back_to_text() {
        // NaN != NaN, but both print as "NaN"
        assert!(equivalent([f64::NAN, 1.0], [f64::NAN, 1.0]));
        assert!(!equivalent([f64::NAN], [1.0]));
    }

    #[test]
    fn test_maps_equivalent_is_order_dependent() {
        let a = BTreeMap::from([(1, "x"), (2, "y")]);
        let b = BTreeMap::from([(1, "x"), (2, "y")]);
        let c = BTreeMap::from([(1, "y"), (2, "x")]);
        assert!(maps_equivalent(&a, &b));
        assert!(!maps_equivalent(&a, &c));
        assert!(!maps_equivalent(&a, &BTreeMap::from([(1, "x")])));
    }
}
