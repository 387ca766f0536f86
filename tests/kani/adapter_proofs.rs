//! Proofs for the collection and two-level adapters
//!
//! Sorted (`BTreeMap`-backed) adapters are used throughout since hashing is
//! expensive to model.

#[cfg(kani)]
use rust_keyed_collections::collection_map::SortedListMap;
#[cfg(kani)]
use rust_keyed_collections::nested_map::SortedNestedMap;

/// Reading an absent key creates exactly one empty collection
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_lazy_create() {
    let mut map: SortedListMap<u8, u8> = SortedListMap::new();
    let key: u8 = kani::any();
    assert!(!map.contains_key(&key));
    assert!(map.get(key).is_empty());
    assert!(map.contains_key(&key));
    assert!(map.len() == 1);
}

/// Two adds under one key keep both values in order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_add_preserves_order() {
    let mut map: SortedListMap<u8, u8> = SortedListMap::new();
    let key: u8 = kani::any();
    let first: u8 = kani::any();
    let second: u8 = kani::any();
    map.add(key, first);
    map.add(key, second);
    assert!(map.get(key).as_slice() == [first, second]);
}

/// Removing the only inner key keeps the outer key
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_remove_inner_does_not_cascade() {
    let mut map: SortedNestedMap<u8, u8, u8> = SortedNestedMap::new();
    let outer: u8 = kani::any();
    let inner: u8 = kani::any();
    assert!(map.add(outer, inner, kani::any()).is_ok());
    assert!(map.remove_inner(outer, &inner));
    assert!(map.contains_key(&outer));
    assert!(map.inner_len() == 0);
}
