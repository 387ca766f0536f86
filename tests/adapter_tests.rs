//! Tests for the collection and two-level adapters across backing maps

mod common;

use std::collections::{BTreeSet, HashMap, HashSet};

use rust_keyed_collections::collection_map::{
    ComparerSetMap, FxListMap, FxSetMap, ListMap, SetMap, SortedListMap, SortedSetMap,
};
use rust_keyed_collections::nested_map::{
    ListNestedMap, NestedHashMap, SetNestedMap, SortedNestedMap,
};
use rust_keyed_collections::{CollectionError, CollectionMap, ErrorKind, MapStorage, NestedMap};

#[test]
fn test_lazy_create_on_get() {
    let mut map: ListMap<&str, i32> = ListMap::new();
    assert!(!map.contains_key(&"x"));
    assert_eq!(map.get("x"), &Vec::<i32>::new());
    assert!(map.contains_key(&"x"));
}

#[test]
fn test_add_list_keeps_order() {
    let mut map: ListMap<&str, i32> = ListMap::new();
    map.add("x", 5);
    map.add("x", 7);
    assert_eq!(map.get("x"), &vec![5, 7]);
}

#[test]
fn test_add_set_collects_distinct() {
    let mut map: SetMap<&str, i32> = SetMap::new();
    map.add("x", 5);
    map.add("x", 7);
    assert_eq!(map.get("x"), &HashSet::from([5, 7]));
}

#[test]
fn test_same_semantics_over_every_backing_map() {
    fn fill<M>(mut map: CollectionMap<u32, Vec<u32>, M>) -> Vec<(u32, Vec<u32>)>
    where
        M: MapStorage<u32, Vec<u32>>,
    {
        for i in 0..12 {
            map.add(i % 3, i);
        }
        assert_eq!(map.len(), 3);
        let mut entries: Vec<_> = map.into_iter().collect();
        entries.sort();
        entries
    }

    let expected = vec![
        (0, vec![0, 3, 6, 9]),
        (1, vec![1, 4, 7, 10]),
        (2, vec![2, 5, 8, 11]),
    ];
    assert_eq!(fill(ListMap::new()), expected);
    assert_eq!(fill(FxListMap::new()), expected);
    assert_eq!(fill(SortedListMap::new()), expected);
}

#[cfg(feature = "indexmap")]
#[test]
fn test_index_list_map_keeps_insertion_order() {
    use rust_keyed_collections::collection_map::IndexListMap;

    let mut map: IndexListMap<&str, u8> = IndexListMap::new();
    map.add("zeta", 1);
    map.add("alpha", 2);
    map.add("mid", 3);
    map.remove(&"alpha");
    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, vec!["zeta", "mid"]);
}

#[test]
fn test_sorted_set_map() {
    let mut map: SortedSetMap<char, u8> = SortedSetMap::new();
    map.extend([('b', 3), ('a', 2), ('b', 1), ('b', 3)]);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!['a', 'b']);
    assert_eq!(map.get('b'), &BTreeSet::from([1, 3]));
}

#[test]
fn test_comparer_set_map_orders_by_comparer() {
    // Case-insensitive, so "Rust" and "rust" collide
    let mut map: ComparerSetMap<u8, String> = ComparerSetMap::with_comparer(|a: &String, b: &String| {
        a.to_lowercase().cmp(&b.to_lowercase())
    });
    assert!(map.add(1, "rust".to_string()));
    assert!(map.add(1, "Crate".to_string()));
    assert!(!map.add(1, "Rust".to_string()));
    assert_eq!(map.get(1).as_slice(), &["Crate".to_string(), "rust".to_string()]);
    assert!(map.contains(&1, &"CRATE".to_string()));
}

#[test]
fn test_fx_set_map_remove_value_keeps_key() {
    let mut map: FxSetMap<u64, u64> = FxSetMap::new();
    map.add(1, 10);
    assert!(map.remove_value(&1, &10));
    assert!(!map.remove_value(&1, &10));
    assert!(map.contains_key(&1));
    assert!(map.try_get(&1).is_some_and(|set| set.is_empty()));
}

#[test]
fn test_strict_insert_reports_key_conflict() {
    let mut map: ListMap<&str, i32> = ListMap::new();
    map.get("x");
    let err = map.insert_collection("x", vec![1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyConflict);
    assert_eq!(map.try_get(&"x"), Some(&vec![]));
}

#[test]
fn test_initialize_collection_replaces() {
    let mut map: SetMap<&str, i32> = SetMap::new();
    map.add("x", 1);
    map.initialize_collection("x").insert(2);
    assert_eq!(map.try_get(&"x"), Some(&HashSet::from([2])));
}

#[test]
fn test_iteration_covers_every_entry() {
    let map: ListMap<u8, u8> = [(1, 1), (2, 2), (1, 3)].into_iter().collect();
    let total: usize = (&map).into_iter().map(|(_, values)| values.len()).sum();
    assert_eq!(total, 3);
    let backing: HashMap<u8, Vec<u8>> = map.into_inner();
    assert_eq!(backing[&1], vec![1, 3]);
}

#[test]
fn test_nested_remove_is_non_cascading() {
    let mut map: NestedHashMap<&str, &str, i32> = NestedHashMap::new();
    map.add("outer", "inner", 1).unwrap();
    assert!(map.remove_inner("outer", &"inner"));
    assert!(map.contains_key(&"outer"));
    assert_eq!(map.try_get(&"outer").map(|inner| inner.len()), Some(0));
}

#[test]
fn test_nested_strict_add() {
    let mut map: SortedNestedMap<u8, u8, &str> = SortedNestedMap::new();
    map.add(1, 2, "a").unwrap();
    assert_eq!(map.add(1, 2, "b"), Err(CollectionError::DuplicateKey));
    assert_eq!(map.get_value(&1, &2), Some(&"a"));

    if let Some(v) = map.get_value_mut(&1, &2) {
        *v = "c";
    }
    assert_eq!(map.get_value(&1, &2), Some(&"c"));
}

#[test]
fn test_nested_insert_inner_map_is_strict() {
    let mut map: NestedHashMap<u8, u8, u8> = NestedHashMap::new();
    assert!(map.insert_inner_map(1, HashMap::from([(1, 1)])).is_ok());
    assert_eq!(
        map.insert_inner_map(1, HashMap::new()),
        Err(CollectionError::DuplicateKey)
    );
    assert_eq!(map.set(1, HashMap::new()), Some(HashMap::from([(1, 1)])));
}

#[test]
fn test_nested_sorted_iteration() {
    let mut map: SortedNestedMap<u8, u8, u8> = SortedNestedMap::new();
    for (o, i) in [(2, 2), (1, 9), (2, 1), (1, 0)] {
        map.insert(o, i, o * 10 + i);
    }
    let flat: Vec<(u8, u8, u8)> = map
        .iter()
        .flat_map(|(o, inner)| inner.iter().map(move |(i, v)| (*o, *i, *v)))
        .collect();
    assert_eq!(flat, vec![(1, 0, 10), (1, 9, 19), (2, 1, 21), (2, 2, 22)]);
    assert_eq!(map.inner_len(), 4);
}

#[test]
fn test_nested_list_and_set_inner_adapters() {
    let mut lists: ListNestedMap<&str, &str, u8> = ListNestedMap::new();
    lists.get("a").add("b", 1);
    lists.get("a").add("b", 1);
    assert_eq!(lists.get_value(&"a", &"b"), Some(&vec![1, 1]));

    let mut sets: SetNestedMap<&str, &str, u8> = SetNestedMap::new();
    sets.get("a").add("b", 1);
    sets.get("a").add("b", 1);
    assert_eq!(sets.get("a").get("b").len(), 1);
}

#[test]
fn test_nested_with_custom_outer_map() {
    let outer: HashMap<u8, HashMap<u8, u8>> = HashMap::from([(1, HashMap::from([(2, 3)]))]);
    let mut map: NestedMap<u8, u8, u8> = NestedMap::with_map(outer);
    assert!(map.contains(&1, &2));
    assert_eq!(map.remove(&1), Some(HashMap::from([(2, 3)])));
    assert!(map.is_empty());
}
