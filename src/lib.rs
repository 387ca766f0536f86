//! Keyed Collections for Rust
//!
//! This crate provides a binary min-heap priority queue and a family of
//! keyed collection adapters layered over pluggable backing maps.
//!
//! # Features
//!
//! - **Priority Queue**: O(log n) enqueue and dequeue, O(1) peek; keys given explicitly
//!   or derived from values by a selector fixed at construction
//! - **Collection Map**: a map from keys to per-key collections (lists, sets, sorted sets,
//!   comparer-ordered sets) that creates the collection on first access
//! - **Nested Map**: a two-level map with lazily created inner maps and strict insertion
//! - **Extensions**: map merging and loose, diagnostic equivalence checks
//!
//! Backing maps are anything implementing [`MapStorage`]: `HashMap` (including
//! `FxHashMap`), `BTreeMap`, and `IndexMap` with the `indexmap` feature.
//!
//! # Example
//!
//! ```rust
//! use rust_keyed_collections::collection_map::ListMap;
//! use rust_keyed_collections::priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.enqueue(2, "second");
//! queue.enqueue(1, "first");
//! assert_eq!(queue.dequeue(), Ok("first"));
//!
//! let mut by_owner: ListMap<&str, u32> = ListMap::new();
//! by_owner.get("alice").push(7);
//! by_owner.add("alice", 9);
//! assert_eq!(by_owner.try_get(&"alice"), Some(&vec![7, 9]));
//! ```

pub mod bucket;
pub mod collection_map;
pub mod error;
pub mod extensions;
pub mod nested_map;
pub mod priority_queue;
pub mod stdlib_compat;
pub mod storage;
pub mod traits;

// Re-export the main traits and types for convenience
pub use collection_map::CollectionMap;
pub use error::{CollectionError, ErrorKind, Result};
pub use nested_map::NestedMap;
pub use priority_queue::PriorityQueue;
pub use traits::{Bucket, CollectionFactory, Heap, KeySelector, MapStorage};
