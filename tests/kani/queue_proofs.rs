//! Proofs for the binary min-heap priority queue
//!
//! Symbolic keys are drawn with `kani::any()`, so each harness covers every
//! key ordering for its bounded operation count.

#[cfg(kani)]
use rust_keyed_collections::priority_queue::PriorityQueue;
#[cfg(kani)]
use rust_keyed_collections::CollectionError;

/// Peek and dequeue on an empty queue fail without changing it
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(3)]
fn verify_empty_queue_errors() {
    let mut queue: PriorityQueue<u8, u8> = PriorityQueue::new();
    assert!(queue.peek() == Err(CollectionError::EmptyQueue));
    assert!(queue.dequeue() == Err(CollectionError::EmptyQueue));
    assert!(queue.is_empty());

    let key: u8 = kani::any();
    let value: u8 = kani::any();
    queue.enqueue(key, value);
    assert!(queue.dequeue() == Ok(value));
    assert!(queue.peek() == Err(CollectionError::EmptyQueue));
    assert!(queue.dequeue() == Err(CollectionError::EmptyQueue));
}

/// Any four enqueues leave the array heap-ordered with the minimum at the root
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_heap_order_after_enqueues() {
    let mut queue: PriorityQueue<u8, ()> = PriorityQueue::with_capacity(4);
    let keys: [u8; 4] = kani::any();
    for key in keys {
        queue.enqueue(key, ());
    }

    assert!(queue.len() == 4);
    assert!(queue.is_heap_ordered());
    let min = keys.iter().copied().min();
    assert!(queue.peek_entry().map(|(k, _)| *k) == min);
}

/// Dequeue returns keys in non-decreasing order and peek agrees with it
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_sorted_extraction() {
    let mut queue: PriorityQueue<u8, u8> = PriorityQueue::with_capacity(4);
    let keys: [u8; 4] = kani::any();
    for key in keys {
        queue.enqueue(key, key);
    }

    let mut last = 0u8;
    for remaining in (0..4usize).rev() {
        let peeked = queue.peek().copied();
        let popped = queue.dequeue();
        assert!(peeked == popped);
        let key = match popped {
            Ok(key) => key,
            Err(_) => unreachable!(),
        };
        assert!(key >= last);
        last = key;
        assert!(queue.len() == remaining);
        assert!(queue.is_heap_ordered());
    }
}

/// The selector-less queue rejects value-only enqueue before mutating
#[cfg(kani)]
#[kani::proof]
fn verify_missing_selector_leaves_queue_unchanged() {
    let mut queue: PriorityQueue<u8, u8> = PriorityQueue::new();
    let key: u8 = kani::any();
    queue.enqueue(key, 0);
    assert!(queue.enqueue_value(kani::any()) == Err(CollectionError::MissingKeySelector));
    assert!(queue.len() == 1);
}
