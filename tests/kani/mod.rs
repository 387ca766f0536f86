//! Kani proof harnesses
//!
//! - `queue_proofs.rs`: heap-order and empty-queue proofs for `PriorityQueue`
//! - `adapter_proofs.rs`: lazy-create and non-cascading removal proofs

#[cfg(kani)]
#[path = "adapter_proofs.rs"]
mod adapter_proofs;
#[cfg(kani)]
#[path = "queue_proofs.rs"]
mod queue_proofs;
