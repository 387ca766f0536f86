//! Error types for queue and adapter operations
//!
//! Every fallible operation in this crate returns [`CollectionError`]. Errors are
//! detected before any mutation, so a failed call leaves the queue or map exactly
//! as it was.

use thiserror::Error;

/// Coarse classification of a [`CollectionError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The operation is not valid in the current state (empty queue, no key selector)
    InvalidOperation,
    /// A strict insert found the key already present
    KeyConflict,
}

/// Error type for queue and adapter operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// `peek` or `dequeue` was called on an empty queue
    #[error("the queue is empty")]
    EmptyQueue,

    /// A value-only enqueue was attempted on a queue built without a key selector
    #[error("key selector is not set")]
    MissingKeySelector,

    /// A strict insert found an element with the same key
    #[error("an element with the same key already exists")]
    DuplicateKey,
}

impl CollectionError {
    /// Returns the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CollectionError::EmptyQueue | CollectionError::MissingKeySelector => {
                ErrorKind::InvalidOperation
            }
            CollectionError::DuplicateKey => ErrorKind::KeyConflict,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CollectionError>;
