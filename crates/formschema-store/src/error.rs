//! Error types for the form store.

use thiserror::Error;
use uuid::Uuid;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from field-list mutations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// No field with the given id exists in the store.
    #[error("No field with id {0}")]
    UnknownField(Uuid),
}
