//! Error types for FormSchema core operations.

use thiserror::Error;

/// Result type alias for FormSchema core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in FormSchema core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A field or form name is not a valid identifier
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),
}
