//! Error types for schema parsing.

use thiserror::Error;

/// Result type alias for schema parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Terminal parse failures surfaced verbatim to the caller.
///
/// Anything short of these degrades silently: a malformed field entry or an
/// unrecognized modifier chain is skipped, not reported, once at least one
/// field has been found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Raw input is empty or whitespace-only after trimming
    #[error("Schema is empty")]
    EmptySchema,

    /// Input is non-empty but no field declarations matched
    #[error("No fields found in schema")]
    NoFieldsFound,
}
