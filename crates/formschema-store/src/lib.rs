//! Owned, ordered storage for a form definition under construction.
//!
//! The parser and generator are pure; this crate is the mutable
//! collaborator between them. A [`FormStore`] is a plain owned value the
//! caller threads through its own state, with wholesale [`FormStore::replace`]
//! after a successful parse and [`FormStore::snapshot`] feeding the
//! generator.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{FieldPatch, FormStore};
