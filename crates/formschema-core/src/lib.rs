//! # FormSchema Core
//!
//! Core data structures for the FormSchema pipeline.
//!
//! This crate provides the field model shared by the parser and the code
//! generator: [`Field`], [`FieldType`] and [`FormDefinition`], together with
//! the derivation helpers for display labels and placeholders.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod field;
pub mod form;

pub use error::{Error, Result};
pub use field::{derive_label, derive_placeholder, is_valid_identifier, Field, FieldType};
pub use form::{FormDefinition, DEFAULT_FORM_NAME};
