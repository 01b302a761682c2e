//! Deterministic React/TypeScript code generation from form definitions.
//!
//! Two generation modes share one field model: a validated component wired
//! through `react-hook-form` with a zod resolver, and a static preview that
//! renders the same fields without validation. Output depends only on the
//! definition and config, never on ambient state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod component;
pub mod config;
pub mod error;
pub mod generator;
pub mod imports;
pub mod preview;
pub mod template;

pub use component::{FormComponentGenerator, EMPTY_COMPONENT_PLACEHOLDER};
pub use config::{CodegenConfig, EnumDefaultStyle, GenerationMode};
pub use error::{CodegenError, CodegenResult};
pub use generator::{generate, ComponentGenerator};
pub use preview::{PreviewGenerator, EMPTY_PREVIEW_PLACEHOLDER};

/// Enum fields with at most this many options render as a radio group;
/// above it they render as a select dropdown.
pub const RADIO_OPTION_LIMIT: usize = 3;
