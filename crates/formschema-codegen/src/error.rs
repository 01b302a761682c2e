//! Error types for code generation.

use thiserror::Error;

/// Result type for code generation operations.
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Errors that can occur while setting up or running a generator.
///
/// Generation over a well-formed [`FormDefinition`] never fails — an empty
/// field list produces a placeholder comment, not an error. The variants
/// here only cover template-engine faults.
///
/// [`FormDefinition`]: formschema_core::FormDefinition
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Template compilation error
    #[error("Template compilation error: {0}")]
    TemplateCompile(#[from] handlebars::TemplateError),

    /// Template rendering error
    #[error("Template rendering error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CodegenError {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
