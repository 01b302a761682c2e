//! # FormSchema Parser
//!
//! Parse a restricted subset of the Zod object-schema DSL into the
//! FormSchema field model.
//!
//! The recognized surface is `const <name> = z.object({ <field>:
//! z.<ctor>(<args>)<modifiers>, ... })` with the constructors `string`,
//! `number`, `boolean`, `enum`, `date` and `array`. The parser favors
//! graceful degradation over rejection: a missing header falls back to a
//! default form name, and malformed entries or modifier chains are skipped
//! once at least one field has been found.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod error;
pub mod lexer;
pub mod lower;
pub mod parser;

pub use error::{ParseError, Result};

use formschema_core::FormDefinition;
use tracing::debug;

/// Parse raw schema text into a [`FormDefinition`].
///
/// Fails only with [`ParseError::EmptySchema`] on blank input or
/// [`ParseError::NoFieldsFound`] when no field declaration matched; any
/// input yielding at least one field succeeds. The definition is returned
/// whole — callers replacing prior field state must do so only after this
/// returns `Ok`.
pub fn parse(raw: &str) -> Result<FormDefinition> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptySchema);
    }

    let tokens = lexer::tokenize(trimmed);
    let ast = parser::Parser::new(tokens).parse_schema();
    if ast.entries.is_empty() {
        return Err(ParseError::NoFieldsFound);
    }

    let form = lower::lower(ast);
    debug!(
        form_name = %form.form_name,
        fields = form.fields.len(),
        "parsed schema"
    );
    Ok(form)
}

#[cfg(test)]
mod tests;
