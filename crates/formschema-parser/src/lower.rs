//! Lowering from the syntax tree to the field model.

use formschema_core::{Field, FieldType, FormDefinition};

use crate::ast::{FieldEntry, SchemaAst};
use crate::lexer::Token;

/// Map a parsed schema onto a [`FormDefinition`].
///
/// Infallible by construction: the grammar only admits identifier field
/// names, and unrecognized modifiers are ignored rather than rejected.
pub fn lower(ast: SchemaAst) -> FormDefinition {
    let fields = ast.entries.into_iter().filter_map(lower_entry).collect();
    FormDefinition::new(ast.form_name.unwrap_or_default(), fields)
}

fn lower_entry(entry: FieldEntry) -> Option<Field> {
    let field_type = entry.ctor.field_type();
    let mut field = Field::new(entry.name, field_type).ok()?;

    field.required = !entry.modifiers.iter().any(|m| m.name == "optional");

    if let Some(describe) = entry.modifiers.iter().find(|m| m.name == "describe") {
        if let Some(Token::Str(text)) =
            describe.args.iter().find(|t| matches!(t, Token::Str(_)))
        {
            field.description = text.clone();
        }
    }

    if field_type == FieldType::Enum {
        field.options = extract_options(&entry.args);
    }

    Some(field)
}

/// Pull the option list out of an enum constructor's argument tokens: the
/// string literals inside the first bracketed group, trimmed, with empty
/// entries dropped. No bracket means no options.
fn extract_options(args: &[Token]) -> Vec<String> {
    let start = match args.iter().position(|t| *t == Token::LBracket) {
        Some(i) => i + 1,
        None => return Vec::new(),
    };

    let mut options = Vec::new();
    for token in &args[start..] {
        match token {
            Token::RBracket => break,
            Token::Str(value) => {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    options.push(trimmed.to_string());
                }
            }
            _ => {}
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_options_trims_and_drops_empty() {
        let args = vec![
            Token::LBracket,
            Token::Str(" admin ".into()),
            Token::Comma,
            Token::Str("".into()),
            Token::Comma,
            Token::Str("user".into()),
            Token::RBracket,
        ];
        assert_eq!(extract_options(&args), vec!["admin", "user"]);
    }

    #[test]
    fn test_extract_options_without_bracket() {
        let args = vec![Token::Str("loose".into())];
        assert!(extract_options(&args).is_empty());
    }
}
