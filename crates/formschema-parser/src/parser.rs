//! Recursive-descent parser over the token stream.
//!
//! The grammar is deliberately small:
//!
//! ```text
//! schema   := header? entry*
//! header   := "const" ident "=" "z" "." "object" "(" "{"
//! entry    := ident ":" "z" "." ctor "(" args? ")" modifier*
//! modifier := "." ident ( "(" args? ")" )?
//! ```
//!
//! Parsing is total: a missing header falls back to the default form name,
//! and a malformed entry is skipped by recovering to the next top-level
//! comma. Terminal failures (empty input, zero entries) are raised by the
//! crate-level [`parse`](crate::parse) wrapper, not here.

use crate::ast::{FieldEntry, Modifier, SchemaAst, TypeCtor};
use crate::lexer::Token;

/// Marker for an entry the parser gave up on; recovery resumes at the next
/// top-level comma.
struct EntryError;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the whole token stream into a syntax tree.
    pub fn parse_schema(mut self) -> SchemaAst {
        let form_name = self.find_header();

        let mut entries = Vec::new();
        while self.pos < self.tokens.len() {
            if self.at_entry_start() {
                let start = self.pos;
                match self.parse_entry() {
                    Ok(entry) => entries.push(entry),
                    Err(EntryError) => {
                        self.pos = start + 1;
                        self.recover_to_comma();
                    }
                }
            } else {
                self.pos += 1;
            }
        }

        SchemaAst { form_name, entries }
    }

    /// Scan for `const <ident> = z.object({` anywhere in the stream. On a
    /// match, position the cursor just past the opening brace and return
    /// the captured identifier.
    fn find_header(&mut self) -> Option<String> {
        for i in 0..self.tokens.len() {
            if let [Token::Ident(kw), Token::Ident(name), Token::Eq, Token::Ident(z), Token::Dot, Token::Ident(obj), Token::LParen, Token::LBrace] =
                self.tokens.get(i..i + 8)?
            {
                if kw == "const" && z == "z" && obj == "object" {
                    self.pos = i + 8;
                    return Some(name.clone());
                }
            }
        }
        None
    }

    /// Whether the cursor sits on `ident : z .`, the start of an entry.
    fn at_entry_start(&self) -> bool {
        matches!(
            self.tokens.get(self.pos..self.pos + 4),
            Some([Token::Ident(_), Token::Colon, Token::Ident(z), Token::Dot]) if z == "z"
        )
    }

    fn parse_entry(&mut self) -> Result<FieldEntry, EntryError> {
        let name = self.expect_ident()?;
        self.expect(&Token::Colon)?;
        let z = self.expect_ident()?;
        if z != "z" {
            return Err(EntryError);
        }
        self.expect(&Token::Dot)?;
        let ctor_name = self.expect_ident()?;
        let ctor = TypeCtor::from_name(&ctor_name).ok_or(EntryError)?;
        self.expect(&Token::LParen)?;
        let args = self.collect_balanced();
        let modifiers = self.parse_modifiers();

        Ok(FieldEntry {
            name,
            ctor,
            args,
            modifiers,
        })
    }

    fn parse_modifiers(&mut self) -> Vec<Modifier> {
        let mut modifiers = Vec::new();
        while let Some([Token::Dot, Token::Ident(name)]) = self.tokens.get(self.pos..self.pos + 2)
        {
            let name = name.clone();
            self.pos += 2;
            let args = if self.peek() == Some(&Token::LParen) {
                self.pos += 1;
                self.collect_balanced()
            } else {
                Vec::new()
            };
            modifiers.push(Modifier { name, args });
        }
        modifiers
    }

    /// Collect tokens up to the parenthesis matching an already-consumed
    /// `(`. The closing token is consumed but not collected. An unclosed
    /// group runs to end of input; leniency over rejection.
    fn collect_balanced(&mut self) -> Vec<Token> {
        let mut collected = Vec::new();
        let mut depth = 1usize;
        while let Some(token) = self.tokens.get(self.pos) {
            match token {
                Token::LParen | Token::LBracket | Token::LBrace => depth += 1,
                Token::RParen | Token::RBracket | Token::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        self.pos += 1;
                        break;
                    }
                }
                _ => {}
            }
            collected.push(token.clone());
            self.pos += 1;
        }
        collected
    }

    /// Skip past a malformed entry: advance to just after the next comma at
    /// the current nesting level, or stop at the token closing the
    /// enclosing object.
    fn recover_to_comma(&mut self) {
        let mut depth = 0usize;
        while let Some(token) = self.tokens.get(self.pos) {
            match token {
                Token::LParen | Token::LBracket | Token::LBrace => depth += 1,
                Token::RParen | Token::RBracket | Token::RBrace => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                }
                Token::Comma if depth == 0 => {
                    self.pos += 1;
                    return;
                }
                _ => {}
            }
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn expect(&mut self, expected: &Token) -> Result<(), EntryError> {
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(EntryError)
        }
    }

    fn expect_ident(&mut self) -> Result<String, EntryError> {
        match self.peek() {
            Some(Token::Ident(name)) => {
                let name = name.clone();
                self.pos += 1;
                Ok(name)
            }
            _ => Err(EntryError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse(input: &str) -> SchemaAst {
        Parser::new(tokenize(input)).parse_schema()
    }

    #[test]
    fn test_header_capture() {
        let ast = parse("const loginSchema = z.object({ user: z.string() })");
        assert_eq!(ast.form_name.as_deref(), Some("loginSchema"));
        assert_eq!(ast.entries.len(), 1);
        assert_eq!(ast.entries[0].name, "user");
        assert_eq!(ast.entries[0].ctor, TypeCtor::String);
    }

    #[test]
    fn test_headerless_entries() {
        let ast = parse("age: z.number().min(18)");
        assert_eq!(ast.form_name, None);
        assert_eq!(ast.entries.len(), 1);
        assert_eq!(ast.entries[0].modifiers.len(), 1);
        assert_eq!(ast.entries[0].modifiers[0].name, "min");
    }

    #[test]
    fn test_unknown_ctor_recovers() {
        let ast = parse(
            "const s = z.object({ file: z.instanceof(File), name: z.string() })",
        );
        assert_eq!(ast.entries.len(), 1);
        assert_eq!(ast.entries[0].name, "name");
    }

    #[test]
    fn test_nested_args_are_swallowed() {
        // The inner z.instanceof must not be picked up as a second entry.
        let ast = parse("attachments: z.array(z.instanceof(File)).optional()");
        assert_eq!(ast.entries.len(), 1);
        assert_eq!(ast.entries[0].ctor, TypeCtor::Array);
        assert_eq!(ast.entries[0].modifiers[0].name, "optional");
    }

    #[test]
    fn test_modifier_chain_order() {
        let ast = parse(r#"bio: z.string().optional().describe("About you")"#);
        let names: Vec<_> = ast.entries[0]
            .modifiers
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["optional", "describe"]);
    }

    #[test]
    fn test_leading_junk_tolerated() {
        let ast = parse("import { z } from \"zod\"\n\nconst s = z.object({ a: z.date() })");
        assert_eq!(ast.form_name.as_deref(), Some("s"));
        assert_eq!(ast.entries.len(), 1);
    }
}
