//! Tokenizer for the schema DSL subset.

use std::iter::Peekable;
use std::str::Chars;

/// A lexical token of the schema text.
///
/// The lexer is total: characters that belong to no other class become
/// [`Token::Other`] so the parser can carry them through error recovery
/// instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Identifier or keyword (`const`, `z`, `string`, field names, ...)
    Ident(String),
    /// String literal with the surrounding quotes stripped
    Str(String),
    /// Numeric literal, kept as raw text
    Number(String),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `=`
    Eq,
    /// `;`
    Semi,
    /// Any other character, preserved for recovery
    Other(char),
}

/// Tokenize schema text. Whitespace and `//` line comments are dropped.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '/' => {
                chars.next();
                if chars.peek() == Some(&'/') {
                    skip_line(&mut chars);
                } else {
                    tokens.push(Token::Other('/'));
                }
            }
            '"' | '\'' | '`' => {
                chars.next();
                tokens.push(Token::Str(read_string(&mut chars, c)));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                tokens.push(Token::Ident(read_ident(&mut chars)));
            }
            c if c.is_ascii_digit() => {
                tokens.push(Token::Number(read_number(&mut chars)));
            }
            '(' => push_single(&mut chars, &mut tokens, Token::LParen),
            ')' => push_single(&mut chars, &mut tokens, Token::RParen),
            '{' => push_single(&mut chars, &mut tokens, Token::LBrace),
            '}' => push_single(&mut chars, &mut tokens, Token::RBrace),
            '[' => push_single(&mut chars, &mut tokens, Token::LBracket),
            ']' => push_single(&mut chars, &mut tokens, Token::RBracket),
            ':' => push_single(&mut chars, &mut tokens, Token::Colon),
            ',' => push_single(&mut chars, &mut tokens, Token::Comma),
            '.' => push_single(&mut chars, &mut tokens, Token::Dot),
            '=' => push_single(&mut chars, &mut tokens, Token::Eq),
            ';' => push_single(&mut chars, &mut tokens, Token::Semi),
            other => {
                chars.next();
                tokens.push(Token::Other(other));
            }
        }
    }

    tokens
}

fn push_single(chars: &mut Peekable<Chars<'_>>, tokens: &mut Vec<Token>, token: Token) {
    chars.next();
    tokens.push(token);
}

fn skip_line(chars: &mut Peekable<Chars<'_>>) {
    for c in chars.by_ref() {
        if c == '\n' {
            break;
        }
    }
}

fn read_ident(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_alphanumeric() || c == '_' {
            ident.push(c);
            chars.next();
        } else {
            break;
        }
    }
    ident
}

fn read_number(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut number = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() || c == '.' {
            number.push(c);
            chars.next();
        } else {
            break;
        }
    }
    number
}

/// Read until the matching quote. A backslash escapes the next character;
/// an unterminated literal runs to end of input rather than failing.
fn read_string(chars: &mut Peekable<Chars<'_>>, quote: char) -> String {
    let mut value = String::new();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                value.push(escaped);
            }
        } else if c == quote {
            break;
        } else {
            value.push(c);
        }
    }
    value
}
