//! Syntax tree produced by the schema parser.
//!
//! The tree stays close to the DSL surface: one [`FieldEntry`] per
//! `name: z.ctor(args).modifier()...` declaration. Lowering to the field
//! model happens in a separate pass.

use formschema_core::FieldType;

use crate::lexer::Token;

/// Parsed schema: optional declared form name plus field entries in
/// declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaAst {
    /// Identifier from a `const <name> = z.object(` header, when present
    pub form_name: Option<String>,
    /// Field declarations in source order
    pub entries: Vec<FieldEntry>,
}

/// One `name: z.<ctor>(<args>)<modifiers>` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEntry {
    /// Property name
    pub name: String,
    /// Type constructor
    pub ctor: TypeCtor,
    /// Raw tokens between the constructor's parentheses
    pub args: Vec<Token>,
    /// Trailing method-style qualifiers
    pub modifiers: Vec<Modifier>,
}

/// The type constructors the grammar recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCtor {
    /// `z.string(...)`
    String,
    /// `z.number(...)`
    Number,
    /// `z.boolean(...)`
    Boolean,
    /// `z.enum(...)`
    Enum,
    /// `z.date(...)`
    Date,
    /// `z.array(...)`
    Array,
}

impl TypeCtor {
    /// Look up a constructor by its DSL name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(TypeCtor::String),
            "number" => Some(TypeCtor::Number),
            "boolean" => Some(TypeCtor::Boolean),
            "enum" => Some(TypeCtor::Enum),
            "date" => Some(TypeCtor::Date),
            "array" => Some(TypeCtor::Array),
            _ => None,
        }
    }

    /// The field kind this constructor lowers to.
    pub fn field_type(&self) -> FieldType {
        match self {
            TypeCtor::String => FieldType::Text,
            TypeCtor::Number => FieldType::Number,
            TypeCtor::Boolean => FieldType::Boolean,
            TypeCtor::Enum => FieldType::Enum,
            TypeCtor::Date => FieldType::Date,
            TypeCtor::Array => FieldType::Array,
        }
    }
}

/// A trailing `.name(args)` qualifier on a field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    /// Modifier name (`optional`, `describe`, `min`, ...)
    pub name: String,
    /// Raw tokens between the modifier's parentheses, empty when the
    /// modifier had no argument list
    pub args: Vec<Token>,
}
