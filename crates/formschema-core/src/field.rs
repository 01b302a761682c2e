//! Field descriptors for the form model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// The closed set of field kinds understood by the pipeline.
///
/// Wire names match the schema DSL (`string`, `enum`, ...), so a serialized
/// field model reads the same way the schema text does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text input
    #[serde(rename = "string")]
    Text,
    /// Email address input
    Email,
    /// Password input
    Password,
    /// Numeric input
    Number,
    /// Checkbox
    Boolean,
    /// Date picker
    Date,
    /// Fixed set of options (radio group or select, depending on count)
    Enum,
    /// File upload
    File,
    /// Multi-line text input
    Textarea,
    /// `z.array(...)` declarations are carried through opaquely; the
    /// generator degrades them to a plain text control.
    Array,
}

impl FieldType {
    /// Whether this field kind renders as a plain `<Input>` element.
    pub fn uses_text_input(&self) -> bool {
        matches!(
            self,
            FieldType::Text
                | FieldType::Email
                | FieldType::Password
                | FieldType::Number
                | FieldType::File
        )
    }

    /// The HTML `type` attribute for input-backed field kinds.
    pub fn html_input_type(&self) -> &'static str {
        match self {
            FieldType::Number => "number",
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::File => "file",
            _ => "text",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldType::Text => "string",
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Enum => "enum",
            FieldType::File => "file",
            FieldType::Textarea => "textarea",
            FieldType::Array => "array",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" | "text" => Ok(FieldType::Text),
            "email" => Ok(FieldType::Email),
            "password" => Ok(FieldType::Password),
            "number" => Ok(FieldType::Number),
            "boolean" => Ok(FieldType::Boolean),
            "date" => Ok(FieldType::Date),
            "enum" => Ok(FieldType::Enum),
            "file" => Ok(FieldType::File),
            "textarea" | "multiline" => Ok(FieldType::Textarea),
            "array" => Ok(FieldType::Array),
            _ => Err(format!("Unknown field type: {}", s)),
        }
    }
}

/// One schema property: its name, kind, display metadata and
/// validation-relevant flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Opaque unique identifier, assigned at creation, never reused
    pub id: Uuid,

    /// Schema key and form control name
    pub name: String,

    /// Field kind
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Human-readable display label
    pub label: String,

    /// Placeholder text, may be empty
    pub placeholder: String,

    /// Whether the field is required (no `.optional()` modifier)
    pub required: bool,

    /// Option list; only meaningful for enum fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Help text; empty string means no description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Field {
    /// Create a field with a fresh id and derived label/placeholder.
    ///
    /// Fails when `name` is not a valid identifier.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Result<Self> {
        let name = name.into();
        if !is_valid_identifier(&name) {
            return Err(Error::InvalidIdentifier(name));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            label: derive_label(&name),
            placeholder: derive_placeholder(&name),
            name,
            field_type,
            required: true,
            options: Vec::new(),
            description: String::new(),
        })
    }

    /// Replace the option list, returning the field for chaining.
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    /// Set the required flag, returning the field for chaining.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the description, returning the field for chaining.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Check that a string is a usable variable/property name: non-empty,
/// starts with a letter or underscore, no whitespace or punctuation.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Derive a display label from a field name: the first character is
/// upper-cased and a space is inserted before each embedded upper-case
/// letter (`firstName` becomes `First Name`).
pub fn derive_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        label.extend(first.to_uppercase());
    }
    for c in chars {
        if c.is_uppercase() {
            label.push(' ');
        }
        label.push(c);
    }
    label
}

/// Derive a placeholder from a field name (`Enter {name}`).
pub fn derive_placeholder(name: &str) -> String {
    format!("Enter {}", name)
}
