//! FormDefinition aggregate passed between parser and generator.

use serde::{Deserialize, Serialize};

use crate::Field;

/// Fallback form identifier used when the schema text does not declare one.
pub const DEFAULT_FORM_NAME: &str = "formSchema";

/// The named, ordered collection of field descriptors produced by parsing.
///
/// Field order is significant: it fixes both which component imports the
/// generator includes and the order of rendered controls. A definition is
/// produced whole by the parser and is read-only input to the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDefinition {
    /// Schema constant name, also the basis for generated component names
    pub form_name: String,

    /// Ordered field list
    pub fields: Vec<Field>,
}

impl FormDefinition {
    /// Create a definition, falling back to [`DEFAULT_FORM_NAME`] when the
    /// provided name is empty.
    pub fn new(form_name: impl Into<String>, fields: Vec<Field>) -> Self {
        let form_name = form_name.into();
        let form_name = if form_name.is_empty() {
            DEFAULT_FORM_NAME.to_string()
        } else {
            form_name
        };
        Self { form_name, fields }
    }

    /// Whether the definition has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FormDefinition {
    fn default() -> Self {
        Self {
            form_name: DEFAULT_FORM_NAME.to_string(),
            fields: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldType;

    #[test]
    fn test_empty_name_falls_back() {
        let form = FormDefinition::new("", Vec::new());
        assert_eq!(form.form_name, DEFAULT_FORM_NAME);
        assert!(form.is_empty());
    }

    #[test]
    fn test_serde_camel_case() {
        let form = FormDefinition::new(
            "loginSchema",
            vec![Field::new("email", FieldType::Email).unwrap()],
        );
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["formName"], "loginSchema");
        assert_eq!(json["fields"][0]["name"], "email");
    }
}
