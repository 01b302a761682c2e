//! The owned field-list store.

use formschema_core::{Field, FieldType, FormDefinition, DEFAULT_FORM_NAME};
use indexmap::IndexMap;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

/// Partial update for one field. `None` leaves the property untouched.
#[derive(Debug, Clone, Default)]
pub struct FieldPatch {
    /// New identifier name.
    pub name: Option<String>,
    /// New field type.
    pub field_type: Option<FieldType>,
    /// New display label.
    pub label: Option<String>,
    /// New placeholder text.
    pub placeholder: Option<String>,
    /// New required flag.
    pub required: Option<bool>,
    /// New option list (enum fields).
    pub options: Option<Vec<String>>,
    /// New description.
    pub description: Option<String>,
}

/// Owned, ordered collection of fields plus the form name.
///
/// An explicit value the caller threads through its own state. Insertion
/// order is the emission order of the generator, so removal must not
/// disturb the positions of the remaining fields.
#[derive(Debug, Clone)]
pub struct FormStore {
    form_name: String,
    fields: IndexMap<Uuid, Field>,
}

impl FormStore {
    /// Create an empty store with the default form name.
    pub fn new() -> Self {
        Self {
            form_name: DEFAULT_FORM_NAME.to_string(),
            fields: IndexMap::new(),
        }
    }

    /// The current form name.
    pub fn form_name(&self) -> &str {
        &self.form_name
    }

    /// Set the form name. Empty input falls back to the default.
    pub fn set_form_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.form_name = if name.trim().is_empty() {
            DEFAULT_FORM_NAME.to_string()
        } else {
            name
        };
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    /// Number of fields in the store.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the store holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by id.
    pub fn get(&self, id: Uuid) -> Option<&Field> {
        self.fields.get(&id)
    }

    /// Append a field. Its id must be fresh; a duplicate replaces in place.
    pub fn add(&mut self, field: Field) {
        tracing::debug!(field = %field.name, "adding field");
        self.fields.insert(field.id, field);
    }

    /// Remove a field by id, preserving the order of the rest.
    pub fn remove(&mut self, id: Uuid) -> StoreResult<Field> {
        // shift_remove keeps insertion order; swap_remove would not.
        self.fields
            .shift_remove(&id)
            .ok_or(StoreError::UnknownField(id))
    }

    /// Apply a partial update to a field by id.
    pub fn update(&mut self, id: Uuid, patch: FieldPatch) -> StoreResult<()> {
        let field = self
            .fields
            .get_mut(&id)
            .ok_or(StoreError::UnknownField(id))?;

        if let Some(name) = patch.name {
            field.name = name;
        }
        if let Some(field_type) = patch.field_type {
            field.field_type = field_type;
        }
        if let Some(label) = patch.label {
            field.label = label;
        }
        if let Some(placeholder) = patch.placeholder {
            field.placeholder = placeholder;
        }
        if let Some(required) = patch.required {
            field.required = required;
        }
        if let Some(options) = patch.options {
            field.options = options;
        }
        if let Some(description) = patch.description {
            field.description = description;
        }
        Ok(())
    }

    /// Replace the whole store contents with a parsed definition.
    pub fn replace(&mut self, form: FormDefinition) {
        tracing::debug!(
            form_name = %form.form_name,
            fields = form.fields.len(),
            "replacing store contents"
        );
        self.form_name = form.form_name;
        self.fields = form.fields.into_iter().map(|f| (f.id, f)).collect();
    }

    /// Immutable snapshot for the generator.
    pub fn snapshot(&self) -> FormDefinition {
        FormDefinition::new(self.form_name.clone(), self.fields.values().cloned().collect())
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn field(name: &str, field_type: FieldType) -> Field {
        Field::new(name, field_type).unwrap()
    }

    #[test]
    fn test_new_store_uses_default_name() {
        let store = FormStore::new();
        assert_eq!(store.form_name(), DEFAULT_FORM_NAME);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_form_name_falls_back_on_empty() {
        let mut store = FormStore::new();
        store.set_form_name("loginSchema");
        assert_eq!(store.form_name(), "loginSchema");
        store.set_form_name("   ");
        assert_eq!(store.form_name(), DEFAULT_FORM_NAME);
    }

    #[test]
    fn test_add_and_remove_preserve_order() {
        let mut store = FormStore::new();
        let a = field("a", FieldType::Text);
        let b = field("b", FieldType::Email);
        let c = field("c", FieldType::Number);
        let b_id = b.id;
        store.add(a);
        store.add(b);
        store.add(c);

        let removed = store.remove(b_id).unwrap();
        assert_eq!(removed.name, "b");
        let names: Vec<_> = store.fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut store = FormStore::new();
        let id = Uuid::new_v4();
        assert_eq!(store.remove(id), Err(StoreError::UnknownField(id)));
    }

    #[test]
    fn test_update_applies_only_given_properties() {
        let mut store = FormStore::new();
        let f = field("age", FieldType::Text);
        let id = f.id;
        store.add(f);

        store
            .update(
                id,
                FieldPatch {
                    field_type: Some(FieldType::Number),
                    required: Some(false),
                    ..FieldPatch::default()
                },
            )
            .unwrap();

        let f = store.get(id).unwrap();
        assert_eq!(f.field_type, FieldType::Number);
        assert!(!f.required);
        // Untouched properties keep their derived values.
        assert_eq!(f.name, "age");
        assert_eq!(f.label, "Age");
        assert_eq!(f.placeholder, "Enter age");
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = FormStore::new();
        let id = Uuid::new_v4();
        assert_eq!(
            store.update(id, FieldPatch::default()),
            Err(StoreError::UnknownField(id))
        );
    }

    #[test]
    fn test_replace_and_snapshot_round_trip() {
        let mut store = FormStore::new();
        store.add(field("old", FieldType::Text));

        let form = FormDefinition::new(
            "contactFormSchema",
            vec![field("name", FieldType::Text), field("email", FieldType::Email)],
        );
        store.replace(form.clone());

        assert_eq!(store.form_name(), "contactFormSchema");
        assert_eq!(store.len(), 2);

        let snapshot = store.snapshot();
        assert_eq!(snapshot, form);
    }

    #[test]
    fn test_ids_survive_mutation() {
        let mut store = FormStore::new();
        let f = field("name", FieldType::Text);
        let id = f.id;
        store.add(f);
        store
            .update(id, FieldPatch { label: Some("Full Name".into()), ..FieldPatch::default() })
            .unwrap();
        assert_eq!(store.get(id).unwrap().id, id);
    }
}
