//! Tests for the schema parser.

use crate::{parse, ParseError};
use formschema_core::FieldType;
use proptest::prelude::*;

const CONTACT_FORM: &str = r#"
const contactFormSchema = z.object({
  name: z.string().min(2, "Name must be at least 2 characters"),
  email: z.string().email("Please enter a valid email address"),
  message: z.string().min(10, "Message must be at least 10 characters"),
  subscribe: z.boolean().default(false),
})
"#;

#[test]
fn test_empty_input() {
    assert_eq!(parse("").unwrap_err(), ParseError::EmptySchema);
    assert_eq!(parse("   \n\t  ").unwrap_err(), ParseError::EmptySchema);
}

#[test]
fn test_no_fields_found() {
    assert_eq!(
        parse("const x = z.object({})").unwrap_err(),
        ParseError::NoFieldsFound
    );
    assert_eq!(
        parse("just some prose, no schema").unwrap_err(),
        ParseError::NoFieldsFound
    );
}

#[test]
fn test_contact_form_schema() {
    let form = parse(CONTACT_FORM).unwrap();
    assert_eq!(form.form_name, "contactFormSchema");
    assert_eq!(form.fields.len(), 4);

    let subscribe = form.fields.iter().find(|f| f.name == "subscribe").unwrap();
    assert_eq!(subscribe.field_type, FieldType::Boolean);
    assert!(subscribe.required);

    for field in &form.fields {
        assert!(field.required, "{} should be required", field.name);
    }
}

#[test]
fn test_field_order_preserved() {
    let form = parse(CONTACT_FORM).unwrap();
    let names: Vec<_> = form.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["name", "email", "message", "subscribe"]);
}

#[test]
fn test_missing_header_falls_back() {
    let form = parse("username: z.string().min(3)").unwrap();
    assert_eq!(form.form_name, "formSchema");
    assert_eq!(form.fields.len(), 1);
}

#[test]
fn test_optional_modifier() {
    let form = parse("bio: z.string().optional()").unwrap();
    assert!(!form.fields[0].required);
}

#[test]
fn test_describe_modifier() {
    let form = parse(r#"age: z.number().describe("Your age in years")"#).unwrap();
    assert_eq!(form.fields[0].description, "Your age in years");
}

#[test]
fn test_unknown_modifiers_ignored() {
    let form = parse(
        r#"password: z.string().min(8, "too short").regex(/[A-Z]/, "need upper").trim()"#,
    )
    .unwrap();
    assert_eq!(form.fields.len(), 1);
    assert!(form.fields[0].required);
    assert!(form.fields[0].description.is_empty());
}

#[test]
fn test_enum_options() {
    let form = parse(r#"role: z.enum(["admin", "user", "editor"])"#).unwrap();
    let role = &form.fields[0];
    assert_eq!(role.field_type, FieldType::Enum);
    assert_eq!(role.options, vec!["admin", "user", "editor"]);
}

#[test]
fn test_enum_without_bracket_has_no_options() {
    let form = parse("role: z.enum(roles)").unwrap();
    assert_eq!(form.fields[0].field_type, FieldType::Enum);
    assert!(form.fields[0].options.is_empty());
}

#[test]
fn test_array_passes_through() {
    let form = parse("attachments: z.array(z.instanceof(File)).optional()").unwrap();
    assert_eq!(form.fields[0].field_type, FieldType::Array);
    assert!(!form.fields[0].required);
}

#[test]
fn test_malformed_entry_skipped() {
    let form = parse(
        "const s = z.object({\n  broken: z.widget(),\n  ok: z.string(),\n})",
    )
    .unwrap();
    assert_eq!(form.fields.len(), 1);
    assert_eq!(form.fields[0].name, "ok");
}

#[test]
fn test_derived_display_metadata() {
    let form = parse("dateOfBirth: z.date()").unwrap();
    let field = &form.fields[0];
    assert_eq!(field.label, "Date Of Birth");
    assert_eq!(field.placeholder, "Enter dateOfBirth");
}

#[test]
fn test_ids_are_unique() {
    let form = parse(CONTACT_FORM).unwrap();
    for (i, a) in form.fields.iter().enumerate() {
        for b in &form.fields[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn test_full_snippet_with_imports() {
    let form = parse(
        r#"import { z } from "zod"

const userRegistrationSchema = z.object({
  username: z.string().min(3, "Username must be at least 3 characters"),
  country: z.enum(["USA", "Canada", "UK", "Australia", "Other"]),
  agreeToTerms: z.boolean().default(true),
})"#,
    )
    .unwrap();
    assert_eq!(form.form_name, "userRegistrationSchema");
    assert_eq!(form.fields.len(), 3);
    assert_eq!(form.fields[1].options.len(), 5);
}

const CTOR_NAMES: [&str; 6] = ["string", "number", "boolean", "enum", "date", "array"];

proptest! {
    #[test]
    fn parse_keeps_every_generated_entry(
        entries in prop::collection::vec(
            ("[a-z][a-zA-Z0-9_]{0,8}", 0usize..6, any::<bool>()),
            1..6,
        )
    ) {
        let mut schema = String::from("const generatedSchema = z.object({\n");
        for (name, ctor_idx, optional) in &entries {
            let ctor = CTOR_NAMES[*ctor_idx];
            let args = if ctor == "enum" { r#"["alpha", "beta"]"# } else { "" };
            let tail = if *optional { ".optional()" } else { "" };
            schema.push_str(&format!("  {}: z.{}({}){},\n", name, ctor, args, tail));
        }
        schema.push_str("})\n");

        let form = parse(&schema).unwrap();
        prop_assert_eq!(form.form_name.as_str(), "generatedSchema");
        prop_assert_eq!(form.fields.len(), entries.len());
        for (field, (name, _, optional)) in form.fields.iter().zip(&entries) {
            prop_assert_eq!(&field.name, name);
            prop_assert_eq!(field.required, !optional);
        }
    }
}
