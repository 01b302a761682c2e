//! Static preview component generation.
//!
//! Emits a display-only Card with plain labeled controls. No resolver, no
//! zod schema, no change handlers: `required` and `placeholder` become
//! static attributes.

use formschema_core::{Field, FieldType, FormDefinition};
use serde_json::json;

use crate::generator::ComponentGenerator;
use crate::imports::ImportSet;
use crate::template::{BuiltinTemplates, TemplateEngine};
use crate::{CodegenConfig, CodegenResult, RADIO_OPTION_LIMIT};

/// Fixed output for a definition with no fields.
pub const EMPTY_PREVIEW_PLACEHOLDER: &str = "// Add fields to generate form preview";

/// Generator for the static preview component.
pub struct PreviewGenerator {
    engine: TemplateEngine,
}

impl PreviewGenerator {
    /// Create the generator with its shell template registered.
    pub fn new() -> CodegenResult<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template("preview_shell", BuiltinTemplates::preview_shell())?;
        Ok(Self { engine })
    }
}

impl ComponentGenerator for PreviewGenerator {
    fn name(&self) -> &str {
        "static-preview"
    }

    fn generate(&self, form: &FormDefinition, _config: &CodegenConfig) -> CodegenResult<String> {
        if form.fields.is_empty() {
            return Ok(EMPTY_PREVIEW_PLACEHOLDER.to_string());
        }

        let imports = ImportSet::scan(&form.fields).preview_header();
        let mut fields_block = String::new();
        for field in &form.fields {
            emit_preview_field(&mut fields_block, field);
        }

        self.engine.render(
            "preview_shell",
            &json!({
                "form_name": form.form_name,
                "imports": imports,
                "fields": fields_block,
            }),
        )
    }
}

/// One labeled control block inside the Card content.
fn emit_preview_field(out: &mut String, field: &Field) {
    match field.field_type {
        FieldType::Boolean => {
            // Checkbox sits left of its label, no wrapping space-y div.
            out.push_str("        <div className=\"flex items-center space-x-2\">\n");
            out.push_str(&format!("          <Checkbox id=\"{}\" />\n", field.name));
            out.push_str(&format!(
                "          <Label htmlFor=\"{}\">{}</Label>\n",
                field.name, field.label
            ));
            out.push_str("        </div>\n");
            emit_description(out, field);
            return;
        }
        _ => {
            out.push_str("        <div className=\"space-y-2\">\n");
            out.push_str(&format!(
                "          <Label htmlFor=\"{}\">{}</Label>\n",
                field.name, field.label
            ));
        }
    }

    match field.field_type {
        FieldType::Textarea => {
            out.push_str(&format!(
                "          <Textarea id=\"{}\" placeholder=\"{}\"{} />\n",
                field.name,
                field.placeholder,
                required_attr(field)
            ));
        }

        FieldType::Enum => {
            if field.options.len() <= RADIO_OPTION_LIMIT {
                let default_value = field
                    .options
                    .first()
                    .map(String::as_str)
                    .unwrap_or_default();
                out.push_str(&format!(
                    "          <RadioGroup defaultValue=\"{}\">\n",
                    default_value
                ));
                for option in &field.options {
                    out.push_str("            <div className=\"flex items-center space-x-2\">\n");
                    out.push_str(&format!(
                        "              <RadioGroupItem value=\"{}\" id=\"{}-{}\" />\n",
                        option, field.name, option
                    ));
                    out.push_str(&format!(
                        "              <Label htmlFor=\"{}-{}\">{}</Label>\n",
                        field.name, option, option
                    ));
                    out.push_str("            </div>\n");
                }
                out.push_str("          </RadioGroup>\n");
            } else {
                out.push_str("          <Select>\n");
                out.push_str(&format!(
                    "            <SelectTrigger id=\"{}\">\n",
                    field.name
                ));
                out.push_str(&format!(
                    "              <SelectValue placeholder=\"{}\" />\n",
                    select_placeholder(field)
                ));
                out.push_str("            </SelectTrigger>\n");
                out.push_str("            <SelectContent>\n");
                for option in &field.options {
                    out.push_str(&format!(
                        "              <SelectItem value=\"{}\">{}</SelectItem>\n",
                        option, option
                    ));
                }
                out.push_str("            </SelectContent>\n");
                out.push_str("          </Select>\n");
            }
        }

        FieldType::Date => {
            out.push_str("          <Popover>\n");
            out.push_str("            <PopoverTrigger asChild>\n");
            out.push_str("              <Button\n");
            out.push_str("                variant=\"outline\"\n");
            out.push_str(
                "                className=\"w-full justify-start text-left font-normal text-muted-foreground\"\n",
            );
            out.push_str("              >\n");
            out.push_str("                <CalendarIcon className=\"mr-2 h-4 w-4\" />\n");
            out.push_str(&format!(
                "                <span>{}</span>\n",
                date_placeholder(field)
            ));
            out.push_str("              </Button>\n");
            out.push_str("            </PopoverTrigger>\n");
            out.push_str("            <PopoverContent className=\"w-auto p-0\">\n");
            out.push_str("              <Calendar mode=\"single\" />\n");
            out.push_str("            </PopoverContent>\n");
            out.push_str("          </Popover>\n");
        }

        FieldType::File => {
            out.push_str(&format!(
                "          <Input id=\"{}\" type=\"file\"{} />\n",
                field.name,
                required_attr(field)
            ));
        }

        // Plain text-like inputs, including the array fallback.
        _ => {
            out.push_str(&format!(
                "          <Input id=\"{}\" type=\"{}\" placeholder=\"{}\"{} />\n",
                field.name,
                field.field_type.html_input_type(),
                field.placeholder,
                required_attr(field)
            ));
        }
    }

    emit_description_inner(out, field);
    out.push_str("        </div>\n");
}

fn required_attr(field: &Field) -> &'static str {
    if field.required {
        " required"
    } else {
        ""
    }
}

fn select_placeholder(field: &Field) -> &str {
    if field.placeholder.is_empty() {
        "Select an option"
    } else {
        &field.placeholder
    }
}

fn date_placeholder(field: &Field) -> &str {
    if field.placeholder.is_empty() {
        "Pick a date"
    } else {
        &field.placeholder
    }
}

/// Description paragraph inside the field's `space-y-2` div.
fn emit_description_inner(out: &mut String, field: &Field) {
    if !field.description.is_empty() {
        out.push_str(&format!(
            "          <p className=\"text-sm text-muted-foreground\">{}</p>\n",
            field.description
        ));
    }
}

/// Description paragraph after a checkbox row, which has no wrapping div.
fn emit_description(out: &mut String, field: &Field) {
    if !field.description.is_empty() {
        out.push_str(&format!(
            "        <p className=\"text-sm text-muted-foreground\">{}</p>\n",
            field.description
        ));
    }
}
