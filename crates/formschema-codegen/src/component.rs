//! Validated form component generation.
//!
//! Emits a resolver-bound React component: zod schema definition, inferred
//! type alias, `useForm` setup with per-field default values, and one
//! `<FormField>` block per field with type-appropriate change handlers.

use formschema_core::{Field, FieldType, FormDefinition};
use serde_json::json;

use crate::config::EnumDefaultStyle;
use crate::generator::ComponentGenerator;
use crate::imports::ImportSet;
use crate::template::{upper_first, BuiltinTemplates, TemplateEngine};
use crate::{CodegenConfig, CodegenResult, RADIO_OPTION_LIMIT};

/// Fixed output for a definition with no fields. A defined result, not an
/// error path.
pub const EMPTY_COMPONENT_PLACEHOLDER: &str = "// Add fields to generate form component";

/// Generator for the validated (resolver-bound) form component.
pub struct FormComponentGenerator {
    engine: TemplateEngine,
}

impl FormComponentGenerator {
    /// Create the generator with its shell template registered.
    pub fn new() -> CodegenResult<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template("component_shell", BuiltinTemplates::component_shell())?;
        Ok(Self { engine })
    }
}

impl ComponentGenerator for FormComponentGenerator {
    fn name(&self) -> &str {
        "validated-component"
    }

    fn generate(&self, form: &FormDefinition, config: &CodegenConfig) -> CodegenResult<String> {
        if form.fields.is_empty() {
            return Ok(EMPTY_COMPONENT_PLACEHOLDER.to_string());
        }

        let imports = ImportSet::scan(&form.fields).component_header();
        let schema = emit_schema_block(form);
        let defaults = emit_defaults_block(&form.fields, config.enum_default_style);
        let mut fields_block = String::new();
        for field in &form.fields {
            emit_form_field(&mut fields_block, field);
        }

        self.engine.render(
            "component_shell",
            &json!({
                "form_name": form.form_name,
                "imports": imports,
                "schema": schema,
                "defaults": defaults,
                "fields": fields_block,
            }),
        )
    }
}

/// Zod schema constant plus the inferred type alias.
fn emit_schema_block(form: &FormDefinition) -> String {
    let mut out = String::from("\n// Define the Zod schema\n");
    out.push_str(&format!("const {} = z.object({{\n", form.form_name));

    let last = form.fields.len() - 1;
    for (i, field) in form.fields.iter().enumerate() {
        out.push_str(&format!("  {}: z.{}", field.name, validation_expr(field)));
        out.push_str(if i < last { ",\n" } else { "\n" });
    }
    out.push_str("})\n\n");

    out.push_str(&format!(
        "// Define the type\ntype {}Type = z.infer<typeof {}>\n\n",
        upper_first(&form.form_name),
        form.form_name
    ));
    out
}

/// The zod expression for one field, without the leading `z.`.
fn validation_expr(field: &Field) -> String {
    let mut expr = match field.field_type {
        FieldType::Text | FieldType::Textarea => "string()".to_string(),
        FieldType::Email => "string().email(\"Invalid email address\")".to_string(),
        FieldType::Password => {
            "string().min(8, \"Password must be at least 8 characters\")".to_string()
        }
        FieldType::Number => "number()".to_string(),
        FieldType::Boolean => "boolean()".to_string(),
        FieldType::Date => "date()".to_string(),
        FieldType::File => "instanceof(File)".to_string(),
        FieldType::Enum => {
            if field.options.is_empty() {
                // Documented fallback: an enum with no options degrades to a
                // plain string check.
                "string()".to_string()
            } else {
                let options = field
                    .options
                    .iter()
                    .map(|opt| format!("\"{}\"", opt))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("enum([{}])", options)
            }
        }
        FieldType::Array => "string()".to_string(),
    };

    if !field.required {
        expr.push_str(".optional()");
    }
    if !field.description.is_empty() {
        expr.push_str(&format!(".describe(\"{}\")", field.description));
    }
    expr
}

/// One `name: value,` line per field for the `defaultValues` object.
fn emit_defaults_block(fields: &[Field], style: EnumDefaultStyle) -> String {
    let mut out = String::new();
    for field in fields {
        out.push_str(&format!(
            "      {}: {},\n",
            field.name,
            default_value(field, style)
        ));
    }
    out
}

fn default_value(field: &Field, style: EnumDefaultStyle) -> String {
    match field.field_type {
        FieldType::Text
        | FieldType::Email
        | FieldType::Password
        | FieldType::Textarea
        | FieldType::Array => "\"\"".to_string(),
        FieldType::Number => "0".to_string(),
        FieldType::Boolean => "false".to_string(),
        FieldType::Date | FieldType::File => "undefined".to_string(),
        FieldType::Enum => {
            if field.options.is_empty() {
                "\"\"".to_string()
            } else {
                match style {
                    EnumDefaultStyle::FirstOption => format!("\"{}\"", field.options[0]),
                    EnumDefaultStyle::Unset => "undefined".to_string(),
                }
            }
        }
    }
}

/// One `<FormField>` block wrapping the type-specific control.
fn emit_form_field(out: &mut String, field: &Field) {
    out.push_str("        <FormField\n");
    out.push_str("          control={form.control}\n");
    out.push_str(&format!("          name=\"{}\"\n", field.name));
    out.push_str("          render={({ field }) => (\n");
    out.push_str("            <FormItem>\n");
    out.push_str(&format!("              <FormLabel>{}</FormLabel>\n", field.label));
    out.push_str("              <FormControl>\n");
    emit_control(out, field);
    out.push_str("              </FormControl>\n");
    if !field.description.is_empty() {
        out.push_str(&format!(
            "              <FormDescription>{}</FormDescription>\n",
            field.description
        ));
    }
    out.push_str("              <FormMessage />\n");
    out.push_str("            </FormItem>\n");
    out.push_str("          )}\n");
    out.push_str("        />\n");
}

fn emit_control(out: &mut String, field: &Field) {
    match field.field_type {
        FieldType::Text | FieldType::Email | FieldType::Password | FieldType::Number => {
            out.push_str("                <Input\n");
            out.push_str(&format!(
                "                  placeholder=\"{}\"\n",
                field.placeholder
            ));
            match field.field_type {
                FieldType::Number => {
                    out.push_str("                  type=\"number\"\n");
                    out.push_str("                  {...field}\n");
                    out.push_str(
                        "                  onChange={(e) => field.onChange(Number(e.target.value))}\n",
                    );
                }
                FieldType::Email | FieldType::Password => {
                    out.push_str(&format!(
                        "                  type=\"{}\"\n",
                        field.field_type.html_input_type()
                    ));
                    out.push_str("                  {...field}\n");
                }
                _ => out.push_str("                  {...field}\n"),
            }
            out.push_str("                />\n");
        }

        FieldType::Textarea => {
            out.push_str("                <Textarea\n");
            out.push_str(&format!(
                "                  placeholder=\"{}\"\n",
                field.placeholder
            ));
            out.push_str("                  {...field}\n");
            out.push_str("                />\n");
        }

        FieldType::Boolean => {
            out.push_str("                <Checkbox\n");
            out.push_str("                  checked={field.value}\n");
            out.push_str("                  onCheckedChange={field.onChange}\n");
            out.push_str("                />\n");
        }

        FieldType::Enum => {
            if field.options.len() <= RADIO_OPTION_LIMIT {
                out.push_str("                <RadioGroup\n");
                out.push_str("                  onValueChange={field.onChange}\n");
                out.push_str("                  defaultValue={field.value}\n");
                out.push_str("                  className=\"flex flex-col space-y-1\"\n");
                out.push_str("                >\n");
                for option in &field.options {
                    out.push_str("                  <div className=\"flex items-center space-x-2\">\n");
                    out.push_str(&format!(
                        "                    <RadioGroupItem value=\"{}\" id=\"{}-{}\" />\n",
                        option, field.name, option
                    ));
                    out.push_str(&format!(
                        "                    <FormLabel htmlFor=\"{}-{}\">{}</FormLabel>\n",
                        field.name, option, option
                    ));
                    out.push_str("                  </div>\n");
                }
                out.push_str("                </RadioGroup>\n");
            } else {
                out.push_str("                <Select\n");
                out.push_str("                  onValueChange={field.onChange}\n");
                out.push_str("                  defaultValue={field.value}\n");
                out.push_str("                >\n");
                out.push_str("                  <SelectTrigger>\n");
                out.push_str(&format!(
                    "                    <SelectValue placeholder=\"{}\" />\n",
                    select_placeholder(field)
                ));
                out.push_str("                  </SelectTrigger>\n");
                out.push_str("                  <SelectContent>\n");
                for option in &field.options {
                    out.push_str(&format!(
                        "                    <SelectItem value=\"{}\">{}</SelectItem>\n",
                        option, option
                    ));
                }
                out.push_str("                  </SelectContent>\n");
                out.push_str("                </Select>\n");
            }
        }

        FieldType::Date => {
            out.push_str("                <Popover>\n");
            out.push_str("                  <PopoverTrigger asChild>\n");
            out.push_str("                    <Button\n");
            out.push_str("                      variant=\"outline\"\n");
            out.push_str("                      className={cn(\n");
            out.push_str(
                "                        \"w-full justify-start text-left font-normal\",\n",
            );
            out.push_str("                        !field.value && \"text-muted-foreground\"\n");
            out.push_str("                      )}\n");
            out.push_str("                    >\n");
            out.push_str("                      <CalendarIcon className=\"mr-2 h-4 w-4\" />\n");
            out.push_str(&format!(
                "                      {{field.value ? format(field.value, \"PPP\") : \"{}\"}}\n",
                date_placeholder(field)
            ));
            out.push_str("                    </Button>\n");
            out.push_str("                  </PopoverTrigger>\n");
            out.push_str("                  <PopoverContent className=\"w-auto p-0\">\n");
            out.push_str("                    <Calendar\n");
            out.push_str("                      mode=\"single\"\n");
            out.push_str("                      selected={field.value}\n");
            out.push_str("                      onSelect={field.onChange}\n");
            out.push_str("                      initialFocus\n");
            out.push_str("                    />\n");
            out.push_str("                  </PopoverContent>\n");
            out.push_str("                </Popover>\n");
        }

        FieldType::File => {
            out.push_str("                <Input\n");
            out.push_str("                  type=\"file\"\n");
            out.push_str("                  onChange={(e) => {\n");
            out.push_str("                    if (e.target.files?.[0]) {\n");
            out.push_str("                      field.onChange(e.target.files[0])\n");
            out.push_str("                    }\n");
            out.push_str("                  }}\n");
            out.push_str("                />\n");
        }

        FieldType::Array => {
            out.push_str("                <Input {...field} />\n");
        }
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
