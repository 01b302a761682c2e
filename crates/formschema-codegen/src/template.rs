//! Template system for the generated component shells.
//!
//! Per-field control blocks are built with direct string emission; the
//! fixed outer scaffolding of each artifact (imports banner, `useForm`
//! setup, Card wrapper) is rendered through handlebars so the shells stay
//! readable as templates.

use crate::CodegenResult;
use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde_json::Value;

/// Template engine with the case helpers the shells rely on.
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with built-in helpers registered.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_helper("pascal_case", Box::new(pascal_case_helper));
        handlebars.register_helper("title_case", Box::new(title_case_helper));
        Self { handlebars }
    }

    /// Register a template from a string.
    pub fn register_template(&mut self, name: &str, template: &str) -> CodegenResult<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(crate::CodegenError::from)
    }

    /// Render a registered template with the given data.
    pub fn render(&self, template_name: &str, data: &Value) -> CodegenResult<String> {
        self.handlebars
            .render(template_name, data)
            .map_err(crate::CodegenError::from)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Shell templates for the two generation modes.
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    /// Outer scaffold of the validated form component. `imports`, `schema`,
    /// `defaults` and `fields` are pre-rendered blocks spliced in raw.
    pub fn component_shell() -> &'static str {
        r#"{{{imports}}}{{{schema}}}export function {{pascal_case form_name}}Form() {
  const form = useForm<{{pascal_case form_name}}Type>({
    resolver: zodResolver({{form_name}}),
    defaultValues: {
{{{defaults}}}    },
  })

  function onSubmit(values: {{pascal_case form_name}}Type) {
    // Do something with the form values
    console.log(values)
  }

  return (
    <Form {...form}>
      <form onSubmit={form.handleSubmit(onSubmit)} className="space-y-6">
{{{fields}}}        <Button type="submit">Submit</Button>
      </form>
    </Form>
  )
}
"#
    }

    /// Outer scaffold of the static preview component.
    pub fn preview_shell() -> &'static str {
        r#"{{{imports}}}
export default function {{pascal_case form_name}}Preview() {
  return (
    <Card className="w-full max-w-lg mx-auto">
      <CardHeader>
        <CardTitle>{{title_case form_name}}</CardTitle>
        <CardDescription>Please fill out the form below</CardDescription>
      </CardHeader>
      <CardContent className="space-y-4">
{{{fields}}}      </CardContent>
      <CardFooter>
        <Button type="submit" className="w-full">Submit</Button>
      </CardFooter>
    </Card>
  )
}
"#
    }
}

// Helper functions for handlebars templates

fn pascal_case_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    out.write(&upper_first(param))?;
    Ok(())
}

fn title_case_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    out.write(&formschema_core::derive_label(param))?;
    Ok(())
}

/// Upper-case the first character, leaving the rest untouched
/// (`contactFormSchema` becomes `ContactFormSchema`).
pub fn upper_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first("contactFormSchema"), "ContactFormSchema");
        assert_eq!(upper_first(""), "");
        assert_eq!(upper_first("x"), "X");
    }

    #[test]
    fn test_helper_rendering() {
        let mut engine = TemplateEngine::new();
        engine
            .register_template("t", "{{pascal_case name}} / {{title_case name}}")
            .unwrap();
        let out = engine.render("t", &json!({"name": "loginForm"})).unwrap();
        assert_eq!(out, "LoginForm / Login Form");
    }

    #[test]
    fn test_shell_templates_compile() {
        let mut engine = TemplateEngine::new();
        engine
            .register_template("component", BuiltinTemplates::component_shell())
            .unwrap();
        engine
            .register_template("preview", BuiltinTemplates::preview_shell())
            .unwrap();
    }

    #[test]
    fn test_raw_blocks_are_not_escaped() {
        let mut engine = TemplateEngine::new();
        engine.register_template("t", "{{{block}}}").unwrap();
        let out = engine
            .render("t", &json!({"block": "<Input {...field} />"}))
            .unwrap();
        assert_eq!(out, "<Input {...field} />");
    }
}
