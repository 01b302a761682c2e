//! Generator trait and mode dispatch.

use formschema_core::FormDefinition;

use crate::component::FormComponentGenerator;
use crate::preview::PreviewGenerator;
use crate::{CodegenConfig, CodegenResult, GenerationMode};

/// A code generator that turns a form definition into one source artifact.
///
/// Implementations must be deterministic: the same definition and config
/// always produce byte-identical output.
pub trait ComponentGenerator {
    /// Short identifier for the artifact this generator emits.
    fn name(&self) -> &str;

    /// Generate the artifact text.
    fn generate(&self, form: &FormDefinition, config: &CodegenConfig) -> CodegenResult<String>;
}

/// Generate the artifact for the given mode.
pub fn generate(
    form: &FormDefinition,
    mode: GenerationMode,
    config: &CodegenConfig,
) -> CodegenResult<String> {
    match mode {
        GenerationMode::ValidatedComponent => {
            FormComponentGenerator::new()?.generate(form, config)
        }
        GenerationMode::StaticPreview => PreviewGenerator::new()?.generate(form, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formschema_core::{Field, FieldType};
    use pretty_assertions::assert_eq;

    fn sample_form() -> FormDefinition {
        FormDefinition::new(
            "signupSchema",
            vec![
                Field::new("email", FieldType::Email).unwrap(),
                Field::new("password", FieldType::Password).unwrap(),
                Field::new("plan", FieldType::Enum)
                    .unwrap()
                    .with_options(vec!["free".into(), "pro".into()]),
                Field::new("terms", FieldType::Boolean).unwrap(),
            ],
        )
    }

    #[test]
    fn test_generation_is_deterministic() {
        let form = sample_form();
        let config = CodegenConfig::default();
        for mode in [GenerationMode::ValidatedComponent, GenerationMode::StaticPreview] {
            let first = generate(&form, mode, &config).unwrap();
            let second = generate(&form, mode, &config).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_modes_produce_distinct_artifacts() {
        let form = sample_form();
        let config = CodegenConfig::default();
        let component = generate(&form, GenerationMode::ValidatedComponent, &config).unwrap();
        let preview = generate(&form, GenerationMode::StaticPreview, &config).unwrap();

        assert!(component.contains("zodResolver(signupSchema)"));
        assert!(component.contains("export function SignupSchemaForm()"));
        assert!(preview.contains("export default function SignupSchemaPreview()"));
        assert!(!preview.contains("zodResolver"));
    }

    #[test]
    fn test_generator_names() {
        assert_eq!(FormComponentGenerator::new().unwrap().name(), "validated-component");
        assert_eq!(PreviewGenerator::new().unwrap().name(), "static-preview");
    }
}
