//! Configuration types for code generation.

use serde::{Deserialize, Serialize};

/// Which generated artifact to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationMode {
    /// Resolver-bound form component with default values and change handlers
    ValidatedComponent,
    /// Display-only rendering with static `required`/`placeholder` attributes
    StaticPreview,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMode::ValidatedComponent => write!(f, "validated-component"),
            GenerationMode::StaticPreview => write!(f, "static-preview"),
        }
    }
}

impl std::str::FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "component" | "validated-component" => Ok(GenerationMode::ValidatedComponent),
            "preview" | "static-preview" => Ok(GenerationMode::StaticPreview),
            _ => Err(format!("Unknown generation mode: {}", s)),
        }
    }
}

/// How the default value of an enum field with options is emitted.
///
/// The original tool's two call sites disagreed here — the editor pane
/// defaulted to the first option while the copy-to-clipboard path left the
/// value unset. Both behaviors are preserved as an explicit knob instead of
/// being unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnumDefaultStyle {
    /// Default to the first option (`"first"`)
    FirstOption,
    /// Leave the value `undefined`
    Unset,
}

impl std::fmt::Display for EnumDefaultStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnumDefaultStyle::FirstOption => write!(f, "first-option"),
            EnumDefaultStyle::Unset => write!(f, "unset"),
        }
    }
}

impl std::str::FromStr for EnumDefaultStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-option" | "first" => Ok(EnumDefaultStyle::FirstOption),
            "unset" | "undefined" => Ok(EnumDefaultStyle::Unset),
            _ => Err(format!("Unknown enum default style: {}", s)),
        }
    }
}

/// Configuration shared by both generation modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// Default-value strategy for enum fields (validated mode only)
    pub enum_default_style: EnumDefaultStyle,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            enum_default_style: EnumDefaultStyle::FirstOption,
        }
    }
}

impl CodegenConfig {
    /// Set the enum default style.
    pub fn with_enum_default_style(mut self, style: EnumDefaultStyle) -> Self {
        self.enum_default_style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!(
            "component".parse::<GenerationMode>().unwrap(),
            GenerationMode::ValidatedComponent
        );
        assert_eq!(
            "static-preview".parse::<GenerationMode>().unwrap(),
            GenerationMode::StaticPreview
        );
        assert!("html".parse::<GenerationMode>().is_err());
    }

    #[test]
    fn test_mode_display_round_trip() {
        for mode in [GenerationMode::ValidatedComponent, GenerationMode::StaticPreview] {
            assert_eq!(mode.to_string().parse::<GenerationMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_enum_default_style_from_str() {
        assert_eq!(
            "unset".parse::<EnumDefaultStyle>().unwrap(),
            EnumDefaultStyle::Unset
        );
        assert_eq!(
            CodegenConfig::default().enum_default_style,
            EnumDefaultStyle::FirstOption
        );
    }
}
