//! Generate command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use formschema_codegen::{CodegenConfig, EnumDefaultStyle, GenerationMode};
use formschema_store::FormStore;
use tracing::info;

/// Generate a React component from a Zod schema file
#[derive(Args)]
pub struct GenerateCommand {
    /// Input schema file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Generation mode (component or preview)
    #[arg(short, long, default_value = "component")]
    pub mode: String,

    /// Default-value strategy for enum fields (first-option or unset)
    #[arg(long, default_value = "first-option")]
    pub enum_default: String,

    /// Output file path; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self) -> Result<()> {
        let mode: GenerationMode = self
            .mode
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;
        let enum_default: EnumDefaultStyle = self
            .enum_default
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;

        let raw = fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read input file: {}", self.input.display()))?;

        let form = formschema_parser::parse(&raw)
            .with_context(|| format!("Failed to parse schema: {}", self.input.display()))?;

        // Stage the parsed definition in a store, as an editing frontend
        // would, and generate from its snapshot.
        let mut store = FormStore::new();
        store.replace(form);

        let config = CodegenConfig::default().with_enum_default_style(enum_default);
        let generated = formschema_codegen::generate(&store.snapshot(), mode, &config)
            .context("Failed to generate component")?;

        info!(mode = %mode, fields = store.len(), "generated component");

        match &self.output {
            Some(path) => {
                fs::write(path, generated)
                    .with_context(|| format!("Failed to write output file: {}", path.display()))?;
                println!("✓ Generated: {}", path.display());
            }
            None => println!("{}", generated),
        }

        Ok(())
    }
}
