//! Parse command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

/// Parse a Zod schema file into a form definition
#[derive(Args)]
pub struct ParseCommand {
    /// Input schema file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output format (json or yaml)
    #[arg(short, long, default_value = "json")]
    pub format: String,
}

impl ParseCommand {
    /// Execute the parse command
    pub fn execute(&self) -> Result<()> {
        if !matches!(self.format.as_str(), "json" | "yaml") {
            anyhow::bail!("Unsupported format: {}. Use 'json' or 'yaml'", self.format);
        }

        let raw = fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read input file: {}", self.input.display()))?;

        let form = formschema_parser::parse(&raw)
            .with_context(|| format!("Failed to parse schema: {}", self.input.display()))?;

        info!(
            form_name = %form.form_name,
            fields = form.fields.len(),
            "parsed schema"
        );

        let output = match self.format.as_str() {
            "json" => serde_json::to_string_pretty(&form)
                .context("Failed to serialize form definition to JSON")?,
            "yaml" => serde_yaml::to_string(&form)
                .context("Failed to serialize form definition to YAML")?,
            _ => unreachable!(), // Already validated above
        };

        println!("{}", output);
        Ok(())
    }
}
