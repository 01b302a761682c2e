//! # FormSchema CLI
//!
//! Command-line interface for the FormSchema tools.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};

mod commands;

use commands::{GenerateCommand, ParseCommand, SnippetCommand};

#[derive(Parser)]
#[command(name = "formschema")]
#[command(about = "Parse Zod form schemas and generate React form components")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a Zod schema file into a form definition
    Parse(ParseCommand),
    /// Generate a React component from a Zod schema file
    Generate(GenerateCommand),
    /// List or print the bundled example schemas
    Snippet(SnippetCommand),
}

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("Starting FormSchema CLI");

    match cli.command {
        Commands::Parse(cmd) => cmd.execute(),
        Commands::Generate(cmd) => cmd.execute(),
        Commands::Snippet(cmd) => cmd.execute(),
    }
}
