//! CLI commands module.

pub mod generate;
pub mod parse;
pub mod snippet;

pub use generate::GenerateCommand;
pub use parse::ParseCommand;
pub use snippet::SnippetCommand;
