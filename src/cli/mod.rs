//! CLI support for trove-query
//!
//! Provides programmatic access to the `trove` commands so other tools can
//! embed them.

mod compile;
mod docs;

pub use compile::{execute_compile, CompileCommand, OutputMode};
pub use docs::{get_syntax_overview, get_syntax_topic, SyntaxTopic};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No query provided. Pass one as an argument or pipe it to stdin.")]
    NoInput,

    #[error("Unknown topic: '{0}'\nRun 'trove syntax' to see available topics.")]
    UnknownTopic(String),
}
