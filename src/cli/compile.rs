//! Compile search queries from the command line

use serde::Serialize;

use super::CliError;
use crate::{lex, CompileOptions, Compiler};

/// What the compile command prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// The rendered filter expression
    #[default]
    Filter,
    /// The lexed token stream as JSON
    Tokens,
    /// The parsed expression tree as JSON
    Tree,
}

/// Options for the compile command
#[derive(Debug, Clone, Default)]
pub struct CompileCommand {
    /// The search query; `None` when nothing was given or piped in
    pub query: Option<String>,
    pub options: CompileOptions,
    pub mode: OutputMode,
    /// Pretty-print JSON output
    pub pretty: bool,
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }?;
    Ok(json)
}

/// Execute a compile command and return the text to print
pub fn execute_compile(command: &CompileCommand) -> Result<String, CliError> {
    let query = command.query.as_deref().ok_or(CliError::NoInput)?;
    // piped input usually ends with a newline the user never typed
    let query = query.trim_end_matches(['\r', '\n']);

    match command.mode {
        OutputMode::Tokens => to_json(&lex(query), command.pretty),
        OutputMode::Tree => {
            let expr = Compiler::new(command.options.clone()).parse(query)?;
            to_json(&expr, command.pretty)
        }
        OutputMode::Filter => Ok(Compiler::new(command.options.clone()).compile(query)?),
    }
}
