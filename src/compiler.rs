//! The `lex -> parse -> render` pipeline.

use tracing::debug;

use crate::ast::Expr;
use crate::lexer::lex;
use crate::parser::{ParseError, Parser};
use crate::render::render;

/// Column searched by queries that carry no operator.
pub const DEFAULT_FALLBACK_FIELD: &str = "en_title";

/// Options for compiling search text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Column the fallback `LIKE` search targets
    pub fallback_field: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            fallback_field: DEFAULT_FALLBACK_FIELD.to_string(),
        }
    }
}

/// Compiles search text into filter expressions.
///
/// Holds no per-query state; one compiler can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Compiler { options }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Lex and parse without rendering.
    pub fn parse(&self, text: &str) -> Result<Expr, ParseError> {
        Parser::with_fallback_field(lex(text), &self.options.fallback_field).parse()
    }

    pub fn compile(&self, text: &str) -> Result<String, ParseError> {
        let expr = self.parse(text)?;
        let filter = render(&expr);
        debug!(query = %text, %filter, "compiled search");
        Ok(filter)
    }
}

/// Compiles `text` with the default options.
///
/// ```
/// assert_eq!(trove_query::compile("bebop").unwrap(), r#"(en_title LIKE "bebop")"#);
/// ```
pub fn compile(text: &str) -> Result<String, ParseError> {
    Compiler::default().compile(text)
}

pub fn compile_with(text: &str, options: &CompileOptions) -> Result<String, ParseError> {
    Compiler::new(options.clone()).compile(text)
}
