pub mod ast;
pub mod compiler;
pub mod lexer;
pub mod parser;
pub mod render;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{Expr, Operator, OperatorKind, Token, TokenKind};
pub use compiler::{compile, compile_with, CompileOptions, Compiler, DEFAULT_FALLBACK_FIELD};
pub use lexer::{lex, Lexer};
pub use parser::{parse, ParseError, Parser};
pub use render::render;
