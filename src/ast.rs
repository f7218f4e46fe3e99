//! # Trove Search Language - Abstract Syntax Tree
//!
//! Types shared by the lexer, the parser and the renderer.
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes built by the parser
//! - **[operators]** - Binary operators and the negation table
//!
//! ## Quick Start
//!
//! ```text
//! (title = "Akira") & (year > 1985)
//! ```
//!
//! parses into an `And` of two comparisons and renders as
//!
//! ```text
//! ((title == "Akira") AND (year >= 1985))
//! ```
//!
//! ## Core Concepts
//!
//! ### Atoms
//!
//! Quoted strings, numbers, bare words, `{...}` passthrough blocks and
//! parenthesised sub-queries.
//!
//! ### Atom Lists
//!
//! Atoms joined with `:` form a list (`1999 : 2000`). A single atom stays a
//! plain value unless a trailing `:` asks for a one-item list.
//!
//! ### Fallback
//!
//! A query made of a single term with no operator searches the title:
//!
//! ```text
//! bebop    ->    (en_title LIKE "bebop")
//! ```
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::Expr;
pub use operators::{negated_symbol, Operator, OperatorKind};
pub use tokens::{Token, TokenKind};
