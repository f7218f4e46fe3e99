use thiserror::Error;
use tracing::debug;

use crate::ast::{Expr, OperatorKind, Token, TokenKind};
use crate::compiler::DEFAULT_FALLBACK_FIELD;

/// Deepest parenthesis nesting the parser descends into. Further `(` are
/// skipped like any other stray token.
pub const MAX_NESTING: usize = 128;

/// The one syntax error the grammar reports; everything else degrades to a
/// partial tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A logic operator was the last token of the query
    #[error("missing right-hand operand after '{operator}'")]
    MissingOperand { operator: String },
}

/// Recursive-descent parser over a lexed token vector.
///
/// ```text
/// search      := comparison ( (& | |) comparison )*
/// comparison  := atomList ( (< > <= >= = ~ ^) atomList )*
/// atomList    := atom ( : atom )*
/// atom        := "string" | word | number | {preserved} | ( search )
/// ```
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
    fallback_field: String,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser::with_fallback_field(tokens, DEFAULT_FALLBACK_FIELD)
    }

    /// Parser whose operator-less queries search `field` instead of the title.
    pub fn with_fallback_field(tokens: Vec<Token>, field: &str) -> Self {
        Parser {
            tokens,
            position: 0,
            depth: 0,
            fallback_field: field.to_string(),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn back(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    fn operator(kind: TokenKind) -> OperatorKind {
        match OperatorKind::try_from(kind) {
            Ok(op) => op,
            Err(kind) => unreachable!("{kind:?} was classified as an operator token"),
        }
    }

    /// Parse a single atom. Returns `None` without consuming anything when
    /// the next token cannot start one. An empty group `()` is consumed and
    /// also yields `None`.
    fn parse_atom(&mut self) -> Result<Option<Expr>, ParseError> {
        let token = loop {
            match self.next() {
                None => return Ok(None),
                Some(t) if t.kind == TokenKind::LParen && self.depth >= MAX_NESTING => {
                    debug!(depth = self.depth, "skipping '(' past nesting limit");
                }
                Some(t) => break t,
            }
        };

        let atom = match token.kind {
            TokenKind::QuotedString => Expr::String(token.text),
            TokenKind::Number => Expr::Number(token.text),
            TokenKind::Word | TokenKind::Preserved => Expr::Word(token.text),
            TokenKind::LParen => {
                self.depth += 1;
                let inner = self.parse_search(true);
                self.depth -= 1;
                if self.peek_kind() == Some(TokenKind::RParen) {
                    self.advance();
                }
                match inner? {
                    Some(expr) => expr,
                    None => return Ok(None),
                }
            }
            _ => {
                self.back();
                return Ok(None);
            }
        };
        Ok(Some(atom))
    }

    /// Parse `atom (: atom)*`. One atom passes through unchanged unless a
    /// trailing colon asks for a list.
    fn parse_atom_list(&mut self) -> Result<Option<Expr>, ParseError> {
        let Some(first) = self.parse_atom()? else {
            return Ok(None);
        };

        let mut items = vec![first];
        let mut trailing_colon = false;

        while self.peek_kind() == Some(TokenKind::Colon) {
            self.advance();
            match self.parse_atom()? {
                Some(atom) => items.push(atom),
                None => {
                    trailing_colon = true;
                    break;
                }
            }
        }

        if items.len() == 1 && !trailing_colon {
            Ok(items.pop())
        } else {
            Ok(Some(Expr::List(items)))
        }
    }

    fn parse_comparison(&mut self) -> Result<Option<Expr>, ParseError> {
        let start = self.position;
        let Some(mut left) = self.parse_atom_list()? else {
            return Ok(None);
        };
        let mut compared = false;

        while let Some(kind) = self.peek_kind().filter(|k| k.is_comparison()) {
            self.advance();
            match self.parse_atom_list()? {
                Some(right) => {
                    left = Expr::binary(left, Self::operator(kind), right);
                    compared = true;
                }
                None => {
                    debug!(operator = ?kind, "dropping comparison without right operand");
                    break;
                }
            }
        }

        // a lone leaf term with nothing after it searches the fallback field
        if !compared && self.is_at_end() && self.position == start + 1 {
            let last = &self.tokens[start];
            let is_leaf = matches!(
                last.kind,
                TokenKind::Word | TokenKind::QuotedString | TokenKind::Number | TokenKind::Preserved
            );
            if is_leaf {
                debug!(term = %last.text, field = %self.fallback_field, "using fallback search");
                return Ok(Some(Expr::fallback(&self.fallback_field, &last.text)));
            }
        }

        Ok(Some(left))
    }

    /// Parse `comparison (logicOp comparison)*`. Inside parentheses a `)`
    /// ends the group and is left for the caller.
    fn parse_search(&mut self, nested: bool) -> Result<Option<Expr>, ParseError> {
        let mut left: Option<Expr> = None;

        while let Some(token) = self.peek() {
            let kind = token.kind;

            if kind.is_logic() {
                let operator = token.text.clone();
                self.advance();
                if self.is_at_end() {
                    return Err(ParseError::MissingOperand { operator });
                }

                let right = self.parse_comparison()?;
                left = match (left, right) {
                    (Some(l), Some(r)) => Some(Expr::binary(l, Self::operator(kind), r)),
                    (l, r) => {
                        debug!(%operator, "dropping logic operator with a missing operand");
                        l.or(r)
                    }
                };
            } else if kind == TokenKind::RParen && nested {
                break;
            } else if left.is_none() && kind.is_atom() {
                left = self.parse_comparison()?;
            } else {
                debug!(kind = ?kind, "skipping stray token");
                self.advance();
            }
        }

        Ok(left)
    }

    /// Parse the whole token stream. Empty or unusable input searches the
    /// fallback field for the empty string.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_search(false)?;
        Ok(expr.unwrap_or_else(|| Expr::fallback(&self.fallback_field, "")))
    }
}

/// Parses a token vector with the default fallback field.
pub fn parse(tokens: Vec<Token>) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse()
}
