use std::mem;

use serde::Serialize;

use crate::ast::{Operator, OperatorKind};

/// Parsed search expression.
///
/// Trees are built fresh for every query and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// Colon-joined atoms, always at least one item
    ///
    /// # Example
    /// ```text
    /// 1999:2000:2001
    /// ```
    List(Vec<Expr>),

    /// Quoted text, rendered as a JSON string
    ///
    /// # Example
    /// ```text
    /// "cowboy bebop"
    /// ```
    String(String),

    /// Numeric text kept verbatim
    ///
    /// # Example
    /// ```text
    /// 12.5
    /// ```
    Number(String),

    /// Bare word or preserved block; `;` is stripped when rendered
    ///
    /// # Example
    /// ```text
    /// year
    /// {release date}
    /// ```
    Word(String),

    /// Two operands joined by an operator
    Binary {
        left: Box<Expr>,
        op: Operator,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(left: Expr, op: impl Into<Operator>, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op: op.into(),
            right: Box::new(right),
        }
    }

    /// The implicit `<field> LIKE "<term>"` used for operator-less queries.
    pub fn fallback(field: &str, term: &str) -> Self {
        Expr::binary(
            Expr::Word(field.to_string()),
            OperatorKind::Similar,
            Expr::String(term.to_string()),
        )
    }
}

impl Expr {
    /// Moves the children of `self` into `pending`, leaving empty leaves
    /// behind.
    fn detach_children(&mut self, pending: &mut Vec<Expr>) {
        match self {
            Expr::Binary { left, right, .. } => {
                pending.push(mem::replace(left.as_mut(), Expr::Number(String::new())));
                pending.push(mem::replace(right.as_mut(), Expr::Number(String::new())));
            }
            Expr::List(items) => pending.append(items),
            Expr::String(_) | Expr::Number(_) | Expr::Word(_) => {}
        }
    }
}

// Long `&`/`|` chains form a left spine as deep as the query is long; tear
// it down with a work list instead of recursing through each `Box`.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}
