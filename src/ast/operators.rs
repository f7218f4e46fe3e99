use serde::Serialize;

use crate::ast::TokenKind;

/// Operators that may join two expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OperatorKind {
    // Comparison
    /// `=` / `==`
    Eq,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `~`
    Similar,
    /// `^`
    In,

    // Logical
    /// `&`
    And,
    /// `|`
    Or,

    // Arithmetic
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `-`
    Sub,
    /// `+`
    Plus,
}

impl TryFrom<TokenKind> for OperatorKind {
    type Error = TokenKind;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        match kind {
            TokenKind::Eq => Ok(OperatorKind::Eq),
            TokenKind::Lt => Ok(OperatorKind::Lt),
            TokenKind::Le => Ok(OperatorKind::Le),
            TokenKind::Gt => Ok(OperatorKind::Gt),
            TokenKind::Ge => Ok(OperatorKind::Ge),
            TokenKind::Similar => Ok(OperatorKind::Similar),
            TokenKind::In => Ok(OperatorKind::In),
            TokenKind::And => Ok(OperatorKind::And),
            TokenKind::Or => Ok(OperatorKind::Or),
            TokenKind::Mul => Ok(OperatorKind::Mul),
            TokenKind::Div => Ok(OperatorKind::Div),
            TokenKind::Sub => Ok(OperatorKind::Sub),
            TokenKind::Plus => Ok(OperatorKind::Plus),
            other => Err(other),
        }
    }
}

/// Operator slot of a binary expression.
///
/// `negate` flips the rendered symbol through [`negated_symbol`]. The parser
/// never sets it; it exists for callers that build trees by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Operator {
    pub kind: OperatorKind,
    pub negate: bool,
}

impl Operator {
    pub fn new(kind: OperatorKind) -> Self {
        Operator {
            kind,
            negate: false,
        }
    }

    pub fn negated(kind: OperatorKind) -> Self {
        Operator { kind, negate: true }
    }
}

impl From<OperatorKind> for Operator {
    fn from(kind: OperatorKind) -> Self {
        Operator::new(kind)
    }
}

/// Symbol pairs that negate each other. Lookups go both ways.
static NEGATIONS: [(&str, &str); 6] = [
    ("==", "!="),
    ("<=", ">"),
    (">=", "<"),
    ("LIKE", "NOT LIKE"),
    ("AND", "OR"),
    ("IN", "NOT IN"),
];

/// Returns the negated counterpart of a rendered symbol, if it has one.
pub fn negated_symbol(symbol: &str) -> Option<&'static str> {
    NEGATIONS.iter().find_map(|&(plain, negated)| {
        if plain == symbol {
            Some(negated)
        } else if negated == symbol {
            Some(plain)
        } else {
            None
        }
    })
}

#[test]
fn test_negation_is_symmetric() {
    for (plain, negated) in NEGATIONS {
        assert_eq!(negated_symbol(plain), Some(negated));
        assert_eq!(negated_symbol(negated), Some(plain));
    }
    assert_eq!(negated_symbol("*"), None);
}

#[test]
fn test_non_operator_tokens_are_rejected() {
    assert_eq!(OperatorKind::try_from(TokenKind::Colon), Err(TokenKind::Colon));
    assert_eq!(OperatorKind::try_from(TokenKind::Not), Err(TokenKind::Not));
    assert_eq!(OperatorKind::try_from(TokenKind::Ge), Ok(OperatorKind::Ge));
}
