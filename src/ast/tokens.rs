use std::fmt;

use serde::Serialize;

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Atoms
    /// Bare run of characters up to the next word terminator
    ///
    /// # Examples
    /// ```text
    /// title
    /// en_title
    /// a:b
    /// ```
    Word,

    /// Text enclosed in `"` or `'`, escapes already consumed
    ///
    /// # Examples
    /// ```text
    /// "spirited away"
    /// 'it\'s'
    /// ```
    QuotedString,

    /// Digits with at most one `.`
    ///
    /// # Examples
    /// ```text
    /// 2000
    /// 12.5
    /// ```
    Number,

    /// Brace-delimited passthrough block, outer braces dropped
    ///
    /// # Examples
    /// ```text
    /// {release date}
    /// {a{b}c}
    /// ```
    Preserved,

    // Comparison
    /// `~`
    Similar,
    /// `=` or `==`
    Eq,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `^`
    In,

    // Logical
    /// `&`
    And,
    /// `|`
    Or,
    /// `!`
    Not,

    // Arithmetic
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `-`
    Sub,
    /// `+`
    Plus,

    // Delimiters
    /// `:` joins atoms into a list
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl TokenKind {
    /// Kinds that start an atom.
    pub fn is_atom(self) -> bool {
        matches!(
            self,
            TokenKind::Word
                | TokenKind::QuotedString
                | TokenKind::Number
                | TokenKind::Preserved
                | TokenKind::LParen
        )
    }

    /// Kinds allowed between two atom lists.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Le
                | TokenKind::Ge
                | TokenKind::Eq
                | TokenKind::Similar
                | TokenKind::In
        )
    }

    /// Kinds allowed between two comparisons.
    pub fn is_logic(self) -> bool {
        matches!(self, TokenKind::And | TokenKind::Or)
    }
}

/// A single lexical unit: its kind plus the text it carries.
///
/// For operators `text` is the operator as written (`"=="`, `"&"`); for quoted
/// strings and preserved blocks it is the content without delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}
