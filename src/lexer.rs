use tracing::{debug, trace};

use crate::ast::{Token, TokenKind};

/// Characters that end a bare word.
const WORD_TERMINATORS: [char; 11] = [' ', '\t', '\n', ';', '<', '>', '=', '&', '~', '^', '|'];

/// Splits search text into tokens.
///
/// The lexer never fails: an unterminated quote or brace consumes the rest
/// of the input and keeps whatever it collected.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n') = self.current_char() {
            self.advance();
        }
    }

    /// Two-character comparisons look at the second character of the whole
    /// input, not at the character after the cursor.
    fn second_char_is_eq(&self) -> bool {
        self.input.get(1) == Some(&'=')
    }

    fn single(&mut self, kind: TokenKind, ch: char) -> Token {
        self.advance();
        Token::new(kind, ch)
    }

    fn comparison(&mut self, short: (TokenKind, &str), long: (TokenKind, &str)) -> Token {
        let (kind, text) = if self.second_char_is_eq() {
            self.advance();
            long
        } else {
            short
        };
        self.advance();
        Token::new(kind, text)
    }

    /// Collects characters until `stop` matches, dropping each `\` and keeping
    /// the character after it. The stopping character is left in place.
    fn read_until(&mut self, stop: impl Fn(char) -> bool) -> String {
        let mut result = String::new();

        while let Some(ch) = self.current_char() {
            if stop(ch) {
                break;
            }
            self.advance();
            if ch == '\\' {
                if let Some(escaped) = self.current_char() {
                    result.push(escaped);
                    self.advance();
                }
            } else {
                result.push(ch);
            }
        }
        result
    }

    fn read_string(&mut self, quote: char) -> String {
        self.advance(); // opening quote
        let result = self.read_until(|c| c == quote);
        self.advance(); // closing quote, if any
        result
    }

    fn read_word(&mut self) -> String {
        let is_terminator = |c: char| WORD_TERMINATORS.contains(&c);
        let mut result = String::new();

        // a lead terminator (only `;` reaches here) still has to be consumed
        if let Some(lead) = self.current_char().filter(|&c| is_terminator(c)) {
            result.push(lead);
            self.advance();
        }
        result.push_str(&self.read_until(is_terminator));
        result
    }

    fn read_preserved(&mut self) -> String {
        let mut result = String::new();
        let mut depth = 1usize;
        self.advance(); // opening brace

        while let Some(ch) = self.current_char() {
            self.advance();
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
            result.push(ch);
        }
        result
    }

    fn read_number(&mut self) -> String {
        let mut number = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
            } else if ch == '.' && !seen_dot {
                seen_dot = true;
                number.push(ch);
            } else {
                break;
            }
            self.advance();
        }
        number
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let token = match self.current_char()? {
            ch @ '~' => self.single(TokenKind::Similar, ch),
            ch @ '*' => self.single(TokenKind::Mul, ch),
            ch @ '/' => self.single(TokenKind::Div, ch),
            ch @ '-' => self.single(TokenKind::Sub, ch),
            ch @ '+' => self.single(TokenKind::Plus, ch),
            ch @ ':' => self.single(TokenKind::Colon, ch),
            ch @ '(' => self.single(TokenKind::LParen, ch),
            ch @ ')' => self.single(TokenKind::RParen, ch),
            ch @ '|' => self.single(TokenKind::Or, ch),
            ch @ '^' => self.single(TokenKind::In, ch),
            ch @ '&' => self.single(TokenKind::And, ch),
            ch @ '!' => self.single(TokenKind::Not, ch),
            '=' => self.comparison((TokenKind::Eq, "="), (TokenKind::Eq, "==")),
            '>' => self.comparison((TokenKind::Gt, ">"), (TokenKind::Ge, ">=")),
            '<' => self.comparison((TokenKind::Lt, "<"), (TokenKind::Le, "<=")),
            quote @ ('"' | '\'') => Token::new(TokenKind::QuotedString, self.read_string(quote)),
            '{' => Token::new(TokenKind::Preserved, self.read_preserved()),
            ch if ch.is_ascii_digit() => Token::new(TokenKind::Number, self.read_number()),
            _ => Token::new(TokenKind::Word, self.read_word()),
        };

        trace!(kind = ?token.kind, text = %token.text, "lexed token");
        Some(token)
    }

    /// Drains the lexer into a token vector.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        debug!(count = tokens.len(), "lexed query");
        tokens
    }
}

/// Lexes `input` into tokens, left to right.
pub fn lex(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

#[test]
fn test_operators() {
    let mut lexer = Lexer::new("a ~ b ^ c");
    assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::Word, "a")));
    assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::Similar, "~")));
    assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::Word, "b")));
    assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::In, "^")));
    assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::Word, "c")));
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn test_semicolon_lead_terminates() {
    let tokens = lex(";;");
    assert_eq!(tokens, vec![Token::new(TokenKind::Word, ";"), Token::new(TokenKind::Word, ";")]);
}
