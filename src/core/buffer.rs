//! The token buffer: keystrokes folded into an ordered token sequence.
//!
//! All mutations are pure edits of the in-memory sequence. Evaluation,
//! history and persistence live elsewhere; the buffer only knows how to
//! fold input and how to render itself.

use super::token::{Bracket, Operator, Token};
use crate::eval::format_number;

/// Ordered sequence of tokens representing the expression being typed.
///
/// Invariants upheld by every mutation:
/// - no two adjacent operator tokens
/// - at most one decimal point per number token
/// - a trailing error sentinel is discarded by the next building input
///
/// # Example
///
/// ```rust
/// use calcpad::core::{Operator, TokenBuffer};
///
/// let mut buffer = TokenBuffer::new();
/// buffer.append_digit(1);
/// buffer.append_digit(2);
/// buffer.set_operator(Operator::Add);
/// buffer.set_operator(Operator::Multiply);
/// buffer.append_dot();
/// buffer.append_digit(5);
///
/// assert_eq!(buffer.display_value(), "12×0.5");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
}

impl TokenBuffer {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Buffer holding a single token, used to seed chained calculations.
    pub fn with_token(token: Token) -> Self {
        Self {
            tokens: vec![token],
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Whether the buffer currently shows the sticky error sentinel.
    pub fn ends_in_error(&self) -> bool {
        matches!(self.tokens.last(), Some(Token::Error))
    }

    fn ends_in_operator(&self) -> bool {
        matches!(self.tokens.last(), Some(Token::Operator(_)))
    }

    fn discard_error(&mut self) {
        if self.ends_in_error() {
            self.tokens.clear();
        }
    }

    /// Append a decimal digit (0 through 9). Other values are ignored.
    ///
    /// Starts a new number after an operator or bracket, otherwise extends
    /// the number being typed.
    pub fn append_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        self.discard_error();

        match self.tokens.last_mut() {
            Some(Token::Number(text)) => text.push(ch),
            _ => self.tokens.push(Token::Number(ch.to_string())),
        }
    }

    /// Append a decimal point, starting `0.` when no number is being typed.
    pub fn append_dot(&mut self) {
        self.discard_error();

        match self.tokens.last_mut() {
            Some(Token::Number(text)) => {
                if !text.contains('.') {
                    text.push('.');
                }
            }
            _ => self.tokens.push(Token::number("0.")),
        }
    }

    /// Set the pending operator.
    ///
    /// An empty buffer is seeded with `0`. A trailing operator is replaced
    /// rather than doubled.
    pub fn set_operator(&mut self, op: Operator) {
        self.discard_error();

        if self.tokens.is_empty() {
            self.tokens.push(Token::number("0"));
        }

        if self.ends_in_operator() {
            if let Some(last) = self.tokens.last_mut() {
                *last = Token::Operator(op);
            }
        } else {
            self.tokens.push(Token::Operator(op));
        }
    }

    /// Flip the sign of the number being typed. No-op on anything else.
    pub fn toggle_sign(&mut self) {
        if let Some(Token::Number(text)) = self.tokens.last_mut() {
            *text = match text.strip_prefix('-') {
                Some(unsigned) => unsigned.to_string(),
                None => format!("-{text}"),
            };
        }
    }

    /// Replace the number being typed with its value divided by 100.
    ///
    /// No-op when the last token is not a number or does not parse yet
    /// (a bare `-` for instance).
    pub fn percentage(&mut self) {
        if let Some(Token::Number(text)) = self.tokens.last_mut() {
            if let Ok(value) = text.parse::<f64>() {
                *text = format_number(value / 100.0);
            }
        }
    }

    /// Push a bracket. Balance is checked at evaluation time, not here.
    pub fn append_bracket(&mut self, bracket: Bracket) {
        self.discard_error();
        self.tokens.push(Token::Bracket(bracket));
    }

    /// Remove the last character typed.
    ///
    /// Multi-character numbers lose their final character, every other
    /// token is removed whole. The error sentinel counts as one token, so a
    /// single delete clears it instead of leaving `Erro` on the display.
    pub fn delete(&mut self) {
        match self.tokens.last_mut() {
            Some(Token::Number(text)) if text.chars().count() > 1 => {
                text.pop();
            }
            Some(_) => {
                self.tokens.pop();
            }
            None => {}
        }
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Replace the whole sequence with a single token.
    pub fn reset_to(&mut self, token: Token) {
        self.tokens.clear();
        self.tokens.push(token);
    }

    /// Drop every trailing operator token.
    pub fn trim_trailing_operators(&mut self) {
        while self.ends_in_operator() {
            self.tokens.pop();
        }
    }

    /// Joined display text of all tokens, or `"0"` when empty.
    pub fn display_value(&self) -> String {
        if self.tokens.is_empty() {
            "0".to_string()
        } else {
            join(&self.tokens)
        }
    }

    /// Joined text of all tokens, empty when the buffer is empty.
    pub fn expression(&self) -> String {
        join(&self.tokens)
    }

    /// Tokens a live preview evaluates: one dangling trailing operator is
    /// ignored.
    pub fn preview_tokens(&self) -> &[Token] {
        match self.tokens.split_last() {
            Some((last, rest)) if last.is_operator() => rest,
            _ => &self.tokens,
        }
    }

    /// Joined text of [`preview_tokens`](Self::preview_tokens).
    pub fn preview_expression(&self) -> String {
        join(self.preview_tokens())
    }
}

fn join(tokens: &[Token]) -> String {
    tokens.iter().map(Token::to_string).collect()
}
