//! Token atoms that make up an in-progress expression.
//!
//! Every token renders to the exact string the user sees on the display,
//! so joining the rendered tokens reproduces the expression text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown for the error sentinel token.
pub const ERROR_SENTINEL: &str = "Error";

/// Binary operators available on the keypad.
///
/// # Example
///
/// ```rust
/// use calcpad::core::Operator;
///
/// assert_eq!(Operator::Multiply.symbol(), '×');
/// assert_eq!(Operator::from_symbol('÷'), Some(Operator::Divide));
/// assert_eq!(Operator::from_symbol('*'), Some(Operator::Multiply));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Display symbol of the operator.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
            Self::Power => '^',
        }
    }

    /// Parse an operator from its display symbol or its ASCII spelling.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '×' | '*' | 'x' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            '^' => Some(Self::Power),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parenthesis tokens.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Bracket {
    Open,
    Close,
}

impl Bracket {
    pub fn symbol(&self) -> char {
        match self {
            Self::Open => '(',
            Self::Close => ')',
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single atom of the expression being typed.
///
/// Number tokens keep the literal text exactly as typed (`"05"`, `"0."`,
/// `"-12.5"`) so the display mirrors the keystrokes.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Token {
    Number(String),
    Operator(Operator),
    Bracket(Bracket),
    Error,
}

impl Token {
    pub fn number(text: impl Into<String>) -> Self {
        Self::Number(text.into())
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Bracket(bracket) => write!(f, "{bracket}"),
            Self::Error => f.write_str(ERROR_SENTINEL),
        }
    }
}
