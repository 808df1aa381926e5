//! Evaluation error types.

use thiserror::Error;

/// Errors that can occur while evaluating an expression.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvalError {
    #[error("Expression is empty")]
    Empty,

    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("Invalid number literal '{0}'")]
    InvalidNumber(String),

    #[error("Unexpected '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("Expression ended unexpectedly")]
    UnexpectedEnd,

    #[error("Parenthesis opened at position {position} is never closed")]
    UnclosedParenthesis { position: usize },

    #[error("Expression nests deeper than {max} levels at position {position}")]
    TooDeep { position: usize, max: usize },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    NonFinite,
}
