//! Conceptual phase of a calculator session.
//!
//! The phase is derived, never stored on its own: it is read off the token
//! buffer plus whether the buffer holds a freshly computed result.

use super::buffer::TokenBuffer;
use serde::{Deserialize, Serialize};

/// Where a calculator session currently stands.
///
/// ```text
/// Empty -> Building -> Evaluated -> Building (chaining)
///              |
///              +-> Error -> Empty | Building
/// ```
///
/// # Example
///
/// ```rust
/// use calcpad::core::{Phase, Token, TokenBuffer};
///
/// assert_eq!(Phase::of(&TokenBuffer::new(), false), Phase::Empty);
///
/// let errored = TokenBuffer::with_token(Token::Error);
/// let phase = Phase::of(&errored, false);
/// assert!(phase.is_error());
/// assert_eq!(phase.name(), "Error");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing typed yet, or just cleared.
    Empty,
    /// An expression is being typed.
    Building,
    /// The buffer holds the result of the last calculation.
    Evaluated,
    /// The last calculation failed; the buffer shows the error sentinel.
    Error,
}

impl Phase {
    /// Derive the phase from a buffer.
    ///
    /// `evaluated` tells whether the buffer content is an untouched
    /// calculation result.
    pub fn of(buffer: &TokenBuffer, evaluated: bool) -> Self {
        if buffer.is_empty() {
            Self::Empty
        } else if buffer.ends_in_error() {
            Self::Error
        } else if evaluated {
            Self::Evaluated
        } else {
            Self::Building
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Empty => "Empty",
            Self::Building => "Building",
            Self::Evaluated => "Evaluated",
            Self::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}
