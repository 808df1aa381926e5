//! Token buffer engine.
//!
//! This module contains the pure keystroke-folding core:
//! - Token atoms (numbers, operators, brackets, the error sentinel)
//! - The token buffer and its mutation operations
//! - Keypad events and the derived session phase
//!
//! Nothing in here evaluates, logs or persists; those concerns belong to
//! the calculator shell around it.

mod buffer;
mod key;
mod phase;
mod token;

pub use buffer::TokenBuffer;
pub use key::Key;
pub use phase::Phase;
pub use token::{Bracket, Operator, Token, ERROR_SENTINEL};
