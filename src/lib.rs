//! Calcpad: a keystroke-driven calculator engine
//!
//! Calcpad follows a "pure core, imperative shell" layout. Button presses
//! are folded into a token buffer by pure functions; evaluation is a
//! sandboxed recursive-descent parser; the session shell records results
//! in a history that is persisted through an injected key-value store.
//!
//! # Core Concepts
//!
//! - **Token buffer**: the expression being typed, as numbers, operators,
//!   brackets and a sticky error sentinel
//! - **Live preview**: a non-committing evaluation shown while typing
//! - **History**: append-only `{expression, result}` log saved after every
//!   change
//! - **Chaining**: a successful result becomes the first operand of the
//!   next expression
//!
//! # Example
//!
//! ```rust
//! use calcpad::{Calculator, Key};
//! use calcpad::history::MemoryStore;
//!
//! let mut calculator = Calculator::builder()
//!     .store(MemoryStore::new())
//!     .build()
//!     .unwrap();
//!
//! for label in ["0", ".", "1", "+", "0", ".", "2"] {
//!     calculator.press(Key::from_label(label).unwrap());
//! }
//! assert_eq!(calculator.display_value(), "0.1+0.2");
//! assert_eq!(calculator.live_result(), "0.3");
//!
//! calculator.press(Key::Equals);
//! assert_eq!(calculator.display_value(), "0.3");
//!
//! // Reloading from the same store sees the recorded entry.
//! let store = calculator.into_store();
//! let reloaded = Calculator::builder().store(store).build().unwrap();
//! assert_eq!(reloaded.history().entries()[0].expression, "0.1+0.2");
//! ```

pub mod builder;
pub mod calculator;
pub mod core;
pub mod eval;
pub mod history;

// Re-export commonly used types
pub use crate::calculator::{CalculationOutcome, Calculator};
pub use crate::core::{Bracket, Key, Operator, Phase, Token, TokenBuffer};
pub use crate::eval::EvalError;
pub use crate::history::{FileStore, History, HistoryEntry, HistoryStore, MemoryStore};
