//! Keypad events.
//!
//! A presentation layer forwards button presses as [`Key`] values; each key
//! maps to exactly one calculator operation.

use super::token::{Bracket, Operator};
use serde::{Deserialize, Serialize};

/// A single button press.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Decimal digit, 0 through 9.
    Digit(u8),
    Dot,
    Operator(Operator),
    ToggleSign,
    Percent,
    Bracket(Bracket),
    Delete,
    Equals,
    Clear,
    /// Ask for confirmation before wiping buffer and history.
    ClearAllRequest,
    ClearAllConfirm,
    ClearAllCancel,
}

impl Key {
    /// Map a button label to its key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcpad::core::{Key, Operator};
    ///
    /// assert_eq!(Key::from_label("7"), Some(Key::Digit(7)));
    /// assert_eq!(Key::from_label("×"), Some(Key::Operator(Operator::Multiply)));
    /// assert_eq!(Key::from_label("="), Some(Key::Equals));
    /// assert_eq!(Key::from_label("sin"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        let key = match label {
            "." | "," => Self::Dot,
            "±" | "+/-" => Self::ToggleSign,
            "%" => Self::Percent,
            "(" => Self::Bracket(Bracket::Open),
            ")" => Self::Bracket(Bracket::Close),
            "⌫" | "DEL" | "del" => Self::Delete,
            "=" => Self::Equals,
            "C" | "c" => Self::Clear,
            "AC" | "ac" => Self::ClearAllRequest,
            _ => {
                let mut chars = label.chars();
                let (Some(ch), None) = (chars.next(), chars.next()) else {
                    return None;
                };
                if let Some(digit) = ch.to_digit(10) {
                    Self::Digit(digit as u8)
                } else {
                    Self::Operator(Operator::from_symbol(ch)?)
                }
            }
        };
        Some(key)
    }
}
