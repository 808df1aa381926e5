//! Result of pressing equals.

use crate::eval::EvalError;
use crate::history::HistoryEntry;

/// What a call to [`Calculator::calculate`](super::Calculator::calculate)
/// did.
#[derive(Clone, Debug, PartialEq)]
pub enum CalculationOutcome {
    /// Nothing to evaluate, or the key pressed was not equals
    Idle,

    /// Evaluation succeeded and the entry was recorded
    Evaluated(HistoryEntry),

    /// Evaluation failed and the buffer now shows the error sentinel
    Failed(EvalError),
}

impl CalculationOutcome {
    pub fn is_evaluated(&self) -> bool {
        matches!(self, Self::Evaluated(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Recorded entry, when evaluation succeeded.
    pub fn entry(&self) -> Option<&HistoryEntry> {
        match self {
            Self::Evaluated(entry) => Some(entry),
            _ => None,
        }
    }
}
