//! The calculator session shell.
//!
//! Wraps the pure token buffer with evaluation, history recording,
//! persistence and logging.

mod machine;
mod outcome;

pub use machine::Calculator;
pub use outcome::CalculationOutcome;
