//! Calculator session: token buffer, evaluator and history wired together.

use crate::builder::{CalculatorBuilder, CalculatorConfig};
use crate::calculator::outcome::CalculationOutcome;
use crate::core::{Bracket, Key, Operator, Phase, Token, TokenBuffer};
use crate::eval::{evaluate_rounded, format_number};
use crate::history::{self, History, HistoryEntry, HistoryStore, MemoryStore};
use tracing::{debug, info, warn};

/// A calculator session.
///
/// Owns the token buffer and the history, and writes the history to its
/// store after every history mutation. Storage failures are logged and
/// otherwise ignored; the in-memory history stays authoritative.
///
/// # Example
///
/// ```rust
/// use calcpad::{Calculator, Operator};
///
/// let mut calculator = Calculator::new();
/// calculator.append_digit(5);
/// calculator.set_operator(Operator::Add);
/// calculator.append_digit(3);
/// assert_eq!(calculator.live_result(), "8");
///
/// calculator.calculate();
/// assert_eq!(calculator.display_value(), "8");
/// assert_eq!(calculator.history().entries()[0].expression, "5+3");
///
/// // Chaining continues from the result.
/// calculator.set_operator(Operator::Multiply);
/// calculator.append_digit(2);
/// calculator.calculate();
/// assert_eq!(calculator.display_value(), "16");
/// ```
#[derive(Debug)]
pub struct Calculator<S: HistoryStore = MemoryStore> {
    config: CalculatorConfig,
    store: S,
    buffer: TokenBuffer,
    history: History,
    evaluated: bool,
    confirming_clear_all: bool,
}

impl Calculator<MemoryStore> {
    /// Calculator with default settings and an in-memory store.
    pub fn new() -> Self {
        Self::from_parts(CalculatorConfig::default(), MemoryStore::new(), History::new())
    }

    pub fn builder() -> CalculatorBuilder<MemoryStore> {
        CalculatorBuilder::new()
    }
}

impl Default for Calculator<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: HistoryStore> Calculator<S> {
    pub(crate) fn from_parts(config: CalculatorConfig, store: S, history: History) -> Self {
        let history = match config.history_limit {
            Some(limit) => history.newest(limit),
            None => history,
        };
        Self {
            config,
            store,
            buffer: TokenBuffer::new(),
            history,
            evaluated: false,
            confirming_clear_all: false,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn buffer(&self) -> &TokenBuffer {
        &self.buffer
    }

    pub fn tokens(&self) -> &[Token] {
        self.buffer.tokens()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, ending the session.
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn phase(&self) -> Phase {
        Phase::of(&self.buffer, self.evaluated)
    }

    pub fn is_confirming_clear_all(&self) -> bool {
        self.confirming_clear_all
    }

    /// Text for the main display: the joined tokens, or `0` when empty.
    pub fn display_value(&self) -> String {
        self.buffer.display_value()
    }

    /// Best-effort preview of the current expression's value.
    ///
    /// A dangling trailing operator is ignored. Returns an empty string
    /// when the buffer is empty or does not evaluate.
    pub fn live_result(&self) -> String {
        let expression = self.buffer.preview_expression();
        if expression.is_empty() {
            return String::new();
        }
        match evaluate_rounded(&expression, self.config.precision) {
            Ok(value) => format_number(value),
            Err(_) => String::new(),
        }
    }

    fn edit(&mut self, op: &str, apply: impl FnOnce(&mut TokenBuffer)) {
        self.evaluated = false;
        apply(&mut self.buffer);
        debug!(op, display = %self.buffer.display_value(), "buffer updated");
    }

    /// Append a decimal digit. Values above 9 are rejected.
    pub fn append_digit(&mut self, digit: u8) {
        if digit > 9 {
            warn!(digit, "ignoring out-of-range digit");
            return;
        }
        self.edit("digit", |buffer| buffer.append_digit(digit));
    }

    pub fn append_dot(&mut self) {
        self.edit("dot", TokenBuffer::append_dot);
    }

    pub fn set_operator(&mut self, op: Operator) {
        self.edit("operator", |buffer| buffer.set_operator(op));
    }

    pub fn toggle_sign(&mut self) {
        self.edit("toggle_sign", TokenBuffer::toggle_sign);
    }

    pub fn percentage(&mut self) {
        self.edit("percentage", TokenBuffer::percentage);
    }

    pub fn append_bracket(&mut self, bracket: Bracket) {
        self.edit("bracket", |buffer| buffer.append_bracket(bracket));
    }

    pub fn delete(&mut self) {
        self.edit("delete", TokenBuffer::delete);
    }

    /// Clear the buffer. History is untouched.
    pub fn clear(&mut self) {
        self.edit("clear", TokenBuffer::clear);
    }

    /// Evaluate the buffer.
    ///
    /// Trailing operators are dropped first. On success the entry is
    /// recorded and saved, and the buffer is reset to the result so the
    /// next operator chains from it. On failure the buffer shows the error
    /// sentinel and history is left alone.
    pub fn calculate(&mut self) -> CalculationOutcome {
        if self.buffer.is_empty() {
            return CalculationOutcome::Idle;
        }

        self.buffer.trim_trailing_operators();
        let expression = self.buffer.expression();

        match evaluate_rounded(&expression, self.config.precision) {
            Ok(value) => {
                let result = format_number(value);
                let entry = HistoryEntry::new(expression, result.clone());
                debug!(expression = %entry.expression, result = %entry.result, "calculated");

                self.history = std::mem::take(&mut self.history)
                    .record_bounded(entry.clone(), self.config.history_limit);
                self.save();

                self.buffer.reset_to(Token::Number(result));
                self.evaluated = true;
                CalculationOutcome::Evaluated(entry)
            }
            Err(e) => {
                debug!(%expression, error = %e, "calculation failed");
                self.buffer.reset_to(Token::Error);
                self.evaluated = false;
                CalculationOutcome::Failed(e)
            }
        }
    }

    /// Show the clear-all confirmation.
    pub fn request_clear_all(&mut self) {
        self.confirming_clear_all = true;
    }

    /// Dismiss the clear-all confirmation without clearing anything.
    pub fn cancel_clear_all(&mut self) {
        self.confirming_clear_all = false;
    }

    /// Wipe buffer and history, persist the empty history, dismiss the
    /// confirmation.
    pub fn confirm_clear_all(&mut self) {
        self.buffer.clear();
        self.evaluated = false;
        self.history = History::new();
        self.save();
        self.confirming_clear_all = false;
        info!("history cleared");
    }

    /// Dispatch a key press to its operation.
    pub fn press(&mut self, key: Key) -> CalculationOutcome {
        match key {
            Key::Digit(digit) => self.append_digit(digit),
            Key::Dot => self.append_dot(),
            Key::Operator(op) => self.set_operator(op),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.percentage(),
            Key::Bracket(bracket) => self.append_bracket(bracket),
            Key::Delete => self.delete(),
            Key::Equals => return self.calculate(),
            Key::Clear => self.clear(),
            Key::ClearAllRequest => self.request_clear_all(),
            Key::ClearAllConfirm => self.confirm_clear_all(),
            Key::ClearAllCancel => self.cancel_clear_all(),
        }
        CalculationOutcome::Idle
    }

    fn save(&mut self) {
        if let Err(e) = history::save(&mut self.store, &self.config.storage_key, &self.history) {
            warn!(key = %self.config.storage_key, error = %e, "failed to persist history");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{EvalError, DEFAULT_PRECISION};
    use crate::history::StoreError;

    fn enter(calculator: &mut Calculator<impl HistoryStore>, labels: &str) {
        for ch in labels.chars() {
            let key = Key::from_label(&ch.to_string()).unwrap();
            calculator.press(key);
        }
    }

    struct ReadOnlyStore;

    impl HistoryStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("read-only".to_string()))
        }
    }

    #[test]
    fn new_calculator_is_empty() {
        let calculator = Calculator::new();
        assert_eq!(calculator.display_value(), "0");
        assert_eq!(calculator.live_result(), "");
        assert_eq!(calculator.phase(), Phase::Empty);
        assert!(calculator.history().is_empty());
    }

    #[test]
    fn calculate_records_history_and_chains() {
        let mut calculator = Calculator::new();
        enter(&mut calculator, "5+3");

        let outcome = calculator.calculate();

        assert!(outcome.is_evaluated());
        assert_eq!(calculator.tokens(), &[Token::number("8")]);
        assert_eq!(calculator.phase(), Phase::Evaluated);
        let entry = calculator.history().last().unwrap();
        assert_eq!(entry.expression, "5+3");
        assert_eq!(entry.result, "8");
    }

    #[test]
    fn calculate_on_empty_buffer_is_idle() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.calculate(), CalculationOutcome::Idle);
        assert!(calculator.history().is_empty());
    }

    #[test]
    fn trailing_operators_are_stripped_before_evaluation() {
        let mut calculator = Calculator::new();
        enter(&mut calculator, "7×");

        calculator.calculate();

        assert_eq!(calculator.display_value(), "7");
        assert_eq!(calculator.history().last().unwrap().expression, "7");
    }

    #[test]
    fn failure_sets_error_sentinel_without_history() {
        let mut calculator = Calculator::new();
        enter(&mut calculator, "5÷0");

        let outcome = calculator.calculate();

        assert_eq!(outcome, CalculationOutcome::Failed(EvalError::DivisionByZero));
        assert_eq!(calculator.display_value(), "Error");
        assert_eq!(calculator.phase(), Phase::Error);
        assert!(calculator.history().is_empty());
    }

    #[test]
    fn unbalanced_parentheses_fail() {
        let mut calculator = Calculator::new();
        enter(&mut calculator, "(2+3");

        assert_eq!(calculator.live_result(), "");
        assert!(calculator.calculate().is_failed());
        assert_eq!(calculator.display_value(), "Error");
    }

    #[test]
    fn live_result_ignores_dangling_operator() {
        let mut calculator = Calculator::new();
        enter(&mut calculator, "2+3×");

        assert_eq!(calculator.live_result(), "5");
        assert_eq!(calculator.display_value(), "2+3×");
    }

    #[test]
    fn live_result_does_not_mutate() {
        let mut calculator = Calculator::new();
        enter(&mut calculator, "9÷0");

        assert_eq!(calculator.live_result(), "");
        assert_eq!(calculator.display_value(), "9÷0");
        assert!(calculator.history().is_empty());
    }

    #[test]
    fn chained_negative_result_matches_its_recorded_expression() {
        let mut calculator = Calculator::new();
        enter(&mut calculator, "2-5");
        calculator.calculate();
        assert_eq!(calculator.display_value(), "-3");

        enter(&mut calculator, "^2");
        calculator.calculate();

        let entry = calculator.history().last().unwrap();
        assert_eq!(entry.expression, "-3^2");
        assert_eq!(entry.result, "-9");
        let replayed = evaluate_rounded(&entry.expression, DEFAULT_PRECISION).map(format_number);
        assert_eq!(replayed.as_deref(), Ok(entry.result.as_str()));
    }

    #[test]
    fn deeply_nested_input_fails_without_crashing() {
        let mut calculator = Calculator::new();
        for _ in 0..10_000 {
            calculator.append_bracket(Bracket::Open);
        }
        calculator.append_digit(1);

        assert_eq!(calculator.live_result(), "");
        let outcome = calculator.calculate();
        assert!(matches!(
            outcome,
            CalculationOutcome::Failed(EvalError::TooDeep { .. })
        ));
        assert_eq!(calculator.display_value(), "Error");
        assert!(calculator.history().is_empty());
    }

    #[test]
    fn precision_is_configurable() {
        let mut calculator = Calculator::builder().precision(2).build().unwrap();
        enter(&mut calculator, "2÷3");

        assert_eq!(calculator.live_result(), "0.67");
        calculator.calculate();
        assert_eq!(calculator.display_value(), "0.67");
    }

    #[test]
    fn history_limit_drops_oldest() {
        let mut calculator = Calculator::builder().history_limit(2).build().unwrap();
        for expression in ["1+1", "2+2", "3+3"] {
            calculator.clear();
            enter(&mut calculator, expression);
            calculator.calculate();
        }

        let results: Vec<&str> = calculator
            .history()
            .entries()
            .iter()
            .map(|e| e.result.as_str())
            .collect();
        assert_eq!(results, vec!["4", "6"]);
    }

    #[test]
    fn save_failure_keeps_in_memory_history() {
        let mut calculator = Calculator::builder().store(ReadOnlyStore).build().unwrap();
        enter(&mut calculator, "1+2");

        let outcome = calculator.calculate();

        assert!(outcome.is_evaluated());
        assert_eq!(calculator.history().len(), 1);
        assert_eq!(calculator.display_value(), "3");
    }

    #[test]
    fn clear_all_needs_confirmation_flow() {
        let mut calculator = Calculator::new();
        enter(&mut calculator, "1+1");
        calculator.calculate();

        calculator.press(Key::ClearAllRequest);
        assert!(calculator.is_confirming_clear_all());

        calculator.press(Key::ClearAllCancel);
        assert!(!calculator.is_confirming_clear_all());
        assert_eq!(calculator.history().len(), 1);

        calculator.press(Key::ClearAllRequest);
        calculator.press(Key::ClearAllConfirm);
        assert!(!calculator.is_confirming_clear_all());
        assert!(calculator.history().is_empty());
        assert_eq!(calculator.display_value(), "0");
    }

    #[test]
    fn clear_keeps_history() {
        let mut calculator = Calculator::new();
        enter(&mut calculator, "1+1");
        calculator.calculate();
        calculator.clear();

        assert_eq!(calculator.phase(), Phase::Empty);
        assert_eq!(calculator.history().len(), 1);
    }

    #[test]
    fn editing_a_result_leaves_evaluated_phase() {
        let mut calculator = Calculator::new();
        enter(&mut calculator, "4+4");
        calculator.calculate();
        calculator.toggle_sign();

        assert_eq!(calculator.display_value(), "-8");
        assert_eq!(calculator.phase(), Phase::Building);
    }

    #[test]
    fn out_of_range_digit_is_ignored() {
        let mut calculator = Calculator::new();
        calculator.append_digit(12);
        assert_eq!(calculator.phase(), Phase::Empty);
    }

    #[test]
    fn press_returns_outcome_only_for_equals() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.press(Key::Digit(4)), CalculationOutcome::Idle);
        let outcome = calculator.press(Key::Equals);
        assert_eq!(outcome.entry().map(|e| e.result.as_str()), Some("4"));
    }
}
