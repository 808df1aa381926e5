//! Sandboxed arithmetic evaluation.
//!
//! Expressions go through three pure stages:
//! - normalization of display symbols (`×`, `÷`) to their ASCII forms
//! - lexing into numbers, operators and parentheses
//! - recursive-descent parsing into an [`Expr`] tree that is evaluated
//!
//! No dynamic code evaluation is involved; the grammar is exactly
//! `+ - * / ^ ( )` with unary signs and decimal literals.
//!
//! # Example
//!
//! ```rust
//! use calcpad::eval::{evaluate, normalize, EvalError};
//!
//! assert_eq!(normalize("6÷2×3"), "6/2*3");
//! assert_eq!(evaluate("6÷2×3"), Ok(9.0));
//! assert_eq!(evaluate("5÷0"), Err(EvalError::DivisionByZero));
//! ```

mod error;
mod lexer;
mod parser;
mod rounding;

pub use error::EvalError;
pub use lexer::{tokenize, Lexeme, Spanned};
pub use parser::{parse, Expr, MAX_DEPTH};
pub use rounding::{format_number, round_to, DEFAULT_PRECISION};

/// Replace display operator symbols with their ASCII equivalents.
pub fn normalize(expression: &str) -> String {
    expression
        .chars()
        .map(|ch| match ch {
            '÷' => '/',
            '×' => '*',
            '−' => '-',
            other => other,
        })
        .collect()
}

/// Normalize, parse and evaluate an expression.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let normalized = normalize(expression);
    let lexemes = tokenize(&normalized)?;
    parse(lexemes)?.eval()
}

/// Evaluate and round to `precision` fractional digits.
pub fn evaluate_rounded(expression: &str, precision: u32) -> Result<f64, EvalError> {
    evaluate(expression).map(|value| round_to(value, precision))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_rewrites_display_symbols() {
        assert_eq!(normalize("2×3÷4^2−1"), "2*3/4^2-1");
    }

    #[test]
    fn normalize_leaves_ascii_untouched() {
        assert_eq!(normalize("(1+2)*3"), "(1+2)*3");
    }

    #[test]
    fn evaluates_display_expressions() {
        assert_eq!(evaluate("5+3"), Ok(8.0));
        assert_eq!(evaluate("2^10"), Ok(1024.0));
        assert_eq!(evaluate("(2+3)×4"), Ok(20.0));
    }

    #[test]
    fn rounded_evaluation_removes_noise() {
        assert_eq!(evaluate_rounded("0.1+0.2", DEFAULT_PRECISION), Ok(0.3));
    }

    #[test]
    fn sentinel_text_does_not_evaluate() {
        assert!(matches!(
            evaluate("Error"),
            Err(EvalError::UnexpectedCharacter { ch: 'E', .. })
        ));
    }

    #[test]
    fn signed_operand_follows_text_precedence() {
        assert_eq!(evaluate("-3^2"), Ok(-9.0));
        assert_eq!(evaluate("(-3)^2"), Ok(9.0));
        assert_eq!(evaluate("2×-3"), Ok(-6.0));
    }

    #[test]
    fn deep_input_is_an_error_not_a_crash() {
        let input = format!("{}1", "(".repeat(10_000));
        assert!(matches!(
            evaluate_rounded(&input, DEFAULT_PRECISION),
            Err(EvalError::TooDeep { .. })
        ));
    }

    #[test]
    fn errors_propagate_through_rounding() {
        assert_eq!(
            evaluate_rounded("1÷0", DEFAULT_PRECISION),
            Err(EvalError::DivisionByZero)
        );
    }
}
