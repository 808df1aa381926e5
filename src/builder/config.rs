//! Calculator configuration and its validation.

use crate::builder::error::ConfigError;
use crate::eval::DEFAULT_PRECISION;
use crate::history::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Largest supported rounding precision. Beyond this an `f64` has no
/// meaningful fractional digits left for typical magnitudes.
pub const MAX_PRECISION: u32 = 15;

/// Tunable calculator settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Decimal places results are rounded to
    pub precision: u32,

    /// Key the history snapshot is stored under
    pub storage_key: String,

    /// Maximum number of history entries kept, unbounded when `None`
    pub history_limit: Option<usize>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            history_limit: None,
        }
    }
}

impl CalculatorConfig {
    /// Check every rule, accumulating ALL violations.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcpad::builder::CalculatorConfig;
    /// use stillwater::validation::Validation;
    ///
    /// let config = CalculatorConfig {
    ///     precision: 40,
    ///     storage_key: String::new(),
    ///     history_limit: Some(0),
    /// };
    ///
    /// match config.validate() {
    ///     Validation::Failure(errors) => assert_eq!(errors.len(), 3),
    ///     Validation::Success(_) => panic!("expected failures"),
    /// }
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let checks = vec![
            check_precision(self.precision),
            check_storage_key(&self.storage_key),
            check_history_limit(self.history_limit),
        ];

        Validation::all_vec(checks).map(|_| ())
    }
}

fn check_precision(precision: u32) -> Validation<(), NonEmptyVec<ConfigError>> {
    if precision > MAX_PRECISION {
        Validation::fail(ConfigError::PrecisionTooHigh {
            precision,
            max: MAX_PRECISION,
        })
    } else {
        Validation::success(())
    }
}

fn check_storage_key(key: &str) -> Validation<(), NonEmptyVec<ConfigError>> {
    if key.is_empty() {
        Validation::fail(ConfigError::EmptyStorageKey)
    } else if key.contains(['/', '\\']) || key.starts_with('.') {
        Validation::fail(ConfigError::InvalidStorageKey(key.to_string()))
    } else {
        Validation::success(())
    }
}

fn check_history_limit(limit: Option<usize>) -> Validation<(), NonEmptyVec<ConfigError>> {
    match limit {
        Some(0) => Validation::fail(ConfigError::ZeroHistoryLimit),
        _ => Validation::success(()),
    }
}
