//! Configuration and build errors.

use thiserror::Error;

/// A single violated configuration rule.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Precision {precision} exceeds the maximum of {max} decimal places")]
    PrecisionTooHigh { precision: u32, max: u32 },

    #[error("Storage key must not be empty")]
    EmptyStorageKey,

    #[error("Storage key '{0}' must not contain path separators or start with '.'")]
    InvalidStorageKey(String),

    #[error("History limit must be at least 1")]
    ZeroHistoryLimit,
}

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid configuration: {}", describe(.0))]
    InvalidConfig(Vec<ConfigError>),
}

fn describe(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
