//! Builder API for calculator construction.
//!
//! The builder collects configuration and the history store, validates
//! everything at once, and loads the persisted history before handing out
//! a ready [`Calculator`].

pub mod config;
pub mod error;

pub use config::{CalculatorConfig, MAX_PRECISION};
pub use error::{BuildError, ConfigError};

use crate::calculator::Calculator;
use crate::history::{self, HistoryStore, MemoryStore};
use stillwater::validation::Validation;

/// Fluent builder for [`Calculator`].
///
/// The store defaults to an in-memory [`MemoryStore`].
///
/// # Example
///
/// ```rust
/// use calcpad::builder::CalculatorBuilder;
/// use calcpad::history::MemoryStore;
///
/// let calculator = CalculatorBuilder::new()
///     .precision(4)
///     .storage_key("scratchpad")
///     .history_limit(100)
///     .store(MemoryStore::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(calculator.config().precision, 4);
/// assert!(calculator.history().is_empty());
/// ```
pub struct CalculatorBuilder<S: HistoryStore = MemoryStore> {
    config: CalculatorConfig,
    store: S,
}

impl CalculatorBuilder<MemoryStore> {
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            store: MemoryStore::new(),
        }
    }
}

impl Default for CalculatorBuilder<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: HistoryStore> CalculatorBuilder<S> {
    /// Replace the whole configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of decimal places results are rounded to.
    pub fn precision(mut self, places: u32) -> Self {
        self.config.precision = places;
        self
    }

    /// Set the key the history snapshot is stored under.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self
    }

    /// Keep at most `limit` history entries.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    /// Persist history through `store`.
    pub fn store<T: HistoryStore>(self, store: T) -> CalculatorBuilder<T> {
        CalculatorBuilder {
            config: self.config,
            store,
        }
    }

    /// Validate the configuration and load persisted history.
    /// Returns every violated rule if the configuration is invalid.
    pub fn build(self) -> Result<Calculator<S>, BuildError> {
        if let Validation::Failure(errors) = self.config.validate() {
            return Err(BuildError::InvalidConfig(errors.iter().cloned().collect()));
        }

        let history = history::load(&self.store, &self.config.storage_key);
        Ok(Calculator::from_parts(self.config, self.store, history))
    }
}
