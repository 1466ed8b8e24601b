//! Run parameters.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Well-known parameter keys.
pub mod param {
    /// Probability that a node is seeded infected at setup.
    pub const P_INFECTED: &str = "pInfected";
    /// Per-edge transmission probability (synchronous) or rate (stochastic)
    /// per unit time.
    pub const P_INFECT: &str = "pInfect";
    /// Per-node recovery probability (synchronous) or rate (stochastic)
    /// per unit time.
    pub const P_RECOVER: &str = "pRecover";
    /// Scheduling ceiling: maximum simulated time (stochastic) or maximum
    /// tick count (synchronous).
    pub const MAX_TIME: &str = "maxTime";
}

/// Ceiling applied when [`param::MAX_TIME`] is not supplied.
pub const DEFAULT_MAX_TIME: f64 = 20_000.0;

/// Errors raised while reading run parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    /// A required key is absent.
    #[error("missing required parameter '{0}'")]
    Missing(String),

    /// A probability key is present but outside [0, 1].
    #[error("parameter '{key}' must be a probability in [0, 1], got {value}")]
    NotAProbability {
        /// The offending key.
        key: String,
        /// The rejected value.
        value: f64,
    },
}

/// The key→value configuration of one run.
///
/// Immutable for the duration of a run: the engine reads and validates
/// what it needs at setup and caches the values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(HashMap<String, f64>);

impl Parameters {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or overwrite a value.
    pub fn set(&mut self, key: &str, value: f64) {
        self.0.insert(key.to_owned(), value);
    }

    /// Look up an optional value.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Look up a required value.
    pub fn require(&self, key: &str) -> Result<f64, ParamError> {
        self.get(key).ok_or_else(|| ParamError::Missing(key.to_owned()))
    }

    /// Look up a required probability, validating it lies in [0, 1].
    pub fn probability(&self, key: &str) -> Result<f64, ParamError> {
        let value = self.require(key)?;
        if !(0.0..=1.0).contains(&value) {
            return Err(ParamError::NotAProbability {
                key: key.to_owned(),
                value,
            });
        }
        Ok(value)
    }

    /// The scheduling ceiling, defaulting to [`DEFAULT_MAX_TIME`].
    pub fn max_time(&self) -> f64 {
        self.get(param::MAX_TIME).unwrap_or(DEFAULT_MAX_TIME)
    }
}
