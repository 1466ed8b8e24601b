//! The result record assembled at run end.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Well-known result keys.
pub mod result {
    /// Total number of transition events applied across the run.
    pub const EVENTS: &str = "events";
    /// Elapsed simulated time at termination.
    pub const TIME: &str = "time";
    /// Ticks executed (synchronous scheduling only).
    pub const TIMESTEPS: &str = "timesteps";
    /// Ticks in which at least one event fired (synchronous only).
    pub const TIMESTEP_EVENTS: &str = "timestep_events";
    /// Size of the active set at termination; zero at a clean equilibrium.
    pub const REMAINING_INFECTED: &str = "remaining_infected";
    /// Number of edges a transmission actually traversed.
    pub const OCCUPIED_EDGES: &str = "occupied_edges";
    /// Arithmetic mean of outbreak component sizes.
    pub const MEAN_OUTBREAK_SIZE: &str = "mean_outbreak_size";
    /// Size of the largest outbreak component.
    pub const MAX_OUTBREAK_SIZE: &str = "max_outbreak_size";
    /// Largest outbreak component size divided by the network order.
    pub const MAX_OUTBREAK_PROPORTION: &str = "max_outbreak_proportion";
}

/// A single result value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A count.
    Int(u64),
    /// A measurement.
    Float(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
        }
    }
}

/// The key→value record of one completed run.
///
/// Keys keep insertion order, so records print in the order they were
/// reported. Created once per run and never mutated after the run
/// returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Results(IndexMap<String, Value>);

impl Results {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a count.
    pub fn set_int(&mut self, key: &str, value: u64) {
        self.0.insert(key.to_owned(), Value::Int(value));
    }

    /// Record a measurement.
    pub fn set_float(&mut self, key: &str, value: f64) {
        self.0.insert(key.to_owned(), Value::Float(value));
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.get(key).copied()
    }

    /// Look up a count, if the key holds one.
    pub fn int(&self, key: &str) -> Option<u64> {
        match self.get(key) {
            Some(Value::Int(v)) => Some(v),
            _ => None,
        }
    }

    /// Look up a measurement, if the key holds one.
    pub fn float(&self, key: &str) -> Option<f64> {
        match self.get(key) {
            Some(Value::Float(v)) => Some(v),
            _ => None,
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of recorded keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
