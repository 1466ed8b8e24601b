//! Error types for the dynamics lifecycle.

use contagion_types::ParamError;
use thiserror::Error;

/// Errors surfaced by the lifecycle API.
///
/// Non-convergence is deliberately absent: a run that hits its scheduling
/// ceiling is a reported result condition (`remaining_infected` in the
/// record), not an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DynamicsError {
    /// A required parameter is missing or out of range.
    #[error(transparent)]
    Config(#[from] ParamError),

    /// The run loop was entered before `setup` completed.
    #[error("dynamics advanced before setup completed")]
    NotSetUp,
}
