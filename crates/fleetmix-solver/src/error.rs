//! Planner error types.

use thiserror::Error;

/// Errors that can occur while constructing or running a capacity plan.
///
/// Infeasibility is not an error: `Planner::run` reports it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("invalid plan config: {0}")]
    Config(#[from] fleetmix_core::ConfigError),

    /// The backend reported an unbounded program. Unit counts are bounded by
    /// construction, so this indicates a model bug, not a property of the
    /// input.
    #[error("solver reported an unbounded model; the capacity model is bounded by construction")]
    Unbounded,

    #[error("solver failure: {0}")]
    Solver(String),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
