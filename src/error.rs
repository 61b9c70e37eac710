use thiserror::Error;

/// Errors surfaced by the sieve engines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SieveError {
    /// The requested bound is below 2, so the candidate range [2, n] is empty.
    /// Raised before any allocation or task launch.
    #[error("bound must be at least 2, got {0}")]
    InvalidBound(usize),

    /// A concurrent marking task failed. Only reported after every task has
    /// been joined; the engine never returns a partially marked result.
    #[error("marking task failed: {0}")]
    TaskFailure(String),
}
