//! Error types for stage runs.

use thiserror::Error;

/// Result type for stage runs.
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Errors that end a run early.
///
/// Command failures are not in here: they are reported and the run carries on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RunnerError {
    /// A requested stage is not one of `clean`, `init`, `build`, `test`.
    #[error("Unknown stage: {0}")]
    UnknownStage(String),
}

impl RunnerError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownStage(_) => 1,
        }
    }
}
