//! Error model for explain output.
//! Every failure is fatal to the current explain operation; nothing here is retried.

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplainError {
    /// Growing an output string failed while composing a cell.
    #[error("alloc_failed: {message}")]
    Alloc { message: String },
    /// The output sink rejected headers or a row.
    #[error("sink_failed: {message}")]
    Sink { message: String },
    /// A row was flushed after the sink already failed for this operation.
    #[error("explain_aborted: output sink failed earlier; no further rows are composed")]
    Aborted,
    /// Plan input could not be read or decoded.
    #[error("bad_input: {message}")]
    Input { message: String },
}

impl ExplainError {
    pub fn code_str(&self) -> &'static str {
        match self {
            ExplainError::Alloc { .. } => "alloc_failed",
            ExplainError::Sink { .. } => "sink_failed",
            ExplainError::Aborted => "explain_aborted",
            ExplainError::Input { .. } => "bad_input",
        }
    }

    pub fn sink<S: Into<String>>(msg: S) -> Self { ExplainError::Sink { message: msg.into() } }
    pub fn input<S: Into<String>>(msg: S) -> Self { ExplainError::Input { message: msg.into() } }

    /// Whether the failure came from the output side (the sink) rather than from composition.
    pub fn is_output_failure(&self) -> bool {
        matches!(self, ExplainError::Sink { .. } | ExplainError::Aborted)
    }
}

impl From<TryReserveError> for ExplainError {
    fn from(err: TryReserveError) -> Self {
        ExplainError::Alloc { message: err.to_string() }
    }
}

impl From<serde_json::Error> for ExplainError {
    fn from(err: serde_json::Error) -> Self {
        ExplainError::Input { message: err.to_string() }
    }
}

pub type ExplainResult<T> = Result<T, ExplainError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
