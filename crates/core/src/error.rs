//! Error types for the trade reconciliation pipeline.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the reconciliation pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (fatal, detected before any matching runs).
    #[error("Configuration error: {0}")]
    Config(String),

    /// A raw trade record that could not be normalized.
    #[error("record {index}: {reason}")]
    Parse { index: usize, reason: String },

    /// Export error (CSV or report writing).
    #[error("Export error: {0}")]
    Export(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create an export error.
    pub fn export(msg: impl Into<String>) -> Self {
        Error::Export(msg.into())
    }

    /// Create a generic error.
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// A per-record normalization failure, collected alongside the records that
/// did parse rather than aborting the whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordError {
    /// Zero-based index of the record in the input batch.
    pub index: usize,
    /// Human-readable reason the record was rejected.
    pub reason: String,
}

impl RecordError {
    pub fn new(index: usize, reason: impl Into<String>) -> Self {
        Self {
            index,
            reason: reason.into(),
        }
    }
}

impl From<RecordError> for Error {
    fn from(err: RecordError) -> Self {
        Error::Parse {
            index: err.index,
            reason: err.reason,
        }
    }
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "record {}: {}", self.index, self.reason)
    }
}
