//! Error types for the bracket pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Every failure a pipeline stage can report.
///
/// All variants halt the run. Nothing is retried and no partial output is written.
#[derive(Debug, Error)]
pub enum BracketError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Insufficient data: need at least {required} qualifying records, found {found}")]
    InsufficientData { required: usize, found: usize },

    /// Internal contract failure (wrong bracket arity, bad permutation table).
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BracketError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BracketError>;
