use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the scoring core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("value out of range: {field}={value} (expected 0..=100)")]
    Range { field: String, value: f64 },
}

impl ScoreError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ScoreError::InvalidInput(msg.into())
    }
}

/// Failures while reading or writing snapshot and policy files.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to render report: {0}")]
    Render(#[source] serde_json::Error),

    #[error(transparent)]
    Score(#[from] ScoreError),
}

pub type ScoreResult<T> = Result<T, ScoreError>;
