//! Domain error type for propdoc operations.
//!
//! Only three things can actually fail: reading inputs, the configuration,
//! and the raw-docs payload. Missing type signals during introspection are
//! not errors (the pipeline treats them as "feature unavailable").

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropdocError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid raw docs input: {0}")]
    Input(#[from] serde_json::Error),
}

impl PropdocError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PropdocError::Io {
            path: path.into(),
            source,
        }
    }
}
