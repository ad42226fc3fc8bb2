//! Engine-level error types

use tagweave_core::ScanError;
use thiserror::Error;

/// Failure cause reported by a caller-supplied resolver.
pub type ResolveError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by the sequencer and stream plumbing.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The tokenizer rejected the input.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// The caller-supplied resolver reported a failure.
    #[error("resolver failure: {0}")]
    Resolver(#[source] ResolveError),

    /// Input bytes were not valid UTF-8.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// A previous failure sealed this session; no further chunks are
    /// accepted.
    #[error("session already failed")]
    SessionFailed,

    /// I/O error in stream plumbing.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
