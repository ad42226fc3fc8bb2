//! Scan-level error types

use thiserror::Error;

/// Errors raised by the tokenizer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Grammar violation inside a committed tag: an unexpected character
    /// after the tag name or attribute structure can no longer be read as
    /// literal text, or an unescaped quote inside an unquoted value.
    #[error("malformed tag at byte offset {position}")]
    MalformedTag {
        /// Byte offset of the offending character, counted across every
        /// chunk fed into the tokenizer since construction.
        position: usize,
    },

    /// `close` or `finish` called on an already-closed tokenizer without an
    /// intervening `resume`.
    #[error("tokenizer already closed")]
    DoubleClose,

    /// `feed` called after `close` without an intervening `resume`.
    #[error("cannot feed after close")]
    ClosedWrite,
}

/// Result type for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;
