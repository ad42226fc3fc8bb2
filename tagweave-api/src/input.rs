//! Input abstraction for template processing
//!
//! Provides a unified interface for feeding template text from various
//! sources into the resolution pipeline.

use std::path::PathBuf;
use tokio::io::AsyncRead;

/// Unified input abstraction.
///
/// In-memory variants are chunked through the pipeline at the configured
/// chunk size; file and reader variants are streamed without loading the
/// whole source up front.
pub enum Input {
    /// Direct text string
    Text(String),
    /// File path to read from
    File(PathBuf),
    /// Bytes to process as UTF-8 text
    Bytes(Vec<u8>),
    /// Async reader (stdin, sockets, etc.)
    Reader(Box<dyn AsyncRead + Send + Unpin>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string.
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path.
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from an async reader.
    pub fn from_reader<R: AsyncRead + Send + Unpin + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// The input size, when knowable without reading.
    pub fn estimated_size(&self) -> Option<usize> {
        match self {
            Input::Text(text) => Some(text.len()),
            Input::Bytes(bytes) => Some(bytes.len()),
            Input::File(path) => std::fs::metadata(path).ok().map(|m| m.len() as usize),
            Input::Reader(_) => None,
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_owned())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}
