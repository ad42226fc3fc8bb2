//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Content store error
    ContentError(String),
    /// Processing error from the pipeline
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ContentError(msg) => write!(f, "Content error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let error = CliError::FileNotFound("test.dust".to_string());
        assert_eq!(error.to_string(), "File not found: test.dust");
    }

    #[test]
    fn invalid_pattern_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn content_error_display() {
        let error = CliError::ContentError("not valid JSON".to_string());
        assert_eq!(error.to_string(), "Content error: not valid JSON");
    }

    #[test]
    fn processing_error_display() {
        let error = CliError::ProcessingError("parse failed".to_string());
        assert_eq!(error.to_string(), "Processing error: parse failed");
    }

    #[test]
    fn error_trait_implementation() {
        let error = CliError::FileNotFound("test.dust".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{error:?}");
        assert!(debug_str.contains("FileNotFound"));
        assert!(debug_str.contains("test.dust"));
    }
}
