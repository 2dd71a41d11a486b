//! Error types for the converter.
//!
//! Fatal errors abort a run before any output is written. Per-element
//! extraction errors use the same type but are caught and counted by the
//! converter instead of being propagated.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// Batch size must be a positive integer.
    #[error("Invalid batch size: {0}. Expected a positive integer (e.g., 2000)")]
    InvalidBatchSize(usize),

    /// Input document could not be read or is not valid UTF-8.
    #[error("Failed to read input {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be written.
    #[error("Failed to write output {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A matched element could not be turned into a record.
    #[error("Malformed vocabulary element #{index}: {reason}")]
    MalformedElement { index: usize, reason: String },

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConverterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConverterError::InvalidBatchSize(0);
        assert!(err.to_string().contains('0'));
        assert!(err.to_string().contains("positive integer"));
    }

    #[test]
    fn test_read_input_includes_path() {
        let err = ConverterError::ReadInput {
            path: PathBuf::from("missing.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read input missing.html: not found"
        );
    }

    #[test]
    fn test_malformed_element_display() {
        let err = ConverterError::MalformedElement {
            index: 3,
            reason: "nested card".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed vocabulary element #3: nested card"
        );
    }
}
