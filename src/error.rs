//! Unified error types for convsplit.
//!
//! This module provides a single [`ConvsplitError`] enum that covers all error
//! cases in the library, so callers can match on one type whether the failure
//! came from reading the dataset, parsing a timestamp or partitioning a record.
//!
//! # Error categories
//!
//! - **Input shape**: the dataset is not a JSON array of conversations
//! - **Record data**: a timestamp that cannot be parsed, or content messages
//!   that do not line up with the full-metadata messages
//! - **Configuration**: an unusable gap threshold
//!
//! Missing fields inside a record are never errors; they fall back to empty
//! or absent values.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for convsplit operations.
///
/// # Example
///
/// ```rust
/// use convsplit::error::Result;
/// use convsplit::Conversation;
///
/// fn load() -> Result<Vec<Conversation>> {
///     convsplit::parse_dataset("[]")
/// }
///
/// assert!(load().unwrap().is_empty());
/// ```
pub type Result<T> = std::result::Result<T, ConvsplitError>;

/// The error type for all convsplit operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvsplitError {
    /// An I/O error occurred while reading or writing a dataset file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not have the expected structure.
    ///
    /// Raised before any record is processed, e.g. when the top-level JSON
    /// value is an object instead of an array of conversations.
    #[error("Invalid {format} format: {message}{}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    InvalidFormat {
        /// What was being read (e.g. "dataset")
        format: &'static str,
        /// Description of what's wrong
        message: String,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A message carries a timestamp that is not ISO-8601.
    #[error("Invalid timestamp '{input}' at message {position}. Expected ISO-8601, e.g. 2024-01-01T00:00:00Z")]
    InvalidTimestamp {
        /// The raw timestamp string
        input: String,
        /// Index of the message within `full_metadata_messages`
        position: usize,
    },

    /// The gap threshold is not a positive, finite number of days.
    #[error("Invalid gap threshold {value}: must be a positive number of days")]
    InvalidThreshold {
        /// The rejected value
        value: f64,
    },

    /// `openai_messages` was not derived from `full_metadata_messages` by the
    /// non-empty-content rule.
    #[error("Content messages do not match full metadata messages: {message}")]
    Correspondence {
        /// Description of the mismatch
        message: String,
    },

    /// Partitioning a specific record of a dataset failed.
    #[error("Conversation {index}: {source}")]
    Record {
        /// 0-based index of the record in the input dataset
        index: usize,
        /// What went wrong with it
        #[source]
        source: Box<ConvsplitError>,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ConvsplitError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ConvsplitError::InvalidFormat {
            format,
            message: message.into(),
            path: None,
        }
    }

    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(input: impl Into<String>, position: usize) -> Self {
        ConvsplitError::InvalidTimestamp {
            input: input.into(),
            position,
        }
    }

    /// Creates an invalid threshold error.
    pub fn invalid_threshold(value: f64) -> Self {
        ConvsplitError::InvalidThreshold { value }
    }

    /// Creates a correspondence error.
    pub fn correspondence(message: impl Into<String>) -> Self {
        ConvsplitError::Correspondence {
            message: message.into(),
        }
    }

    /// Wraps an error with the index of the record that caused it.
    pub fn in_record(self, index: usize) -> Self {
        ConvsplitError::Record {
            index,
            source: Box::new(self),
        }
    }

    /// Attaches a file path to an [`InvalidFormat`](Self::InvalidFormat) error.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            ConvsplitError::InvalidFormat {
                format, message, ..
            } => ConvsplitError::InvalidFormat {
                format,
                message,
                path: Some(file.into()),
            },
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ConvsplitError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ConvsplitError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a timestamp error, including one wrapped in
    /// a [`Record`](Self::Record) error.
    pub fn is_invalid_timestamp(&self) -> bool {
        match self {
            ConvsplitError::InvalidTimestamp { .. } => true,
            ConvsplitError::Record { source, .. } => source.is_invalid_timestamp(),
            _ => false,
        }
    }

    /// Returns `true` if this is a correspondence error, including one
    /// wrapped in a [`Record`](Self::Record) error.
    pub fn is_correspondence(&self) -> bool {
        match self {
            ConvsplitError::Correspondence { .. } => true,
            ConvsplitError::Record { source, .. } => source.is_correspondence(),
            _ => false,
        }
    }

    /// Returns the index of the failing record, if known.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            ConvsplitError::Record { index, .. } => Some(*index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ConvsplitError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
        assert!(err.is_io());
    }

    #[test]
    fn test_json_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ConvsplitError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_invalid_format_with_path() {
        let err = ConvsplitError::invalid_format("dataset", "expected a JSON array")
            .with_path("/data/all.json");
        let display = err.to_string();
        assert!(display.contains("dataset"));
        assert!(display.contains("expected a JSON array"));
        assert!(display.contains("/data/all.json"));
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_invalid_format_without_path() {
        let err = ConvsplitError::invalid_format("dataset", "expected a JSON array");
        assert!(!err.to_string().contains("file:"));
    }

    #[test]
    fn test_with_path_leaves_other_variants() {
        let err = ConvsplitError::invalid_threshold(0.0).with_path("x.json");
        assert!(matches!(err, ConvsplitError::InvalidThreshold { .. }));
    }

    #[test]
    fn test_invalid_timestamp_display() {
        let err = ConvsplitError::invalid_timestamp("yesterday", 3);
        let display = err.to_string();
        assert!(display.contains("yesterday"));
        assert!(display.contains("message 3"));
        assert!(err.is_invalid_timestamp());
    }

    #[test]
    fn test_invalid_threshold_display() {
        let err = ConvsplitError::invalid_threshold(-1.5);
        assert!(err.to_string().contains("-1.5"));
    }

    #[test]
    fn test_record_wraps_source() {
        use std::error::Error;

        let err = ConvsplitError::correspondence("3 content messages, expected 2").in_record(4);
        assert_eq!(err.record_index(), Some(4));
        assert!(err.is_correspondence());
        assert!(!err.is_invalid_timestamp());
        assert!(err.to_string().starts_with("Conversation 4:"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_debug() {
        let err = ConvsplitError::invalid_threshold(0.0);
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidThreshold"));
    }
}
