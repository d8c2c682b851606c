//! Error types for w2dss-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the w2dss-io crate.
///
/// Covers missing files, read and write failures, malformed W2 records,
/// invalid reader configuration and JSON serialization.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps a read or write failure on a specific file.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Returned when a record field is not a number.
    #[error("line {line}, column {column}: cannot parse '{field}' as a number")]
    Parse {
        /// 1-based line number in the input text.
        line: usize,
        /// 0-based column index within the record.
        column: usize,
        /// The offending field.
        field: String,
    },

    /// Returned when a record has fewer columns than the reader needs.
    #[error("line {line}: expected column {column}, found only {found} field(s)")]
    MissingColumn {
        /// 1-based line number in the input text.
        line: usize,
        /// 0-based column index that was requested.
        column: usize,
        /// Number of fields present on the line.
        found: usize,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Wraps a JSON serialization failure.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying serde_json failure.
        reason: String,
    },
}

impl IoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            reason: e.to_string(),
        }
    }
}
