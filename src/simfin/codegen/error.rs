use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool fetches, reconciles, or writes the column names.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the fetched or local document is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when the columns document could not be downloaded.
    #[error("request for {url} failed: {message}")]
    Http { url: String, message: String },

    /// Raised when the document is valid JSON but not an array of records.
    #[error("unexpected document shape: {0}")]
    UnexpectedShape(String),

    /// Raised when a single record lacks a required field or has the wrong types.
    #[error("invalid column record at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised in strict mode when a shortcut is claimed more than once.
    #[error("found {count} duplicate shortcut(s)")]
    DuplicateShortcuts { count: usize },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
