//! Error types for student-records
//!
//! Every variant renders as a message fit to show the user directly.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// student-records error types
#[derive(Error, Debug)]
pub enum Error {
    /// Rejected field values (empty name/grade, non-positive id)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// No record matches the id as entered
    #[error("Student not found (id {0:?}).")]
    NotFound(String),

    /// Data file content does not decode as a record collection
    #[error("Corrupt data file: {0}")]
    Corrupt(String),

    /// Data file written by a newer (or unknown) format revision
    #[error("Unsupported data file version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version stored in the file
        found: u16,
        /// Version this build reads and writes
        expected: u16,
    },

    /// Invalid deployment configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
