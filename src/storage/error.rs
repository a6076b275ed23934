use std::io;
use thiserror::Error;

/// Errors produced by the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A record with this roll number already exists.
    #[error("Duplicate roll number: {0}")]
    DuplicateKey(u32),

    /// No record with this roll number.
    #[error("Student not found: {0}")]
    NotFound(u32),

    /// A line in the data file could not be parsed.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
