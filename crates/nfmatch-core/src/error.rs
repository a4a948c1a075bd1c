//! Error types for the nfmatch-core library.
//!
//! The matching pipeline itself never fails a batch: missing folders,
//! unreadable directory entries and copy failures all degrade to entries
//! in the report structures. `Error` covers configuration I/O and caller
//! contract violations only.

use thiserror::Error as ThisError;

/// Main error type for the nfmatch library.
#[derive(ThisError, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The caller supplied a batch outside the supported bounds.
    #[error("invalid batch: {0}")]
    InvalidBatch(String),

    /// A date string could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Result type for the nfmatch library.
pub type Result<T> = std::result::Result<T, Error>;
