//! Storage error types for mind-store.
//!
//! Only write paths surface these. Load recovers from every read failure.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The file parsed as CSV but does not fit the log layout.
    #[error("Malformed mood log: {0}")]
    Malformed(String),

    /// Renaming the temp file over the log failed.
    #[error("Failed to replace mood log: {0}")]
    Persist(#[from] tempfile::PersistError),
}
