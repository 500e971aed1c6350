//! Error type for the serialization boundary.

use thiserror::Error;

/// Errors that can occur while loading snapshots or writing reports.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, PersistError>`.
pub type PersistResult<T> = Result<T, PersistError>;
