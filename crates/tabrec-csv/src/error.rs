//! CSV loading error types

use thiserror::Error;

/// Result type for table loading operations
pub type TableResult<T> = std::result::Result<T, TableError>;

/// Errors that can occur while loading rows from a CSV table
#[derive(Debug, Error)]
pub enum TableError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The table has no header row to name fields with
    #[error("table has no header row")]
    MissingHeader,
}
