//! Common error types for EMS

use thiserror::Error;

/// Common result type for EMS operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across EMS crates
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    ///
    /// Connection failures, rejected statements and constraint violations
    /// all land here.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
