//! Error types for the group domain model

use thiserror::Error;

/// Result type for group operations
pub type Result<T> = std::result::Result<T, Error>;

/// Group domain errors
#[derive(Error, Debug)]
pub enum Error {
    /// Expense failed boundary validation
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}
