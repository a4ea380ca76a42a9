//! Error types for the impulso crates.
//!
//! This module defines the error type shared by every indicator, covering
//! parameter validation, malformed input series and table operations.

use thiserror::Error;

/// The main error type for impulso operations.
#[derive(Debug, Error)]
pub enum ImpulsoError {
    /// A parameter is outside its accepted set or range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when a required column is missing from a table.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for ImpulsoError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for ImpulsoError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for impulso operations.
pub type Result<T> = std::result::Result<T, ImpulsoError>;
