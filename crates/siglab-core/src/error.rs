//! Error types for signal processing
//!
//! Provides a unified error type for the siglab crates.

use thiserror::Error;

/// Core error type for signal processing operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a non-positive size parameter
    pub fn non_positive_size(name: &str, value: usize) -> Self {
        Self::InvalidParameter(format!("{name} must be positive, got {value}"))
    }
}
