//! Error types for the pipeline crate
//!
//! Layers file- and record-level context over the core error. Every variant
//! carries enough to diagnose without re-running: path, 1-based row index,
//! and the offending raw value where applicable.

use std::path::PathBuf;
use thiserror::Error;

/// Pipeline error type
#[derive(Error, Debug)]
pub enum Error {
    /// Input path missing or not a regular file
    #[error("Signal source not found: {} does not exist or is not a file", path.display())]
    SourceNotFound { path: PathBuf },

    /// A row's first field failed numeric parsing; the whole load aborts
    #[error("Malformed record in {} at row {row}: cannot parse {value:?} as a float", path.display())]
    MalformedRecord {
        path: PathBuf,
        /// 1-based row index in the source file
        row: usize,
        value: String,
    },

    /// CSV-level read/write failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the core crate (invalid chunk size etc.)
    #[error(transparent)]
    Core(#[from] siglab_core::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
