//! Core signal feature extraction
//!
//! Leaf crate of the signal-lab workspace. Provides fixed-size chunking of
//! sample sequences, per-chunk summary features (RMS, zero crossings,
//! peak-to-peak, mean absolute difference), and scalar math helpers. No I/O;
//! file handling lives in `siglab-pipeline`.

pub mod chunk;
pub mod error;
pub mod features;
pub mod math;

pub use chunk::{chunks, Chunks};
pub use error::{Error, Result};
pub use features::{feature_vector, FeatureVector};
