//! Pipeline configuration

use serde::{Deserialize, Serialize};
use siglab_core::{Error, Result};

/// Configuration for signal generation and the feature pipeline.
///
/// Defaults match the reference lab setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Nominal sampling rate of generated signals, in Hz. Informational;
    /// the feature algorithms never consume it.
    pub sample_rate: u32,
    /// Nominal duration of generated signals, in seconds
    pub duration_s: f64,
    /// Standard deviation of additive Gaussian noise for generated signals
    pub noise_std: f64,
    /// Default window size for the moving-median aggregator
    pub median_window: usize,
    /// Chunk size for the feature pipeline
    pub chunk_size: usize,
    /// Number of chunks between incremental output checkpoints
    pub checkpoint_interval: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_rate: 1000,
            duration_s: 2.0,
            noise_std: 0.15,
            median_window: 11,
            chunk_size: 256,
            checkpoint_interval: 10,
        }
    }
}

impl Config {
    /// Fail fast on sizes the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::non_positive_size("chunk size", self.chunk_size));
        }
        if self.median_window == 0 {
            return Err(Error::non_positive_size("window size", self.median_window));
        }
        if self.checkpoint_interval == 0 {
            return Err(Error::non_positive_size(
                "checkpoint interval",
                self.checkpoint_interval,
            ));
        }
        Ok(())
    }
}
