//! Pipeline driver
//!
//! Drives a sample sequence through the chunker and feature extractor,
//! collecting one feature row per chunk and checkpointing the accumulated
//! rows to a sink every `checkpoint_interval` chunks.

use std::path::{Path, PathBuf};

use siglab_core::{chunks, feature_vector, FeatureVector};
use tracing::{debug, info};

use crate::error::Result;
use crate::io::save_features_csv;

/// Persistence collaborator for the driver.
///
/// `persist` receives ALL rows accumulated so far and must overwrite the
/// destination in full; checkpoints are cumulative snapshots, not deltas.
pub trait FeatureSink {
    fn persist(&mut self, rows: &[FeatureVector]) -> Result<()>;
}

/// Sink writing cumulative snapshots to one CSV file.
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeatureSink for CsvSink {
    fn persist(&mut self, rows: &[FeatureVector]) -> Result<()> {
        save_features_csv(&self.path, rows)?;
        debug!(rows = rows.len(), path = %self.path.display(), "checkpoint written");
        Ok(())
    }
}

/// Run the feature pipeline over an in-memory sample sequence.
///
/// Chunks `samples` at `chunk_size`, computes one [`FeatureVector`] per chunk
/// in order, and hands the full accumulation to `sink` on every
/// `checkpoint_interval`-th chunk. Returns all collected rows.
///
/// Persistence fires only on checkpoint boundaries: when the total chunk
/// count is not a multiple of `checkpoint_interval`, the trailing rows are
/// returned but never flushed by this function. Callers wanting a complete
/// file must persist the returned rows themselves (the CLI does).
pub fn run_pipeline<S: FeatureSink>(
    samples: &[f64],
    sink: &mut S,
    chunk_size: usize,
    checkpoint_interval: usize,
) -> Result<Vec<FeatureVector>> {
    if checkpoint_interval == 0 {
        return Err(siglab_core::Error::non_positive_size(
            "checkpoint interval",
            checkpoint_interval,
        )
        .into());
    }

    info!(
        samples = samples.len(),
        chunk_size, "running feature extraction pipeline"
    );

    let mut rows = Vec::new();
    for (i, chunk) in chunks(samples, chunk_size)?.enumerate() {
        rows.push(feature_vector(chunk));
        if (i + 1) % checkpoint_interval == 0 {
            debug!(chunks = i + 1, "processed chunks");
            sink.persist(&rows)?;
        }
    }

    info!(rows = rows.len(), "feature extraction complete");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the row count of every persist call.
    #[derive(Default)]
    struct RecordingSink {
        snapshots: Vec<usize>,
    }

    impl FeatureSink for RecordingSink {
        fn persist(&mut self, rows: &[FeatureVector]) -> Result<()> {
            self.snapshots.push(rows.len());
            Ok(())
        }
    }

    #[test]
    fn test_thousand_samples_at_256_gives_four_chunks() {
        let samples: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.01).sin()).collect();
        let mut sink = RecordingSink::default();
        let rows = run_pipeline(&samples, &mut sink, 256, 10).unwrap();

        // Chunk lengths 256, 256, 256, 232
        assert_eq!(rows.len(), 4);
        assert!(rows
            .iter()
            .all(|r| r.as_array().iter().all(|v| v.is_finite())));
    }

    #[test]
    fn test_partial_final_batch_not_flushed() {
        // 4 chunks with interval 10: no checkpoint boundary is reached
        let samples = vec![0.0; 1000];
        let mut sink = RecordingSink::default();
        let rows = run_pipeline(&samples, &mut sink, 256, 10).unwrap();
        assert_eq!(rows.len(), 4);
        assert!(sink.snapshots.is_empty());
    }

    #[test]
    fn test_checkpoints_are_cumulative() {
        // 20 chunks of 8 samples with interval 10: checkpoints at 10 and 20
        let samples = vec![1.0; 160];
        let mut sink = RecordingSink::default();
        let rows = run_pipeline(&samples, &mut sink, 8, 10).unwrap();
        assert_eq!(rows.len(), 20);
        assert_eq!(sink.snapshots, vec![10, 20]);
    }

    #[test]
    fn test_empty_input_yields_no_rows_and_no_checkpoints() {
        let mut sink = RecordingSink::default();
        let rows = run_pipeline(&[], &mut sink, 256, 10).unwrap();
        assert!(rows.is_empty());
        assert!(sink.snapshots.is_empty());
    }

    #[test]
    fn test_invalid_sizes_fail_before_work() {
        let mut sink = RecordingSink::default();
        assert!(run_pipeline(&[1.0], &mut sink, 0, 10).is_err());
        assert!(run_pipeline(&[1.0], &mut sink, 4, 0).is_err());
        assert!(sink.snapshots.is_empty());
    }
}
