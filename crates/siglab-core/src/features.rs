//! Per-chunk feature extraction
//!
//! Computes four scalar summary statistics over a chunk of samples: RMS,
//! zero-crossing count, peak-to-peak amplitude, and mean absolute difference
//! between adjacent samples.

use std::fmt;

/// Summary statistics for one chunk of samples.
///
/// All four values are finite for any finite input chunk and all zero for an
/// empty chunk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    /// Root mean square, `sqrt(mean(x^2))`
    pub rms: f64,
    /// Number of adjacent-pair sign changes (stored as f64 for uniform rows)
    pub zero_crossings: f64,
    /// `max(x) - min(x)`
    pub peak_to_peak: f64,
    /// Mean of `|x[i] - x[i-1]|` over adjacent pairs
    pub mean_abs_diff: f64,
}

impl FeatureVector {
    /// The all-zero vector produced for an empty chunk
    pub fn zero() -> Self {
        Self {
            rms: 0.0,
            zero_crossings: 0.0,
            peak_to_peak: 0.0,
            mean_abs_diff: 0.0,
        }
    }

    /// Fields in output order: rms, zero_crossings, peak_to_peak, mad
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.rms,
            self.zero_crossings,
            self.peak_to_peak,
            self.mean_abs_diff,
        ]
    }

    /// Rebuild a vector from fields in output order
    pub fn from_array(values: [f64; 4]) -> Self {
        Self {
            rms: values[0],
            zero_crossings: values[1],
            peak_to_peak: values[2],
            mean_abs_diff: values[3],
        }
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FeatureVector(rms={:.4}, zc={}, p2p={:.4}, mad={:.4})",
            self.rms, self.zero_crossings, self.peak_to_peak, self.mean_abs_diff
        )
    }
}

/// Sign with the convention sign(0) = 0, matching the usual signal-processing
/// definition. Negative zero maps to 0.
fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Compute the feature vector for one chunk.
///
/// Pure function of the chunk contents. Pairwise statistics (zero crossings,
/// mean absolute difference) are 0 when the chunk has fewer than two samples;
/// a transition into or out of an exact zero counts as a crossing.
pub fn feature_vector(chunk: &[f64]) -> FeatureVector {
    if chunk.is_empty() {
        return FeatureVector::zero();
    }

    let n = chunk.len() as f64;
    let sum_sq: f64 = chunk.iter().map(|x| x * x).sum();
    let rms = (sum_sq / n).sqrt();

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &x in chunk {
        min = min.min(x);
        max = max.max(x);
    }

    let mut crossings = 0usize;
    let mut abs_diff_sum = 0.0;
    for pair in chunk.windows(2) {
        if sign(pair[0]) != sign(pair[1]) {
            crossings += 1;
        }
        abs_diff_sum += (pair[1] - pair[0]).abs();
    }
    let mean_abs_diff = if chunk.len() > 1 {
        abs_diff_sum / (chunk.len() - 1) as f64
    } else {
        0.0
    };

    FeatureVector {
        rms,
        zero_crossings: crossings as f64,
        peak_to_peak: max - min,
        mean_abs_diff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_chunk_is_all_zero() {
        assert_eq!(feature_vector(&[]), FeatureVector::zero());
    }

    #[test]
    fn test_singleton_chunk() {
        let fv = feature_vector(&[-3.5]);
        assert_relative_eq!(fv.rms, 3.5);
        assert_eq!(fv.zero_crossings, 0.0);
        assert_eq!(fv.peak_to_peak, 0.0);
        assert_eq!(fv.mean_abs_diff, 0.0);
    }

    #[test]
    fn test_alternating_unit_signal() {
        let fv = feature_vector(&[1.0, -1.0, 1.0, -1.0]);
        assert_relative_eq!(fv.rms, 1.0);
        assert_eq!(fv.zero_crossings, 3.0);
        assert_relative_eq!(fv.peak_to_peak, 2.0);
        assert_relative_eq!(fv.mean_abs_diff, 2.0);
    }

    #[test]
    fn test_transitions_through_zero_count() {
        // -1 -> 0 and 0 -> 1 are both crossings under sign(0) = 0
        let fv = feature_vector(&[-1.0, 0.0, 1.0]);
        assert_eq!(fv.zero_crossings, 2.0);
    }

    #[test]
    fn test_negative_zero_treated_as_zero() {
        let fv = feature_vector(&[0.0, -0.0]);
        assert_eq!(fv.zero_crossings, 0.0);
    }

    #[test]
    fn test_constant_signal() {
        let fv = feature_vector(&[2.0, 2.0, 2.0]);
        assert_relative_eq!(fv.rms, 2.0);
        assert_eq!(fv.zero_crossings, 0.0);
        assert_eq!(fv.peak_to_peak, 0.0);
        assert_eq!(fv.mean_abs_diff, 0.0);
    }

    #[test]
    fn test_finite_output_for_finite_input() {
        let chunk: Vec<f64> = (0..1000).map(|i| ((i as f64) * 0.37).sin() * 1e6).collect();
        let fv = feature_vector(&chunk);
        assert!(fv.as_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_array_round_trip() {
        let fv = feature_vector(&[1.0, -2.0, 3.0]);
        assert_eq!(FeatureVector::from_array(fv.as_array()), fv);
    }
}
