//! Scalar math helpers
//!
//! Two RMS implementations with identical results: a straightforward
//! iterator fold and a manually unrolled variant that gives the optimizer
//! independent accumulator chains. The CLI `profile` command times them
//! against each other.

/// Root mean square of a sample slice, 0.0 for empty input.
pub fn rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|x| x * x).sum();
    (sum_sq / samples.len() as f64).sqrt()
}

/// RMS with four independent accumulators.
///
/// Numerically equivalent to [`rms`] up to floating-point reassociation.
pub fn rms_unrolled(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut acc = [0.0f64; 4];
    let mut iter = samples.chunks_exact(4);
    for lane in iter.by_ref() {
        acc[0] += lane[0] * lane[0];
        acc[1] += lane[1] * lane[1];
        acc[2] += lane[2] * lane[2];
        acc[3] += lane[3] * lane[3];
    }
    let mut sum_sq = acc[0] + acc[1] + acc[2] + acc[3];
    for &x in iter.remainder() {
        sum_sq += x * x;
    }
    (sum_sq / samples.len() as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rms_empty() {
        assert_eq!(rms(&[]), 0.0);
        assert_eq!(rms_unrolled(&[]), 0.0);
    }

    #[test]
    fn test_rms_known_values() {
        assert_relative_eq!(rms(&[3.0, 4.0]), (12.5f64).sqrt());
        assert_relative_eq!(rms(&[1.0, -1.0, 1.0, -1.0]), 1.0);
    }

    #[test]
    fn test_unrolled_matches_simple() {
        let data: Vec<f64> = (0..103).map(|i| (i as f64 * 0.11).sin()).collect();
        assert_relative_eq!(rms(&data), rms_unrolled(&data), epsilon = 1e-12);
    }
}
