//! Statistic policies for the sliding window

use crate::traits::WindowStatistic;
use crate::window::SlidingWindow;
use siglab_core::Result;

/// Arithmetic mean of the window contents
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl WindowStatistic for Mean {
    fn name(&self) -> &'static str {
        "mean"
    }

    fn compute(&self, window: &[f64]) -> f64 {
        window.iter().sum::<f64>() / window.len() as f64
    }
}

/// Statistical median of the window contents.
///
/// Sorts a scratch copy per call; for an even-length window the result is
/// the average of the two middle values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Median;

impl WindowStatistic for Median {
    fn name(&self) -> &'static str {
        "median"
    }

    fn compute(&self, window: &[f64]) -> f64 {
        let mut sorted = window.to_vec();
        sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        }
    }
}

/// Moving average over a trailing window of `window` samples
pub fn moving_average(window: usize) -> Result<SlidingWindow<Mean>> {
    SlidingWindow::new(Mean, window)
}

/// Moving median over a trailing window of `window` samples
pub fn moving_median(window: usize) -> Result<SlidingWindow<Median>> {
    SlidingWindow::new(Median, window)
}
