//! Core trait for window statistics

/// A statistic computed over the current contents of a trailing window.
///
/// Implementations are pure policies; all buffer maintenance (appending,
/// evicting the oldest sample past capacity) lives in
/// [`SlidingWindow`](crate::SlidingWindow), so adding a new statistic never
/// duplicates window-management code.
pub trait WindowStatistic {
    /// Get the name of this statistic
    fn name(&self) -> &'static str;

    /// Compute the statistic over the window contents in arrival order.
    ///
    /// Only called with a non-empty window.
    fn compute(&self, window: &[f64]) -> f64;
}
