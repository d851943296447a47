//! Bounded trailing-window buffer
//!
//! An explicit stateful object replacing the send-a-value-get-a-value
//! generator idiom: each [`observe`](SlidingWindow::observe) appends one
//! sample, evicts the oldest past capacity, and returns the configured
//! statistic over the window's present contents.

use std::collections::VecDeque;

use siglab_core::{Error, Result};

use crate::traits::WindowStatistic;

/// A trailing window of the `capacity` most recent observations, paired with
/// a statistic policy.
///
/// Owned by a single logical caller; `observe` takes `&mut self`, so sharing
/// across threads requires external synchronization.
#[derive(Debug, Clone)]
pub struct SlidingWindow<S: WindowStatistic> {
    stat: S,
    buffer: VecDeque<f64>,
    capacity: usize,
}

impl<S: WindowStatistic> SlidingWindow<S> {
    /// Create a window of the given capacity.
    ///
    /// Fails with [`Error::InvalidParameter`] when `capacity` is zero.
    pub fn new(stat: S, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::non_positive_size("window size", capacity));
        }
        Ok(Self {
            stat,
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Record one observation and return the statistic over the updated
    /// window contents.
    pub fn observe(&mut self, value: f64) -> f64 {
        if self.buffer.len() == self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(value);
        self.stat.compute(self.buffer.make_contiguous())
    }

    /// The statistic over the current contents, or `None` before the first
    /// observation.
    pub fn current(&mut self) -> Option<f64> {
        if self.buffer.is_empty() {
            return None;
        }
        Some(self.stat.compute(self.buffer.make_contiguous()))
    }

    /// Discard all buffered observations.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Number of buffered observations, always `<= capacity()`.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True before the first observation (and after `reset`).
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The configured window size W.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Name of the underlying statistic policy.
    pub fn statistic_name(&self) -> &'static str {
        self.stat.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Mean, Median};
    use proptest::prelude::*;

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            SlidingWindow::new(Mean, 0),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_no_data_sentinel_before_first_observe() {
        let mut w = SlidingWindow::new(Mean, 3).unwrap();
        assert_eq!(w.current(), None);
        w.observe(1.0);
        assert_eq!(w.current(), Some(1.0));
    }

    #[test]
    fn test_reset_returns_to_empty_state() {
        let mut w = SlidingWindow::new(Median, 2).unwrap();
        w.observe(5.0);
        w.reset();
        assert!(w.is_empty());
        assert_eq!(w.current(), None);
    }

    #[test]
    fn test_eviction_drops_oldest() {
        let mut w = SlidingWindow::new(Mean, 2).unwrap();
        w.observe(1.0);
        w.observe(2.0);
        // 1.0 evicted; mean over [2.0, 3.0]
        assert_eq!(w.observe(3.0), 2.5);
        assert_eq!(w.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_len_never_exceeds_capacity(
            values in proptest::collection::vec(-1e6f64..1e6, 0..100),
            capacity in 1usize..16,
        ) {
            let mut w = SlidingWindow::new(Mean, capacity).unwrap();
            for v in values {
                w.observe(v);
                prop_assert!(w.len() <= capacity);
            }
        }
    }
}
