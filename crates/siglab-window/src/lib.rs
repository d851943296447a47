//! Windowed online aggregators
//!
//! A bounded trailing-window buffer ([`SlidingWindow`]) generic over a
//! statistic policy ([`WindowStatistic`]), with [`Mean`] and [`Median`]
//! policies. The window keeps the W most recent observations, evicting the
//! oldest first; each `observe` returns the statistic over the current
//! contents.
//!
//! ```
//! use siglab_window::moving_average;
//!
//! let mut avg = moving_average(3).unwrap();
//! assert_eq!(avg.observe(1.0), 1.0);
//! assert_eq!(avg.observe(2.0), 1.5);
//! assert_eq!(avg.observe(3.0), 2.0);
//! assert_eq!(avg.observe(4.0), 3.0); // 1.0 evicted
//! ```

pub mod stats;
pub mod traits;
pub mod window;

pub use stats::{moving_average, moving_median, Mean, Median};
pub use traits::WindowStatistic;
pub use window::SlidingWindow;
