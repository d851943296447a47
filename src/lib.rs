//! Signal feature extraction toolkit
//!
//! Re-exports the workspace crates:
//!
//! - [`core`](siglab_core): chunking, per-chunk features, scalar math
//! - [`window`](siglab_window): moving-average / moving-median aggregators
//! - [`pipeline`](siglab_pipeline): config, CSV I/O, synthetic signals, the
//!   checkpointing driver
//!
//! ```
//! use signal_lab::core::{chunks, feature_vector};
//!
//! let samples = [1.0, -1.0, 1.0, -1.0, 0.5];
//! for chunk in chunks(&samples, 4).unwrap() {
//!     let fv = feature_vector(chunk);
//!     assert!(fv.rms >= 0.0);
//! }
//! ```

pub use siglab_core as core;
pub use siglab_pipeline as pipeline;
pub use siglab_window as window;
