//! Feature extraction pipeline
//!
//! Glue around `siglab-core`: configuration, single-column CSV signal I/O,
//! synthetic signal generation, a checkpointing pipeline driver, and scoped
//! timing / error-suppression guards. All logging goes through `tracing`;
//! no component installs a subscriber, so embedders and tests control
//! output.

pub mod config;
pub mod driver;
pub mod error;
pub mod guard;
pub mod io;
pub mod synth;

pub use config::Config;
pub use driver::{run_pipeline, CsvSink, FeatureSink};
pub use error::{Error, Result};
pub use guard::{suppress_and_log, timed, timed_with_threshold, TimerGuard};
pub use io::{load_features_csv, load_signal_csv, save_features_csv, save_signal_csv};
pub use synth::{generate_signal, generate_signal_seeded};
