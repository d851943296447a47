//! Scoped timing and error-suppression wrappers
//!
//! Explicit replacements for decorator/context-manager idioms: the timer is
//! a Drop guard, so the elapsed-time log fires on every exit path, including
//! panics unwinding through the scope.

use std::time::Instant;
use tracing::{error, info, warn};

/// Logs elapsed milliseconds for `label` when dropped.
#[derive(Debug)]
pub struct TimerGuard {
    label: &'static str,
    threshold_ms: Option<f64>,
    start: Instant,
}

impl TimerGuard {
    /// Start timing a scope.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            threshold_ms: None,
            start: Instant::now(),
        }
    }

    /// Start timing with a slow-path threshold; exceeding it logs WARN
    /// instead of INFO.
    pub fn with_threshold(label: &'static str, threshold_ms: f64) -> Self {
        Self {
            label,
            threshold_ms: Some(threshold_ms),
            start: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the guard was created.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        let ms = self.elapsed_ms();
        match self.threshold_ms {
            Some(threshold) if ms > threshold => {
                warn!("SLOW: {} took {ms:.2} ms (threshold {threshold:.2} ms)", self.label);
            }
            _ => info!("{} took {ms:.2} ms", self.label),
        }
    }
}

/// Run `f` inside a [`TimerGuard`], returning its result alongside the
/// elapsed milliseconds.
pub fn timed<T>(label: &'static str, f: impl FnOnce() -> T) -> (T, f64) {
    let guard = TimerGuard::new(label);
    let result = f();
    let ms = guard.elapsed_ms();
    (result, ms)
}

/// Like [`timed`], but logs WARN with a slow-path message when the elapsed
/// time exceeds `threshold_ms`.
pub fn timed_with_threshold<T>(
    label: &'static str,
    threshold_ms: f64,
    f: impl FnOnce() -> T,
) -> (T, f64) {
    let guard = TimerGuard::with_threshold(label, threshold_ms);
    let result = f();
    let ms = guard.elapsed_ms();
    (result, ms)
}

/// Run a fallible closure, logging and discarding its error.
///
/// Returns `None` on error. The discard is deliberate policy: use this only
/// where an operation is genuinely optional, since the caller never sees the
/// failure.
pub fn suppress_and_log<T, E: std::fmt::Display>(
    label: &'static str,
    f: impl FnOnce() -> std::result::Result<T, E>,
) -> Option<T> {
    match f() {
        Ok(value) => Some(value),
        Err(err) => {
            error!("suppressed error in {label}: {err}");
            None
        }
    }
}
