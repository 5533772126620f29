//! Lightweight wall-clock timing for run reporting.
//!
//! Printing is opt-in via the `OSC_TIMING` environment variable or
//! [`enable_timing`]; measuring is always on so callers can report
//! elapsed time themselves.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable timing printouts globally.
pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Disable timing printouts globally.
pub fn disable_timing() {
    ENABLED.store(false, Ordering::Relaxed);
}

/// Check if timing printouts are enabled.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed) || std::env::var("OSC_TIMING").is_ok()
}

/// A simple timer that measures elapsed time.
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// Create and start a new timer with the given label.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Seconds since the timer started.
    pub fn elapsed_s(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Stop the timer, print the result if enabled, and return elapsed seconds.
    pub fn stop_and_print(self) -> f64 {
        let elapsed = self.elapsed_s();
        if is_enabled() {
            println!("[TIMING] {}: {:.3}s", self.label, elapsed);
        }
        elapsed
    }
}
