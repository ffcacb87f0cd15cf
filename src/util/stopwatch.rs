//! Wall-clock stopwatch

use std::time::{Duration, Instant};

/// Elapsed-time stopwatch
///
/// Measures on the monotonic clock. While running, `elapsed` measures up to
/// now; after `stop`, it measures start to stop; after `reset`, it reports
/// zero.
///
/// # Example
/// ```
/// use fairq::StopWatch;
///
/// let mut sw = StopWatch::new();
/// sw.start();
/// // ... timed work ...
/// sw.stop();
/// let _d = sw.elapsed();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StopWatch {
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
}

impl StopWatch {
    /// Create a stopwatch that has never been started
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) timing from now
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
        self.stopped_at = None;
    }

    /// Stop timing; `elapsed` is frozen at this point
    pub fn stop(&mut self) {
        if self.started_at.is_some() {
            self.stopped_at = Some(Instant::now());
        }
    }

    /// Forget both marks; `elapsed` reports zero again
    pub fn reset(&mut self) {
        self.started_at = None;
        self.stopped_at = None;
    }

    /// Elapsed time between start and stop (or now, while still running)
    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.stopped_at) {
            (Some(start), Some(stop)) => stop.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }
}
