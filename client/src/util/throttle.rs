//! Leading + trailing throttle for high-frequency scroll events.
//!
//! The first tick runs at once. Ticks arriving inside the interval are
//! collapsed into a single trailing run at the end of the window, so the final
//! scroll position is always processed.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

/// Minimum spacing between processed scroll ticks (one frame at 60 Hz).
pub const SCROLL_THROTTLE_MS: f64 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThrottleDecision {
    /// Process this tick now.
    Run,
    /// Schedule a trailing run after this many milliseconds.
    Defer(f64),
    /// A trailing run is already scheduled; drop this tick.
    Skip,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Throttle {
    interval_ms: f64,
    last_run_ms: Option<f64>,
    trailing_scheduled: bool,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(SCROLL_THROTTLE_MS)
    }
}

impl Throttle {
    #[must_use]
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms, last_run_ms: None, trailing_scheduled: false }
    }

    /// Decide what to do with a tick observed at `now_ms`.
    pub fn admit(&mut self, now_ms: f64) -> ThrottleDecision {
        if self.trailing_scheduled {
            return ThrottleDecision::Skip;
        }
        match self.last_run_ms {
            Some(last) if now_ms - last < self.interval_ms => {
                self.trailing_scheduled = true;
                ThrottleDecision::Defer(self.interval_ms - (now_ms - last))
            }
            _ => {
                self.last_run_ms = Some(now_ms);
                ThrottleDecision::Run
            }
        }
    }

    /// Record that the deferred trailing run fired at `now_ms`.
    pub fn trailing_fired(&mut self, now_ms: f64) {
        self.trailing_scheduled = false;
        self.last_run_ms = Some(now_ms);
    }
}
