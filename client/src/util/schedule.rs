//! Cancellable one-shot timers for widget side effects.
//!
//! DESIGN
//! ======
//! A [`TaskScope`] is a shared cancellation flag owned by a mounted component.
//! Callbacks scheduled through it check the flag right before running, so
//! cancelling the scope in `on_cleanup` turns every still-pending timer into a
//! no-op instead of letting it write into torn-down signals.
//!
//! Timers only exist in the browser. Under SSR `schedule` drops the callback;
//! `guard` is the testable core either way.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug, Default)]
pub struct TaskScope {
    cancelled: Arc<AtomicBool>,
}

impl TaskScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel every callback scheduled through this scope (or its clones).
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Wrap `f` so it only runs if the scope is still live at call time.
    ///
    /// Returns whether `f` ran.
    pub fn guard<F>(&self, f: F) -> impl FnOnce() -> bool + 'static
    where
        F: FnOnce() + 'static,
    {
        let scope = self.clone();
        move || {
            if scope.is_cancelled() {
                return false;
            }
            f();
            true
        }
    }

    /// Run `f` after `delay_ms` unless the scope is cancelled first.
    pub fn schedule<F>(&self, delay_ms: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        let task = self.guard(f);
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::callback::Timeout::new(delay_ms, move || {
                let _ = task();
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, task);
        }
    }
}
