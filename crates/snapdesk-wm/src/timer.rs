//! Cancelable one-shot timers on a caller-driven clock.
//!
//! The host passes a monotonic `now` on every tick; nothing here reads the
//! system clock, so behavior is deterministic under test.

use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Duration>,
}

impl Timer {
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer, replacing any pending deadline.
    pub fn schedule(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` once, on the first call at or after the deadline.
    pub fn fire(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
