//! Focus, z-order and touch handle visibility for WindowController.

use std::time::Duration;

use super::{WindowController, ALWAYS_ON_TOP_OFFSET};

impl WindowController {
    fn z_target(&self, counter: u64) -> u64 {
        if self.options.always_on_top {
            counter + ALWAYS_ON_TOP_OFFSET
        } else {
            counter
        }
    }

    /// Update the focused flag. Gaining focus raises the shared `counter`
    /// by one, unless this window was the last one raised.
    pub fn sync_focus(&mut self, focused: bool, counter: &mut u64) -> bool {
        self.focused = focused;
        let on_top = self.z_index != 0 && self.z_index == self.z_target(*counter);
        if !focused || on_top {
            return false;
        }
        *counter += 1;
        self.z_index = self.z_target(*counter);
        true
    }

    /// Toggle always-on-top. Every toggle raises the shared counter.
    pub fn set_always_on_top(&mut self, on: bool, counter: &mut u64) {
        self.options.always_on_top = on;
        *counter += 1;
        self.z_index = self.z_target(*counter);
    }

    /// Reveal the touch resize handles until `now + hide_after`.
    pub fn show_handles(&mut self, now: Duration, hide_after: Duration) {
        self.handles_visible = true;
        self.handles_timer.schedule(now, hide_after);
    }

    /// Advance timers. Returns `true` when the handles were hidden.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.handles_timer.fire(now) && self.handles_visible {
            self.handles_visible = false;
            return true;
        }
        false
    }
}
