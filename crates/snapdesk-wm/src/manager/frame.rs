//! Surface, scale, workspace paging and the per-frame update loop.

use std::time::Duration;

use snapdesk_common::{Rect, Vec2, WmError};
use tracing::{debug, info};

use super::Manager;
use crate::scale::ScaleTransform;
use crate::workspace::Workspace;

impl Manager {
    /// Append an empty workspace and return its index.
    pub fn add_workspace(&mut self) -> usize {
        let ws = Workspace::new(&self.config, self.scale, self.events.clone());
        self.workspaces.push(ws);
        let index = self.workspaces.len() - 1;
        info!(index, "workspace added");
        index
    }

    /// Switch the active workspace. Refused (returns `false`) while a drag
    /// or resize is in flight.
    pub fn set_active_workspace(&mut self, index: usize) -> Result<bool, WmError> {
        if index >= self.workspaces.len() {
            return Err(WmError::UnknownWorkspace(index));
        }
        if self.state.wheel_busy {
            debug!(index, "workspace switch refused while busy");
            return Ok(false);
        }
        self.active = index;
        Ok(true)
    }

    /// The root surface was measured again (client coordinates, scaled).
    pub fn set_surface(&mut self, surface: Rect) {
        self.tracker.set_surface(surface);
        let size = self.scale.revert_size(surface.size());
        if size == self.state.size {
            return;
        }
        self.state.size = size;
        for ws in &mut self.workspaces {
            ws.set_manager_size(size);
        }
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = ScaleTransform::new(scale);
        self.state.scale = self.scale.vector();
        self.state.size = self.scale.revert_size(self.tracker.surface().size());
        for ws in &mut self.workspaces {
            ws.set_scale(self.scale);
            ws.set_manager_size(self.state.size);
        }
    }

    /// Advance timers to `now`. Returns `true` when something visible
    /// changed (hover state or handle visibility).
    pub fn tick(&mut self, now: Duration) -> bool {
        self.now = now;
        let mut changed = self.hover.tick(now);
        for ws in &mut self.workspaces {
            changed |= ws.tick(now);
        }
        changed
    }

    /// End of an input-processing pass: purge unmounted windows in every
    /// workspace. Returns how many were reaped.
    pub fn end_frame(&mut self) -> usize {
        let reaped: usize = self.workspaces.iter_mut().map(Workspace::reap).sum();

        if let Some(key) = self.hover.hovered().cloned() {
            if self.workspaces[self.active].engine().snap(&key).is_none() {
                self.hover.forget(&key);
            }
        }
        reaped
    }
}
