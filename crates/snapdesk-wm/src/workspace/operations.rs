//! Mount, unmount and lifecycle operations on the Workspace.

use std::collections::BTreeSet;
use std::time::Duration;

use snapdesk_common::{Event, Size, Vec2, WindowId, WmError};
use tracing::{debug, info};

use super::Workspace;
use crate::scale::ScaleTransform;
use crate::snap::SnapKey;
use crate::window::{WindowController, WindowSpec};

/// Step between consecutive auto-placed windows, and the restart point.
pub const AUTO_PLACE_STEP: Vec2 = Vec2 { x: 20.0, y: 20.0 };

impl Workspace {
    /// Mount a window. Missing ids are generated and missing positions are
    /// auto-placed.
    pub fn mount(&mut self, spec: WindowSpec) -> Result<WindowId, WmError> {
        let id = spec.id.unwrap_or_default();
        if self.windows.contains_key(&id) {
            return Err(WmError::DuplicateWindow(id));
        }
        let options = spec.options.unwrap_or_else(|| self.window_defaults.clone());
        let always_on_top = options.always_on_top;
        let position = spec.position.unwrap_or_else(|| self.auto_place(spec.size));
        self.last_position = Some(position);

        let mut window = WindowController::new(id.clone(), position, spec.size, options);
        if always_on_top {
            window.set_always_on_top(true, &mut self.z_counter);
        }
        self.windows.insert(id.clone(), window);
        self.report(&id);

        info!(window = %id, x = position.x, y = position.y, "window mounted");
        self.events.publish(Event::WindowMounted(id.clone()));
        Ok(id)
    }

    fn auto_place(&self, size: Size) -> Vec2 {
        let candidate = match self.last_position {
            Some(last) => last + AUTO_PLACE_STEP,
            None => AUTO_PLACE_STEP,
        };
        let overflows = candidate.x + size.width > self.manager_size.width
            || candidate.y + size.height > self.manager_size.height;
        if overflows {
            AUTO_PLACE_STEP
        } else {
            candidate
        }
    }

    /// Remove a window. Its record and snaps are purged by the next
    /// [`Workspace::reap`].
    pub fn unmount(&mut self, id: &WindowId) -> Result<(), WmError> {
        if self.windows.remove(id).is_none() {
            return Err(WmError::UnknownWindow(id.clone()));
        }
        if self.focused.as_ref() == Some(id) {
            self.focused = None;
        }
        if self.snap_drag.as_ref().is_some_and(|d| d.key.involves(id)) {
            self.snap_drag = None;
        }
        self.unmounted.push(id.clone());
        debug!(window = %id, "window queued for unmount");
        Ok(())
    }

    /// Purge every window unmounted since the last call. Returns how many
    /// were reaped.
    pub fn reap(&mut self) -> usize {
        if self.unmounted.is_empty() {
            return 0;
        }
        let ids = std::mem::take(&mut self.unmounted);
        self.engine.reap(&ids);
        self.sync_snaps();
        for id in &ids {
            info!(window = %id, "window unmounted");
            self.events.publish(Event::WindowUnmounted(id.clone()));
        }
        ids.len()
    }

    /// Hand the window's bounds to the snap engine if they changed.
    pub(super) fn report(&mut self, id: &WindowId) {
        let Some(record) = self.windows.get_mut(id).and_then(WindowController::take_bounds_change) else {
            return;
        };
        self.engine.on_bounds_change(record);
        self.sync_snaps();
    }

    /// Bring routes and event announcements in line with the engine.
    pub(super) fn sync_snaps(&mut self) {
        if !self.dispatcher.sync(&self.engine) {
            return;
        }
        let current: BTreeSet<SnapKey> = self.engine.snaps().iter().map(|s| s.key()).collect();
        for key in current.difference(&self.announced) {
            self.events.publish(Event::SnapCommitted {
                left: key.left.clone(),
                right: key.right.clone(),
            });
        }
        for key in self.announced.difference(&current) {
            self.events.publish(Event::SnapDropped {
                left: key.left.clone(),
                right: key.right.clone(),
            });
        }
        if let Some(drag) = &self.snap_drag {
            if !current.contains(&drag.key) {
                self.snap_drag = None;
            }
        }
        self.announced = current;
    }

    /// Restore a staged window.
    pub fn unstage(&mut self, id: &WindowId) -> Result<bool, WmError> {
        let window = self
            .windows
            .get_mut(id)
            .ok_or_else(|| WmError::UnknownWindow(id.clone()))?;
        if !window.unstage() {
            return Ok(false);
        }
        self.report(id);
        self.events.publish(Event::WindowUnstaged(id.clone()));
        Ok(true)
    }

    /// The manager was resized. Windows that opted in are pulled back
    /// inside.
    pub fn set_manager_size(&mut self, size: Size) {
        self.manager_size = size;
        let moved: Vec<WindowId> = self
            .windows
            .values_mut()
            .filter_map(|w| w.compensate_viewport(size).then(|| w.id().clone()))
            .collect();
        for id in &moved {
            self.report(id);
        }
    }

    pub fn set_scale(&mut self, scale: ScaleTransform) {
        self.engine.set_scale(scale);
    }

    /// Reveal a window's touch resize handles for `hide_after`.
    pub fn show_handles(&mut self, id: &WindowId, now: Duration, hide_after: Duration) -> Result<(), WmError> {
        let window = self
            .windows
            .get_mut(id)
            .ok_or_else(|| WmError::UnknownWindow(id.clone()))?;
        window.show_handles(now, hide_after);
        Ok(())
    }

    /// Advance window timers. Returns `true` if anything changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let mut changed = false;
        for window in self.windows.values_mut() {
            changed |= window.tick(now);
        }
        changed
    }
}
