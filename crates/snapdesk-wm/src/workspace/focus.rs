//! Focus and z-order handling for Workspace.

use snapdesk_common::{Event, WindowId, WmError};
use tracing::debug;

use super::Workspace;

impl Workspace {
    /// Focus a window, raising it and the snap it belongs to.
    pub fn focus(&mut self, id: &WindowId) -> Result<(), WmError> {
        if !self.windows.contains_key(id) {
            return Err(WmError::UnknownWindow(id.clone()));
        }
        let changed = self.focused.as_ref() != Some(id);
        self.focused = Some(id.clone());

        for window in self.windows.values_mut() {
            let focused = window.id() == id;
            window.sync_focus(focused, &mut self.z_counter);
        }
        self.engine.raise_snap_of(id, self.z_counter);

        if changed {
            debug!(window = %id, z = self.z_counter, "window focused");
            self.events.publish(Event::WindowFocused(id.clone()));
        }
        Ok(())
    }

    pub fn blur(&mut self) {
        self.focused = None;
        for window in self.windows.values_mut() {
            window.sync_focus(false, &mut self.z_counter);
        }
    }

    pub fn set_always_on_top(&mut self, id: &WindowId, on: bool) -> Result<(), WmError> {
        let window = self
            .windows
            .get_mut(id)
            .ok_or_else(|| WmError::UnknownWindow(id.clone()))?;
        window.set_always_on_top(on, &mut self.z_counter);
        debug!(window = %id, on, z = window.z_index(), "always on top toggled");
        Ok(())
    }
}
