//! Pointer routing: press hit-testing, drag follow-through and release.

use std::time::Duration;

use snapdesk_common::{InteractionKind, Vec2, WmError};
use tracing::debug;

use super::{Interaction, Manager};
use crate::pointer::{InputSource, PointerInput};
use crate::snap::SnapControl;
use crate::window::resize::edge_at;

impl Manager {
    /// Feed one raw pointer sample. Returns `false` when the sample was
    /// ignored (multi-touch).
    pub fn handle_pointer(&mut self, input: &PointerInput) -> bool {
        let was_down = self.state.pointer.primary_down;
        if !self.tracker.track(input, &mut self.state.pointer) {
            return false;
        }
        let pointer = self.state.pointer.position;

        let result = match (was_down, self.state.pointer.primary_down) {
            (false, true) => self.press(pointer),
            (true, true) => self.drag(pointer),
            (true, false) => {
                self.release();
                Ok(())
            }
            (false, false) => {
                self.hover(pointer);
                Ok(())
            }
        };
        if let Err(err) = result {
            // The target vanished mid-interaction; fall back to idle.
            debug!(%err, "interaction reset");
            self.interaction = None;
        }
        self.state.wheel_busy = self.interaction.is_some();
        true
    }

    fn press(&mut self, pointer: Vec2) -> Result<(), WmError> {
        let local = self.scale.revert_point(pointer);
        let touch = self.state.pointer.source == InputSource::Touch;
        let hide_after = Duration::from_millis(self.config.manager.touch_handle_hide_ms);
        let now = self.now;
        let ws = &mut self.workspaces[self.active];

        if let Some((key, control)) = ws.snap_control_at(local) {
            ws.begin_snap_drag(&key, control, pointer)?;
            debug!(snap = %key, ?control, "snap control grabbed");
            self.interaction = Some(Interaction::Snap { key, control });
            return Ok(());
        }

        let Some(window) = ws.window_at(local) else {
            return Ok(());
        };
        let id = window.id().clone();
        let direction = if window.options().resizable {
            edge_at(window.rect(), local, window.options().resizer_threshold)
        } else {
            None
        };

        ws.focus(&id)?;
        if touch {
            ws.show_handles(&id, now, hide_after)?;
        }
        let kind = match direction {
            Some(direction) => {
                ws.begin_resize(&id, direction, pointer)?;
                InteractionKind::Resize
            }
            None => {
                ws.begin_move(&id, pointer)?;
                InteractionKind::Move
            }
        };
        debug!(window = %id, ?kind, "interaction started");
        self.interaction = Some(Interaction::Window { id, kind });
        Ok(())
    }

    fn drag(&mut self, pointer: Vec2) -> Result<(), WmError> {
        let ws = &mut self.workspaces[self.active];
        match &self.interaction {
            Some(Interaction::Window { id, .. }) => {
                ws.drag_to(id, pointer)?;
            }
            Some(Interaction::Snap { .. }) => {
                ws.drag_snap(pointer);
            }
            None => {}
        }
        Ok(())
    }

    fn release(&mut self) {
        let Some(interaction) = self.interaction.take() else {
            return;
        };
        let ws = &mut self.workspaces[self.active];
        match interaction {
            Interaction::Window { id, .. } => {
                if let Err(err) = ws.end_interaction(&id) {
                    debug!(%err, "release on vanished window");
                }
            }
            Interaction::Snap { .. } => {
                ws.end_snap_drag();
            }
        }
    }

    fn hover(&mut self, pointer: Vec2) {
        let local = self.scale.revert_point(pointer);
        let over = match self.workspaces[self.active].snap_control_at(local) {
            Some((key, SnapControl::Resizer)) => Some(key),
            _ => None,
        };
        let delay = Duration::from_millis(self.config.manager.resizer_hover_delay_ms);
        self.hover.update(self.now, over.as_ref(), delay);
    }
}
