//! Pointer interactions routed through the Workspace: window move and
//! resize, and drags on a snap's shared mover or resizer.

use snapdesk_common::{Event, InteractionKind, Vec2, WindowId, WmError};
use tracing::debug;

use super::dispatch::SnapEvent;
use super::{SnapDrag, Workspace};
use crate::snap::{clamp_resizer_delta, SnapControl, SnapKey, ToSnap, WidthLimits};
use crate::window::{ResizeDirection, WindowController};

impl Workspace {
    fn window_mut(&mut self, id: &WindowId) -> Result<&mut WindowController, WmError> {
        self.windows
            .get_mut(id)
            .ok_or_else(|| WmError::UnknownWindow(id.clone()))
    }

    // -------------------------------------------------------------------------
    // Window drags
    // -------------------------------------------------------------------------

    /// Start moving `id` with the pointer at `pointer` (manager space).
    pub fn begin_move(&mut self, id: &WindowId, pointer: Vec2) -> Result<bool, WmError> {
        let scale = *self.engine.scale();
        let started = self.window_mut(id)?.begin_move(pointer, &scale);
        self.report(id);
        Ok(started)
    }

    pub fn begin_resize(&mut self, id: &WindowId, direction: ResizeDirection, pointer: Vec2) -> Result<bool, WmError> {
        let scale = *self.engine.scale();
        let started = self.window_mut(id)?.begin_resize(direction, pointer, &scale);
        self.report(id);
        Ok(started)
    }

    /// Follow the pointer (manager space) for an in-flight move or resize.
    pub fn drag_to(&mut self, id: &WindowId, pointer: Vec2) -> Result<bool, WmError> {
        let scale = *self.engine.scale();
        let changed = self.window_mut(id)?.drag_to(pointer, &scale);
        if changed {
            self.report(id);
        }
        Ok(changed)
    }

    /// Release the pointer on `id`. Commits staging or a pending snap;
    /// the returned instruction has already been applied to its target.
    pub fn end_interaction(&mut self, id: &WindowId) -> Result<Option<ToSnap>, WmError> {
        let window = self.window_mut(id)?;
        let was_staged = window.is_staged();
        let Some(kind) = window.end_interaction() else {
            return Ok(None);
        };
        let staged = window.is_staged();
        self.report(id);

        if staged && !was_staged {
            self.events.publish(Event::WindowStaged(id.clone()));
        }

        let Some(to_snap) = self.engine.on_user_bounds_change_end(id, kind) else {
            self.sync_snaps();
            return Ok(None);
        };
        if let Some(target) = self.windows.get_mut(&to_snap.target) {
            target.apply_to_snap(&to_snap);
        }
        self.report(&to_snap.target);

        self.engine.raise_snap_of(id, self.z_counter);
        self.sync_snaps();
        debug!(window = %id, ?kind, "snap applied");
        Ok(Some(to_snap))
    }

    // -------------------------------------------------------------------------
    // Shared snap controls
    // -------------------------------------------------------------------------

    /// Grab a snap's mover or resizer with the pointer at `pointer`
    /// (manager space).
    pub fn begin_snap_drag(&mut self, key: &SnapKey, control: SnapControl, pointer: Vec2) -> Result<(), WmError> {
        let kind = match control {
            SnapControl::Mover => InteractionKind::Move,
            SnapControl::Resizer => InteractionKind::Resize,
        };
        self.engine.set_snap_dragging(key, Some(kind))?;
        self.snap_drag = Some(SnapDrag {
            key: key.clone(),
            control,
            last: self.engine.scale().revert_point(pointer),
        });
        Ok(())
    }

    /// Follow the pointer (manager space) on the grabbed snap control.
    /// Returns `true` when any member moved.
    pub fn drag_snap(&mut self, pointer: Vec2) -> bool {
        let Some(drag) = self.snap_drag.clone() else {
            return false;
        };
        let local = self.engine.scale().revert_point(pointer);
        let delta = local - drag.last;

        let (events, applied) = match drag.control {
            SnapControl::Mover => (self.dispatcher.mover(&drag.key, delta), delta),
            SnapControl::Resizer => {
                let dx = self.clamp_shared_resize(&drag.key, delta.x);
                (self.dispatcher.resizer(&drag.key, dx), Vec2::new(dx, delta.y))
            }
        };
        if let Some(active) = self.snap_drag.as_mut() {
            active.last += applied;
        }
        if events.is_empty() || applied == Vec2::ZERO {
            return false;
        }

        for (id, event) in &events {
            let Some(window) = self.windows.get_mut(id) else {
                continue;
            };
            match *event {
                SnapEvent::Translate { delta } => window.translate(delta),
                SnapEvent::ResizeBy { position, size } => window.resize_by(position, size),
            }
        }
        for (id, _) in &events {
            self.report(id);
        }
        true
    }

    fn clamp_shared_resize(&self, key: &SnapKey, dx: f64) -> f64 {
        let limits = |id: &WindowId| {
            self.windows
                .get(id)
                .map(|w| WidthLimits::new(w.size(), w.options().min_size, w.options().max_size))
        };
        match (limits(&key.left), limits(&key.right)) {
            (Some(left), Some(right)) => clamp_resizer_delta(dx, left, right),
            _ => 0.0,
        }
    }

    /// Release the grabbed snap control.
    pub fn end_snap_drag(&mut self) -> Option<SnapKey> {
        let drag = self.snap_drag.take()?;
        if let Err(err) = self.engine.set_snap_dragging(&drag.key, None) {
            debug!(%err, "snap vanished during drag");
            return None;
        }
        Some(drag.key)
    }
}
