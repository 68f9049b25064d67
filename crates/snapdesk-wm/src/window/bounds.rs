//! Programmatic bounds changes: snap instructions, shared controls,
//! viewport compensation and unstaging.

use snapdesk_common::{Size, Vec2};

use super::WindowController;
use crate::snap::ToSnap;

impl WindowController {
    /// Apply a one-shot snap instruction. Ignored unless this window is
    /// its target. The forced size still honors this window's limits.
    pub fn apply_to_snap(&mut self, to_snap: &ToSnap) -> bool {
        if to_snap.target != self.id {
            return false;
        }
        if let Some(position) = to_snap.new_position {
            self.position = position;
        }
        if let Some(size) = to_snap.new_size {
            self.size = size.clamp(self.options.min_size, self.options.max_size);
        }
        true
    }

    /// Shift by `delta` (window space), as done by a snap's shared mover.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Shift the origin and change the size, as done by a snap's shared
    /// resizer. The caller is responsible for clamping.
    pub fn resize_by(&mut self, position: Vec2, size: Vec2) {
        self.position += position;
        self.size = Size::new(self.size.width + size.x, self.size.height + size.y);
    }

    /// Pull the window back inside a manager of `manager` size. Returns
    /// `true` when the position changed.
    pub fn compensate_viewport(&mut self, manager: Size) -> bool {
        if self.options.allow_outside || !self.options.compensate_position_on_viewport_resize {
            return false;
        }
        let x = self.position.x.min(manager.width - self.size.width).max(0.0);
        let y = self.position.y.min(manager.height - self.size.height).max(0.0);
        let next = Vec2::new(x, y);
        if next == self.position {
            return false;
        }
        self.position = next;
        true
    }

    pub fn unstage(&mut self) -> bool {
        if !self.staged {
            return false;
        }
        self.staged = false;
        true
    }
}
