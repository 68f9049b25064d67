//! Pointer-driven move and resize of a single window.

use snapdesk_common::{InteractionKind, Rect, Size, Vec2};
use tracing::debug;

use super::resize::{apply_resize, resolve_delta, ResizeDirection};
use super::WindowController;
use crate::scale::ScaleTransform;

/// In-flight pointer interaction on one window.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    Move {
        /// Pointer minus window origin, in window space.
        offset: Vec2,
        /// Window origin when the move began.
        start_position: Vec2,
    },
    Resize {
        direction: ResizeDirection,
        /// Pointer at start, in window space.
        start_pointer: Vec2,
        start_position: Vec2,
        start_size: Size,
    },
}

impl DragState {
    pub fn kind(&self) -> InteractionKind {
        match self {
            DragState::Move { .. } => InteractionKind::Move,
            DragState::Resize { .. } => InteractionKind::Resize,
        }
    }
}

impl WindowController {
    /// Start moving with the pointer at `pointer` (manager space).
    /// Staged windows cannot be dragged.
    pub fn begin_move(&mut self, pointer: Vec2, scale: &ScaleTransform) -> bool {
        if self.staged || self.drag.is_some() {
            return false;
        }
        let local = scale.revert_point(pointer);
        self.drag = Some(DragState::Move {
            offset: local - self.position,
            start_position: self.position,
        });
        self.moving = true;
        true
    }

    /// Start resizing from `direction` with the pointer at `pointer`
    /// (manager space).
    pub fn begin_resize(&mut self, direction: ResizeDirection, pointer: Vec2, scale: &ScaleTransform) -> bool {
        if self.staged || self.drag.is_some() || !self.options.resizable {
            return false;
        }
        self.drag = Some(DragState::Resize {
            direction,
            start_pointer: scale.revert_point(pointer),
            start_position: self.position,
            start_size: self.size,
        });
        self.resizing = true;
        true
    }

    /// Follow the pointer (manager space). Returns `true` when position,
    /// size or the staging preview changed.
    pub fn drag_to(&mut self, pointer: Vec2, scale: &ScaleTransform) -> bool {
        let Some(drag) = self.drag.clone() else {
            return false;
        };
        let local = scale.revert_point(pointer);
        let before = (self.position, self.size, self.staging);

        match drag {
            DragState::Move { offset, .. } => {
                self.position = local - offset;
                self.staging = pointer.x < self.options.staging_distance;
            }
            DragState::Resize {
                direction,
                start_pointer,
                start_position,
                start_size,
            } => {
                let delta = resolve_delta(direction, local - start_pointer);
                let start = Rect::from_parts(start_position, start_size);
                let (position, size) = apply_resize(start, direction, delta, self.options.min_size, self.options.max_size);
                self.position = position;
                self.size = size;
            }
        }

        before != (self.position, self.size, self.staging)
    }

    /// Release the pointer. A move released inside the staging zone
    /// commits staging and returns the window to where the move began.
    /// Returns the interaction that ended.
    pub fn end_interaction(&mut self) -> Option<InteractionKind> {
        let drag = self.drag.take()?;
        if let DragState::Move { start_position, .. } = drag {
            if self.staging {
                self.staged = true;
                self.position = start_position;
                debug!(window = %self.id, "window staged");
            }
        }
        self.staging = false;
        self.moving = false;
        self.resizing = false;
        Some(drag.kind())
    }
}
