//! Core types and constructors for WindowController.

use serde::{Deserialize, Serialize};
use snapdesk_common::{Rect, Size, Vec2, WindowId};
use snapdesk_config::WindowConfig;

use super::drag::DragState;
use crate::registry::WindowRecord;
use crate::timer::Timer;

/// Added to the z-index of always-on-top windows so they stay above
/// everything raised by regular focus.
pub const ALWAYS_ON_TOP_OFFSET: u64 = 10_000;

/// Everything needed to mount a window into a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSpec {
    /// Generated when absent.
    pub id: Option<WindowId>,
    /// Auto-placed when absent.
    pub position: Option<Vec2>,
    pub size: Size,
    /// Overrides the workspace-wide window defaults.
    pub options: Option<WindowConfig>,
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self {
            id: None,
            position: None,
            size: Size::new(400.0, 300.0),
            options: None,
        }
    }
}

/// Render snapshot of one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    pub id: WindowId,
    pub position: Vec2,
    pub size: Size,
    pub moving: bool,
    pub resizing: bool,
    pub staging: bool,
    pub staged: bool,
    pub focused: bool,
    pub z_index: u64,
    pub handles_visible: bool,
}

/// Per-window interaction state.
#[derive(Debug, Clone)]
pub struct WindowController {
    pub(super) id: WindowId,
    pub(super) options: WindowConfig,
    pub(super) position: Vec2,
    pub(super) size: Size,
    pub(super) moving: bool,
    pub(super) resizing: bool,
    /// Previewing the staged transform during a move.
    pub(super) staging: bool,
    pub(super) staged: bool,
    pub(super) focused: bool,
    pub(super) z_index: u64,
    pub(super) drag: Option<DragState>,
    /// Touch-only resize handles, hidden again by `handles_timer`.
    pub(super) handles_visible: bool,
    pub(super) handles_timer: Timer,
    /// Last bounds handed to the snap engine.
    pub(super) reported: Option<WindowRecord>,
}

impl WindowController {
    pub fn new(id: WindowId, position: Vec2, size: Size, options: WindowConfig) -> Self {
        let size = size.clamp(options.min_size, options.max_size);
        Self {
            id,
            options,
            position,
            size,
            moving: false,
            resizing: false,
            staging: false,
            staged: false,
            focused: false,
            z_index: 0,
            drag: None,
            handles_visible: false,
            handles_timer: Timer::new(),
            reported: None,
        }
    }

    // -- Accessors --

    pub fn id(&self) -> &WindowId {
        &self.id
    }

    pub fn options(&self) -> &WindowConfig {
        &self.options
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    pub fn is_staging(&self) -> bool {
        self.staging
    }

    pub fn is_staged(&self) -> bool {
        self.staged
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    pub fn handles_visible(&self) -> bool {
        self.handles_visible
    }

    pub fn is_interacting(&self) -> bool {
        self.drag.is_some()
    }

    /// Current bounds tagged with the interaction flags.
    pub fn record(&self) -> WindowRecord {
        let mut record = WindowRecord::new(self.id.clone(), self.position, self.size);
        record.moving = self.moving;
        record.resizing = self.resizing;
        record.staged = self.staged;
        record
    }

    /// The current record if it differs from the last one taken, so the
    /// snap engine only hears about real changes.
    pub fn take_bounds_change(&mut self) -> Option<WindowRecord> {
        let record = self.record();
        if self.reported.as_ref() == Some(&record) {
            return None;
        }
        self.reported = Some(record.clone());
        Some(record)
    }

    pub fn state(&self) -> WindowState {
        WindowState {
            id: self.id.clone(),
            position: self.position,
            size: self.size,
            moving: self.moving,
            resizing: self.resizing,
            staging: self.staging,
            staged: self.staged,
            focused: self.focused,
            z_index: self.z_index,
            handles_visible: self.handles_visible,
        }
    }
}
