//! JSON layout report of the active workspace.

use serde::Serialize;
use snapdesk_common::{Event, Rect, SnapdeskError, WindowId};
use snapdesk_wm::{Manager, SnapGeometry, WindowState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapReport {
    pub left: WindowId,
    pub right: WindowId,
    pub z_index: u64,
    /// The strip between the two members holding the shared controls.
    pub gap: Rect,
}

impl From<SnapGeometry> for SnapReport {
    fn from(geometry: SnapGeometry) -> Self {
        Self {
            left: geometry.key.left,
            right: geometry.key.right,
            z_index: geometry.z_index,
            gap: geometry.gap,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub workspace: usize,
    /// Bottom-most first.
    pub windows: Vec<WindowState>,
    pub snaps: Vec<SnapReport>,
    pub staged_area_width: f64,
    pub events: Vec<Event>,
}

impl Report {
    pub fn capture(manager: &Manager, events: Vec<Event>) -> Self {
        let ws = manager.active_workspace();
        Self {
            workspace: manager.active_index(),
            windows: ws.window_states(),
            snaps: ws.snap_geometries().into_iter().map(SnapReport::from).collect(),
            staged_area_width: ws.staged_area_width(),
            events,
        }
    }

    pub fn to_json(&self, compact: bool) -> Result<String, SnapdeskError> {
        let rendered = if compact {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        };
        rendered.map_err(|e| SnapdeskError::Other(format!("failed to serialize report: {e}")))
    }
}
