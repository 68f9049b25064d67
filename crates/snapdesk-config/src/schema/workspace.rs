//! Workspace snapping and staged-area configuration types.

use serde::{Deserialize, Serialize};
use snapdesk_common::InteractionKind;

/// Which user interactions may form a snap.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SnapWith {
    /// Moving or resizing.
    #[default]
    All,
    Move,
    Resize,
}

impl SnapWith {
    pub fn permits(self, kind: InteractionKind) -> bool {
        match self {
            SnapWith::All => true,
            SnapWith::Move => kind == InteractionKind::Move,
            SnapWith::Resize => kind == InteractionKind::Resize,
        }
    }
}

/// Per-workspace snapping and staged-tray settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Master switch for edge snapping.
    pub snap: bool,
    /// Gap left between two snapped windows (valid range: 0-200).
    pub snap_margin: f64,
    /// Maximum edge distance, in manager pixels, for two windows to be
    /// considered neighbors (valid range: 0-500).
    pub snap_threshold: f64,
    pub snap_with: SnapWith,
    /// Width of the staged-window tray (valid range: 0-2000).
    pub stageds_width: f64,
    /// Collapse the tray while no window is staged.
    pub auto_hide_stageds: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            snap: true,
            snap_margin: 20.0,
            snap_threshold: 50.0,
            snap_with: SnapWith::All,
            stageds_width: 200.0,
            auto_hide_stageds: false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_config_defaults() {
        let config = WorkspaceConfig::default();
        assert!(config.snap);
        assert!((config.snap_margin - 20.0).abs() < f64::EPSILON);
        assert!((config.snap_threshold - 50.0).abs() < f64::EPSILON);
        assert_eq!(config.snap_with, SnapWith::All);
        assert!((config.stageds_width - 200.0).abs() < f64::EPSILON);
        assert!(!config.auto_hide_stageds);
    }

    #[test]
    fn snap_with_permits() {
        assert!(SnapWith::All.permits(InteractionKind::Move));
        assert!(SnapWith::All.permits(InteractionKind::Resize));
        assert!(SnapWith::Move.permits(InteractionKind::Move));
        assert!(!SnapWith::Move.permits(InteractionKind::Resize));
        assert!(!SnapWith::Resize.permits(InteractionKind::Move));
        assert!(SnapWith::Resize.permits(InteractionKind::Resize));
    }

    #[test]
    fn snap_with_serialization() {
        let json = serde_json::to_string(&SnapWith::Resize).unwrap();
        assert_eq!(json, "\"resize\"");
        let deserialized: SnapWith = serde_json::from_str("\"move\"").unwrap();
        assert_eq!(deserialized, SnapWith::Move);
    }

    #[test]
    fn workspace_config_partial_toml() {
        let toml_str = r#"
snap_with = "move"
snap_margin = 0.0
auto_hide_stageds = true
"#;
        let config: WorkspaceConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.snap_with, SnapWith::Move);
        assert!(config.snap_margin.abs() < f64::EPSILON);
        assert!(config.auto_hide_stageds);
        // Defaults preserved
        assert!(config.snap);
        assert!((config.snap_threshold - 50.0).abs() < f64::EPSILON);
    }
}
