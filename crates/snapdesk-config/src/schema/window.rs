//! Per-window behavior configuration types.

use serde::{Deserialize, Serialize};
use snapdesk_common::Size;

/// Window sizing, resizing, staging and viewport behavior.
///
/// These are the workspace-wide defaults; a window may be mounted with its
/// own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub min_size: Size,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<Size>,
    pub resizable: bool,
    /// Width of the edge zone that starts a resize (valid range: 0-64).
    pub resizer_threshold: f64,
    /// Keep this window above all others regardless of focus order.
    pub always_on_top: bool,
    /// A move whose pointer x (manager space) is below this value previews
    /// staging (valid range: 0-2000).
    pub staging_distance: f64,
    /// Size of the window's thumbnail in the staged tray.
    pub staged_size: Size,
    /// Allow the window to extend past the manager bounds.
    pub allow_outside: bool,
    /// Pull the window back inside when the manager shrinks.
    pub compensate_position_on_viewport_resize: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            min_size: Size::new(100.0, 50.0),
            max_size: None,
            resizable: true,
            resizer_threshold: 8.0,
            always_on_top: false,
            staging_distance: 20.0,
            staged_size: Size::new(160.0, 120.0),
            allow_outside: false,
            compensate_position_on_viewport_resize: true,
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
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.min_size, Size::new(100.0, 50.0));
        assert!(config.max_size.is_none());
        assert!(config.resizable);
        assert!((config.resizer_threshold - 8.0).abs() < f64::EPSILON);
        assert!(!config.always_on_top);
        assert!((config.staging_distance - 20.0).abs() < f64::EPSILON);
        assert_eq!(config.staged_size, Size::new(160.0, 120.0));
        assert!(!config.allow_outside);
        assert!(config.compensate_position_on_viewport_resize);
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
resizable = false
always_on_top = true

[max_size]
width = 1024.0
height = 768.0
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.resizable);
        assert!(config.always_on_top);
        assert_eq!(config.max_size, Some(Size::new(1024.0, 768.0)));
        // Defaults preserved
        assert_eq!(config.min_size, Size::new(100.0, 50.0));
        assert!(config.compensate_position_on_viewport_resize);
    }

    #[test]
    fn max_size_is_omitted_when_unset() {
        let toml_str = toml::to_string(&WindowConfig::default()).unwrap();
        assert!(!toml_str.contains("max_size"));
    }
}
