//! Manager (root surface) configuration types.

use serde::{Deserialize, Serialize};
use snapdesk_common::Vec2;

/// Root surface settings: the scale vector applied to the whole desktop,
/// the initial manager size, and interaction timings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Scale applied to the manager surface (each component > 0).
    pub scale: Vec2,
    /// Initial manager width in window-space pixels.
    pub width: f64,
    /// Initial manager height in window-space pixels.
    pub height: f64,
    /// How long the pointer must rest on a shared resizer before it counts
    /// as hovered.
    pub resizer_hover_delay_ms: u64,
    /// Resize handles shown by a touch interaction hide after this delay.
    pub touch_handle_hide_ms: u64,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            scale: Vec2::new(1.0, 1.0),
            width: 800.0,
            height: 600.0,
            resizer_hover_delay_ms: 100,
            touch_handle_hide_ms: 2500,
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
    fn manager_config_defaults() {
        let config = ManagerConfig::default();
        assert_eq!(config.scale, Vec2::new(1.0, 1.0));
        assert!((config.width - 800.0).abs() < f64::EPSILON);
        assert!((config.height - 600.0).abs() < f64::EPSILON);
        assert_eq!(config.resizer_hover_delay_ms, 100);
        assert_eq!(config.touch_handle_hide_ms, 2500);
    }

    #[test]
    fn manager_config_partial_toml() {
        let toml_str = r#"
scale = { x = 2.0, y = 1.5 }
width = 1280.0
"#;
        let config: ManagerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.scale, Vec2::new(2.0, 1.5));
        assert!((config.width - 1280.0).abs() < f64::EPSILON);
        // Defaults preserved
        assert!((config.height - 600.0).abs() < f64::EPSILON);
        assert_eq!(config.resizer_hover_delay_ms, 100);
    }
}
