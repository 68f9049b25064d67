//! Configuration schema types for snapdesk.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod manager;
mod window;
mod workspace;

pub use logging::*;
pub use manager::*;
pub use window::*;
pub use workspace::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SnapdeskConfig {
    pub manager: ManagerConfig,
    pub workspace: WorkspaceConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: SnapdeskConfig = toml::from_str("").unwrap();
        assert!(config.workspace.snap);
        assert_eq!(config.workspace.snap_with, SnapWith::All);
        assert!(config.window.resizable);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn sections_parse_independently() {
        let toml_str = r#"
[workspace]
snap_threshold = 30.0

[window]
allow_outside = true
"#;
        let config: SnapdeskConfig = toml::from_str(toml_str).unwrap();
        assert!((config.workspace.snap_threshold - 30.0).abs() < f64::EPSILON);
        assert!(config.window.allow_outside);
        assert!((config.manager.width - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = SnapdeskConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: SnapdeskConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.window, config.window);
        assert_eq!(parsed.workspace.snap_with, config.workspace.snap_with);
    }
}
