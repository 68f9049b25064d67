//! TOML config file loading and creation.

use crate::schema::SnapdeskConfig;
use crate::validation;
use snapdesk_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{info, warn};


/// Parse config from a TOML string without touching the filesystem.
pub fn parse_str(content: &str) -> Result<SnapdeskConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. If the parsed config fails
/// validation, a warning is logged and the default config is returned.
pub fn load_from_path(path: &Path) -> Result<SnapdeskConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| io_error("read", path, e))?;
    let config = parse_str(&content)?;

    match validation::validate(&config) {
        Ok(()) => {
            info!(path = %path.display(), "config loaded");
            Ok(config)
        }
        Err(e) => {
            warn!(path = %path.display(), "{e}; using default config");
            Ok(SnapdeskConfig::default())
        }
    }
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/snapdesk/config.toml`
///
/// A missing file is created with every option commented out, and the
/// defaults are returned.
pub fn load_default() -> Result<SnapdeskConfig, ConfigError> {
    let path = default_config_path()?;

    if path.exists() {
        return load_from_path(&path);
    }
    create_default_config(&path)?;
    Ok(SnapdeskConfig::default())
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("snapdesk").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create", parent, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_error("write", path, e))?;
    info!(path = %path.display(), "default config written");
    Ok(())
}

pub(crate) fn io_error(action: &str, path: &Path, err: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("failed to {action} {}: {err}", path.display()))
}

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# snapdesk configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[manager]
# scale = { x = 1.0, y = 1.0 }   # each component in (0, 10]
# width = 800.0
# height = 600.0
# resizer_hover_delay_ms = 100
# touch_handle_hide_ms = 2500

[workspace]
# snap = true
# snap_margin = 20.0             # 0-200
# snap_threshold = 50.0          # 0-500
# snap_with = "all"              # all, move, resize
# stageds_width = 200.0          # 0-2000
# auto_hide_stageds = false

[window]
# min_size = { width = 100.0, height = 50.0 }
# max_size = { width = 1600.0, height = 1200.0 }
# resizable = true
# resizer_threshold = 8.0        # 0-64
# always_on_top = false
# staging_distance = 20.0        # 0-2000
# staged_size = { width = 160.0, height = 120.0 }
# allow_outside = false
# compensate_position_on_viewport_resize = true

[logging]
# level = "info"                 # trace, debug, info, warn, error
"##
    .to_string()
}
