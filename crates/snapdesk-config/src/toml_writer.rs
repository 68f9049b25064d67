//! Write SnapdeskConfig to TOML on disk.
//!
//! Writes go to a `.tmp` sibling first and are renamed into place so a
//! crash mid-write never leaves a truncated config.

use std::path::Path;

use snapdesk_common::ConfigError;
use tracing::{info, warn};

use crate::schema::SnapdeskConfig;
use crate::toml_loader::{default_config_path, io_error};

/// Write config to the platform default path (`~/.config/snapdesk/config.toml`).
pub fn save_config(config: &SnapdeskConfig) -> Result<(), ConfigError> {
    let path = default_config_path()?;
    save_config_to_path(config, &path)
}

/// Write config to a specific path, creating parent directories as needed.
pub fn save_config_to_path(config: &SnapdeskConfig, path: &Path) -> Result<(), ConfigError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config: {e}")))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create", parent, e))?;
    }

    let staging = path.with_extension("toml.tmp");
    std::fs::write(&staging, &rendered).map_err(|e| io_error("write", &staging, e))?;
    if let Err(e) = std::fs::rename(&staging, path) {
        // Cross-device rename; overwrite in place instead.
        warn!(%e, "rename failed, writing config directly");
        std::fs::write(path, &rendered).map_err(|e| io_error("write", path, e))?;
        let _ = std::fs::remove_file(&staging);
    }

    info!(path = %path.display(), "config saved");
    Ok(())
}
