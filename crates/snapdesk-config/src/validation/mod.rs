//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod manager;
mod window;


pub use window::validate_window;

use crate::schema::SnapdeskConfig;
use snapdesk_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SnapdeskConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    manager::validate_manager(&mut errors, config);
    manager::validate_workspace(&mut errors, config);
    window::validate_window(&mut errors, "window", &config.window);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
