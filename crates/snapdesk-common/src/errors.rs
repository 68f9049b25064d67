use std::path::PathBuf;

use crate::id::WindowId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Errors raised by the window-management core.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum WmError {
    /// A resize handle tag that names no edge or corner. This is a caller
    /// bug, never a user-recoverable condition.
    #[error("invalid resize direction: {0:?}")]
    InvalidResizeDirection(String),

    #[error("unknown window: {0}")]
    UnknownWindow(WindowId),

    #[error("window already mounted: {0}")]
    DuplicateWindow(WindowId),

    #[error("unknown snap: {0}")]
    UnknownSnap(String),

    #[error("unknown workspace: {0}")]
    UnknownWorkspace(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum SnapdeskError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Wm(#[from] WmError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("scenario error: {0}")]
    Scenario(String),

    #[error("{0}")]
    Other(String),
}
