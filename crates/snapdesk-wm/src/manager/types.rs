//! Core types and constructors for Manager.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use snapdesk_common::{Event, EventBus, InteractionKind, Rect, Size, Vec2, WindowId, WmError};
use snapdesk_config::SnapdeskConfig;
use tokio::sync::broadcast;

use crate::pointer::{PointerState, PointerTracker};
use crate::scale::ScaleTransform;
use crate::snap::{ResizerHover, SnapControl, SnapKey};
use crate::workspace::Workspace;

/// Root surface state shared by every workspace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManagerState {
    pub scale: Vec2,
    /// Manager size in window space.
    pub size: Size,
    pub pointer: PointerState,
    /// A drag or resize is in flight; workspace paging is suppressed.
    pub wheel_busy: bool,
}

/// What the pointer is currently dragging.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    Window { id: WindowId, kind: InteractionKind },
    Snap { key: SnapKey, control: SnapControl },
}

pub struct Manager {
    pub(super) config: SnapdeskConfig,
    pub(super) scale: ScaleTransform,
    pub(super) tracker: PointerTracker,
    pub(super) state: ManagerState,
    pub(super) workspaces: Vec<Workspace>,
    pub(super) active: usize,
    pub(super) interaction: Option<Interaction>,
    pub(super) hover: ResizerHover,
    pub(super) events: EventBus,
    /// Last time handed to `tick`.
    pub(super) now: Duration,
}

impl Manager {
    /// Create a manager with a single workspace. The surface starts at the
    /// origin with the configured size.
    pub fn new(config: SnapdeskConfig) -> Self {
        let scale = ScaleTransform::new(config.manager.scale);
        let size = Size::new(config.manager.width, config.manager.height);
        let surface = scale.scale_rect(Rect::from_parts(Vec2::ZERO, size));
        let events = EventBus::default();
        let first = Workspace::new(&config, scale, events.clone());

        Self {
            state: ManagerState {
                scale: scale.vector(),
                size,
                pointer: PointerState::default(),
                wheel_busy: false,
            },
            config,
            scale,
            tracker: PointerTracker::new(surface),
            workspaces: vec![first],
            active: 0,
            interaction: None,
            hover: ResizerHover::new(),
            events,
            now: Duration::ZERO,
        }
    }

    // -- Accessors --

    pub fn config(&self) -> &SnapdeskConfig {
        &self.config
    }

    pub fn state(&self) -> &ManagerState {
        &self.state
    }

    pub fn scale(&self) -> &ScaleTransform {
        &self.scale
    }

    pub fn interaction(&self) -> Option<&Interaction> {
        self.interaction.as_ref()
    }

    pub fn hovered_resizer(&self) -> Option<&SnapKey> {
        self.hover.hovered()
    }

    pub fn workspace_count(&self) -> usize {
        self.workspaces.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn workspace(&self, index: usize) -> Result<&Workspace, WmError> {
        self.workspaces.get(index).ok_or(WmError::UnknownWorkspace(index))
    }

    pub fn workspace_mut(&mut self, index: usize) -> Result<&mut Workspace, WmError> {
        self.workspaces.get_mut(index).ok_or(WmError::UnknownWorkspace(index))
    }

    pub fn active_workspace(&self) -> &Workspace {
        &self.workspaces[self.active]
    }

    pub fn active_workspace_mut(&mut self) -> &mut Workspace {
        &mut self.workspaces[self.active]
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }
}
