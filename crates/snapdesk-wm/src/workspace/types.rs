//! Core types and constructors for Workspace.

use std::collections::{BTreeMap, BTreeSet};

use snapdesk_common::{Event, EventBus, Size, Vec2, WindowId};
use snapdesk_config::{SnapdeskConfig, WindowConfig, WorkspaceConfig};
use tokio::sync::broadcast;

use super::dispatch::SnapDispatcher;
use crate::scale::ScaleTransform;
use crate::snap::{SnapControl, SnapEngine, SnapGeometry, SnapKey};
use crate::window::{WindowController, WindowState};

/// An active drag on a snap's shared mover or resizer.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapDrag {
    pub key: SnapKey,
    pub control: SnapControl,
    /// Pointer position already applied, in window space.
    pub(super) last: Vec2,
}

/// One page of windows sharing focus, z-order and snap state.
pub struct Workspace {
    pub(super) config: WorkspaceConfig,
    /// Options for windows mounted without their own.
    pub(super) window_defaults: WindowConfig,
    pub(super) engine: SnapEngine,
    pub(super) windows: BTreeMap<WindowId, WindowController>,
    pub(super) focused: Option<WindowId>,
    /// Only ever increases.
    pub(super) z_counter: u64,
    /// Position of the most recently mounted window, for auto-placement.
    pub(super) last_position: Option<Vec2>,
    /// Windows unmounted since the last `reap`.
    pub(super) unmounted: Vec<WindowId>,
    pub(super) dispatcher: SnapDispatcher,
    pub(super) snap_drag: Option<SnapDrag>,
    /// Snap keys already announced on the event bus.
    pub(super) announced: BTreeSet<SnapKey>,
    pub(super) events: EventBus,
    pub(super) manager_size: Size,
}

impl Workspace {
    pub fn new(config: &SnapdeskConfig, scale: ScaleTransform, events: EventBus) -> Self {
        Self {
            config: config.workspace.clone(),
            window_defaults: config.window.clone(),
            engine: SnapEngine::new(&config.workspace, scale),
            windows: BTreeMap::new(),
            focused: None,
            z_counter: 0,
            last_position: None,
            unmounted: Vec::new(),
            dispatcher: SnapDispatcher::new(),
            snap_drag: None,
            announced: BTreeSet::new(),
            events,
            manager_size: Size::new(config.manager.width, config.manager.height),
        }
    }

    // -- Accessors --

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn engine(&self) -> &SnapEngine {
        &self.engine
    }

    pub fn window(&self, id: &WindowId) -> Option<&WindowController> {
        self.windows.get(id)
    }

    pub fn windows(&self) -> impl Iterator<Item = &WindowController> {
        self.windows.values()
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn focused(&self) -> Option<&WindowId> {
        self.focused.as_ref()
    }

    pub fn z_counter(&self) -> u64 {
        self.z_counter
    }

    pub fn manager_size(&self) -> Size {
        self.manager_size
    }

    pub fn pending_unmounts(&self) -> &[WindowId] {
        &self.unmounted
    }

    pub fn snap_drag(&self) -> Option<&SnapDrag> {
        self.snap_drag.as_ref()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    /// Render snapshots in ascending z order.
    pub fn window_states(&self) -> Vec<WindowState> {
        let mut states: Vec<WindowState> = self.windows.values().map(WindowController::state).collect();
        states.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        states
    }

    pub fn snap_geometries(&self) -> Vec<SnapGeometry> {
        self.engine.geometries()
    }

    /// Width of the staged-window tray. Collapses to zero when auto-hide is
    /// on and nothing is staged.
    pub fn staged_area_width(&self) -> f64 {
        if self.config.auto_hide_stageds && !self.windows.values().any(WindowController::is_staged) {
            0.0
        } else {
            self.config.stageds_width
        }
    }

    /// Topmost non-staged window containing `point` (window space).
    pub fn window_at(&self, point: Vec2) -> Option<&WindowController> {
        self.windows
            .values()
            .filter(|w| !w.is_staged() && w.rect().contains(point))
            .max_by(|a, b| a.z_index().cmp(&b.z_index()).then_with(|| a.id().cmp(b.id())))
    }

    /// Topmost snap control under `point` (window space).
    pub fn snap_control_at(&self, point: Vec2) -> Option<(SnapKey, SnapControl)> {
        self.engine
            .geometries()
            .into_iter()
            .filter_map(|g| g.hit_test(point).map(|c| (g.z_index, g.key, c)))
            .max_by_key(|(z, _, _)| *z)
            .map(|(_, key, control)| (key, control))
    }
}
