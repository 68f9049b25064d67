//! Script format and the runner that replays it through a [`Manager`].
//!
//! A script is a JSON document with an optional manager override and a
//! list of `op`-tagged steps:
//!
//! ```json
//! {
//!   "manager": { "width": 800, "height": 600 },
//!   "steps": [
//!     { "op": "mount", "id": "a", "x": 100, "y": 100, "width": 200, "height": 150 },
//!     { "op": "pointer", "x": 600, "y": 175, "down": true },
//!     { "op": "frame" }
//!   ]
//! }
//! ```

use std::time::Duration;

use serde::Deserialize;
use snapdesk_common::{Event, Rect, SnapdeskError, Size, Vec2, WindowId};
use snapdesk_config::{SnapdeskConfig, WindowConfig};
use snapdesk_wm::{Manager, PointerInput, ResizeDirection, WindowSpec};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, warn};

use crate::report::Report;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Script {
    pub manager: Option<ManagerOverride>,
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json(text: &str) -> Result<Self, SnapdeskError> {
        serde_json::from_str(text).map_err(|e| SnapdeskError::Scenario(format!("invalid script: {e}")))
    }
}

/// Manager settings a script may pin regardless of the loaded config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManagerOverride {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub scale: Option<Vec2>,
}

impl ManagerOverride {
    fn apply(&self, config: &mut SnapdeskConfig) {
        if let Some(width) = self.width {
            config.manager.width = width;
        }
        if let Some(height) = self.height {
            config.manager.height = height;
        }
        if let Some(scale) = self.scale {
            config.manager.scale = scale;
        }
    }
}

fn default_on() -> bool {
    true
}

/// One scripted action. Coordinates of `pointer`, `touch` and `surface`
/// are client coordinates; `drag` is manager space.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Mount {
        id: Option<WindowId>,
        x: Option<f64>,
        y: Option<f64>,
        width: Option<f64>,
        height: Option<f64>,
        options: Option<WindowConfig>,
    },
    Unmount {
        id: WindowId,
    },
    Focus {
        id: WindowId,
    },
    AlwaysOnTop {
        id: WindowId,
        #[serde(default = "default_on")]
        on: bool,
    },
    Unstage {
        id: WindowId,
    },
    Pointer {
        x: f64,
        y: f64,
        down: bool,
    },
    Touch {
        #[serde(default)]
        points: Vec<Vec2>,
    },
    /// Start resizing `id` from the current pointer position. `direction`
    /// is one of `n s e w ne nw se sw`.
    BeginResize {
        id: WindowId,
        direction: String,
    },
    Drag {
        x: f64,
        y: f64,
    },
    Release,
    Surface {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Advance the clock by `ms` milliseconds.
    Tick {
        ms: u64,
    },
    Frame,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Mount { .. } => "mount",
            Step::Unmount { .. } => "unmount",
            Step::Focus { .. } => "focus",
            Step::AlwaysOnTop { .. } => "always_on_top",
            Step::Unstage { .. } => "unstage",
            Step::Pointer { .. } => "pointer",
            Step::Touch { .. } => "touch",
            Step::BeginResize { .. } => "begin_resize",
            Step::Drag { .. } => "drag",
            Step::Release => "release",
            Step::Surface { .. } => "surface",
            Step::Tick { .. } => "tick",
            Step::Frame => "frame",
        }
    }
}

pub struct Runner {
    manager: Manager,
    clock: Duration,
    /// Window driven by `begin_resize` / `drag` / `release`.
    scripted: Option<WindowId>,
    events: broadcast::Receiver<Event>,
    log: Vec<Event>,
}

impl Runner {
    pub fn new(mut config: SnapdeskConfig, overrides: Option<&ManagerOverride>) -> Self {
        if let Some(overrides) = overrides {
            overrides.apply(&mut config);
        }
        let manager = Manager::new(config);
        let events = manager.subscribe();
        Self {
            manager,
            clock: Duration::ZERO,
            scripted: None,
            events,
            log: Vec::new(),
        }
    }

    pub fn manager(&self) -> &Manager {
        &self.manager
    }

    /// Run every step in order. The first failing step aborts the run.
    pub fn run(&mut self, steps: &[Step]) -> Result<(), SnapdeskError> {
        for (index, step) in steps.iter().enumerate() {
            debug!(index, op = step.name(), "step");
            self.apply(step)
                .map_err(|e| SnapdeskError::Scenario(format!("step {index} ({}): {e}", step.name())))?;
            self.drain_events();
        }
        Ok(())
    }

    fn apply(&mut self, step: &Step) -> Result<(), SnapdeskError> {
        match step {
            Step::Mount {
                id,
                x,
                y,
                width,
                height,
                options,
            } => {
                let defaults = WindowSpec::default();
                let position = match (x, y) {
                    (Some(x), Some(y)) => Some(Vec2::new(*x, *y)),
                    (None, None) => None,
                    _ => return Err(SnapdeskError::Scenario("mount needs both x and y, or neither".into())),
                };
                let spec = WindowSpec {
                    id: id.clone(),
                    position,
                    size: Size::new(
                        width.unwrap_or(defaults.size.width),
                        height.unwrap_or(defaults.size.height),
                    ),
                    options: options.clone(),
                };
                self.manager.active_workspace_mut().mount(spec)?;
            }
            Step::Unmount { id } => self.manager.active_workspace_mut().unmount(id)?,
            Step::Focus { id } => self.manager.active_workspace_mut().focus(id)?,
            Step::AlwaysOnTop { id, on } => self.manager.active_workspace_mut().set_always_on_top(id, *on)?,
            Step::Unstage { id } => {
                self.manager.active_workspace_mut().unstage(id)?;
            }
            Step::Pointer { x, y, down } => {
                self.manager.handle_pointer(&PointerInput::Mouse {
                    client: Vec2::new(*x, *y),
                    primary_down: *down,
                });
            }
            Step::Touch { points } => {
                if !self.manager.handle_pointer(&PointerInput::Touch {
                    touches: points.clone(),
                }) {
                    debug!(touches = points.len(), "multi-touch sample ignored");
                }
            }
            Step::BeginResize { id, direction } => {
                let direction: ResizeDirection = direction.parse()?;
                let pointer = self.manager.state().pointer.position;
                if self.manager.active_workspace_mut().begin_resize(id, direction, pointer)? {
                    self.scripted = Some(id.clone());
                } else {
                    warn!(window = %id, %direction, "resize refused");
                }
            }
            Step::Drag { x, y } => {
                let id = self.scripted_window()?;
                self.manager
                    .active_workspace_mut()
                    .drag_to(&id, Vec2::new(*x, *y))?;
            }
            Step::Release => {
                let id = self.scripted_window()?;
                self.scripted = None;
                self.manager.active_workspace_mut().end_interaction(&id)?;
            }
            Step::Surface { x, y, width, height } => self.manager.set_surface(Rect {
                x: *x,
                y: *y,
                width: *width,
                height: *height,
            }),
            Step::Tick { ms } => {
                self.clock += Duration::from_millis(*ms);
                self.manager.tick(self.clock);
            }
            Step::Frame => {
                self.manager.end_frame();
            }
        }
        Ok(())
    }

    fn scripted_window(&self) -> Result<WindowId, SnapdeskError> {
        self.scripted
            .clone()
            .ok_or_else(|| SnapdeskError::Scenario("no resize in progress".into()))
    }

    fn drain_events(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(event) => self.log.push(event),
                Err(TryRecvError::Lagged(missed)) => warn!(missed, "event log lagged"),
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }

    /// Snapshot of the active workspace plus every event seen so far.
    pub fn report(&self) -> Report {
        Report::capture(&self.manager, self.log.clone())
    }
}
