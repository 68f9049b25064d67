//! Pointer tracking: raw client-coordinate input to manager-local state.
//!
//! Collaborators deliver mouse and touch samples in client coordinates.
//! The tracker subtracts the manager surface origin and keeps a single
//! primary-button flag. Only one touch point is tracked; samples carrying
//! more than one touch are ignored until a single touch remains.

use serde::{Deserialize, Serialize};
use snapdesk_common::{Rect, Vec2};

/// A raw pointer sample from the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerInput {
    Mouse { client: Vec2, primary_down: bool },
    /// Active touch points, in client coordinates. An empty list means the
    /// last finger lifted.
    Touch { touches: Vec<Vec2> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    #[default]
    Mouse,
    Touch,
}

/// Shared pointer state in manager-local (scaled) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerState {
    pub position: Vec2,
    pub primary_down: bool,
    pub source: InputSource,
}

#[derive(Debug, Clone)]
pub struct PointerTracker {
    surface: Rect,
}

impl PointerTracker {
    pub fn new(surface: Rect) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> Rect {
        self.surface
    }

    pub fn set_surface(&mut self, surface: Rect) {
        self.surface = surface;
    }

    fn to_local(&self, client: Vec2) -> Vec2 {
        client - self.surface.position()
    }

    /// Fold one input sample into `state`. Returns `false` when the sample
    /// was ignored (multi-touch).
    pub fn track(&self, input: &PointerInput, state: &mut PointerState) -> bool {
        match input {
            PointerInput::Mouse {
                client,
                primary_down,
            } => {
                state.position = self.to_local(*client);
                state.primary_down = *primary_down;
                state.source = InputSource::Mouse;
                true
            }
            PointerInput::Touch { touches } => match touches.as_slice() {
                [] => {
                    // Finger lifted: keep the last position, release.
                    state.primary_down = false;
                    state.source = InputSource::Touch;
                    true
                }
                [touch] => {
                    state.position = self.to_local(*touch);
                    state.primary_down = true;
                    state.source = InputSource::Touch;
                    true
                }
                _ => false,
            },
        }
    }
}
