//! Fan-out of shared snap-control drags to the member windows.
//!
//! The route table maps each committed snap to its two members and each
//! member back to its snap. It is rebuilt whenever the engine's snap
//! generation changes, so routes never point at a dropped snap.

use std::collections::BTreeMap;

use snapdesk_common::{Vec2, WindowId};

use crate::snap::{SnapEngine, SnapKey};

/// Synthetic bounds change delivered to one snap member.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapEvent {
    Translate { delta: Vec2 },
    ResizeBy { position: Vec2, size: Vec2 },
}

#[derive(Debug, Clone, Default)]
pub struct SnapDispatcher {
    generation: Option<u64>,
    routes: BTreeMap<SnapKey, [WindowId; 2]>,
    by_member: BTreeMap<WindowId, SnapKey>,
}

impl SnapDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the routes if the engine's snaps changed. Returns `true`
    /// when a rebuild happened.
    pub fn sync(&mut self, engine: &SnapEngine) -> bool {
        if self.generation == Some(engine.generation()) {
            return false;
        }
        self.routes.clear();
        self.by_member.clear();
        for snap in engine.snaps() {
            let key = snap.key();
            self.by_member.insert(snap.left().clone(), key.clone());
            self.by_member.insert(snap.right().clone(), key.clone());
            self.routes.insert(key, [snap.left().clone(), snap.right().clone()]);
        }
        self.generation = Some(engine.generation());
        true
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn route_of(&self, id: &WindowId) -> Option<&SnapKey> {
        self.by_member.get(id)
    }

    /// Both members translate by the same delta.
    pub fn mover(&self, key: &SnapKey, delta: Vec2) -> Vec<(WindowId, SnapEvent)> {
        let Some(members) = self.routes.get(key) else {
            return Vec::new();
        };
        members
            .iter()
            .map(|id| (id.clone(), SnapEvent::Translate { delta }))
            .collect()
    }

    /// The left member grows by `dx` while the right member shifts by `dx`
    /// and shrinks by the same amount, keeping the shared edge in place.
    pub fn resizer(&self, key: &SnapKey, dx: f64) -> Vec<(WindowId, SnapEvent)> {
        let Some([left, right]) = self.routes.get(key) else {
            return Vec::new();
        };
        vec![
            (
                left.clone(),
                SnapEvent::ResizeBy {
                    position: Vec2::ZERO,
                    size: Vec2::new(dx, 0.0),
                },
            ),
            (
                right.clone(),
                SnapEvent::ResizeBy {
                    position: Vec2::new(dx, 0.0),
                    size: Vec2::new(-dx, 0.0),
                },
            ),
        ]
    }
}
