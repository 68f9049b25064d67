//! Core value types for tentative and committed snaps.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use snapdesk_common::{Size, Vec2, WindowId};

use crate::registry::EdgeHint;

/// Axis along which two windows share an edge. Only side-by-side pairs
/// are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum SnapOrientation {
    Horizontal,
}

/// Identity of a snap: its ordered (left, right) member pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SnapKey {
    pub left: WindowId,
    pub right: WindowId,
}

impl SnapKey {
    pub fn involves(&self, id: &WindowId) -> bool {
        &self.left == id || &self.right == id
    }
}

impl fmt::Display for SnapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.left, self.right)
    }
}

/// A proximity match evaluated live while a window is dragged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapping {
    pub orientation: SnapOrientation,
    /// The window being moved or resized.
    pub interacted: WindowId,
    pub left: WindowId,
    pub right: WindowId,
    /// Every window taking part in the snap.
    pub related: BTreeSet<WindowId>,
}

impl Snapping {
    /// Pair `interacted` with `neighbor`, which lies on the `side` of it.
    pub fn new(interacted: WindowId, neighbor: WindowId, side: EdgeHint) -> Self {
        let (left, right) = match side {
            EdgeHint::Left => (neighbor, interacted.clone()),
            EdgeHint::Right => (interacted.clone(), neighbor),
        };
        let related = [left.clone(), right.clone()].into_iter().collect();
        Self {
            orientation: SnapOrientation::Horizontal,
            interacted,
            left,
            right,
            related,
        }
    }

    pub fn key(&self) -> SnapKey {
        SnapKey {
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }

    /// Same orientation and same (left, right) pair. Used to skip
    /// redundant updates while the pointer moves.
    pub fn same_as(&self, other: &Snapping) -> bool {
        self.orientation == other.orientation && self.left == other.left && self.right == other.right
    }

    pub fn involves(&self, id: &WindowId) -> bool {
        self.related.contains(id)
    }

    /// The other member of the pair.
    pub fn partner_of(&self, id: &WindowId) -> Option<&WindowId> {
        if &self.left == id {
            Some(&self.right)
        } else if &self.right == id {
            Some(&self.left)
        } else {
            None
        }
    }
}

/// A committed snap: two windows sharing a mover and a resizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snap {
    #[serde(flatten)]
    pub snapping: Snapping,
    /// The shared mover is being dragged.
    pub snap_moving: bool,
    /// The shared resizer is being dragged.
    pub snap_resizing: bool,
    pub z_index: u64,
}

impl Snap {
    pub fn commit(snapping: Snapping) -> Self {
        Self {
            snapping,
            snap_moving: false,
            snap_resizing: false,
            z_index: 0,
        }
    }

    pub fn key(&self) -> SnapKey {
        self.snapping.key()
    }

    pub fn left(&self) -> &WindowId {
        &self.snapping.left
    }

    pub fn right(&self) -> &WindowId {
        &self.snapping.right
    }

    pub fn involves(&self, id: &WindowId) -> bool {
        self.snapping.involves(id)
    }

    pub fn is_dragging(&self) -> bool {
        self.snap_moving || self.snap_resizing
    }
}

/// One-shot instruction to lay a window flush against its new partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToSnap {
    pub target: WindowId,
    pub windows: Vec<WindowId>,
    pub new_position: Option<Vec2>,
    pub new_size: Option<Size>,
}
