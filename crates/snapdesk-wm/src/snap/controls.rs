//! Geometry and hit testing for a committed snap's shared controls.
//!
//! The controls live in the gap between the two members: a mover strip at
//! the top of the gap and a resizer filling the rest. All rects are in
//! window (unscaled) space.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use snapdesk_common::{Rect, Size, Vec2};

use super::types::SnapKey;
use crate::registry::WindowRecord;
use crate::timer::Timer;

// =============================================================================
// TYPES
// =============================================================================

/// Height of the mover strip at the top of the shared gap.
pub const MOVER_HEIGHT: f64 = 32.0;

/// Half-width of the extra hit zone on each side of the gap, so a
/// zero-margin snap is still grabbable.
pub const CONTROL_SLACK: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapControl {
    Mover,
    Resizer,
}

/// Everything the rendering layer needs to draw one snap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapGeometry {
    pub key: SnapKey,
    pub left: Rect,
    pub right: Rect,
    /// Region between the members' shared edges.
    pub gap: Rect,
    pub z_index: u64,
}

impl SnapGeometry {
    pub fn from_records(key: SnapKey, left: &WindowRecord, right: &WindowRecord, z_index: u64) -> Self {
        let l = left.rect();
        let r = right.rect();
        let top = l.top().max(r.top());
        let bottom = l.bottom().min(r.bottom());
        let gap = Rect {
            x: l.right(),
            y: top,
            width: (r.left() - l.right()).max(0.0),
            height: (bottom - top).max(0.0),
        };
        Self {
            key,
            left: l,
            right: r,
            gap,
            z_index,
        }
    }

    pub fn mover(&self) -> Rect {
        Rect {
            x: self.gap.x - CONTROL_SLACK,
            y: self.gap.y,
            width: self.gap.width + 2.0 * CONTROL_SLACK,
            height: MOVER_HEIGHT.min(self.gap.height),
        }
    }

    pub fn resizer(&self) -> Rect {
        let mover_height = MOVER_HEIGHT.min(self.gap.height);
        Rect {
            x: self.gap.x - CONTROL_SLACK,
            y: self.gap.y + mover_height,
            width: self.gap.width + 2.0 * CONTROL_SLACK,
            height: self.gap.height - mover_height,
        }
    }

    /// Which control (if any) is under `point`. The mover wins on overlap.
    pub fn hit_test(&self, point: Vec2) -> Option<SnapControl> {
        if self.mover().contains(point) {
            Some(SnapControl::Mover)
        } else if self.resizer().contains(point) {
            Some(SnapControl::Resizer)
        } else {
            None
        }
    }
}

// =============================================================================
// RESIZER
// =============================================================================

/// Width limits of one snap member.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthLimits {
    pub width: f64,
    pub min: f64,
    pub max: Option<f64>,
}

impl WidthLimits {
    pub fn new(size: Size, min: Size, max: Option<Size>) -> Self {
        Self {
            width: size.width,
            min: min.width,
            max: max.map(|m| m.width),
        }
    }
}

/// Clamp a shared-resizer delta so that the left member (growing by `dx`)
/// and the right member (shrinking by `dx`) both stay within their limits.
pub fn clamp_resizer_delta(dx: f64, left: WidthLimits, right: WidthLimits) -> f64 {
    let left_max = left.max.unwrap_or(f64::INFINITY);
    let right_max = right.max.unwrap_or(f64::INFINITY);

    let lo = (left.min - left.width).max(right.width - right_max);
    let hi = (left_max - left.width).min(right.width - right.min);
    if lo > hi {
        return 0.0;
    }
    dx.clamp(lo, hi)
}

// =============================================================================
// HOVER DEBOUNCE
// =============================================================================

/// Debounced hover state for shared resizers: the pointer must rest on the
/// same resizer for the configured delay before it counts as hovered.
#[derive(Debug, Clone, Default)]
pub struct ResizerHover {
    timer: Timer,
    pending: Option<SnapKey>,
    hovered: Option<SnapKey>,
}

impl ResizerHover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<&SnapKey> {
        self.hovered.as_ref()
    }

    /// Report which resizer (if any) is under the pointer right now.
    pub fn update(&mut self, now: Duration, over: Option<&SnapKey>, delay: Duration) {
        match over {
            None => {
                self.timer.cancel();
                self.pending = None;
                self.hovered = None;
            }
            Some(key) if self.hovered.as_ref() == Some(key) => {
                self.timer.cancel();
                self.pending = None;
            }
            Some(key) => {
                self.hovered = None;
                if self.pending.as_ref() != Some(key) {
                    self.pending = Some(key.clone());
                    self.timer.schedule(now, delay);
                }
            }
        }
    }

    /// Advance the debounce. Returns `true` when the hovered resizer changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.timer.fire(now) {
            self.hovered = self.pending.take();
            return true;
        }
        false
    }

    /// Forget a snap that no longer exists.
    pub fn forget(&mut self, key: &SnapKey) {
        if self.pending.as_ref() == Some(key) {
            self.pending = None;
            self.timer.cancel();
        }
        if self.hovered.as_ref() == Some(key) {
            self.hovered = None;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
