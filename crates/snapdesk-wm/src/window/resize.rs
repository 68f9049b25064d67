//! Edge-directed resizing: direction tags, delta resolution and clamping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use snapdesk_common::{Rect, Size, Vec2, WmError};

// =============================================================================
// TYPES
// =============================================================================

/// The edge or corner a resize is dragged from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeDirection {
    pub fn has_north(self) -> bool {
        matches!(self, Self::N | Self::NE | Self::NW)
    }

    pub fn has_south(self) -> bool {
        matches!(self, Self::S | Self::SE | Self::SW)
    }

    pub fn has_east(self) -> bool {
        matches!(self, Self::E | Self::NE | Self::SE)
    }

    pub fn has_west(self) -> bool {
        matches!(self, Self::W | Self::NW | Self::SW)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::S => "s",
            Self::E => "e",
            Self::W => "w",
            Self::NE => "ne",
            Self::NW => "nw",
            Self::SE => "se",
            Self::SW => "sw",
        }
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeDirection {
    type Err = WmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" => Ok(Self::N),
            "s" => Ok(Self::S),
            "e" => Ok(Self::E),
            "w" => Ok(Self::W),
            "ne" => Ok(Self::NE),
            "nw" => Ok(Self::NW),
            "se" => Ok(Self::SE),
            "sw" => Ok(Self::SW),
            _ => Err(WmError::InvalidResizeDirection(s.to_string())),
        }
    }
}

/// Change to a window's position and size produced by a pointer delta.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResizeDelta {
    pub position: Vec2,
    /// Signed change in width (`x`) and height (`y`).
    pub size: Vec2,
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Map a pointer delta onto position and size changes for `direction`.
///
/// East and south edges grow the size. West and north edges move the
/// origin by the delta and shrink the size by the same amount.
pub fn resolve_delta(direction: ResizeDirection, delta: Vec2) -> ResizeDelta {
    let mut out = ResizeDelta::default();
    if direction.has_east() {
        out.size.x = delta.x;
    }
    if direction.has_west() {
        out.position.x = delta.x;
        out.size.x = -delta.x;
    }
    if direction.has_south() {
        out.size.y = delta.y;
    }
    if direction.has_north() {
        out.position.y = delta.y;
        out.size.y = -delta.y;
    }
    out
}

/// Apply a resolved delta to a starting rect, clamping the size to
/// `[min, max]` while keeping the edge opposite the dragged one fixed.
pub fn apply_resize(
    start: Rect,
    direction: ResizeDirection,
    delta: ResizeDelta,
    min: Size,
    max: Option<Size>,
) -> (Vec2, Size) {
    let raw = Size::new(start.width + delta.size.x, start.height + delta.size.y);
    let size = raw.clamp(min, max);

    let x = if direction.has_west() {
        start.right() - size.width
    } else {
        start.x
    };
    let y = if direction.has_north() {
        start.bottom() - size.height
    } else {
        start.y
    };
    (Vec2::new(x, y), size)
}

/// The resize direction for a point inside `rect` within `threshold` of an
/// edge, or `None` when the point is in the interior or outside.
pub fn edge_at(rect: Rect, point: Vec2, threshold: f64) -> Option<ResizeDirection> {
    if threshold <= 0.0 || !rect.contains(point) {
        return None;
    }
    let west = point.x - rect.left() <= threshold;
    let east = !west && rect.right() - point.x <= threshold;
    let north = point.y - rect.top() <= threshold;
    let south = !north && rect.bottom() - point.y <= threshold;

    match (north, south, east, west) {
        (true, _, true, _) => Some(ResizeDirection::NE),
        (true, _, _, true) => Some(ResizeDirection::NW),
        (_, true, true, _) => Some(ResizeDirection::SE),
        (_, true, _, true) => Some(ResizeDirection::SW),
        (true, _, _, _) => Some(ResizeDirection::N),
        (_, true, _, _) => Some(ResizeDirection::S),
        (_, _, true, _) => Some(ResizeDirection::E),
        (_, _, _, true) => Some(ResizeDirection::W),
        _ => None,
    }
}

// =============================================================================
// TESTS
// =============================================================================
