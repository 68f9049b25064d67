//! Edge snapping between windows: proximity, tentative and committed snaps,
//! and the shared mover/resizer controls of a committed pair.

pub mod controls;
mod engine;
pub mod proximity;
mod types;

pub use controls::{clamp_resizer_delta, ResizerHover, SnapControl, SnapGeometry, WidthLimits};
pub use engine::SnapEngine;
pub use types::*;
