//! The Workspace coordinates window controllers, the snap engine, focus
//! and z-order, and the fan-out of shared snap-control drags.

mod dispatch;
mod focus;
mod interaction;
mod operations;
mod types;

pub use dispatch::{SnapDispatcher, SnapEvent};
pub use operations::AUTO_PLACE_STEP;
pub use types::*;
