//! The WindowController: one window's position, size, interaction flags,
//! staging and focus.

mod bounds;
mod drag;
mod focus;
pub mod resize;
mod types;

pub use drag::DragState;
pub use resize::{ResizeDelta, ResizeDirection};
pub use types::*;
