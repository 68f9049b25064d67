//! The Manager owns the root surface, the pointer and the workspaces, and
//! turns raw pointer samples into window and snap interactions.

mod frame;
mod input;
mod types;

pub use types::*;
