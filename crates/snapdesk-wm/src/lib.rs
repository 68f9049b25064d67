//! Window bounds tracking and edge snapping for desktop-environment UIs.
//!
//! A [`Manager`] owns the root surface and one or more [`Workspace`]s.
//! Each workspace keeps a [`WindowController`] per mounted window and a
//! [`SnapEngine`] that watches window bounds, proposes a tentative snap
//! while a window is dragged near another, and commits it on release.

pub mod manager;
pub mod pointer;
pub mod registry;
pub mod scale;
pub mod snap;
pub mod timer;
pub mod window;
pub mod workspace;

pub use manager::{Interaction, Manager, ManagerState};
pub use pointer::{InputSource, PointerInput, PointerState, PointerTracker};
pub use registry::{EdgeHint, WindowRecord, WindowRegistry};
pub use scale::ScaleTransform;
pub use snap::{Snap, SnapControl, SnapEngine, SnapGeometry, SnapKey, Snapping, ToSnap};
pub use timer::Timer;
pub use window::{ResizeDirection, WindowController, WindowSpec, WindowState};
pub use workspace::Workspace;
