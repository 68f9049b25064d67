pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, SnapdeskError, WmError};
pub use events::{Event, EventBus};
pub use id::{new_id, WindowId};
pub use types::{InteractionKind, Rect, Size, Vec2};

pub type Result<T> = std::result::Result<T, SnapdeskError>;
