use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::WindowId;

/// Lifecycle notifications a workspace publishes for its collaborators
/// (the rendering layer, tray widgets, hosts logging layout changes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    WindowMounted(WindowId),
    WindowUnmounted(WindowId),
    WindowFocused(WindowId),
    WindowStaged(WindowId),
    WindowUnstaged(WindowId),
    SnapCommitted { left: WindowId, right: WindowId },
    SnapDropped { left: WindowId, right: WindowId },
    #[serde(other)]
    Unknown,
}

/// Broadcast channel for [`Event`]s. Clones share the same channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Publish without blocking. Returns the number of live subscribers.
    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
