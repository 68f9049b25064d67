use serde::{Deserialize, Serialize};
use std::fmt;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Identity of a window within a workspace.
///
/// Hosts usually pass their own string ids; windows mounted without one
/// get a fresh UUID.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(String);

impl WindowId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WindowId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for WindowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_valid_uuid() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().get_version_num(), 4);
    }

    #[test]
    fn generated_window_ids_are_unique() {
        let a = WindowId::new();
        let b = WindowId::default();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn window_id_from_str_and_display() {
        let id = WindowId::from("terminal");
        assert_eq!(id.as_str(), "terminal");
        assert_eq!(id.to_string(), "terminal");
        assert_eq!(WindowId::from(String::from("terminal")), id);
    }

    #[test]
    fn window_id_orders_lexically() {
        let mut ids = vec![WindowId::from("c"), WindowId::from("a"), WindowId::from("b")];
        ids.sort();
        let names: Vec<&str> = ids.iter().map(WindowId::as_str).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn window_id_serializes_as_plain_string() {
        let id = WindowId::from("editor");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"editor\"");
        let back: WindowId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
