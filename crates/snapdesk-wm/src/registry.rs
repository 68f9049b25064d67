//! Live window bounds for one workspace, keyed by window id.
//!
//! Records are updated in place and never replaced, so a record's identity
//! is stable for as long as the window is mounted. Iteration order is the
//! ascending id order, which keeps proximity evaluation deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use snapdesk_common::{InteractionKind, Rect, Size, Vec2, WindowId};

/// Which side of the interacting window a neighbor candidate sits on.
///
/// Scratch value written during proximity computation and cleared before
/// the evaluation returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeHint {
    /// Candidate's right edge touches the interacting window's left edge.
    Left,
    /// Candidate's left edge touches the interacting window's right edge.
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub position: Vec2,
    pub size: Size,
    pub moving: bool,
    pub resizing: bool,
    pub staged: bool,
    #[serde(skip)]
    pub edge_hint: Option<EdgeHint>,
}

impl WindowRecord {
    pub fn new(id: WindowId, position: Vec2, size: Size) -> Self {
        Self {
            id,
            position,
            size,
            moving: false,
            resizing: false,
            staged: false,
            edge_hint: None,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    /// The user interaction currently changing this window, if any.
    /// Moving wins over resizing.
    pub fn interaction(&self) -> Option<InteractionKind> {
        if self.moving {
            Some(InteractionKind::Move)
        } else if self.resizing {
            Some(InteractionKind::Resize)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WindowRegistry {
    records: BTreeMap<WindowId, WindowRecord>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.records.contains_key(id)
    }

    /// Insert a record, or update the existing one for the same id in place.
    pub fn set(&mut self, record: WindowRecord) {
        match self.records.get_mut(&record.id) {
            Some(existing) => {
                existing.position = record.position;
                existing.size = record.size;
                existing.moving = record.moving;
                existing.resizing = record.resizing;
                existing.staged = record.staged;
                existing.edge_hint = record.edge_hint;
            }
            None => {
                self.records.insert(record.id.clone(), record);
            }
        }
    }

    pub fn get(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.records.get(id)
    }

    pub fn get_mut(&mut self, id: &WindowId) -> Option<&mut WindowRecord> {
        self.records.get_mut(id)
    }

    pub fn remove(&mut self, id: &WindowId) -> Option<WindowRecord> {
        self.records.remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.records.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut WindowRecord> {
        self.records.values_mut()
    }

    /// A new registry holding copies of the records matching `predicate`.
    pub fn filter(&self, mut predicate: impl FnMut(&WindowRecord) -> bool) -> WindowRegistry {
        WindowRegistry {
            records: self
                .records
                .iter()
                .filter(|(_, r)| predicate(r))
                .map(|(id, r)| (id.clone(), r.clone()))
                .collect(),
        }
    }

    /// Map every record, keeping only the entries where `f` yields a value.
    pub fn map<T>(&self, mut f: impl FnMut(&WindowRecord) -> Option<T>) -> BTreeMap<WindowId, T> {
        self.records
            .iter()
            .filter_map(|(id, r)| f(r).map(|v| (id.clone(), v)))
            .collect()
    }

    pub fn clear_edge_hints(&mut self) {
        for record in self.records.values_mut() {
            record.edge_hint = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, x: f64, y: f64) -> WindowRecord {
        WindowRecord::new(WindowId::from(id), Vec2::new(x, y), Size::new(200.0, 150.0))
    }

    #[test]
    fn set_inserts_then_updates_in_place() {
        let mut reg = WindowRegistry::new();
        reg.set(record("a", 0.0, 0.0));
        assert_eq!(reg.len(), 1);

        let mut moved = record("a", 40.0, 10.0);
        moved.moving = true;
        reg.set(moved);

        assert_eq!(reg.len(), 1);
        let a = reg.get(&WindowId::from("a")).unwrap();
        assert_eq!(a.position, Vec2::new(40.0, 10.0));
        assert!(a.moving);
    }

    #[test]
    fn remove_returns_record() {
        let mut reg = WindowRegistry::new();
        reg.set(record("a", 0.0, 0.0));
        let removed = reg.remove(&WindowId::from("a")).unwrap();
        assert_eq!(removed.id.as_str(), "a");
        assert!(reg.is_empty());
        assert!(reg.remove(&WindowId::from("a")).is_none());
    }

    #[test]
    fn filter_builds_independent_registry() {
        let mut reg = WindowRegistry::new();
        reg.set(record("a", 0.0, 0.0));
        let mut b = record("b", 300.0, 0.0);
        b.staged = true;
        reg.set(b);

        let live = reg.filter(|r| !r.staged);
        assert_eq!(live.len(), 1);
        assert!(live.contains(&WindowId::from("a")));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn map_drops_none_results() {
        let mut reg = WindowRegistry::new();
        reg.set(record("a", 0.0, 0.0));
        reg.set(record("b", 300.0, 0.0));

        let rights = reg.map(|r| (r.position.x > 0.0).then(|| r.rect().right()));
        assert_eq!(rights.len(), 1);
        assert_eq!(rights[&WindowId::from("b")], 500.0);
    }

    #[test]
    fn interaction_prefers_move() {
        let mut r = record("a", 0.0, 0.0);
        assert_eq!(r.interaction(), None);
        r.resizing = true;
        assert_eq!(r.interaction(), Some(InteractionKind::Resize));
        r.moving = true;
        assert_eq!(r.interaction(), Some(InteractionKind::Move));
    }

    #[test]
    fn clear_edge_hints_resets_scratch() {
        let mut reg = WindowRegistry::new();
        let mut a = record("a", 0.0, 0.0);
        a.edge_hint = Some(EdgeHint::Left);
        reg.set(a);
        reg.clear_edge_hints();
        assert!(reg.get(&WindowId::from("a")).unwrap().edge_hint.is_none());
    }
}
