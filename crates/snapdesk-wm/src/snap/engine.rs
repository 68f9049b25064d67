//! The snap state machine for one workspace.
//!
//! Every bounds change of a window goes through [`SnapEngine::on_bounds_change`],
//! which refreshes the registry and re-evaluates proximity for that window.
//! Releasing a drag calls [`SnapEngine::on_user_bounds_change_end`], which
//! may commit the tentative snapping and hand back a one-shot [`ToSnap`].

use snapdesk_common::{InteractionKind, Size, Vec2, WindowId, WmError};
use snapdesk_config::{SnapWith, WorkspaceConfig};
use tracing::{debug, trace};

use super::controls::SnapGeometry;
use super::proximity::{find_neighbors, pair_holds};
use super::types::{Snap, SnapKey, Snapping, ToSnap};
use crate::registry::{WindowRecord, WindowRegistry};
use crate::scale::ScaleTransform;

#[derive(Debug, Clone)]
pub struct SnapEngine {
    enabled: bool,
    margin: f64,
    threshold: f64,
    snap_with: SnapWith,
    scale: ScaleTransform,
    registry: WindowRegistry,
    snapping: Option<Snapping>,
    /// Committed snaps in render order, last is topmost.
    snaps: Vec<Snap>,
    /// Bumped whenever the set of committed snaps changes.
    generation: u64,
}

impl SnapEngine {
    pub fn new(config: &WorkspaceConfig, scale: ScaleTransform) -> Self {
        Self {
            enabled: config.snap,
            margin: config.snap_margin,
            threshold: config.snap_threshold,
            snap_with: config.snap_with,
            scale,
            registry: WindowRegistry::new(),
            snapping: None,
            snaps: Vec::new(),
            generation: 0,
        }
    }

    /// Apply new workspace settings. Disabling snapping drops all snaps.
    pub fn configure(&mut self, config: &WorkspaceConfig) {
        self.enabled = config.snap;
        self.margin = config.snap_margin;
        self.threshold = config.snap_threshold;
        self.snap_with = config.snap_with;
        if !self.enabled {
            self.snapping = None;
            self.retain_snaps(|_| false);
        }
    }

    pub fn set_scale(&mut self, scale: ScaleTransform) {
        self.scale = scale;
    }

    pub fn scale(&self) -> &ScaleTransform {
        &self.scale
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn snapping(&self) -> Option<&Snapping> {
        self.snapping.as_ref()
    }

    pub fn snaps(&self) -> &[Snap] {
        &self.snaps
    }

    pub fn snap(&self, key: &SnapKey) -> Option<&Snap> {
        self.snaps.iter().find(|s| &s.key() == key)
    }

    /// The committed snap `id` belongs to, if any.
    pub fn snap_of(&self, id: &WindowId) -> Option<&Snap> {
        self.snaps.iter().find(|s| s.involves(id))
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // -------------------------------------------------------------------------
    // Bounds tracking
    // -------------------------------------------------------------------------

    /// Record new bounds for a window and re-evaluate its snap state.
    pub fn on_bounds_change(&mut self, record: WindowRecord) {
        let id = record.id.clone();
        self.registry.set(record);
        self.evaluate(&id);
    }

    fn evaluate(&mut self, id: &WindowId) {
        let Some((staged, interaction)) = self.registry.get(id).map(|r| (r.staged, r.interaction())) else {
            debug!(window = %id, "bounds change for unknown record, resetting snap state");
            self.clear_for(id);
            return;
        };

        if staged {
            self.clear_for(id);
            return;
        }
        if !self.enabled {
            return;
        }

        let neighbors = find_neighbors(&mut self.registry, id, self.threshold, &self.scale);
        trace!(window = %id, count = neighbors.len(), "proximity evaluated");

        if neighbors.len() > 2 {
            if self.snapping.as_ref().is_some_and(|s| s.involves(id)) {
                self.snapping = None;
            }
            self.retain_snaps(|s| !s.involves(id) || s.is_dragging());
            self.registry.clear_edge_hints();
            return;
        }

        // Pairs whose partner drifted out of range.
        let held = self.held_partners(id);
        self.retain_snaps(|s| {
            if s.is_dragging() || !s.involves(id) {
                return true;
            }
            s.snapping
                .partner_of(id)
                .is_some_and(|p| neighbors.contains(p) || held.contains(p))
        });

        if neighbors.is_empty() {
            if self.snapping.as_ref().is_some_and(|s| s.involves(id)) {
                self.snapping = None;
            }
            self.registry.clear_edge_hints();
            return;
        }

        if let Some(kind) = interaction.filter(|k| self.snap_with.permits(*k)) {
            for neighbor in &neighbors {
                let Some(side) = self.registry.get(neighbor).and_then(|r| r.edge_hint) else {
                    continue;
                };
                let candidate = Snapping::new(id.clone(), neighbor.clone(), side);
                let key = candidate.key();
                self.retain_snaps(|s| s.key() != key || s.is_dragging());

                if self.snapping.as_ref().is_some_and(|s| s.same_as(&candidate)) {
                    continue;
                }
                debug!(left = %candidate.left, right = %candidate.right, ?kind, "snap candidate");
                self.snapping = Some(candidate);
            }
        }

        self.registry.clear_edge_hints();
    }

    /// Partners of `id` in committed pairs that still share their edge.
    /// A pair sitting at its commit gap always holds, even when the scaled
    /// margin exceeds the threshold.
    fn held_partners(&self, id: &WindowId) -> Vec<WindowId> {
        let reach = self.threshold.max(self.scale.scale_x(self.margin));
        self.snaps
            .iter()
            .filter(|s| s.involves(id))
            .filter(|s| {
                let rect = |w: &WindowId| self.registry.get(w).map(|r| self.scale.scale_rect(r.rect()));
                match (rect(s.left()), rect(s.right())) {
                    (Some(left), Some(right)) => pair_holds(&left, &right, self.threshold, reach),
                    _ => false,
                }
            })
            .filter_map(|s| s.snapping.partner_of(id).cloned())
            .collect()
    }

    /// Forget the tentative snapping and every snap involving `id`.
    fn clear_for(&mut self, id: &WindowId) {
        if self.snapping.as_ref().is_some_and(|s| s.involves(id)) {
            self.snapping = None;
        }
        self.retain_snaps(|s| !s.involves(id));
    }

    fn retain_snaps(&mut self, mut keep: impl FnMut(&Snap) -> bool) {
        let before = self.snaps.len();
        self.snaps.retain(|s| {
            let kept = keep(s);
            if !kept {
                debug!(left = %s.left(), right = %s.right(), "snap dropped");
            }
            kept
        });
        if self.snaps.len() != before {
            self.generation += 1;
        }
    }

    // -------------------------------------------------------------------------
    // Commit
    // -------------------------------------------------------------------------

    /// A drag or resize of `id` was released. Commits the tentative snapping
    /// when it belongs to `id` and the policy allows `kind`.
    pub fn on_user_bounds_change_end(&mut self, id: &WindowId, kind: InteractionKind) -> Option<ToSnap> {
        let Some((staged, moved)) = self.registry.get(id).map(|r| (r.staged, r.rect())) else {
            debug!(window = %id, "interaction ended for unknown record, resetting snap state");
            self.clear_for(id);
            return None;
        };
        if staged {
            self.clear_for(id);
            return None;
        }
        if !self.snapping.as_ref().is_some_and(|s| &s.interacted == id) {
            return None;
        }
        // The tentative snapping never outlives the interaction that made it.
        let snapping = self.snapping.take()?;
        if !self.enabled || !self.snap_with.permits(kind) {
            return None;
        }
        let partner_id = snapping.partner_of(id)?.clone();
        let partner = self.registry.get(&partner_id)?.rect();

        let new_position = if snapping.left == partner_id {
            Vec2::new(partner.right() + self.margin, partner.top())
        } else {
            Vec2::new(partner.left() - moved.width - self.margin, partner.top())
        };
        let new_size = Size::new(moved.width, partner.height);

        if let Some(rec) = self.registry.get_mut(id) {
            rec.position = new_position;
            rec.size = new_size;
        }

        let (left, right) = (snapping.left.clone(), snapping.right.clone());
        self.retain_snaps(|s| !s.involves(&left) && !s.involves(&right));
        debug!(left = %left, right = %right, "snap committed");
        self.snaps.push(Snap::commit(snapping));
        self.generation += 1;

        Some(ToSnap {
            target: id.clone(),
            windows: vec![left, right],
            new_position: Some(new_position),
            new_size: Some(new_size),
        })
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Purge records and snaps of unmounted windows. Returns the keys of
    /// the snaps that were dropped.
    pub fn reap(&mut self, ids: &[WindowId]) -> Vec<SnapKey> {
        if ids.is_empty() {
            return Vec::new();
        }
        let dropped: Vec<SnapKey> = self
            .snaps
            .iter()
            .filter(|s| ids.iter().any(|id| s.involves(id)))
            .map(Snap::key)
            .collect();
        for id in ids {
            self.registry.remove(id);
            self.clear_for(id);
        }
        dropped
    }

    /// Raise the snap owning `id` to `z_index`. Returns `false` when `id`
    /// is not in a snap.
    pub fn raise_snap_of(&mut self, id: &WindowId, z_index: u64) -> bool {
        match self.snaps.iter_mut().find(|s| s.involves(id)) {
            Some(snap) => {
                snap.z_index = z_index;
                true
            }
            None => false,
        }
    }

    pub fn raise_snap(&mut self, key: &SnapKey, z_index: u64) -> Result<(), WmError> {
        let snap = self.snap_mut(key)?;
        snap.z_index = z_index;
        Ok(())
    }

    /// Mark a snap's shared control as dragged (`Some`) or released (`None`).
    pub fn set_snap_dragging(&mut self, key: &SnapKey, kind: Option<InteractionKind>) -> Result<(), WmError> {
        let snap = self.snap_mut(key)?;
        snap.snap_moving = kind == Some(InteractionKind::Move);
        snap.snap_resizing = kind == Some(InteractionKind::Resize);
        Ok(())
    }

    fn snap_mut(&mut self, key: &SnapKey) -> Result<&mut Snap, WmError> {
        self.snaps
            .iter_mut()
            .find(|s| &s.key() == key)
            .ok_or_else(|| WmError::UnknownSnap(key.to_string()))
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    pub fn geometry(&self, key: &SnapKey) -> Option<SnapGeometry> {
        let snap = self.snap(key)?;
        self.geometry_of(snap)
    }

    /// Geometry of every committed snap in render order.
    pub fn geometries(&self) -> Vec<SnapGeometry> {
        self.snaps.iter().filter_map(|s| self.geometry_of(s)).collect()
    }

    fn geometry_of(&self, snap: &Snap) -> Option<SnapGeometry> {
        let left = self.registry.get(snap.left())?;
        let right = self.registry.get(snap.right())?;
        Some(SnapGeometry::from_records(snap.key(), left, right, snap.z_index))
    }
}
