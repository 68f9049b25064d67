//! Edge proximity between an interacting window and its candidates.
//!
//! Distances are measured in manager (scaled) space so the threshold means
//! the same number of on-screen pixels at any scale.

use snapdesk_common::{Rect, WindowId};

use crate::registry::{EdgeHint, WindowRegistry};
use crate::scale::ScaleTransform;

/// Classify `candidate` relative to `interacted`. Both rects must already
/// be in manager space.
///
/// The left check runs first: a candidate that qualifies on both sides
/// resolves to [`EdgeHint::Left`].
pub fn edge_hint(interacted: &Rect, candidate: &Rect, threshold: f64) -> Option<EdgeHint> {
    let top_gap = (candidate.top() - interacted.top()).abs();
    let bottom_gap = (candidate.bottom() - interacted.bottom()).abs();
    if top_gap > threshold || bottom_gap > threshold {
        return None;
    }

    let left_right_gap = (candidate.right() - interacted.left()).abs();
    if left_right_gap <= threshold {
        return Some(EdgeHint::Left);
    }

    let right_left_gap = (candidate.left() - interacted.right()).abs();
    if right_left_gap <= threshold {
        return Some(EdgeHint::Right);
    }

    None
}

/// Whether a committed pair still shares its edge. Both rects must be in
/// manager space.
///
/// The horizontal gap may reach `reach`, which callers set to at least the
/// scaled snap margin so a pair never loses itself at its own commit gap.
/// Only the tops are compared: a snap forces equal heights, but the height
/// of a member may later be clamped to its own limits.
pub fn pair_holds(left: &Rect, right: &Rect, threshold: f64, reach: f64) -> bool {
    let gap = (right.left() - left.right()).abs();
    let top_gap = (right.top() - left.top()).abs();
    gap <= reach && top_gap <= threshold
}

/// Collect every non-staged window that qualifies as a neighbor of
/// `interacted`, writing each one's [`EdgeHint`] into its record.
///
/// Hints of non-qualifying records are cleared. Returns an empty list when
/// `interacted` has no record.
pub fn find_neighbors(
    registry: &mut WindowRegistry,
    interacted: &WindowId,
    threshold: f64,
    scale: &ScaleTransform,
) -> Vec<WindowId> {
    let Some(target) = registry.get(interacted).map(|r| scale.scale_rect(r.rect())) else {
        return Vec::new();
    };

    let mut neighbors = Vec::new();
    for record in registry.iter_mut() {
        record.edge_hint = None;
        if &record.id == interacted || record.staged {
            continue;
        }
        let candidate = scale.scale_rect(record.rect());
        if let Some(hint) = edge_hint(&target, &candidate, threshold) {
            tracing::trace!(window = %record.id, ?hint, "neighbor candidate");
            record.edge_hint = Some(hint);
            neighbors.push(record.id.clone());
        }
    }
    neighbors
}
