//! Manager and workspace validation.

use super::helpers::{validate_positive_f64, validate_range_f64, validate_range_u64};
use crate::schema::SnapdeskConfig;

pub(super) fn validate_manager(errors: &mut Vec<String>, config: &SnapdeskConfig) {
    let m = &config.manager;
    validate_positive_f64(errors, "manager.scale.x", m.scale.x, 10.0);
    validate_positive_f64(errors, "manager.scale.y", m.scale.y, 10.0);
    validate_positive_f64(errors, "manager.width", m.width, 100_000.0);
    validate_positive_f64(errors, "manager.height", m.height, 100_000.0);
    validate_range_u64(errors, "manager.resizer_hover_delay_ms", m.resizer_hover_delay_ms, 0, 5_000);
    validate_range_u64(errors, "manager.touch_handle_hide_ms", m.touch_handle_hide_ms, 0, 60_000);
}

pub(super) fn validate_workspace(errors: &mut Vec<String>, config: &SnapdeskConfig) {
    let w = &config.workspace;
    validate_range_f64(errors, "workspace.snap_margin", w.snap_margin, 0.0, 200.0);
    validate_range_f64(errors, "workspace.snap_threshold", w.snap_threshold, 0.0, 500.0);
    validate_range_f64(errors, "workspace.stageds_width", w.stageds_width, 0.0, 2000.0);
}
