//! Window option validation.

use super::helpers::validate_range_f64;
use crate::schema::WindowConfig;

/// Validate one window option set. `prefix` names it in error messages.
pub fn validate_window(errors: &mut Vec<String>, prefix: &str, window: &WindowConfig) {
    validate_range_f64(errors, &format!("{prefix}.min_size.width"), window.min_size.width, 0.0, 100_000.0);
    validate_range_f64(errors, &format!("{prefix}.min_size.height"), window.min_size.height, 0.0, 100_000.0);
    if let Some(max) = window.max_size {
        if max.width < window.min_size.width || max.height < window.min_size.height {
            errors.push(format!(
                "{prefix}.max_size ({} x {}) is smaller than min_size ({} x {})",
                max.width, max.height, window.min_size.width, window.min_size.height
            ));
        }
    }
    validate_range_f64(errors, &format!("{prefix}.resizer_threshold"), window.resizer_threshold, 0.0, 64.0);
    validate_range_f64(errors, &format!("{prefix}.staging_distance"), window.staging_distance, 0.0, 2000.0);
    validate_range_f64(errors, &format!("{prefix}.staged_size.width"), window.staged_size.width, 0.0, 2000.0);
    validate_range_f64(errors, &format!("{prefix}.staged_size.height"), window.staged_size.height, 0.0, 2000.0);
}
