//! Surface validation.

use crate::schema::HestiaConfig;

use super::helpers::validate_range_f64;

/// The grid container must be large enough to hold a cell.
pub(crate) fn validate_surface(errors: &mut Vec<String>, config: &HestiaConfig) {
    validate_range_f64(errors, "surface.grid_width", config.surface.grid_width, 100.0, 10000.0);
    validate_range_f64(errors, "surface.grid_height", config.surface.grid_height, 60.0, 10000.0);
}
