//! Initial tile layout validation.

use std::collections::HashSet;

use hestia_common::types::{GRID_COLS, GRID_ROWS};

use crate::schema::HestiaConfig;

/// Initial tiles have unique ids, fit the grid, and do not overlap.
pub(crate) fn validate_apps(errors: &mut Vec<String>, config: &HestiaConfig) {
    let mut seen = HashSet::new();
    for (i, tile) in config.apps.iter().enumerate() {
        if !seen.insert(tile.id) {
            errors.push(format!("apps[{i}]: duplicate id {}", tile.id));
        }
        if !tile.rect().fits_grid() {
            errors.push(format!(
                "apps[{i}] ({}): {}x{} at ({}, {}) does not fit the {GRID_COLS}x{GRID_ROWS} grid",
                tile.name, tile.cols, tile.rows, tile.x, tile.y
            ));
        }
        for other in &config.apps[..i] {
            if tile.rect().intersects(&other.rect()) {
                errors.push(format!(
                    "apps[{i}] ({}) overlaps tile {} ({})",
                    tile.name, other.id, other.name
                ));
            }
        }
    }
}
