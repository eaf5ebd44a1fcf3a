//! Render surface configuration.

use serde::{Deserialize, Serialize};

/// Geometry of the terminal render surface.
///
/// The grid container is treated as `grid_width`×`grid_height` pixels;
/// drag commands issued from the CLI are converted to pixel deltas against
/// these bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub grid_width: f64,
    pub grid_height: f64,
    /// Print the resolved theme after every change.
    pub show_theme: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            grid_width: 1200.0,
            grid_height: 600.0,
            show_theme: false,
        }
    }
}
