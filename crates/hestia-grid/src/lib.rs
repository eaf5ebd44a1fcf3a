//! Grid layout for the HestiaHUD dashboard: cell geometry, collision
//! queries, and the LayoutEngine that owns tile placement and edit mode.

pub mod collision;
pub mod commands;
pub mod engine;
pub mod geometry;

pub use collision::CollisionIndex;
pub use commands::{CommandOutcome, GridCommand};
pub use engine::{DragUpdate, Gesture, GestureKind, LayoutEngine, Mode, DEFAULT_TILE_NAME};
