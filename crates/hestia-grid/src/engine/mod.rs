//! The LayoutEngine owns tile placement, edit mode, and drag gestures.

mod gesture;
mod operations;
mod persistence;
mod types;

pub use gesture::{DragUpdate, Gesture, GestureKind};
pub use operations::DEFAULT_TILE_NAME;
pub use types::*;
