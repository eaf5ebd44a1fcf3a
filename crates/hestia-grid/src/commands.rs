//! Uniform command dispatch for front ends.

use hestia_common::types::{GridRect, PixelRect, Tile};
use hestia_common::{LayoutError, TileId};
use serde::{Deserialize, Serialize};

use crate::engine::{DragUpdate, GestureKind, LayoutEngine};

/// Every edit-mode input the layout engine understands.
///
/// Serializes as `{"type": ..., ...}` so a front end can send commands
/// as JSON messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GridCommand {
    Create { name: String },
    RequestDelete { id: TileId },
    ConfirmDelete,
    CancelDelete,
    Rename { id: TileId, name: String },
    PointerDown { tile: TileId, kind: GestureKind, x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
}

/// What a command did.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Created(TileId),
    DeleteRequested(TileId),
    Deleted(Tile),
    DeleteCancelled(bool),
    Renamed(bool),
    GestureStarted,
    Dragged(DragUpdate),
    GestureEnded(GridRect),
    /// Pointer input arrived with no gesture active.
    Ignored,
}

impl LayoutEngine {
    /// Execute a command. `grid_bounds` is only read for `PointerDown`.
    pub fn execute(
        &mut self,
        cmd: GridCommand,
        grid_bounds: PixelRect,
    ) -> Result<CommandOutcome, LayoutError> {
        let outcome = match cmd {
            GridCommand::Create { name } => CommandOutcome::Created(self.create_tile(&name)?),
            GridCommand::RequestDelete { id } => {
                self.request_delete(id)?;
                CommandOutcome::DeleteRequested(id)
            }
            GridCommand::ConfirmDelete => CommandOutcome::Deleted(self.confirm_delete()?),
            GridCommand::CancelDelete => CommandOutcome::DeleteCancelled(self.cancel_delete()),
            GridCommand::Rename { id, name } => CommandOutcome::Renamed(self.rename_tile(id, &name)?),
            GridCommand::PointerDown { tile, kind, x, y } => {
                self.pointer_down(tile, kind, x, y, grid_bounds)?;
                CommandOutcome::GestureStarted
            }
            GridCommand::PointerMove { x, y } => match self.pointer_move(x, y) {
                Some(update) => CommandOutcome::Dragged(update),
                None => CommandOutcome::Ignored,
            },
            GridCommand::PointerUp => match self.pointer_up() {
                Some(rect) => CommandOutcome::GestureEnded(rect),
                None => CommandOutcome::Ignored,
            },
        };
        Ok(outcome)
    }
}
