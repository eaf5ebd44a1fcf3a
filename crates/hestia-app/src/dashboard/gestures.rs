//! Pointer gestures against the render surface's grid bounds.

use hestia_common::store::PersistenceGateway;
use hestia_common::types::{GRID_COLS, GRID_ROWS};
use hestia_common::{LayoutError, Notice, TileId};
use hestia_grid::geometry::{cell_rect, cell_size};
use hestia_grid::{CommandOutcome, DragUpdate, GestureKind, GridCommand};

use super::core::Dashboard;
use crate::surface::RenderSurface;

impl<P: PersistenceGateway, S: RenderSurface> Dashboard<P, S> {
    /// Feed one pointer command to the layout engine and redraw the tiles.
    pub fn pointer(&mut self, cmd: GridCommand) -> Result<CommandOutcome, LayoutError> {
        let bounds = self.surface.grid_bounds();
        let outcome = self.layout.execute(cmd, bounds);
        self.render_tiles();
        outcome
    }

    /// Drag tile `id` by whole cells, the way a pointer would: press on the
    /// tile body (or its resize handle), move in one-cell steps, release.
    ///
    /// Deltas beyond the grid's extent are capped to it. Returns `false` if
    /// the gesture could not start or its final position was blocked. A
    /// blocked tile keeps its last valid position.
    pub fn drag_tile(&mut self, id: TileId, kind: GestureKind, dcols: i32, drows: i32) -> bool {
        let bounds = self.surface.grid_bounds();
        let Some(rect) = self.layout.tile(id).map(|t| t.rect()) else {
            self.notify(Notice::error(LayoutError::TileNotFound(id).to_string()));
            return false;
        };
        let (cell_w, cell_h) = cell_size(bounds);
        let px = cell_rect(rect, bounds, 0.0);
        let (start_x, start_y) = match kind {
            GestureKind::Move => (px.x + px.width / 2.0, px.y + px.height / 2.0),
            GestureKind::Resize => (px.x + px.width - 1.0, px.y + px.height - 1.0),
        };

        let down = GridCommand::PointerDown {
            tile: id,
            kind,
            x: start_x,
            y: start_y,
        };
        if let Err(e) = self.pointer(down) {
            self.notify(Notice::error(e.to_string()));
            return false;
        }

        let dcols = dcols.clamp(-GRID_COLS, GRID_COLS);
        let drows = drows.clamp(-GRID_ROWS, GRID_ROWS);
        let steps = dcols.unsigned_abs().max(drows.unsigned_abs()).max(1);
        let mut last = None;
        for step in 1..=steps {
            let t = f64::from(step) / f64::from(steps);
            let x = start_x + f64::from(dcols) * cell_w * t;
            let y = start_y + f64::from(drows) * cell_h * t;
            if let Ok(CommandOutcome::Dragged(update)) = self.pointer(GridCommand::PointerMove { x, y }) {
                last = Some(update);
            }
        }
        let end = self.pointer(GridCommand::PointerUp);
        tracing::debug!(%id, ?end, "drag finished");

        if let Some(DragUpdate::Blocked { kept, blocked_by, .. }) = last {
            self.notify(Notice::error(format!(
                "Blocked by app {blocked_by}; kept at ({},{}) {}x{}",
                kept.x, kept.y, kept.cols, kept.rows
            )));
            return false;
        }
        true
    }
}
