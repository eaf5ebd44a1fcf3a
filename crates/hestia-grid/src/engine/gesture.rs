//! Pointer gestures: drag-to-move and drag-to-resize.
//!
//! A gesture records the tile's grid rectangle and the pointer position
//! at pointer-down. Every pointer-move recomputes the candidate from the
//! total delta since then, so dropped or coalesced move events never
//! cause drift.

use hestia_common::types::{GridRect, PixelRect};
use hestia_common::{LayoutError, TileId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::{cell_size, clamp_move, clamp_resize, pixel_delta_to_cell_delta};

use super::LayoutEngine;

// =============================================================================
// TYPES
// =============================================================================

/// What a drag does to its tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    /// Pointer went down on the tile body: translate the origin.
    Move,
    /// Pointer went down on the resize handle: grow or shrink the span.
    Resize,
}

/// Snapshot taken at pointer-down.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    pub tile: TileId,
    pub kind: GestureKind,
    /// Tile rectangle when the gesture started.
    pub start_rect: GridRect,
    /// Pointer position (pixels) when the gesture started.
    pub start_x: f64,
    pub start_y: f64,
    /// Cell size (pixels) measured from the grid container at start.
    pub cell_w: f64,
    pub cell_h: f64,
}

impl Gesture {
    /// Candidate rectangle for a pointer at `(x, y)`, clamped into the grid.
    pub fn candidate(&self, x: f64, y: f64) -> GridRect {
        let (dc, dr) =
            pixel_delta_to_cell_delta(x - self.start_x, y - self.start_y, self.cell_w, self.cell_h);
        let s = self.start_rect;
        match self.kind {
            GestureKind::Move => {
                let (nx, ny) =
                    clamp_move(s.x.saturating_add(dc), s.y.saturating_add(dr), s.cols, s.rows);
                GridRect::new(nx, ny, s.cols, s.rows)
            }
            GestureKind::Resize => {
                let (nc, nr) =
                    clamp_resize(s.x, s.y, s.cols.saturating_add(dc), s.rows.saturating_add(dr));
                GridRect::new(s.x, s.y, nc, nr)
            }
        }
    }
}

/// Result of a pointer-move during a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragUpdate {
    /// The candidate was free and is now the tile's live geometry.
    Applied(GridRect),
    /// The candidate overlaps `blocked_by`; the tile keeps `kept`.
    Blocked {
        candidate: GridRect,
        kept: GridRect,
        blocked_by: TileId,
    },
}

// =============================================================================
// STATE MACHINE
// =============================================================================

impl LayoutEngine {
    /// Start a gesture on `tile` with the pointer at `(x, y)`.
    ///
    /// `grid_bounds` is the grid container's pixel rectangle, read from the
    /// render surface once per gesture.
    pub fn pointer_down(
        &mut self,
        tile: TileId,
        kind: GestureKind,
        x: f64,
        y: f64,
        grid_bounds: PixelRect,
    ) -> Result<(), LayoutError> {
        if !self.is_editing() {
            return Err(LayoutError::NotEditing);
        }
        if self.gesture.is_some() {
            return Err(LayoutError::GestureInProgress);
        }
        let start_rect = self
            .tile(tile)
            .map(|t| t.rect())
            .ok_or(LayoutError::TileNotFound(tile))?;
        let (cell_w, cell_h) = cell_size(grid_bounds);

        debug!(%tile, ?kind, ?start_rect, "gesture started");
        self.gesture = Some(Gesture {
            tile,
            kind,
            start_rect,
            start_x: x,
            start_y: y,
            cell_w,
            cell_h,
        });
        self.collision = None;
        Ok(())
    }

    /// Track the pointer. Returns `None` when no gesture is active.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<DragUpdate> {
        let gesture = self.gesture.as_ref()?;
        let id = gesture.tile;
        let candidate = gesture.candidate(x, y);

        if let Some(blocker) = self.collisions().first_hit(candidate, Some(id)) {
            let blocked_by = blocker.id;
            let kept = self.tile(id)?.rect();
            self.collision = Some(id);
            return Some(DragUpdate::Blocked {
                candidate,
                kept,
                blocked_by,
            });
        }

        self.tile_mut(id)?.set_rect(candidate);
        self.collision = None;
        Some(DragUpdate::Applied(candidate))
    }

    /// Finish the gesture. Returns the tile's final rectangle, which is the
    /// last candidate that was applied (or its start rectangle).
    pub fn pointer_up(&mut self) -> Option<GridRect> {
        let gesture = self.gesture.take()?;
        self.collision = None;
        let rect = self.tile(gesture.tile).map(|t| t.rect());
        debug!(tile = %gesture.tile, ?rect, "gesture finished");
        rect
    }
}
