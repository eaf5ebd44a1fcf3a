//! Create, delete and rename operations on the LayoutEngine.

use hestia_common::types::Tile;
use hestia_common::{new_tile_id, LayoutError, TileId};
use tracing::{debug, info};

use super::{LayoutEngine, Mode};

/// Name given to a tile created without one.
pub const DEFAULT_TILE_NAME: &str = "Static App";

impl LayoutEngine {
    /// Switch from viewing to editing. Returns `false` if already editing.
    pub fn enter_edit_mode(&mut self) -> bool {
        if self.is_editing() {
            return false;
        }
        self.live = self.committed.clone();
        self.mode = Mode::Editing;
        debug!("entered edit mode");
        true
    }

    fn require_editing(&self) -> Result<(), LayoutError> {
        if self.is_editing() {
            Ok(())
        } else {
            Err(LayoutError::NotEditing)
        }
    }

    /// Add a 1×1 tile at the first free cell (row-major from the top left).
    ///
    /// Fails with [`LayoutError::GridFull`] when every cell is taken; the
    /// layout is left unchanged.
    pub fn create_tile(&mut self, name: &str) -> Result<TileId, LayoutError> {
        self.require_editing()?;
        let cell = self
            .collisions()
            .first_free_cell()
            .ok_or(LayoutError::GridFull)?;

        let name = match name.trim() {
            "" => DEFAULT_TILE_NAME,
            trimmed => trimmed,
        };
        let id = new_tile_id(self.live.iter().chain(&self.committed).map(|t| t.id));
        self.live.push(Tile::new(id, name, cell));
        info!(%id, name, x = cell.x, y = cell.y, "tile created");
        Ok(id)
    }

    /// First step of a delete: remember which tile the user wants gone.
    pub fn request_delete(&mut self, id: TileId) -> Result<(), LayoutError> {
        self.require_editing()?;
        if self.tile(id).is_none() {
            return Err(LayoutError::TileNotFound(id));
        }
        self.pending_delete = Some(id);
        Ok(())
    }

    /// Second step of a delete: remove the pending tile.
    pub fn confirm_delete(&mut self) -> Result<Tile, LayoutError> {
        self.require_editing()?;
        let id = self
            .pending_delete
            .take()
            .ok_or(LayoutError::NoPendingDelete)?;
        let pos = self
            .live
            .iter()
            .position(|t| t.id == id)
            .ok_or(LayoutError::TileNotFound(id))?;
        if self.gesture.as_ref().is_some_and(|g| g.tile == id) {
            self.gesture = None;
            self.collision = None;
        }
        let removed = self.live.remove(pos);
        info!(%id, name = %removed.name, "tile deleted");
        Ok(removed)
    }

    /// Abandon a pending delete. Returns `true` if one was pending.
    pub fn cancel_delete(&mut self) -> bool {
        self.pending_delete.take().is_some()
    }

    /// Rename a tile. A blank name keeps the previous one.
    ///
    /// Returns `true` if the name changed.
    pub fn rename_tile(&mut self, id: TileId, name: &str) -> Result<bool, LayoutError> {
        self.require_editing()?;
        let tile = self.tile_mut(id).ok_or(LayoutError::TileNotFound(id))?;
        let name = name.trim();
        if name.is_empty() || tile.name == name {
            return Ok(false);
        }
        debug!(%id, from = %tile.name, to = name, "tile renamed");
        tile.name = name.to_string();
        Ok(true)
    }
}
