//! Core types and constructors for LayoutEngine.

use hestia_common::types::Tile;
use hestia_common::TileId;
use tracing::warn;

use crate::collision::CollisionIndex;
use crate::geometry::clamp_rect;

use super::gesture::Gesture;

/// Top-level interaction mode of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Viewing,
    Editing,
}

/// Owns tile placement: the authoritative (committed) layout, the live
/// arrangement being edited, and the state of any in-flight gesture.
///
/// Outside edit mode `live` mirrors `committed`. Leaving edit mode
/// snapshots `live` into `committed` and persists it.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    /// Layout as of the last commit.
    pub(super) committed: Vec<Tile>,
    /// Layout as currently displayed.
    pub(super) live: Vec<Tile>,
    pub(super) mode: Mode,
    /// Active move/resize gesture, if the pointer is down on a tile.
    pub(super) gesture: Option<Gesture>,
    /// Tile whose last drag candidate was rejected. Advisory only.
    pub(super) collision: Option<TileId>,
    /// Tile awaiting delete confirmation.
    pub(super) pending_delete: Option<TileId>,
}

impl LayoutEngine {
    /// Create an empty engine in viewing mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from a stored or configured tile list.
    ///
    /// Out-of-bounds tiles are clamped into the grid and any tile that
    /// overlaps an earlier one is dropped, so the result always satisfies
    /// the non-overlap invariant.
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        let tiles = sanitize(tiles);
        Self {
            committed: tiles.clone(),
            live: tiles,
            ..Self::default()
        }
    }

    // -- Accessors --

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Editing
    }

    /// Tiles as currently displayed.
    pub fn tiles(&self) -> &[Tile] {
        &self.live
    }

    /// Tiles as of the last commit.
    pub fn committed_tiles(&self) -> &[Tile] {
        &self.committed
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.live.iter().find(|t| t.id == id)
    }

    pub fn tile_count(&self) -> usize {
        self.live.len()
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    /// Tile currently flagged as colliding during a drag.
    pub fn collision_flag(&self) -> Option<TileId> {
        self.collision
    }

    pub fn pending_delete(&self) -> Option<TileId> {
        self.pending_delete
    }

    pub fn collisions(&self) -> CollisionIndex<'_> {
        CollisionIndex::new(&self.live)
    }

    pub(super) fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.live.iter_mut().find(|t| t.id == id)
    }
}

/// Clamp every tile into the grid and drop tiles that collide with an
/// earlier one or reuse an earlier id.
pub(super) fn sanitize(tiles: Vec<Tile>) -> Vec<Tile> {
    let mut kept: Vec<Tile> = Vec::with_capacity(tiles.len());
    for mut tile in tiles {
        let rect = clamp_rect(tile.rect());
        if rect != tile.rect() {
            warn!(id = %tile.id, "tile out of bounds, clamped to {rect:?}");
            tile.set_rect(rect);
        }
        if kept.iter().any(|t| t.id == tile.id) {
            warn!(id = %tile.id, "dropping tile with duplicate id");
            continue;
        }
        if let Some(other) = CollisionIndex::new(&kept).first_hit(rect, None) {
            warn!(id = %tile.id, other = %other.id, "dropping tile that overlaps another");
            continue;
        }
        kept.push(tile);
    }
    kept
}
