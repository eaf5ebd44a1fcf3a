//! Overlap queries against the placed tile set.
//!
//! The grid holds at most sixty cells, so every query is a linear scan
//! over the tiles; no spatial index is kept.

use hestia_common::types::{GridRect, Tile, GRID_COLS, GRID_ROWS};
use hestia_common::TileId;

/// Read-only view over a tile set answering collision queries.
#[derive(Debug, Clone, Copy)]
pub struct CollisionIndex<'a> {
    tiles: &'a [Tile],
}

impl<'a> CollisionIndex<'a> {
    pub fn new(tiles: &'a [Tile]) -> Self {
        Self { tiles }
    }

    /// Whether `candidate` overlaps any tile other than `excluding`.
    pub fn overlaps(&self, candidate: GridRect, excluding: Option<TileId>) -> bool {
        self.first_hit(candidate, excluding).is_some()
    }

    /// The first tile (in list order) that `candidate` overlaps.
    pub fn first_hit(&self, candidate: GridRect, excluding: Option<TileId>) -> Option<&'a Tile> {
        self.tiles
            .iter()
            .filter(|t| Some(t.id) != excluding)
            .find(|t| t.rect().intersects(&candidate))
    }

    /// First free 1×1 cell scanning rows top to bottom, columns left to right.
    pub fn first_free_cell(&self) -> Option<GridRect> {
        (1..=GRID_ROWS)
            .flat_map(|y| (1..=GRID_COLS).map(move |x| GridRect::cell(x, y)))
            .find(|cell| !self.overlaps(*cell, None))
    }

    /// First pair of tiles that overlap each other, if any.
    pub fn find_overlap(&self) -> Option<(TileId, TileId)> {
        self.tiles.iter().enumerate().find_map(|(i, a)| {
            self.tiles[i + 1..]
                .iter()
                .find(|b| a.rect().intersects(&b.rect()))
                .map(|b| (a.id, b.id))
        })
    }
}

/// Whether `candidate` overlaps any tile in `tiles` other than `excluding`.
pub fn overlaps(candidate: GridRect, excluding: Option<TileId>, tiles: &[Tile]) -> bool {
    CollisionIndex::new(tiles).overlaps(candidate, excluding)
}
