use serde::{Deserialize, Serialize};

use super::GridRect;
use crate::id::TileId;

/// Kind tag of a tile. Only static cards exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    #[default]
    Static,
}

/// A placed dashboard tile ("app").
///
/// Field names match the persisted `apps` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: TileKind,
    pub x: i32,
    pub y: i32,
    pub cols: i32,
    pub rows: i32,
}

impl Tile {
    pub fn new(id: TileId, name: impl Into<String>, rect: GridRect) -> Self {
        Self {
            id,
            name: name.into(),
            kind: TileKind::Static,
            x: rect.x,
            y: rect.y,
            cols: rect.cols,
            rows: rect.rows,
        }
    }

    pub fn rect(&self) -> GridRect {
        GridRect::new(self.x, self.y, self.cols, self.rows)
    }

    pub fn set_rect(&mut self, rect: GridRect) {
        self.x = rect.x;
        self.y = rect.y;
        self.cols = rect.cols;
        self.rows = rect.rows;
    }

    /// Size label shown on the card, e.g. `2x1`.
    pub fn label(&self) -> String {
        format!("{}x{}", self.cols, self.rows)
    }
}
