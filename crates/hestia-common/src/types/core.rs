use serde::{Deserialize, Serialize};

/// Number of columns in the dashboard grid.
pub const GRID_COLS: i32 = 10;
/// Number of rows in the dashboard grid.
pub const GRID_ROWS: i32 = 6;

/// A rectangle in pixel space (render surface coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A rectangle in grid space: 1-based origin plus a span in cells.
///
/// Covers columns `x..x+cols` and rows `y..y+rows` (end exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridRect {
    pub x: i32,
    pub y: i32,
    pub cols: i32,
    pub rows: i32,
}

impl GridRect {
    pub const fn new(x: i32, y: i32, cols: i32, rows: i32) -> Self {
        Self { x, y, cols, rows }
    }

    /// A single cell at `(x, y)`.
    pub const fn cell(x: i32, y: i32) -> Self {
        Self::new(x, y, 1, 1)
    }

    /// Last column covered (inclusive).
    pub fn last_col(&self) -> i32 {
        self.x + self.cols - 1
    }

    /// Last row covered (inclusive).
    pub fn last_row(&self) -> i32 {
        self.y + self.rows - 1
    }

    /// Strict overlap of the half-open projections. Shared edges do not count.
    pub fn intersects(&self, other: &GridRect) -> bool {
        self.x < other.x + other.cols
            && self.x + self.cols > other.x
            && self.y < other.y + other.rows
            && self.y + self.rows > other.y
    }

    /// Whether the rectangle has a positive span and lies inside the grid.
    pub fn fits_grid(&self) -> bool {
        self.cols >= 1
            && self.rows >= 1
            && self.x >= 1
            && self.y >= 1
            && self.last_col() <= GRID_COLS
            && self.last_row() <= GRID_ROWS
    }
}
