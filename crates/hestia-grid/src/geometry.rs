//! Grid geometry: pixel-to-cell conversion and bounds clamping.
//!
//! Everything here is pure. Inputs outside the grid are coerced back
//! into range rather than rejected.

use hestia_common::types::{GridRect, PixelRect, GRID_COLS, GRID_ROWS};

// =============================================================================
// PIXEL <-> CELL
// =============================================================================

/// Convert a pixel delta into a whole-cell delta.
///
/// Each axis rounds to the nearest cell, ties away from zero. A cell size
/// that is zero, negative or not finite yields no movement on that axis.
pub fn pixel_delta_to_cell_delta(dx_px: f64, dy_px: f64, cell_w: f64, cell_h: f64) -> (i32, i32) {
    (round_axis(dx_px, cell_w), round_axis(dy_px, cell_h))
}

fn round_axis(delta: f64, cell: f64) -> i32 {
    if !delta.is_finite() || !cell.is_finite() || cell <= 0.0 {
        return 0;
    }
    (delta / cell).round() as i32
}

/// Size of one grid cell inside the given container bounds.
pub fn cell_size(container: PixelRect) -> (f64, f64) {
    (
        container.width / GRID_COLS as f64,
        container.height / GRID_ROWS as f64,
    )
}

/// Project a grid rectangle into pixel space, with `gap` pixels between cells.
pub fn cell_rect(rect: GridRect, container: PixelRect, gap: f64) -> PixelRect {
    let cell_w = ((container.width - gap * (GRID_COLS - 1) as f64) / GRID_COLS as f64).max(0.0);
    let cell_h = ((container.height - gap * (GRID_ROWS - 1) as f64) / GRID_ROWS as f64).max(0.0);
    PixelRect {
        x: container.x + (rect.x - 1) as f64 * (cell_w + gap),
        y: container.y + (rect.y - 1) as f64 * (cell_h + gap),
        width: rect.cols as f64 * cell_w + (rect.cols - 1).max(0) as f64 * gap,
        height: rect.rows as f64 * cell_h + (rect.rows - 1).max(0) as f64 * gap,
    }
}

// =============================================================================
// CLAMPING
// =============================================================================

/// Clamp an origin so a `cols`×`rows` rectangle stays inside the grid.
/// Spans outside `1..=GRID` are read as the nearest valid span.
pub fn clamp_move(x: i32, y: i32, cols: i32, rows: i32) -> (i32, i32) {
    let cols = cols.clamp(1, GRID_COLS);
    let rows = rows.clamp(1, GRID_ROWS);
    (
        x.clamp(1, GRID_COLS - cols + 1),
        y.clamp(1, GRID_ROWS - rows + 1),
    )
}

/// Clamp a span so the rectangle anchored at `(x, y)` ends inside the grid.
/// Each dimension is at least one cell. An anchor off the grid is read as
/// the nearest cell.
pub fn clamp_resize(x: i32, y: i32, cols: i32, rows: i32) -> (i32, i32) {
    let x = x.clamp(1, GRID_COLS);
    let y = y.clamp(1, GRID_ROWS);
    (
        cols.clamp(1, GRID_COLS - x + 1),
        rows.clamp(1, GRID_ROWS - y + 1),
    )
}

/// Clamp a whole rectangle: span first (at its current origin), then origin.
pub fn clamp_rect(rect: GridRect) -> GridRect {
    let cols = rect.cols.clamp(1, GRID_COLS);
    let rows = rect.rows.clamp(1, GRID_ROWS);
    let (x, y) = clamp_move(rect.x, rect.y, cols, rows);
    GridRect::new(x, y, cols, rows)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_rounds_to_nearest_cell() {
        assert_eq!(pixel_delta_to_cell_delta(130.0, 40.0, 120.0, 100.0), (1, 0));
        assert_eq!(pixel_delta_to_cell_delta(170.0, 160.0, 120.0, 100.0), (1, 2));
        assert_eq!(pixel_delta_to_cell_delta(-250.0, -49.0, 120.0, 100.0), (-2, 0));
    }

    #[test]
    fn delta_ties_round_away_from_zero() {
        assert_eq!(pixel_delta_to_cell_delta(60.0, 50.0, 120.0, 100.0), (1, 1));
        assert_eq!(pixel_delta_to_cell_delta(-60.0, -50.0, 120.0, 100.0), (-1, -1));
    }

    #[test]
    fn degenerate_cell_size_yields_no_movement() {
        assert_eq!(pixel_delta_to_cell_delta(500.0, 500.0, 0.0, -1.0), (0, 0));
        assert_eq!(pixel_delta_to_cell_delta(500.0, f64::NAN, f64::INFINITY, 100.0), (0, 0));
    }

    #[test]
    fn cell_size_divides_container() {
        let container = PixelRect {
            x: 0.0,
            y: 0.0,
            width: 1200.0,
            height: 600.0,
        };
        assert_eq!(cell_size(container), (120.0, 100.0));
    }

    #[test]
    fn clamp_move_keeps_rect_inside() {
        assert_eq!(clamp_move(0, -3, 2, 1), (1, 1));
        assert_eq!(clamp_move(10, 6, 2, 2), (9, 5));
        assert_eq!(clamp_move(4, 3, 2, 2), (4, 3));
    }

    #[test]
    fn clamp_resize_caps_span() {
        assert_eq!(clamp_resize(9, 5, 5, 5), (2, 2));
        assert_eq!(clamp_resize(1, 1, 0, -4), (1, 1));
        assert_eq!(clamp_resize(3, 2, 4, 3), (4, 3));
    }

    #[test]
    fn clamp_survives_extreme_inputs() {
        assert_eq!(clamp_move(1, 1, i32::MIN, 1), (1, 1));
        assert_eq!(clamp_move(i32::MAX, i32::MIN, 2, i32::MAX), (9, 1));
        assert_eq!(clamp_move(i32::MAX, 3, i32::MIN, 1), (GRID_COLS, 3));
        assert_eq!(clamp_resize(i32::MIN, 1, i32::MAX, 1), (GRID_COLS, 1));
        assert_eq!(clamp_resize(i32::MAX, i32::MAX, i32::MAX, i32::MIN), (1, 1));
        assert_eq!(
            clamp_rect(GridRect::new(i32::MIN, i32::MAX, i32::MAX, i32::MIN)),
            GridRect::new(1, GRID_ROWS, GRID_COLS, 1)
        );
    }

    #[test]
    fn huge_pixel_delta_saturates() {
        assert_eq!(
            pixel_delta_to_cell_delta(1.0e12, -1.0e12, 120.0, 100.0),
            (i32::MAX, i32::MIN)
        );
    }

    #[test]
    fn clamp_is_idempotent_on_valid_rects() {
        for x in 1..=GRID_COLS {
            for y in 1..=GRID_ROWS {
                for cols in 1..=(GRID_COLS - x + 1) {
                    for rows in 1..=(GRID_ROWS - y + 1) {
                        assert_eq!(clamp_move(x, y, cols, rows), (x, y));
                        assert_eq!(clamp_resize(x, y, cols, rows), (cols, rows));
                    }
                }
            }
        }
    }

    #[test]
    fn clamp_twice_equals_clamp_once() {
        let once = clamp_move(15, -2, 3, 2);
        assert_eq!(clamp_move(once.0, once.1, 3, 2), once);
        let once = clamp_resize(7, 4, 12, 9);
        assert_eq!(clamp_resize(7, 4, once.0, once.1), once);
    }

    #[test]
    fn clamp_rect_repairs_oversized() {
        let r = clamp_rect(GridRect::new(8, 5, 20, 3));
        assert_eq!(r, GridRect::new(1, 4, 10, 3));
        assert!(r.fits_grid());
    }

    #[test]
    fn cell_rect_without_gap() {
        let container = PixelRect {
            x: 10.0,
            y: 20.0,
            width: 1000.0,
            height: 600.0,
        };
        let r = cell_rect(GridRect::new(2, 3, 2, 1), container, 0.0);
        assert!((r.x - 110.0).abs() < 0.01);
        assert!((r.y - 220.0).abs() < 0.01);
        assert!((r.width - 200.0).abs() < 0.01);
        assert!((r.height - 100.0).abs() < 0.01);
    }

    #[test]
    fn cell_rect_with_gap_spans_gaps() {
        let container = PixelRect {
            x: 0.0,
            y: 0.0,
            width: 1090.0,
            height: 650.0,
        };
        // cell = (1090 - 90) / 10 = 100 wide, (650 - 50) / 6 = 100 tall
        let r = cell_rect(GridRect::new(1, 1, 3, 2), container, 10.0);
        assert!((r.width - 320.0).abs() < 0.01);
        assert!((r.height - 210.0).abs() < 0.01);
        let last = cell_rect(GridRect::cell(GRID_COLS, GRID_ROWS), container, 10.0);
        assert!((last.x + last.width - 1090.0).abs() < 0.01);
        assert!((last.y + last.height - 650.0).abs() < 0.01);
    }
}
