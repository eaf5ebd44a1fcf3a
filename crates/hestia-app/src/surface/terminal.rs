//! Plain-text surface: an ASCII grid with a tile legend, plus an optional
//! theme table.
//!
//! Tile and theme updates are buffered and written by [`TerminalSurface::present`],
//! so a drag that renders many intermediate frames prints only the final one.
//! Notices are written immediately.

use std::fmt::Write as _;
use std::io::{self, Write};

use hestia_common::types::{PixelRect, Tile, GRID_COLS, GRID_ROWS};
use hestia_common::{Notice, TileId};
use hestia_config::ResolvedTheme;
use tracing::warn;

use super::RenderSurface;

const EMPTY_CELL: char = '.';
const BLOCKED_CELL: char = '!';

pub struct TerminalSurface<W: Write> {
    out: W,
    bounds: PixelRect,
    show_theme: bool,
    tiles: Vec<Tile>,
    collision: Option<TileId>,
    theme: ResolvedTheme,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout(bounds: PixelRect, show_theme: bool) -> Self {
        Self::new(io::stdout(), bounds, show_theme)
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, bounds: PixelRect, show_theme: bool) -> Self {
        Self {
            out,
            bounds,
            show_theme,
            tiles: Vec::new(),
            collision: None,
            theme: ResolvedTheme::new(),
        }
    }

    /// Write the current grid (and theme table, if enabled).
    pub fn present(&mut self) -> io::Result<()> {
        let mut text = draw_grid(&self.tiles, self.collision);
        if self.show_theme {
            text.push('\n');
            text.push_str(&draw_theme(&self.theme));
        }
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSurface for TerminalSurface<W> {
    fn materialize_theme(&mut self, theme: &ResolvedTheme) {
        self.theme = theme.clone();
    }

    fn render_tiles(&mut self, tiles: &[Tile], collision: Option<TileId>) {
        self.tiles = tiles.to_vec();
        self.collision = collision;
    }

    fn show_notice(&mut self, notice: &Notice) {
        if let Err(e) = writeln!(self.out, "{}: {}", notice.level, notice.message) {
            warn!("failed to write notice: {e}");
        }
    }

    fn grid_bounds(&self) -> PixelRect {
        self.bounds
    }
}

/// Legend glyph for the tile at `index`.
fn glyph(index: usize) -> char {
    match index {
        0..=25 => (b'A' + index as u8) as char,
        26..=51 => (b'a' + (index - 26) as u8) as char,
        _ => '*',
    }
}

/// Render the 10x6 grid followed by one legend line per tile.
pub fn draw_grid(tiles: &[Tile], collision: Option<TileId>) -> String {
    let cols = GRID_COLS as usize;
    let rows = GRID_ROWS as usize;
    let mut cells = vec![vec![EMPTY_CELL; cols]; rows];

    for (i, tile) in tiles.iter().enumerate() {
        let mark = if collision == Some(tile.id) {
            BLOCKED_CELL
        } else {
            glyph(i)
        };
        let rect = tile.rect();
        for row in rect.y..rect.y + rect.rows {
            for col in rect.x..rect.x + rect.cols {
                if let Some(cell) = cells
                    .get_mut((row - 1) as usize)
                    .and_then(|r| r.get_mut((col - 1) as usize))
                {
                    *cell = mark;
                }
            }
        }
    }

    let border = format!("   +{}+\n", "-".repeat(cols * 3));
    let mut out = String::from("    ");
    for c in 1..=cols {
        let _ = write!(out, "{c:^3}");
    }
    out.push('\n');
    out.push_str(&border);
    for (r, row) in cells.iter().enumerate() {
        let _ = write!(out, "{:>2} |", r + 1);
        for cell in row {
            let _ = write!(out, " {cell} ");
        }
        out.push_str("|\n");
    }
    out.push_str(&border);

    if tiles.is_empty() {
        out.push_str("   (no apps)\n");
    }
    for (i, tile) in tiles.iter().enumerate() {
        let _ = write!(
            out,
            "   {}  {:<20} {:>5} at ({},{})  id {}",
            glyph(i),
            tile.name,
            tile.label(),
            tile.x,
            tile.y,
            tile.id
        );
        if collision == Some(tile.id) {
            out.push_str("  (blocked)");
        }
        out.push('\n');
    }
    out
}

/// Render the resolved theme as `key value` lines.
pub fn draw_theme(theme: &ResolvedTheme) -> String {
    let mut out = String::new();
    for (key, value) in theme {
        let _ = writeln!(out, "   {:<16} {value}", key.as_str());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hestia_common::types::GridRect;
    use hestia_config::ThemeKey;

    fn bounds() -> PixelRect {
        PixelRect {
            x: 0.0,
            y: 0.0,
            width: 1200.0,
            height: 600.0,
        }
    }

    fn grid_row(text: &str, row: usize) -> String {
        text.lines().nth(row + 1).unwrap().to_string()
    }

    #[test]
    fn draws_tiles_with_legend() {
        let tiles = vec![
            Tile::new(TileId(1), "Plex", GridRect::new(1, 1, 2, 1)),
            Tile::new(TileId(2), "Sonarr", GridRect::new(3, 1, 1, 2)),
        ];
        let text = draw_grid(&tiles, None);
        assert_eq!(grid_row(&text, 1), " 1 | A  A  B  .  .  .  .  .  .  . |");
        assert_eq!(grid_row(&text, 2), " 2 | .  .  B  .  .  .  .  .  .  . |");
        assert!(text.contains("A  Plex"));
        assert!(text.contains("2x1 at (1,1)  id 1"));
        assert!(text.contains("1x2 at (3,1)  id 2"));
    }

    #[test]
    fn blocked_tile_is_marked() {
        let tiles = vec![Tile::new(TileId(5), "Radarr", GridRect::cell(10, 6))];
        let text = draw_grid(&tiles, Some(TileId(5)));
        assert_eq!(grid_row(&text, 6), " 6 | .  .  .  .  .  .  .  .  .  ! |");
        assert!(text.contains("(blocked)"));
    }

    #[test]
    fn empty_grid_says_so() {
        assert!(draw_grid(&[], None).contains("(no apps)"));
    }

    #[test]
    fn glyphs_cover_lower_case_then_star() {
        assert_eq!(glyph(0), 'A');
        assert_eq!(glyph(25), 'Z');
        assert_eq!(glyph(26), 'a');
        assert_eq!(glyph(60), '*');
    }

    #[test]
    fn present_buffers_until_called() {
        let mut surface = TerminalSurface::new(Vec::new(), bounds(), true);
        let mut theme = ResolvedTheme::new();
        theme.insert(ThemeKey::GapSize, "10px".into());
        surface.materialize_theme(&theme);
        surface.render_tiles(&[Tile::new(TileId(1), "Plex", GridRect::cell(1, 1))], None);
        surface.show_notice(&Notice::success("Plex added!"));
        surface.present().unwrap();

        let text = String::from_utf8(surface.into_inner()).unwrap();
        assert!(text.starts_with("success: Plex added!\n"));
        assert!(text.contains("Plex"));
        assert!(text.contains("gapSize"));
        assert!(text.contains("10px"));
    }

    #[test]
    fn theme_table_hidden_by_default() {
        let mut surface = TerminalSurface::new(Vec::new(), bounds(), false);
        let mut theme = ResolvedTheme::new();
        theme.insert(ThemeKey::GapSize, "10px".into());
        surface.materialize_theme(&theme);
        surface.present().unwrap();
        let text = String::from_utf8(surface.into_inner()).unwrap();
        assert!(!text.contains("gapSize"));
    }
}
