//! Render surfaces: where the dashboard's state becomes visible.
//!
//! The dashboard pushes state out through [`RenderSurface`] and reads back
//! exactly one thing, the grid container's pixel bounds, for gesture math.

mod terminal;

#[cfg(test)]
mod recording;

pub use terminal::TerminalSurface;

#[cfg(test)]
pub use recording::RecordingSurface;

use hestia_common::types::{PixelRect, Tile};
use hestia_common::{Notice, TileId};
use hestia_config::ResolvedTheme;

/// A projection of dashboard state.
pub trait RenderSurface {
    /// Apply the full resolved theme.
    fn materialize_theme(&mut self, theme: &ResolvedTheme);

    /// Draw the tiles. `collision` names a tile whose current drag
    /// candidate is blocked.
    fn render_tiles(&mut self, tiles: &[Tile], collision: Option<TileId>);

    /// Show a transient notice.
    fn show_notice(&mut self, notice: &Notice);

    /// Pixel bounds of the grid container.
    fn grid_bounds(&self) -> PixelRect;
}
