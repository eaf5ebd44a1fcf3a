use hestia_common::types::{PixelRect, Tile};
use hestia_common::{Notice, TileId};
use hestia_config::ResolvedTheme;

use super::RenderSurface;

/// Surface that keeps everything it was asked to show.
#[derive(Debug)]
pub struct RecordingSurface {
    pub bounds: PixelRect,
    pub themes: Vec<ResolvedTheme>,
    pub tiles: Vec<Tile>,
    pub collision: Option<TileId>,
    /// Every collision flag seen, in render order.
    pub collisions_seen: Vec<TileId>,
    pub notices: Vec<Notice>,
    pub renders: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            bounds: PixelRect {
                x: 0.0,
                y: 0.0,
                width: 1200.0,
                height: 600.0,
            },
            themes: Vec::new(),
            tiles: Vec::new(),
            collision: None,
            collisions_seen: Vec::new(),
            notices: Vec::new(),
            renders: 0,
        }
    }

    pub fn last_theme(&self) -> &ResolvedTheme {
        self.themes.last().expect("no theme materialized")
    }

    pub fn messages(&self) -> Vec<&str> {
        self.notices.iter().map(|n| n.message.as_str()).collect()
    }

    pub fn last_message(&self) -> Option<&str> {
        self.notices.last().map(|n| n.message.as_str())
    }
}

impl RenderSurface for RecordingSurface {
    fn materialize_theme(&mut self, theme: &ResolvedTheme) {
        self.themes.push(theme.clone());
    }

    fn render_tiles(&mut self, tiles: &[Tile], collision: Option<TileId>) {
        self.tiles = tiles.to_vec();
        self.collision = collision;
        self.collisions_seen.extend(collision);
        self.renders += 1;
    }

    fn show_notice(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }

    fn grid_bounds(&self) -> PixelRect {
        self.bounds
    }
}
