//! Dashboard struct definition, startup and surface refresh.

use hestia_common::store::PersistenceGateway;
use hestia_common::{Notice, NoticeQueue};
use hestia_config::{HestiaConfig, PaletteCatalog, ThemeCascade};
use hestia_grid::LayoutEngine;

use crate::surface::RenderSurface;

/// Explicitly owned dashboard state. Stores and surfaces are injected.
pub struct Dashboard<P: PersistenceGateway, S: RenderSurface> {
    pub(super) layout: LayoutEngine,
    pub(super) theme: ThemeCascade,
    pub(super) catalog: PaletteCatalog,
    pub(super) store: P,
    pub(super) surface: S,
    pub(super) notices: NoticeQueue,
}

impl<P: PersistenceGateway, S: RenderSurface> Dashboard<P, S> {
    /// Restore saved state from `store` (falling back to the config's
    /// theme and initial apps) and draw the first frame.
    ///
    /// A store that cannot be read is reported as a notice; the session
    /// then starts from the config.
    pub fn boot(config: &HestiaConfig, catalog: PaletteCatalog, store: P, surface: S) -> Self {
        let fallback = config.theme_document();
        let mut dashboard = Self {
            layout: LayoutEngine::from_tiles(config.apps.clone()),
            theme: ThemeCascade::restore(fallback.clone(), &catalog),
            catalog,
            store,
            surface,
            notices: NoticeQueue::default(),
        };

        match ThemeCascade::load(&dashboard.store, &fallback, &dashboard.catalog) {
            Ok(theme) => dashboard.theme = theme,
            Err(e) => {
                tracing::warn!("Failed to load saved theme: {e}");
                dashboard.notify(Notice::error(format!("Error loading theme: {e}")));
            }
        }
        match dashboard.layout.load_layout(&dashboard.store, &config.apps) {
            Ok(count) => tracing::info!(tiles = count, "layout ready"),
            Err(e) => {
                tracing::warn!("Failed to load saved layout: {e}");
                dashboard.notify(Notice::error(format!("Error loading apps: {e}")));
            }
        }

        dashboard.refresh();
        dashboard
    }

    // -- Accessors --

    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    pub fn theme(&self) -> &ThemeCascade {
        &self.theme
    }

    pub fn catalog(&self) -> &PaletteCatalog {
        &self.catalog
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut P {
        &mut self.store
    }

    #[cfg(test)]
    pub fn into_store(self) -> P {
        self.store
    }

    /// Most recent notice, if any.
    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    // -- Surface sync --

    /// Re-materialize the theme and redraw every tile.
    pub fn refresh(&mut self) {
        self.surface.materialize_theme(&self.theme.materialize());
        self.render_tiles();
    }

    pub(super) fn render_tiles(&mut self) {
        self.surface
            .render_tiles(self.layout.tiles(), self.layout.collision_flag());
    }

    pub(super) fn notify(&mut self, notice: Notice) {
        self.surface.show_notice(&notice);
        self.notices.push(notice);
    }
}
