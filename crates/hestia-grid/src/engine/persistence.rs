//! Commit, save and restore of the tile layout.

use hestia_common::store::{load_json, save_json, PersistenceGateway, APPS_NAMESPACE};
use hestia_common::types::Tile;
use hestia_common::{HestiaError, LayoutError, StoreError};
use tracing::{info, warn};

use super::{LayoutEngine, Mode};

impl LayoutEngine {
    /// Leave edit mode, committing the live arrangement and saving it.
    ///
    /// Any in-flight gesture is finished first. The commit always happens;
    /// if the store rejects the write the engine is still in viewing mode
    /// with the new layout authoritative, and the store error is returned
    /// so the caller can report it and offer [`save_layout`](Self::save_layout).
    pub fn exit_edit_mode(&mut self, store: &mut dyn PersistenceGateway) -> Result<(), HestiaError> {
        if !self.is_editing() {
            return Ok(());
        }
        self.pointer_up();

        if let Some((a, b)) = self.collisions().find_overlap() {
            return Err(LayoutError::Overlap(a, b).into());
        }

        self.committed = self.live.clone();
        self.pending_delete = None;
        self.mode = Mode::Viewing;
        info!(tiles = self.committed.len(), "layout committed");

        self.save_layout(store)?;
        Ok(())
    }

    /// Toggle between viewing and editing. Leaving edit mode commits.
    pub fn toggle_edit_mode(&mut self, store: &mut dyn PersistenceGateway) -> Result<Mode, HestiaError> {
        if self.is_editing() {
            self.exit_edit_mode(store)?;
        } else {
            self.enter_edit_mode();
        }
        Ok(self.mode)
    }

    /// Persist the committed layout.
    pub fn save_layout(&self, store: &mut dyn PersistenceGateway) -> Result<(), StoreError> {
        save_json(store, APPS_NAMESPACE, &self.committed)
    }

    /// Restore the layout from the store, falling back to `initial` when
    /// nothing (or nothing readable) was saved. Returns the tile count.
    ///
    /// Resets the engine to viewing mode.
    pub fn load_layout(
        &mut self,
        store: &dyn PersistenceGateway,
        initial: &[Tile],
    ) -> Result<usize, StoreError> {
        let tiles = match load_json::<Vec<Tile>, _>(store, APPS_NAMESPACE)? {
            Some(saved) => {
                info!(tiles = saved.len(), "restored saved layout");
                saved
            }
            None => {
                if !initial.is_empty() {
                    info!(tiles = initial.len(), "no saved layout, using initial tiles");
                }
                initial.to_vec()
            }
        };
        let before = tiles.len();
        *self = Self::from_tiles(tiles);
        if self.committed.len() != before {
            warn!(
                dropped = before - self.committed.len(),
                "some stored tiles were invalid and dropped"
            );
        }
        Ok(self.committed.len())
    }
}
