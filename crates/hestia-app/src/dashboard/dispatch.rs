//! Action dispatch: routes resolved actions to the layout engine or the
//! theme cascade and turns every outcome into a notice.

use hestia_common::store::{PersistenceGateway, APPS_NAMESPACE, THEME_NAMESPACE};
use hestia_common::{Action, HestiaError, LayoutError, Notice, StoreError, ThemeError};
use hestia_config::ThemeKey;
use hestia_grid::Mode;

use super::core::Dashboard;
use crate::surface::RenderSurface;

impl<P: PersistenceGateway, S: RenderSurface> Dashboard<P, S> {
    /// Dispatch an [`Action`]. Returns `false` if it ended in an error
    /// notice. Nothing here is fatal: the surface is refreshed either way.
    pub fn dispatch(&mut self, action: Action) -> bool {
        tracing::debug!(action = action.label(), "dispatch");
        let result = self.apply(action);
        let ok = match result {
            Ok(Some(notice)) => {
                self.notify(notice);
                true
            }
            Ok(None) => true,
            Err(e) => {
                tracing::warn!("action failed: {e}");
                self.notify(error_notice(&e));
                false
            }
        };
        self.refresh();
        ok
    }

    fn apply(&mut self, action: Action) -> Result<Option<Notice>, HestiaError> {
        if action.requires_edit_mode() && !self.layout.is_editing() {
            return Err(LayoutError::NotEditing.into());
        }
        match action {
            // -- Layout --
            Action::ToggleEditMode => match self.layout.toggle_edit_mode(&mut self.store)? {
                Mode::Viewing => Ok(Some(Notice::success("App layout saved!"))),
                Mode::Editing => Ok(None),
            },
            Action::AddTile(name) => {
                let id = self.layout.create_tile(&name)?;
                let name = self
                    .layout
                    .tile(id)
                    .map(|t| t.name.clone())
                    .unwrap_or(name);
                Ok(Some(Notice::success(format!("{name} added!"))))
            }
            Action::RequestDelete(id) => {
                self.layout.request_delete(id)?;
                Ok(None)
            }
            Action::ConfirmDelete => {
                self.layout.confirm_delete()?;
                Ok(Some(Notice::success("App deleted")))
            }
            Action::CancelDelete => {
                self.layout.cancel_delete();
                Ok(None)
            }
            Action::RenameTile { id, name } => {
                self.layout.rename_tile(id, &name)?;
                Ok(None)
            }
            Action::SaveLayout => {
                self.layout.save_layout(&mut self.store)?;
                Ok(Some(Notice::success("App layout saved!")))
            }

            // -- Theme --
            Action::ApplySelection(selection) => {
                self.theme.apply_selection(&selection, &self.catalog)?;
                self.save_theme()
            }
            Action::SetField { key, value } => {
                let key: ThemeKey = key.parse()?;
                let modified = self.theme.set_field(key, &value)?;
                tracing::debug!(%key, modified, "setting updated");
                Ok(None)
            }
            Action::ResetField(key) => {
                let key: ThemeKey = key.parse()?;
                if !self.theme.reset_field(key) {
                    tracing::debug!(%key, "no default recorded, reset ignored");
                }
                Ok(None)
            }
            Action::SavePreset(name) => {
                self.theme.save_preset(&name)?;
                self.theme.save(&mut self.store)?;
                Ok(Some(Notice::success("Custom preset saved!")))
            }
            Action::SaveTheme => self.save_theme(),

            Action::None => Ok(None),
        }
    }

    fn save_theme(&mut self) -> Result<Option<Notice>, HestiaError> {
        self.theme.save(&mut self.store)?;
        Ok(Some(Notice::success("Theme settings saved!")))
    }
}

/// User-facing text for a failed action.
fn error_notice(err: &HestiaError) -> Notice {
    let message = match err {
        HestiaError::Layout(LayoutError::GridFull) => "Dashboard full!".to_string(),
        HestiaError::Theme(ThemeError::EmptyPresetName) => "Please enter a theme name.".to_string(),
        HestiaError::Store(e) => store_message(e),
        other => other.to_string(),
    };
    Notice::error(message)
}

fn store_message(err: &StoreError) -> String {
    match err.namespace() {
        APPS_NAMESPACE => format!("Error saving apps. {err}"),
        THEME_NAMESPACE => format!("Error saving theme: {err}"),
        _ => err.to_string(),
    }
}
