//! Maps CLI subcommands onto dashboard actions.
//!
//! Layout edits are wrapped in an edit-mode session, so every change is
//! committed and saved on the way out just like pressing Save in the UI.
//! Theme edits are saved as soon as they apply.

use hestia_common::store::PersistenceGateway;
use hestia_common::{Action, TileId};
use hestia_config::PresetEntry;
use hestia_grid::GestureKind;

use crate::cli::{Command, PresetCommand};
use crate::dashboard::Dashboard;
use crate::surface::RenderSurface;

/// Result of running one subcommand.
#[derive(Debug, Default)]
pub struct Report {
    pub ok: bool,
    /// Text to print instead of the grid (listings, JSON).
    pub text: Option<String>,
}

impl Report {
    fn status(ok: bool) -> Self {
        Self { ok, text: None }
    }

    fn text(text: String) -> Self {
        Self {
            ok: true,
            text: Some(text),
        }
    }
}

pub fn execute<P, S>(dashboard: &mut Dashboard<P, S>, command: Command) -> Report
where
    P: PersistenceGateway,
    S: RenderSurface,
{
    match command {
        Command::Show { json: false } => Report::status(true),
        Command::Show { json: true } => show_json(dashboard),

        Command::Add { name } => Report::status(in_edit_mode(dashboard, |d| {
            d.dispatch(Action::AddTile(name))
        })),
        Command::Delete { id } => Report::status(in_edit_mode(dashboard, |d| {
            d.dispatch(Action::RequestDelete(TileId(id))) && d.dispatch(Action::ConfirmDelete)
        })),
        Command::Rename { id, name } => Report::status(in_edit_mode(dashboard, |d| {
            d.dispatch(Action::RenameTile {
                id: TileId(id),
                name,
            })
        })),
        Command::Move { id, cols, rows } => Report::status(in_edit_mode(dashboard, |d| {
            d.drag_tile(TileId(id), GestureKind::Move, cols, rows)
        })),
        Command::Resize { id, cols, rows } => Report::status(in_edit_mode(dashboard, |d| {
            d.drag_tile(TileId(id), GestureKind::Resize, cols, rows)
        })),

        Command::Palettes => Report::text(list_entries(dashboard, false)),
        Command::Palette { slug } => {
            Report::status(dashboard.dispatch(Action::ApplySelection(format!("base16:{slug}"))))
        }
        Command::Preset { action } => match action {
            PresetCommand::Apply { name } => {
                Report::status(dashboard.dispatch(Action::ApplySelection(format!("custom:{name}"))))
            }
            PresetCommand::Save { name } => Report::status(dashboard.dispatch(Action::SavePreset(name))),
            PresetCommand::List => Report::text(list_entries(dashboard, true)),
        },
        Command::Set { key, value } => Report::status(
            dashboard.dispatch(Action::SetField { key, value }) && dashboard.dispatch(Action::SaveTheme),
        ),
        Command::Reset { key } => Report::status(
            dashboard.dispatch(Action::ResetField(key)) && dashboard.dispatch(Action::SaveTheme),
        ),
    }
}

/// Run `op` inside edit mode, then leave it (committing and saving).
fn in_edit_mode<P, S, F>(dashboard: &mut Dashboard<P, S>, op: F) -> bool
where
    P: PersistenceGateway,
    S: RenderSurface,
    F: FnOnce(&mut Dashboard<P, S>) -> bool,
{
    if !dashboard.layout().is_editing() && !dashboard.dispatch(Action::ToggleEditMode) {
        return false;
    }
    let ok = op(dashboard);
    let saved = dashboard.dispatch(Action::ToggleEditMode);
    ok && saved
}

fn list_entries<P, S>(dashboard: &Dashboard<P, S>, custom_only: bool) -> String
where
    P: PersistenceGateway,
    S: RenderSurface,
{
    let theme = dashboard.theme();
    let active = theme.active_palette();
    let mut out = String::new();
    for entry in theme.preset_entries(dashboard.catalog()) {
        let marker = match &entry {
            PresetEntry::Base16 { slug, .. } if active == Some(slug.as_str()) => '*',
            _ => ' ',
        };
        if custom_only && matches!(entry, PresetEntry::Base16 { .. }) {
            continue;
        }
        out.push_str(&format!("{marker} {:<32} {}\n", entry.selection(), entry.label()));
    }
    if out.is_empty() {
        out.push_str("(none)\n");
    }
    out
}

fn show_json<P, S>(dashboard: &Dashboard<P, S>) -> Report
where
    P: PersistenceGateway,
    S: RenderSurface,
{
    let theme = dashboard.theme();
    let value = serde_json::json!({
        "apps": dashboard.layout().tiles(),
        "theme": theme.materialize(),
        "activePalette": theme.active_palette(),
        "modified": theme.modified_keys(),
        "swatches": theme.swatches(dashboard.catalog()),
    });
    match serde_json::to_string_pretty(&value) {
        Ok(mut json) => {
            json.push('\n');
            Report::text(json)
        }
        Err(e) => Report {
            ok: false,
            text: Some(format!("failed to serialize dashboard: {e}\n")),
        },
    }
}
