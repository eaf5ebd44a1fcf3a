use serde::{Deserialize, Serialize};

use crate::id::TileId;

/// Every user-triggerable dashboard action.
///
/// Buttons, the settings panel and the CLI all resolve to an `Action`.
/// The dashboard dispatcher matches on this enum to route to the layout
/// engine or the theme cascade.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Layout --
    ToggleEditMode,
    AddTile(String),
    RequestDelete(TileId),
    ConfirmDelete,
    CancelDelete,
    RenameTile { id: TileId, name: String },
    SaveLayout,

    // -- Theme --
    ApplySelection(String),
    SetField { key: String, value: String },
    ResetField(String),
    SavePreset(String),
    SaveTheme,

    None,
}
