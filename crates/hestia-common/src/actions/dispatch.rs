use super::Action;

impl Action {
    /// Human-readable label for menus and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Action::ToggleEditMode => "Toggle Edit Mode",
            Action::AddTile(_) => "Add App",
            Action::RequestDelete(_) => "Delete App",
            Action::ConfirmDelete => "Confirm Delete",
            Action::CancelDelete => "Cancel Delete",
            Action::RenameTile { .. } => "Rename App",
            Action::SaveLayout => "Save Layout",
            Action::ApplySelection(_) => "Apply Theme",
            Action::SetField { .. } => "Update Setting",
            Action::ResetField(_) => "Reset Setting",
            Action::SavePreset(_) => "Save Preset",
            Action::SaveTheme => "Save Theme",
            Action::None => "None",
        }
    }

    /// Whether the action only makes sense while the layout is in edit mode.
    pub fn requires_edit_mode(&self) -> bool {
        matches!(
            self,
            Action::AddTile(_)
                | Action::RequestDelete(_)
                | Action::ConfirmDelete
                | Action::RenameTile { .. }
        )
    }
}
