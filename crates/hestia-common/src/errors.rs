use std::path::PathBuf;

use crate::id::TileId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage quota exceeded for '{namespace}' ({needed} bytes, {available} available)")]
    QuotaExceeded {
        namespace: String,
        needed: usize,
        available: usize,
    },

    #[error("storage read error for '{namespace}': {reason}")]
    Read { namespace: String, reason: String },

    #[error("storage write error for '{namespace}': {reason}")]
    Write { namespace: String, reason: String },

    #[error("failed to serialize '{namespace}': {reason}")]
    Serialize { namespace: String, reason: String },
}

impl StoreError {
    /// Namespace the failed operation targeted.
    pub fn namespace(&self) -> &str {
        match self {
            StoreError::QuotaExceeded { namespace, .. }
            | StoreError::Read { namespace, .. }
            | StoreError::Write { namespace, .. }
            | StoreError::Serialize { namespace, .. } => namespace,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("dashboard full: no free cell for a new tile")]
    GridFull,

    #[error("layout is not in edit mode")]
    NotEditing,

    #[error("tile not found: {0}")]
    TileNotFound(TileId),

    #[error("no delete pending")]
    NoPendingDelete,

    #[error("tiles {0} and {1} overlap")]
    Overlap(TileId, TileId),

    #[error("a gesture is already in progress")]
    GestureInProgress,
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("preset name must not be empty")]
    EmptyPresetName,

    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("unknown theme key: {0}")]
    UnknownKey(String),

    #[error("invalid selection '{0}' (expected base16:<slug> or custom:<name>)")]
    InvalidSelection(String),

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum HestiaError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Theme(#[from] ThemeError),
}
