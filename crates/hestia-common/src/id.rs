use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a dashboard tile.
///
/// Serialized as a bare integer so persisted layouts stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allocate a fresh tile id.
///
/// Ids are millisecond timestamps, bumped past the largest existing id so
/// two tiles created within the same millisecond (or a clock that went
/// backwards) never collide.
pub fn new_tile_id<I>(existing: I) -> TileId
where
    I: IntoIterator<Item = TileId>,
{
    let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
    let floor = existing
        .into_iter()
        .map(|id| id.0.saturating_add(1))
        .max()
        .unwrap_or(0);
    TileId(now.max(floor))
}
