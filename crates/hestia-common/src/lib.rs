pub mod actions;
pub mod errors;
pub mod id;
pub mod notifications;
pub mod store;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, HestiaError, LayoutError, StoreError, ThemeError};
pub use id::{new_tile_id, TileId};
pub use notifications::{Notice, NoticeLevel, NoticeQueue};
pub use store::{load_json, save_json, MemoryStore, PersistenceGateway};
pub use types::{GridRect, PixelRect, Tile, TileKind, GRID_COLS, GRID_ROWS};

pub type Result<T> = std::result::Result<T, HestiaError>;
