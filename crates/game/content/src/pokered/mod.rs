//! Built-in Pokemon Red tables.

mod maps;
mod tilesets;

pub use maps::{id as map_id, map_tables};
pub use tilesets::{TilesetId, tilesets};

use gamestate_core::TilesetCatalog;

/// Catalog with every tileset and the built-in map tables.
pub fn pokered_catalog() -> TilesetCatalog {
    TilesetCatalog::new(tilesets(), map_tables())
}
