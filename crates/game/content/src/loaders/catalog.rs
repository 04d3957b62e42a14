//! Tileset catalog loader.

use std::path::Path;

use gamestate_core::{MapTables, TilesetCatalog, TilesetDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Catalog structure for RON files.
///
/// ```ron
/// (
///     tilesets: [
///         (id: 0, name: "overworld", walkable: [0x2C, 0x52], encounters: [0x52]),
///     ],
///     maps: (dark_maps: [0x52]),
/// )
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub tilesets: Vec<TilesetDefinition>,
    pub maps: MapTables,
}

/// Loader for tileset catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<TilesetCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<TilesetCatalog> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        let mut seen = std::collections::BTreeSet::new();
        for tileset in &file.tilesets {
            if !seen.insert(tileset.id) {
                anyhow::bail!("Duplicate tileset id {} ({})", tileset.id, tileset.name);
            }
        }
        Ok(TilesetCatalog::new(file.tilesets, file.maps))
    }
}
