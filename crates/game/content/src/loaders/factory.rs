//! Content factory resolving catalogs and configuration from a data directory.

use std::path::{Path, PathBuf};

use gamestate_core::{DecoderConfig, TilesetCatalog};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult};
use crate::pokered::pokered_catalog;

/// Content factory that loads decoder content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── decoder.toml
/// └── catalog.ron
/// ```
///
/// Both files are optional. A missing file falls back to the built-in
/// Pokemon Red catalog or the default configuration; a file that exists but
/// does not parse is an error.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "decoder.toml";
    pub const CATALOG_FILE: &'static str = "catalog.ron";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load decoder configuration from `decoder.toml`.
    pub fn load_config(&self) -> LoadResult<DecoderConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no decoder config; using defaults");
            return Ok(DecoderConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the tileset catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<TilesetCatalog> {
        let path = self.data_dir.join(Self::CATALOG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no catalog file; using built-in tables");
            return Ok(pokered_catalog());
        }
        let catalog = CatalogLoader::load(&path)?;
        tracing::info!(
            path = %path.display(),
            tilesets = catalog.len(),
            "loaded tileset catalog"
        );
        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
