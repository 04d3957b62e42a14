//! Static, per-tileset and per-map lookup data.
//!
//! A [`TilesetCatalog`] is built once at startup and shared by reference with
//! every decode cycle. It is never mutated afterwards.
mod maps;
mod tileset;

use std::borrow::Cow;
use std::collections::BTreeMap;

pub use maps::MapTables;
pub use tileset::{TileIdSet, TilesetDefinition};

use crate::error::{DecoderError, ErrorSeverity};
use crate::types::DecodeWarning;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("tileset {0} is not in the catalog")]
    UnknownTileset(u8),
}

impl DecoderError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownTileset(_) => "CATALOG_UNKNOWN_TILESET",
        }
    }
}

/// Tileset definition chosen for a decode cycle.
#[derive(Clone, Debug)]
pub struct ResolvedTileset<'a> {
    pub definition: Cow<'a, TilesetDefinition>,
    pub warning: Option<DecodeWarning>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TilesetCatalog {
    tilesets: BTreeMap<u8, TilesetDefinition>,
    maps: MapTables,
}

impl TilesetCatalog {
    /// Later definitions replace earlier ones with the same id.
    pub fn new(tilesets: impl IntoIterator<Item = TilesetDefinition>, maps: MapTables) -> Self {
        Self {
            tilesets: tilesets.into_iter().map(|def| (def.id, def)).collect(),
            maps,
        }
    }

    pub fn definition_for(&self, tileset_id: u8) -> Result<&TilesetDefinition, CatalogError> {
        self.tilesets
            .get(&tileset_id)
            .ok_or(CatalogError::UnknownTileset(tileset_id))
    }

    /// Like [`Self::definition_for`], but substitutes the all-blocked fallback
    /// for unknown ids and reports it as a warning.
    pub fn resolve(&self, tileset_id: u8) -> ResolvedTileset<'_> {
        match self.definition_for(tileset_id) {
            Ok(definition) => ResolvedTileset {
                definition: Cow::Borrowed(definition),
                warning: None,
            },
            Err(error) => {
                tracing::warn!(
                    code = error.error_code(),
                    "{error}; classifying every tile as blocked"
                );
                ResolvedTileset {
                    definition: Cow::Owned(TilesetDefinition::blocked_fallback(tileset_id)),
                    warning: Some(DecodeWarning::UnknownTileset),
                }
            }
        }
    }

    pub fn maps(&self) -> &MapTables {
        &self.maps
    }

    pub fn tilesets(&self) -> impl Iterator<Item = &TilesetDefinition> {
        self.tilesets.values()
    }

    pub fn len(&self) -> usize {
        self.tilesets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tilesets.is_empty()
    }
}
