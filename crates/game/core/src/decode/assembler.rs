//! Pairs the scalar state with the decoded screen.

use chrono::{DateTime, Utc};

use crate::catalog::TilesetCatalog;
use crate::config::DecoderConfig;
use crate::memory::MemoryView;
use crate::types::{GameStateSnapshot, Stability, TileMatrix};

use super::error::DecodeError;
use super::screen::{ScreenSnapshotBuilder, read_stability};
use super::state::GameStateReader;

/// Produces one [`GameStateSnapshot`] per decision step.
///
/// The catalog is shared and never mutated; every call reads a single
/// point-in-time memory view.
#[derive(Clone, Debug)]
pub struct SnapshotAssembler<'a> {
    catalog: &'a TilesetCatalog,
    config: DecoderConfig,
}

impl<'a> SnapshotAssembler<'a> {
    pub fn new(catalog: &'a TilesetCatalog, config: DecoderConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &TilesetCatalog {
        self.catalog
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn assemble<M: MemoryView + ?Sized>(
        &self,
        memory: &M,
        step_counter: u64,
        timestamp: DateTime<Utc>,
    ) -> Result<GameStateSnapshot, DecodeError> {
        let state = GameStateReader::read(memory)?;
        let builder = ScreenSnapshotBuilder::new(self.catalog.maps(), &self.config);

        // The tileset byte is stale while a map loads, so it is only resolved
        // for stable frames.
        let (tile_matrix, warnings) = match read_stability(memory, &self.config)? {
            Stability::Transitioning => (
                TileMatrix::transitioning(state.current_map, state.player_x, state.player_y),
                Vec::new(),
            ),
            Stability::Stable => {
                let resolved = self.catalog.resolve(state.current_tileset);
                let matrix = builder.build(memory, &resolved.definition)?;
                (matrix, resolved.warning.into_iter().collect())
            }
        };

        tracing::debug!(
            step = step_counter,
            map = state.current_map,
            tileset = state.current_tileset,
            stability = %tile_matrix.stability,
            warnings = warnings.len(),
            "assembled snapshot"
        );

        Ok(GameStateSnapshot {
            step_counter,
            timestamp,
            stability: tile_matrix.stability,
            directions_available: tile_matrix.directions_available(),
            tile_index: tile_matrix.index(),
            warnings,
            tile_matrix,
            state,
        })
    }
}
