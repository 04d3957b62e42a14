//! Full-screen decoding behind the map-stability gate.

use crate::catalog::{MapTables, TilesetDefinition};
use crate::config::DecoderConfig;
use crate::memory::{MemoryError, MemoryView, addr};
use crate::types::{ScreenPos, Stability, TileMatrix};

use super::error::DecodeError;
use super::frame::FrameView;
use super::tile::{SpriteMap, TileDecoder};

/// Reads the loading-status byte and maps it onto [`Stability`].
pub fn read_stability<M: MemoryView + ?Sized>(
    memory: &M,
    config: &DecoderConfig,
) -> Result<Stability, MemoryError> {
    let status = memory.read_byte(addr::MAP_LOADING_STATUS)?;
    Ok(if config.is_transition_status(status) {
        Stability::Transitioning
    } else {
        Stability::Stable
    })
}

/// Decodes all 360 screen tiles from one memory view.
#[derive(Clone, Copy, Debug)]
pub struct ScreenSnapshotBuilder<'a> {
    decoder: TileDecoder<'a>,
    config: &'a DecoderConfig,
}

impl<'a> ScreenSnapshotBuilder<'a> {
    pub fn new(maps: &'a MapTables, config: &'a DecoderConfig) -> Self {
        Self {
            decoder: TileDecoder::new(maps),
            config,
        }
    }

    /// Builds the tile matrix, or an empty one tagged `Transitioning` when a
    /// map load is in progress. Tiles are decoded row-major, top-left first.
    pub fn build<M: MemoryView + ?Sized>(
        &self,
        memory: &M,
        tileset: &TilesetDefinition,
    ) -> Result<TileMatrix, DecodeError> {
        if read_stability(memory, self.config)? == Stability::Transitioning {
            let matrix = TileMatrix::transitioning(
                memory.read_byte(addr::CURRENT_MAP)?,
                memory.read_byte(addr::PLAYER_X)?,
                memory.read_byte(addr::PLAYER_Y)?,
            );
            tracing::debug!(
                map = matrix.current_map,
                "map transition in progress; skipping tile decode"
            );
            return Ok(matrix);
        }

        let frame = FrameView::capture(memory)?;
        let sprites = SpriteMap::compute(&frame, tileset, self.config.trainer_sight_range);
        let tiles: Vec<_> = ScreenPos::all()
            .map(|position| self.decoder.decode_at(&frame, tileset, &sprites, position))
            .collect();

        tracing::trace!(
            map = frame.current_map,
            tileset = tileset.id,
            sprites = frame.sprites.len(),
            sight_tiles = sprites.sight.len(),
            "decoded screen"
        );

        Ok(TileMatrix::stable(
            frame.current_map,
            player_coordinate(frame.player.x),
            player_coordinate(frame.player.y),
            tiles,
        ))
    }
}

fn player_coordinate(value: i32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::RamImage;
    use crate::types::{TileFlags, TileKind};

    fn overworld() -> TilesetDefinition {
        TilesetDefinition::new(0, "overworld").with_walkable(&[32, 33, 34, 35, 36, 37, 38, 39])
    }

    fn ram(tile_id: u8) -> RamImage {
        let mut ram = RamImage::new();
        ram.write(addr::TILE_MAP, &[tile_id; DecoderConfig::SCREEN_TILES])
            .set(addr::CURRENT_MAP, 0x0C)
            .set(addr::PLAYER_X, 20)
            .set(addr::PLAYER_Y, 20)
            .set(addr::MAP_WIDTH, 20)
            .set(addr::MAP_HEIGHT, 20);
        ram
    }

    #[test]
    fn stable_build_decodes_every_tile() {
        let ram = ram(34);
        let (maps, config) = (MapTables::default(), DecoderConfig::default());
        let matrix = ScreenSnapshotBuilder::new(&maps, &config)
            .build(&ram, &overworld())
            .expect("build");
        assert_eq!(matrix.stability, Stability::Stable);
        assert_eq!(matrix.tile_count(), 360);
        assert_eq!((matrix.current_map, matrix.player_x, matrix.player_y), (0x0C, 20, 20));
        assert!(matrix.iter().all(|tile| tile.kind() == TileKind::Walkable));
        let first = matrix.iter().next().expect("tiles");
        assert_eq!((first.position.x(), first.position.y()), (0, 0));
    }

    #[test]
    fn transitioning_status_short_circuits() {
        let mut ram = ram(34);
        ram.set(addr::MAP_LOADING_STATUS, 1);
        let (maps, config) = (MapTables::default(), DecoderConfig::default());
        let matrix = ScreenSnapshotBuilder::new(&maps, &config)
            .build(&ram, &overworld())
            .expect("build");
        assert_eq!(matrix.stability, Stability::Transitioning);
        assert_eq!(matrix.tile_count(), 0);
    }

    #[test]
    fn every_nonzero_loading_status_skips_tiles() {
        let (maps, config) = (MapTables::default(), DecoderConfig::default());
        let builder = ScreenSnapshotBuilder::new(&maps, &config);
        for status in [1, 2, 4, 5, 0x10, 0xFF] {
            let mut ram = ram(34);
            ram.set(addr::MAP_LOADING_STATUS, status);
            assert_eq!(
                read_stability(&ram, &config),
                Ok(Stability::Transitioning),
                "status {status:#04x}"
            );
            let matrix = builder.build(&ram, &overworld()).expect("build");
            assert_eq!(matrix.tile_count(), 0, "status {status:#04x}");
        }

        let ram = ram(34);
        assert_eq!(read_stability(&ram, &config), Ok(Stability::Stable));
    }

    #[test]
    fn sprite_on_walkable_tile_blocks_it() {
        let mut ram = ram(34);
        let slot = addr::SPRITE_STATE_DATA + 2 * 16;
        ram.set(slot + addr::SPRITE_PICTURE_ID, 4)
            .set(slot + addr::SPRITE_X_PIXELS, 0x48)
            .set(slot + addr::SPRITE_Y_PIXELS, 0x3C);
        let (maps, config) = (MapTables::default(), DecoderConfig::default());
        let matrix = ScreenSnapshotBuilder::new(&maps, &config)
            .build(&ram, &overworld())
            .expect("build");

        let pos = ScreenPos::new(9, 9).expect("on screen");
        let tile = matrix.get(pos).expect("tile");
        assert!(!tile.is_walkable());
        assert_eq!(tile.sprite_occupancy(), 2);
        assert_eq!(matrix.iter().filter(|t| t.sprite_occupancy() != 0).count(), 1);
        assert!(matrix.iter().all(|t| !t.has(TileFlags::TRAINER_SIGHT_LINE)));
    }

    #[test]
    fn memory_failure_is_fatal() {
        let short = vec![0u8; 0x100];
        let (maps, config) = (MapTables::default(), DecoderConfig::default());
        let result =
            ScreenSnapshotBuilder::new(&maps, &config).build(short.as_slice(), &overworld());
        assert!(matches!(result, Err(DecodeError::Memory(_))));
    }
}
