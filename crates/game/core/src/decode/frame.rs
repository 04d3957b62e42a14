//! One point-in-time capture of everything a screen decode reads.

use crate::config::DecoderConfig;
use crate::memory::{MemoryError, MemoryView, addr};
use crate::types::{MapDimensions, MapPos, ScreenPos};

use super::sprites::{SpriteOverlay, SpriteTable};

/// The 20×18 tile-id buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBuffer(Box<[u8; DecoderConfig::SCREEN_TILES]>);

impl TileBuffer {
    pub fn read<M: MemoryView + ?Sized>(memory: &M) -> Result<Self, MemoryError> {
        let bytes = memory.read_slice(addr::TILE_MAP, DecoderConfig::SCREEN_TILES)?;
        Self::from_bytes(&bytes).ok_or(MemoryError::OutOfRange {
            address: addr::TILE_MAP,
            len: DecoderConfig::SCREEN_TILES,
        })
    }

    /// `None` unless `bytes` holds exactly 360 ids.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let array: [u8; DecoderConfig::SCREEN_TILES] = bytes.try_into().ok()?;
        Some(Self(Box::new(array)))
    }

    pub fn filled(tile_id: u8) -> Self {
        Self(Box::new([tile_id; DecoderConfig::SCREEN_TILES]))
    }

    pub fn get(&self, position: ScreenPos) -> u8 {
        self.0[position.index()]
    }

    pub fn set(&mut self, position: ScreenPos, tile_id: u8) {
        self.0[position.index()] = tile_id;
    }
}

/// Warp entry of the current map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WarpEntry {
    pub position: MapPos,
    pub destination_warp: u8,
    pub destination_map: u8,
}

impl WarpEntry {
    /// Destination map value meaning "the map the player came from".
    pub const LAST_MAP: u8 = 0xFF;
}

/// Memory captured once per decode cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameView {
    pub tiles: TileBuffer,
    pub current_map: u8,
    pub last_map: u8,
    pub player: MapPos,
    pub dimensions: MapDimensions,
    pub warps: Vec<WarpEntry>,
    pub sprites: SpriteTable,
}

impl FrameView {
    pub fn capture<M: MemoryView + ?Sized>(memory: &M) -> Result<Self, MemoryError> {
        let tiles = TileBuffer::read(memory)?;
        let current_map = memory.read_byte(addr::CURRENT_MAP)?;
        let last_map = memory.read_byte(addr::LAST_MAP)?;
        let player = MapPos::new(
            i32::from(memory.read_byte(addr::PLAYER_X)?),
            i32::from(memory.read_byte(addr::PLAYER_Y)?),
        );
        let dimensions = MapDimensions::new(
            memory.read_byte(addr::MAP_WIDTH)?,
            memory.read_byte(addr::MAP_HEIGHT)?,
        );

        let count = usize::from(memory.read_byte(addr::WARP_COUNT)?).min(DecoderConfig::MAX_WARPS);
        let warps = memory
            .read_slice(addr::WARP_ENTRIES, count * 4)?
            .chunks_exact(4)
            .map(|entry| WarpEntry {
                position: MapPos::new(i32::from(entry[1]), i32::from(entry[0])),
                destination_warp: entry[2],
                destination_map: entry[3],
            })
            .collect();

        let sprites = SpriteOverlay::read_sprites(memory)?;

        Ok(Self {
            tiles,
            current_map,
            last_map,
            player,
            dimensions,
            warps,
            sprites,
        })
    }

    pub fn warp_at(&self, position: MapPos) -> Option<&WarpEntry> {
        self.warps.iter().find(|warp| warp.position == position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::RamImage;

    #[test]
    fn capture_reads_warps_and_position() {
        let mut ram = RamImage::new();
        ram.set(addr::CURRENT_MAP, 0x00)
            .set(addr::PLAYER_X, 5)
            .set(addr::PLAYER_Y, 6)
            .set(addr::MAP_WIDTH, 10)
            .set(addr::MAP_HEIGHT, 9)
            .set(addr::WARP_COUNT, 2)
            .write(addr::WARP_ENTRIES, &[5, 5, 0, 0x25, 5, 13, 0, 0x27]);
        ram.write(addr::TILE_MAP, &[0x2C; DecoderConfig::SCREEN_TILES]);

        let frame = FrameView::capture(&ram).expect("capture");
        assert_eq!(frame.player, MapPos::new(5, 6));
        assert_eq!(frame.dimensions, MapDimensions::new(10, 9));
        assert_eq!(frame.warps.len(), 2);
        let warp = frame.warp_at(MapPos::new(13, 5)).expect("second warp");
        assert_eq!(warp.destination_map, 0x27);
        assert!(frame.warp_at(MapPos::new(0, 0)).is_none());
        let corner = ScreenPos::new(19, 17).expect("on screen");
        assert_eq!(frame.tiles.get(corner), 0x2C);
    }

    #[test]
    fn warp_count_is_capped() {
        let mut ram = RamImage::new();
        ram.set(addr::WARP_COUNT, 0xFF);
        let frame = FrameView::capture(&ram).expect("capture");
        assert_eq!(frame.warps.len(), DecoderConfig::MAX_WARPS);
    }

    #[test]
    fn short_memory_is_a_read_failure() {
        let short = vec![0u8; 0x100];
        assert!(FrameView::capture(short.as_slice()).is_err());
    }
}
