use std::collections::BTreeMap;

use crate::catalog::{MapTables, TilesetDefinition};
use crate::error::DecoderError;
use crate::types::{ScreenPos, TileClass, TileFlags, TileRecord};

use super::collision::CollisionResolver;
use super::coords::CoordinateMapper;
use super::detectors::{self, DetectorInput};
use super::error::{DecodeError, DetectorError};
use super::frame::FrameView;
use super::sprites::{SightMark, SpriteInfo, SpriteOverlay};

/// Sprite occupancy and trainer sight, computed once per frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpriteMap {
    pub occupied: BTreeMap<ScreenPos, SpriteInfo>,
    pub sight: BTreeMap<ScreenPos, SightMark>,
}

impl SpriteMap {
    /// Sight lines are skipped for the fallback tileset.
    pub fn compute(frame: &FrameView, tileset: &TilesetDefinition, sight_range: u8) -> Self {
        let sight = if tileset.is_fallback() {
            BTreeMap::new()
        } else {
            SpriteOverlay::sight_lines(&frame.sprites, &frame.tiles, tileset, sight_range)
        };
        Self {
            occupied: SpriteOverlay::occupied_tiles(&frame.sprites),
            sight,
        }
    }
}

/// Builds one [`TileRecord`] from a captured frame.
#[derive(Clone, Copy, Debug)]
pub struct TileDecoder<'a> {
    maps: &'a MapTables,
}

impl<'a> TileDecoder<'a> {
    pub fn new(maps: &'a MapTables) -> Self {
        Self { maps }
    }

    /// Decodes the tile at screen `(x, y)`.
    ///
    /// Deterministic for a given frame. Detector failures leave the affected
    /// property unset.
    pub fn decode(
        &self,
        frame: &FrameView,
        tileset: &TilesetDefinition,
        sprites: &SpriteMap,
        x: u8,
        y: u8,
    ) -> Result<TileRecord, DecodeError> {
        let position = CoordinateMapper::screen_pos(x, y)?;
        Ok(self.decode_at(frame, tileset, sprites, position))
    }

    pub(crate) fn decode_at(
        &self,
        frame: &FrameView,
        tileset: &TilesetDefinition,
        sprites: &SpriteMap,
        position: ScreenPos,
    ) -> TileRecord {
        let tile_id = frame.tiles.get(position);
        let map_position = CoordinateMapper::map_position(position, frame.player);
        let mut record = TileRecord::new(tile_id, position, map_position, tileset.id);
        let input = DetectorInput {
            tile_id,
            map_position,
            frame,
            tileset,
            maps: self.maps,
        };

        let mut classification = CollisionResolver::classify(tileset, tile_id);
        let mut class = None;
        if classification.is_warp {
            match detectors::warp_destination(&input) {
                Ok(destination) => class = Some(TileClass::Warp(destination)),
                Err(error) => {
                    degraded("warp_destination", position, &error);
                    classification = CollisionResolver::classify_without_warp(tileset, tile_id);
                }
            }
        }
        let class = class.unwrap_or_else(|| match classification.ledge_direction {
            Some(direction) => TileClass::Ledge(direction),
            None => TileClass::terrain(classification.kind),
        });
        let kind = class.kind();
        record.set_class(class);
        record.set_flag(TileFlags::WALKABLE, classification.is_walkable);
        record.set_flag(TileFlags::ENCOUNTER, classification.is_encounter);

        if !tileset.is_fallback() {
            record.set_flag(TileFlags::ANIMATED, detectors::is_animated(&input));
            record.set_flag(detectors::interactions(&input), true);
            record.set_flag(
                TileFlags::FLY_DESTINATION,
                detectors::is_fly_destination(&input),
            );
            record.set_flag(
                TileFlags::FOOTSTEP_SOUND,
                detectors::has_footstep_sound(kind),
            );
            record.set_flag(TileFlags::BLOCKS_LIGHT, detectors::blocks_light(kind));

            match detectors::light_level(&input) {
                Ok(level) => record.set_light_level(level),
                Err(error) => degraded("light_level", position, &error),
            }
            match detectors::hidden_item(&input) {
                Ok(item) => {
                    record.hidden_item_id = item;
                    record.set_flag(TileFlags::REQUIRES_ITEMFINDER, item.is_some());
                }
                Err(error) => degraded("hidden_item", position, &error),
            }
            match detectors::zones(&input) {
                Ok(zones) => record.set_flag(zones, true),
                Err(error) => degraded("zones", position, &error),
            }

            record.movement_modifier = detectors::movement_modifier(kind);
            record.background_priority = detectors::background_priority(kind);
            record.elevation_pair = detectors::elevation_pair(&input);
            record.water_current_direction = detectors::water_current(&input);
        }

        if let Some(sprite) = sprites.occupied.get(&position) {
            record.occupy(sprite.slot);
            record.sprite_priority = 1;
        }
        if let Some(mark) = sprites.sight.get(&position) {
            record.set_flag(TileFlags::TRAINER_SIGHT_LINE, true);
            record.trainer_id = mark.trainer_id;
        }

        record
    }
}

fn degraded(detector: &'static str, position: ScreenPos, error: &DetectorError) {
    tracing::debug!(
        detector,
        %position,
        code = error.error_code(),
        "{error}; property left unset"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecoderConfig;
    use crate::decode::frame::{TileBuffer, WarpEntry};
    use crate::decode::sprites::{SpriteTable, TrainerInfo};
    use crate::types::{Direction, MapDimensions, MapPos, TileKind, WarpDestination};

    fn pos(x: u8, y: u8) -> ScreenPos {
        ScreenPos::new(x, y).expect("on screen")
    }

    fn overworld() -> TilesetDefinition {
        TilesetDefinition::new(0, "overworld")
            .with_walkable(&[32, 33, 34, 35, 36, 37, 38, 39, 0x52, 0x1B])
            .with_doors(&[0x1B])
            .with_encounters(&[0x52])
            .with_water(&[0x14])
            .with_animated(&[0x14])
            .with_ledges(&[(60, Direction::Down)])
    }

    fn frame(tiles: &[(u8, u8, u8)], sprites: SpriteTable) -> FrameView {
        let mut buffer = TileBuffer::filled(34);
        for &(x, y, id) in tiles {
            buffer.set(pos(x, y), id);
        }
        FrameView {
            tiles: buffer,
            current_map: 0x00,
            last_map: 0x00,
            player: MapPos::new(20, 20),
            dimensions: MapDimensions::new(20, 20),
            warps: vec![WarpEntry {
                position: MapPos::new(18, 18),
                destination_warp: 0,
                destination_map: 0x25,
            }],
            sprites,
        }
    }

    fn maps() -> MapTables {
        let mut maps = MapTables::default();
        maps.warp_arrivals.insert((0x25, 0), MapPos::new(2, 7));
        maps
    }

    fn decode(frame: &FrameView, tileset: &TilesetDefinition, x: u8, y: u8) -> TileRecord {
        let maps = maps();
        let decoder = TileDecoder::new(&maps);
        let range = DecoderConfig::default().trainer_sight_range;
        let sprites = SpriteMap::compute(frame, tileset, range);
        decoder
            .decode(frame, tileset, &sprites, x, y)
            .expect("valid coordinate")
    }

    #[test]
    fn walkable_tile_decodes() {
        let frame = frame(&[], SpriteTable::default());
        let tile = decode(&frame, &overworld(), 5, 5);
        assert_eq!(tile.tile_id, 34);
        assert_eq!(tile.kind(), TileKind::Walkable);
        assert!(tile.is_walkable());
        assert_eq!(tile.map_position, MapPos::new(18, 18));
        assert!(!tile.has(TileFlags::BLOCKS_LIGHT));
    }

    #[test]
    fn ledge_tile_has_direction() {
        let frame = frame(&[(3, 10, 60)], SpriteTable::default());
        let tile = decode(&frame, &overworld(), 3, 10);
        assert_eq!(tile.kind(), TileKind::Ledge);
        assert_eq!(tile.ledge_direction(), Some(Direction::Down));
        assert_eq!(tile.warp_destination(), None);
    }

    #[test]
    fn resolved_door_is_warp_with_destination() {
        // Screen (4..=5, 4..=5) shows map square (18, 18).
        let frame = frame(&[(4, 5, 0x1B)], SpriteTable::default());
        let tile = decode(&frame, &overworld(), 4, 5);
        assert_eq!(tile.kind(), TileKind::Warp);
        assert_eq!(
            tile.warp_destination(),
            Some(WarpDestination {
                map: 0x25,
                x: 2,
                y: 7
            })
        );
    }

    #[test]
    fn unresolved_door_degrades_to_base_kind() {
        let frame = frame(&[(0, 0, 0x1B)], SpriteTable::default());
        let tile = decode(&frame, &overworld(), 0, 0);
        assert_eq!(tile.kind(), TileKind::Walkable);
        assert_eq!(tile.warp_destination(), None);
        assert!(tile.is_walkable());
    }

    #[test]
    fn sprite_overrides_walkability() {
        let sprite = SpriteInfo {
            slot: 2,
            picture_id: 3,
            position: pos(9, 9),
            facing: Direction::Down,
            trainer: None,
        };
        let frame = frame(&[], SpriteTable::from_sprites([sprite]));
        let tile = decode(&frame, &overworld(), 9, 9);
        assert_eq!(tile.tile_id, 34);
        assert!(!tile.is_walkable());
        assert_eq!(tile.kind(), TileKind::Npc);
        assert_eq!(tile.sprite_occupancy(), 2);
        assert_eq!(tile.sprite_priority, 1);
    }

    #[test]
    fn trainer_sight_marks_tiles() {
        let trainer = SpriteInfo {
            slot: 1,
            picture_id: 3,
            position: pos(4, 4),
            facing: Direction::Right,
            trainer: Some(TrainerInfo {
                class: 201,
                number: 2,
            }),
        };
        let frame = frame(&[(7, 4, 0x00)], SpriteTable::from_sprites([trainer]));
        let tileset = overworld();
        let tile = decode(&frame, &tileset, 6, 4);
        assert!(tile.has(TileFlags::TRAINER_SIGHT_LINE));
        assert_eq!(tile.trainer_id, Some(201));
        assert!(!decode(&frame, &tileset, 8, 4).has(TileFlags::TRAINER_SIGHT_LINE));
    }

    #[test]
    fn water_is_slow_animated_and_silent() {
        let frame = frame(&[(2, 2, 0x14)], SpriteTable::default());
        let tile = decode(&frame, &overworld(), 2, 2);
        assert_eq!(tile.kind(), TileKind::Water);
        assert_eq!(tile.movement_modifier, 0.5);
        assert!(tile.has(TileFlags::ANIMATED));
        assert!(tile.is_encounter());
        assert!(!tile.has(TileFlags::FOOTSTEP_SOUND));
    }

    #[test]
    fn fallback_tileset_blocks_without_features() {
        let frame = frame(&[(2, 2, 0x14)], SpriteTable::default());
        let fallback = TilesetDefinition::blocked_fallback(99);
        for (x, y) in [(0, 0), (2, 2), (19, 17)] {
            let tile = decode(&frame, &fallback, x, y);
            assert_eq!(tile.kind(), TileKind::Blocked);
            assert!(!tile.is_walkable());
            assert_eq!(tile.tileset_id, 99);
            assert_eq!(tile.flags(), TileFlags::empty());
            assert_eq!(tile.movement_modifier, 1.0);
            assert_eq!(tile.background_priority, 0);
        }
    }

    #[test]
    fn off_screen_request_is_rejected() {
        let frame = frame(&[], SpriteTable::default());
        let maps = maps();
        let decoder = TileDecoder::new(&maps);
        let tileset = overworld();
        let sprites = SpriteMap::compute(&frame, &tileset, 4);
        assert_eq!(
            decoder.decode(&frame, &tileset, &sprites, 20, 3),
            Err(DecodeError::InvalidCoordinate { x: 20, y: 3 })
        );
    }

    #[test]
    fn decoding_is_idempotent() {
        let frame = frame(&[(3, 10, 60), (2, 2, 0x14)], SpriteTable::default());
        let tileset = overworld();
        for (x, y) in [(3, 10), (2, 2), (11, 7)] {
            assert_eq!(decode(&frame, &tileset, x, y), decode(&frame, &tileset, x, y));
        }
    }
}
