//! Sprite slots and their footprint on the screen grid.
//!
//! Sprites live in a fixed array of 16 slots; slot 0 is the player and never
//! occupies a tile. Each visible sprite is pinned to one screen tile, the
//! bottom-left tile of its 16×16 square, which is the tile collision checks
//! read.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use crate::catalog::TilesetDefinition;
use crate::config::DecoderConfig;
use crate::memory::{MemoryError, MemoryView, addr};
use crate::types::{Direction, ScreenPos};

use super::collision::CollisionResolver;
use super::frame::TileBuffer;

/// Trainer data attached to a sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainerInfo {
    /// Trainer class as stored in memory (offset by 200).
    pub class: u8,
    pub number: u8,
}

/// One visible sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteInfo {
    pub slot: u8,
    pub picture_id: u8,
    pub position: ScreenPos,
    pub facing: Direction,
    pub trainer: Option<TrainerInfo>,
}

/// A tile inside some trainer's line of sight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SightMark {
    pub slot: u8,
    pub trainer_id: Option<u8>,
}

/// Visible non-player sprites, in slot order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpriteTable {
    sprites: ArrayVec<SpriteInfo, { DecoderConfig::SPRITE_SLOTS }>,
}

impl SpriteTable {
    /// Keeps the first 16 sprites with a non-zero slot, sorted by slot.
    pub fn from_sprites(sprites: impl IntoIterator<Item = SpriteInfo>) -> Self {
        let mut sprites: ArrayVec<_, { DecoderConfig::SPRITE_SLOTS }> = sprites
            .into_iter()
            .filter(|sprite| sprite.slot != 0)
            .take(DecoderConfig::SPRITE_SLOTS)
            .collect();
        sprites.sort_by_key(|sprite| sprite.slot);
        Self { sprites }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpriteInfo> {
        self.sprites.iter()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn trainers(&self) -> impl Iterator<Item = &SpriteInfo> {
        self.sprites.iter().filter(|sprite| sprite.trainer.is_some())
    }
}

pub struct SpriteOverlay;

impl SpriteOverlay {
    /// Reads all sprite slots from one memory view.
    pub fn read_sprites<M: MemoryView + ?Sized>(memory: &M) -> Result<SpriteTable, MemoryError> {
        let stride = DecoderConfig::SPRITE_STRIDE;
        let state = memory.read_slice(
            addr::SPRITE_STATE_DATA,
            DecoderConfig::SPRITE_SLOTS * stride,
        )?;
        let extra = memory.read_slice(
            addr::MAP_SPRITE_EXTRA_DATA,
            (DecoderConfig::SPRITE_SLOTS - 1) * 2,
        )?;

        let sprites = (1..DecoderConfig::SPRITE_SLOTS).filter_map(|slot| {
            let data = state.get(slot * stride..(slot + 1) * stride)?;
            let field = |offset: u16| data.get(usize::from(offset)).copied();

            let picture_id = field(addr::SPRITE_PICTURE_ID)?;
            if picture_id == 0 || field(addr::SPRITE_IMAGE_INDEX)? == addr::SPRITE_HIDDEN {
                return None;
            }
            let position = Self::anchor_tile(
                field(addr::SPRITE_X_PIXELS)?,
                field(addr::SPRITE_Y_PIXELS)?,
            )?;
            let facing = Direction::from_facing_byte(field(addr::SPRITE_FACING)?)
                .unwrap_or(Direction::Down);
            let trainer = extra
                .get((slot - 1) * 2..slot * 2)
                .and_then(|bytes| match *bytes {
                    [class, number] if class >= addr::TRAINER_CLASS_OFFSET => {
                        Some(TrainerInfo { class, number })
                    }
                    _ => None,
                });

            Some(SpriteInfo {
                slot: u8::try_from(slot).ok()?,
                picture_id,
                position,
                facing,
                trainer,
            })
        });

        Ok(SpriteTable::from_sprites(sprites))
    }

    /// Screen tile a sprite is pinned to, from its pixel position.
    ///
    /// Sprites are drawn 4 pixels above their square; `None` when the pinned
    /// tile falls off-screen.
    pub fn anchor_tile(x_pixels: u8, y_pixels: u8) -> Option<ScreenPos> {
        let x = u16::from(x_pixels) / 8;
        let y = (u16::from(y_pixels) + 4) / 8 + 1;
        ScreenPos::new(u8::try_from(x).ok()?, u8::try_from(y).ok()?)
    }

    /// Tile → sprite standing on it. The lowest slot wins a shared tile.
    pub fn occupied_tiles(sprites: &SpriteTable) -> BTreeMap<ScreenPos, SpriteInfo> {
        let mut occupied = BTreeMap::new();
        for sprite in sprites.iter() {
            occupied.entry(sprite.position).or_insert(*sprite);
        }
        occupied
    }

    /// Tiles inside each trainer's line of sight.
    ///
    /// A ray starts next to the trainer and advances one tile at a time in its
    /// facing direction for at most `range` tiles. The first tile that is
    /// blocked or holds another sprite is marked and ends the ray.
    pub fn sight_lines(
        sprites: &SpriteTable,
        tiles: &TileBuffer,
        tileset: &TilesetDefinition,
        range: u8,
    ) -> BTreeMap<ScreenPos, SightMark> {
        let occupied = Self::occupied_tiles(sprites);
        let mut marks = BTreeMap::new();

        for trainer in sprites.trainers() {
            let mark = SightMark {
                slot: trainer.slot,
                trainer_id: trainer.trainer.map(|info| info.class),
            };
            for step in 1..=i32::from(range) {
                let Some(position) = trainer.position.step(trainer.facing, step) else {
                    break;
                };
                marks.entry(position).or_insert(mark);
                if occupied.contains_key(&position)
                    || CollisionResolver::is_blocking(tileset, tiles.get(position))
                {
                    break;
                }
            }
        }
        marks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::RamImage;

    fn pos(x: u8, y: u8) -> ScreenPos {
        ScreenPos::new(x, y).expect("on screen")
    }

    fn sprite(slot: u8, x: u8, y: u8, facing: Direction, trainer: bool) -> SpriteInfo {
        SpriteInfo {
            slot,
            picture_id: 1,
            position: pos(x, y),
            facing,
            trainer: trainer.then_some(TrainerInfo {
                class: 201,
                number: 1,
            }),
        }
    }

    fn write_slot(ram: &mut RamImage, slot: u16, picture: u8, x_px: u8, y_px: u8, facing: u8) {
        let base = addr::SPRITE_STATE_DATA + slot * 16;
        ram.set(base + addr::SPRITE_PICTURE_ID, picture)
            .set(base + addr::SPRITE_X_PIXELS, x_px)
            .set(base + addr::SPRITE_Y_PIXELS, y_px)
            .set(base + addr::SPRITE_FACING, facing);
    }

    #[test]
    fn player_pixels_anchor_to_player_tile() {
        assert_eq!(SpriteOverlay::anchor_tile(0x40, 0x3C), Some(ScreenPos::PLAYER_ANCHOR));
        assert_eq!(SpriteOverlay::anchor_tile(0x40, 0x2C), Some(pos(8, 7)));
        assert_eq!(SpriteOverlay::anchor_tile(0xF0, 0x3C), None);
    }

    #[test]
    fn read_skips_player_empty_and_hidden_slots() {
        let mut ram = RamImage::new();
        write_slot(&mut ram, 0, 1, 0x40, 0x3C, 0);
        write_slot(&mut ram, 2, 5, 0x48, 0x3C, 0x0C);
        write_slot(&mut ram, 3, 6, 0x10, 0x10, 0);
        ram.set(addr::SPRITE_STATE_DATA + 3 * 16 + addr::SPRITE_IMAGE_INDEX, 0xFF);
        ram.write(addr::MAP_SPRITE_EXTRA_DATA + 2, &[203, 4]);

        let table = SpriteOverlay::read_sprites(&ram).expect("read");
        assert_eq!(table.len(), 1);
        let only = table.iter().next().expect("one sprite");
        assert_eq!(only.slot, 2);
        assert_eq!(only.position, pos(9, 9));
        assert_eq!(only.facing, Direction::Right);
        assert_eq!(
            only.trainer,
            Some(TrainerInfo {
                class: 203,
                number: 4
            })
        );
    }

    #[test]
    fn lowest_slot_wins_shared_tile() {
        let table = SpriteTable::from_sprites([
            sprite(5, 3, 3, Direction::Down, false),
            sprite(2, 3, 3, Direction::Up, false),
        ]);
        let occupied = SpriteOverlay::occupied_tiles(&table);
        assert_eq!(occupied.len(), 1);
        assert_eq!(occupied[&pos(3, 3)].slot, 2);
    }

    #[test]
    fn sight_line_stops_at_first_wall_inclusive() {
        let tileset = TilesetDefinition::new(0, "test").with_walkable(&[0x2C]);
        let mut tiles = TileBuffer::filled(0x2C);
        tiles.set(pos(7, 4), 0x00);
        let table = SpriteTable::from_sprites([sprite(1, 4, 4, Direction::Right, true)]);

        let marks = SpriteOverlay::sight_lines(&table, &tiles, &tileset, 3);
        let marked: Vec<_> = marks.keys().copied().collect();
        assert_eq!(marked, vec![pos(5, 4), pos(6, 4), pos(7, 4)]);
        assert_eq!(marks[&pos(5, 4)].trainer_id, Some(201));

        let long = SpriteOverlay::sight_lines(&table, &tiles, &tileset, 6);
        assert!(!long.contains_key(&pos(8, 4)));
    }

    #[test]
    fn sight_line_stops_at_sprite_and_screen_edge() {
        let tileset = TilesetDefinition::new(0, "test").with_walkable(&[0x2C]);
        let tiles = TileBuffer::filled(0x2C);
        let table = SpriteTable::from_sprites([
            sprite(1, 10, 2, Direction::Down, true),
            sprite(2, 10, 4, Direction::Left, false),
            sprite(3, 1, 0, Direction::Left, true),
        ]);

        let marks = SpriteOverlay::sight_lines(&table, &tiles, &tileset, 4);
        assert!(marks.contains_key(&pos(10, 3)));
        assert!(marks.contains_key(&pos(10, 4)));
        assert!(!marks.contains_key(&pos(10, 5)));
        assert!(marks.contains_key(&pos(0, 0)));
        assert_eq!(marks.len(), 3);
    }

    #[test]
    fn non_trainers_cast_no_sight() {
        let tileset = TilesetDefinition::new(0, "test").with_walkable(&[0x2C]);
        let tiles = TileBuffer::filled(0x2C);
        let table = SpriteTable::from_sprites([sprite(1, 4, 4, Direction::Right, false)]);
        assert!(SpriteOverlay::sight_lines(&table, &tiles, &tileset, 4).is_empty());
    }
}
