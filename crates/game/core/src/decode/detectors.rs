//! Auxiliary tile property detectors.
//!
//! Each detector is a pure function of the tile id, the tileset and map
//! tables, and the frame. Fallible detectors return [`DetectorError`]; the
//! tile decoder turns a failure into an unset property.

use crate::catalog::{MapTables, TilesetDefinition};
use crate::types::{Direction, MapPos, TileFlags, TileKind, WarpDestination};

use super::coords::CoordinateMapper;
use super::error::DetectorError;
use super::frame::{FrameView, WarpEntry};

/// Inputs shared by every detector for one tile.
#[derive(Clone, Copy, Debug)]
pub struct DetectorInput<'a> {
    pub tile_id: u8,
    pub map_position: MapPos,
    pub frame: &'a FrameView,
    pub tileset: &'a TilesetDefinition,
    pub maps: &'a MapTables,
}

impl DetectorInput<'_> {
    fn require_on_map(&self) -> Result<(), DetectorError> {
        if CoordinateMapper::in_bounds(self.map_position, self.frame.dimensions) {
            Ok(())
        } else {
            Err(DetectorError::OutsideMap {
                map: self.frame.current_map,
                position: self.map_position,
            })
        }
    }
}

/// Destination of a door tile, from the map's warp entries and the arrival table.
pub fn warp_destination(input: &DetectorInput<'_>) -> Result<WarpDestination, DetectorError> {
    let unresolved = || DetectorError::UnresolvedWarp {
        map: input.frame.current_map,
        position: input.map_position,
    };
    let entry = input.frame.warp_at(input.map_position).ok_or_else(unresolved)?;
    let map = match entry.destination_map {
        WarpEntry::LAST_MAP => input.frame.last_map,
        map => map,
    };
    let arrival = input
        .maps
        .warp_arrival(map, entry.destination_warp)
        .ok_or_else(unresolved)?;
    Ok(WarpDestination {
        map,
        x: arrival.x,
        y: arrival.y,
    })
}

pub fn light_level(input: &DetectorInput<'_>) -> Result<u8, DetectorError> {
    if input.maps.is_dark(input.frame.current_map) {
        return Ok(0);
    }
    match input.tileset.light_level {
        level @ 0..=15 => Ok(level),
        level => Err(DetectorError::LightLevelOutOfRange {
            tileset: input.tileset.id,
            level,
        }),
    }
}

pub fn is_animated(input: &DetectorInput<'_>) -> bool {
    input.tileset.animated.contains(input.tile_id)
}

pub fn interactions(input: &DetectorInput<'_>) -> TileFlags {
    let tileset = input.tileset;
    let id = input.tile_id;
    let mut flags = TileFlags::empty();
    flags.set(TileFlags::SIGN, tileset.signs.contains(id));
    flags.set(TileFlags::BOOKSHELF, tileset.bookshelves.contains(id));
    flags.set(TileFlags::STRENGTH_BOULDER, tileset.boulders.contains(id));
    flags.set(TileFlags::CUTTABLE_TREE, tileset.trees.contains(id));
    flags.set(TileFlags::PC_ACCESSIBLE, tileset.terminals.contains(id));
    flags
}

/// Hidden item buried at this square; found only with the Itemfinder.
pub fn hidden_item(input: &DetectorInput<'_>) -> Result<Option<u8>, DetectorError> {
    input.require_on_map()?;
    Ok(input
        .maps
        .hidden_item(input.frame.current_map, input.map_position))
}

/// Safari Zone and Game Corner membership of an on-map square.
pub fn zones(input: &DetectorInput<'_>) -> Result<TileFlags, DetectorError> {
    input.require_on_map()?;
    let map = input.frame.current_map;
    let mut flags = TileFlags::empty();
    flags.set(TileFlags::SAFARI_ZONE, input.maps.is_safari(map));
    flags.set(TileFlags::GAME_CORNER, input.maps.is_game_corner(map));
    Ok(flags)
}

pub fn is_fly_destination(input: &DetectorInput<'_>) -> bool {
    input
        .maps
        .is_fly_point(input.frame.current_map, input.map_position)
}

pub fn has_footstep_sound(kind: TileKind) -> bool {
    kind != TileKind::Water
}

/// Tall grass is drawn over the lower half of sprites.
pub fn background_priority(kind: TileKind) -> u8 {
    u8::from(kind == TileKind::Grass)
}

pub fn blocks_light(kind: TileKind) -> bool {
    matches!(
        kind,
        TileKind::Blocked | TileKind::Building | TileKind::Tree | TileKind::Rock
    )
}

pub fn elevation_pair(input: &DetectorInput<'_>) -> Option<u8> {
    input.tileset.elevation_partner(input.tile_id)
}

pub fn water_current(input: &DetectorInput<'_>) -> Option<Direction> {
    if input.tileset.water.contains(input.tile_id) {
        input.maps.water_current(input.frame.current_map)
    } else {
        None
    }
}

pub fn movement_modifier(kind: TileKind) -> f32 {
    match kind {
        TileKind::Water => 0.5,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::frame::TileBuffer;
    use crate::decode::sprites::SpriteTable;
    use crate::types::MapDimensions;

    fn frame(map: u8) -> FrameView {
        FrameView {
            tiles: TileBuffer::filled(0),
            current_map: map,
            last_map: 0x01,
            player: MapPos::new(5, 6),
            dimensions: MapDimensions::new(10, 9),
            warps: vec![
                WarpEntry {
                    position: MapPos::new(5, 5),
                    destination_warp: 0,
                    destination_map: 0x25,
                },
                WarpEntry {
                    position: MapPos::new(2, 7),
                    destination_warp: 1,
                    destination_map: WarpEntry::LAST_MAP,
                },
                WarpEntry {
                    position: MapPos::new(9, 9),
                    destination_warp: 3,
                    destination_map: 0x40,
                },
            ],
            sprites: SpriteTable::default(),
        }
    }

    fn maps() -> MapTables {
        let mut maps = MapTables::default();
        maps.warp_arrivals.insert((0x25, 0), MapPos::new(2, 7));
        maps.warp_arrivals.insert((0x01, 1), MapPos::new(21, 25));
        maps.hidden_items.insert((0x00, 3, 4), 0x14);
        maps.dark_maps.insert(0x52);
        maps.safari_maps.insert(0xDC);
        maps.water_currents.insert(0xA2, Direction::Down);
        maps.fly_points.insert(0x00, MapPos::new(5, 6));
        maps
    }

    fn input<'a>(
        frame: &'a FrameView,
        tileset: &'a TilesetDefinition,
        maps: &'a MapTables,
        tile_id: u8,
        position: MapPos,
    ) -> DetectorInput<'a> {
        DetectorInput {
            tile_id,
            map_position: position,
            frame,
            tileset,
            maps,
        }
    }

    #[test]
    fn warp_resolves_through_arrival_table() {
        let (frame, maps) = (frame(0x00), maps());
        let tileset = TilesetDefinition::new(0, "overworld");
        let door = input(&frame, &tileset, &maps, 0x1B, MapPos::new(5, 5));
        assert_eq!(
            warp_destination(&door),
            Ok(WarpDestination {
                map: 0x25,
                x: 2,
                y: 7
            })
        );
    }

    #[test]
    fn last_map_warp_uses_previous_map() {
        let (frame, maps) = (frame(0x25), maps());
        let tileset = TilesetDefinition::new(1, "reds_house_1");
        let exit = input(&frame, &tileset, &maps, 0x1B, MapPos::new(2, 7));
        assert_eq!(warp_destination(&exit).map(|d| (d.map, d.x, d.y)), Ok((0x01, 21, 25)));
    }

    #[test]
    fn warp_without_entry_or_arrival_fails() {
        let (frame, maps) = (frame(0x00), maps());
        let tileset = TilesetDefinition::new(0, "overworld");
        let stray = input(&frame, &tileset, &maps, 0x1B, MapPos::new(1, 1));
        assert!(matches!(
            warp_destination(&stray),
            Err(DetectorError::UnresolvedWarp { .. })
        ));
        let unknown_arrival = input(&frame, &tileset, &maps, 0x1B, MapPos::new(9, 9));
        assert!(warp_destination(&unknown_arrival).is_err());
    }

    #[test]
    fn dark_maps_have_no_light() {
        let maps = maps();
        let tileset = TilesetDefinition::new(17, "cavern").with_light_level(8);
        let dark = frame(0x52);
        assert_eq!(light_level(&input(&dark, &tileset, &maps, 0, MapPos::new(0, 0))), Ok(0));
        let lit = frame(0x3B);
        assert_eq!(light_level(&input(&lit, &tileset, &maps, 0, MapPos::new(0, 0))), Ok(8));
    }

    #[test]
    fn out_of_range_light_level_fails() {
        let (frame, maps) = (frame(0x00), maps());
        let tileset = TilesetDefinition::new(3, "bad").with_light_level(40);
        assert_eq!(
            light_level(&input(&frame, &tileset, &maps, 0, MapPos::new(0, 0))),
            Err(DetectorError::LightLevelOutOfRange {
                tileset: 3,
                level: 40
            })
        );
    }

    #[test]
    fn hidden_items_require_on_map_square() {
        let (frame, maps) = (frame(0x00), maps());
        let tileset = TilesetDefinition::new(0, "overworld");
        assert_eq!(
            hidden_item(&input(&frame, &tileset, &maps, 0, MapPos::new(3, 4))),
            Ok(Some(0x14))
        );
        assert_eq!(
            hidden_item(&input(&frame, &tileset, &maps, 0, MapPos::new(3, 5))),
            Ok(None)
        );
        assert!(hidden_item(&input(&frame, &tileset, &maps, 0, MapPos::new(-1, 4))).is_err());
    }

    #[test]
    fn interaction_flags_follow_tables() {
        let (frame, maps) = (frame(0x00), maps());
        let tileset = TilesetDefinition::new(0, "overworld")
            .with_signs(&[0x5A])
            .with_trees(&[0x3D]);
        let sign = interactions(&input(&frame, &tileset, &maps, 0x5A, MapPos::new(0, 0)));
        assert_eq!(sign, TileFlags::SIGN);
        let tree = interactions(&input(&frame, &tileset, &maps, 0x3D, MapPos::new(0, 0)));
        assert_eq!(tree, TileFlags::CUTTABLE_TREE);
    }

    #[test]
    fn zones_and_currents_are_map_keyed() {
        let maps = maps();
        let tileset = TilesetDefinition::new(17, "cavern").with_water(&[0x14]);
        let safari = frame(0xDC);
        let zone = zones(&input(&safari, &tileset, &maps, 0, MapPos::new(1, 1)));
        assert_eq!(zone, Ok(TileFlags::SAFARI_ZONE));

        let seafoam = frame(0xA2);
        let water = input(&seafoam, &tileset, &maps, 0x14, MapPos::new(1, 1));
        assert_eq!(water_current(&water), Some(Direction::Down));
        let rock = input(&seafoam, &tileset, &maps, 0x05, MapPos::new(1, 1));
        assert_eq!(water_current(&rock), None);
    }

    #[test]
    fn fly_point_matches_exact_square() {
        let (frame, maps) = (frame(0x00), maps());
        let tileset = TilesetDefinition::new(0, "overworld");
        assert!(is_fly_destination(&input(&frame, &tileset, &maps, 0, MapPos::new(5, 6))));
        assert!(!is_fly_destination(&input(&frame, &tileset, &maps, 0, MapPos::new(5, 7))));
    }

    #[test]
    fn kind_derived_properties() {
        assert!(!has_footstep_sound(TileKind::Water));
        assert!(has_footstep_sound(TileKind::Grass));
        assert_eq!(background_priority(TileKind::Grass), 1);
        assert!(blocks_light(TileKind::Tree));
        assert!(!blocks_light(TileKind::Walkable));
        assert_eq!(movement_modifier(TileKind::Water), 0.5);
    }
}
