//! Base collision classification of a tile id against a tileset.
//!
//! Kind precedence when an id appears in several tables:
//! warp > ledge > grass > water > tree > rock > walkable/blocked.
//! Walkability is plain membership in the walkable set and does not depend on
//! the chosen kind.

use crate::catalog::TilesetDefinition;
use crate::types::{Direction, TileKind};

/// Result of classifying one tile id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub kind: TileKind,
    pub is_walkable: bool,
    /// Present exactly when `kind` is [`TileKind::Ledge`].
    pub ledge_direction: Option<Direction>,
    pub is_encounter: bool,
    pub is_warp: bool,
}

pub struct CollisionResolver;

impl CollisionResolver {
    pub fn classify(tileset: &TilesetDefinition, tile_id: u8) -> Classification {
        let mut classification = Self::classify_without_warp(tileset, tile_id);
        if tileset.doors.contains(tile_id) {
            classification.kind = TileKind::Warp;
            classification.ledge_direction = None;
            classification.is_warp = true;
        }
        classification
    }

    /// Classification with the door table ignored; used when a door's
    /// destination cannot be resolved.
    pub fn classify_without_warp(tileset: &TilesetDefinition, tile_id: u8) -> Classification {
        let is_walkable = tileset.walkable.contains(tile_id);
        let ledge_direction = tileset.ledge_direction(tile_id);

        let kind = if ledge_direction.is_some() {
            TileKind::Ledge
        } else if tileset.encounters.contains(tile_id) {
            TileKind::Grass
        } else if tileset.water.contains(tile_id) {
            TileKind::Water
        } else if tileset.trees.contains(tile_id) {
            TileKind::Tree
        } else if tileset.boulders.contains(tile_id) {
            TileKind::Rock
        } else if is_walkable {
            TileKind::Walkable
        } else {
            TileKind::Blocked
        };

        let is_encounter = tileset.encounters.contains(tile_id)
            || tileset.water.contains(tile_id)
            || (tileset.encounters_on_walkable && is_walkable);

        Classification {
            kind,
            is_walkable,
            ledge_direction,
            is_encounter,
            is_warp: false,
        }
    }

    /// Whether the tile stops movement and line of sight.
    pub fn is_blocking(tileset: &TilesetDefinition, tile_id: u8) -> bool {
        !tileset.walkable.contains(tile_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tileset() -> TilesetDefinition {
        TilesetDefinition::new(0, "overworld")
            .with_walkable(&[32, 33, 34, 35, 36, 37, 38, 39, 0x52, 0x1B])
            .with_doors(&[0x1B, 0x60])
            .with_encounters(&[0x52])
            .with_water(&[0x14])
            .with_trees(&[0x3D])
            .with_boulders(&[0x15])
            .with_ledges(&[(60, Direction::Down), (0x60, Direction::Left)])
    }

    #[test]
    fn walkable_id_is_walkable() {
        let class = CollisionResolver::classify(&tileset(), 34);
        assert_eq!(class.kind, TileKind::Walkable);
        assert!(class.is_walkable);
        assert!(!class.is_encounter);
        assert!(!class.is_warp);
    }

    #[test]
    fn ledge_carries_direction() {
        let class = CollisionResolver::classify(&tileset(), 60);
        assert_eq!(class.kind, TileKind::Ledge);
        assert_eq!(class.ledge_direction, Some(Direction::Down));
        assert!(!class.is_walkable);
    }

    #[test]
    fn warp_beats_ledge() {
        let class = CollisionResolver::classify(&tileset(), 0x60);
        assert_eq!(class.kind, TileKind::Warp);
        assert_eq!(class.ledge_direction, None);
        assert!(class.is_warp);

        let demoted = CollisionResolver::classify_without_warp(&tileset(), 0x60);
        assert_eq!(demoted.kind, TileKind::Ledge);
        assert_eq!(demoted.ledge_direction, Some(Direction::Left));
    }

    #[test]
    fn door_keeps_walkability() {
        let class = CollisionResolver::classify(&tileset(), 0x1B);
        assert_eq!(class.kind, TileKind::Warp);
        assert!(class.is_walkable);
    }

    #[test]
    fn grass_is_walkable_encounter() {
        let class = CollisionResolver::classify(&tileset(), 0x52);
        assert_eq!(class.kind, TileKind::Grass);
        assert!(class.is_walkable);
        assert!(class.is_encounter);
    }

    #[test]
    fn water_tree_and_rock_block() {
        let def = tileset();
        let water = CollisionResolver::classify(&def, 0x14);
        assert_eq!(water.kind, TileKind::Water);
        assert!(water.is_encounter);
        assert!(!water.is_walkable);
        assert_eq!(CollisionResolver::classify(&def, 0x3D).kind, TileKind::Tree);
        assert_eq!(CollisionResolver::classify(&def, 0x15).kind, TileKind::Rock);
    }

    #[test]
    fn unlisted_id_is_blocked() {
        let class = CollisionResolver::classify(&tileset(), 0xEE);
        assert_eq!(class.kind, TileKind::Blocked);
        assert!(!class.is_walkable);
        assert!(CollisionResolver::is_blocking(&tileset(), 0xEE));
    }

    #[test]
    fn caves_encounter_on_every_walkable_tile() {
        let cave = TilesetDefinition::new(17, "cavern")
            .with_walkable(&[0x05])
            .with_encounters_on_walkable();
        assert!(CollisionResolver::classify(&cave, 0x05).is_encounter);
        assert!(!CollisionResolver::classify(&cave, 0x06).is_encounter);
    }

    #[test]
    fn fallback_blocks_everything() {
        let fallback = TilesetDefinition::blocked_fallback(99);
        for id in [0x00, 0x2C, 0xFF] {
            let class = CollisionResolver::classify(&fallback, id);
            assert_eq!(class.kind, TileKind::Blocked);
            assert!(!class.is_walkable);
        }
    }
}
