//! Decoded tile records.
//!
//! A [`TileRecord`] keeps the fields whose consistency matters (primary kind,
//! ledge direction, warp destination, sprite occupancy) behind a single
//! [`TileClass`], so a ledge without a direction or a warp without a
//! destination cannot be built. The JSON form is flat; deserialization
//! re-checks every invariant.
use bitflags::bitflags;

use crate::error::{DecoderError, ErrorSeverity};

use super::{Direction, MapPos, ScreenPos};

/// Primary classification of a tile.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TileKind {
    #[default]
    Unknown,
    Walkable,
    Blocked,
    Grass,
    Water,
    Warp,
    Ledge,
    Building,
    Road,
    Tree,
    Rock,
    Npc,
    Item,
}

impl TileKind {
    /// Kinds that carry extra data and therefore only come from [`TileClass`]'s
    /// dedicated variants.
    pub fn carries_payload(self) -> bool {
        matches!(self, TileKind::Warp | TileKind::Ledge | TileKind::Npc)
    }
}

/// Where a warp tile leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WarpDestination {
    pub map: u8,
    pub x: i32,
    pub y: i32,
}

/// Primary kind together with the data only that kind may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileClass {
    /// Any kind without a payload. Never `Warp`, `Ledge` or `Npc`.
    Terrain(TileKind),
    Ledge(Direction),
    Warp(WarpDestination),
    /// Occupied by the sprite in this slot (never 0, the player's slot).
    Sprite { slot: u8 },
}

impl TileClass {
    /// Builds a payload-free class; payload kinds degrade to `Unknown`.
    pub fn terrain(kind: TileKind) -> Self {
        if kind.carries_payload() {
            TileClass::Terrain(TileKind::Unknown)
        } else {
            TileClass::Terrain(kind)
        }
    }

    pub fn kind(&self) -> TileKind {
        match self {
            TileClass::Terrain(kind) => *kind,
            TileClass::Ledge(_) => TileKind::Ledge,
            TileClass::Warp(_) => TileKind::Warp,
            TileClass::Sprite { .. } => TileKind::Npc,
        }
    }
}

bitflags! {
    /// Boolean tile properties.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct TileFlags: u16 {
        const WALKABLE            = 1 << 0;
        const ENCOUNTER           = 1 << 1;
        const ANIMATED            = 1 << 2;
        const SIGN                = 1 << 3;
        const BOOKSHELF           = 1 << 4;
        const STRENGTH_BOULDER    = 1 << 5;
        const CUTTABLE_TREE       = 1 << 6;
        const PC_ACCESSIBLE       = 1 << 7;
        const TRAINER_SIGHT_LINE  = 1 << 8;
        const REQUIRES_ITEMFINDER = 1 << 9;
        const SAFARI_ZONE         = 1 << 10;
        const GAME_CORNER         = 1 << 11;
        const FLY_DESTINATION     = 1 << 12;
        const FOOTSTEP_SOUND      = 1 << 13;
        const BLOCKS_LIGHT        = 1 << 14;
    }
}

impl TileFlags {
    /// Flags that make a tile worth interacting with.
    pub const INTERACTIVE: Self = Self::SIGN
        .union(Self::BOOKSHELF)
        .union(Self::STRENGTH_BOULDER)
        .union(Self::CUTTABLE_TREE)
        .union(Self::PC_ACCESSIBLE);
}

/// Invariant violations found when rebuilding a record from its flat form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("ledge direction must be present exactly when kind is ledge (kind {kind})")]
    LedgeMismatch { kind: TileKind },

    #[error("warp destination must be fully present exactly when kind is warp (kind {kind})")]
    WarpMismatch { kind: TileKind },

    #[error("sprite occupancy {slot} is inconsistent with kind {kind} and walkability")]
    SpriteMismatch { kind: TileKind, slot: u8 },

    #[error("light level {0} exceeds 15")]
    LightLevel(u8),

    #[error("screen position ({x}, {y}) is off-screen")]
    OffScreen { x: u8, y: u8 },
}

impl DecoderError for RecordError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LedgeMismatch { .. } => "RECORD_LEDGE_MISMATCH",
            Self::WarpMismatch { .. } => "RECORD_WARP_MISMATCH",
            Self::SpriteMismatch { .. } => "RECORD_SPRITE_MISMATCH",
            Self::LightLevel(_) => "RECORD_LIGHT_LEVEL",
            Self::OffScreen { .. } => "RECORD_OFF_SCREEN",
        }
    }
}

/// Everything known about one on-screen tile.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "TileRecordRepr", try_from = "TileRecordRepr")
)]
pub struct TileRecord {
    pub tile_id: u8,
    pub position: ScreenPos,
    pub map_position: MapPos,
    pub tileset_id: u8,
    class: TileClass,
    flags: TileFlags,
    light_level: u8,
    pub movement_modifier: f32,
    pub trainer_id: Option<u8>,
    pub hidden_item_id: Option<u8>,
    pub sprite_priority: u8,
    pub background_priority: u8,
    pub elevation_pair: Option<u8>,
    pub water_current_direction: Option<Direction>,
}

impl TileRecord {
    pub const MAX_LIGHT_LEVEL: u8 = 15;

    /// Blocked, fully lit, no features.
    pub fn new(tile_id: u8, position: ScreenPos, map_position: MapPos, tileset_id: u8) -> Self {
        Self {
            tile_id,
            position,
            map_position,
            tileset_id,
            class: TileClass::Terrain(TileKind::Blocked),
            flags: TileFlags::empty(),
            light_level: Self::MAX_LIGHT_LEVEL,
            movement_modifier: 1.0,
            trainer_id: None,
            hidden_item_id: None,
            sprite_priority: 0,
            background_priority: 0,
            elevation_pair: None,
            water_current_direction: None,
        }
    }

    pub fn class(&self) -> TileClass {
        self.class
    }

    pub fn kind(&self) -> TileKind {
        self.class.kind()
    }

    pub fn flags(&self) -> TileFlags {
        self.flags
    }

    pub fn has(&self, flag: TileFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn is_walkable(&self) -> bool {
        self.flags.contains(TileFlags::WALKABLE)
    }

    pub fn is_encounter(&self) -> bool {
        self.flags.contains(TileFlags::ENCOUNTER)
    }

    pub fn is_interactive(&self) -> bool {
        self.flags.intersects(TileFlags::INTERACTIVE) || self.hidden_item_id.is_some()
    }

    pub fn light_level(&self) -> u8 {
        self.light_level
    }

    pub fn ledge_direction(&self) -> Option<Direction> {
        match self.class {
            TileClass::Ledge(direction) => Some(direction),
            _ => None,
        }
    }

    pub fn warp_destination(&self) -> Option<WarpDestination> {
        match self.class {
            TileClass::Warp(destination) => Some(destination),
            _ => None,
        }
    }

    /// Slot of the sprite standing on this tile, or 0.
    pub fn sprite_occupancy(&self) -> u8 {
        match self.class {
            TileClass::Sprite { slot } => slot,
            _ => 0,
        }
    }

    /// Sets the primary class. Occupied tiles stay occupied.
    pub fn set_class(&mut self, class: TileClass) {
        if matches!(self.class, TileClass::Sprite { .. }) {
            return;
        }
        self.class = match class {
            TileClass::Terrain(kind) => TileClass::terrain(kind),
            TileClass::Sprite { slot: 0 } => return,
            TileClass::Sprite { .. } => {
                self.flags.remove(TileFlags::WALKABLE);
                class
            }
            other => other,
        };
    }

    /// Marks the tile as covered by a sprite: kind becomes npc and it stops being walkable.
    pub fn occupy(&mut self, slot: u8) {
        self.set_class(TileClass::Sprite { slot });
    }

    /// Sets or clears flags. Walkability cannot be granted to an occupied tile.
    pub fn set_flag(&mut self, flag: TileFlags, value: bool) {
        let mut flag = flag;
        if value && matches!(self.class, TileClass::Sprite { .. }) {
            flag.remove(TileFlags::WALKABLE);
        }
        self.flags.set(flag, value);
    }

    /// Clamped to 0..=15.
    pub fn set_light_level(&mut self, level: u8) {
        self.light_level = level.min(Self::MAX_LIGHT_LEVEL);
    }
}

/// Flat JSON form of [`TileRecord`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct TileRecordRepr {
    tile_id: u8,
    x: u8,
    y: u8,
    map_x: i32,
    map_y: i32,
    tileset_id: u8,
    kind: TileKind,
    is_walkable: bool,
    ledge_direction: Option<Direction>,
    movement_modifier: f32,
    is_encounter_tile: bool,
    warp_destination_map: Option<u8>,
    warp_destination_x: Option<i32>,
    warp_destination_y: Option<i32>,
    is_animated: bool,
    light_level: u8,
    has_sign: bool,
    has_bookshelf: bool,
    strength_boulder: bool,
    cuttable_tree: bool,
    pc_accessible: bool,
    trainer_sight_line: bool,
    trainer_id: Option<u8>,
    hidden_item_id: Option<u8>,
    requires_itemfinder: bool,
    safari_zone_steps: bool,
    game_corner_tile: bool,
    is_fly_destination: bool,
    has_footstep_sound: bool,
    sprite_priority: u8,
    background_priority: u8,
    elevation_pair: Option<u8>,
    sprite_occupancy: u8,
    blocks_light: bool,
    water_current_direction: Option<Direction>,
}

#[cfg(feature = "serde")]
impl From<TileRecord> for TileRecordRepr {
    fn from(record: TileRecord) -> Self {
        let warp = record.warp_destination();
        let flag = |f: TileFlags| record.flags.contains(f);
        Self {
            tile_id: record.tile_id,
            x: record.position.x(),
            y: record.position.y(),
            map_x: record.map_position.x,
            map_y: record.map_position.y,
            tileset_id: record.tileset_id,
            kind: record.kind(),
            is_walkable: flag(TileFlags::WALKABLE),
            ledge_direction: record.ledge_direction(),
            movement_modifier: record.movement_modifier,
            is_encounter_tile: flag(TileFlags::ENCOUNTER),
            warp_destination_map: warp.map(|w| w.map),
            warp_destination_x: warp.map(|w| w.x),
            warp_destination_y: warp.map(|w| w.y),
            is_animated: flag(TileFlags::ANIMATED),
            light_level: record.light_level,
            has_sign: flag(TileFlags::SIGN),
            has_bookshelf: flag(TileFlags::BOOKSHELF),
            strength_boulder: flag(TileFlags::STRENGTH_BOULDER),
            cuttable_tree: flag(TileFlags::CUTTABLE_TREE),
            pc_accessible: flag(TileFlags::PC_ACCESSIBLE),
            trainer_sight_line: flag(TileFlags::TRAINER_SIGHT_LINE),
            trainer_id: record.trainer_id,
            hidden_item_id: record.hidden_item_id,
            requires_itemfinder: flag(TileFlags::REQUIRES_ITEMFINDER),
            safari_zone_steps: flag(TileFlags::SAFARI_ZONE),
            game_corner_tile: flag(TileFlags::GAME_CORNER),
            is_fly_destination: flag(TileFlags::FLY_DESTINATION),
            has_footstep_sound: flag(TileFlags::FOOTSTEP_SOUND),
            sprite_priority: record.sprite_priority,
            background_priority: record.background_priority,
            elevation_pair: record.elevation_pair,
            sprite_occupancy: record.sprite_occupancy(),
            blocks_light: flag(TileFlags::BLOCKS_LIGHT),
            water_current_direction: record.water_current_direction,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<TileRecordRepr> for TileRecord {
    type Error = RecordError;

    fn try_from(repr: TileRecordRepr) -> Result<Self, Self::Error> {
        let kind = repr.kind;
        let warp = match (
            repr.warp_destination_map,
            repr.warp_destination_x,
            repr.warp_destination_y,
        ) {
            (Some(map), Some(x), Some(y)) => Some(WarpDestination { map, x, y }),
            (None, None, None) => None,
            _ => return Err(RecordError::WarpMismatch { kind }),
        };

        if (kind == TileKind::Ledge) != repr.ledge_direction.is_some() {
            return Err(RecordError::LedgeMismatch { kind });
        }
        if (kind == TileKind::Warp) != warp.is_some() {
            return Err(RecordError::WarpMismatch { kind });
        }
        let slot = repr.sprite_occupancy;
        if (kind == TileKind::Npc) != (slot != 0) || (slot != 0 && repr.is_walkable) {
            return Err(RecordError::SpriteMismatch { kind, slot });
        }
        if repr.light_level > Self::MAX_LIGHT_LEVEL {
            return Err(RecordError::LightLevel(repr.light_level));
        }
        let position = ScreenPos::new(repr.x, repr.y).ok_or(RecordError::OffScreen {
            x: repr.x,
            y: repr.y,
        })?;

        let class = match (repr.ledge_direction, warp) {
            (Some(direction), _) => TileClass::Ledge(direction),
            (_, Some(destination)) => TileClass::Warp(destination),
            _ if slot != 0 => TileClass::Sprite { slot },
            _ => TileClass::Terrain(kind),
        };

        let mut flags = TileFlags::empty();
        for (present, flag) in [
            (repr.is_walkable, TileFlags::WALKABLE),
            (repr.is_encounter_tile, TileFlags::ENCOUNTER),
            (repr.is_animated, TileFlags::ANIMATED),
            (repr.has_sign, TileFlags::SIGN),
            (repr.has_bookshelf, TileFlags::BOOKSHELF),
            (repr.strength_boulder, TileFlags::STRENGTH_BOULDER),
            (repr.cuttable_tree, TileFlags::CUTTABLE_TREE),
            (repr.pc_accessible, TileFlags::PC_ACCESSIBLE),
            (repr.trainer_sight_line, TileFlags::TRAINER_SIGHT_LINE),
            (repr.requires_itemfinder, TileFlags::REQUIRES_ITEMFINDER),
            (repr.safari_zone_steps, TileFlags::SAFARI_ZONE),
            (repr.game_corner_tile, TileFlags::GAME_CORNER),
            (repr.is_fly_destination, TileFlags::FLY_DESTINATION),
            (repr.has_footstep_sound, TileFlags::FOOTSTEP_SOUND),
            (repr.blocks_light, TileFlags::BLOCKS_LIGHT),
        ] {
            flags.set(flag, present);
        }

        Ok(Self {
            tile_id: repr.tile_id,
            position,
            map_position: MapPos::new(repr.map_x, repr.map_y),
            tileset_id: repr.tileset_id,
            class,
            flags,
            light_level: repr.light_level,
            movement_modifier: repr.movement_modifier,
            trainer_id: repr.trainer_id,
            hidden_item_id: repr.hidden_item_id,
            sprite_priority: repr.sprite_priority,
            background_priority: repr.background_priority,
            elevation_pair: repr.elevation_pair,
            water_current_direction: repr.water_current_direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TileRecord {
        let position = ScreenPos::new(4, 5).expect("on screen");
        TileRecord::new(0x2C, position, MapPos::new(2, 3), 0)
    }

    #[test]
    fn new_record_is_blocked_and_lit() {
        let tile = record();
        assert_eq!(tile.kind(), TileKind::Blocked);
        assert!(!tile.is_walkable());
        assert_eq!(tile.light_level(), 15);
        assert_eq!(tile.flags(), TileFlags::empty());
        assert_eq!(tile.sprite_occupancy(), 0);
    }

    #[test]
    fn payload_kinds_cannot_be_set_as_terrain() {
        let mut tile = record();
        tile.set_class(TileClass::Terrain(TileKind::Warp));
        assert_eq!(tile.kind(), TileKind::Unknown);
        assert_eq!(tile.warp_destination(), None);
    }

    #[test]
    fn occupied_tile_stays_unwalkable() {
        let mut tile = record();
        tile.set_flag(TileFlags::WALKABLE, true);
        tile.occupy(3);
        assert_eq!(tile.kind(), TileKind::Npc);
        assert!(!tile.is_walkable());

        tile.set_flag(TileFlags::WALKABLE | TileFlags::ENCOUNTER, true);
        assert!(!tile.is_walkable());
        assert!(tile.is_encounter());

        tile.set_class(TileClass::Ledge(Direction::Down));
        assert_eq!(tile.kind(), TileKind::Npc);
    }

    #[test]
    fn slot_zero_never_occupies() {
        let mut tile = record();
        tile.occupy(0);
        assert_eq!(tile.kind(), TileKind::Blocked);
    }

    #[test]
    fn light_level_is_clamped() {
        let mut tile = record();
        tile.set_light_level(40);
        assert_eq!(tile.light_level(), 15);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_uses_flat_field_names() {
        let mut tile = record();
        tile.set_class(TileClass::Warp(WarpDestination {
            map: 0x25,
            x: 2,
            y: 7,
        }));
        let value = serde_json::to_value(&tile).expect("serialize");
        assert_eq!(value["kind"], "warp");
        assert_eq!(value["warp_destination_map"], 0x25);
        assert_eq!(value["ledge_direction"], serde_json::Value::Null);
        assert_eq!(value["x"], 4);
        assert_eq!(value["map_y"], 3);
        assert_eq!(value["is_walkable"], false);
        assert!(value.get("flags").is_none());

        let back: TileRecord = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, tile);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_with_broken_invariants_is_rejected() {
        let mut value = serde_json::to_value(record()).expect("serialize");
        value["kind"] = "ledge".into();
        assert!(serde_json::from_value::<TileRecord>(value.clone()).is_err());

        value["kind"] = "blocked".into();
        value["warp_destination_map"] = 3.into();
        assert!(serde_json::from_value::<TileRecord>(value.clone()).is_err());

        value["warp_destination_map"] = serde_json::Value::Null;
        value["sprite_occupancy"] = 2.into();
        assert!(serde_json::from_value::<TileRecord>(value.clone()).is_err());

        value["sprite_occupancy"] = 0.into();
        value["light_level"] = 16.into();
        assert!(serde_json::from_value::<TileRecord>(value).is_err());
    }
}
