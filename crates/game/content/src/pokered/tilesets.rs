//! Collision and feature tables for the 24 overworld tilesets.

use gamestate_core::{Direction, TilesetDefinition};

/// Tileset ids as stored at the current-tileset address.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::FromRepr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum TilesetId {
    Overworld = 0,
    RedsHouse1 = 1,
    Mart = 2,
    Forest = 3,
    RedsHouse2 = 4,
    Dojo = 5,
    Pokecenter = 6,
    Gym = 7,
    House = 8,
    ForestGate = 9,
    Museum = 10,
    Underground = 11,
    Gate = 12,
    Ship = 13,
    ShipPort = 14,
    Cemetery = 15,
    Interior = 16,
    Cavern = 17,
    Lobby = 18,
    Mansion = 19,
    Lab = 20,
    Club = 21,
    Facility = 22,
    Plateau = 23,
}

impl TilesetId {
    pub const COUNT: u8 = 24;

    pub fn id(self) -> u8 {
        self as u8
    }
}

// ===== shared collision sets =====

const REDS_HOUSE_WALKABLE: &[u8] = &[0x01, 0x02, 0x03, 0x11, 0x12, 0x13, 0x14, 0x1C, 0x1A];
const SHOP_WALKABLE: &[u8] = &[0x11, 0x1A, 0x1C, 0x3C, 0x5E];
const GYM_WALKABLE: &[u8] = &[
    0x11, 0x16, 0x19, 0x2B, 0x3C, 0x3D, 0x3F, 0x4A, 0x4C, 0x4D, 0x03,
];
const GATE_WALKABLE: &[u8] = &[0x01, 0x12, 0x14, 0x1A, 0x1C, 0x37, 0x38, 0x3B, 0x3C, 0x5E];

/// Indoor tilesets lit by lamps rather than daylight.
const INDOOR_LIGHT: u8 = 12;
const CAVE_LIGHT: u8 = 8;

fn base(id: TilesetId) -> TilesetDefinition {
    TilesetDefinition::new(id.id(), id.as_ref())
}

fn overworld() -> TilesetDefinition {
    base(TilesetId::Overworld)
        .with_walkable(&[
            0x00, 0x10, 0x1B, 0x20, 0x21, 0x23, 0x2C, 0x2D, 0x2E, 0x30, 0x31, 0x33, 0x39, 0x3C,
            0x3E, 0x52, 0x54, 0x58, 0x5B,
        ])
        .with_doors(&[0x1B, 0x58])
        .with_water(&[0x14, 0x32])
        .with_encounters(&[0x52, 0x53])
        .with_trees(&[0x3D, 0x3F])
        .with_boulders(&[0x15, 0x55])
        .with_signs(&[0x5A, 0x5D])
        .with_animated(&[0x03, 0x14, 0x32, 0x52, 0x53])
        .with_ledges(&[
            (0x36, Direction::Down),
            (0x37, Direction::Down),
            (0x27, Direction::Left),
            (0x0D, Direction::Right),
            (0x1D, Direction::Right),
        ])
}

fn forest() -> TilesetDefinition {
    base(TilesetId::Forest)
        .with_walkable(&[
            0x1E, 0x20, 0x2E, 0x30, 0x34, 0x37, 0x39, 0x3A, 0x40, 0x51, 0x52, 0x5A, 0x5C, 0x5E,
            0x5F,
        ])
        .with_doors(&[0x3A])
        .with_encounters(&[0x20])
        .with_trees(&[0x03, 0x04])
        .with_elevation_pairs(&[
            (0x30, 0x2E),
            (0x52, 0x2E),
            (0x55, 0x2E),
            (0x56, 0x2E),
            (0x20, 0x2E),
            (0x5E, 0x2E),
            (0x5F, 0x2E),
            (0x14, 0x2E),
            (0x48, 0x2E),
        ])
}

fn cavern() -> TilesetDefinition {
    base(TilesetId::Cavern)
        .with_walkable(&[0x05, 0x15, 0x18, 0x1A, 0x20, 0x21, 0x22, 0x2A, 0x2D, 0x30])
        .with_boulders(&[0x18, 0x19])
        .with_encounters_on_walkable()
        .with_elevation_pairs(&[
            (0x20, 0x05),
            (0x41, 0x05),
            (0x2A, 0x05),
            (0x05, 0x21),
            (0x14, 0x05),
        ])
        .with_light_level(CAVE_LIGHT)
}

/// All 24 tilesets.
pub fn tilesets() -> Vec<TilesetDefinition> {
    vec![
        overworld(),
        base(TilesetId::RedsHouse1)
            .with_walkable(REDS_HOUSE_WALKABLE)
            .with_bookshelves(&[0x48, 0x49])
            .with_terminals(&[0x50, 0x51])
            .with_light_level(INDOOR_LIGHT),
        base(TilesetId::Mart)
            .with_walkable(SHOP_WALKABLE)
            .with_doors(&[0x5E])
            .with_light_level(INDOOR_LIGHT),
        forest(),
        base(TilesetId::RedsHouse2)
            .with_walkable(REDS_HOUSE_WALKABLE)
            .with_light_level(INDOOR_LIGHT),
        base(TilesetId::Dojo).with_walkable(GYM_WALKABLE),
        base(TilesetId::Pokecenter)
            .with_walkable(SHOP_WALKABLE)
            .with_terminals(&[0x52, 0x53])
            .with_light_level(INDOOR_LIGHT),
        base(TilesetId::Gym).with_walkable(GYM_WALKABLE),
        base(TilesetId::House)
            .with_walkable(&[0x01, 0x12, 0x14, 0x28, 0x32, 0x37, 0x44, 0x54, 0x5C])
            .with_doors(&[0x54]),
        base(TilesetId::ForestGate)
            .with_walkable(GATE_WALKABLE)
            .with_doors(&[0x3B]),
        base(TilesetId::Museum)
            .with_walkable(GATE_WALKABLE)
            .with_doors(&[0x3B]),
        base(TilesetId::Underground).with_walkable(&[0x0B, 0x0C, 0x13, 0x15, 0x18]),
        base(TilesetId::Gate)
            .with_walkable(GATE_WALKABLE)
            .with_doors(&[0x3B]),
        base(TilesetId::Ship)
            .with_walkable(&[0x04, 0x0D, 0x17, 0x1D, 0x1E, 0x23, 0x34, 0x37, 0x39, 0x4A])
            .with_doors(&[0x1E]),
        base(TilesetId::ShipPort).with_walkable(&[0x0A, 0x1A, 0x32, 0x3B]),
        base(TilesetId::Cemetery).with_walkable(&[0x01, 0x10, 0x13, 0x1B, 0x22, 0x42, 0x52]),
        base(TilesetId::Interior)
            .with_walkable(&[0x04, 0x0F, 0x15, 0x1F, 0x3B, 0x45, 0x47, 0x55, 0x56]),
        cavern(),
        base(TilesetId::Lobby)
            .with_walkable(&[0x14, 0x17, 0x1A, 0x1C, 0x20, 0x38, 0x45])
            .with_doors(&[0x1C, 0x38, 0x1A]),
        base(TilesetId::Mansion)
            .with_walkable(&[0x01, 0x05, 0x11, 0x12, 0x14, 0x1A, 0x1C, 0x2C, 0x53])
            .with_doors(&[0x1A, 0x1C, 0x53])
            .with_bookshelves(&[0x4A, 0x4B]),
        base(TilesetId::Lab)
            .with_walkable(&[0x0C, 0x26, 0x16, 0x1E, 0x34, 0x37])
            .with_doors(&[0x34]),
        base(TilesetId::Club).with_walkable(&[
            0x0F, 0x1A, 0x1F, 0x26, 0x28, 0x29, 0x2C, 0x2D, 0x2E, 0x2F, 0x41,
        ]),
        base(TilesetId::Facility)
            .with_walkable(&[
                0x01, 0x10, 0x11, 0x13, 0x1B, 0x20, 0x21, 0x22, 0x30, 0x31, 0x32, 0x42, 0x43,
                0x48, 0x52, 0x55, 0x58, 0x5E,
            ])
            .with_doors(&[0x43, 0x58, 0x1B]),
        base(TilesetId::Plateau)
            .with_walkable(&[0x1B, 0x23, 0x2C, 0x2D, 0x3B, 0x45])
            .with_doors(&[0x3B, 0x1B])
            .with_encounters(&[0x45]),
    ]
}
