//! Map-keyed tables: warp arrivals, hidden items, fly points and zones.
//!
//! Warp arrivals are the positions of each map's own warp entries; a warp
//! that targets `(map, index)` drops the player on that square. Only the
//! starting region is listed. Larger tables are loaded from RON.

use gamestate_core::{Direction, MapPos, MapTables};

pub mod id {
    pub const PALLET_TOWN: u8 = 0x00;
    pub const VIRIDIAN_CITY: u8 = 0x01;
    pub const PEWTER_CITY: u8 = 0x02;
    pub const CERULEAN_CITY: u8 = 0x03;
    pub const LAVENDER_TOWN: u8 = 0x04;
    pub const VERMILION_CITY: u8 = 0x05;
    pub const CELADON_CITY: u8 = 0x06;
    pub const FUCHSIA_CITY: u8 = 0x07;
    pub const CINNABAR_ISLAND: u8 = 0x08;
    pub const INDIGO_PLATEAU: u8 = 0x09;
    pub const SAFFRON_CITY: u8 = 0x0A;
    pub const REDS_HOUSE_1F: u8 = 0x25;
    pub const REDS_HOUSE_2F: u8 = 0x26;
    pub const BLUES_HOUSE: u8 = 0x27;
    pub const OAKS_LAB: u8 = 0x28;
    pub const VIRIDIAN_POKECENTER: u8 = 0x29;
    pub const VIRIDIAN_MART: u8 = 0x2A;
    pub const VIRIDIAN_SCHOOL_HOUSE: u8 = 0x2B;
    pub const VIRIDIAN_NICKNAME_HOUSE: u8 = 0x2C;
    pub const VIRIDIAN_GYM: u8 = 0x2D;
    pub const ROCK_TUNNEL_1F: u8 = 0x52;
    pub const GAME_CORNER: u8 = 0x87;
    pub const SEAFOAM_ISLANDS_B3F: u8 = 0xA1;
    pub const SEAFOAM_ISLANDS_B4F: u8 = 0xA2;
    pub const SAFARI_ZONE_EAST: u8 = 0xD9;
    pub const SAFARI_ZONE_NORTH: u8 = 0xDA;
    pub const SAFARI_ZONE_WEST: u8 = 0xDB;
    pub const SAFARI_ZONE_CENTER: u8 = 0xDC;
    pub const ROCK_TUNNEL_B1F: u8 = 0xE8;
}

mod item {
    pub const RARE_CANDY: u8 = 0x28;
    pub const POTION: u8 = 0x14;
}

/// `(map, [warp squares in index order])`.
const WARPS: &[(u8, &[(i32, i32)])] = &[
    (id::PALLET_TOWN, &[(5, 5), (13, 5), (12, 11)]),
    (id::VIRIDIAN_CITY, &[(23, 25), (29, 19), (21, 15), (21, 9), (32, 7)]),
    (id::REDS_HOUSE_1F, &[(2, 7), (3, 7), (7, 1)]),
    (id::REDS_HOUSE_2F, &[(7, 1)]),
    (id::BLUES_HOUSE, &[(2, 7), (3, 7)]),
    (id::OAKS_LAB, &[(4, 11), (5, 11)]),
    (id::VIRIDIAN_POKECENTER, &[(3, 7), (4, 7)]),
    (id::VIRIDIAN_MART, &[(3, 7), (4, 7)]),
    (id::VIRIDIAN_SCHOOL_HOUSE, &[(2, 7), (3, 7)]),
    (id::VIRIDIAN_NICKNAME_HOUSE, &[(2, 7), (3, 7)]),
    (id::VIRIDIAN_GYM, &[(16, 17), (17, 17)]),
];

const FLY_POINTS: &[(u8, i32, i32)] = &[
    (id::PALLET_TOWN, 5, 6),
    (id::VIRIDIAN_CITY, 23, 26),
    (id::PEWTER_CITY, 13, 26),
    (id::CERULEAN_CITY, 19, 18),
    (id::LAVENDER_TOWN, 3, 6),
    (id::VERMILION_CITY, 11, 4),
    (id::CELADON_CITY, 41, 10),
    (id::FUCHSIA_CITY, 19, 28),
    (id::CINNABAR_ISLAND, 11, 12),
    (id::INDIGO_PLATEAU, 9, 6),
    (id::SAFFRON_CITY, 9, 30),
];

const HIDDEN_ITEMS: &[(u8, i32, i32, u8)] = &[
    (id::VIRIDIAN_CITY, 14, 4, item::POTION),
    (id::CERULEAN_CITY, 15, 8, item::RARE_CANDY),
];

pub fn map_tables() -> MapTables {
    let mut tables = MapTables::default();

    for &(map, squares) in WARPS {
        for (index, &(x, y)) in (0u8..).zip(squares) {
            tables.warp_arrivals.insert((map, index), MapPos::new(x, y));
        }
    }
    for &(map, x, y) in FLY_POINTS {
        tables.fly_points.insert(map, MapPos::new(x, y));
    }
    for &(map, x, y, item) in HIDDEN_ITEMS {
        tables.hidden_items.insert((map, x, y), item);
    }

    tables.safari_maps.extend([
        id::SAFARI_ZONE_EAST,
        id::SAFARI_ZONE_NORTH,
        id::SAFARI_ZONE_WEST,
        id::SAFARI_ZONE_CENTER,
    ]);
    tables.game_corner_maps.insert(id::GAME_CORNER);
    tables
        .dark_maps
        .extend([id::ROCK_TUNNEL_1F, id::ROCK_TUNNEL_B1F]);
    tables.water_currents.extend([
        (id::SEAFOAM_ISLANDS_B3F, Direction::Down),
        (id::SEAFOAM_ISLANDS_B4F, Direction::Down),
    ]);
    tables
}
