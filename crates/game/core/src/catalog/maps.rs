use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Direction, MapPos};

/// Map-keyed lookup tables consulted by the auxiliary detectors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapTables {
    /// `(map, warp index)` → square where the player arrives.
    pub warp_arrivals: BTreeMap<(u8, u8), MapPos>,
    /// `(map, x, y)` → hidden item id.
    pub hidden_items: BTreeMap<(u8, i32, i32), u8>,
    /// Town map → square where Fly lands.
    pub fly_points: BTreeMap<u8, MapPos>,
    pub safari_maps: BTreeSet<u8>,
    pub game_corner_maps: BTreeSet<u8>,
    /// Maps that stay dark until Flash is used.
    pub dark_maps: BTreeSet<u8>,
    /// Maps whose water pushes the player in a fixed direction.
    pub water_currents: BTreeMap<u8, Direction>,
}

impl MapTables {
    pub fn warp_arrival(&self, map: u8, warp_index: u8) -> Option<MapPos> {
        self.warp_arrivals.get(&(map, warp_index)).copied()
    }

    pub fn hidden_item(&self, map: u8, position: MapPos) -> Option<u8> {
        self.hidden_items.get(&(map, position.x, position.y)).copied()
    }

    pub fn is_fly_point(&self, map: u8, position: MapPos) -> bool {
        self.fly_points.get(&map) == Some(&position)
    }

    pub fn is_safari(&self, map: u8) -> bool {
        self.safari_maps.contains(&map)
    }

    pub fn is_game_corner(&self, map: u8) -> bool {
        self.game_corner_maps.contains(&map)
    }

    pub fn is_dark(&self, map: u8) -> bool {
        self.dark_maps.contains(&map)
    }

    pub fn water_current(&self, map: u8) -> Option<Direction> {
        self.water_currents.get(&map).copied()
    }
}
