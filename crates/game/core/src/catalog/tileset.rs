use std::collections::BTreeMap;
use std::fmt;

use crate::types::Direction;

/// Set of tile ids with constant-time membership.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<u8>", into = "Vec<u8>"))]
pub struct TileIdSet([u64; 4]);

impl TileIdSet {
    pub const EMPTY: Self = Self([0; 4]);

    pub const fn from_ids(ids: &[u8]) -> Self {
        let mut words = [0u64; 4];
        let mut i = 0;
        while i < ids.len() {
            let id = ids[i] as usize;
            words[id / 64] |= 1 << (id % 64);
            i += 1;
        }
        Self(words)
    }

    pub const fn contains(&self, id: u8) -> bool {
        let id = id as usize;
        self.0[id / 64] & (1 << (id % 64)) != 0
    }

    pub fn insert(&mut self, id: u8) {
        let id = usize::from(id);
        self.0[id / 64] |= 1 << (id % 64);
    }

    pub fn len(&self) -> usize {
        self.0.iter().map(|word| word.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|word| *word == 0)
    }

    /// Ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|id| self.contains(*id))
    }
}

impl FromIterator<u8> for TileIdSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl From<Vec<u8>> for TileIdSet {
    fn from(ids: Vec<u8>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<TileIdSet> for Vec<u8> {
    fn from(set: TileIdSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Debug for TileIdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|id| format!("{id:#04X}")))
            .finish()
    }
}

/// Static collision and feature tables for one tileset.
///
/// Every id set is independent; a tile may be both walkable and a door, or
/// both water and animated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TilesetDefinition {
    pub id: u8,
    pub name: String,
    pub walkable: TileIdSet,
    pub doors: TileIdSet,
    pub water: TileIdSet,
    /// Tiles that trigger wild encounters (tall grass).
    pub encounters: TileIdSet,
    /// Every walkable tile triggers encounters (caves).
    pub encounters_on_walkable: bool,
    /// Cuttable trees.
    pub trees: TileIdSet,
    pub boulders: TileIdSet,
    pub signs: TileIdSet,
    pub bookshelves: TileIdSet,
    /// PCs and other usable terminals.
    pub terminals: TileIdSet,
    pub animated: TileIdSet,
    /// One-way ledges and the direction they can be hopped.
    pub ledges: BTreeMap<u8, Direction>,
    /// Tile pairs the player cannot step between (elevation changes).
    pub elevation_pairs: Vec<(u8, u8)>,
    /// Ambient light, 0..=15.
    pub light_level: u8,
    #[cfg_attr(feature = "serde", serde(skip))]
    fallback: bool,
}

impl TilesetDefinition {
    pub const FULL_LIGHT: u8 = 15;

    pub fn new(id: u8, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Conservative stand-in for an unknown tileset: nothing is walkable and
    /// no tile has any feature.
    pub fn blocked_fallback(id: u8) -> Self {
        Self {
            fallback: true,
            ..Self::new(id, "unknown")
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn ledge_direction(&self, tile_id: u8) -> Option<Direction> {
        self.ledges.get(&tile_id).copied()
    }

    /// The other half of the first elevation pair containing `tile_id`.
    pub fn elevation_partner(&self, tile_id: u8) -> Option<u8> {
        self.elevation_pairs.iter().find_map(|&(a, b)| {
            if a == tile_id {
                Some(b)
            } else if b == tile_id {
                Some(a)
            } else {
                None
            }
        })
    }

    pub fn with_walkable(mut self, ids: &[u8]) -> Self {
        self.walkable = TileIdSet::from_ids(ids);
        self
    }

    pub fn with_doors(mut self, ids: &[u8]) -> Self {
        self.doors = TileIdSet::from_ids(ids);
        self
    }

    pub fn with_water(mut self, ids: &[u8]) -> Self {
        self.water = TileIdSet::from_ids(ids);
        self
    }

    pub fn with_encounters(mut self, ids: &[u8]) -> Self {
        self.encounters = TileIdSet::from_ids(ids);
        self
    }

    pub fn with_trees(mut self, ids: &[u8]) -> Self {
        self.trees = TileIdSet::from_ids(ids);
        self
    }

    pub fn with_boulders(mut self, ids: &[u8]) -> Self {
        self.boulders = TileIdSet::from_ids(ids);
        self
    }

    pub fn with_signs(mut self, ids: &[u8]) -> Self {
        self.signs = TileIdSet::from_ids(ids);
        self
    }

    pub fn with_bookshelves(mut self, ids: &[u8]) -> Self {
        self.bookshelves = TileIdSet::from_ids(ids);
        self
    }

    pub fn with_terminals(mut self, ids: &[u8]) -> Self {
        self.terminals = TileIdSet::from_ids(ids);
        self
    }

    pub fn with_animated(mut self, ids: &[u8]) -> Self {
        self.animated = TileIdSet::from_ids(ids);
        self
    }

    pub fn with_ledges(mut self, ledges: &[(u8, Direction)]) -> Self {
        self.ledges = ledges.iter().copied().collect();
        self
    }

    pub fn with_elevation_pairs(mut self, pairs: &[(u8, u8)]) -> Self {
        self.elevation_pairs = pairs.to_vec();
        self
    }

    pub fn with_light_level(mut self, level: u8) -> Self {
        self.light_level = level;
        self
    }

    pub fn with_encounters_on_walkable(mut self) -> Self {
        self.encounters_on_walkable = true;
        self
    }
}

/// Fully lit, with every tile blocked.
impl Default for TilesetDefinition {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            walkable: TileIdSet::EMPTY,
            doors: TileIdSet::EMPTY,
            water: TileIdSet::EMPTY,
            encounters: TileIdSet::EMPTY,
            encounters_on_walkable: false,
            trees: TileIdSet::EMPTY,
            boulders: TileIdSet::EMPTY,
            signs: TileIdSet::EMPTY,
            bookshelves: TileIdSet::EMPTY,
            terminals: TileIdSet::EMPTY,
            animated: TileIdSet::EMPTY,
            ledges: BTreeMap::new(),
            elevation_pairs: Vec::new(),
            light_level: Self::FULL_LIGHT,
            fallback: false,
        }
    }
}
