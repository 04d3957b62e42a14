use std::collections::BTreeMap;

use crate::config::DecoderConfig;
use crate::decode::CoordinateMapper;

use super::{Direction, DirectionsAvailable, ScreenPos, TileFlags, TileKind, TileRecord};

/// Whether the map was settled when the screen was captured.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Stability {
    #[default]
    Stable,
    /// A map load was in progress; no tiles were decoded.
    Transitioning,
}

/// The decoded 20×18 screen.
///
/// Empty (no rows) when captured during a map transition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMatrix {
    pub width: u8,
    pub height: u8,
    pub current_map: u8,
    pub player_x: u8,
    pub player_y: u8,
    pub stability: Stability,
    tiles: Vec<Vec<TileRecord>>,
}

impl TileMatrix {
    /// A fully decoded screen. `tiles` must hold 360 records in row-major order.
    pub fn stable(current_map: u8, player_x: u8, player_y: u8, tiles: Vec<TileRecord>) -> Self {
        let rows = tiles
            .chunks(DecoderConfig::SCREEN_WIDTH)
            .map(<[TileRecord]>::to_vec)
            .collect();
        Self {
            width: DecoderConfig::SCREEN_WIDTH as u8,
            height: DecoderConfig::SCREEN_HEIGHT as u8,
            current_map,
            player_x,
            player_y,
            stability: Stability::Stable,
            tiles: rows,
        }
    }

    pub fn transitioning(current_map: u8, player_x: u8, player_y: u8) -> Self {
        Self {
            width: DecoderConfig::SCREEN_WIDTH as u8,
            height: DecoderConfig::SCREEN_HEIGHT as u8,
            current_map,
            player_x,
            player_y,
            stability: Stability::Transitioning,
            tiles: Vec::new(),
        }
    }

    pub fn is_stable(&self) -> bool {
        self.stability == Stability::Stable
    }

    pub fn rows(&self) -> &[Vec<TileRecord>] {
        &self.tiles
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.iter().map(Vec::len).sum()
    }

    pub fn get(&self, position: ScreenPos) -> Option<&TileRecord> {
        self.tiles
            .get(usize::from(position.y()))?
            .get(usize::from(position.x()))
    }

    /// Every record in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &TileRecord> {
        self.tiles.iter().flatten()
    }

    pub fn walkable_tiles(&self) -> impl Iterator<Item = &TileRecord> {
        self.iter().filter(|tile| tile.is_walkable())
    }

    pub fn tiles_of_kind(&self, kind: TileKind) -> impl Iterator<Item = &TileRecord> {
        self.iter().filter(move |tile| tile.kind() == kind)
    }

    pub fn walkability_matrix(&self) -> Vec<Vec<bool>> {
        self.project(TileRecord::is_walkable)
    }

    pub fn encounter_matrix(&self) -> Vec<Vec<bool>> {
        self.project(TileRecord::is_encounter)
    }

    pub fn tile_id_matrix(&self) -> Vec<Vec<u8>> {
        self.project(|tile| tile.tile_id)
    }

    fn project<T>(&self, f: impl Fn(&TileRecord) -> T) -> Vec<Vec<T>> {
        self.tiles
            .iter()
            .map(|row| row.iter().map(&f).collect())
            .collect()
    }

    /// Tiles of `kind` within `max_distance` of the player, nearest first.
    pub fn nearest_of_kind(&self, kind: TileKind, max_distance: u32) -> Vec<&TileRecord> {
        let anchor = ScreenPos::PLAYER_ANCHOR;
        let mut found: Vec<_> = self
            .tiles_of_kind(kind)
            .map(|tile| (tile.position.manhattan_distance(anchor), tile))
            .filter(|(distance, _)| *distance <= max_distance)
            .collect();
        found.sort_by_key(|(distance, tile)| (*distance, tile.position));
        found.into_iter().map(|(_, tile)| tile).collect()
    }

    /// Walkability of the square next to the player in each direction.
    ///
    /// A neighbor that falls off the screen, or a matrix without tiles, reads
    /// as unavailable.
    pub fn directions_available(&self) -> DirectionsAvailable {
        let mut available = DirectionsAvailable::default();
        for direction in Direction::ALL {
            let walkable = CoordinateMapper::neighbor(ScreenPos::PLAYER_ANCHOR, direction)
                .and_then(|neighbor| self.get(neighbor))
                .is_some_and(TileRecord::is_walkable);
            available.set(direction, walkable);
        }
        available
    }

    /// Groups tiles into the categories the decision loop queries most.
    pub fn index(&self) -> TileIndex {
        let anchor = ScreenPos::PLAYER_ANCHOR;
        let mut index = TileIndex::default();
        for tile in self.iter() {
            let entry = IndexedTile {
                x: tile.position.x(),
                y: tile.position.y(),
                distance: tile.position.manhattan_distance(anchor),
            };
            *index.kind_counts.entry(tile.kind()).or_default() += 1;

            if tile.is_walkable() {
                index.walkable.push(entry);
            } else {
                index.blocked.push(entry);
            }
            if tile.is_encounter() {
                index.encounters.push(entry);
            }
            if tile.warp_destination().is_some() {
                index.warps.push(entry);
            }
            if tile.is_interactive() {
                index.interactive.push(entry);
            }
            if tile.ledge_direction().is_some()
                || tile.has(TileFlags::ANIMATED)
                || tile.elevation_pair.is_some()
            {
                index.special.push(entry);
            }
        }
        index.walkable.sort_by_key(|entry| entry.distance);
        index.blocked.sort_by_key(|entry| entry.distance);
        index
    }
}

/// A tile position plus its Manhattan distance from the player anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexedTile {
    pub x: u8,
    pub y: u8,
    pub distance: u32,
}

/// Categorized views over a [`TileMatrix`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileIndex {
    /// Nearest first.
    pub walkable: Vec<IndexedTile>,
    /// Nearest first.
    pub blocked: Vec<IndexedTile>,
    pub encounters: Vec<IndexedTile>,
    pub warps: Vec<IndexedTile>,
    pub interactive: Vec<IndexedTile>,
    /// Ledges, animated tiles and elevation-pair tiles.
    pub special: Vec<IndexedTile>,
    pub kind_counts: BTreeMap<TileKind, u32>,
}
