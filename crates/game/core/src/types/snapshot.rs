use chrono::{DateTime, Utc};

use super::{DirectionsAvailable, Stability, TileIndex, TileMatrix};

/// Kind of battle in progress.
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
pub enum BattleKind {
    #[default]
    None,
    Wild,
    Trainer,
    /// The battle just ended in a loss.
    Lost,
}

impl BattleKind {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            1 => BattleKind::Wild,
            2 => BattleKind::Trainer,
            0xFF => BattleKind::Lost,
            _ => BattleKind::None,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, BattleKind::Wild | BattleKind::Trainer)
    }
}

/// Current and maximum hit points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitPoints {
    pub current: u16,
    pub max: u16,
}

impl HitPoints {
    pub fn is_fainted(&self) -> bool {
        self.current == 0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartyMember {
    pub level: u8,
    pub hp: HitPoints,
}

/// HP of both active battlers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub player_mon: HitPoints,
    pub enemy_mon: HitPoints,
    pub enemy_level: u8,
}

/// Non-fatal conditions noticed while decoding.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum DecodeWarning {
    /// The tileset id had no catalog entry; every tile was classified blocked.
    UnknownTileset,
}

/// Scalar fields read straight from memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarState {
    pub player_name: String,
    pub current_map: u8,
    pub player_x: u8,
    pub player_y: u8,
    pub party_count: u8,
    pub party: Vec<PartyMember>,
    pub badges_obtained: u8,
    /// Raw badge bit field, one bit per badge.
    pub badges_binary: u8,
    pub is_in_battle: bool,
    pub battle_kind: BattleKind,
    pub battle: Option<BattleState>,
    pub current_tileset: u8,
    pub map_loading_status: u8,
}

/// Everything handed to the decision loop for one step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStateSnapshot {
    pub step_counter: u64,
    pub timestamp: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub state: ScalarState,
    pub stability: Stability,
    pub warnings: Vec<DecodeWarning>,
    pub directions_available: DirectionsAvailable,
    pub tile_index: TileIndex,
    pub tile_matrix: TileMatrix,
}

impl GameStateSnapshot {
    pub fn is_stable(&self) -> bool {
        self.stability == Stability::Stable
    }

    pub fn has_warning(&self, warning: DecodeWarning) -> bool {
        self.warnings.contains(&warning)
    }
}
