//! Typed world model produced by the decoder.
mod direction;
mod matrix;
mod position;
mod snapshot;
mod tile;

pub use direction::{Direction, DirectionsAvailable};
pub use matrix::{IndexedTile, Stability, TileIndex, TileMatrix};
pub use position::{MapDimensions, MapPos, ScreenPos};
pub use snapshot::{
    BattleKind, BattleState, DecodeWarning, GameStateSnapshot, HitPoints, PartyMember,
    ScalarState,
};
pub use tile::{RecordError, TileClass, TileFlags, TileKind, TileRecord, WarpDestination};
