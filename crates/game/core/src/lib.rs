//! Typed game-state decoding for Pokemon Red memory images.
//!
//! `gamestate-core` turns one point-in-time view of emulator work RAM into a
//! [`GameStateSnapshot`]: the player's scalar state plus a fully classified
//! 20×18 screen of [`TileRecord`]s. All decoding is synchronous and pure; the
//! memory source is abstracted behind [`MemoryView`] and tileset knowledge is
//! supplied through an immutable [`TilesetCatalog`].
pub mod catalog;
pub mod config;
pub mod decode;
pub mod error;
pub mod input;
pub mod memory;
pub mod types;

pub use catalog::{
    CatalogError, MapTables, ResolvedTileset, TileIdSet, TilesetCatalog, TilesetDefinition,
};
pub use config::DecoderConfig;
pub use decode::{
    CollisionResolver, CoordinateMapper, DecodeError, DetectorError, FrameView, GameStateReader,
    ScreenSnapshotBuilder, SnapshotAssembler, SpriteOverlay, TileDecoder,
};
pub use error::{DecoderError, ErrorSeverity};
pub use input::{Button, ButtonSequence, InputError};
pub use memory::{MemoryError, MemoryView, RamImage};
pub use types::{
    BattleKind, BattleState, DecodeWarning, Direction, DirectionsAvailable, GameStateSnapshot,
    HitPoints, IndexedTile, MapDimensions, MapPos, PartyMember, ScalarState, ScreenPos,
    Stability, TileClass, TileFlags, TileIndex, TileKind, TileMatrix, TileRecord,
    WarpDestination,
};
