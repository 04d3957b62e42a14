//! Decoding pipeline from a memory view to a [`crate::GameStateSnapshot`].
//!
//! Each decode cycle captures one [`FrameView`], resolves the tileset, and
//! classifies every screen tile through [`TileDecoder`]. The scalar state and
//! the tile matrix are paired by [`SnapshotAssembler`].
mod assembler;
mod collision;
mod coords;
pub mod detectors;
mod error;
mod frame;
mod screen;
mod sprites;
mod state;
mod tile;

pub use assembler::SnapshotAssembler;
pub use collision::{Classification, CollisionResolver};
pub use coords::CoordinateMapper;
pub use detectors::DetectorInput;
pub use error::{DecodeError, DetectorError};
pub use frame::{FrameView, TileBuffer, WarpEntry};
pub use screen::{ScreenSnapshotBuilder, read_stability};
pub use sprites::{SightMark, SpriteInfo, SpriteOverlay, SpriteTable, TrainerInfo};
pub use state::{GameStateReader, decode_text};
pub use tile::{SpriteMap, TileDecoder};
