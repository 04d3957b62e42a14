//! Screen ↔ map coordinate conversion.
//!
//! The screen is 20×18 tiles of 8×8 pixels. A map square is 2×2 tiles and a
//! block is 2×2 squares. The player's square always covers screen tiles
//! x = 8..=9, y = 8..=9.

use crate::config::DecoderConfig;
use crate::types::{Direction, MapDimensions, MapPos, ScreenPos};

use super::DecodeError;

pub struct CoordinateMapper;

impl CoordinateMapper {
    /// Validates a raw screen coordinate.
    pub fn screen_pos(x: u8, y: u8) -> Result<ScreenPos, DecodeError> {
        ScreenPos::new(x, y).ok_or(DecodeError::InvalidCoordinate { x, y })
    }

    /// Absolute map square shown at screen tile `(x, y)`, given the player's
    /// map square.
    pub fn screen_to_map(x: u8, y: u8, player: MapPos) -> Result<MapPos, DecodeError> {
        let position = Self::screen_pos(x, y)?;
        Ok(Self::map_position(position, player))
    }

    /// Infallible form of [`Self::screen_to_map`] for an already validated position.
    pub fn map_position(position: ScreenPos, player: MapPos) -> MapPos {
        let (origin_x, origin_y) = DecoderConfig::PLAYER_ORIGIN;
        let square = DecoderConfig::TILES_PER_SQUARE;
        MapPos::new(
            player.x + (i32::from(position.x()) - i32::from(origin_x)).div_euclid(square),
            player.y + (i32::from(position.y()) - i32::from(origin_y)).div_euclid(square),
        )
    }

    /// Whether a map square lies inside a map of the given size in blocks.
    pub fn in_bounds(position: MapPos, dimensions: MapDimensions) -> bool {
        let width = i32::from(dimensions.width) * DecoderConfig::SQUARES_PER_BLOCK;
        let height = i32::from(dimensions.height) * DecoderConfig::SQUARES_PER_BLOCK;
        position.x >= 0 && position.y >= 0 && position.x < width && position.y < height
    }

    /// Screen tile one map square away from `anchor`, or `None` off-screen.
    pub fn neighbor(anchor: ScreenPos, direction: Direction) -> Option<ScreenPos> {
        anchor.step(direction, DecoderConfig::TILES_PER_SQUARE)
    }

    /// Block containing a map square.
    pub fn to_block(position: MapPos) -> MapPos {
        MapPos::new(
            position.x.div_euclid(DecoderConfig::SQUARES_PER_BLOCK),
            position.y.div_euclid(DecoderConfig::SQUARES_PER_BLOCK),
        )
    }
}
