use std::fmt;

use crate::config::DecoderConfig;

use super::Direction;

/// A tile coordinate inside the 20×18 screen grid.
///
/// Always within bounds; construct with [`ScreenPos::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScreenPos {
    x: u8,
    y: u8,
}

impl ScreenPos {
    pub const PLAYER_ANCHOR: Self = Self {
        x: DecoderConfig::PLAYER_ANCHOR.0,
        y: DecoderConfig::PLAYER_ANCHOR.1,
    };

    /// Returns `None` when `(x, y)` lies outside the screen grid.
    pub fn new(x: u8, y: u8) -> Option<Self> {
        (usize::from(x) < DecoderConfig::SCREEN_WIDTH
            && usize::from(y) < DecoderConfig::SCREEN_HEIGHT)
            .then_some(Self { x, y })
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= DecoderConfig::SCREEN_TILES {
            return None;
        }
        let x = u8::try_from(index % DecoderConfig::SCREEN_WIDTH).ok()?;
        let y = u8::try_from(index / DecoderConfig::SCREEN_WIDTH).ok()?;
        Self::new(x, y)
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// Row-major offset into the screen tile buffer.
    pub fn index(self) -> usize {
        usize::from(self.y) * DecoderConfig::SCREEN_WIDTH + usize::from(self.x)
    }

    /// Moves `steps` tiles toward `direction`; `None` once it leaves the screen.
    pub fn step(self, direction: Direction, steps: i32) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = i32::from(self.x) + dx * steps;
        let y = i32::from(self.y) + dy * steps;
        Self::new(u8::try_from(x).ok()?, u8::try_from(y).ok()?)
    }

    pub fn manhattan_distance(self, other: Self) -> u32 {
        u32::from(self.x.abs_diff(other.x)) + u32::from(self.y.abs_diff(other.y))
    }

    /// All screen positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..DecoderConfig::SCREEN_TILES).filter_map(Self::from_index)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ScreenPos {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            x: u8,
            y: u8,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.x, raw.y).ok_or_else(|| {
            serde::de::Error::custom(format!("screen position ({}, {}) is off-screen", raw.x, raw.y))
        })
    }
}

impl fmt::Display for ScreenPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Absolute coordinate on the current map, in map squares.
///
/// Signed: tiles past the map edge are still addressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPos {
    pub x: i32,
    pub y: i32,
}

impl MapPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Map size in blocks, as stored in memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u8,
    pub height: u8,
}

impl MapDimensions {
    pub const fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }
}
