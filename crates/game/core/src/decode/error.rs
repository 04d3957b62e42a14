//! Decode errors.
//!
//! Only [`DecodeError`] escapes a decode cycle. [`DetectorError`] is caught
//! inside the tile decoder and turned into an unset flag.

use crate::error::{DecoderError, ErrorSeverity};
use crate::memory::MemoryError;
use crate::types::MapPos;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Screen coordinate outside the 20×18 grid.
    #[error("screen coordinate ({x}, {y}) is outside the 20x18 grid")]
    InvalidCoordinate { x: u8, y: u8 },

    #[error(transparent)]
    Memory(#[from] MemoryError),
}

impl DecoderError for DecodeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidCoordinate { .. } => ErrorSeverity::Validation,
            Self::Memory(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCoordinate { .. } => "DECODE_INVALID_COORDINATE",
            Self::Memory(error) => error.error_code(),
        }
    }
}

/// Failure of a single auxiliary property detector.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DetectorError {
    #[error("warp at {position:?} on map {map} has no resolvable destination")]
    UnresolvedWarp { map: u8, position: MapPos },

    #[error("{position:?} lies outside map {map}")]
    OutsideMap { map: u8, position: MapPos },

    #[error("tileset {tileset} declares light level {level}, above 15")]
    LightLevelOutOfRange { tileset: u8, level: u8 },
}

impl DecoderError for DetectorError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnresolvedWarp { .. } => "DETECTOR_UNRESOLVED_WARP",
            Self::OutsideMap { .. } => "DETECTOR_OUTSIDE_MAP",
            Self::LightLevelOutOfRange { .. } => "DETECTOR_LIGHT_LEVEL",
        }
    }
}
