/// Decoder configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecoderConfig {
    /// Maximum number of tiles a trainer's line of sight extends.
    pub trainer_sight_range: u8,
    /// Lowest map-loading status that counts as an in-progress transition.
    pub transition_status_min: u8,
    /// Highest map-loading status that counts as an in-progress transition.
    pub transition_status_max: u8,
}

impl DecoderConfig {
    // ===== compile-time constants =====
    /// Visible screen width in 8-pixel tiles.
    pub const SCREEN_WIDTH: usize = 20;
    /// Visible screen height in 8-pixel tiles.
    pub const SCREEN_HEIGHT: usize = 18;
    pub const SCREEN_TILES: usize = Self::SCREEN_WIDTH * Self::SCREEN_HEIGHT;
    /// Screen tiles per map square along each axis.
    pub const TILES_PER_SQUARE: i32 = 2;
    /// Map squares per block along each axis.
    pub const SQUARES_PER_BLOCK: i32 = 2;
    /// Top-left screen tile of the player's square.
    pub const PLAYER_ORIGIN: (u8, u8) = (8, 8);
    /// Bottom-left screen tile of the player's square; collision checks read this tile.
    pub const PLAYER_ANCHOR: (u8, u8) = (8, 9);
    pub const SPRITE_SLOTS: usize = 16;
    pub const SPRITE_STRIDE: usize = 16;
    pub const MAX_WARPS: usize = 32;
    pub const PARTY_MAX: usize = 6;
    pub const PARTY_STRIDE: usize = 44;
    pub const NAME_LENGTH: usize = 11;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TRAINER_SIGHT_RANGE: u8 = 4;
    pub const DEFAULT_TRANSITION_STATUS_MIN: u8 = 1;
    pub const DEFAULT_TRANSITION_STATUS_MAX: u8 = u8::MAX;

    pub fn new() -> Self {
        Self {
            trainer_sight_range: Self::DEFAULT_TRAINER_SIGHT_RANGE,
            transition_status_min: Self::DEFAULT_TRANSITION_STATUS_MIN,
            transition_status_max: Self::DEFAULT_TRANSITION_STATUS_MAX,
        }
    }

    pub fn with_trainer_sight_range(trainer_sight_range: u8) -> Self {
        Self {
            trainer_sight_range,
            ..Self::new()
        }
    }

    /// Returns true when the raw loading-status byte marks a map transition.
    pub fn is_transition_status(&self, status: u8) -> bool {
        (self.transition_status_min..=self.transition_status_max).contains(&status)
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}
