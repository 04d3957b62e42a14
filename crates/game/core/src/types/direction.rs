/// Screen-relative direction. Screen `y` grows downward.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Decodes the facing byte of a sprite state slot.
    pub fn from_facing_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Direction::Down),
            0x04 => Some(Direction::Up),
            0x08 => Some(Direction::Left),
            0x0C => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Whether the square next to the player is walkable, per compass direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionsAvailable {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl DirectionsAvailable {
    pub fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.north,
            Direction::Down => self.south,
            Direction::Left => self.west,
            Direction::Right => self.east,
        }
    }

    pub fn set(&mut self, direction: Direction, available: bool) {
        match direction {
            Direction::Up => self.north = available,
            Direction::Down => self.south = available,
            Direction::Left => self.west = available,
            Direction::Right => self.east = available,
        }
    }

    pub fn any(&self) -> bool {
        self.north || self.south || self.east || self.west
    }

    /// Available directions in `Direction::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|direction| self.get(*direction))
    }
}
