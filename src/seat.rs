//! Table positions.

use core::fmt;
use core::str::FromStr;

use crate::card::UNKNOWN_TOKEN;
use crate::error::ParseError;

/// One of the four bridge positions.
///
/// Seats follow the clockwise cycle North, East, South, West.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Seat {
    /// North.
    #[default]
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
}

impl Seat {
    /// All seats in table order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Returns the seat with the given ordinal, if any.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::North),
            1 => Some(Self::East),
            2 => Some(Self::South),
            3 => Some(Self::West),
            _ => None,
        }
    }

    /// Returns the ordinal of this seat.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the next seat clockwise, wrapping West to North.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Returns the single-letter token for this seat.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
        }
    }

    /// Renders an arbitrary ordinal, falling back to [`UNKNOWN_TOKEN`].
    #[must_use]
    pub fn token_of(index: usize) -> &'static str {
        Self::from_index(index).map_or(UNKNOWN_TOKEN, Self::as_str)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Seat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" | "n" => Ok(Self::North),
            "E" | "e" => Ok(Self::East),
            "S" | "s" => Ok(Self::South),
            "W" | "w" => Ok(Self::West),
            _ => Err(ParseError::InvalidSeat),
        }
    }
}
