//! Compass heading of a rover.

use crate::error::{ParseError, UnknownDirection};
use crate::position::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The way a rover is facing, using the four cardinal compass points.
///
/// Ordinals follow the clockwise order `North = 1` through `West = 4`. Any other
/// ordinal is kept as [`Direction::Unknown`] so that malformed input is reported
/// by [`valid`](Self::valid) instead of being silently coerced.
///
/// Build directions from raw values with [`from_ordinal`](Self::from_ordinal);
/// `Unknown` only ever holds ordinals outside `1..=4`. Deserialization goes
/// through the same mapping, so `{"Unknown": 1}` reads back as `North`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawDirection")]
pub enum Direction {
    North,
    East,
    South,
    West,
    /// Sentinel for any ordinal outside `1..=4`.
    Unknown(u8),
}

/// Wire shape of [`Direction`], normalised on the way in.
#[derive(Deserialize)]
#[serde(rename = "Direction")]
enum RawDirection {
    North,
    East,
    South,
    West,
    Unknown(u8),
}

impl From<RawDirection> for Direction {
    fn from(raw: RawDirection) -> Self {
        match raw {
            RawDirection::North => Direction::North,
            RawDirection::East => Direction::East,
            RawDirection::South => Direction::South,
            RawDirection::West => Direction::West,
            RawDirection::Unknown(n) => Direction::from_ordinal(n),
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Unknown(0)
    }
}

impl Direction {
    /// The four valid headings in clockwise order.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Maps a raw ordinal to a direction; values outside `1..=4` become `Unknown`.
    pub fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            1 => Direction::North,
            2 => Direction::East,
            3 => Direction::South,
            4 => Direction::West,
            n => Direction::Unknown(n),
        }
    }

    pub fn ordinal(self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::East => 2,
            Direction::South => 3,
            Direction::West => 4,
            Direction::Unknown(n) => n,
        }
    }

    /// Returns an error if the direction is not one of the four cardinal points.
    pub fn valid(self) -> Result<(), UnknownDirection> {
        match self {
            Direction::Unknown(ordinal) => Err(UnknownDirection { ordinal }),
            _ => Ok(()),
        }
    }

    /// Rotates 90 degrees counter-clockwise (North wraps to West).
    pub fn rotate_left(self) -> Result<Self, UnknownDirection> {
        match self {
            Direction::North => Ok(Direction::West),
            Direction::East => Ok(Direction::North),
            Direction::South => Ok(Direction::East),
            Direction::West => Ok(Direction::South),
            Direction::Unknown(ordinal) => Err(UnknownDirection { ordinal }),
        }
    }

    /// Rotates 90 degrees clockwise (West wraps to North).
    pub fn rotate_right(self) -> Result<Self, UnknownDirection> {
        match self {
            Direction::North => Ok(Direction::East),
            Direction::East => Ok(Direction::South),
            Direction::South => Ok(Direction::West),
            Direction::West => Ok(Direction::North),
            Direction::Unknown(ordinal) => Err(UnknownDirection { ordinal }),
        }
    }

    /// The one-cell grid step taken when moving forward in this direction.
    pub fn offset(self) -> Result<Coordinate, UnknownDirection> {
        match self {
            Direction::North => Ok(Coordinate::Y),
            Direction::East => Ok(Coordinate::X),
            Direction::South => Ok(Coordinate::NEG_Y),
            Direction::West => Ok(Coordinate::NEG_X),
            Direction::Unknown(ordinal) => Err(UnknownDirection { ordinal }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => f.write_str("North"),
            Direction::East => f.write_str("East"),
            Direction::South => f.write_str("South"),
            Direction::West => f.write_str("West"),
            Direction::Unknown(n) => write!(f, "Unknown({n})"),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "North" => Ok(Direction::North),
            "East" => Ok(Direction::East),
            "South" => Ok(Direction::South),
            "West" => Ok(Direction::West),
            _ => Err(ParseError::UnknownDirectionString(s.to_string())),
        }
    }
}
