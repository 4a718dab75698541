//! Rover position state on the plateau grid.

use crate::direction::Direction;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer grid cell `(x, y)`.
///
/// Used both for a rover's location and for the upper-right corner of the
/// plateau; the lower-left corner is always the origin.
pub type Coordinate = IVec2;

/// One of the two grid axes, used to label boundary errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Where a rover is and which way it faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub coordinate: Coordinate,
    pub direction: Direction,
}

impl Position {
    pub fn new(x: i32, y: i32, direction: Direction) -> Self {
        Self {
            coordinate: IVec2::new(x, y),
            direction,
        }
    }

    pub fn x(&self) -> i32 {
        self.coordinate.x
    }

    pub fn y(&self) -> i32 {
        self.coordinate.y
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) Facing {}",
            self.coordinate.x, self.coordinate.y, self.direction
        )
    }
}
