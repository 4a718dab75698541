//! The rover state machine: validation and command execution.
//!
//! A [`Rover`] owns its [`Position`], the plateau boundary and the command
//! string it was given. Call [`Rover::valid`] once before [`Rover::explore`];
//! exploration still defends against bad state on its own because it may be
//! invoked without prior validation.

use crate::direction::Direction;
use crate::error::{MovementError, UnknownDirection, ValidationError};
use crate::instruction::Instruction;
use crate::position::{Axis, Coordinate, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Rovers parsed from one mission plan, in input order.
pub type Rovers = Vec<Rover>;

/// A single rover on the plateau.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rover {
    /// Command characters, applied left to right.
    pub commands: String,

    /// Current location and heading. Mutated in place by [`explore`](Self::explore).
    pub position: Position,

    /// Inclusive upper-right corner of the plateau.
    pub boundary: Coordinate,
}

impl Rover {
    pub fn new(boundary: Coordinate, position: Position, commands: impl Into<String>) -> Self {
        Self {
            commands: commands.into(),
            position,
            boundary,
        }
    }

    /// Checks that the rover can start exploring and returns the first problem found.
    ///
    /// Checks run in this order: boundary sign, position inside the boundary
    /// (x before y), heading, then the command string. There is no null-rover or
    /// missing-position check since both are owned values here.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first failed check.
    pub fn valid(&self) -> Result<(), ValidationError> {
        if self.boundary.x < 0 {
            return Err(ValidationError::NegativeBoundary {
                axis: Axis::X,
                value: self.boundary.x,
            });
        }
        if self.boundary.y < 0 {
            return Err(ValidationError::NegativeBoundary {
                axis: Axis::Y,
                value: self.boundary.y,
            });
        }

        let Coordinate { x, y } = self.position.coordinate;
        if !(0..=self.boundary.x).contains(&x) {
            return Err(ValidationError::OutsideXBoundary {
                x,
                limit: self.boundary.x,
            });
        }
        if !(0..=self.boundary.y).contains(&y) {
            return Err(ValidationError::OutsideYBoundary {
                y,
                limit: self.boundary.y,
            });
        }

        self.position.direction.valid()?;

        if self.commands.is_empty() {
            return Err(ValidationError::NoCommands);
        }
        for code in self.commands.chars() {
            Instruction::valid(code)?;
        }

        Ok(())
    }

    /// Applies every command in order to the rover's position.
    ///
    /// Execution stops at the first failing command. That command is not
    /// applied, so the position is left at the last committed state.
    ///
    /// # Errors
    ///
    /// - a boundary error naming the direction of a move that would leave the plateau
    /// - [`MovementError::Direction`] when the heading is not a cardinal point
    /// - [`MovementError::Instruction`] for a character other than `M`, `L` or `R`
    pub fn explore(&mut self) -> Result<(), MovementError> {
        for (step, code) in self.commands.chars().enumerate() {
            let applied = Instruction::try_from(code)
                .map_err(MovementError::from)
                .and_then(|op| apply(&mut self.position, self.boundary, op));

            if let Err(e) = applied {
                debug!(step, %code, position = %self.position, "rover halted: {e}");
                return Err(e);
            }
            trace!(step, %code, position = %self.position, "command applied");
        }

        Ok(())
    }
}

fn apply(
    position: &mut Position,
    boundary: Coordinate,
    op: Instruction,
) -> Result<(), MovementError> {
    match op {
        Instruction::Move => advance(position, boundary),
        Instruction::TurnLeft => {
            position.direction = position.direction.rotate_left()?;
            Ok(())
        }
        Instruction::TurnRight => {
            position.direction = position.direction.rotate_right()?;
            Ok(())
        }
    }
}

/// Moves one cell forward if the target stays inside the boundary on the axis of travel.
fn advance(position: &mut Position, boundary: Coordinate) -> Result<(), MovementError> {
    let direction = position.direction;
    let offset = direction.offset()?;
    let current = position.coordinate;

    let (value, delta, limit) = match direction {
        Direction::North | Direction::South => (current.y, offset.y, boundary.y),
        _ => (current.x, offset.x, boundary.x),
    };

    match value.checked_add(delta) {
        Some(next) if (0..=limit).contains(&next) => {
            position.coordinate = current + offset;
            Ok(())
        }
        _ => Err(boundary_error(direction, current)),
    }
}

fn boundary_error(direction: Direction, at: Coordinate) -> MovementError {
    let Coordinate { x, y } = at;
    match direction {
        Direction::North => MovementError::BoundaryNorth { x, y },
        Direction::East => MovementError::BoundaryEast { x, y },
        Direction::South => MovementError::BoundarySouth { x, y },
        Direction::West => MovementError::BoundaryWest { x, y },
        Direction::Unknown(ordinal) => MovementError::Direction(UnknownDirection { ordinal }),
    }
}
