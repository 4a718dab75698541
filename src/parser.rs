//! Text front end: turns a mission plan into [`Rovers`].
//!
//! The plan is line oriented:
//!
//! ```text
//! 5 5            <- upper-right corner of the plateau
//! 1 2 North      <- rover start: x, y, heading
//! LMLMLMLMM      <- rover commands
//! 3 3 East
//! MMRMMRMRRM
//! ```
//!
//! Only structure is checked here. Range checks on the values are left to
//! [`Rover::valid`](crate::Rover::valid).

use crate::direction::Direction;
use crate::error::ParseError;
use crate::position::{Axis, Coordinate, Position};
use crate::rover::{Rover, Rovers};
use tracing::debug;

const NUM_BOUNDARIES: usize = 2; // x, y
const NUM_ROVER_INIT_VALUES: usize = 3; // x, y, direction

/// Parses a full mission plan.
///
/// Stops at the first structural error; no partial rover list is returned.
/// Fields are separated by exactly one space, so doubled or trailing spaces
/// make a line malformed. Trailing blank lines are ignored.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first malformed line.
pub fn parse_instructions(input: &str) -> Result<Rovers, ParseError> {
    let mut lines = input
        .trim_end_matches(['\r', '\n'])
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l));

    let Some((_, first)) = lines.next() else {
        return Err(ParseError::EmptyInput);
    };
    let boundary = parse_boundary(first)?;

    let mut rovers = Rovers::new();
    while let Some((line, init)) = lines.next() {
        let position = parse_rover_position(line, init)?;
        let Some((_, commands)) = lines.next() else {
            return Err(ParseError::MissingCommands { line: line + 1 });
        };
        rovers.push(Rover::new(boundary, position, commands));
    }

    debug!(
        boundary = %boundary,
        rovers = rovers.len(),
        "parsed mission plan"
    );
    Ok(rovers)
}

fn parse_boundary(line: &str) -> Result<Coordinate, ParseError> {
    let fields: Vec<&str> = line.split(' ').collect();
    if fields.len() != NUM_BOUNDARIES {
        return Err(ParseError::MissingBoundary(line.to_string()));
    }

    let parse = |s: &str| {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidBoundary(s.to_string()))
    };
    Ok(Coordinate::new(parse(fields[0])?, parse(fields[1])?))
}

fn parse_rover_position(line: usize, content: &str) -> Result<Position, ParseError> {
    let fields: Vec<&str> = content.split(' ').collect();
    if fields.len() != NUM_ROVER_INIT_VALUES {
        return Err(ParseError::MalformedRoverInit {
            line,
            content: content.to_string(),
        });
    }

    let parse = |axis: Axis, s: &str| {
        s.parse::<i32>().map_err(|_| ParseError::InvalidCoordinate {
            line,
            axis,
            value: s.to_string(),
        })
    };
    let x = parse(Axis::X, fields[0])?;
    let y = parse(Axis::Y, fields[1])?;
    let direction: Direction = fields[2].parse()?;

    Ok(Position::new(x, y, direction))
}
