//! Error types for rover parsing, validation and exploration.

use crate::position::Axis;
use thiserror::Error;

/// A direction value outside the four cardinal points.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("rover facing unknown direction {ordinal}")]
pub struct UnknownDirection {
    /// The raw ordinal that failed validation.
    pub ordinal: u8,
}

/// A command character that is not `M`, `L` or `R`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("rover provided unknown instruction {code}")]
pub struct UnknownInstruction {
    /// The offending character code.
    pub code: u32,
}

/// Structural problems in the textual mission plan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is empty")]
    EmptyInput,

    #[error("two boundaries are required, got {0:?}")]
    MissingBoundary(String),

    #[error("invalid boundary value {0:?}")]
    InvalidBoundary(String),

    #[error("line {line}: rover initialise not provided x, y, and direction: {content:?}")]
    MalformedRoverInit { line: usize, content: String },

    #[error("line {line}: {axis} coordinate {value:?} is not an integer")]
    InvalidCoordinate {
        line: usize,
        axis: Axis,
        value: String,
    },

    #[error("line {line}: rover missing instructions")]
    MissingCommands { line: usize },

    #[error("unknown direction string {0}")]
    UnknownDirectionString(String),
}

/// A rover whose initial state cannot be explored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("rover has a negative {axis} boundary {value} but should not")]
    NegativeBoundary { axis: Axis, value: i32 },

    #[error("rover x coordinate {x} must be within boundary 0..={limit}")]
    OutsideXBoundary { x: i32, limit: i32 },

    #[error("rover y coordinate {y} must be within boundary 0..={limit}")]
    OutsideYBoundary { y: i32, limit: i32 },

    #[error(transparent)]
    Direction(#[from] UnknownDirection),

    #[error("rover must have at least one valid command")]
    NoCommands,

    #[error(transparent)]
    Instruction(#[from] UnknownInstruction),
}

/// Failures raised while a rover executes its commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MovementError {
    #[error("rover at Y edge ({x}, {y}) cannot move north")]
    BoundaryNorth { x: i32, y: i32 },

    #[error("rover at X edge ({x}, {y}) cannot move east")]
    BoundaryEast { x: i32, y: i32 },

    #[error("rover at Y edge ({x}, {y}) cannot move south")]
    BoundarySouth { x: i32, y: i32 },

    #[error("rover at X edge ({x}, {y}) cannot move west")]
    BoundaryWest { x: i32, y: i32 },

    #[error(transparent)]
    Direction(#[from] UnknownDirection),

    #[error(transparent)]
    Instruction(#[from] UnknownInstruction),
}

/// Top-level error for a mission run.
#[derive(Error, Debug)]
pub enum MissionError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("rover {index} failed validation: {source}")]
    Validation {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("rover {index} failed exploration: {source}")]
    Movement {
        index: usize,
        #[source]
        source: MovementError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("report serialization error: {0}")]
    Report(String),
}

impl From<toml::de::Error> for MissionError {
    fn from(e: toml::de::Error) -> Self {
        MissionError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for MissionError {
    fn from(e: serde_json::Error) -> Self {
        MissionError::Report(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MissionError>;
