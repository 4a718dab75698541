//! # mars-rover
//!
//! Simulates grid-bound rovers on a rectangular plateau. A mission plan names the
//! plateau's upper-right corner and, for each rover, a starting position and a
//! string of single-character commands (`M` move, `L`/`R` turn).
//!
//! Each [`Rover`] is validated against the plateau and then explores its
//! commands in order, stopping at the first error with its position left at the
//! last valid state. [`Mission`] runs a whole plan and collects a serializable
//! [`MissionReport`].

pub mod direction;
pub mod error;
pub mod instruction;
pub mod mission;
pub mod parser;
pub mod position;
pub mod rover;

pub use direction::*;
pub use error::{
    MissionError, MovementError, ParseError, UnknownDirection, UnknownInstruction,
    ValidationError,
};
pub use instruction::*;
pub use mission::*;
pub use parser::*;
pub use position::*;
pub use rover::*;
