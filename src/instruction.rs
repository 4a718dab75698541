//! Single-character rover commands.

use crate::error::UnknownInstruction;
use serde::{Deserialize, Serialize};

/// Operations that can be performed by a rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Move one cell forward (`M`).
    Move,
    /// Rotate 90 degrees left in place (`L`).
    TurnLeft,
    /// Rotate 90 degrees right in place (`R`).
    TurnRight,
}

impl Instruction {
    /// Checks that `code` names one of the known instructions.
    pub fn valid(code: char) -> Result<(), UnknownInstruction> {
        Self::try_from(code).map(|_| ())
    }

    /// The character this instruction is written as.
    pub fn code(self) -> char {
        match self {
            Instruction::Move => 'M',
            Instruction::TurnLeft => 'L',
            Instruction::TurnRight => 'R',
        }
    }
}

impl TryFrom<char> for Instruction {
    type Error = UnknownInstruction;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'M' => Ok(Instruction::Move),
            'L' => Ok(Instruction::TurnLeft),
            'R' => Ok(Instruction::TurnRight),
            other => Err(UnknownInstruction { code: other as u32 }),
        }
    }
}
