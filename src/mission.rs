//! Batch runner that validates and explores every rover of a mission plan.
//!
//! The entry point is [`Mission`]. Configure it with a [`MissionConfig`], then
//! call [`Mission::run`] with parsed [`Rovers`] or [`Mission::run_input`] with
//! the raw plan text. Rovers are processed one at a time, in input order, and
//! never interact.

use crate::error::{MissionError, Result};
use crate::parser::parse_instructions;
use crate::position::Position;
use crate::rover::Rovers;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

/// Configuration for a mission run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    /// Abort the whole batch on the first rover failure. Default: true.
    pub halt_on_error: bool,
    /// Run [`Rover::valid`](crate::Rover::valid) before exploring. Default: true.
    pub validate_before_explore: bool,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            halt_on_error: true,
            validate_before_explore: true,
        }
    }
}

impl MissionConfig {
    /// Loads a configuration from a TOML file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MissionError::Io`] if the file cannot be read and
    /// [`MissionError::Config`] if it is not valid TOML for this structure.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// How a single rover's run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoverStatus {
    /// Every command was applied.
    Completed,
    /// The rover failed validation and never moved.
    Invalid,
    /// Exploration stopped at a failing command.
    Halted,
}

/// Outcome of one rover.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverReport {
    /// Zero-based index of the rover in the plan.
    pub index: usize,
    pub start: Position,
    pub commands: String,
    /// Last committed position; equal to `start` for invalid rovers.
    pub finish: Position,
    pub status: RoverStatus,
    /// Error message for `Invalid` and `Halted` rovers.
    pub error: Option<String>,
}

/// The three or four line text summary printed by the command line runner:
///
/// ```text
/// Starting Position (1, 2) Facing North
/// Instructions: LMLMLMLMM
/// Finishing Position (1, 3) Facing North
/// ```
///
/// Failed rovers print `Stopped at Position ...` followed by `Error: ...`.
impl fmt::Display for RoverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Starting Position {}", self.start)?;
        writeln!(f, "Instructions: {}", self.commands)?;
        match &self.error {
            None => write!(f, "Finishing Position {}", self.finish),
            Some(error) => {
                writeln!(f, "Stopped at Position {}", self.finish)?;
                write!(f, "Error: {error}")
            }
        }
    }
}

/// Results of every rover processed in a mission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionReport {
    pub rovers: Vec<RoverReport>,
}

impl MissionReport {
    pub fn completed(&self) -> usize {
        self.rovers
            .iter()
            .filter(|r| r.status == RoverStatus::Completed)
            .count()
    }
}

/// Runs rovers according to a [`MissionConfig`].
#[derive(Clone, Debug, Default)]
pub struct Mission {
    config: MissionConfig,
}

impl Mission {
    pub fn new(config: MissionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    /// Parses `input` and runs every rover it describes.
    ///
    /// # Errors
    ///
    /// Returns [`MissionError::Parse`] for a malformed plan, otherwise the same
    /// errors as [`run`](Self::run).
    pub fn run_input(&self, input: &str) -> Result<MissionReport> {
        let rovers = parse_instructions(input)?;
        self.run(rovers)
    }

    /// Validates and explores `rovers` in order.
    ///
    /// # Errors
    ///
    /// With `halt_on_error` set, returns the first validation or movement
    /// failure tagged with the rover index. Otherwise failures are recorded in
    /// the report and this only returns `Ok`.
    pub fn run(&self, rovers: Rovers) -> Result<MissionReport> {
        self.run_with(rovers, |_| {})
    }

    /// Like [`run`](Self::run), calling `on_report` as soon as each rover finishes.
    ///
    /// The failing rover is reported before a halting error is returned, so a
    /// caller can print progress the way the batch actually went.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn run_with<F>(&self, rovers: Rovers, mut on_report: F) -> Result<MissionReport>
    where
        F: FnMut(&RoverReport),
    {
        let mut report = MissionReport::default();

        for (index, mut rover) in rovers.into_iter().enumerate() {
            let start = rover.position;
            info!(index, start = %start, commands = %rover.commands, "rover starting");

            let mut entry = RoverReport {
                index,
                start,
                commands: rover.commands.clone(),
                finish: start,
                status: RoverStatus::Completed,
                error: None,
            };

            if self.config.validate_before_explore
                && let Err(source) = rover.valid()
            {
                warn!(index, "rover failed validation: {source}");
                entry.status = RoverStatus::Invalid;
                entry.error = Some(source.to_string());
                on_report(&entry);
                report.rovers.push(entry);
                if self.config.halt_on_error {
                    return Err(MissionError::Validation { index, source });
                }
                continue;
            }

            let explored = rover.explore();
            entry.finish = rover.position;
            match explored {
                Ok(()) => info!(index, finish = %entry.finish, "rover finished"),
                Err(source) => {
                    warn!(index, finish = %entry.finish, "rover halted: {source}");
                    entry.status = RoverStatus::Halted;
                    entry.error = Some(source.to_string());
                    on_report(&entry);
                    report.rovers.push(entry);
                    if self.config.halt_on_error {
                        return Err(MissionError::Movement { index, source });
                    }
                    continue;
                }
            }

            on_report(&entry);
            report.rovers.push(entry);
        }

        Ok(report)
    }
}
