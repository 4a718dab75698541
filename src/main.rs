//! Command line driver: reads a mission plan, runs every rover and prints where
//! each one ended up.
//!
//! ```bash
//! # Built-in demo plan
//! cargo run
//!
//! # Plan from a file, keep going past failing rovers, JSON output
//! cargo run -- plan.txt --keep-going --json
//!
//! # Plan from stdin with a config file
//! cat plan.txt | cargo run -- - --config mission.toml
//! ```

use clap::Parser;
use mars_rover::error::Result;
use mars_rover::{Mission, MissionConfig, MissionReport, parse_instructions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEMO_INPUT: &str = "5 5
1 2 North
LMLMLMLMM
3 3 East
MMRMMRMRRM";

/// Mars rover mission runner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mission plan file, or `-` for stdin. Runs the built-in demo plan when omitted.
    input: Option<PathBuf>,

    /// Read the mission plan from stdin
    #[arg(long, conflicts_with = "input")]
    stdin: bool,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Continue with the next rover after a failure
    #[arg(short, long)]
    keep_going: bool,

    /// Print the mission report as JSON
    #[arg(long)]
    json: bool,
}

/// Where the mission plan comes from.
#[derive(Debug, PartialEq, Eq)]
enum InputSource {
    Demo,
    Stdin,
    File(PathBuf),
}

impl Args {
    fn source(&self) -> InputSource {
        if self.stdin {
            return InputSource::Stdin;
        }
        match &self.input {
            None => InputSource::Demo,
            Some(path) if path == Path::new("-") => InputSource::Stdin,
            Some(path) => InputSource::File(path.clone()),
        }
    }

    fn mission_config(&self) -> Result<MissionConfig> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading configuration from {:?}", path);
                MissionConfig::load(path)?
            }
            None => MissionConfig::default(),
        };
        if self.keep_going {
            config.halt_on_error = false;
        }
        Ok(config)
    }
}

fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Demo => Ok(DEMO_INPUT.to_string()),
        InputSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        InputSource::File(path) => {
            info!("Reading mission plan from {:?}", path);
            Ok(std::fs::read_to_string(path)?)
        }
    }
}

/// Runs `input` and writes every finished rover to `out`.
///
/// Rovers that ran before a halting failure are still written, then the
/// failure is returned so the process exits non-zero.
fn run(mission: &Mission, input: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let rovers = parse_instructions(input)?;

    let mut finished = Vec::new();
    let outcome = mission.run_with(rovers, |report| finished.push(report.clone()));

    if json {
        let report = MissionReport { rovers: finished };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        for report in &finished {
            writeln!(out, "{report}\n")?;
        }
    }

    let report = outcome?;
    info!(
        "Mission finished: {}/{} rovers completed",
        report.completed(),
        report.rovers.len()
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mars_rover=warn")),
        )
        .init();

    let args = Args::parse();
    let mission = Mission::new(args.mission_config()?);
    let input = read_input(&args.source())?;

    run(&mission, &input, args.json, &mut std::io::stdout().lock())
}
