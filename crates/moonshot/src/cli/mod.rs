//! Command-line interface for moonshot.
//!
//! This module provides the CLI structure for the `moonshot` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AstronautCommand, AstronautsCommand, ConfigCommand, LayoutArg, MissionCommand,
    MissionsCommand,
};

/// moonshot - Browse the Apollo astronaut and mission catalog
///
/// Lists the Apollo missions as a grid or a list, shows each mission with its
/// crew, and drills down into astronaut biographies.
#[derive(Debug, Parser)]
#[command(name = "moonshot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding astronauts.json and missions.json
    #[arg(short, long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show every mission
    Missions(MissionsCommand),

    /// Show one mission and its crew
    Mission(MissionCommand),

    /// Show every astronaut
    Astronauts(AstronautsCommand),

    /// Show one astronaut
    Astronaut(AstronautCommand),

    /// Load the datasets and resolve every mission's crew
    Check,

    /// Browse interactively
    Browse,

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }
}
