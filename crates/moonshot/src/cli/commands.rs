//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::present::DisplayMode;

/// Missions command arguments.
#[derive(Debug, Args)]
pub struct MissionsCommand {
    /// Layout to use instead of the configured one
    #[arg(short, long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Mission command arguments.
#[derive(Debug, Args)]
pub struct MissionCommand {
    /// Mission id (e.g. 11)
    pub id: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Astronauts command arguments.
#[derive(Debug, Args)]
pub struct AstronautsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Astronaut command arguments.
#[derive(Debug, Args)]
pub struct AstronautCommand {
    /// Astronaut id (e.g. armstrong)
    pub id: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Mission layout argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// Cards in columns
    Grid,
    /// One row per mission
    List,
}

impl From<LayoutArg> for DisplayMode {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Grid => Self::Grid,
            LayoutArg::List => Self::List,
        }
    }
}
