//! Configuration management for moonshot.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::bundle::{ASTRONAUTS_FILE, MISSIONS_FILE};
use crate::error::{Error, Result};
use crate::present::DisplayMode;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "moonshot";

/// Narrowest screen the layouts can render.
const MIN_WIDTH: usize = 20;

/// Narrowest grid cell that still fits a mission name.
const MIN_CELL_WIDTH: usize = 10;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `MOONSHOT_`, `__` between sections)
/// 2. TOML config file at `~/.config/moonshot/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data bundle configuration.
    pub data: DataConfig,
    /// Screen rendering configuration.
    pub display: DisplayConfig,
}

/// Where the datasets come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the dataset files.
    /// Defaults to the datasets compiled into the binary.
    pub dir: Option<PathBuf>,
    /// Astronaut dataset file name.
    pub astronauts_file: String,
    /// Mission dataset file name.
    pub missions_file: String,
}

/// How screens are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Initial mission layout.
    pub layout: DisplayMode,
    /// Screen width in columns.
    pub width: usize,
    /// Width of one grid cell, borders included.
    pub cell_width: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: None,
            astronauts_file: ASTRONAUTS_FILE.to_string(),
            missions_file: MISSIONS_FILE.to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            layout: DisplayMode::Grid,
            width: 80,
            cell_width: 24,
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("MOONSHOT_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.data.astronauts_file.trim().is_empty() {
            return Err(Error::config_validation("astronauts_file cannot be empty"));
        }

        if self.data.missions_file.trim().is_empty() {
            return Err(Error::config_validation("missions_file cannot be empty"));
        }

        if self.display.width < MIN_WIDTH {
            return Err(Error::config_validation(format!(
                "width ({}) must be at least {MIN_WIDTH}",
                self.display.width
            )));
        }

        if self.display.cell_width < MIN_CELL_WIDTH || self.display.cell_width > self.display.width
        {
            return Err(Error::config_validation(format!(
                "cell_width ({}) must be between {MIN_CELL_WIDTH} and width ({})",
                self.display.cell_width, self.display.width
            )));
        }

        Ok(())
    }
}
