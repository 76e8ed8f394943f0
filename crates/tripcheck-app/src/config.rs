//! Configuration management for tripcheck
//!
//! Config stored at: ~/.config/tripcheck/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tripcheck_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Extra named locations (CSV or TOML), checked before the built-in cities
    #[serde(default)]
    pub gazetteer_path: Option<PathBuf>,

    /// Remaining cycle hours below which a trip is flagged as low
    #[serde(default = "default_low_hours_warning")]
    pub low_hours_warning: f64,

    /// Cycle hours used when a request does not give one
    #[serde(default)]
    pub default_cycle_hours_used: f64,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_low_hours_warning() -> f64 {
    10.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            gazetteer_path: None,
            low_hours_warning: default_low_hours_warning(),
            default_cycle_hours_used: 0.0,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("tripcheck");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tripcheck Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(f, "Output format:        {}", self.output_format)?;
        writeln!(
            f,
            "Gazetteer:            {}",
            self.gazetteer_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in cities only)".to_string())
        )?;
        writeln!(f, "Low hours warning:    {:.1} h", self.low_hours_warning)?;
        writeln!(f, "Default cycle used:   {:.1} h", self.default_cycle_hours_used)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:          {}", path.display())?;
        }

        Ok(())
    }
}
