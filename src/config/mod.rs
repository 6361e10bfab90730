//! Configuration management module
//!
//! Handles loading, saving, and validation of UI preferences.
//! Navigation state itself is never persisted; this covers only the
//! ambient knobs of the shell.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{MedleyError, Result, APP_NAME, CONFIG_FILE};

/// UI preferences for the shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event-poll tick rate in milliseconds; also drives the drawer
    /// slide animation
    pub tick_rate_ms: u64,
    /// Drawer overlay width in terminal columns
    pub drawer_width: u16,
    /// Whether the drawer slides open or snaps
    pub animate_drawer: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            drawer_width: 28,
            animate_drawer: true,
        }
    }
}

impl UiConfig {
    /// Standard config file path:
    /// `$CONFIG_HOME/medley/medley.toml`
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            MedleyError::ConfigError("Unable to determine config directory".to_string())
        })?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Load the config from the standard path, falling back to
    /// defaults when no file exists yet
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_file_path()?)
    }

    /// Load the config from an explicit path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|e| {
            MedleyError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the config to the standard path, creating the directory
    /// if needed
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::config_file_path()?)
    }

    /// Save the config to an explicit path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content).map_err(|e| {
            MedleyError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(10..=1000).contains(&self.tick_rate_ms) {
            return Err(MedleyError::ConfigError(format!(
                "Tick rate must be between 10 and 1000 ms, got {}",
                self.tick_rate_ms
            )));
        }
        if !(16..=60).contains(&self.drawer_width) {
            return Err(MedleyError::ConfigError(format!(
                "Drawer width must be between 16 and 60 columns, got {}",
                self.drawer_width
            )));
        }
        Ok(())
    }
}
