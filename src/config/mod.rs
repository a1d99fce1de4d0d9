//! This module handles the library's configuration, including loading and
//! saving the host application's toast preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//! use iced_toast::Position;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.default_position = Some(Position::TopRight);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use crate::notification::Position;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

/// Provider-level configuration applied at `show` time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Corner used when a toast does not request one.
    #[serde(default)]
    pub default_position: Option<Position>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_position: Some(Position::BottomRight),
        }
    }
}

impl Config {
    /// Returns the effective default corner, falling back to bottom-right
    /// when the field is absent from a loaded file.
    #[must_use]
    pub fn default_position(&self) -> Position {
        self.default_position.unwrap_or(Position::BottomRight)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
