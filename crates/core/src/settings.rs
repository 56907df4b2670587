//! User settings persistence.
//!
//! This module handles loading and saving the user's preferred metric
//! defaults (light level, greenery coverage, stair width, noise target,
//! wood coverage) and style, so repeat runs start from their last
//! remembered values instead of the built-in ones.

use crate::error::Result;
use crate::spec::StyleHint;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Remembered metric defaults, persisted between sessions.
///
/// Settings are stored as JSON in the user's config directory
/// (e.g., `~/.config/well-redesign/settings.json` on Linux).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Ambient light level default (lux).
    pub lux: u32,
    /// Greenery coverage default (%).
    pub greenery_pct: u8,
    /// Stair width default (m).
    pub stair_width_m: f64,
    /// Target noise level default (dB).
    pub noise_db: u32,
    /// Wood material coverage default (%).
    pub wood_pct: u8,
    /// Preferred style.
    #[serde(default)]
    pub style_hint: StyleHint,
}

impl Settings {
    /// Returns the path to the settings file.
    ///
    /// Creates the config directory if it doesn't exist.
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "well-redesign").map(|dirs| {
            let config_dir = dirs.config_dir();
            if !config_dir.exists() {
                let _ = fs::create_dir_all(config_dir);
            }
            config_dir.join("settings.json")
        })
    }

    /// Loads settings from disk, falling back to defaults if absent or corrupt.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(&path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Persists settings to disk.
    ///
    /// # Errors
    /// Returns an error if serialization or file writing fails.
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            let json = serde_json::to_string_pretty(self)?;
            fs::write(path, json)?;
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lux: 500,
            greenery_pct: 25,
            stair_width_m: 1.5,
            noise_db: 40,
            wood_pct: 30,
            style_hint: StyleHint::None,
        }
    }
}
