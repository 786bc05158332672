//! Configuration loading for Stadia.
//!
//! The config file is optional TOML at `~/.stadia/config.toml`:
//!
//! ```toml
//! [app]
//! history_window = 6
//! high_contrast = true
//!
//! [[preset]]
//! label = "1x-0.0378"
//! value = "0.0378"
//! ```
//!
//! A `[[preset]]` table, when present, replaces the built-in calibration
//! constants wholesale. Preset values are decimal strings; a malformed
//! value fails the whole load with a parse error rather than being
//! silently dropped.

use std::path::{Path, PathBuf};
use std::{env, fs};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use stadia_types::{PresetConstant, UiOptions};

use crate::presets::default_presets;

/// Default number of history entries shown at once.
pub const DEFAULT_HISTORY_WINDOW: usize = 4;

#[derive(Debug, Default, Deserialize)]
pub struct StadiaConfig {
    pub app: Option<AppConfig>,
    /// Preset table override; replaces the built-in constants when present.
    #[serde(default, rename = "preset")]
    pub presets: Vec<PresetEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// History entries shown at once in the history pane.
    pub history_window: Option<usize>,
    /// Use ASCII-only glyphs for icons and keypad symbols.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

/// One `[[preset]]` entry. The value deserializes from a decimal string.
#[derive(Debug, Clone, Deserialize)]
pub struct PresetEntry {
    pub label: String,
    pub value: Decimal,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl StadiaConfig {
    /// `~/.stadia/config.toml`, overridable via `STADIA_CONFIG`.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        if let Ok(custom) = env::var("STADIA_CONFIG") {
            return Some(PathBuf::from(custom));
        }
        dirs::home_dir().map(|home| home.join(".stadia").join("config.toml"))
    }

    /// Load the config file. `Ok(None)` when no file exists; absence is
    /// not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(None);
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(config))
    }

    /// The effective preset table.
    #[must_use]
    pub fn resolve_presets(&self) -> Vec<PresetConstant> {
        if self.presets.is_empty() {
            default_presets()
        } else {
            self.presets
                .iter()
                .map(|entry| PresetConstant::new(entry.label.clone(), entry.value))
                .collect()
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only),
            high_contrast: app.is_some_and(|a| a.high_contrast),
        }
    }

    #[must_use]
    pub fn history_window(&self) -> usize {
        self.app
            .as_ref()
            .and_then(|a| a.history_window)
            .unwrap_or(DEFAULT_HISTORY_WINDOW)
            .max(1)
    }
}
