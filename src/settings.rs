//! Settings file
//!
//! Optional TOML file read at startup. Command-line flags override it.
//!
//! ```toml
//! target = "GLITCH"
//! max_guesses = 6
//! wordlist = "/path/to/words.txt"
//! notice_ms = 2500
//! tick_ms = 250
//! ```

use crate::game::{DEFAULT_MAX_GUESSES, DEFAULT_TARGET};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid settings: {message}")]
    Invalid { message: String },
}

/// Front-end settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Word to guess
    pub target: String,
    /// Guesses allowed before the game is lost
    pub max_guesses: usize,
    /// Custom dictionary, one word per line; the embedded list otherwise
    pub wordlist: Option<PathBuf>,
    /// How long an alert stays on screen
    pub notice_ms: u64,
    /// Redraw interval of the interactive screen
    pub tick_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            max_guesses: DEFAULT_MAX_GUESSES,
            wordlist: None,
            notice_ms: 2500,
            tick_ms: 250,
        }
    }
}

impl Settings {
    /// Default location: `<config dir>/glitch-wordle/config.toml`
    #[must_use]
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("glitch-wordle").join("config.toml")
    }

    /// Load settings
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// path is tried and a missing file yields `Settings::default()`.
    ///
    /// # Errors
    /// Returns `SettingsError` if reading, parsing or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and validate a specific file
    ///
    /// # Errors
    /// Returns `SettingsError` if reading, parsing or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let settings: Self = toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns `SettingsError::Invalid` for zero guesses or zero durations.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_guesses == 0 {
            return Err(SettingsError::Invalid {
                message: "max_guesses must be at least 1".to_string(),
            });
        }
        if self.notice_ms == 0 || self.tick_ms == 0 {
            return Err(SettingsError::Invalid {
                message: "notice_ms and tick_ms must be positive".to_string(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }

    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
