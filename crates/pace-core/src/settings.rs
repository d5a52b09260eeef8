use std::{fs, path::Path};

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    config,
    pacing::Mode,
    profile::{EngineConfig, ProfileKind},
};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Settings serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("No config directory available")]
    NoConfigDir,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub wpm: f64,
    pub mode: Mode,
    pub profile: ProfileKind,
    pub transition_delay_ms: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wpm: 200.0,
            mode: Mode::Horizontal,
            profile: ProfileKind::Terminal,
            transition_delay_ms: 80.0,
        }
    }
}

impl Settings {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::for_kind(self.profile).with_transition_delay(self.transition_delay_ms)
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Loads from the user config dir, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = config::settings_path() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                warn!("ignoring settings at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        let path = config::settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }
}
