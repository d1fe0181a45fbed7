//! GUI configuration service
//!
//! Persistent user preferences, kept apart from the application config.

use crate::message::View;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// GUI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GuiConfig {
    /// UI preferences
    pub preferences: Preferences,
}

/// UI preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// Sidebar expanded by default
    pub sidebar_expanded: bool,

    /// View shown at startup
    pub start_view: View,

    /// Snapshot refresh override in seconds (0 keeps the app config value)
    pub refresh_interval_secs: u64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sidebar_expanded: true,
            start_view: View::Dashboard,
            refresh_interval_secs: 0,
        }
    }
}

impl GuiConfig {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        let config_dir = directories::ProjectDirs::from("", "", "flowsentry")
            .map(|d| d.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".config/flowsentry"));

        config_dir.join("gui.yaml")
    }

    /// Load config from a path, falling back to defaults
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No GUI config found at {:?}, using defaults", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded GUI config from {:?}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse GUI config: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read GUI config: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save config to a path
    pub fn save_to_path(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content).map_err(|e| format!("Failed to write config: {}", e))?;

        log::info!("Saved GUI config to {:?}", path);
        Ok(())
    }
}
