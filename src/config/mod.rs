//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::alerts::SystemConfig;
use crate::dashboard::PresentOptions;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General settings
    pub general: GeneralConfig,
    /// Data locations
    pub data: DataConfig,
    /// Presentation settings
    pub ui: UiConfig,
}

/// General configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
    /// Snapshot refresh interval in seconds
    pub refresh_interval_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            refresh_interval_secs: 5,
        }
    }
}

/// Where dashboard data and the backend configuration live
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Snapshot JSON published by the backend; demo data when unset
    pub snapshot_path: Option<PathBuf>,
    /// Backend configuration TOML
    pub config_path: Option<PathBuf>,
}

impl DataConfig {
    /// Backend configuration path, falling back to the per-user default
    pub fn config_store_path(&self) -> PathBuf {
        self.config_path
            .clone()
            .unwrap_or_else(SystemConfig::default_path)
    }
}

/// Presentation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Rows in the recent alerts table
    pub recent_alerts_limit: usize,
    /// How long the save confirmation stays visible, in milliseconds
    pub save_banner_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            recent_alerts_limit: crate::dashboard::DEFAULT_RECENT_LIMIT,
            save_banner_ms: 3000,
        }
    }
}

impl AppConfig {
    /// Check values that have no sensible zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.refresh_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "general.refresh_interval_secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.ui.recent_alerts_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ui.recent_alerts_limit".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Presenter options derived from the UI settings
    pub fn present_options(&self) -> PresentOptions {
        PresentOptions {
            recent_limit: self.ui.recent_alerts_limit,
        }
    }

    /// Success banner lifetime
    pub fn banner_delay(&self) -> Duration {
        Duration::from_millis(self.ui.save_banner_ms)
    }

    /// Snapshot refresh interval
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.general.refresh_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.general.refresh_interval_secs, 5);
        assert_eq!(config.ui.recent_alerts_limit, 5);
        assert_eq!(config.banner_delay(), Duration::from_millis(3000));
        assert!(config.data.snapshot_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [data]
            snapshot_path = "/var/lib/flowsentry/snapshot.json"

            [ui]
            recent_alerts_limit = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.present_options().recent_limit, 10);
        assert_eq!(config.ui.save_banner_ms, 3000);
        assert_eq!(
            config.data.snapshot_path,
            Some(PathBuf::from("/var/lib/flowsentry/snapshot.json"))
        );
    }

    #[test]
    fn test_validate_rejects_zero() {
        let mut config = AppConfig::default();
        config.general.refresh_interval_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_config_store_path_override() {
        let data = DataConfig {
            config_path: Some(PathBuf::from("/tmp/backend.toml")),
            ..Default::default()
        };
        assert_eq!(data.config_store_path(), PathBuf::from("/tmp/backend.toml"));
    }
}
