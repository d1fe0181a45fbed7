//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{AppConfig, ConfigFile};
use std::path::PathBuf;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Load configuration from a file
    pub fn with_file(mut self, path: Option<&str>) -> Self {
        let file_config = if let Some(path) = path {
            match ConfigFile::load(path) {
                Ok(cfg) => Some(cfg),
                Err(e) => {
                    log::warn!("Ignoring config file {}: {}", path, e);
                    None
                }
            }
        } else {
            ConfigFile::load_default()
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        self
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override with CLI snapshot path
    pub fn with_snapshot_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.config.data.snapshot_path = Some(p);
        }
        self
    }

    /// Override with CLI config store path
    pub fn with_store_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.config.data.config_path = Some(p);
        }
        self
    }

    /// Override the refresh interval
    pub fn with_refresh_interval(mut self, secs: Option<u64>) -> Self {
        if let Some(s) = secs.filter(|s| *s > 0) {
            self.config.general.refresh_interval_secs = s;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build();
        assert!(!config.general.verbose);
        assert!(config.data.config_path.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .with_verbose(Some(true))
            .with_snapshot_path(Some(PathBuf::from("snap.json")))
            .with_store_path(Some(PathBuf::from("backend.toml")))
            .with_refresh_interval(Some(0))
            .build();

        assert!(config.general.verbose);
        assert_eq!(config.data.snapshot_path, Some(PathBuf::from("snap.json")));
        assert_eq!(config.data.config_path, Some(PathBuf::from("backend.toml")));
        assert_eq!(config.general.refresh_interval_secs, 5);
    }

    #[test]
    fn test_builder_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nsave_banner_ms = 1500\n").unwrap();

        let config = ConfigBuilder::new()
            .with_file(path.to_str())
            .with_verbose(None)
            .build();
        assert_eq!(config.ui.save_banner_ms, 1500);
    }
}
