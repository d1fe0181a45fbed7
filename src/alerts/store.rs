//! Configuration stores
//!
//! A [`ConfigSink`] is the place the alert form loads the full backend
//! configuration from and saves it back to. The file store plays the role
//! of the backend: it validates what it receives and refuses bad payloads.

use super::config::{SystemConfig, ThresholdLevel, Thresholds};
use crate::error::SaveError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Destination for the backend configuration
#[async_trait]
pub trait ConfigSink: Send + Sync {
    /// Store name for logs
    fn name(&self) -> &str;

    /// Fetch the current full configuration
    async fn load(&self) -> Result<SystemConfig, SaveError>;

    /// Replace the stored configuration with `config`
    async fn save(&self, config: SystemConfig) -> Result<(), SaveError>;
}

/// Server-side checks applied before a configuration is accepted
fn accept(config: &SystemConfig) -> Result<(), SaveError> {
    let thresholds: Thresholds = config.thresholds();
    for level in ThresholdLevel::ALL {
        let value = thresholds.get(level);
        if !(0.0..=1.0).contains(&value) {
            return Err(SaveError::Rejected(format!(
                "threshold {} out of range: {}",
                level, value
            )));
        }
    }
    thresholds
        .check_order()
        .map_err(|e| SaveError::Rejected(e.to_string()))
}

/// TOML file backed store
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// Create a store for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigSink for FileConfigStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn load(&self) -> Result<SystemConfig, SaveError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!(
                    "No configuration at {}, starting from defaults",
                    self.path.display()
                );
                return Ok(SystemConfig::default());
            }
            Err(e) => {
                return Err(SaveError::Storage(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        SystemConfig::from_toml_str(&contents)
            .map_err(|e| SaveError::Storage(format!("{}: {}", self.path.display(), e)))
    }

    async fn save(&self, config: SystemConfig) -> Result<(), SaveError> {
        accept(&config)?;

        let contents = config
            .to_toml_string()
            .map_err(|e| SaveError::Storage(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SaveError::Storage(format!("{}: {}", parent.display(), e)))?;
        }

        // Write then rename so readers never see a half-written file
        let tmp = self.path.with_extension("toml.tmp");
        tokio::fs::write(&tmp, contents)
            .await
            .map_err(|e| SaveError::Storage(format!("{}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| SaveError::Storage(format!("{}: {}", self.path.display(), e)))?;

        log::info!("Saved configuration to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    config: Mutex<SystemConfig>,
}

impl MemoryConfigStore {
    /// Create a store holding `config`
    pub fn new(config: SystemConfig) -> Self {
        Self {
            config: Mutex::new(config),
        }
    }

    /// Copy of the stored configuration
    pub async fn current(&self) -> SystemConfig {
        self.config.lock().await.clone()
    }
}

#[async_trait]
impl ConfigSink for MemoryConfigStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn load(&self) -> Result<SystemConfig, SaveError> {
        Ok(self.current().await)
    }

    async fn save(&self, config: SystemConfig) -> Result<(), SaveError> {
        accept(&config)?;
        *self.config.lock().await = config;
        Ok(())
    }
}
