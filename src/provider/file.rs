//! JSON snapshot file provider

use super::traits::SnapshotProvider;
use crate::context::DashboardContext;
use crate::error::ProviderError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads the snapshot the backend publishes as a JSON file
#[derive(Debug, Clone)]
pub struct FileSnapshotProvider {
    path: PathBuf,
}

impl FileSnapshotProvider {
    /// Create a provider for the given snapshot file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotProvider for FileSnapshotProvider {
    fn name(&self) -> &str {
        "file"
    }

    fn snapshot(&self) -> Result<DashboardContext, ProviderError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProviderError::NotFound(self.path.display().to_string()),
            _ => ProviderError::Read(format!("{}: {}", self.path.display(), e)),
        })?;

        let ctx: DashboardContext = serde_json::from_str(&contents)?;
        log::debug!(
            "Read snapshot from {} ({} alerts)",
            self.path.display(),
            ctx.alerts.len()
        );
        Ok(ctx)
    }
}
