//! Dashboard snapshot providers
//!
//! Provides trait-based sources for the dashboard context.

pub mod demo;
pub mod file;
pub mod traits;

pub use demo::DemoProvider;
pub use file::FileSnapshotProvider;
pub use traits::SnapshotProvider;

use crate::config::AppConfig;

/// Pick the snapshot source for a configuration
///
/// A configured snapshot file is always used, even when it cannot be read,
/// so read failures surface as the dashboard error state. Without one the
/// demo provider is used.
pub fn from_config(config: &AppConfig) -> Box<dyn SnapshotProvider> {
    match &config.data.snapshot_path {
        Some(path) => {
            log::debug!("Using snapshot file {}", path.display());
            Box::new(FileSnapshotProvider::new(path))
        }
        None => {
            log::info!("No snapshot file configured, showing demo data");
            Box::new(DemoProvider::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_config_defaults_to_demo() {
        let provider = from_config(&AppConfig::default());
        assert_eq!(provider.name(), "demo");
    }

    #[test]
    fn test_from_config_uses_snapshot_file() {
        let mut config = AppConfig::default();
        config.data.snapshot_path = Some(PathBuf::from("/nonexistent/snapshot.json"));

        let provider = from_config(&config);
        assert_eq!(provider.name(), "file");
        assert!(provider.context().error.is_some());
    }
}
