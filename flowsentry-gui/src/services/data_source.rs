//! Snapshot and configuration store wiring

use crate::Args;
use flowsentry::alerts::{ConfigSink, FileConfigStore, MemoryConfigStore};
use flowsentry::config::{AppConfig, ConfigBuilder};
use flowsentry::provider::{self, DemoProvider, SnapshotProvider};
use std::path::PathBuf;
use std::sync::Arc;

/// Where the dashboard reads from and the alert form saves to
pub struct DataSources {
    pub provider: Box<dyn SnapshotProvider>,
    pub sink: Arc<dyn ConfigSink>,
    /// Backing file of the store, `None` for the in-memory store
    pub store_path: Option<PathBuf>,
    /// Dashboard shows generated data
    pub demo: bool,
}

impl std::fmt::Debug for DataSources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataSources")
            .field("provider", &self.provider.name())
            .field("sink", &self.sink.name())
            .field("store_path", &self.store_path)
            .field("demo", &self.demo)
            .finish()
    }
}

/// Merge the config file with command-line and preference overrides
///
/// A zero `refresh_secs` keeps the interval from the config file.
pub fn load_app_config(args: &Args, refresh_secs: u64) -> AppConfig {
    ConfigBuilder::new()
        .with_file(args.config.as_deref())
        .with_snapshot_path(args.snapshot.clone())
        .with_store_path(args.store.clone())
        .with_refresh_interval(Some(refresh_secs))
        .build()
}

/// Build the provider and store for this run
pub fn connect(config: &AppConfig, demo: bool) -> DataSources {
    if demo {
        log::info!("Demo mode: generated alerts and an in-memory store");
        return DataSources {
            provider: Box::new(DemoProvider::new()),
            sink: Arc::new(MemoryConfigStore::default()),
            store_path: None,
            demo: true,
        };
    }

    let store_path = config.data.config_store_path();
    log::info!("Alert configuration store: {}", store_path.display());

    DataSources {
        provider: provider::from_config(config),
        sink: Arc::new(FileConfigStore::new(&store_path)),
        store_path: Some(store_path),
        demo: config.data.snapshot_path.is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_uses_memory_store() {
        let sources = connect(&AppConfig::default(), true);
        assert!(sources.demo);
        assert_eq!(sources.sink.name(), "memory");
        assert!(sources.store_path.is_none());
    }

    #[test]
    fn test_snapshot_file_uses_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.data.snapshot_path = Some(dir.path().join("snapshot.json"));
        config.data.config_path = Some(dir.path().join("backend.toml"));

        let sources = connect(&config, false);
        assert!(!sources.demo);
        assert_eq!(sources.sink.name(), "file");
        assert_eq!(sources.store_path, Some(dir.path().join("backend.toml")));
    }

    #[test]
    fn test_args_override_config() {
        let args = Args {
            snapshot: Some(PathBuf::from("/tmp/snapshot.json")),
            store: Some(PathBuf::from("/tmp/backend.toml")),
            ..Default::default()
        };
        let config = load_app_config(&args, 12);
        assert_eq!(config.general.refresh_interval_secs, 12);
        assert_eq!(
            config.data.snapshot_path,
            Some(PathBuf::from("/tmp/snapshot.json"))
        );
        assert_eq!(
            config.data.config_store_path(),
            PathBuf::from("/tmp/backend.toml")
        );
    }
}
