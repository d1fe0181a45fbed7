//! Mock implementations for testing
//!
//! Provides a scripted snapshot provider and a recording configuration sink
//! for exercising the dashboard and the alert form without a backend.

use crate::alerts::{ConfigSink, SystemConfig};
use crate::context::DashboardContext;
use crate::error::{ProviderError, SaveError};
use crate::provider::SnapshotProvider;

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock snapshot provider returning a scripted context
#[derive(Debug)]
pub struct MockProvider {
    context: Mutex<Result<DashboardContext, String>>,
    calls: AtomicUsize,
}

impl MockProvider {
    /// Create a provider that always returns `context`
    pub fn new(context: DashboardContext) -> Self {
        Self {
            context: Mutex::new(Ok(context)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a provider whose reads fail with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            context: Mutex::new(Err(message.into())),
            calls: AtomicUsize::new(0),
        }
    }

    /// Replace the scripted context
    pub fn set_context(&self, context: DashboardContext) {
        *self.context.lock().unwrap() = Ok(context);
    }

    /// Number of snapshots taken so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SnapshotProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn snapshot(&self) -> Result<DashboardContext, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.context
            .lock()
            .unwrap()
            .clone()
            .map_err(ProviderError::Read)
    }
}

/// Mock sink that records every save and answers with a scripted result
#[derive(Debug)]
pub struct RecordingSink {
    stored: Mutex<SystemConfig>,
    saved: Mutex<Vec<SystemConfig>>,
    result: Mutex<Result<(), SaveError>>,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSink {
    /// Create a sink that accepts every save
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    /// Create a sink that accepts every save and initially holds `config`
    pub fn with_config(config: SystemConfig) -> Self {
        Self {
            stored: Mutex::new(config),
            saved: Mutex::new(Vec::new()),
            result: Mutex::new(Ok(())),
        }
    }

    /// Create a sink that fails every save with `error`
    pub fn failing(error: SaveError) -> Self {
        let sink = Self::new();
        sink.set_result(Err(error));
        sink
    }

    /// Script the result of subsequent saves
    pub fn set_result(&self, result: Result<(), SaveError>) {
        *self.result.lock().unwrap() = result;
    }

    /// Every configuration received, oldest first
    pub fn saved(&self) -> Vec<SystemConfig> {
        self.saved.lock().unwrap().clone()
    }

    /// Most recent configuration received
    pub fn last_saved(&self) -> Option<SystemConfig> {
        self.saved.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ConfigSink for RecordingSink {
    fn name(&self) -> &str {
        "recording"
    }

    async fn load(&self) -> Result<SystemConfig, SaveError> {
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save(&self, config: SystemConfig) -> Result<(), SaveError> {
        self.saved.lock().unwrap().push(config.clone());
        let result = self.result.lock().unwrap().clone();
        if result.is_ok() {
            *self.stored.lock().unwrap() = config;
        }
        result
    }
}
