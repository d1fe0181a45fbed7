//! Alerts and alert configuration
//!
//! Alert records raised by the backend, the editable alert configuration
//! and the stores it is loaded from and saved to.

mod config;
mod store;
mod types;

pub use config::{
    AlertPatch, AlertsSection, NotificationChannel, NotificationSettings, SystemConfig,
    ThresholdLevel, Thresholds, DEFAULT_HIGH, DEFAULT_LOW, DEFAULT_MEDIUM,
};
pub use store::{ConfigSink, FileConfigStore, MemoryConfigStore};
pub use types::{Alert, Severity};
