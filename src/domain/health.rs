//! Backend health domain types
//!
//! Provides the health probe result and the real-time channel status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status string reported by a healthy backend
pub const HEALTHY: &str = "healthy";

/// Result of the backend health probe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    /// Free-form status reported by the backend (e.g. "healthy", "degraded")
    pub status: String,
    /// Whether the detection model is loaded
    pub model_loaded: bool,
}

impl HealthStatus {
    /// Create a new health status
    pub fn new(status: impl Into<String>, model_loaded: bool) -> Self {
        Self {
            status: status.into(),
            model_loaded,
        }
    }

    /// Check if the backend reports itself healthy
    pub fn is_healthy(&self) -> bool {
        self.status == HEALTHY
    }

    /// Status text for display, "Unknown" when the backend sent nothing
    pub fn display_status(&self) -> &str {
        if self.status.is_empty() {
            "Unknown"
        } else {
            &self.status
        }
    }
}

/// Liveness of the real-time data channel between console and backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionStatus(String);

impl ConnectionStatus {
    /// Channel is up
    pub const CONNECTED: &'static str = "connected";

    /// Create a connection status from the raw label
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Connected status
    pub fn connected() -> Self {
        Self::new(Self::CONNECTED)
    }

    /// Disconnected status
    pub fn disconnected() -> Self {
        Self::new("disconnected")
    }

    /// Check if the channel is connected
    pub fn is_connected(&self) -> bool {
        self.0 == Self::CONNECTED
    }

    /// Raw label
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
