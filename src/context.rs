//! Read-only dashboard context
//!
//! The snapshot the dashboard renders from. It is produced by a
//! [`SnapshotProvider`](crate::provider::SnapshotProvider) and never mutated
//! by the presenter.

use crate::alerts::Alert;
use crate::domain::{ConnectionStatus, HealthStatus, Statistics};
use serde::{Deserialize, Serialize};

/// Snapshot of everything the dashboard shows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardContext {
    pub health_status: HealthStatus,
    pub statistics: Statistics,
    /// Alerts in the order the backend published them, most recent first
    pub alerts: Vec<Alert>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub connection_status: ConnectionStatus,
}

impl DashboardContext {
    /// Context for a fetch that has not completed yet
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Default::default()
        }
    }

    /// Context for a failed fetch
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }

    /// Context with data
    pub fn ready(
        health_status: HealthStatus,
        statistics: Statistics,
        alerts: Vec<Alert>,
        connection_status: ConnectionStatus,
    ) -> Self {
        Self {
            health_status,
            statistics,
            alerts,
            is_loading: false,
            error: None,
            connection_status,
        }
    }

    /// Fetch failure, if any; an empty message counts as none
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}
