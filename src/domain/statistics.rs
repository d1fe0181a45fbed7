//! Aggregated traffic and alert counters

use serde::{Deserialize, Serialize};

/// Counters aggregated by the backend since it started
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Statistics {
    /// Number of flows scored by the model
    pub total_flows: u64,
    /// Number of alerts raised
    pub total_alerts: u64,
    /// Number of alerts classified as high severity
    pub high_severity_count: u64,
}

impl Statistics {
    /// Create a new set of counters
    pub fn new(total_flows: u64, total_alerts: u64, high_severity_count: u64) -> Self {
        Self {
            total_flows,
            total_alerts,
            high_severity_count,
        }
    }
}
