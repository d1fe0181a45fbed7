//! Alert domain types
//!
//! Defines the alert records raised by the detection backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Alert severity levels
///
/// Parsed case-insensitively. Labels the console does not know about are
/// kept in [`Severity::Other`] instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    /// Low anomaly score band
    Low,
    /// Medium anomaly score band
    Medium,
    /// High anomaly score band
    High,
    /// Any other label sent by the backend, verbatim
    Other(String),
}

impl Severity {
    /// Parse a severity label (case-insensitive, never fails)
    pub fn parse(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Other(label.to_string()),
        }
    }

    /// Label as shown in tables
    pub fn label(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Other(label) => label,
        }
    }

    /// Check if this is the high severity band
    pub fn is_high(&self) -> bool {
        matches!(self, Self::High)
    }
}

impl From<String> for Severity {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.label().to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Alert raised by the backend for an anomalous flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Unique alert ID
    pub alert_id: String,
    /// Severity band
    pub severity: Severity,
    /// When the anomalous flow was observed
    pub timestamp: DateTime<Utc>,
    /// Model-assessed abnormality in [0, 1]
    pub anomaly_score: f64,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
}

impl Alert {
    /// Create a new alert
    pub fn new(
        alert_id: impl Into<String>,
        severity: Severity,
        timestamp: DateTime<Utc>,
        anomaly_score: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            alert_id: alert_id.into(),
            severity,
            timestamp,
            anomaly_score,
            description: description.into(),
        }
    }
}
