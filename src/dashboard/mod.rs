//! Dashboard presenter
//!
//! Derives everything the dashboard shows from a [`DashboardContext`]. The
//! presenter is a pure function: it performs no fetching, keeps no state and
//! never reorders or filters alerts, it only truncates.

pub mod format;
pub mod style;

pub use format::{format_score, format_timestamp};
pub use style::{severity_style, SeverityStyle, Tone};

use crate::alerts::Alert;
use crate::context::DashboardContext;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Default number of rows in the recent alerts table
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Placeholder shown instead of an empty alerts table
pub const NO_ALERTS_PLACEHOLDER: &str = "No alerts detected yet";

/// Presenter options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentOptions {
    /// Rows kept in the recent alerts table
    pub recent_limit: usize,
}

impl Default for PresentOptions {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

/// What the dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum DashboardView {
    /// Data has not arrived yet
    Loading,
    /// Fetch failed; only the message is shown
    Error(String),
    /// Full summary
    Ready(DashboardSummary),
}

/// Boolean status light with its caption
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusIndicator {
    pub label: &'static str,
    pub value: String,
    pub ok: bool,
}

/// Summary card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub tone: Tone,
}

/// One point of the anomaly score trend
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub timestamp: DateTime<Utc>,
    pub score: f64,
}

/// Formatted alert table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertRow {
    pub alert_id: String,
    pub severity: String,
    pub style: SeverityStyle,
    pub timestamp: String,
    pub score: String,
    pub description: String,
}

impl AlertRow {
    /// Format an alert for display
    pub fn from_alert(alert: &Alert) -> Self {
        let severity = alert.severity.label().to_string();
        Self {
            alert_id: alert.alert_id.clone(),
            style: severity_style(&severity),
            severity,
            timestamp: format_timestamp(&alert.timestamp),
            score: format_score(alert.anomaly_score),
            description: alert.description.clone(),
        }
    }
}

/// Recent alerts section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "lowercase")]
pub enum RecentAlerts {
    /// No alerts at all; render [`NO_ALERTS_PLACEHOLDER`]
    Empty,
    /// Non-empty table rows
    Rows(Vec<AlertRow>),
}

impl RecentAlerts {
    /// Rows, empty when the placeholder is shown
    pub fn rows(&self) -> &[AlertRow] {
        match self {
            Self::Empty => &[],
            Self::Rows(rows) => rows,
        }
    }
}

/// Everything the ready dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub system: StatusIndicator,
    pub connection: StatusIndicator,
    pub cards: [StatCard; 4],
    /// Anomaly scores, oldest first
    pub trend: Vec<TrendPoint>,
    pub recent_alerts: RecentAlerts,
}

/// Format every alert in input order
pub fn alert_rows(alerts: &[Alert]) -> Vec<AlertRow> {
    alerts.iter().map(AlertRow::from_alert).collect()
}

/// Derive the dashboard view from a context
pub fn present(ctx: &DashboardContext, opts: &PresentOptions) -> DashboardView {
    if ctx.is_loading {
        return DashboardView::Loading;
    }
    if let Some(error) = ctx.error_message() {
        return DashboardView::Error(error.to_string());
    }

    let health = &ctx.health_status;
    let stats = &ctx.statistics;

    let system = StatusIndicator {
        label: "Status",
        value: health.display_status().to_string(),
        ok: health.is_healthy(),
    };
    let connection = StatusIndicator {
        label: "Connection",
        value: ctx.connection_status.to_string(),
        ok: ctx.connection_status.is_connected(),
    };

    let cards = [
        StatCard {
            title: "Total Flows Processed",
            value: stats.total_flows.to_string(),
            tone: Tone::Neutral,
        },
        StatCard {
            title: "Total Alerts",
            value: stats.total_alerts.to_string(),
            tone: Tone::Warning,
        },
        StatCard {
            title: "High Severity Alerts",
            value: stats.high_severity_count.to_string(),
            tone: Tone::Danger,
        },
        StatCard {
            title: "Model Status",
            value: if health.model_loaded { "Active" } else { "Inactive" }.to_string(),
            tone: if health.model_loaded {
                Tone::Good
            } else {
                Tone::Danger
            },
        },
    ];

    let trend = ctx
        .alerts
        .iter()
        .rev()
        .map(|a| TrendPoint {
            timestamp: a.timestamp,
            score: a.anomaly_score,
        })
        .collect();

    let recent: Vec<AlertRow> = ctx
        .alerts
        .iter()
        .take(opts.recent_limit)
        .map(AlertRow::from_alert)
        .collect();
    let recent_alerts = if recent.is_empty() {
        RecentAlerts::Empty
    } else {
        RecentAlerts::Rows(recent)
    };

    DashboardView::Ready(DashboardSummary {
        system,
        connection,
        cards,
        trend,
        recent_alerts,
    })
}
