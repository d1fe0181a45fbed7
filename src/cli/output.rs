//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::alerts::{NotificationSettings, Thresholds};
use crate::cli::args::OutputFormat;
use crate::dashboard::{AlertRow, DashboardView, NO_ALERTS_PLACEHOLDER};
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

fn light(ok: bool) -> char {
    if ok {
        '●'
    } else {
        '○'
    }
}

impl TableDisplay for DashboardView {
    fn to_table(&self) -> String {
        let summary = match self {
            DashboardView::Loading => return "Loading dashboard data...".to_string(),
            DashboardView::Error(message) => return format!("Error: {}", message),
            DashboardView::Ready(summary) => summary,
        };

        let mut output = String::from("System Status\n");
        for indicator in [&summary.system, &summary.connection] {
            output.push_str(&format!(
                "  {} {}: {}\n",
                light(indicator.ok),
                indicator.label,
                indicator.value
            ));
        }

        output.push('\n');
        for card in &summary.cards {
            output.push_str(&format!("  {:<24} {}\n", card.title, card.value));
        }

        let latest = summary.trend.last().map(|p| p.score);
        let peak = summary
            .trend
            .iter()
            .map(|p| p.score)
            .fold(None, |acc: Option<f64>, s| Some(acc.map_or(s, |a| a.max(s))));
        if let (Some(latest), Some(peak)) = (latest, peak) {
            output.push_str(&format!(
                "\nAnomaly Score Trend: {} points, latest {:.4}, peak {:.4}\n",
                summary.trend.len(),
                latest,
                peak
            ));
        }

        output.push_str("\nRecent Alerts\n");
        output.push_str(&alert_table(summary.recent_alerts.rows()));
        output
    }

    fn to_compact(&self) -> String {
        match self {
            DashboardView::Loading => "loading".to_string(),
            DashboardView::Error(message) => format!("error: {}", message),
            DashboardView::Ready(summary) => {
                let cards = summary
                    .cards
                    .iter()
                    .map(|c| format!("{}={}", c.title, c.value))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "status={} connection={} {}",
                    summary.system.value, summary.connection.value, cards
                )
            }
        }
    }
}

/// Render alert rows as a table, or the placeholder when there are none
fn alert_table(rows: &[AlertRow]) -> String {
    if rows.is_empty() {
        return format!("  {}\n", NO_ALERTS_PLACEHOLDER);
    }

    let ts_width = rows
        .iter()
        .map(|r| r.timestamp.chars().count())
        .max()
        .unwrap_or(0)
        .max("TIMESTAMP".len());

    let mut output = format!(
        "  {:<10} {:<ts_width$} {:<8} DESCRIPTION\n",
        "SEVERITY",
        "TIMESTAMP",
        "SCORE",
        ts_width = ts_width
    );
    for row in rows {
        output.push_str(&format!(
            "  {:<10} {:<ts_width$} {:<8} {}\n",
            row.severity.to_uppercase(),
            row.timestamp,
            row.score,
            row.description,
            ts_width = ts_width
        ));
    }
    output
}

/// Alert listing for display
#[derive(Debug, Clone, Serialize)]
pub struct AlertList {
    /// Alerts in the snapshot
    pub total: usize,
    pub alerts: Vec<AlertRow>,
}

impl TableDisplay for AlertList {
    fn to_table(&self) -> String {
        let mut output = format!("Showing {} of {} alerts\n", self.alerts.len(), self.total);
        output.push_str(&alert_table(&self.alerts));
        output
    }

    fn to_compact(&self) -> String {
        if self.alerts.is_empty() {
            return NO_ALERTS_PLACEHOLDER.to_string();
        }
        self.alerts
            .iter()
            .map(|a| format!("{}:{}:{}", a.alert_id, a.severity, a.score))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Alert settings for display
#[derive(Debug, Clone, Serialize)]
pub struct AlertSettings {
    pub path: String,
    pub thresholds: Thresholds,
    pub notifications: NotificationSettings,
}

impl TableDisplay for AlertSettings {
    fn to_table(&self) -> String {
        let on_off = |enabled: bool| if enabled { "on" } else { "off" };
        format!(
            "Alert Configuration ({})\n\
             \n\
             Anomaly Score Thresholds\n  Low:    {}\n  Medium: {}\n  High:   {}\n\
             \n\
             Notification Channels\n  Email:   {}\n  Slack:   {}\n  Webhook: {}",
            self.path,
            self.thresholds.low,
            self.thresholds.medium,
            self.thresholds.high,
            on_off(self.notifications.email),
            on_off(self.notifications.slack),
            on_off(self.notifications.webhook),
        )
    }

    fn to_compact(&self) -> String {
        let channels = self
            .notifications
            .enabled()
            .iter()
            .map(|c| c.key())
            .collect::<Vec<_>>()
            .join("+");
        format!(
            "low={} medium={} high={} channels={}",
            self.thresholds.low,
            self.thresholds.medium,
            self.thresholds.high,
            if channels.is_empty() { "none" } else { channels.as_str() }
        )
    }
}

/// Simple message output
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message: String,
    pub success: bool,
}

impl TableDisplay for Message {
    fn to_table(&self) -> String {
        if self.success {
            format!("✓ {}", self.message)
        } else {
            format!("✗ {}", self.message)
        }
    }
}
