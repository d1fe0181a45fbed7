//! Value formatting for dashboard output

use chrono::{DateTime, Local, Utc};

/// Format a timestamp in the local timezone using the platform date-time representation
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%c").to_string()
}

/// Format an anomaly score with four decimals
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}
