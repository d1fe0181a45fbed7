//! Display styles derived from data

use serde::Serialize;

/// Visual style of a severity badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityStyle {
    High,
    Medium,
    Low,
    Default,
}

/// Map a severity label to its badge style
///
/// Total and case-insensitive: any label that is not a known severity gets
/// [`SeverityStyle::Default`].
pub fn severity_style(severity: &str) -> SeverityStyle {
    match severity.to_lowercase().as_str() {
        "high" => SeverityStyle::High,
        "medium" => SeverityStyle::Medium,
        "low" => SeverityStyle::Low,
        _ => SeverityStyle::Default,
    }
}

/// Accent of a summary card value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Neutral,
    Good,
    Warning,
    Danger,
}
