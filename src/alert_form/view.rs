//! Render model of the alert configuration form

use crate::alerts::{NotificationChannel, ThresholdLevel};
use serde::Serialize;

/// Banner text after a successful save
pub const SUCCESS_MESSAGE: &str = "Configuration saved successfully!";
/// Submit label while a save is in flight
pub const SAVING_LABEL: &str = "Saving...";
/// Submit label when idle
pub const SUBMIT_LABEL: &str = "Save Configuration";

/// What the form renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "form", rename_all = "lowercase")]
pub enum FormView {
    /// No configuration yet; no controls are shown
    Loading,
    Ready(FormFields),
}

/// Numeric threshold input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdInput {
    #[serde(serialize_with = "serialize_display")]
    pub level: ThresholdLevel,
    pub label: &'static str,
    /// Text as typed, which may not be a valid number
    pub value: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub error: Option<String>,
}

/// Notification channel checkbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelCheckbox {
    #[serde(serialize_with = "serialize_display")]
    pub channel: NotificationChannel,
    pub label: &'static str,
    pub checked: bool,
}

/// Controls of a loaded form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormFields {
    pub thresholds: Vec<ThresholdInput>,
    pub channels: Vec<ChannelCheckbox>,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub success_message: Option<&'static str>,
    pub failure_message: Option<String>,
}

fn serialize_display<T: std::fmt::Display, S: serde::Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
