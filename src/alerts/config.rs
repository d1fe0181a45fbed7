//! Alert configuration
//!
//! The backend configuration object and the two parts of it the console
//! edits: per-severity anomaly score thresholds and notification channels.
//! Everything else in the configuration is opaque and carried through
//! unchanged.

use crate::error::{ConfigError, DomainError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default low severity threshold
pub const DEFAULT_LOW: f64 = 0.3;
/// Default medium severity threshold
pub const DEFAULT_MEDIUM: f64 = 0.6;
/// Default high severity threshold
pub const DEFAULT_HIGH: f64 = 0.8;

/// Threshold level (one per severity band)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThresholdLevel {
    Low,
    Medium,
    High,
}

impl ThresholdLevel {
    /// All levels, lowest first
    pub const ALL: [ThresholdLevel; 3] = [Self::Low, Self::Medium, Self::High];

    /// Config key for this level
    pub fn key(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Form label for this level
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Severity (0.0 - 1.0)",
            Self::Medium => "Medium Severity (0.0 - 1.0)",
            Self::High => "High Severity (0.0 - 1.0)",
        }
    }
}

impl fmt::Display for ThresholdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ThresholdLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(DomainError::UnknownLevel(s.to_string())),
        }
    }
}

/// Anomaly score cutoffs per severity band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW,
            medium: DEFAULT_MEDIUM,
            high: DEFAULT_HIGH,
        }
    }
}

impl Thresholds {
    /// Get the cutoff for a level
    pub fn get(&self, level: ThresholdLevel) -> f64 {
        match level {
            ThresholdLevel::Low => self.low,
            ThresholdLevel::Medium => self.medium,
            ThresholdLevel::High => self.high,
        }
    }

    /// Set the cutoff for a level after validating it
    pub fn set(&mut self, level: ThresholdLevel, value: f64) -> std::result::Result<(), DomainError> {
        let value = Self::validate(level, value)?;
        match level {
            ThresholdLevel::Low => self.low = value,
            ThresholdLevel::Medium => self.medium = value,
            ThresholdLevel::High => self.high = value,
        }
        Ok(())
    }

    /// Parse raw input for a level; non-numeric and out-of-range input is rejected
    pub fn parse_input(level: ThresholdLevel, raw: &str) -> std::result::Result<f64, DomainError> {
        let value: f64 = raw.trim().parse().map_err(|_| DomainError::NotANumber {
            level: level.key().to_string(),
            input: raw.to_string(),
        })?;
        Self::validate(level, value)
    }

    fn validate(level: ThresholdLevel, value: f64) -> std::result::Result<f64, DomainError> {
        if value.is_nan() {
            return Err(DomainError::NotANumber {
                level: level.key().to_string(),
                input: value.to_string(),
            });
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(DomainError::ThresholdOutOfRange {
                level: level.key().to_string(),
                value,
            });
        }
        Ok(value)
    }

    /// Check that cutoffs do not decrease with severity
    pub fn check_order(&self) -> std::result::Result<(), DomainError> {
        if self.low <= self.medium && self.medium <= self.high {
            Ok(())
        } else {
            Err(DomainError::UnorderedThresholds {
                low: self.low,
                medium: self.medium,
                high: self.high,
            })
        }
    }
}

/// Notification channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationChannel {
    Email,
    Slack,
    Webhook,
}

impl NotificationChannel {
    /// All channels in display order
    pub const ALL: [NotificationChannel; 3] = [Self::Email, Self::Slack, Self::Webhook];

    /// Config key for this channel
    pub fn key(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Slack => "slack",
            Self::Webhook => "webhook",
        }
    }

    /// Checkbox label for this channel
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email Notifications",
            Self::Slack => "Slack Notifications",
            Self::Webhook => "Webhook Notifications",
        }
    }
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for NotificationChannel {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "slack" => Ok(Self::Slack),
            "webhook" => Ok(Self::Webhook),
            _ => Err(DomainError::UnknownChannel(s.to_string())),
        }
    }
}

/// Which notification channels are enabled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub email: bool,
    pub slack: bool,
    pub webhook: bool,
}

impl NotificationSettings {
    /// Check whether a channel is enabled
    pub fn is_enabled(&self, channel: NotificationChannel) -> bool {
        match channel {
            NotificationChannel::Email => self.email,
            NotificationChannel::Slack => self.slack,
            NotificationChannel::Webhook => self.webhook,
        }
    }

    /// Flip a single channel
    pub fn toggle(&mut self, channel: NotificationChannel) {
        let flag = match channel {
            NotificationChannel::Email => &mut self.email,
            NotificationChannel::Slack => &mut self.slack,
            NotificationChannel::Webhook => &mut self.webhook,
        };
        *flag = !*flag;
    }

    /// Enabled channels in display order
    pub fn enabled(&self) -> Vec<NotificationChannel> {
        NotificationChannel::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }
}

/// `alerts` section of the backend configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<NotificationSettings>,
    /// Alert keys the console does not own
    #[serde(flatten)]
    pub extra: toml::Table,
}

/// Full backend configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alerts: Option<AlertsSection>,
    /// Top-level keys the console does not own
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl SystemConfig {
    /// Configured thresholds, or the defaults when absent
    pub fn thresholds(&self) -> Thresholds {
        self.alerts
            .as_ref()
            .and_then(|a| a.thresholds)
            .unwrap_or_default()
    }

    /// Configured notification channels, or the defaults when absent
    pub fn notifications(&self) -> NotificationSettings {
        self.alerts
            .as_ref()
            .and_then(|a| a.notifications)
            .unwrap_or_default()
    }

    /// Parse from TOML text
    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> std::result::Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get default configuration path
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("flowsentry").join("backend.toml")
        } else {
            PathBuf::from("backend.toml")
        }
    }
}

/// The part of the configuration owned by the alert form
///
/// Applying a patch replaces `alerts.thresholds` and `alerts.notifications`
/// and nothing else; every other key, at the top level and inside `alerts`,
/// is copied from the base verbatim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertPatch {
    pub thresholds: Thresholds,
    pub notifications: NotificationSettings,
}

impl AlertPatch {
    /// Produce a new configuration with this patch applied to `base`
    pub fn apply(&self, base: &SystemConfig) -> SystemConfig {
        let mut patched = base.clone();
        let alerts = patched.alerts.get_or_insert_with(AlertsSection::default);
        alerts.thresholds = Some(self.thresholds);
        alerts.notifications = Some(self.notifications);
        patched
    }
}
