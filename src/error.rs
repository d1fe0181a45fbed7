//! Unified error types for flowsentry
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from domain type validation
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// Error while reading the dashboard snapshot
    #[error("Snapshot error: {0}")]
    Provider(#[from] ProviderError),

    /// Saving the alert configuration failed
    #[error("Save failed: {0}")]
    Save(#[from] SaveError),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Threshold input could not be parsed as a number
    #[error("Invalid threshold for {level}: '{input}' is not a number")]
    NotANumber { level: String, input: String },

    /// Threshold outside of the anomaly score range
    #[error("Invalid threshold for {level}: {value} (must be 0.0-1.0)")]
    ThresholdOutOfRange { level: String, value: f64 },

    /// Thresholds must not decrease with severity
    #[error("Thresholds must satisfy low <= medium <= high (got {low}, {medium}, {high})")]
    UnorderedThresholds { low: f64, medium: f64, high: f64 },

    /// Unknown threshold level name
    #[error("Unknown threshold level: {0}")]
    UnknownLevel(String),

    /// Unknown notification channel name
    #[error("Unknown notification channel: {0}")]
    UnknownChannel(String),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

/// Errors from dashboard snapshot providers
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Snapshot source does not exist
    #[error("Snapshot not found: {0}")]
    NotFound(String),

    /// Snapshot could not be read
    #[error("Failed to read snapshot: {0}")]
    Read(String),

    /// Snapshot content is malformed
    #[error("Malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Typed outcome of a failed configuration save
///
/// Distinguishes why a save did not go through so callers can give distinct
/// feedback instead of a silent "nothing happened".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SaveError {
    /// The backend refused the configuration
    #[error("rejected by backend: {0}")]
    Rejected(String),

    /// The backend could not be reached
    #[error("network failure: {0}")]
    Network(String),

    /// The edited values did not pass validation; nothing was sent
    #[error("validation failed: {0}")]
    Validation(String),

    /// The configuration store could not be read or written
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<DomainError> for SaveError {
    fn from(err: DomainError) -> Self {
        SaveError::Validation(err.to_string())
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
