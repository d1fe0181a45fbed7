//! flowsentry - operator console library for a network anomaly detection backend
//!
//! This library provides the dashboard presenter, the alert configuration
//! form and the stores and providers they read from and write to.
//!
//! # Modules
//!
//! - [`alert_form`]: Alert configuration edit/save state machine
//! - [`alerts`]: Alert records and the editable alert configuration
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Application configuration
//! - [`context`]: Read-only dashboard context
//! - [`dashboard`]: Dashboard presenter
//! - [`domain`]: Backend health and statistics models
//! - [`error`]: Error types
//! - [`provider`]: Dashboard snapshot sources

pub mod alert_form;
pub mod alerts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod provider;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{AppError, Result};
