//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod alerts;
pub mod config;
pub mod status;

pub use alerts::run_alerts;
pub use config::run_config;
pub use status::run_status;
