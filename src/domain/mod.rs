//! Domain models for flowsentry
//!
//! Read-only data published by the detection backend: health probe results
//! and aggregated traffic counters.

pub mod health;
pub mod statistics;

pub use health::{ConnectionStatus, HealthStatus};
pub use statistics::Statistics;
