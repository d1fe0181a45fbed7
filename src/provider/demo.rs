//! Synthetic snapshot provider
//!
//! Produces a plausible, slowly evolving backend state without a backend.
//! Every call advances an internal tick; the data is a pure function of the
//! tick and the base time so runs are reproducible.

use super::traits::SnapshotProvider;
use crate::alerts::{Alert, Severity, Thresholds};
use crate::context::DashboardContext;
use crate::domain::{ConnectionStatus, HealthStatus, Statistics};
use crate::error::ProviderError;
use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicU64, Ordering};

/// Most alerts kept in a demo snapshot
const MAX_ALERTS: u64 = 24;
/// Flows scored between two snapshots
const FLOWS_PER_TICK: u64 = 1_337;
/// Seconds between two synthetic alerts
const ALERT_SPACING_SECS: i64 = 45;

const DESCRIPTIONS: [&str; 6] = [
    "Unusual outbound volume to a rare destination",
    "Port scan pattern across internal subnet",
    "Long-lived connection with periodic beacons",
    "DNS queries with high-entropy subdomains",
    "Spike in failed TCP handshakes",
    "Uncommon protocol on a well-known port",
];

/// Demo data provider
#[derive(Debug)]
pub struct DemoProvider {
    tick: AtomicU64,
    base_time: DateTime<Utc>,
    thresholds: Thresholds,
}

impl Default for DemoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoProvider {
    /// Create a demo provider anchored at the current time
    pub fn new() -> Self {
        Self::with_base_time(Utc::now())
    }

    /// Create a demo provider anchored at `base_time`
    pub fn with_base_time(base_time: DateTime<Utc>) -> Self {
        Self {
            tick: AtomicU64::new(0),
            base_time,
            thresholds: Thresholds::default(),
        }
    }

    /// Builder: classify synthetic alerts with these thresholds
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    fn score(n: u64) -> f64 {
        // Cheap scramble so neighbouring alerts get unrelated scores
        let mixed = n.wrapping_mul(2_654_435_761) % 1_000;
        0.3 + (mixed as f64 / 1_000.0) * 0.7
    }

    fn classify(&self, score: f64) -> Severity {
        if score >= self.thresholds.high {
            Severity::High
        } else if score >= self.thresholds.medium {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    fn build(&self, tick: u64) -> DashboardContext {
        let raised = tick * 2;
        let kept = raised.min(MAX_ALERTS);

        // Most recent first
        let alerts: Vec<Alert> = (0..kept)
            .map(|i| {
                let n = raised - i;
                let score = Self::score(n);
                Alert::new(
                    format!("demo-{:05}", n),
                    self.classify(score),
                    self.base_time + Duration::seconds(n as i64 * ALERT_SPACING_SECS),
                    score,
                    DESCRIPTIONS[(n as usize) % DESCRIPTIONS.len()],
                )
            })
            .collect();

        let high_severity_count = (1..=raised)
            .filter(|n| self.classify(Self::score(*n)).is_high())
            .count() as u64;

        DashboardContext::ready(
            HealthStatus::new("healthy", true),
            Statistics::new(tick * FLOWS_PER_TICK, raised, high_severity_count),
            alerts,
            ConnectionStatus::connected(),
        )
    }
}

impl SnapshotProvider for DemoProvider {
    fn name(&self) -> &str {
        "demo"
    }

    fn snapshot(&self) -> Result<DashboardContext, ProviderError> {
        let tick = self.tick.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(self.build(tick))
    }
}
