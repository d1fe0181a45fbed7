//! Trait definitions for dashboard data sources
//!
//! The dashboard never fetches anything itself. A provider owns all
//! fetching and hands back a finished [`DashboardContext`].

use crate::context::DashboardContext;
use crate::error::ProviderError;

/// Source of dashboard snapshots
pub trait SnapshotProvider: Send + Sync {
    /// Provider name for logs and the status line
    fn name(&self) -> &str;

    /// Take a snapshot of the backend state
    fn snapshot(&self) -> Result<DashboardContext, ProviderError>;

    /// Take a snapshot, folding a failure into the context's error state
    fn context(&self) -> DashboardContext {
        match self.snapshot() {
            Ok(ctx) => ctx,
            Err(e) => {
                log::warn!("{} provider failed: {}", self.name(), e);
                DashboardContext::failed(e.to_string())
            }
        }
    }
}
