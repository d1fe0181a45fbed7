//! Alerts command implementation
//!
//! Lists alerts from the current snapshot in the order the backend sent them.

use crate::cli::args::{AlertsArgs, OutputFormat};
use crate::cli::output::{print_output, AlertList};
use crate::config::AppConfig;
use crate::context::DashboardContext;
use crate::dashboard::{alert_rows, DashboardView};
use crate::error::{ProviderError, Result};
use crate::provider;

/// Execute the alerts command
pub fn run_alerts(args: &AlertsArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let source = provider::from_config(config);
    let ctx = source.snapshot()?;

    match alert_list(&ctx, args, config.ui.recent_alerts_limit)? {
        Some(list) => print_output(&list, format)?,
        None => print_output(&DashboardView::Loading, format)?,
    }

    Ok(())
}

/// Build the listing, or `None` while the snapshot is still loading
fn alert_list(
    ctx: &DashboardContext,
    args: &AlertsArgs,
    default_limit: usize,
) -> Result<Option<AlertList>> {
    if ctx.is_loading {
        return Ok(None);
    }
    if let Some(error) = ctx.error_message() {
        return Err(ProviderError::Read(error.to_string()).into());
    }

    let limit = if args.all {
        ctx.alerts.len()
    } else {
        args.limit
            .map(|l| usize::try_from(l).unwrap_or(usize::MAX))
            .unwrap_or(default_limit)
    };

    let shown = &ctx.alerts[..limit.min(ctx.alerts.len())];
    Ok(Some(AlertList {
        total: ctx.alerts.len(),
        alerts: alert_rows(shown),
    }))
}
