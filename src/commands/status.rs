//! Status command implementation
//!
//! Shows the dashboard summary: status indicators, cards and recent alerts.

use crate::cli::args::OutputFormat;
use crate::cli::output::print_output;
use crate::config::AppConfig;
use crate::dashboard::present;
use crate::error::Result;
use crate::provider;

/// Execute the status command
pub fn run_status(config: &AppConfig, format: OutputFormat) -> Result<()> {
    let source = provider::from_config(config);
    let ctx = source.context();
    let view = present(&ctx, &config.present_options());

    print_output(&view, format)?;

    Ok(())
}
