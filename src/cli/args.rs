//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::alerts::{NotificationChannel, ThresholdLevel};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Operator console for a network anomaly detection backend
///
/// Show system health, alert statistics and recent alerts, and edit the
/// alert thresholds and notification channels.
#[derive(Parser, Debug)]
#[command(name = "flowsentry")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FLOWSENTRY_CONFIG")]
    pub config: Option<String>,

    /// Snapshot JSON published by the backend (demo data when absent)
    #[arg(long, global = true, env = "FLOWSENTRY_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Backend configuration file to edit
    #[arg(long, global = true, env = "FLOWSENTRY_STORE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show system status and summary statistics
    Status,

    /// Show recent alerts
    Alerts(AlertsArgs),

    /// Show or edit the alert configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the alerts command
#[derive(Parser, Debug)]
pub struct AlertsArgs {
    /// Number of alerts to show (defaults to the configured limit)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    /// Show every alert in the snapshot
    #[arg(short, long, conflicts_with = "limit")]
    pub all: bool,
}

/// Arguments for alert configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Alert configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show thresholds and notification channels
    Show,

    /// Set the anomaly score threshold of one severity level
    SetThreshold {
        /// Severity level
        #[arg(value_enum)]
        level: LevelArg,

        /// New threshold (0.0 - 1.0)
        value: String,
    },

    /// Toggle a notification channel
    Toggle {
        /// Channel to toggle
        #[arg(value_enum)]
        channel: ChannelArg,
    },

    /// Write a configuration file with default alert settings
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Severity level argument
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum LevelArg {
    Low,
    Medium,
    High,
}

impl From<LevelArg> for ThresholdLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Low => ThresholdLevel::Low,
            LevelArg::Medium => ThresholdLevel::Medium,
            LevelArg::High => ThresholdLevel::High,
        }
    }
}

/// Notification channel argument
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ChannelArg {
    Email,
    Slack,
    Webhook,
}

impl From<ChannelArg> for NotificationChannel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Email => NotificationChannel::Email,
            ChannelArg::Slack => NotificationChannel::Slack,
            ChannelArg::Webhook => NotificationChannel::Webhook,
        }
    }
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_status() {
        let args = Cli::try_parse_from(["flowsentry", "status"]).unwrap();
        assert!(matches!(args.command, Commands::Status));
    }

    #[test]
    fn test_cli_parse_alerts_limit() {
        let args = Cli::try_parse_from(["flowsentry", "alerts", "--limit", "10"]).unwrap();
        match args.command {
            Commands::Alerts(a) => {
                assert_eq!(a.limit, Some(10));
                assert!(!a.all);
            }
            _ => panic!("Expected Alerts command"),
        }
    }

    #[test]
    fn test_cli_alerts_limit_conflicts_with_all() {
        assert!(Cli::try_parse_from(["flowsentry", "alerts", "--limit", "3", "--all"]).is_err());
        assert!(Cli::try_parse_from(["flowsentry", "alerts", "--limit", "0"]).is_err());
    }

    #[test]
    fn test_cli_parse_set_threshold() {
        let args =
            Cli::try_parse_from(["flowsentry", "config", "set-threshold", "high", "0.95"]).unwrap();
        match args.command {
            Commands::Config(ConfigArgs {
                command: ConfigCommands::SetThreshold { level, value },
            }) => {
                assert_eq!(ThresholdLevel::from(level), ThresholdLevel::High);
                assert_eq!(value, "0.95");
            }
            _ => panic!("Expected set-threshold command"),
        }
    }

    #[test]
    fn test_cli_parse_toggle() {
        let args = Cli::try_parse_from(["flowsentry", "config", "toggle", "slack"]).unwrap();
        match args.command {
            Commands::Config(ConfigArgs {
                command: ConfigCommands::Toggle { channel },
            }) => assert_eq!(NotificationChannel::from(channel), NotificationChannel::Slack),
            _ => panic!("Expected toggle command"),
        }
        assert!(Cli::try_parse_from(["flowsentry", "config", "toggle", "pager"]).is_err());
    }

    #[test]
    fn test_cli_global_flags() {
        let args = Cli::try_parse_from([
            "flowsentry",
            "status",
            "--format",
            "json",
            "--snapshot",
            "/tmp/snap.json",
            "-v",
        ])
        .unwrap();
        assert!(args.verbose);
        assert!(matches!(args.format, OutputFormat::Json));
        assert_eq!(args.snapshot, Some(PathBuf::from("/tmp/snap.json")));
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }
}
