//! Alert configuration command implementation
//!
//! Edits go through the same form workflow the desktop console uses: load
//! the backend configuration, apply the edit to the form, then submit.

use crate::alert_form::AlertConfigForm;
use crate::alerts::{
    AlertPatch, ConfigSink, FileConfigStore, NotificationChannel, NotificationSettings,
    SystemConfig, ThresholdLevel, Thresholds,
};
use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::cli::output::{print_output, AlertSettings, Message};
use crate::config::AppConfig;
use crate::error::{AppError, ConfigError, Result};
use std::sync::Arc;

/// Execute alert configuration commands
pub fn run_config(command: &ConfigCommands, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let store = FileConfigStore::new(config.data.config_store_path());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        match command {
            ConfigCommands::Show => show(&store, format).await,
            ConfigCommands::SetThreshold { level, value } => {
                let level = ThresholdLevel::from(*level);
                let message = format!("{} threshold set to {}", level, value.trim());
                edit(&store, config, format, message, |form| {
                    form.threshold_changed(level, value.as_str());
                    match form.error(level) {
                        Some(err) => Err(err.clone().into()),
                        None => Ok(()),
                    }
                })
                .await
            }
            ConfigCommands::Toggle { channel } => {
                let channel = NotificationChannel::from(*channel);
                edit(&store, config, format, String::new(), |form| {
                    form.notification_toggled(channel);
                    Ok(())
                })
                .await
            }
            ConfigCommands::Init { force } => init(&store, *force, format).await,
        }
    })
}

async fn show(store: &FileConfigStore, format: OutputFormat) -> Result<()> {
    let current = store.load().await?;
    let settings = AlertSettings {
        path: store.path().display().to_string(),
        thresholds: current.thresholds(),
        notifications: current.notifications(),
    };
    print_output(&settings, format)?;
    Ok(())
}

async fn edit<F>(
    store: &FileConfigStore,
    config: &AppConfig,
    format: OutputFormat,
    message: String,
    apply: F,
) -> Result<()>
where
    F: FnOnce(&mut AlertConfigForm) -> Result<()>,
{
    let current = Arc::new(store.load().await?);

    let mut form = AlertConfigForm::new().with_banner_delay(config.banner_delay());
    form.sync(Some(current));
    apply(&mut form)?;
    form.submit(store).await?;

    let message = if message.is_empty() {
        describe_channels(&form.notifications())
    } else {
        message
    };
    print_output(
        &Message {
            message,
            success: true,
        },
        format,
    )?;
    Ok(())
}

fn describe_channels(notifications: &NotificationSettings) -> String {
    let enabled: Vec<&str> = notifications.enabled().iter().map(|c| c.key()).collect();
    if enabled.is_empty() {
        "All notification channels disabled".to_string()
    } else {
        format!("Notification channels enabled: {}", enabled.join(", "))
    }
}

async fn init(store: &FileConfigStore, force: bool, format: OutputFormat) -> Result<()> {
    if store.path().exists() && !force {
        return Err(AppError::Config(ConfigError::InvalidValue {
            key: store.path().display().to_string(),
            message: "file already exists (use --force to overwrite)".to_string(),
        }));
    }

    let defaults = AlertPatch {
        thresholds: Thresholds::default(),
        notifications: NotificationSettings::default(),
    }
    .apply(&SystemConfig::default());
    store.save(defaults).await?;

    print_output(
        &Message {
            message: format!("Wrote default configuration to {}", store.path().display()),
            success: true,
        },
        format,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{ChannelArg, LevelArg};
    use crate::error::{DomainError, SaveError};
    use std::path::Path;

    fn read_back(path: &Path) -> SystemConfig {
        SystemConfig::from_toml_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    fn app_config(path: &Path) -> AppConfig {
        let mut config = AppConfig::default();
        config.data.config_path = Some(path.to_path_buf());
        config
    }

    #[test]
    fn test_set_threshold_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backend.toml");
        std::fs::write(&path, "other = \"X\"\n[alerts]\nretention_days = 7\n").unwrap();
        let config = app_config(&path);

        let command = ConfigCommands::SetThreshold {
            level: LevelArg::High,
            value: "0.95".to_string(),
        };
        run_config(&command, &config, OutputFormat::Compact).unwrap();

        let saved = read_back(&path);
        assert_eq!(saved.thresholds().high, 0.95);
        assert_eq!(saved.thresholds().low, 0.3);
        assert_eq!(saved.extra.get("other").and_then(|v| v.as_str()), Some("X"));
        let alerts = saved.alerts.unwrap();
        assert_eq!(
            alerts.extra.get("retention_days").and_then(|v| v.as_integer()),
            Some(7)
        );
    }

    #[test]
    fn test_set_threshold_rejects_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backend.toml");
        let config = app_config(&path);

        let command = ConfigCommands::SetThreshold {
            level: LevelArg::Low,
            value: "lots".to_string(),
        };
        let result = run_config(&command, &config, OutputFormat::Compact);
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotANumber { .. }))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_set_threshold_out_of_order_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backend.toml");
        let config = app_config(&path);

        let command = ConfigCommands::SetThreshold {
            level: LevelArg::Low,
            value: "0.9".to_string(),
        };
        let result = run_config(&command, &config, OutputFormat::Compact);
        assert!(matches!(result, Err(AppError::Save(SaveError::Rejected(_)))));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backend.toml");
        let config = app_config(&path);
        let command = ConfigCommands::Toggle {
            channel: ChannelArg::Webhook,
        };

        run_config(&command, &config, OutputFormat::Compact).unwrap();
        assert!(read_back(&path).notifications().webhook);

        run_config(&command, &config, OutputFormat::Compact).unwrap();
        assert!(!read_back(&path).notifications().webhook);
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backend.toml");
        let config = app_config(&path);

        run_config(&ConfigCommands::Init { force: false }, &config, OutputFormat::Compact)
            .unwrap();
        assert_eq!(
            read_back(&path).thresholds(),
            Thresholds::default()
        );

        let again = run_config(&ConfigCommands::Init { force: false }, &config, OutputFormat::Compact);
        assert!(matches!(again, Err(AppError::Config(_))));

        run_config(&ConfigCommands::Init { force: true }, &config, OutputFormat::Compact)
            .unwrap();
    }

    #[test]
    fn test_describe_channels() {
        assert_eq!(
            describe_channels(&NotificationSettings::default()),
            "All notification channels disabled"
        );
        let settings = NotificationSettings {
            email: true,
            slack: true,
            ..Default::default()
        };
        assert_eq!(
            describe_channels(&settings),
            "Notification channels enabled: email, slack"
        );
    }
}
