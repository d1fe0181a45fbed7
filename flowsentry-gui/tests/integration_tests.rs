//! Integration tests for flowsentry-gui with mock data sources
//!
//! Drive the dashboard and the alert form the way the application does,
//! using the mock provider and recording store from the core library.

use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use flowsentry::alert_form::{AlertConfigForm, FormView, ScopedTimer, SUCCESS_MESSAGE};
use flowsentry::alerts::{
    Alert, ConfigSink, FileConfigStore, NotificationChannel, Severity, SystemConfig,
    ThresholdLevel,
};
use flowsentry::context::DashboardContext;
use flowsentry::dashboard::{
    present, severity_style, DashboardView, PresentOptions, RecentAlerts, SeverityStyle,
};
use flowsentry::domain::{ConnectionStatus, HealthStatus, Statistics};
use flowsentry::error::SaveError;
use flowsentry::mock::{MockProvider, RecordingSink};
use flowsentry::provider::SnapshotProvider;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

fn alerts(n: usize) -> Vec<Alert> {
    let newest = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            Alert::new(
                format!("alert-{}", i),
                if i % 2 == 0 {
                    Severity::High
                } else {
                    Severity::Low
                },
                newest - ChronoDuration::minutes(i as i64),
                0.5 + i as f64 / 100.0,
                format!("suspicious flow {}", i),
            )
        })
        .collect()
}

fn context(alerts: Vec<Alert>) -> DashboardContext {
    DashboardContext::ready(
        HealthStatus::new("healthy", true),
        Statistics::new(5000, alerts.len() as u64, 2),
        alerts,
        ConnectionStatus::connected(),
    )
}

fn backend_config() -> SystemConfig {
    SystemConfig::from_toml_str(
        r#"
        other = "X"

        [alerts]
        "#,
    )
    .unwrap()
}

// ============================================================================
// Dashboard
// ============================================================================

#[test]
fn test_dashboard_recent_alerts_from_provider() {
    let provider = MockProvider::new(context(alerts(7)));
    let view = present(&provider.context(), &PresentOptions::default());

    let DashboardView::Ready(summary) = view else {
        panic!("expected ready dashboard");
    };
    let ids: Vec<&str> = summary
        .recent_alerts
        .rows()
        .iter()
        .map(|r| r.alert_id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec!["alert-0", "alert-1", "alert-2", "alert-3", "alert-4"]
    );
    assert_eq!(summary.trend.len(), 7);
    assert_eq!(provider.calls(), 1);
}

#[test]
fn test_dashboard_placeholder_without_alerts() {
    let provider = MockProvider::new(context(Vec::new()));
    let DashboardView::Ready(summary) = present(&provider.context(), &PresentOptions::default())
    else {
        panic!("expected ready dashboard");
    };
    assert_eq!(summary.recent_alerts, RecentAlerts::Empty);
}

#[test]
fn test_dashboard_error_then_recovery() {
    let provider = MockProvider::failing("connection refused");
    let first = present(&provider.context(), &PresentOptions::default());
    assert!(matches!(first, DashboardView::Error(ref m) if m.contains("connection refused")));

    provider.set_context(context(alerts(1)));
    let second = present(&provider.context(), &PresentOptions::default());
    assert!(matches!(second, DashboardView::Ready(_)));
    assert_eq!(provider.calls(), 2);
}

#[test]
fn test_severity_badges() {
    assert_eq!(severity_style("HIGH"), SeverityStyle::High);
    assert_eq!(severity_style("Medium"), SeverityStyle::Medium);
    assert_eq!(severity_style("low"), SeverityStyle::Low);
    assert_eq!(severity_style("unknown"), SeverityStyle::Default);
}

// ============================================================================
// Alert configuration form
// ============================================================================

#[test]
fn test_form_loading_until_config_arrives() {
    let mut form = AlertConfigForm::new();
    assert_eq!(form.view(), FormView::Loading);

    form.sync(Some(Arc::new(backend_config())));
    let FormView::Ready(fields) = form.view() else {
        panic!("form should be ready");
    };
    let values: Vec<&str> = fields.thresholds.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["0.3", "0.6", "0.8"]);
    assert!(fields.channels.iter().all(|c| !c.checked));
}

#[tokio::test]
async fn test_edit_and_save_keeps_unrelated_keys() {
    let sink = RecordingSink::with_config(backend_config());
    let mut form = AlertConfigForm::new();
    form.sync(Some(Arc::new(sink.load().await.unwrap())));

    form.threshold_changed(ThresholdLevel::High, "0.95");
    form.notification_toggled(NotificationChannel::Slack);

    let config = form.begin_save().unwrap();
    assert!(form.is_saving());
    let banner = form.finish_save(sink.save(config).await);
    assert!(banner.is_some());

    let saved = sink.last_saved().unwrap();
    assert_eq!(saved.thresholds().high, 0.95);
    assert!(saved.notifications().slack);
    assert_eq!(
        saved.extra.get("other").and_then(|v| v.as_str()),
        Some("X")
    );
}

#[tokio::test]
async fn test_failed_save_records_failure() {
    let sink = RecordingSink::failing(SaveError::Network("timed out".to_string()));
    let mut form = AlertConfigForm::new();
    form.sync(Some(Arc::new(backend_config())));

    let result = form.submit(&sink).await;
    assert_eq!(result, Err(SaveError::Network("timed out".to_string())));
    assert!(!form.save_success());
    assert!(!form.is_saving());

    let FormView::Ready(fields) = form.view() else {
        panic!("form should be ready");
    };
    assert!(fields.success_message.is_none());
    assert!(fields.failure_message.unwrap().contains("timed out"));
}

#[tokio::test(start_paused = true)]
async fn test_banner_clears_after_delay() {
    let sink = RecordingSink::new();
    let mut form = AlertConfigForm::new().with_banner_delay(Duration::from_millis(3000));
    form.sync(Some(Arc::new(backend_config())));

    let request = form.submit(&sink).await.unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();
    form.attach_banner_timer(Box::new(ScopedTimer::schedule(
        request.delay,
        tx,
        request.token,
    )));
    assert!(form.save_success());

    tokio::time::advance(Duration::from_millis(2999)).await;
    assert!(rx.try_recv().is_err());

    let token = rx.recv().await.unwrap();
    form.banner_expired(token);
    assert!(!form.save_success());
    let FormView::Ready(fields) = form.view() else {
        panic!("form should be ready");
    };
    assert_ne!(fields.success_message, Some(SUCCESS_MESSAGE));
}

#[tokio::test(start_paused = true)]
async fn test_closing_form_cancels_banner() {
    let sink = RecordingSink::new();
    let mut form = AlertConfigForm::new();
    form.sync(Some(Arc::new(backend_config())));

    let request = form.submit(&sink).await.unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();
    form.attach_banner_timer(Box::new(ScopedTimer::schedule(
        request.delay,
        tx,
        request.token,
    )));

    drop(form);
    tokio::time::advance(Duration::from_secs(10)).await;
    assert_eq!(rx.recv().await, None);
}

#[tokio::test]
async fn test_file_store_round_trip_through_form() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileConfigStore::new(dir.path().join("backend.toml"));
    store.save(backend_config()).await.unwrap();

    let mut form = AlertConfigForm::new();
    form.sync(Some(Arc::new(store.load().await.unwrap())));
    form.threshold_changed(ThresholdLevel::Low, "0.1");
    form.notification_toggled(NotificationChannel::Email);
    form.submit(&store).await.unwrap();

    let reloaded = store.load().await.unwrap();
    assert_eq!(reloaded.thresholds().low, 0.1);
    assert!(reloaded.notifications().email);
    assert_eq!(
        reloaded.extra.get("other").and_then(|v| v.as_str()),
        Some("X")
    );
}

#[tokio::test]
async fn test_store_rejects_unordered_thresholds() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileConfigStore::new(dir.path().join("backend.toml"));

    let mut form = AlertConfigForm::new();
    form.sync(Some(Arc::new(SystemConfig::default())));
    form.threshold_changed(ThresholdLevel::Low, "0.9");

    let result = form.submit(&store).await;
    assert!(matches!(result, Err(SaveError::Rejected(_))));
    assert!(matches!(form.last_failure(), Some(SaveError::Rejected(_))));
}
