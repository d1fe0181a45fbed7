//! Alert configuration form
//!
//! Local edit state for thresholds and notification channels, derived from
//! the backend configuration and saved back through a [`ConfigSink`].
//!
//! The form is a plain state machine; hosts drive it with events:
//!
//! ```text
//! idle --begin_save--> saving --finish_save(Ok)--> success --banner_expired--> idle
//!                             \-finish_save(Err)-> idle (failure recorded)
//! ```
//!
//! Persistence and timers belong to the host. After a successful save the
//! form returns a [`BannerRequest`]; the host schedules the expiry, hands
//! the cancellable guard back with [`AlertConfigForm::attach_banner_timer`]
//! and reports it with [`AlertConfigForm::banner_expired`].

pub mod timer;
pub mod view;

pub use timer::{BannerGuard, ScopedTimer};
pub use view::{
    ChannelCheckbox, FormFields, FormView, ThresholdInput, SAVING_LABEL, SUBMIT_LABEL,
    SUCCESS_MESSAGE,
};

use crate::alerts::{
    AlertPatch, ConfigSink, NotificationChannel, NotificationSettings, SystemConfig,
    ThresholdLevel, Thresholds,
};
use crate::error::{DomainError, SaveError};
use std::sync::Arc;
use std::time::Duration;

/// Default time the success banner stays up
pub const DEFAULT_BANNER_DELAY: Duration = Duration::from_millis(3000);

/// Banner expiry the host must schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerRequest {
    pub token: u64,
    pub delay: Duration,
}

fn slot(level: ThresholdLevel) -> usize {
    match level {
        ThresholdLevel::Low => 0,
        ThresholdLevel::Medium => 1,
        ThresholdLevel::High => 2,
    }
}

fn render(value: f64) -> String {
    value.to_string()
}

/// Alert configuration form state
pub struct AlertConfigForm {
    thresholds: Thresholds,
    notifications: NotificationSettings,
    inputs: [String; 3],
    errors: [Option<DomainError>; 3],
    is_saving: bool,
    save_success: bool,
    last_failure: Option<SaveError>,
    config: Option<Arc<SystemConfig>>,
    banner_token: u64,
    banner_guard: Option<Box<dyn BannerGuard>>,
    banner_delay: Duration,
}

impl std::fmt::Debug for AlertConfigForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertConfigForm")
            .field("thresholds", &self.thresholds)
            .field("notifications", &self.notifications)
            .field("inputs", &self.inputs)
            .field("is_saving", &self.is_saving)
            .field("save_success", &self.save_success)
            .field("last_failure", &self.last_failure)
            .field("loaded", &self.config.is_some())
            .field("banner_token", &self.banner_token)
            .finish()
    }
}

impl Default for AlertConfigForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertConfigForm {
    /// Create an empty form; it shows the loading state until synced
    pub fn new() -> Self {
        let thresholds = Thresholds::default();
        Self {
            thresholds,
            notifications: NotificationSettings::default(),
            inputs: ThresholdLevel::ALL.map(|level| render(thresholds.get(level))),
            errors: [None, None, None],
            is_saving: false,
            save_success: false,
            last_failure: None,
            config: None,
            banner_token: 0,
            banner_guard: None,
            banner_delay: DEFAULT_BANNER_DELAY,
        }
    }

    /// Builder: how long the success banner stays up
    pub fn with_banner_delay(mut self, delay: Duration) -> Self {
        self.banner_delay = delay;
        self
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn notifications(&self) -> NotificationSettings {
        self.notifications
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn save_success(&self) -> bool {
        self.save_success
    }

    pub fn last_failure(&self) -> Option<&SaveError> {
        self.last_failure.as_ref()
    }

    pub fn config(&self) -> Option<&Arc<SystemConfig>> {
        self.config.as_ref()
    }

    /// Raw text of a threshold input
    pub fn input(&self, level: ThresholdLevel) -> &str {
        &self.inputs[slot(level)]
    }

    /// Validation error pending on a threshold input
    pub fn error(&self, level: ThresholdLevel) -> Option<&DomainError> {
        self.errors[slot(level)].as_ref()
    }

    /// Check whether any threshold input is invalid
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(Option::is_some)
    }

    /// Adopt a new configuration reference
    ///
    /// Local state is reset only when the reference differs from the held
    /// one, so re-syncing with the same `Arc` never discards edits.
    pub fn sync(&mut self, config: Option<Arc<SystemConfig>>) {
        let unchanged = match (&self.config, &config) {
            (Some(held), Some(new)) => Arc::ptr_eq(held, new),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return;
        }

        let (thresholds, notifications) = match &config {
            Some(cfg) => (cfg.thresholds(), cfg.notifications()),
            None => (Thresholds::default(), NotificationSettings::default()),
        };
        log::debug!(
            "Form resynced: thresholds {:?}, notifications {:?}",
            thresholds,
            notifications
        );

        self.thresholds = thresholds;
        self.notifications = notifications;
        self.inputs = ThresholdLevel::ALL.map(|level| render(thresholds.get(level)));
        self.errors = [None, None, None];
        self.config = config;
    }

    /// Handle an edit of one threshold input
    pub fn threshold_changed(&mut self, level: ThresholdLevel, raw: impl Into<String>) {
        let raw = raw.into();
        let i = slot(level);

        match Thresholds::parse_input(level, &raw) {
            Ok(value) => {
                // parse_input already range-checked the value
                let _ = self.thresholds.set(level, value);
                self.errors[i] = None;
            }
            Err(e) => {
                log::debug!("Rejected {} threshold input: {}", level, e);
                self.errors[i] = Some(e);
            }
        }
        self.inputs[i] = raw;
    }

    /// Flip one notification channel
    pub fn notification_toggled(&mut self, channel: NotificationChannel) {
        self.notifications.toggle(channel);
    }

    /// Start a save and build the configuration to send
    pub fn begin_save(&mut self) -> Result<SystemConfig, SaveError> {
        if self.is_saving {
            return Err(SaveError::Validation(
                "a save is already in progress".to_string(),
            ));
        }

        let pending = self.errors.iter().flatten().next().cloned();
        let base = match (self.config.clone(), pending) {
            (Some(config), None) => config,
            (None, _) => {
                let err = SaveError::Validation("no configuration loaded".to_string());
                return Err(self.refuse(err));
            }
            (Some(_), Some(err)) => return Err(self.refuse(err.into())),
        };

        let patch = AlertPatch {
            thresholds: self.thresholds,
            notifications: self.notifications,
        };

        self.is_saving = true;
        self.last_failure = None;
        log::info!(
            "Saving alert configuration (low {}, medium {}, high {}; channels {:?})",
            patch.thresholds.low,
            patch.thresholds.medium,
            patch.thresholds.high,
            patch.notifications.enabled()
        );
        Ok(patch.apply(&base))
    }

    /// Record the outcome of a save
    pub fn finish_save(&mut self, result: Result<(), SaveError>) -> Option<BannerRequest> {
        match result {
            Ok(()) => Some(self.record_success()),
            Err(e) => {
                self.record_failure(e);
                None
            }
        }
    }

    /// Hold the guard of the scheduled banner expiry, cancelling any previous one
    pub fn attach_banner_timer(&mut self, guard: Box<dyn BannerGuard>) {
        self.cancel_banner();
        self.banner_guard = Some(guard);
    }

    /// Clear the success banner if `token` names the current banner
    pub fn banner_expired(&mut self, token: u64) {
        if token != self.banner_token {
            log::debug!("Ignoring stale banner expiry {}", token);
            return;
        }
        self.save_success = false;
        self.banner_guard = None;
    }

    /// Save through `sink` in one step
    pub async fn submit<S: ConfigSink + ?Sized>(
        &mut self,
        sink: &S,
    ) -> Result<BannerRequest, SaveError> {
        let config = self.begin_save()?;
        log::debug!("Submitting to {} store", sink.name());

        match sink.save(config).await {
            Ok(()) => Ok(self.record_success()),
            Err(e) => {
                self.record_failure(e.clone());
                Err(e)
            }
        }
    }

    /// Render model
    pub fn view(&self) -> FormView {
        if self.config.is_none() {
            return FormView::Loading;
        }

        let thresholds = ThresholdLevel::ALL
            .into_iter()
            .map(|level| ThresholdInput {
                level,
                label: level.label(),
                value: self.inputs[slot(level)].clone(),
                min: 0.0,
                max: 1.0,
                step: 0.01,
                error: self.errors[slot(level)].as_ref().map(|e| e.to_string()),
            })
            .collect();

        let channels = NotificationChannel::ALL
            .into_iter()
            .map(|channel| ChannelCheckbox {
                channel,
                label: channel.label(),
                checked: self.notifications.is_enabled(channel),
            })
            .collect();

        FormView::Ready(FormFields {
            thresholds,
            channels,
            submit_label: if self.is_saving {
                SAVING_LABEL
            } else {
                SUBMIT_LABEL
            },
            submit_enabled: !self.is_saving && !self.has_errors(),
            success_message: self.save_success.then_some(SUCCESS_MESSAGE),
            failure_message: self.last_failure.as_ref().map(|e| e.to_string()),
        })
    }

    fn refuse(&mut self, err: SaveError) -> SaveError {
        log::warn!("Save refused: {}", err);
        self.last_failure = Some(err.clone());
        err
    }

    fn record_success(&mut self) -> BannerRequest {
        log::info!("Alert configuration saved");
        self.is_saving = false;
        self.save_success = true;
        self.last_failure = None;
        self.banner_token += 1;
        BannerRequest {
            token: self.banner_token,
            delay: self.banner_delay,
        }
    }

    fn record_failure(&mut self, err: SaveError) {
        log::error!("Failed to save alert configuration: {}", err);
        self.is_saving = false;
        self.cancel_banner();
        self.save_success = false;
        self.last_failure = Some(err);
    }

    fn cancel_banner(&mut self) {
        if let Some(mut guard) = self.banner_guard.take() {
            guard.cancel();
        }
    }
}

impl Drop for AlertConfigForm {
    fn drop(&mut self) {
        self.cancel_banner();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::MemoryConfigStore;
    use crate::mock::RecordingSink;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::mpsc;

    fn backend_config() -> SystemConfig {
        SystemConfig::from_toml_str("other = \"X\"\n[alerts]\n").unwrap()
    }

    fn loaded_form() -> AlertConfigForm {
        let mut form = AlertConfigForm::new();
        form.sync(Some(Arc::new(backend_config())));
        form
    }

    struct CountingGuard(Arc<AtomicUsize>);

    impl BannerGuard for CountingGuard {
        fn cancel(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_no_config_is_loading() {
        let form = AlertConfigForm::new();
        assert_eq!(form.view(), FormView::Loading);
    }

    #[test]
    fn test_empty_alerts_section_uses_defaults() {
        let form = loaded_form();
        assert_eq!(form.thresholds(), Thresholds::default());
        assert_eq!(form.notifications(), NotificationSettings::default());

        let FormView::Ready(fields) = form.view() else {
            panic!("expected ready form");
        };
        assert_eq!(fields.thresholds.len(), 3);
        assert_eq!(fields.thresholds[0].value, "0.3");
        assert_eq!(fields.thresholds[2].step, 0.01);
        assert_eq!(fields.channels.len(), 3);
        assert!(fields.channels.iter().all(|c| !c.checked));
        assert_eq!(fields.submit_label, SUBMIT_LABEL);
        assert!(fields.submit_enabled);
        assert!(fields.success_message.is_none());
    }

    #[test]
    fn test_sync_same_reference_keeps_edits() {
        let config = Arc::new(backend_config());
        let mut form = AlertConfigForm::new();
        form.sync(Some(config.clone()));
        form.threshold_changed(ThresholdLevel::High, "0.95");

        form.sync(Some(config.clone()));
        assert_eq!(form.thresholds().high, 0.95);

        // Equal content, new reference
        form.sync(Some(Arc::new(backend_config())));
        assert_eq!(form.thresholds().high, 0.8);
    }

    #[test]
    fn test_sync_to_none_returns_to_loading() {
        let mut form = loaded_form();
        form.sync(None);
        assert_eq!(form.view(), FormView::Loading);
    }

    #[test]
    fn test_invalid_input_keeps_previous_value() {
        let mut form = loaded_form();
        form.threshold_changed(ThresholdLevel::Medium, "abc");

        assert_eq!(form.thresholds().medium, 0.6);
        assert_eq!(form.input(ThresholdLevel::Medium), "abc");
        assert!(form.error(ThresholdLevel::Medium).is_some());
        assert!(form.error(ThresholdLevel::Low).is_none());

        let FormView::Ready(fields) = form.view() else {
            panic!("expected ready form");
        };
        assert!(!fields.submit_enabled);
        assert!(fields.thresholds[1].error.is_some());

        form.threshold_changed(ThresholdLevel::Medium, "0.65");
        assert_eq!(form.thresholds().medium, 0.65);
        assert!(!form.has_errors());
    }

    #[test]
    fn test_begin_save_refusals() {
        let mut empty = AlertConfigForm::new();
        assert!(matches!(empty.begin_save(), Err(SaveError::Validation(_))));

        let mut form = loaded_form();
        form.threshold_changed(ThresholdLevel::Low, "2");
        assert!(matches!(form.begin_save(), Err(SaveError::Validation(_))));
        assert!(!form.is_saving());
        assert!(form.last_failure().is_some());

        form.threshold_changed(ThresholdLevel::Low, "0.2");
        assert!(form.begin_save().is_ok());
        assert!(form.is_saving());
        assert!(matches!(form.begin_save(), Err(SaveError::Validation(_))));

        let FormView::Ready(fields) = form.view() else {
            panic!("expected ready form");
        };
        assert_eq!(fields.submit_label, SAVING_LABEL);
        assert!(!fields.submit_enabled);
    }

    #[tokio::test]
    async fn test_submit_sends_patched_config() {
        let sink = RecordingSink::new();
        let mut form = loaded_form();
        form.threshold_changed(ThresholdLevel::High, "0.95");
        form.notification_toggled(NotificationChannel::Slack);

        form.submit(&sink).await.unwrap();

        let saved = sink.last_saved().unwrap();
        assert_eq!(saved.thresholds().high, 0.95);
        assert!(saved.notifications().slack);
        assert!(!saved.notifications().email);
        assert_eq!(
            saved.extra.get("other").and_then(|v| v.as_str()),
            Some("X")
        );
        assert!(form.save_success());
        assert!(!form.is_saving());
    }

    #[tokio::test]
    async fn test_submit_failure() {
        let sink = RecordingSink::failing(SaveError::Network("connection refused".to_string()));
        let mut form = loaded_form();

        let result = form.submit(&sink).await;
        assert_eq!(
            result,
            Err(SaveError::Network("connection refused".to_string()))
        );
        assert!(!form.save_success());
        assert!(!form.is_saving());

        let FormView::Ready(fields) = form.view() else {
            panic!("expected ready form");
        };
        assert!(fields
            .failure_message
            .unwrap()
            .contains("connection refused"));
    }

    #[tokio::test]
    async fn test_backend_rejection_is_typed() {
        let store = MemoryConfigStore::new(backend_config());
        let mut form = loaded_form();
        form.threshold_changed(ThresholdLevel::Low, "0.9");

        let result = form.submit(&store).await;
        assert!(matches!(result, Err(SaveError::Rejected(_))));
        assert!(matches!(form.last_failure(), Some(SaveError::Rejected(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_banner_clears_after_delay() {
        let sink = RecordingSink::new();
        let mut form = loaded_form();
        let (tx, mut rx) = mpsc::unbounded_channel();

        let banner = form.submit(&sink).await.unwrap();
        assert_eq!(banner.delay, DEFAULT_BANNER_DELAY);
        let start = tokio::time::Instant::now();
        form.attach_banner_timer(Box::new(ScopedTimer::schedule(
            banner.delay,
            tx,
            banner.token,
        )));
        assert!(form.save_success());

        let token = rx.recv().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(3000));
        form.banner_expired(token);
        assert!(!form.save_success());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_form_cancels_banner() {
        let sink = RecordingSink::new();
        let mut form = loaded_form();
        let (tx, mut rx) = mpsc::unbounded_channel();

        let banner = form.submit(&sink).await.unwrap();
        form.attach_banner_timer(Box::new(ScopedTimer::schedule(
            banner.delay,
            tx,
            banner.token,
        )));
        drop(form);

        assert_eq!(rx.recv().await, None);
    }

    #[test]
    fn test_stale_banner_expiry_ignored() {
        let mut form = loaded_form();
        assert!(form.begin_save().is_ok());
        let first = form.finish_save(Ok(())).unwrap();
        assert!(form.begin_save().is_ok());
        let second = form.finish_save(Ok(())).unwrap();
        assert_ne!(first.token, second.token);

        form.banner_expired(first.token);
        assert!(form.save_success());
        form.banner_expired(second.token);
        assert!(!form.save_success());
    }

    #[test]
    fn test_replacing_guard_cancels_previous() {
        let cancels = Arc::new(AtomicUsize::new(0));
        let mut form = loaded_form();

        form.attach_banner_timer(Box::new(CountingGuard(cancels.clone())));
        form.attach_banner_timer(Box::new(CountingGuard(cancels.clone())));
        assert_eq!(cancels.load(Ordering::SeqCst), 1);

        drop(form);
        assert_eq!(cancels.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_failure_after_success_hides_banner() {
        let cancels = Arc::new(AtomicUsize::new(0));
        let mut form = loaded_form();
        assert!(form.begin_save().is_ok());
        form.finish_save(Ok(()));
        form.attach_banner_timer(Box::new(CountingGuard(cancels.clone())));

        assert!(form.begin_save().is_ok());
        assert!(form
            .finish_save(Err(SaveError::Storage("disk full".to_string())))
            .is_none());
        assert!(!form.save_success());
        assert_eq!(cancels.load(Ordering::SeqCst), 1);
    }
}
