//! Application state definitions

use crate::message::View;
use flowsentry::alert_form::AlertConfigForm;
use flowsentry::alerts::Thresholds;
use flowsentry::context::DashboardContext;
use std::time::{Duration, Instant};

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Current view
    pub current_view: View,

    /// Whether sidebar is expanded
    pub sidebar_expanded: bool,

    /// Latest dashboard snapshot
    pub context: DashboardContext,

    /// When the snapshot was last refreshed
    pub last_refresh: Option<Instant>,

    /// Alert configuration editor
    pub form: AlertConfigForm,

    /// Current notification/error message
    pub notification: Option<Notification>,

    /// Running on generated data
    pub demo_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            sidebar_expanded: true,
            context: DashboardContext::loading(),
            last_refresh: None,
            form: AlertConfigForm::new(),
            notification: None,
            demo_mode: false,
        }
    }
}

impl AppState {
    /// Create new state with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dashboard snapshot
    pub fn update_context(&mut self, context: DashboardContext) {
        self.context = context;
        self.last_refresh = Some(Instant::now());
    }

    /// Set a notification
    pub fn set_notification(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Clear the current notification
    pub fn clear_notification(&mut self) {
        self.notification = None;
    }

    /// Thresholds of the loaded configuration, ignoring unsaved edits
    pub fn saved_thresholds(&self) -> Option<Thresholds> {
        self.form.config().map(|config| config.thresholds())
    }

    /// Drop the notification once its display time is over
    pub fn expire_notification(&mut self) {
        if self
            .notification
            .as_ref()
            .is_some_and(Notification::should_dismiss)
        {
            self.clear_notification();
        }
    }
}

/// Notification message to display
#[derive(Debug, Clone)]
pub struct Notification {
    /// Message content
    pub message: String,

    /// Notification level
    pub level: NotificationLevel,

    /// When the notification was created
    pub created_at: Instant,

    /// Duration before auto-dismiss (None = manual dismiss)
    pub duration: Option<Duration>,
}

impl Notification {
    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            created_at: Instant::now(),
            duration: Some(Duration::from_secs(3)),
        }
    }

    /// Create a warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            created_at: Instant::now(),
            duration: Some(Duration::from_secs(5)),
        }
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
            created_at: Instant::now(),
            duration: None,
        }
    }

    /// Check if notification should be dismissed
    pub fn should_dismiss(&self) -> bool {
        match self.duration {
            Some(duration) => self.created_at.elapsed() >= duration,
            None => false,
        }
    }
}

/// Notification severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowsentry::alerts::{SystemConfig, ThresholdLevel};
    use std::sync::Arc;

    #[test]
    fn test_saved_thresholds_ignore_edits() {
        let mut state = AppState::new();
        assert_eq!(state.saved_thresholds(), None);

        state.form.sync(Some(Arc::new(SystemConfig::default())));
        state.form.threshold_changed(ThresholdLevel::High, "0.95");

        assert_eq!(state.form.thresholds().high, 0.95);
        assert_eq!(state.saved_thresholds(), Some(Thresholds::default()));
    }

    #[test]
    fn test_notification_auto_dismiss() {
        let notif = Notification::success("Test");
        assert!(!notif.should_dismiss());

        let error = Notification::error("Error");
        assert!(!error.should_dismiss());
    }

    #[test]
    fn test_expired_notification_is_cleared() {
        let mut state = AppState::new();
        let mut notif = Notification::warning("stale");
        notif.duration = Some(Duration::ZERO);
        state.set_notification(notif);

        state.expire_notification();
        assert!(state.notification.is_none());

        state.set_notification(Notification::error("sticky"));
        state.expire_notification();
        assert!(state.notification.is_some());
    }

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Dashboard);
        assert!(state.context.is_loading);
        assert!(state.last_refresh.is_none());
        assert!(state.form.config().is_none());
    }
}
