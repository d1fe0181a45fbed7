//! Application message definitions
//!
//! Flat message set following The Elm Architecture.

use flowsentry::alerts::{NotificationChannel, SystemConfig, ThresholdLevel};
use flowsentry::error::SaveError;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Top-level application messages
#[derive(Debug, Clone)]
pub enum Message {
    // === Navigation ===
    /// Switch to a different view
    ViewChanged(View),

    /// Toggle sidebar expanded/collapsed
    SidebarToggled,

    /// Keyboard shortcut pressed
    KeyPressed(KeyboardShortcut),

    // === Polling ===
    /// Periodic snapshot refresh
    Tick(Instant),

    // === Alert Configuration ===
    /// Backend configuration fetched from the store
    ConfigLoaded(Result<SystemConfig, SaveError>),

    /// Threshold input edited
    ThresholdChanged(ThresholdLevel, String),

    /// Notification checkbox toggled
    NotificationToggled(NotificationChannel),

    /// Save button pressed
    SaveRequested,

    /// Store answered a save
    SaveFinished(Result<(), SaveError>),

    /// Success banner timer fired
    BannerExpired(u64),

    /// Dismiss notification toast
    DismissNotification,
}

/// Available application views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// System status, cards, trend and recent alerts
    #[default]
    Dashboard,
    /// Full alert listing
    Alerts,
    /// Threshold and notification editor
    AlertConfig,
    /// Application settings
    Settings,
}

impl View {
    /// Get the display name for this view
    pub fn name(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Alerts => "Alerts",
            View::AlertConfig => "Alert Config",
            View::Settings => "Settings",
        }
    }
}

/// Keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardShortcut {
    /// Navigate to Dashboard (Ctrl+1)
    GotoDashboard,
    /// Navigate to Alerts (Ctrl+2)
    GotoAlerts,
    /// Navigate to Alert Config (Ctrl+3)
    GotoAlertConfig,
    /// Navigate to Settings (Ctrl+,)
    GotoSettings,
    /// Refresh snapshot (F5)
    Refresh,
    /// Toggle sidebar (Ctrl+B)
    ToggleSidebar,
}

impl KeyboardShortcut {
    /// Get the view associated with this shortcut, if any
    pub fn to_view(self) -> Option<View> {
        match self {
            KeyboardShortcut::GotoDashboard => Some(View::Dashboard),
            KeyboardShortcut::GotoAlerts => Some(View::Alerts),
            KeyboardShortcut::GotoAlertConfig => Some(View::AlertConfig),
            KeyboardShortcut::GotoSettings => Some(View::Settings),
            KeyboardShortcut::Refresh | KeyboardShortcut::ToggleSidebar => None,
        }
    }
}
