//! Main application structure
//!
//! Implements the Elm Architecture (TEA) pattern for flowsentry-gui.

use crate::message::{KeyboardShortcut, Message, View};
use crate::services::{data_source, DataSources, GuiConfig};
use crate::state::{AppState, Notification, NotificationLevel};
use crate::theme::{colors, flowsentry_theme, font_size, radius, spacing};
use crate::views;
use crate::Args;

use flowsentry::alert_form::{AlertConfigForm, BannerGuard, BannerRequest};
use flowsentry::config::AppConfig;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::task;
use iced::widget::{button, column, container, horizontal_space, row, text, Column, Space};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use std::sync::Arc;

/// Banner expiry scheduled as an abortable Iced task
struct BannerTask(task::Handle);

impl BannerGuard for BannerTask {
    fn cancel(&mut self) {
        self.0.abort();
    }
}

/// Main application
pub struct FlowsentryGui {
    /// Application state
    state: AppState,

    /// Snapshot provider and configuration store
    sources: DataSources,

    /// Application configuration
    config: AppConfig,

    /// GUI preferences and where they are kept
    gui_config: GuiConfig,
    gui_config_path: PathBuf,
}

impl FlowsentryGui {
    /// Create a new application instance
    pub fn new(args: Args) -> (Self, Task<Message>) {
        let gui_config_path = GuiConfig::config_path();
        let gui_config = GuiConfig::load_from_path(&gui_config_path);

        let config =
            data_source::load_app_config(&args, gui_config.preferences.refresh_interval_secs);
        let sources = data_source::connect(&config, args.demo);

        let app = Self::with_sources(sources, config, gui_config, gui_config_path);
        let load = app.load_config();
        (app, load)
    }

    /// Assemble the application around already built sources
    pub fn with_sources(
        sources: DataSources,
        config: AppConfig,
        gui_config: GuiConfig,
        gui_config_path: PathBuf,
    ) -> Self {
        let mut state = AppState::new();
        state.current_view = gui_config.preferences.start_view;
        state.sidebar_expanded = gui_config.preferences.sidebar_expanded;
        state.demo_mode = sources.demo;
        state.form = AlertConfigForm::new().with_banner_delay(config.banner_delay());
        state.update_context(sources.provider.context());

        if let Some(error) = state.context.error_message() {
            state.set_notification(Notification::warning(format!(
                "Snapshot unavailable: {}",
                error
            )));
        }

        Self {
            state,
            sources,
            config,
            gui_config,
            gui_config_path,
        }
    }

    /// Fetch the backend configuration for the alert form
    fn load_config(&self) -> Task<Message> {
        let sink = Arc::clone(&self.sources.sink);
        Task::perform(async move { sink.load().await }, Message::ConfigLoaded)
    }

    /// Pull a fresh snapshot
    fn refresh(&mut self) {
        let context = self.sources.provider.context();
        self.state.update_context(context);
    }

    /// Schedule the success banner expiry and hand its guard to the form
    fn schedule_banner(&mut self, request: BannerRequest) -> Task<Message> {
        let BannerRequest { token, delay } = request;
        let (expiry, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |_| Message::BannerExpired(token),
        )
        .abortable();

        self.state
            .form
            .attach_banner_timer(Box::new(BannerTask(handle.abort_on_drop())));
        expiry
    }

    fn toggle_sidebar(&mut self) {
        self.state.sidebar_expanded = !self.state.sidebar_expanded;
        self.gui_config.preferences.sidebar_expanded = self.state.sidebar_expanded;
        if let Err(e) = self.gui_config.save_to_path(&self.gui_config_path) {
            log::warn!("Failed to save GUI config: {}", e);
        }
    }

    /// Update application state based on a message
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ViewChanged(view) => {
                self.state.current_view = view;
                Task::none()
            }

            Message::SidebarToggled => {
                self.toggle_sidebar();
                Task::none()
            }

            Message::KeyPressed(shortcut) => {
                if let Some(view) = shortcut.to_view() {
                    self.state.current_view = view;
                } else {
                    match shortcut {
                        KeyboardShortcut::Refresh => {
                            self.refresh();
                            self.state
                                .set_notification(Notification::success("Data refreshed"));
                        }
                        KeyboardShortcut::ToggleSidebar => self.toggle_sidebar(),
                        _ => {}
                    }
                }
                Task::none()
            }

            Message::Tick(_now) => {
                self.refresh();
                self.state.expire_notification();
                Task::none()
            }

            Message::ConfigLoaded(Ok(config)) => {
                self.state.form.sync(Some(Arc::new(config)));
                Task::none()
            }

            Message::ConfigLoaded(Err(e)) => {
                log::warn!("Failed to load alert configuration: {}", e);
                self.state.set_notification(Notification::error(format!(
                    "Failed to load alert configuration: {}",
                    e
                )));
                Task::none()
            }

            Message::ThresholdChanged(level, value) => {
                self.state.form.threshold_changed(level, value);
                Task::none()
            }

            Message::NotificationToggled(channel) => {
                self.state.form.notification_toggled(channel);
                Task::none()
            }

            Message::SaveRequested => match self.state.form.begin_save() {
                Ok(config) => {
                    let sink = Arc::clone(&self.sources.sink);
                    Task::perform(
                        async move { sink.save(config).await },
                        Message::SaveFinished,
                    )
                }
                Err(e) => {
                    self.state
                        .set_notification(Notification::warning(e.to_string()));
                    Task::none()
                }
            },

            Message::SaveFinished(result) => {
                let failure = result.as_ref().err().cloned();
                match self.state.form.finish_save(result) {
                    Some(request) => {
                        let expiry = self.schedule_banner(request);
                        Task::batch([expiry, self.load_config()])
                    }
                    None => {
                        if let Some(e) = failure {
                            self.state.set_notification(Notification::error(format!(
                                "Save failed: {}",
                                e
                            )));
                        }
                        Task::none()
                    }
                }
            }

            Message::BannerExpired(token) => {
                self.state.form.banner_expired(token);
                Task::none()
            }

            Message::DismissNotification => {
                self.state.clear_notification();
                Task::none()
            }
        }
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let sidebar = self.view_sidebar();
        let content = self.view_content();

        let main_layout = row![sidebar, content].height(Length::Fill);

        let with_notification = if let Some(ref notif) = self.state.notification {
            column![main_layout, self.view_notification(notif)]
        } else {
            column![main_layout]
        };

        container(with_notification)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(colors::BG_BASE.into()),
                ..Default::default()
            })
            .into()
    }

    fn view_sidebar(&self) -> Element<'_, Message> {
        let width = if self.state.sidebar_expanded {
            Length::Fixed(200.0)
        } else {
            Length::Fixed(68.0)
        };

        let nav_items = [
            (View::Dashboard, colors::ACCENT_CYAN),
            (View::Alerts, colors::ACCENT_ORANGE),
            (View::AlertConfig, colors::ACCENT_PURPLE),
        ];

        let nav_column = Column::with_children(
            nav_items
                .iter()
                .map(|(view, color)| self.view_nav_button(*view, *color)),
        )
        .spacing(spacing::SM);

        let settings_button = self.view_nav_button(View::Settings, colors::ACCENT_SKY);

        let content = column![
            nav_column,
            Space::with_height(Length::Fill),
            settings_button,
        ]
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .height(Length::Fill);

        container(content)
            .width(width)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(colors::BG_SURFACE.into()),
                border: iced::Border {
                    color: colors::GLASS_BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn view_nav_button(&self, view: View, accent: iced::Color) -> Element<'_, Message> {
        let is_active = self.state.current_view == view;

        let style = move |_theme: &Theme, status: button::Status| {
            if is_active {
                button::Style {
                    background: Some(colors::with_alpha(accent, 0.15).into()),
                    text_color: accent,
                    border: iced::Border {
                        color: colors::with_alpha(accent, 0.4),
                        width: 1.0,
                        radius: radius::LG.into(),
                    },
                    shadow: iced::Shadow {
                        color: colors::with_alpha(accent, 0.1),
                        offset: iced::Vector::new(0.0, 2.0),
                        blur_radius: 8.0,
                    },
                }
            } else {
                let (bg, text_col) = match status {
                    button::Status::Hovered => (
                        colors::with_alpha(accent, 0.08),
                        colors::lerp(colors::TEXT_SECONDARY, accent, 0.5),
                    ),
                    _ => (colors::BG_SURFACE, colors::TEXT_SECONDARY),
                };
                button::Style {
                    background: Some(bg.into()),
                    text_color: text_col,
                    border: iced::Border {
                        radius: radius::LG.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            }
        };

        let label = view.name();
        let label_text: Element<'_, Message> = if self.state.sidebar_expanded {
            text(label).size(font_size::BASE).into()
        } else {
            text(&label[..1]).size(font_size::LG).into()
        };

        button(label_text)
            .on_press(Message::ViewChanged(view))
            .padding([spacing::SM, spacing::MD])
            .width(Length::Fill)
            .style(style)
            .into()
    }

    fn view_content(&self) -> Element<'_, Message> {
        let content = match self.state.current_view {
            View::Dashboard => views::view_dashboard(&self.state, self.config.present_options()),
            View::Alerts => views::view_alerts(&self.state),
            View::AlertConfig => {
                views::view_alert_config(&self.state, self.sources.store_path.as_deref())
            }
            View::Settings => views::view_settings(&self.state, &self.config),
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(colors::BG_BASE.into()),
                ..Default::default()
            })
            .into()
    }

    fn view_notification<'a>(&'a self, notif: &'a Notification) -> Element<'a, Message> {
        let color = match notif.level {
            NotificationLevel::Success => colors::ACCENT_GREEN,
            NotificationLevel::Warning => colors::ACCENT_ORANGE,
            NotificationLevel::Error => colors::ACCENT_RED,
        };

        let dismiss_btn = button(text("x").size(font_size::SM))
            .on_press(Message::DismissNotification)
            .padding(spacing::XS)
            .style(move |_theme: &Theme, status| {
                let text_col = match status {
                    button::Status::Hovered => color,
                    _ => colors::TEXT_SECONDARY,
                };
                button::Style {
                    background: None,
                    text_color: text_col,
                    ..Default::default()
                }
            });

        let content = row![
            text(&notif.message)
                .size(font_size::BASE)
                .color(colors::TEXT_PRIMARY),
            horizontal_space(),
            dismiss_btn,
        ]
        .align_y(Alignment::Center)
        .spacing(spacing::SM);

        container(content)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(colors::BG_SURFACE.into()),
                border: iced::Border {
                    color: colors::with_alpha(color, 0.6),
                    width: 1.5,
                    radius: radius::LG.into(),
                },
                shadow: iced::Shadow {
                    color: colors::with_alpha(color, 0.15),
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 16.0,
                },
                ..Default::default()
            })
            .into()
    }

    /// Get theme
    pub fn theme(&self) -> Theme {
        flowsentry_theme()
    }

    /// Get title
    pub fn title(&self) -> String {
        String::from("FlowSentry - Network Anomaly Detection")
    }

    /// Set up subscriptions
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            iced::time::every(self.config.refresh_interval()).map(Message::Tick),
            keyboard::on_key_press(handle_keyboard_shortcut),
        ])
    }
}

/// Handle keyboard shortcuts
fn handle_keyboard_shortcut(key: Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.control() {
        if let Key::Character(c) = &key {
            let shortcut = match c.as_str() {
                "1" => Some(KeyboardShortcut::GotoDashboard),
                "2" => Some(KeyboardShortcut::GotoAlerts),
                "3" => Some(KeyboardShortcut::GotoAlertConfig),
                "," => Some(KeyboardShortcut::GotoSettings),
                "b" | "B" => Some(KeyboardShortcut::ToggleSidebar),
                _ => None,
            };
            return shortcut.map(Message::KeyPressed);
        }
    }

    if let Key::Named(Named::F5) = key {
        return Some(Message::KeyPressed(KeyboardShortcut::Refresh));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use flowsentry::alert_form::{FormView, SUCCESS_MESSAGE};
    use flowsentry::alerts::{Alert, Severity, SystemConfig, ThresholdLevel};
    use flowsentry::context::DashboardContext;
    use flowsentry::domain::{ConnectionStatus, HealthStatus, Statistics};
    use flowsentry::error::SaveError;
    use flowsentry::mock::{MockProvider, RecordingSink};

    fn ready_context() -> DashboardContext {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        DashboardContext::ready(
            HealthStatus::new("healthy", true),
            Statistics::new(10, 1, 1),
            vec![Alert::new("a-1", Severity::High, at, 0.91, "port scan")],
            ConnectionStatus::connected(),
        )
    }

    fn app(provider: MockProvider) -> (FlowsentryGui, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let sources = DataSources {
            provider: Box::new(provider),
            sink: Arc::new(RecordingSink::new()),
            store_path: None,
            demo: false,
        };
        let gui = FlowsentryGui::with_sources(
            sources,
            AppConfig::default(),
            GuiConfig::default(),
            dir.path().join("gui.yaml"),
        );
        (gui, dir)
    }

    fn loaded(gui: &mut FlowsentryGui) {
        let _ = gui.update(Message::ConfigLoaded(Ok(SystemConfig::default())));
    }

    #[test]
    fn test_startup_reads_snapshot() {
        let (gui, _dir) = app(MockProvider::new(ready_context()));
        assert_eq!(gui.state.context.alerts.len(), 1);
        assert!(gui.state.last_refresh.is_some());
        assert!(gui.state.notification.is_none());
    }

    #[test]
    fn test_startup_failure_warns() {
        let (gui, _dir) = app(MockProvider::failing("backend unreachable"));
        assert!(gui.state.context.error.is_some());
        let notif = gui.state.notification.as_ref().unwrap();
        assert_eq!(notif.level, NotificationLevel::Warning);
    }

    #[test]
    fn test_refresh_shortcut_notifies() {
        let (mut gui, _dir) = app(MockProvider::new(DashboardContext::default()));
        let _ = gui.update(Message::KeyPressed(KeyboardShortcut::Refresh));
        let _ = gui.update(Message::KeyPressed(KeyboardShortcut::Refresh));
        assert_eq!(gui.state.context, DashboardContext::default());
        assert_eq!(
            gui.state.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Success)
        );
    }

    #[test]
    fn test_view_all_navigates_to_alerts() {
        let (mut gui, _dir) = app(MockProvider::new(ready_context()));
        let _ = gui.update(Message::ViewChanged(View::Alerts));
        assert_eq!(gui.state.current_view, View::Alerts);

        let _ = gui.update(Message::KeyPressed(KeyboardShortcut::GotoAlertConfig));
        assert_eq!(gui.state.current_view, View::AlertConfig);
    }

    #[test]
    fn test_sidebar_toggle_persists_preference() {
        let (mut gui, dir) = app(MockProvider::new(ready_context()));
        let _ = gui.update(Message::SidebarToggled);
        assert!(!gui.state.sidebar_expanded);

        let saved = GuiConfig::load_from_path(&dir.path().join("gui.yaml"));
        assert!(!saved.preferences.sidebar_expanded);
    }

    #[test]
    fn test_save_without_config_warns() {
        let (mut gui, _dir) = app(MockProvider::new(ready_context()));
        let _ = gui.update(Message::SaveRequested);
        assert!(!gui.state.form.is_saving());
        assert_eq!(
            gui.state.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Warning)
        );
    }

    #[test]
    fn test_save_success_shows_banner_until_expiry() {
        let (mut gui, _dir) = app(MockProvider::new(ready_context()));
        loaded(&mut gui);
        let _ = gui.update(Message::ThresholdChanged(
            ThresholdLevel::High,
            "0.95".to_string(),
        ));

        let _ = gui.update(Message::SaveRequested);
        assert!(gui.state.form.is_saving());

        let _ = gui.update(Message::SaveFinished(Ok(())));
        assert!(!gui.state.form.is_saving());
        assert!(gui.state.form.save_success());

        let FormView::Ready(fields) = gui.state.form.view() else {
            panic!("form should be ready");
        };
        assert_eq!(fields.success_message, Some(SUCCESS_MESSAGE));
        assert_eq!(gui.state.form.thresholds().high, 0.95);
    }

    #[test]
    fn test_save_failure_shows_error_toast() {
        let (mut gui, _dir) = app(MockProvider::new(ready_context()));
        loaded(&mut gui);
        let _ = gui.update(Message::SaveRequested);
        let _ = gui.update(Message::SaveFinished(Err(SaveError::Network(
            "connection reset".to_string(),
        ))));

        assert!(!gui.state.form.is_saving());
        assert!(!gui.state.form.save_success());
        let notif = gui.state.notification.as_ref().unwrap();
        assert_eq!(notif.level, NotificationLevel::Error);
        assert!(notif.message.contains("connection reset"));
    }

    #[test]
    fn test_config_load_failure_is_reported() {
        let (mut gui, _dir) = app(MockProvider::new(ready_context()));
        let _ = gui.update(Message::ConfigLoaded(Err(SaveError::Storage(
            "permission denied".to_string(),
        ))));
        assert!(gui.state.form.config().is_none());
        assert_eq!(
            gui.state.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Error)
        );
    }

    #[test]
    fn test_keyboard_shortcuts() {
        assert!(matches!(
            handle_keyboard_shortcut(Key::Character("2".into()), Modifiers::CTRL),
            Some(Message::KeyPressed(KeyboardShortcut::GotoAlerts))
        ));
        assert!(matches!(
            handle_keyboard_shortcut(Key::Named(Named::F5), Modifiers::empty()),
            Some(Message::KeyPressed(KeyboardShortcut::Refresh))
        ));
        assert!(
            handle_keyboard_shortcut(Key::Character("2".into()), Modifiers::empty()).is_none()
        );
    }
}
