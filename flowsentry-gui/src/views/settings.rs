//! Settings view
//!
//! About box, keyboard shortcuts and the active data sources.

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{colors, font_size, spacing};
use crate::views::panel;

use flowsentry::config::AppConfig;
use iced::widget::{column, container, horizontal_space, row, scrollable, text};
use iced::{Alignment, Element, Length};

/// Render the settings view
pub fn view_settings<'a>(state: &'a AppState, config: &'a AppConfig) -> Element<'a, Message> {
    let header = text("Settings")
        .size(font_size::XXL)
        .color(colors::TEXT_PRIMARY);

    let content = column![
        header,
        view_about(),
        view_keyboard_shortcuts(),
        view_data_sources(state, config),
    ]
    .spacing(spacing::LG)
    .padding(spacing::LG)
    .width(Length::Fill);

    scrollable(content).height(Length::Fill).into()
}

fn view_about() -> Element<'static, Message> {
    let title = text("About flowsentry")
        .size(font_size::LG)
        .color(colors::TEXT_PRIMARY);

    let description = text("Operator console for the network anomaly detection backend")
        .size(font_size::BASE)
        .color(colors::TEXT_SECONDARY);

    let version = text(format!("Version: {}", env!("CARGO_PKG_VERSION")))
        .size(font_size::SM)
        .color(colors::TEXT_MUTED);

    panel(column![title, description, version].spacing(spacing::SM))
}

fn view_keyboard_shortcuts() -> Element<'static, Message> {
    let title = text("Keyboard Shortcuts")
        .size(font_size::LG)
        .color(colors::TEXT_PRIMARY);

    let shortcuts = column![
        view_shortcut_row("Ctrl+1", "Go to Dashboard"),
        view_shortcut_row("Ctrl+2", "Go to Alerts"),
        view_shortcut_row("Ctrl+3", "Go to Alert Config"),
        view_shortcut_row("Ctrl+,", "Go to Settings"),
        view_shortcut_row("Ctrl+B", "Toggle Sidebar"),
        view_shortcut_row("F5", "Refresh Data"),
    ]
    .spacing(spacing::XS);

    panel(column![title, shortcuts].spacing(spacing::MD))
}

fn view_shortcut_row(
    shortcut: &'static str,
    description: &'static str,
) -> Element<'static, Message> {
    row![
        container(
            text(shortcut)
                .size(font_size::SM)
                .color(colors::ACCENT_CYAN)
        )
        .padding([spacing::XS, spacing::SM])
        .style(|_theme| container::Style {
            background: Some(colors::BG_ELEVATED.into()),
            border: iced::Border {
                color: colors::BG_SURFACE,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        }),
        horizontal_space().width(Length::Fixed(spacing::MD as f32)),
        text(description)
            .size(font_size::BASE)
            .color(colors::TEXT_SECONDARY),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn view_data_sources<'a>(state: &'a AppState, config: &'a AppConfig) -> Element<'a, Message> {
    let title = text("Data Sources")
        .size(font_size::LG)
        .color(colors::TEXT_PRIMARY);

    let snapshot = match (&config.data.snapshot_path, state.demo_mode) {
        (Some(path), false) => path.display().to_string(),
        _ => "Demo data".to_string(),
    };

    let refreshed = match state.last_refresh {
        Some(at) => format!("{}s ago", at.elapsed().as_secs()),
        None => "never".to_string(),
    };

    let rows = column![
        view_setting_row("Snapshot", snapshot),
        view_setting_row(
            "Refresh interval",
            format!("{}s", config.general.refresh_interval_secs)
        ),
        view_setting_row("Last refresh", refreshed),
        view_setting_row(
            "Recent alerts shown",
            config.ui.recent_alerts_limit.to_string()
        ),
        view_setting_row(
            "Success banner",
            format!("{} ms", config.ui.save_banner_ms)
        ),
    ]
    .spacing(spacing::SM);

    panel(column![title, rows].spacing(spacing::MD))
}

fn view_setting_row(label: &'static str, value: String) -> Element<'static, Message> {
    row![
        text(label)
            .size(font_size::BASE)
            .color(colors::TEXT_SECONDARY)
            .width(Length::Fixed(180.0)),
        text(value)
            .size(font_size::BASE)
            .color(colors::TEXT_PRIMARY),
    ]
    .align_y(Alignment::Center)
    .into()
}
