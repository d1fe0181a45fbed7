//! Alert configuration view
//!
//! Threshold inputs, notification channel checkboxes and the save button,
//! rendered from the form's render model.

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{colors, font_size, radius, spacing};
use crate::views::panel;

use flowsentry::alert_form::{ChannelCheckbox, FormFields, FormView, ThresholdInput};
use iced::widget::{
    button, checkbox, column, container, horizontal_space, row, scrollable, text, text_input,
    Column,
};
use iced::{Alignment, Element, Length, Theme};
use std::path::Path;

/// Render the alert configuration editor
pub fn view_alert_config<'a>(
    state: &'a AppState,
    store: Option<&'a Path>,
) -> Element<'a, Message> {
    let title = text("Alert Configuration")
        .size(font_size::XXXL)
        .color(colors::TEXT_PRIMARY);
    let location = text(match store {
        Some(path) => path.display().to_string(),
        None => "In-memory store".to_string(),
    })
    .size(font_size::SM)
    .color(colors::TEXT_MUTED);
    let header = row![title, horizontal_space(), location].align_y(Alignment::Center);

    let body: Element<'_, Message> = match state.form.view() {
        FormView::Loading => text("Loading configuration...")
            .size(font_size::BASE)
            .color(colors::TEXT_SECONDARY)
            .into(),
        FormView::Ready(fields) => view_form(fields),
    };

    let layout = column![header, body]
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill);

    scrollable(layout).height(Length::Fill).into()
}

fn view_form(fields: FormFields) -> Element<'static, Message> {
    let FormFields {
        thresholds,
        channels,
        submit_label,
        submit_enabled,
        success_message,
        failure_message,
    } = fields;

    let threshold_section = panel(
        column![
            section_title("Anomaly Score Thresholds"),
            Column::with_children(thresholds.into_iter().map(view_threshold))
                .spacing(spacing::MD),
        ]
        .spacing(spacing::MD),
    );

    let channel_section = panel(
        column![
            section_title("Notification Channels"),
            Column::with_children(channels.into_iter().map(view_channel)).spacing(spacing::SM),
        ]
        .spacing(spacing::MD),
    );

    let save = button(text(submit_label).size(font_size::BASE))
        .on_press_maybe(submit_enabled.then_some(Message::SaveRequested))
        .padding([spacing::SM, spacing::MD])
        .style(|_theme: &Theme, status| {
            let background = match status {
                button::Status::Hovered => colors::ACCENT_CYAN,
                button::Status::Disabled => colors::BG_OVERLAY,
                _ => colors::ACCENT_SKY,
            };
            let text_color = match status {
                button::Status::Disabled => colors::TEXT_MUTED,
                _ => colors::BG_BASE,
            };
            button::Style {
                background: Some(background.into()),
                text_color,
                border: iced::Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        });

    let mut actions = row![save].spacing(spacing::MD).align_y(Alignment::Center);
    if let Some(message) = success_message {
        actions = actions.push(
            text(message)
                .size(font_size::BASE)
                .color(colors::ACCENT_GREEN),
        );
    }

    let mut form = column![threshold_section, channel_section, actions].spacing(spacing::LG);
    if let Some(failure) = failure_message {
        form = form.push(view_failure(failure));
    }

    form.into()
}

fn section_title(label: &'static str) -> Element<'static, Message> {
    text(label)
        .size(font_size::LG)
        .color(colors::TEXT_PRIMARY)
        .into()
}

fn view_threshold(input: ThresholdInput) -> Element<'static, Message> {
    let level = input.level;
    let invalid = input.error.is_some();

    let field = text_input("0.00", &input.value)
        .on_input(move |value| Message::ThresholdChanged(level, value))
        .padding(spacing::SM)
        .width(Length::Fixed(140.0))
        .style(move |theme: &Theme, status| {
            let mut style = text_input::default(theme, status);
            style.background = colors::BG_ELEVATED.into();
            style.value = colors::TEXT_PRIMARY;
            style.border.radius = radius::SM.into();
            if invalid {
                style.border.color = colors::ACCENT_RED;
                style.border.width = 1.5;
            }
            style
        });

    let range = text(format!("{} to {}, step {}", input.min, input.max, input.step))
        .size(font_size::XS)
        .color(colors::TEXT_MUTED);

    let mut block = column![
        text(input.label)
            .size(font_size::SM)
            .color(colors::TEXT_SECONDARY),
        row![field, range]
            .spacing(spacing::MD)
            .align_y(Alignment::Center),
    ]
    .spacing(spacing::XS);

    if let Some(error) = input.error {
        block = block.push(text(error).size(font_size::XS).color(colors::ACCENT_RED));
    }

    block.into()
}

fn view_channel(entry: ChannelCheckbox) -> Element<'static, Message> {
    let channel = entry.channel;
    checkbox(entry.label, entry.checked)
        .on_toggle(move |_| Message::NotificationToggled(channel))
        .size(font_size::XL)
        .text_size(font_size::BASE)
        .into()
}

fn view_failure(message: String) -> Element<'static, Message> {
    container(
        text(format!("Save failed: {}", message))
            .size(font_size::BASE)
            .color(colors::ACCENT_RED),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(|_theme| container::Style {
        background: Some(colors::with_alpha(colors::ACCENT_RED, 0.08).into()),
        border: iced::Border {
            color: colors::with_alpha(colors::ACCENT_RED, 0.4),
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    })
    .into()
}
