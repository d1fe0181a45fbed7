//! Application views
//!
//! Each view corresponds to a screen in the application.

pub mod alert_config;
pub mod alerts;
pub mod dashboard;
pub mod settings;

pub use alert_config::view_alert_config;
pub use alerts::view_alerts;
pub use dashboard::view_dashboard;
pub use settings::view_settings;

use crate::message::Message;
use crate::theme::{colors, font_size, radius, spacing};

use flowsentry::dashboard::AlertRow;
use iced::widget::{column, container, row, text, Column};
use iced::{Alignment, Element, Length};

/// Bordered surface panel
pub(crate) fn panel<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(colors::BG_SURFACE.into()),
            border: iced::Border {
                color: colors::GLASS_BORDER,
                width: 1.0,
                radius: radius::LG.into(),
            },
            ..Default::default()
        })
        .into()
}

/// Severity / Timestamp / Score / Description table
pub(crate) fn alert_table(rows: Vec<AlertRow>) -> Element<'static, Message> {
    let header = row![
        header_cell("SEVERITY", 1),
        header_cell("TIMESTAMP", 2),
        header_cell("SCORE", 1),
        header_cell("DESCRIPTION", 4),
    ]
    .spacing(spacing::SM)
    .padding([spacing::XS, spacing::SM]);

    let body = Column::with_children(rows.into_iter().map(view_alert_row)).spacing(spacing::XS);

    column![
        container(header)
            .width(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(colors::BG_ELEVATED.into()),
                border: iced::Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            }),
        body,
    ]
    .spacing(spacing::XS)
    .width(Length::Fill)
    .into()
}

fn header_cell(label: &'static str, portion: u16) -> Element<'static, Message> {
    text(label)
        .size(font_size::XS)
        .color(colors::TEXT_MUTED)
        .width(Length::FillPortion(portion))
        .into()
}

fn view_alert_row(alert: AlertRow) -> Element<'static, Message> {
    let color = colors::severity_color(alert.style);

    let badge = container(text(alert.severity).size(font_size::XS).color(color))
        .padding([2, spacing::SM])
        .style(move |_theme| container::Style {
            background: Some(colors::with_alpha(color, 0.15).into()),
            border: iced::Border {
                color: colors::with_alpha(color, 0.4),
                width: 1.0,
                radius: radius::ROUND.into(),
            },
            ..Default::default()
        });

    row![
        container(badge).width(Length::FillPortion(1)),
        text(alert.timestamp)
            .size(font_size::SM)
            .color(colors::TEXT_SECONDARY)
            .width(Length::FillPortion(2)),
        text(alert.score)
            .size(font_size::SM)
            .color(colors::TEXT_PRIMARY)
            .width(Length::FillPortion(1)),
        text(alert.description)
            .size(font_size::SM)
            .color(colors::TEXT_PRIMARY)
            .width(Length::FillPortion(4)),
    ]
    .spacing(spacing::SM)
    .padding([spacing::XS, spacing::SM])
    .align_y(Alignment::Center)
    .into()
}
