//! Alerts view
//!
//! Every alert in the current snapshot, in backend order.

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{colors, font_size, spacing};
use crate::views::{alert_table, panel};

use flowsentry::dashboard::{alert_rows, NO_ALERTS_PLACEHOLDER};
use iced::widget::{column, horizontal_space, row, scrollable, text};
use iced::{Alignment, Element, Length};

/// Render the full alert list
pub fn view_alerts(state: &AppState) -> Element<'_, Message> {
    let ctx = &state.context;

    let title = text("Alerts")
        .size(font_size::XXXL)
        .color(colors::TEXT_PRIMARY);
    let count = text(format!("{} shown", ctx.alerts.len()))
        .size(font_size::SM)
        .color(colors::TEXT_MUTED);
    let header = row![title, horizontal_space(), count].align_y(Alignment::Center);

    let body: Element<'_, Message> = if ctx.is_loading {
        text("Loading...")
            .size(font_size::BASE)
            .color(colors::TEXT_SECONDARY)
            .into()
    } else if let Some(error) = ctx.error_message() {
        text(format!("Error: {}", error))
            .size(font_size::BASE)
            .color(colors::ACCENT_RED)
            .into()
    } else if ctx.alerts.is_empty() {
        text(NO_ALERTS_PLACEHOLDER)
            .size(font_size::BASE)
            .color(colors::TEXT_MUTED)
            .into()
    } else {
        alert_table(alert_rows(&ctx.alerts))
    };

    let layout = column![header, panel(body)]
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill);

    scrollable(layout).height(Length::Fill).into()
}
