//! Dashboard view
//!
//! System status, summary cards, anomaly trend and the most recent alerts.

use crate::message::{Message, View};
use crate::state::AppState;
use crate::theme::{colors, font_size, radius, spacing};
use crate::views::{alert_table, panel};
use crate::widgets::AnomalyTrend;

use flowsentry::dashboard::{
    present, DashboardSummary, DashboardView, PresentOptions, RecentAlerts, StatCard,
    StatusIndicator, NO_ALERTS_PLACEHOLDER,
};
use iced::widget::{
    button, column, container, horizontal_space, row, scrollable, text, Canvas, Row,
};
use iced::{Alignment, Element, Length, Theme};

/// Render the dashboard view
pub fn view_dashboard(state: &AppState, options: PresentOptions) -> Element<'_, Message> {
    let content: Element<'_, Message> = match present(&state.context, &options) {
        DashboardView::Loading => view_loading(),
        DashboardView::Error(message) => view_error(message),
        DashboardView::Ready(summary) => view_summary(state, summary),
    };

    let layout = column![view_header(state), content]
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .width(Length::Fill);

    scrollable(layout).height(Length::Fill).into()
}

fn view_header(state: &AppState) -> Element<'_, Message> {
    let title = text("Dashboard")
        .size(font_size::XXXL)
        .color(colors::TEXT_PRIMARY);

    let source: Element<'_, Message> = if state.demo_mode {
        text("Demo data")
            .size(font_size::SM)
            .color(colors::ACCENT_ORANGE)
            .into()
    } else {
        horizontal_space().width(Length::Shrink).into()
    };

    row![title, horizontal_space(), source]
        .align_y(Alignment::Center)
        .width(Length::Fill)
        .into()
}

fn view_loading() -> Element<'static, Message> {
    container(
        text("Loading...")
            .size(font_size::XL)
            .color(colors::TEXT_SECONDARY),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding(spacing::XL)
    .into()
}

fn view_error(message: String) -> Element<'static, Message> {
    let body = column![
        text("Error").size(font_size::XL).color(colors::ACCENT_RED),
        text(message)
            .size(font_size::BASE)
            .color(colors::TEXT_PRIMARY),
        text("Press F5 to retry")
            .size(font_size::SM)
            .color(colors::TEXT_MUTED),
    ]
    .spacing(spacing::SM);

    container(body)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(colors::with_alpha(colors::ACCENT_RED, 0.08).into()),
            border: iced::Border {
                color: colors::with_alpha(colors::ACCENT_RED, 0.5),
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        })
        .into()
}

fn view_summary(state: &AppState, summary: DashboardSummary) -> Element<'_, Message> {
    let DashboardSummary {
        system,
        connection,
        cards,
        trend,
        recent_alerts,
    } = summary;

    let status = panel(
        column![
            text("System Status")
                .size(font_size::XXL)
                .color(colors::TEXT_PRIMARY),
            row![view_indicator(system), view_indicator(connection)].spacing(spacing::XL),
        ]
        .spacing(spacing::MD),
    );

    let cards = Row::with_children(cards.into_iter().map(view_stat_card))
        .spacing(spacing::MD)
        .width(Length::Fill);

    let mut chart = AnomalyTrend::new(trend);
    if let Some(thresholds) = state.saved_thresholds() {
        chart = chart.thresholds(thresholds);
    }
    let trend_graph = Canvas::new(chart)
        .width(Length::Fill)
        .height(Length::Fixed(220.0));

    column![
        status,
        cards,
        panel(trend_graph),
        view_recent_alerts(recent_alerts),
    ]
    .spacing(spacing::LG)
    .width(Length::Fill)
    .into()
}

/// Status light with its caption
fn view_indicator(indicator: StatusIndicator) -> Element<'static, Message> {
    let color = colors::status_color(indicator.ok);
    let light = container(text(""))
        .width(Length::Fixed(12.0))
        .height(Length::Fixed(12.0))
        .style(move |_theme| container::Style {
            background: Some(color.into()),
            border: iced::Border {
                color: colors::with_alpha(color, 0.4),
                width: 2.0,
                radius: radius::ROUND.into(),
            },
            ..Default::default()
        });

    row![
        light,
        text(format!("{}:", indicator.label))
            .size(font_size::BASE)
            .color(colors::TEXT_SECONDARY),
        text(indicator.value)
            .size(font_size::BASE)
            .color(colors::TEXT_PRIMARY),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center)
    .into()
}

fn view_stat_card(card: StatCard) -> Element<'static, Message> {
    let accent = colors::tone_color(card.tone);

    let body = column![
        text(card.title)
            .size(font_size::SM)
            .color(colors::TEXT_SECONDARY),
        text(card.value).size(font_size::DISPLAY).color(accent),
    ]
    .spacing(spacing::SM);

    container(body)
        .padding(spacing::MD)
        .width(Length::FillPortion(1))
        .style(move |_theme| container::Style {
            background: Some(colors::BG_SURFACE.into()),
            border: iced::Border {
                color: colors::with_alpha(accent, 0.35),
                width: 1.0,
                radius: radius::LG.into(),
            },
            ..Default::default()
        })
        .into()
}

fn view_recent_alerts(recent: RecentAlerts) -> Element<'static, Message> {
    let view_all = button(text("View All").size(font_size::SM))
        .on_press(Message::ViewChanged(View::Alerts))
        .padding([spacing::XS, spacing::SM])
        .style(|_theme: &Theme, status| {
            let text_color = match status {
                button::Status::Hovered => colors::ACCENT_CYAN,
                _ => colors::ACCENT_SKY,
            };
            button::Style {
                background: None,
                text_color,
                ..Default::default()
            }
        });

    let header = row![
        text("Recent Alerts")
            .size(font_size::XL)
            .color(colors::TEXT_PRIMARY),
        horizontal_space(),
        view_all,
    ]
    .align_y(Alignment::Center);

    let body: Element<'static, Message> = match recent {
        RecentAlerts::Empty => container(
            text(NO_ALERTS_PLACEHOLDER)
                .size(font_size::BASE)
                .color(colors::TEXT_MUTED),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(spacing::MD)
        .into(),
        RecentAlerts::Rows(rows) => alert_table(rows),
    };

    panel(column![header, body].spacing(spacing::MD))
}
