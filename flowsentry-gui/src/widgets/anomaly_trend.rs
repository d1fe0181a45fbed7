//! Anomaly score trend graph
//!
//! Line graph of alert scores, oldest on the left, with the configured
//! severity thresholds drawn as guide lines.

use crate::message::Message;
use crate::theme::colors;

use chrono::Local;
use flowsentry::alerts::Thresholds;
use flowsentry::dashboard::{format_score, TrendPoint};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{mouse, Color, Point, Rectangle, Renderer, Theme};

/// Anomaly score trend widget
pub struct AnomalyTrend {
    points: Vec<TrendPoint>,
    label: &'static str,
    color: Color,
    min_value: f64,
    max_value: f64,
    grid_lines: u8,
    thresholds: Option<Thresholds>,
}

impl AnomalyTrend {
    /// Create a trend over scores in [0, 1]
    pub fn new(points: Vec<TrendPoint>) -> Self {
        let color = points
            .last()
            .map(|p| colors::score_gradient(p.score))
            .unwrap_or(colors::ACCENT_CYAN);

        Self {
            points,
            label: "Anomaly Score Trend",
            color,
            min_value: 0.0,
            max_value: 1.0,
            grid_lines: 4,
            thresholds: None,
        }
    }

    /// Draw guide lines at the medium and high thresholds
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Vertical position of `value` inside the plot area
    fn y_for(&self, value: f64, top: f32, height: f32) -> f32 {
        let range = (self.max_value - self.min_value).max(f64::EPSILON);
        let normalized = ((value - self.min_value) / range).clamp(0.0, 1.0) as f32;
        top + height * (1.0 - normalized)
    }
}

impl canvas::Program<Message> for AnomalyTrend {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let margin_left = 45.0;
        let margin_right = 15.0;
        let margin_top = 30.0;
        let margin_bottom = 25.0;

        let graph_width = bounds.width - margin_left - margin_right;
        let graph_height = bounds.height - margin_top - margin_bottom;
        let bottom = margin_top + graph_height;

        // ═══════════════════════════════════════════════════════════════════════
        // HEADER
        // ═══════════════════════════════════════════════════════════════════════
        frame.fill_text(Text {
            content: self.label.to_string(),
            position: Point::new(margin_left, 12.0),
            color: colors::TEXT_PRIMARY,
            size: 14.0.into(),
            horizontal_alignment: Horizontal::Left,
            vertical_alignment: Vertical::Center,
            ..Text::default()
        });

        if let Some(latest) = self.points.last() {
            frame.fill_text(Text {
                content: format_score(latest.score),
                position: Point::new(bounds.width - margin_right, 12.0),
                color: self.color,
                size: 14.0.into(),
                horizontal_alignment: Horizontal::Right,
                vertical_alignment: Vertical::Center,
                ..Text::default()
            });
        }

        let bg_rect = Path::rectangle(
            Point::new(margin_left, margin_top),
            iced::Size::new(graph_width, graph_height),
        );
        frame.fill(&bg_rect, colors::BG_ELEVATED);

        // ═══════════════════════════════════════════════════════════════════════
        // GRID
        // ═══════════════════════════════════════════════════════════════════════
        let value_range = self.max_value - self.min_value;
        for i in 0..=self.grid_lines {
            let ratio = i as f32 / self.grid_lines as f32;
            let y = margin_top + graph_height * (1.0 - ratio);
            let value = self.min_value + value_range * ratio as f64;

            let line = Path::line(
                Point::new(margin_left, y),
                Point::new(margin_left + graph_width, y),
            );
            frame.stroke(
                &line,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(colors::with_alpha(colors::BG_OVERLAY, 0.5)),
            );

            frame.fill_text(Text {
                content: format!("{:.2}", value),
                position: Point::new(margin_left - 8.0, y),
                color: colors::TEXT_MUTED,
                size: 10.0.into(),
                horizontal_alignment: Horizontal::Right,
                vertical_alignment: Vertical::Center,
                ..Text::default()
            });
        }

        if let Some(thresholds) = self.thresholds {
            for (value, color) in [
                (thresholds.medium, colors::ACCENT_YELLOW),
                (thresholds.high, colors::ACCENT_RED),
            ] {
                let y = self.y_for(value, margin_top, graph_height);
                let guide = Path::line(
                    Point::new(margin_left, y),
                    Point::new(margin_left + graph_width, y),
                );
                frame.stroke(
                    &guide,
                    Stroke::default()
                        .with_width(1.0)
                        .with_color(colors::with_alpha(color, 0.45)),
                );
            }
        }

        // ═══════════════════════════════════════════════════════════════════════
        // DATA
        // ═══════════════════════════════════════════════════════════════════════
        if self.points.len() >= 2 {
            let count = self.points.len();
            let x_step = graph_width / (count - 1) as f32;
            let position = |i: usize, score: f64| {
                Point::new(
                    margin_left + i as f32 * x_step,
                    self.y_for(score, margin_top, graph_height),
                )
            };

            let fill_path = Path::new(|builder| {
                builder.move_to(Point::new(margin_left, bottom));
                for (i, point) in self.points.iter().enumerate() {
                    builder.line_to(position(i, point.score));
                }
                builder.line_to(Point::new(margin_left + graph_width, bottom));
                builder.close();
            });
            frame.fill(&fill_path, colors::with_alpha(self.color, 0.1));

            let line = Path::new(|builder| {
                for (i, point) in self.points.iter().enumerate() {
                    if i == 0 {
                        builder.move_to(position(i, point.score));
                    } else {
                        builder.line_to(position(i, point.score));
                    }
                }
            });

            // Glow under the core line
            frame.stroke(
                &line,
                Stroke::default()
                    .with_width(5.0)
                    .with_color(colors::with_alpha(self.color, 0.2))
                    .with_line_cap(canvas::LineCap::Round)
                    .with_line_join(canvas::LineJoin::Round),
            );
            frame.stroke(
                &line,
                Stroke::default()
                    .with_width(2.0)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round)
                    .with_line_join(canvas::LineJoin::Round),
            );

            if let Some(latest) = self.points.last() {
                let end = position(count - 1, latest.score);
                frame.fill(
                    &Path::circle(end, 8.0),
                    colors::with_alpha(self.color, 0.2),
                );
                frame.fill(&Path::circle(end, 4.5), self.color);
            }
        } else {
            let message = if self.points.is_empty() {
                "No alerts yet"
            } else {
                "Not enough data"
            };
            frame.fill_text(Text {
                content: message.to_string(),
                position: Point::new(
                    margin_left + graph_width / 2.0,
                    margin_top + graph_height / 2.0,
                ),
                color: colors::TEXT_MUTED,
                size: 12.0.into(),
                horizontal_alignment: Horizontal::Center,
                vertical_alignment: Vertical::Center,
                ..Text::default()
            });
        }

        // ═══════════════════════════════════════════════════════════════════════
        // TIME AXIS
        // ═══════════════════════════════════════════════════════════════════════
        if let (Some(first), Some(last)) = (self.points.first(), self.points.last()) {
            for (point, x, align) in [
                (first, margin_left, Horizontal::Left),
                (last, bounds.width - margin_right, Horizontal::Right),
            ] {
                frame.fill_text(Text {
                    content: point
                        .timestamp
                        .with_timezone(&Local)
                        .format("%H:%M:%S")
                        .to_string(),
                    position: Point::new(x, bounds.height - 8.0),
                    color: colors::TEXT_MUTED,
                    size: 9.0.into(),
                    horizontal_alignment: align,
                    vertical_alignment: Vertical::Center,
                    ..Text::default()
                });
            }
        }

        let border = Path::rectangle(
            Point::new(margin_left, margin_top),
            iced::Size::new(graph_width, graph_height),
        );
        frame.stroke(
            &border,
            Stroke::default()
                .with_width(1.0)
                .with_color(colors::BG_OVERLAY),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn points(scores: &[f64]) -> Vec<TrendPoint> {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| TrendPoint {
                timestamp: base + chrono::Duration::seconds(i as i64),
                score,
            })
            .collect()
    }

    #[test]
    fn test_trend_fixed_range() {
        let trend = AnomalyTrend::new(points(&[0.4, 0.9]));
        assert_eq!(trend.min_value, 0.0);
        assert_eq!(trend.max_value, 1.0);
        assert_eq!(trend.label, "Anomaly Score Trend");
    }

    #[test]
    fn test_trend_empty_uses_accent() {
        let trend = AnomalyTrend::new(Vec::new());
        assert_eq!(trend.color, colors::ACCENT_CYAN);
        assert!(trend.thresholds.is_none());
    }

    #[test]
    fn test_y_mapping_clamps() {
        let trend = AnomalyTrend::new(Vec::new());
        assert_eq!(trend.y_for(1.0, 10.0, 100.0), 10.0);
        assert_eq!(trend.y_for(0.0, 10.0, 100.0), 110.0);
        assert_eq!(trend.y_for(3.0, 10.0, 100.0), 10.0);
        assert_eq!(trend.y_for(-1.0, 10.0, 100.0), 110.0);
    }

    #[test]
    fn test_thresholds_builder() {
        let trend = AnomalyTrend::new(points(&[0.2])).thresholds(Thresholds::default());
        assert_eq!(trend.thresholds, Some(Thresholds::default()));
    }
}
