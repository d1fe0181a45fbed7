//! Dark theme and color definitions for flowsentry-gui

use iced::theme::{Custom, Palette};
use iced::Theme;
use std::sync::Arc;

/// Color palette
pub mod colors {
    use flowsentry::dashboard::{SeverityStyle, Tone};
    use iced::Color;

    // ═══════════════════════════════════════════════════════════════════════════
    // BACKGROUND LAYERS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Deepest background (#08080c)
    pub const BG_BASE: Color = Color::from_rgb(0.03, 0.03, 0.05);

    /// Cards and sidebar
    pub const BG_SURFACE: Color = Color::from_rgb(0.06, 0.063, 0.094);

    /// Inputs, table headers, graph area
    pub const BG_ELEVATED: Color = Color::from_rgb(0.094, 0.094, 0.14);

    /// Borders and grid lines
    pub const BG_OVERLAY: Color = Color::from_rgb(0.133, 0.133, 0.227);

    /// Subtle white edge on glass panels
    pub const GLASS_BORDER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.1);

    // ═══════════════════════════════════════════════════════════════════════════
    // TEXT
    // ═══════════════════════════════════════════════════════════════════════════

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.96, 0.96, 1.0);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.60, 0.60, 0.73);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.33, 0.33, 0.47);

    // ═══════════════════════════════════════════════════════════════════════════
    // ACCENTS
    // ═══════════════════════════════════════════════════════════════════════════

    pub const ACCENT_CYAN: Color = Color::from_rgb(0.0, 0.83, 1.0);
    pub const ACCENT_GREEN: Color = Color::from_rgb(0.0, 1.0, 0.64);
    pub const ACCENT_ORANGE: Color = Color::from_rgb(1.0, 0.667, 0.0);
    pub const ACCENT_YELLOW: Color = Color::from_rgb(1.0, 0.843, 0.0);
    pub const ACCENT_RED: Color = Color::from_rgb(1.0, 0.176, 0.333);
    pub const ACCENT_PURPLE: Color = Color::from_rgb(0.6, 0.4, 1.0);
    pub const ACCENT_SKY: Color = Color::from_rgb(0.0, 0.667, 1.0);

    /// Badge color for a severity style
    pub fn severity_color(style: SeverityStyle) -> Color {
        match style {
            SeverityStyle::High => ACCENT_RED,
            SeverityStyle::Medium => ACCENT_YELLOW,
            SeverityStyle::Low => ACCENT_GREEN,
            SeverityStyle::Default => TEXT_SECONDARY,
        }
    }

    /// Value color for a stat card tone
    pub fn tone_color(tone: Tone) -> Color {
        match tone {
            Tone::Neutral => ACCENT_SKY,
            Tone::Good => ACCENT_GREEN,
            Tone::Warning => ACCENT_ORANGE,
            Tone::Danger => ACCENT_RED,
        }
    }

    /// Status light color
    pub fn status_color(ok: bool) -> Color {
        if ok {
            ACCENT_GREEN
        } else {
            ACCENT_RED
        }
    }

    /// Line color for an anomaly score in [0, 1]
    pub fn score_gradient(score: f64) -> Color {
        let t = score.clamp(0.0, 1.0) as f32;
        if t < 0.5 {
            lerp(ACCENT_GREEN, ACCENT_YELLOW, t / 0.5)
        } else {
            lerp(ACCENT_YELLOW, ACCENT_RED, (t - 0.5) / 0.5)
        }
    }

    /// Create a color with modified alpha
    pub fn with_alpha(color: Color, alpha: f32) -> Color {
        Color { a: alpha, ..color }
    }

    /// Interpolate between two colors
    pub fn lerp(from: Color, to: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color::from_rgba(
            from.r + (to.r - from.r) * t,
            from.g + (to.g - from.g) * t,
            from.b + (to.b - from.b) * t,
            from.a + (to.a - from.a) * t,
        )
    }
}

/// Create the custom flowsentry dark theme
pub fn flowsentry_theme() -> Theme {
    Theme::Custom(Arc::new(Custom::new(
        "flowsentry-dark".to_string(),
        Palette {
            background: colors::BG_BASE,
            text: colors::TEXT_PRIMARY,
            primary: colors::ACCENT_CYAN,
            success: colors::ACCENT_GREEN,
            danger: colors::ACCENT_RED,
        },
    )))
}

/// Spacing constants
#[allow(dead_code)]
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: u16 = 4;
    /// Small spacing (8px)
    pub const SM: u16 = 8;
    /// Medium spacing (16px)
    pub const MD: u16 = 16;
    /// Large spacing (24px)
    pub const LG: u16 = 24;
    /// Extra large spacing (32px)
    pub const XL: u16 = 32;
}

/// Font sizes
#[allow(dead_code)]
pub mod font_size {
    /// Extra small (10px) - Labels
    pub const XS: u16 = 10;
    /// Small (12px) - Captions
    pub const SM: u16 = 12;
    /// Base (14px) - Body text
    pub const BASE: u16 = 14;
    /// Large (16px) - Emphasis
    pub const LG: u16 = 16;
    /// Extra large (18px) - Subheadings
    pub const XL: u16 = 18;
    /// 2XL (22px) - Headings
    pub const XXL: u16 = 22;
    /// 3XL (28px) - Page titles
    pub const XXXL: u16 = 28;
    /// Display (36px) - Card values
    pub const DISPLAY: u16 = 36;
}

/// Border radius constants
pub mod radius {
    /// Small radius (4px)
    pub const SM: f32 = 4.0;
    /// Medium radius (8px)
    pub const MD: f32 = 8.0;
    /// Large radius (12px)
    pub const LG: f32 = 12.0;
    /// Round (9999px)
    pub const ROUND: f32 = 9999.0;
}
