//! Parrot/neon theme tokens for the range slider TUI
//!
//! # Color Palette
//! - **Accent**: Electric cyan (focus, highlighted segment)
//! - **Positive**: Neon green (non-negative gaps)
//! - **Negative**: Hot pink (crossed handles, negative gaps)
//! - **Warning**: Neon orange (rejected input, dropped commits)
//! - **Neutral**: Cool purple (handle glyphs at rest)
//! - **Muted**: Steel blue (track, hints, scale labels)

use ratatui::style::{Color, Modifier, Style};

/// Parrot/neon theme for the slider TUI
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Electric cyan accent (focus, highlights)
    pub accent: Color,
    /// Neon green (non-negative readouts)
    pub positive: Color,
    /// Hot pink (negative readouts)
    pub negative: Color,
    /// Neon orange (warnings)
    pub warning: Color,
    /// Cool purple (idle handles)
    pub neutral: Color,
    /// Steel blue (muted text, bare track)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
        }
    }

    /// Gap readouts: green while the handles are in order, pink once crossed.
    pub fn gap_color(&self, gap: f64) -> Color {
        if gap >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }

    /// Handle glyph colour; a dragged handle lights up.
    pub fn handle_color(&self, dragging: bool) -> Color {
        if dragging {
            self.accent
        } else {
            self.neutral
        }
    }
}

// Free-standing styles used by the render functions.

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn negative() -> Style {
    Style::default().fg(Theme::default().negative)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

pub fn text() -> Style {
    Style::default().fg(Theme::default().text_primary)
}

pub fn gap(value: f64) -> Style {
    Style::default().fg(Theme::default().gap_color(value))
}

pub fn handle(dragging: bool) -> Style {
    let style = Style::default().fg(Theme::default().handle_color(dragging));
    if dragging {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}
