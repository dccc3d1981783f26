//! Colour palette and style helpers for the quiz player.
//!
//! # Palette
//! - **Accent**: electric cyan (focus, headings)
//! - **Positive**: neon green (correct feedback, progress)
//! - **Negative**: hot pink (incorrect feedback, fatal errors)
//! - **Warning**: neon orange (guidance, pending resets)
//! - **Neutral**: cool purple (decorations, secondary info)
//! - **Muted**: steel blue (disabled controls, hints)

use ratatui::style::{Color, Modifier, Style};

use quizflow_core::FeedbackTone;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub const fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
        }
    }

    /// Colour for a widget's feedback line.
    pub fn feedback_color(&self, tone: FeedbackTone) -> Color {
        match tone {
            FeedbackTone::Success => self.positive,
            FeedbackTone::Error => self.negative,
        }
    }
}

const THEME: Theme = Theme::parrot_neon();

// ── Style helpers ───────────────────────────────────────────────────

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(THEME.positive)
}

pub fn negative() -> Style {
    Style::default().fg(THEME.negative)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn neutral() -> Style {
    Style::default().fg(THEME.neutral)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn feedback(tone: FeedbackTone) -> Style {
    Style::default()
        .fg(THEME.feedback_color(tone))
        .add_modifier(Modifier::BOLD)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

/// The row under the cursor inside the focused widget.
pub fn cursor() -> Style {
    Style::default()
        .fg(THEME.background)
        .bg(THEME.accent)
        .add_modifier(Modifier::BOLD)
}

/// A navigation control, dimmed when disabled.
pub fn control(enabled: bool) -> Style {
    if enabled {
        accent_bold()
    } else {
        muted().add_modifier(Modifier::DIM)
    }
}
