//! SynthBrute theme and color utilities.

use crate::notifications::NotificationLevel;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct SynthBruteTheme {
    pub bg_highlight: Color,
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl SynthBruteTheme {
    pub fn synthbrute() -> Self {
        Self {
            bg_highlight: Color::Rgb(42, 42, 42),
            primary: Color::Rgb(0, 255, 255),
            secondary: Color::Rgb(255, 0, 255),
            tertiary: Color::Rgb(255, 255, 0),
            success: Color::Rgb(0, 255, 0),
            warning: Color::Rgb(255, 255, 0),
            error: Color::Rgb(255, 0, 0),
            info: Color::Rgb(0, 255, 255),
            text: Color::Rgb(255, 255, 255),
            text_dim: Color::Rgb(136, 136, 136),
            border: Color::Rgb(68, 68, 68),
            border_focus: Color::Rgb(0, 255, 255),
        }
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.border_focus } else { self.border };
        Style::default().fg(color)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.bg_highlight)
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }
}

pub fn notification_color(level: NotificationLevel, theme: &SynthBruteTheme) -> Color {
    match level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Error => theme.error,
        NotificationLevel::Success => theme.success,
    }
}

/// Checked rows stand out from the rest of the page.
pub fn row_color(checked: bool, theme: &SynthBruteTheme) -> Color {
    if checked {
        theme.secondary
    } else {
        theme.text
    }
}
