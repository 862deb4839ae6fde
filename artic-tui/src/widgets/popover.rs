//! Floating boxes drawn over the main layout.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Numeric input with a confirm hint.
pub struct NumberInput<'a> {
    pub title: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub hint: String,
    pub style: Style,
    pub hint_style: Style,
}

impl<'a> NumberInput<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let rect = centered_rect(44, 6, area);
        let input = if self.value.is_empty() {
            Span::styled(self.placeholder, self.hint_style)
        } else {
            Span::styled(self.value, self.style)
        };
        let text = Text::from(vec![
            Line::from(vec![Span::raw("> "), input, Span::styled("_", self.style)]),
            Line::from(""),
            Line::from(Span::styled(self.hint.clone(), self.hint_style)),
        ]);
        let widget = Paragraph::new(text).block(
            Block::default()
                .title(self.title)
                .borders(Borders::ALL)
                .border_style(self.style),
        );
        f.render_widget(Clear, rect);
        f.render_widget(widget, rect);
    }
}

/// Plain message box.
pub struct MessageBox<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub style: Style,
}

impl<'a> MessageBox<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let height = self.message.lines().count() as u16 + 2;
        let rect = centered_rect(72, height, area);
        let widget = Paragraph::new(self.message)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(self.title)
                    .borders(Borders::ALL)
                    .border_style(self.style),
            );
        f.render_widget(Clear, rect);
        f.render_widget(widget, rect);
    }
}
