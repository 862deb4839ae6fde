//! Paginator bar shown under the table.

use artic_core::PageWindow;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct Paginator {
    pub window: PageWindow,
    pub shown: usize,
    pub total_records: u64,
    pub loading: bool,
    pub style: Style,
    pub loading_style: Style,
}

impl Paginator {
    /// Text of the bar, e.g. `Page 2 / 9 | 13-24 of 100 | 12 rows`.
    pub fn label(&self) -> String {
        let pages = self.window.page_count(self.total_records).max(1);
        let (from, to) = self.window.shown_range(self.shown);
        format!(
            "Page {} / {} | {}-{} of {} | {} rows",
            self.window.page(),
            pages,
            from,
            to,
            self.total_records,
            self.window.rows()
        )
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans = vec![
            Span::styled("◀ h ", self.style),
            Span::raw(self.label()),
            Span::styled(" l ▶", self.style),
        ];
        if self.loading {
            spans.push(Span::styled("  Loading…", self.loading_style));
        }
        let widget = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, area);
    }
}
