//! Read-only summary of the selected rows.

use crate::nav::Focus;
use crate::state::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus == Focus::Selection;
    let title = format!("{} ({})", Focus::Selection.title(), app.selection.records.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(focused));

    if app.selection.records.is_empty() {
        let empty = Paragraph::new("No rows selected.")
            .style(Style::default().fg(app.theme.text_dim))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .selection
        .records
        .iter()
        .map(|record| {
            let artist = record.artist_display.lines().next().unwrap_or("");
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(
                    record.title.clone(),
                    Style::default().fg(app.theme.primary),
                )),
                Line::from(format!("  {}", artist)),
                Line::from(Span::styled(
                    format!("  {}", record.origin()),
                    Style::default().fg(app.theme.text_dim),
                )),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(app.selection.cursor);

    let list = List::new(items)
        .block(block)
        .highlight_style(app.theme.highlight_style());
    f.render_stateful_widget(list, area, &mut state);
}
