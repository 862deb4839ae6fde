//! Detail panel widget for showing field/value pairs.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct DetailPanel<'a> {
    pub title: &'a str,
    pub fields: Vec<(&'a str, String)>,
    pub style: Style,
    pub empty_text: &'a str,
}

impl<'a> DetailPanel<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let lines: Vec<Line> = if self.fields.is_empty() {
            vec![Line::from(self.empty_text)]
        } else {
            self.fields
                .iter()
                .flat_map(|(label, value)| {
                    // Multi-line values (artist_display carries a newline)
                    // continue under the label.
                    let mut parts = value.lines();
                    let first = Line::from(vec![
                        Span::styled(format!("{}: ", label), self.style),
                        Span::raw(parts.next().unwrap_or("").to_string()),
                    ]);
                    std::iter::once(first)
                        .chain(parts.map(|rest| Line::from(format!("  {}", rest))))
                        .collect::<Vec<_>>()
                })
                .collect()
        };

        let widget = Paragraph::new(Text::from(lines))
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .wrap(Wrap { trim: true });

        f.render_widget(widget, area);
    }
}
