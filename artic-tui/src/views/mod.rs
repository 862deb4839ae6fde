//! Top-level layout: header, table and side panels, footer, overlays.

pub mod selection;
pub mod table;

use crate::state::App;
use crate::theme::notification_color;
use crate::widgets::{MessageBox, NumberInput};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HELP_LINE: &str =
    "j/k move • h/l page • Space toggle • a page • s select N • c clear • Tab pane • ? help • q quit";

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let screen = f.size();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(screen);

    render_header(f, app, layout[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(layout[1]);
    table::render(f, app, body[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(body[1]);
    table::render_detail(f, app, side[0]);
    selection::render(f, app, side[1]);

    render_footer(f, app, layout[2]);

    if let Some(popover) = &app.popover {
        let input = NumberInput {
            title: "Select Rows...",
            value: &popover.input,
            placeholder: "Select rows...",
            hint: format!("max {} • Enter select • Esc cancel", app.table.total_records),
            style: Style::default().fg(app.theme.primary),
            hint_style: Style::default().fg(app.theme.text_dim),
        };
        input.render(f, screen);
    }

    if let Some(modal) = &app.modal {
        let message = MessageBox {
            title: &modal.title,
            message: &modal.message,
            style: Style::default().fg(app.theme.secondary),
        };
        message.render(f, screen);
    }
}

pub fn header_title(app: &App) -> String {
    let window = app.table.window;
    let mut title = format!(
        "ARTIC BROWSER | Page {}/{} | {} rows/page | {} artworks | {} selected",
        window.page(),
        window.page_count(app.table.total_records).max(1),
        window.rows(),
        app.table.total_records,
        app.selection.records.len(),
    );
    if app.table.loading {
        title.push_str(" | loading");
    }
    if app.selection_in_flight {
        title.push_str(" | selecting");
    }
    title
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        header_title(app),
        Style::default().fg(app.theme.primary),
    ));
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (text, style) = if let Some(note) = app.notifications.last() {
        (
            format!("{}: {}", note.level.label(), note.message),
            Style::default().fg(notification_color(note.level, &app.theme)),
        )
    } else {
        (HELP_LINE.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}
