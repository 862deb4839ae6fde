//! Artwork table with its paginator and the detail panel for the cursor row.

use crate::nav::Focus;
use crate::state::App;
use crate::theme::row_color;
use crate::widgets::{DetailPanel, Paginator};
use artic_core::ArtworkRecord;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

const COLUMN_WIDTHS: [Constraint; 6] = [
    Constraint::Length(3),
    Constraint::Percentage(30),
    Constraint::Percentage(15),
    Constraint::Percentage(35),
    Constraint::Length(10),
    Constraint::Length(10),
];

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    render_table(f, app, chunks[0]);

    let paginator = Paginator {
        window: app.table.window,
        shown: app.table.records.len(),
        total_records: app.table.total_records,
        loading: app.table.loading,
        style: Style::default().fg(app.theme.primary),
        loading_style: Style::default().fg(app.theme.warning),
    };
    paginator.render(f, chunks[1]);
}

fn render_table(f: &mut Frame<'_>, app: &App, area: Rect) {
    let header = Row::new([
        Cell::from("[ ]"),
        Cell::from("▼ Title (s)"),
        Cell::from("Place of Origin"),
        Cell::from("Artist Display"),
        Cell::from("Date Start"),
        Cell::from("Date End"),
    ])
    .style(
        Style::default()
            .fg(app.theme.tertiary)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .table
        .records
        .iter()
        .map(|record| {
            let checked = app.selection.contains(&record.title);
            table_row(record, checked).style(Style::default().fg(row_color(checked, &app.theme)))
        })
        .collect();

    let focused = app.focus == Focus::Table;
    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(
            Block::default()
                .title(Focus::Table.title())
                .borders(Borders::ALL)
                .border_style(app.theme.border_style(focused)),
        )
        .highlight_style(app.theme.highlight_style());

    let mut state = TableState::default();
    state.select(app.table.cursor);
    f.render_stateful_widget(table, area, &mut state);
}

fn table_row(record: &ArtworkRecord, checked: bool) -> Row<'static> {
    let checkbox = if checked { "[x]" } else { "[ ]" };
    Row::new([
        Cell::from(checkbox),
        Cell::from(record.title.clone()),
        Cell::from(record.origin().to_string()),
        // Only the first line fits a table row.
        Cell::from(Line::from(
            record.artist_display.lines().next().unwrap_or("").to_string(),
        )),
        Cell::from(format_year(record.date_start)),
        Cell::from(format_year(record.date_end)),
    ])
}

pub fn format_year(year: Option<i32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_default()
}

/// Fields of the record under the table cursor.
pub fn render_detail(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut fields = Vec::new();
    if let Some(record) = app.table.cursor_record() {
        fields.push(("Title", record.title.clone()));
        fields.push(("Place of Origin", record.origin().to_string()));
        fields.push(("Artist", record.artist_display.clone()));
        fields.push(("Date Start", format_year(record.date_start)));
        fields.push(("Date End", format_year(record.date_end)));
        if let Some(inscriptions) = &record.inscriptions {
            fields.push(("Inscriptions", inscriptions.clone()));
        }
    }

    let detail = DetailPanel {
        title: "Details",
        fields,
        style: Style::default().fg(app.theme.secondary),
        empty_text: "No artwork under the cursor.",
    };
    detail.render(f, area);
}
