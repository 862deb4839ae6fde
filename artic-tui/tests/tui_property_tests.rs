use artic_core::{page_number, ArtworkPage, ArtworkRecord, PageWindow};
use artic_tui::api_client::RestClient;
use artic_tui::config::{ThemeConfig, TuiConfig};
use artic_tui::keys::{map_input_key, map_key, Action, InputAction};
use artic_tui::notifications::NotificationLevel;
use artic_tui::state::App;
use artic_tui::theme::{notification_color, row_color, SynthBruteTheme};
use artic_tui::views::header_title;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use proptest::prelude::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn base_app() -> App {
    let config = TuiConfig::default();
    let api = RestClient::new(&config).unwrap();
    App::new(config, api)
}

fn page_of(first: u64, count: u64, total: u64) -> ArtworkPage {
    ArtworkPage {
        records: (first..first + count)
            .map(|i| ArtworkRecord::new(format!("art-{i}")))
            .collect(),
        total_records: total,
    }
}

/// App with its initial load answered.
fn loaded_app(total: u64) -> App {
    let mut app = base_app();
    let window = app.take_pending_load().unwrap();
    app.apply_page_loaded(window, page_of(0, window.rows().min(total), total));
    app
}

#[test]
fn config_rejects_rows_outside_options() {
    let config = TuiConfig {
        rows_per_page: 10,
        ..TuiConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_requires_theme_name() {
    let config = TuiConfig {
        theme: ThemeConfig {
            name: "unknown".to_string(),
        },
        ..TuiConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_zero_timeout() {
    let config = TuiConfig {
        request_timeout_ms: Some(0),
        ..TuiConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_non_http_base_url() {
    let config = TuiConfig {
        api_base_url: "ftp://api.artic.edu".to_string(),
        ..TuiConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn ctrl_bindings() {
    assert_eq!(map_key(ctrl('c')), Some(Action::Quit));
    assert_eq!(map_key(ctrl('r')), Some(Action::Reload));
    assert_eq!(map_key(ctrl('x')), None);
    assert_eq!(map_input_key(ctrl('c')), Some(InputAction::Quit));
    assert_eq!(map_input_key(ctrl('r')), None);
}

#[test]
fn paging_keys() {
    assert_eq!(map_key(key(KeyCode::Char('l'))), Some(Action::NextPage));
    assert_eq!(map_key(key(KeyCode::Right)), Some(Action::NextPage));
    assert_eq!(map_key(key(KeyCode::Char('h'))), Some(Action::PrevPage));
    assert_eq!(map_key(key(KeyCode::Char('s'))), Some(Action::OpenSelect));
    assert_eq!(map_key(key(KeyCode::Char(' '))), Some(Action::ToggleRow));
}

#[test]
fn popover_keys() {
    assert_eq!(map_input_key(key(KeyCode::Enter)), Some(InputAction::Confirm));
    assert_eq!(map_input_key(key(KeyCode::Esc)), Some(InputAction::Cancel));
    assert_eq!(map_input_key(key(KeyCode::Backspace)), Some(InputAction::Backspace));
    assert_eq!(map_input_key(key(KeyCode::Char('x'))), None);
}

#[test]
fn reload_reissues_current_window() {
    let mut app = loaded_app(100);
    app.next_page();
    let window = app.take_pending_load().unwrap();
    app.apply_page_loaded(window, page_of(12, 12, 100));

    app.request_load();

    assert_eq!(app.take_pending_load(), Some(window));
    assert!(app.table.loading);
}

#[test]
fn header_reports_paging_state() {
    let mut app = loaded_app(100);
    app.toggle_cursor_row();
    assert_eq!(
        header_title(&app),
        "ARTIC BROWSER | Page 1/9 | 12 rows/page | 100 artworks | 1 selected"
    );
    app.next_page();
    assert!(header_title(&app).ends_with("| loading"));
}

#[test]
fn selection_scenario_keeps_fetch_order() {
    let mut app = loaded_app(100);
    app.open_select_popover();
    app.popover_digit(2);
    app.popover_digit(5);
    let request = app.confirm_select_popover().unwrap();
    assert_eq!(request.target(), 25);

    let records: Vec<_> = (0..25).map(|i| ArtworkRecord::new(format!("art-{i}"))).collect();
    app.apply_selection_completed(request.count, records.clone());

    assert_eq!(app.selection.records, records);
    assert!(!app.selection_in_flight);
}

#[test]
fn theme_colors() {
    let theme = SynthBruteTheme::synthbrute();
    assert_eq!(notification_color(NotificationLevel::Error, &theme), theme.error);
    assert_eq!(row_color(true, &theme), theme.secondary);
    assert_eq!(row_color(false, &theme), theme.text);
}

proptest! {
    #[test]
    fn popover_digits_map_to_digit_actions(digit in 0u8..=9u8) {
        let ch = char::from(b'0' + digit);
        prop_assert_eq!(map_input_key(key(KeyCode::Char(ch))), Some(InputAction::Digit(digit)));
        // Digits mean nothing on the table.
        prop_assert_eq!(map_key(key(KeyCode::Char(ch))), None);
    }

    /// Every window change issues exactly one load for
    /// page = floor(first / rows) + 1.
    #[test]
    fn window_change_issues_one_load(first in 0u64..100_000, rows_index in 0usize..3) {
        let rows = [12u64, 24, 48][rows_index];
        let mut app = loaded_app(200_000);
        let target = PageWindow::new(first, rows);

        app.set_window(target);

        if target == PageWindow::new(0, 12) {
            prop_assert_eq!(app.take_pending_load(), None);
        } else {
            let issued = app.take_pending_load().unwrap();
            prop_assert_eq!(issued.page(), page_number(first, rows));
            prop_assert_eq!(issued.rows(), rows);
            prop_assert!(app.table.loading);
            prop_assert_eq!(app.take_pending_load(), None);
        }
    }

    /// Paging forward then back lands on the starting window.
    #[test]
    fn next_then_prev_returns(steps in 1usize..20) {
        let mut app = loaded_app(10_000);
        for _ in 0..steps {
            app.next_page();
        }
        prop_assert_eq!(app.table.window.page(), steps as u64 + 1);
        for _ in 0..steps {
            app.prev_page();
        }
        prop_assert_eq!(app.table.window, PageWindow::new(0, 12));
    }

    #[test]
    fn rows_validation(rows in 1u64..500) {
        let config = TuiConfig {
            rows_per_page: rows,
            rows_per_page_options: vec![rows, rows + 1],
            ..TuiConfig::default()
        };
        prop_assert!(config.validate().is_ok());
    }
}
