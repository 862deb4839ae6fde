//! Application state and view state definitions.

use crate::api_client::RestClient;
use crate::config::TuiConfig;
use crate::nav::Focus;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::SynthBruteTheme;
use artic_core::{ArtworkPage, ArtworkRecord, PageWindow, SelectionRequest};
use chrono::{DateTime, Utc};

/// How long a notification stays in the footer.
pub const NOTIFICATION_TTL_MS: i64 = 5_000;

#[derive(Clone)]
pub struct App {
    pub config: TuiConfig,
    pub theme: SynthBruteTheme,
    pub api: RestClient,
    pub focus: Focus,

    pub table: TableViewState,
    pub selection: SelectionViewState,

    pub notifications: Vec<Notification>,
    pub popover: Option<SelectPopover>,
    pub modal: Option<Modal>,

    /// A selection task is running; only one at a time.
    pub selection_in_flight: bool,
    page_sizes: Vec<u64>,
    pending_load: Option<PageWindow>,
}

impl App {
    /// The initial page load is queued immediately.
    pub fn new(config: TuiConfig, api: RestClient) -> Self {
        let theme = SynthBruteTheme::synthbrute();
        let page_sizes = config.page_size_options();
        let window = PageWindow::new(0, config.rows_per_page);
        let mut app = Self {
            config,
            theme,
            api,
            focus: Focus::Table,
            table: TableViewState::new(window),
            selection: SelectionViewState::new(),
            notifications: Vec::new(),
            popover: None,
            modal: None,
            selection_in_flight: false,
            page_sizes,
            pending_load: None,
        };
        app.request_load();
        app
    }

    // ------------------------------------------------------------------------
    // Paging
    // ------------------------------------------------------------------------

    /// Move to `window`, queueing exactly one load if it differs from the
    /// current one.
    pub fn set_window(&mut self, window: PageWindow) {
        if window != self.table.window {
            self.table.window = window;
            self.request_load();
        }
    }

    /// Queue a load of the current window. A load queued earlier but not
    /// yet issued is replaced.
    pub fn request_load(&mut self) {
        self.pending_load = Some(self.table.window);
        self.table.loading = true;
    }

    /// Window to fetch next, if any. Each queued load is handed out once.
    pub fn take_pending_load(&mut self) -> Option<PageWindow> {
        self.pending_load.take()
    }

    pub fn next_page(&mut self) {
        if let Some(window) = self.table.window.next(self.table.total_records) {
            self.set_window(window);
        }
    }

    pub fn prev_page(&mut self) {
        if let Some(window) = self.table.window.previous() {
            self.set_window(window);
        }
    }

    pub fn first_page(&mut self) {
        self.set_window(self.table.window.first_page());
    }

    pub fn last_page(&mut self) {
        self.set_window(self.table.window.last_page(self.table.total_records));
    }

    /// Step to the next larger page size option.
    pub fn more_rows(&mut self) {
        let rows = self.table.window.rows();
        if let Some(&next) = self.page_sizes.iter().find(|&&size| size > rows) {
            self.set_window(self.table.window.with_rows(next));
        }
    }

    /// Step to the next smaller page size option.
    pub fn fewer_rows(&mut self) {
        let rows = self.table.window.rows();
        if let Some(&prev) = self.page_sizes.iter().rev().find(|&&size| size < rows) {
            self.set_window(self.table.window.with_rows(prev));
        }
    }

    /// Responses are applied in arrival order, whichever window they were
    /// issued for.
    pub fn apply_page_loaded(&mut self, window: PageWindow, page: ArtworkPage) {
        if window != self.table.window {
            tracing::debug!(
                page = window.page(),
                current_page = self.table.window.page(),
                "Applying response for a window no longer on screen"
            );
        }
        self.table.records = page.records;
        self.table.loaded_window = Some(window);
        self.table.total_records = page.total_records;
        self.table.loading = false;
        self.table.clamp_cursor();
    }

    /// Failed loads keep whatever is on screen.
    pub fn apply_page_failed(&mut self, window: PageWindow, message: &str) {
        tracing::error!(page = window.page(), limit = window.rows(), error = %message, "Error fetching data");
        self.table.loading = false;
    }

    // ------------------------------------------------------------------------
    // Row selection
    // ------------------------------------------------------------------------

    pub fn toggle_cursor_row(&mut self) {
        if let Some(record) = self.table.cursor_record().cloned() {
            self.selection.toggle(record);
        }
    }

    /// Select every row of the page, or unselect them all when every row is
    /// already selected.
    pub fn toggle_page(&mut self) {
        if self.table.records.is_empty() {
            return;
        }
        if self.table.records.iter().all(|r| self.selection.contains(&r.title)) {
            for record in &self.table.records {
                self.selection.remove(&record.title);
            }
        } else {
            for record in &self.table.records {
                self.selection.insert(record.clone());
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn open_select_popover(&mut self) {
        self.popover = Some(SelectPopover::new());
    }

    pub fn popover_digit(&mut self, digit: u8) {
        let max = self.table.total_records;
        if let Some(popover) = self.popover.as_mut() {
            popover.push_digit(digit, max);
        }
    }

    pub fn popover_backspace(&mut self) {
        if let Some(popover) = self.popover.as_mut() {
            popover.backspace();
        }
    }

    /// Close the popover and build the cross-page selection request.
    ///
    /// The request starts from the window the displayed records were loaded
    /// for, which lags `table.window` while a load is in flight or after a
    /// late response. Returns `None` when no popover is open, nothing has
    /// been loaded yet, or a selection is already running.
    pub fn confirm_select_popover(&mut self) -> Option<SelectionRequest> {
        let popover = self.popover.take()?;
        if self.selection_in_flight {
            self.notify(NotificationLevel::Info, "A selection is already in progress.");
            return None;
        }
        let Some(window) = self.table.loaded_window else {
            self.notify(NotificationLevel::Info, "No page loaded yet.");
            return None;
        };
        self.selection_in_flight = true;
        Some(SelectionRequest {
            count: popover.value(),
            total_records: self.table.total_records,
            window,
        })
    }

    pub fn apply_selection_completed(&mut self, requested: u64, records: Vec<ArtworkRecord>) {
        self.selection_in_flight = false;
        let count = records.len();
        self.selection.replace(records);
        tracing::info!(requested, selected = count, "Cross-page selection completed");
        self.notify(NotificationLevel::Success, format!("Selected {} rows.", count));
    }

    /// The previous selection is left untouched.
    pub fn apply_selection_failed(&mut self, requested: u64, message: &str) {
        self.selection_in_flight = false;
        tracing::error!(requested, error = %message, "Cross-page selection failed");
        self.notify(NotificationLevel::Error, format!("Selection failed: {}", message));
    }

    // ------------------------------------------------------------------------
    // Navigation and overlays
    // ------------------------------------------------------------------------

    pub fn switch_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn select_next(&mut self) {
        match self.focus {
            Focus::Table => select_next_index(self.table.records.len(), &mut self.table.cursor),
            Focus::Selection => {
                select_next_index(self.selection.records.len(), &mut self.selection.cursor)
            }
        }
    }

    pub fn select_previous(&mut self) {
        match self.focus {
            Focus::Table => select_prev_index(self.table.records.len(), &mut self.table.cursor),
            Focus::Selection => {
                select_prev_index(self.selection.records.len(), &mut self.selection.cursor)
            }
        }
    }

    pub fn open_help(&mut self) {
        self.modal = Some(Modal {
            title: "Keybindings".to_string(),
            message: HELP_TEXT.to_string(),
        });
    }

    /// Close the topmost overlay, or dismiss the latest notification.
    pub fn cancel(&mut self) {
        if self.popover.take().is_some() || self.modal.take().is_some() {
            return;
        }
        self.notifications.pop();
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    pub fn expire_notifications(&mut self, now: DateTime<Utc>) {
        self.notifications
            .retain(|note| !note.is_expired(now, NOTIFICATION_TTL_MS));
    }
}

const HELP_TEXT: &str = "j/k move • h/l page • g/G first/last page • +/- rows per page\n\
Space toggle row • a toggle page • c clear • s select first N rows\n\
Tab switch pane • Ctrl-r reload • Esc close • q/Ctrl-c quit";

fn select_next_index(len: usize, selected: &mut Option<usize>) {
    if len == 0 {
        *selected = None;
        return;
    }
    *selected = Some(match *selected {
        Some(index) if index < len => (index + 1) % len,
        _ => 0,
    });
}

fn select_prev_index(len: usize, selected: &mut Option<usize>) {
    if len == 0 {
        *selected = None;
        return;
    }
    *selected = Some(match *selected {
        Some(index) if index > 0 && index < len => index - 1,
        _ => len - 1,
    });
}

#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

/// Numeric input of the "select rows" popover.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectPopover {
    pub input: String,
}

impl SelectPopover {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit, clamping the value to `max`.
    pub fn push_digit(&mut self, digit: u8, max: u64) {
        let value = self
            .value()
            .saturating_mul(10)
            .saturating_add(u64::from(digit.min(9)));
        self.input = value.min(max).to_string();
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn value(&self) -> u64 {
        self.input.parse().unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct TableViewState {
    pub records: Vec<ArtworkRecord>,
    pub total_records: u64,
    /// Window on screen; a load for it may still be pending.
    pub window: PageWindow,
    /// Window `records` were loaded for.
    pub loaded_window: Option<PageWindow>,
    pub loading: bool,
    pub cursor: Option<usize>,
}

impl TableViewState {
    pub fn new(window: PageWindow) -> Self {
        Self {
            records: Vec::new(),
            total_records: 0,
            window,
            loaded_window: None,
            loading: false,
            cursor: None,
        }
    }

    pub fn cursor_record(&self) -> Option<&ArtworkRecord> {
        self.cursor.and_then(|index| self.records.get(index))
    }

    fn clamp_cursor(&mut self) {
        self.cursor = match self.cursor {
            _ if self.records.is_empty() => None,
            Some(index) => Some(index.min(self.records.len() - 1)),
            None => Some(0),
        };
    }
}

/// Selected rows, keyed by title, in the order they were selected.
#[derive(Debug, Clone, Default)]
pub struct SelectionViewState {
    pub records: Vec<ArtworkRecord>,
    pub cursor: Option<usize>,
}

impl SelectionViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.records.iter().any(|r| r.title == title)
    }

    pub fn insert(&mut self, record: ArtworkRecord) {
        if !self.contains(&record.title) {
            self.records.push(record);
        }
    }

    pub fn remove(&mut self, title: &str) {
        self.records.retain(|r| r.title != title);
        self.clamp_cursor();
    }

    pub fn toggle(&mut self, record: ArtworkRecord) {
        if self.contains(&record.title) {
            self.remove(&record.title);
        } else {
            self.insert(record);
        }
    }

    /// Replace the whole selection, as a cross-page selection does.
    pub fn replace(&mut self, records: Vec<ArtworkRecord>) {
        self.records = records;
        self.cursor = None;
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.cursor = None;
    }

    fn clamp_cursor(&mut self) {
        if self.records.is_empty() {
            self.cursor = None;
        } else if let Some(index) = self.cursor {
            self.cursor = Some(index.min(self.records.len() - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let config = TuiConfig::default();
        let api = RestClient::new(&config).unwrap();
        App::new(config, api)
    }

    fn records(titles: &[&str]) -> Vec<ArtworkRecord> {
        titles.iter().map(|t| ArtworkRecord::new(*t)).collect()
    }

    fn loaded_app(total: u64) -> App {
        let mut app = app();
        let window = app.take_pending_load().unwrap();
        let titles: Vec<String> = (0..12).map(|i| format!("art-{i}")).collect();
        let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
        app.apply_page_loaded(
            window,
            ArtworkPage {
                records: records(&titles),
                total_records: total,
            },
        );
        app
    }

    #[test]
    fn test_new_app_queues_first_page() {
        let mut app = app();
        assert!(app.table.loading);
        assert_eq!(app.take_pending_load(), Some(PageWindow::new(0, 12)));
        assert_eq!(app.take_pending_load(), None);
    }

    #[test]
    fn test_page_loaded_replaces_records_and_clears_loading() {
        let app = loaded_app(100);
        assert_eq!(app.table.records.len(), 12);
        assert_eq!(app.table.total_records, 100);
        assert!(!app.table.loading);
        assert_eq!(app.table.cursor, Some(0));
    }

    #[test]
    fn test_page_failed_keeps_records() {
        let mut app = loaded_app(100);
        app.next_page();
        let window = app.take_pending_load().unwrap();
        app.apply_page_failed(window, "connection refused");

        assert!(!app.table.loading);
        assert_eq!(app.table.records.len(), 12);
        assert_eq!(app.table.records[0].title, "art-0");
    }

    #[test]
    fn test_next_page_queues_one_load() {
        let mut app = loaded_app(100);
        app.next_page();
        let window = app.take_pending_load().unwrap();
        assert_eq!(window.page(), 2);
        assert_eq!(app.take_pending_load(), None);
        assert!(app.table.loading);
    }

    #[test]
    fn test_prev_page_on_first_page_is_noop() {
        let mut app = loaded_app(100);
        app.prev_page();
        assert_eq!(app.take_pending_load(), None);
        assert!(!app.table.loading);
    }

    #[test]
    fn test_next_page_on_last_page_is_noop() {
        let mut app = loaded_app(12);
        app.next_page();
        assert_eq!(app.take_pending_load(), None);
    }

    #[test]
    fn test_last_page_jumps_to_final_window() {
        let mut app = loaded_app(100);
        app.last_page();
        assert_eq!(app.take_pending_load(), Some(PageWindow::new(96, 12)));
    }

    #[test]
    fn test_rows_change_queues_load_with_new_limit() {
        let mut app = loaded_app(100);
        app.more_rows();
        assert_eq!(app.take_pending_load(), Some(PageWindow::new(0, 24)));
        app.more_rows();
        assert_eq!(app.take_pending_load(), Some(PageWindow::new(0, 48)));
        app.more_rows();
        assert_eq!(app.take_pending_load(), None);
        app.fewer_rows();
        assert_eq!(app.take_pending_load(), Some(PageWindow::new(0, 24)));
    }

    #[test]
    fn test_stale_response_still_applied() {
        let mut app = loaded_app(100);
        app.next_page();
        let second = app.take_pending_load().unwrap();
        app.next_page();
        let _third = app.take_pending_load().unwrap();

        app.apply_page_loaded(
            second,
            ArtworkPage {
                records: records(&["late"]),
                total_records: 100,
            },
        );

        assert_eq!(app.table.window.page(), 3);
        assert_eq!(app.table.records[0].title, "late");
    }

    #[test]
    fn test_toggle_cursor_row() {
        let mut app = loaded_app(100);
        app.toggle_cursor_row();
        assert!(app.selection.contains("art-0"));
        app.toggle_cursor_row();
        assert!(!app.selection.contains("art-0"));
    }

    #[test]
    fn test_toggle_page_selects_then_clears() {
        let mut app = loaded_app(100);
        app.toggle_cursor_row();
        app.toggle_page();
        assert_eq!(app.selection.records.len(), 12);
        app.toggle_page();
        assert!(app.selection.records.is_empty());
    }

    #[test]
    fn test_selection_survives_page_change() {
        let mut app = loaded_app(100);
        app.toggle_cursor_row();
        app.next_page();
        let window = app.take_pending_load().unwrap();
        app.apply_page_loaded(
            window,
            ArtworkPage {
                records: records(&["art-12"]),
                total_records: 100,
            },
        );
        assert!(app.selection.contains("art-0"));
    }

    #[test]
    fn test_popover_clamps_to_total() {
        let mut app = loaded_app(30);
        app.open_select_popover();
        app.popover_digit(2);
        app.popover_digit(5);
        assert_eq!(app.popover.as_ref().unwrap().value(), 25);
        app.popover_digit(0);
        assert_eq!(app.popover.as_ref().unwrap().value(), 30);
        app.popover_backspace();
        assert_eq!(app.popover.as_ref().unwrap().value(), 3);
    }

    #[test]
    fn test_confirm_builds_request_and_closes_popover() {
        let mut app = loaded_app(100);
        app.open_select_popover();
        app.popover_digit(2);
        app.popover_digit(5);

        let request = app.confirm_select_popover().unwrap();

        assert_eq!(request.count, 25);
        assert_eq!(request.total_records, 100);
        assert_eq!(request.window, PageWindow::new(0, 12));
        assert!(app.popover.is_none());
        assert!(app.selection_in_flight);
    }

    #[test]
    fn test_confirm_during_pending_load_starts_from_displayed_page() {
        let mut app = loaded_app(100);
        app.next_page();
        assert!(app.take_pending_load().is_some());
        app.open_select_popover();
        app.popover_digit(2);
        app.popover_digit(0);

        let request = app.confirm_select_popover().unwrap();

        assert_eq!(app.table.window.page(), 2);
        assert_eq!(request.window, PageWindow::new(0, 12));
    }

    #[test]
    fn test_confirm_after_late_response_starts_from_its_page() {
        let mut app = loaded_app(100);
        app.next_page();
        let second = app.take_pending_load().unwrap();
        app.next_page();
        assert!(app.take_pending_load().is_some());
        app.apply_page_loaded(
            second,
            ArtworkPage {
                records: records(&["late"]),
                total_records: 100,
            },
        );
        app.open_select_popover();
        app.popover_digit(5);

        let request = app.confirm_select_popover().unwrap();

        assert_eq!(request.window, second);
    }

    #[test]
    fn test_confirm_before_first_load_is_refused() {
        let mut app = app();
        app.open_select_popover();
        app.popover_digit(5);

        assert!(app.confirm_select_popover().is_none());
        assert!(app.popover.is_none());
        assert!(!app.selection_in_flight);
        assert_eq!(app.notifications.last().unwrap().level, NotificationLevel::Info);
    }

    #[test]
    fn test_confirm_while_in_flight_is_refused() {
        let mut app = loaded_app(100);
        app.open_select_popover();
        assert!(app.confirm_select_popover().is_some());
        app.open_select_popover();
        assert!(app.confirm_select_popover().is_none());
        assert_eq!(app.notifications.last().unwrap().level, NotificationLevel::Info);
    }

    #[test]
    fn test_selection_completed_replaces_selection() {
        let mut app = loaded_app(100);
        app.toggle_cursor_row();
        app.selection_in_flight = true;
        app.apply_selection_completed(2, records(&["x", "y"]));

        assert!(!app.selection_in_flight);
        assert_eq!(app.selection.records, records(&["x", "y"]));
        assert_eq!(app.notifications.last().unwrap().level, NotificationLevel::Success);
    }

    #[test]
    fn test_selection_failed_keeps_previous_selection() {
        let mut app = loaded_app(100);
        app.toggle_cursor_row();
        app.selection_in_flight = true;
        app.apply_selection_failed(25, "HTTP 500: boom");

        assert!(!app.selection_in_flight);
        assert_eq!(app.selection.records, records(&["art-0"]));
        let note = app.notifications.last().unwrap();
        assert_eq!(note.level, NotificationLevel::Error);
        assert!(note.message.contains("HTTP 500"));
    }

    #[test]
    fn test_cancel_closes_overlays_before_notifications() {
        let mut app = loaded_app(100);
        app.notify(NotificationLevel::Info, "hello");
        app.open_help();
        app.cancel();
        assert!(app.modal.is_none());
        assert_eq!(app.notifications.len(), 1);
        app.cancel();
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_select_next_wraps_around() {
        let mut selected = Some(2);
        select_next_index(3, &mut selected);
        assert_eq!(selected, Some(0));
    }

    #[test]
    fn test_select_prev_wraps_around() {
        let mut selected = Some(0);
        select_prev_index(3, &mut selected);
        assert_eq!(selected, Some(2));
    }

    #[test]
    fn test_select_next_empty_list() {
        let mut selected = Some(1);
        select_next_index(0, &mut selected);
        assert_eq!(selected, None);
    }

    #[test]
    fn test_focus_moves_selection_cursor() {
        let mut app = loaded_app(100);
        app.selection.replace(records(&["x", "y"]));
        app.switch_focus();
        app.select_next();
        app.select_next();
        assert_eq!(app.selection.cursor, Some(1));
        assert_eq!(app.table.cursor, Some(0));
    }

    #[test]
    fn test_expire_notifications() {
        let mut app = app();
        app.notify(NotificationLevel::Info, "old");
        let later = Utc::now() + chrono::Duration::milliseconds(NOTIFICATION_TTL_MS + 1);
        app.expire_notifications(later);
        assert!(app.notifications.is_empty());
    }
}

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================
