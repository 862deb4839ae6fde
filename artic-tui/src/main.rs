//! Artic TUI entry point.

use artic_core::{select_across_pages, ArtworkRecord, PageWindow, SelectionRequest};
use artic_tui::api_client::RestClient;
use artic_tui::config::TuiConfig;
use artic_tui::error::TuiError;
use artic_tui::events::TuiEvent;
use artic_tui::keys::{map_input_key, map_key, Action, InputAction};
use artic_tui::logging;
use artic_tui::state::App;
use artic_tui::views::render_view;
use crossterm::{
    event::{self, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    logging::init(&config)?;
    let api = RestClient::new(&config)?;
    let mut app = App::new(config, api);

    let _guard = TerminalGuard;
    let mut terminal = setup_terminal()?;

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    let tick_rate = Duration::from_millis(app.config.tick_rate_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        if let Some(window) = app.take_pending_load() {
            spawn_page_load(app.api.clone(), window, event_tx.clone());
        }

        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                app.expire_notifications(chrono::Utc::now());
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, event, &event_tx) {
                    break;
                }
            }
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                let sent = match evt {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        sender.blocking_send(TuiEvent::Input(key))
                    }
                    CrosstermEvent::Resize(..) => sender.blocking_send(TuiEvent::Resize),
                    _ => Ok(()),
                };
                if sent.is_err() {
                    break;
                }
            }
        }
    });
}

/// Loads are never cancelled; whichever response arrives last is shown.
fn spawn_page_load(api: RestClient, window: PageWindow, sender: mpsc::Sender<TuiEvent>) {
    tokio::spawn(async move {
        let event = match api.load_page(window).await {
            Ok(page) => TuiEvent::PageLoaded { window, page },
            Err(err) => TuiEvent::PageFailed {
                window,
                message: err.to_string(),
            },
        };
        let _ = sender.send(event).await;
    });
}

fn spawn_selection(
    api: RestClient,
    request: SelectionRequest,
    loaded: Vec<ArtworkRecord>,
    sender: mpsc::Sender<TuiEvent>,
) {
    tokio::spawn(async move {
        let requested = request.count;
        let event = match select_across_pages(&api, request, &loaded).await {
            Ok(records) => TuiEvent::SelectionCompleted { requested, records },
            Err(err) => TuiEvent::SelectionFailed {
                requested,
                message: err.to_string(),
            },
        };
        let _ = sender.send(event).await;
    });
}

/// Returns `true` when the app should exit.
fn handle_event(app: &mut App, event: TuiEvent, sender: &mpsc::Sender<TuiEvent>) -> bool {
    match event {
        TuiEvent::Input(key) => {
            if app.popover.is_some() {
                match map_input_key(key) {
                    Some(InputAction::Quit) => return true,
                    Some(action) => handle_input_action(app, action, sender),
                    None => {}
                }
            } else if let Some(action) = map_key(key) {
                return handle_action(app, action);
            }
        }
        TuiEvent::PageLoaded { window, page } => app.apply_page_loaded(window, page),
        TuiEvent::PageFailed { window, message } => app.apply_page_failed(window, &message),
        TuiEvent::SelectionCompleted { requested, records } => {
            app.apply_selection_completed(requested, records)
        }
        TuiEvent::SelectionFailed { requested, message } => {
            app.apply_selection_failed(requested, &message)
        }
        TuiEvent::Resize => {}
    }
    false
}

fn handle_input_action(app: &mut App, action: InputAction, sender: &mpsc::Sender<TuiEvent>) {
    match action {
        InputAction::Digit(digit) => app.popover_digit(digit),
        InputAction::Backspace => app.popover_backspace(),
        InputAction::Cancel => app.popover = None,
        InputAction::Quit => {}
        InputAction::Confirm => {
            if let Some(request) = app.confirm_select_popover() {
                tracing::info!(
                    count = request.count,
                    total = request.total_records,
                    page = request.window.page(),
                    "Starting cross-page selection"
                );
                spawn_selection(
                    app.api.clone(),
                    request,
                    app.table.records.clone(),
                    sender.clone(),
                );
            }
        }
    }
}

fn handle_action(app: &mut App, action: Action) -> bool {
    if app.modal.is_some() && !matches!(action, Action::Quit) {
        app.modal = None;
        return false;
    }
    match action {
        Action::Quit => return true,
        Action::MoveDown => app.select_next(),
        Action::MoveUp => app.select_previous(),
        Action::NextPage => app.next_page(),
        Action::PrevPage => app.prev_page(),
        Action::FirstPage => app.first_page(),
        Action::LastPage => app.last_page(),
        Action::MoreRows => app.more_rows(),
        Action::FewerRows => app.fewer_rows(),
        Action::ToggleRow => app.toggle_cursor_row(),
        Action::TogglePage => app.toggle_page(),
        Action::ClearSelection => app.clear_selection(),
        Action::OpenSelect => app.open_select_popover(),
        Action::Reload => app.request_load(),
        Action::SwitchFocus => app.switch_focus(),
        Action::OpenHelp => app.open_help(),
        Action::Cancel => app.cancel(),
    }
    false
}
