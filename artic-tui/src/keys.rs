//! Keybinding definitions for the TUI.
//!
//! Two maps: the normal table bindings and the ones active while the
//! selection popover has the keyboard.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    MoreRows,
    FewerRows,
    ToggleRow,
    TogglePage,
    ClearSelection,
    OpenSelect,
    Reload,
    SwitchFocus,
    OpenHelp,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Digit(u8),
    Backspace,
    Confirm,
    Cancel,
    Quit,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Reload),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchFocus),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => Some(Action::NextPage),
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => Some(Action::PrevPage),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::FirstPage),
        KeyCode::End | KeyCode::Char('G') => Some(Action::LastPage),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::MoreRows),
        KeyCode::Char('-') => Some(Action::FewerRows),
        KeyCode::Char(' ') => Some(Action::ToggleRow),
        KeyCode::Char('a') => Some(Action::TogglePage),
        KeyCode::Char('c') => Some(Action::ClearSelection),
        KeyCode::Char('s') => Some(Action::OpenSelect),
        _ => None,
    }
}

pub fn map_input_key(event: KeyEvent) -> Option<InputAction> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(InputAction::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char(c) if c.is_ascii_digit() => Some(InputAction::Digit(c as u8 - b'0')),
        KeyCode::Backspace | KeyCode::Delete => Some(InputAction::Backspace),
        KeyCode::Enter => Some(InputAction::Confirm),
        KeyCode::Esc => Some(InputAction::Cancel),
        _ => None,
    }
}
