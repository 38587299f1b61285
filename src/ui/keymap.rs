use crate::app::{AppEvent, AppMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translate a key press into an application event for the current mode.
pub fn key_to_event(mode: AppMode, key: KeyEvent) -> AppEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppEvent::Quit;
    }

    match mode {
        AppMode::Editing => match key.code {
            KeyCode::Enter => AppEvent::Submit,
            KeyCode::Backspace => AppEvent::Backspace,
            KeyCode::Esc => AppEvent::Cancel,
            KeyCode::Tab => AppEvent::ToggleMode,
            KeyCode::Char(c) => AppEvent::Insert(c),
            _ => AppEvent::None,
        },
        AppMode::Browsing => match key.code {
            KeyCode::Left | KeyCode::Char('h') => AppEvent::SelectPrevious,
            KeyCode::Right | KeyCode::Char('l') => AppEvent::SelectNext,
            KeyCode::Tab | KeyCode::Char('m') => AppEvent::ToggleMode,
            KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('i') => AppEvent::Edit,
            KeyCode::Char('r') => AppEvent::Analyze,
            KeyCode::Char('?') => AppEvent::Help,
            KeyCode::Char('q') => AppEvent::Quit,
            _ => AppEvent::None,
        },
        AppMode::Help => AppEvent::Cancel,
        AppMode::Quit => AppEvent::None,
    }
}
