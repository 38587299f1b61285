//! Command parsing for the input box
//!
//! Input starting with `:` or `@` is a command rather than text to analyze:
//! - `:q` or `:quit` → Quit
//! - `:h` or `:help` → Help
//! - `:simple`, `:pro` → select highlighting mode; `:mode` toggles
//! - `:analyze` → analyze the current text again
//! - `:clear` → clear the text box
//! - `@filename` → load text from a file
//! - `@@` → load text from the clipboard

use crate::annotation::Mode;
use crate::app::AppEvent;

/// Commands that can be parsed from the input box
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    SetMode(Mode),
    ToggleMode,
    Analyze,
    Clear,
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd.trim() {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            "mode" | "m" => Command::ToggleMode,
            "analyze" | "a" => Command::Analyze,
            "clear" => Command::Clear,
            other => match other.parse::<Mode>() {
                Ok(mode) => Command::SetMode(mode),
                Err(_) => Command::Unknown(input.to_string()),
            },
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::SetMode(mode) => AppEvent::SetMode(mode),
        Command::ToggleMode => AppEvent::ToggleMode,
        Command::Analyze => AppEvent::Analyze,
        Command::Clear => AppEvent::ClearText,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
