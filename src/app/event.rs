use crate::annotation::Mode;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Insert(char),
    Backspace,
    Submit,
    Cancel,
    Edit,
    SelectNext,
    SelectPrevious,
    ToggleMode,
    SetMode(Mode),
    Analyze,
    LoadFile(String),
    LoadClipboard,
    ClearText,
    Help,
    Quit,
    InvalidCommand(String),
    None,
}
