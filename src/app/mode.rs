/// Interaction state of the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Typing into the text box
    Editing,
    /// Moving through highlighted tokens
    Browsing,
    Help,
    Quit,
}

impl AppMode {
    pub fn label(self) -> &'static str {
        match self {
            AppMode::Editing => "EDIT",
            AppMode::Browsing => "BROWSE",
            AppMode::Help => "HELP",
            AppMode::Quit => "QUIT",
        }
    }
}
