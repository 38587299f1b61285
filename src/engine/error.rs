use thiserror::Error;

/// Errors surfaced to the user while highlighting.
///
/// Messages are shown verbatim in the status line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HighlightError {
    /// Blank input; no request is sent.
    #[error("Please enter some text to analyze")]
    EmptyInput,

    /// A request is already outstanding.
    #[error("Highlighting...")]
    Busy,

    /// Any analyzer failure, whatever the cause.
    #[error("Failed to Highlight Syntax. Please try again.")]
    AnalysisFailed,
}
