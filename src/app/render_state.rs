use crate::annotation::{LegendEntry, Mode, RenderFragment};
use crate::app::mode::AppMode;

/// What the status line should say, most urgent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Loading,
    Error(String),
    Notice(String),
    Idle,
}

/// Render state for UI components
pub struct RenderState {
    pub app_mode: AppMode,
    pub highlight_mode: Mode,
    pub fragments: Vec<RenderFragment>,
    pub legend: Vec<LegendEntry>,
    pub selected: Option<usize>,
    pub input: String,
    pub status: Status,
    /// Token, entity and sentence counts of the last analysis
    pub summary: (usize, usize, usize),
}

impl RenderState {
    pub fn selected_fragment(&self) -> Option<&RenderFragment> {
        self.selected.and_then(|i| self.fragments.get(i))
    }

    pub fn has_result(&self) -> bool {
        !self.fragments.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }
}
