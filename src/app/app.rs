use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::{RenderState, Status};
use crate::engine::analyzer::{AnalysisRequest, AnalysisResponse, AnalyzerError};
use crate::engine::error::HighlightError;
use crate::engine::session::HighlightSession;
use crate::engine::source::{load_clipboard, load_file_safe};
use crate::engine::store::TextStore;
use crate::ui::command::{command_to_app_event, parse_command};
use tracing::{info, warn};
use unicode_segmentation::UnicodeSegmentation;

pub struct App {
    mode: AppMode,
    return_mode: AppMode,
    session: HighlightSession,
    input: String,
    selected: usize,
    notice: Option<String>,
    pending: Option<AnalysisRequest>,
    store: Option<TextStore>,
}

impl App {
    pub fn new(session: HighlightSession, store: Option<TextStore>) -> Self {
        let input = session.text().to_string();
        Self {
            mode: AppMode::Editing,
            return_mode: AppMode::Editing,
            session,
            input,
            selected: 0,
            notice: None,
            pending: None,
            store,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn session(&self) -> &HighlightSession {
        &self.session
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Request produced by the last trigger, for the event loop to dispatch.
    pub fn take_pending_request(&mut self) -> Option<AnalysisRequest> {
        self.pending.take()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Insert(c) => {
                self.input.push(c);
            }
            AppEvent::Backspace => {
                if let Some((idx, _)) = self.input.grapheme_indices(true).next_back() {
                    self.input.truncate(idx);
                }
            }
            AppEvent::Submit => self.submit(),
            AppEvent::Cancel => match self.mode {
                AppMode::Help => self.mode = self.return_mode,
                AppMode::Editing if self.session.has_result() => self.mode = AppMode::Browsing,
                _ => {}
            },
            AppEvent::Edit => {
                if self.mode == AppMode::Browsing {
                    self.mode = AppMode::Editing;
                }
            }
            AppEvent::SelectNext => {
                let count = self.session.processed().len();
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            AppEvent::SelectPrevious => {
                self.selected = self.selected.saturating_sub(1);
            }
            AppEvent::ToggleMode => self.session.toggle_mode(),
            AppEvent::SetMode(mode) => self.session.set_mode(mode),
            AppEvent::Analyze => self.request_analysis(),
            AppEvent::LoadFile(path) => match load_file_safe(&path) {
                Ok(text) => self.replace_text(text),
                Err(e) => {
                    warn!(%path, error = %e, "failed to load file");
                    self.notice = Some(e.to_string());
                }
            },
            AppEvent::LoadClipboard => match load_clipboard() {
                Ok(text) => self.replace_text(text),
                Err(e) => {
                    warn!(error = %e, "failed to read clipboard");
                    self.notice = Some(e.to_string());
                }
            },
            AppEvent::ClearText => {
                self.session.clear_text();
                self.input.clear();
                if let Some(store) = &self.store {
                    if let Err(e) = store.clear() {
                        warn!(error = %e, "failed to clear stored text");
                    }
                }
            }
            AppEvent::Help => {
                if self.mode != AppMode::Help {
                    self.return_mode = self.mode;
                    self.mode = AppMode::Help;
                }
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
            AppEvent::InvalidCommand(input) => {
                self.notice = Some(format!("Unknown command: {}", input));
            }
            AppEvent::None => {}
        }
    }

    fn submit(&mut self) {
        let line = self.input.trim();
        if line.starts_with(':') || line.starts_with('@') {
            let event = command_to_app_event(parse_command(line));
            self.input = self.session.text().to_string();
            self.handle_event(event);
            return;
        }
        let text = self.input.clone();
        self.replace_text(text);
    }

    /// New text in the box: remember it and analyze it.
    fn replace_text(&mut self, text: String) {
        self.input = text.clone();
        self.session.set_text(text);
        if let Some(store) = &self.store {
            if let Err(e) = store.save(self.session.text()) {
                warn!(path = %store.path().display(), error = %e, "failed to persist text");
            }
        }
        self.request_analysis();
    }

    fn request_analysis(&mut self) {
        self.notice = None;
        match self.session.begin_analysis() {
            Ok(request) => {
                info!(chars = request.text.chars().count(), "analysis requested");
                self.pending = Some(request);
            }
            Err(HighlightError::Busy) => {}
            Err(e) => {
                info!(error = %e, "analysis not started");
            }
        }
    }

    pub fn finish_analysis(&mut self, result: Result<AnalysisResponse, AnalyzerError>) {
        let succeeded = result.is_ok();
        self.session.finish_analysis(result);
        if succeeded {
            self.selected = 0;
            if self.session.has_result() && self.mode == AppMode::Editing {
                self.mode = AppMode::Browsing;
            }
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let status = if self.session.is_loading() {
            Status::Loading
        } else if let Some(error) = self.session.error() {
            Status::Error(error.to_string())
        } else if let Some(notice) = &self.notice {
            Status::Notice(notice.clone())
        } else {
            Status::Idle
        };

        let fragments = self.session.fragments();
        let selected = (!fragments.is_empty()).then(|| self.selected.min(fragments.len() - 1));

        RenderState {
            app_mode: self.mode,
            highlight_mode: self.session.mode(),
            legend: self.session.legend(),
            fragments,
            selected,
            input: self.input.clone(),
            status,
            summary: self.session.analysis_summary(),
        }
    }
}
