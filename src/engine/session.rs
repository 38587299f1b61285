use crate::annotation::{
    assemble, classify, legend_entries, LegendEntry, Mode, ProcessedToken, RenderFragment, Token,
};
use crate::engine::analyzer::{AnalysisRequest, AnalysisResponse, AnalyzerError};
use crate::engine::error::HighlightError;
use tracing::{debug, info, warn};

/// Highlighting state: the text, the last good analysis and the current mode.
///
/// Raw tokens are the cache; processed tokens are rebuilt from them on every
/// mode change without asking the analyzer again.
#[derive(Debug, Default)]
pub struct HighlightSession {
    text: String,
    raw_tokens: Vec<Token>,
    processed: Vec<ProcessedToken>,
    entity_count: usize,
    sentence_count: usize,
    mode: Mode,
    loading: bool,
    error: Option<HighlightError>,
}

impl HighlightSession {
    pub fn new(text: String, mode: Mode) -> Self {
        Self {
            text,
            mode,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear_text(&mut self) {
        self.text.clear();
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&HighlightError> {
        self.error.as_ref()
    }

    pub fn raw_tokens(&self) -> &[Token] {
        &self.raw_tokens
    }

    pub fn processed(&self) -> &[ProcessedToken] {
        &self.processed
    }

    pub fn has_result(&self) -> bool {
        !self.processed.is_empty()
    }

    /// Token, entity and sentence counts from the last analysis.
    pub fn analysis_summary(&self) -> (usize, usize, usize) {
        (self.raw_tokens.len(), self.entity_count, self.sentence_count)
    }

    /// Validate the text and mark a request as outstanding.
    ///
    /// Blank text is rejected before anything is sent, and no second
    /// request is handed out while one is in flight.
    pub fn begin_analysis(&mut self) -> Result<AnalysisRequest, HighlightError> {
        if self.loading {
            debug!("analysis already in flight, ignoring trigger");
            return Err(HighlightError::Busy);
        }
        if self.text.trim().is_empty() {
            self.error = Some(HighlightError::EmptyInput);
            return Err(HighlightError::EmptyInput);
        }

        self.loading = true;
        self.error = None;
        Ok(AnalysisRequest {
            text: self.text.clone(),
        })
    }

    /// Apply the analyzer's answer. Failures keep the previous render.
    pub fn finish_analysis(&mut self, result: Result<AnalysisResponse, AnalyzerError>) {
        self.loading = false;

        match result {
            Ok(response) => {
                info!(
                    tokens = response.tokens.len(),
                    entities = response.entities.len(),
                    "analysis applied"
                );
                self.entity_count = response.entities.len();
                self.sentence_count = response.sentences.len();
                self.raw_tokens = response.tokens;
                self.processed = classify(&self.raw_tokens, self.mode);
            }
            Err(err) => {
                warn!(error = %err, "analysis failed");
                self.error = Some(HighlightError::AnalysisFailed);
            }
        }
    }

    /// Switch modes by reclassifying the cached tokens.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.processed = classify(&self.raw_tokens, mode);
        debug!(%mode, "mode changed");
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn fragments(&self) -> Vec<RenderFragment> {
        assemble(&self.processed, self.mode)
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        legend_entries(&self.processed, self.mode)
    }
}
