use crate::app::{App, AppMode};
use crate::engine::analyzer::{AnalysisResponse, Analyzer, AnalyzerError};
use crate::ui::keymap::key_to_event;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::{
    legend_width, render_details, render_help, render_highlighted_text, render_input,
    render_legend, render_status_line,
};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, error};

type AnalysisResult = Result<AnalysisResponse, AnalyzerError>;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    // Dropped after the terminal so the screen is restored last.
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Run until the user quits.
    ///
    /// Analysis runs on a worker thread and reports back over a channel, so
    /// the screen keeps drawing while a request is outstanding.
    pub fn run_event_loop(&mut self, app: &mut App, analyzer: Arc<dyn Analyzer>) -> io::Result<()> {
        let (tx, rx): (Sender<AnalysisResult>, Receiver<AnalysisResult>) = mpsc::channel();
        let poll_timeout = Duration::from_millis(1000 / 30);

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            if let Some(request) = app.take_pending_request() {
                let analyzer = Arc::clone(&analyzer);
                let tx = tx.clone();
                thread::Builder::new()
                    .name("analyzer".to_string())
                    .spawn(move || {
                        let result = analyzer.analyze(&request);
                        if tx.send(result).is_err() {
                            debug!("ui closed before analysis finished");
                        }
                    })?;
            }

            while let Ok(result) = rx.try_recv() {
                if let Err(e) = &result {
                    error!(error = %e, "analyzer call failed");
                }
                app.finish_analysis(result);
            }

            self.render_frame(app)?;

            if event::poll(poll_timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_event(key_to_event(app.mode(), key));
                    }
                }
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();

        self.terminal.draw(|frame| {
            let area = frame.area();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(5),
                    Constraint::Length(5),
                    Constraint::Length(1),
                ])
                .split(area);

            if state.app_mode == AppMode::Help {
                frame.render_widget(render_help(), rows[0]);
            } else {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Min(20),
                        Constraint::Length(legend_width(&state.legend)),
                    ])
                    .split(rows[0]);

                let text_rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(3), Constraint::Length(6)])
                    .split(columns[0]);

                frame.render_widget(
                    render_highlighted_text(&state.fragments, state.selected),
                    text_rows[0],
                );
                frame.render_widget(render_details(state.selected_fragment()), text_rows[1]);

                if state.has_result() {
                    frame.render_widget(render_legend(&state.legend), columns[1]);
                }
            }

            frame.render_widget(
                render_input(&state.input, state.app_mode, state.is_loading()),
                rows[1],
            );
            frame.render_widget(
                render_status_line(
                    state.app_mode,
                    state.highlight_mode,
                    &state.status,
                    state.summary,
                ),
                rows[2],
            );
        })?;

        Ok(())
    }
}
