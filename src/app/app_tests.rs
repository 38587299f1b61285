use crate::annotation::{Mode, Token};
use crate::app::{App, AppEvent, AppMode, RenderState, Status};
use crate::engine::analyzer::{AnalysisResponse, AnalyzerError};
use crate::engine::session::HighlightSession;
use crate::engine::store::TextStore;

fn token(text: &str, pos: &str, start: usize) -> Token {
    Token {
        text: text.to_string(),
        start,
        end: start + text.len(),
        pos: pos.to_string(),
        is_alpha: true,
        ..Token::default()
    }
}

fn run_fast() -> AnalysisResponse {
    AnalysisResponse {
        tokens: vec![token("Run", "VERB", 0), token("fast", "ADV", 4)],
        ..AnalysisResponse::default()
    }
}

fn typed(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_event(AppEvent::Insert(c));
    }
}

fn new_app() -> App {
    App::new(HighlightSession::default(), None)
}

#[test]
fn test_app_starts_editing_with_stored_text() {
    let app = App::new(HighlightSession::new("Hello".to_string(), Mode::Simple), None);
    assert_eq!(app.mode(), AppMode::Editing);
    assert_eq!(app.input(), "Hello");
}

#[test]
fn test_app_handle_event_quit() {
    let mut app = new_app();
    app.handle_event(AppEvent::Quit);
    assert_eq!(app.mode(), AppMode::Quit);
}

#[test]
fn test_help_returns_to_previous_mode() {
    let mut app = new_app();
    app.handle_event(AppEvent::Help);
    assert_eq!(app.mode(), AppMode::Help);
    app.handle_event(AppEvent::Cancel);
    assert_eq!(app.mode(), AppMode::Editing);
}

#[test]
fn test_blank_submit_shows_validation_error() {
    let mut app = new_app();
    typed(&mut app, "   ");
    app.handle_event(AppEvent::Submit);
    assert!(app.take_pending_request().is_none());
    let state = app.get_render_state();
    assert_eq!(
        state.status,
        Status::Error("Please enter some text to analyze".to_string())
    );
}

#[test]
fn test_submit_queues_single_request() {
    let mut app = new_app();
    typed(&mut app, "Run fast");
    app.handle_event(AppEvent::Submit);
    app.handle_event(AppEvent::Submit);
    let request = app.take_pending_request().unwrap();
    assert_eq!(request.text, "Run fast");
    assert!(app.take_pending_request().is_none());
    assert_eq!(app.get_render_state().status, Status::Loading);
}

#[test]
fn test_successful_analysis_enters_browsing() {
    let mut app = new_app();
    typed(&mut app, "Run fast");
    app.handle_event(AppEvent::Submit);
    app.take_pending_request();
    app.finish_analysis(Ok(run_fast()));

    assert_eq!(app.mode(), AppMode::Browsing);
    let state: RenderState = app.get_render_state();
    assert_eq!(state.fragments.len(), 2);
    assert_eq!(state.selected, Some(0));
    assert_eq!(state.legend.len(), 2);
    assert_eq!(state.status, Status::Idle);
}

#[test]
fn test_failed_analysis_reports_generic_message() {
    let mut app = new_app();
    typed(&mut app, "Run fast");
    app.handle_event(AppEvent::Submit);
    app.finish_analysis(Err(AnalyzerError::Status {
        status: 503,
        body: "NLP model is not available.".to_string(),
    }));
    assert_eq!(app.mode(), AppMode::Editing);
    assert_eq!(
        app.get_render_state().status,
        Status::Error("Failed to Highlight Syntax. Please try again.".to_string())
    );
}

#[test]
fn test_selection_is_clamped() {
    let mut app = new_app();
    typed(&mut app, "Run fast");
    app.handle_event(AppEvent::Submit);
    app.finish_analysis(Ok(run_fast()));

    app.handle_event(AppEvent::SelectPrevious);
    assert_eq!(app.selected(), 0);
    app.handle_event(AppEvent::SelectNext);
    app.handle_event(AppEvent::SelectNext);
    assert_eq!(app.selected(), 1);
    assert_eq!(
        app.get_render_state().selected_fragment().map(|f| f.text.as_str()),
        Some("fast")
    );
}

#[test]
fn test_toggle_mode_does_not_request_analysis() {
    let mut app = new_app();
    typed(&mut app, "Run fast");
    app.handle_event(AppEvent::Submit);
    app.take_pending_request();
    app.finish_analysis(Ok(run_fast()));

    app.handle_event(AppEvent::ToggleMode);
    assert!(app.take_pending_request().is_none());
    let state = app.get_render_state();
    assert_eq!(state.highlight_mode, Mode::Pro);
    assert_eq!(state.fragments[0].tooltip, "Verb");
    assert_eq!(state.legend[0].name, "Verb");
    assert_eq!(state.legend[1].name, "Adverb");
}

#[test]
fn test_mode_command_from_input() {
    let mut app = App::new(HighlightSession::new("Run".to_string(), Mode::Simple), None);
    app.handle_event(AppEvent::Backspace);
    app.handle_event(AppEvent::Backspace);
    app.handle_event(AppEvent::Backspace);
    typed(&mut app, ":pro");
    app.handle_event(AppEvent::Submit);
    assert_eq!(app.session().mode(), Mode::Pro);
    assert_eq!(app.input(), "Run");
    assert!(app.take_pending_request().is_none());
}

#[test]
fn test_invalid_command_sets_notice() {
    let mut app = new_app();
    typed(&mut app, ":bogus");
    app.handle_event(AppEvent::Submit);
    assert_eq!(app.notice(), Some("Unknown command: :bogus"));
}

#[test]
fn test_backspace_removes_whole_grapheme() {
    let mut app = new_app();
    typed(&mut app, "cafe\u{301}");
    app.handle_event(AppEvent::Backspace);
    assert_eq!(app.input(), "caf");
}

#[test]
fn test_submit_persists_text() {
    let dir = tempfile::tempdir().unwrap();
    let store = TextStore::new(dir.path().join("state.json"));
    let mut app = App::new(HighlightSession::default(), Some(store.clone()));
    typed(&mut app, "She didn't go.");
    app.handle_event(AppEvent::Submit);
    assert_eq!(store.load().unwrap(), "She didn't go.");

    app.handle_event(AppEvent::ClearText);
    assert_eq!(store.load().unwrap(), "");
    assert_eq!(app.input(), "");
}

#[test]
fn test_load_missing_file_sets_notice() {
    let mut app = new_app();
    app.handle_event(AppEvent::LoadFile("no_such_input_file.txt".to_string()));
    assert!(app.notice().unwrap().contains("File not found"));
    assert!(app.take_pending_request().is_none());
}
