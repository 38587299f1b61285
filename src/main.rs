use clap::Parser;
use lexlight::annotation::Mode;
use lexlight::app::App;
use lexlight::engine::config::Transport;
use lexlight::engine::{logging, Analyzer, Config, HighlightSession, HttpAnalyzer, TextStore};
use lexlight::ui::{format_report, TuiManager};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "lexlight", version, about = "Syntax highlighting for analyzed text")]
struct Cli {
    /// Config file (defaults to ./lexlight.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start in this highlighting mode (simple or pro)
    #[arg(short, long)]
    mode: Option<Mode>,

    /// Analyzer endpoint, overriding the config
    #[arg(long)]
    endpoint: Option<String>,

    /// Analyze TEXT, print the highlighted report and exit
    #[arg(long, value_name = "TEXT")]
    print: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = Config::discover(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        match config.analyzer.transport {
            Transport::Batch => config.analyzer.endpoint = endpoint,
            Transport::Stream => config.analyzer.stream_endpoint = endpoint,
        }
    }
    logging::init(&config.logging)?;

    let mode = cli.mode.unwrap_or(config.display.default_mode);
    let analyzer = HttpAnalyzer::new(&config.analyzer)?;
    info!(endpoint = analyzer.endpoint(), %mode, "starting lexlight");

    if let Some(text) = cli.print {
        let mut session = HighlightSession::new(text, mode);
        let request = session.begin_analysis()?;
        session.finish_analysis(analyzer.analyze(&request));
        if let Some(err) = session.error() {
            return Err(err.clone().into());
        }
        print!("{}", format_report(&session.fragments(), &session.legend()));
        return Ok(());
    }

    let store = config.storage.state_file.clone().map(TextStore::new);
    let text = match &store {
        Some(store) => store.load().unwrap_or_else(|e| {
            warn!(error = %e, "could not restore previous text");
            String::new()
        }),
        None => String::new(),
    };

    let mut app = App::new(HighlightSession::new(text, mode), store);
    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app, Arc::new(analyzer))?;

    Ok(())
}
