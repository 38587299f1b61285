pub mod analyzer;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod source;
pub mod store;

pub use analyzer::{AnalysisRequest, AnalysisResponse, Analyzer, AnalyzerError, HttpAnalyzer};
pub use config::Config;
pub use error::HighlightError;
pub use session::HighlightSession;
pub use store::TextStore;
