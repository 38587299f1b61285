//! Client for the external linguistic analyzer.
//!
//! The analyzer turns raw text into annotated tokens. It is reached over
//! HTTP either as one JSON document (`POST /analyze`) or as newline-delimited
//! JSON events (`POST /analyze-stream`).

use crate::annotation::Token;
use crate::engine::config::{AnalyzerConfig, Transport};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("analyzer request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("analyzer returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed analyzer response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("analyzer reported an error: {0}")]
    Remote(String),

    #[error("failed reading analyzer stream: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub entities: Vec<EntitySpan>,
    #[serde(default)]
    pub sentences: Vec<SentenceSpan>,
}

/// Anything that can annotate text.
///
/// Implementations are called from a worker thread, hence `Send + Sync`.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, AnalyzerError>;
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
enum StreamEvent {
    Token(Token),
    Entity(EntitySpan),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StreamLine {
    Event(StreamEvent),
    Failure { error: String },
}

/// Collect a newline-delimited analysis stream into a full response.
///
/// An `{"error": ...}` line aborts the stream. Sentences are not streamed.
pub fn decode_ndjson<R: BufRead>(reader: R) -> Result<AnalysisResponse, AnalyzerError> {
    let mut response = AnalysisResponse::default();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<StreamLine>(line)? {
            StreamLine::Event(StreamEvent::Token(token)) => response.tokens.push(token),
            StreamLine::Event(StreamEvent::Entity(entity)) => response.entities.push(entity),
            StreamLine::Failure { error } => return Err(AnalyzerError::Remote(error)),
        }
    }

    Ok(response)
}

/// HTTP analyzer using a blocking reqwest client.
pub struct HttpAnalyzer {
    http: Client,
    endpoint: String,
    transport: Transport,
}

impl HttpAnalyzer {
    pub fn new(config: &AnalyzerConfig) -> Result<Self, AnalyzerError> {
        let http = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            http,
            endpoint: config.active_endpoint().to_string(),
            transport: config.transport,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Analyzer for HttpAnalyzer {
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, AnalyzerError> {
        debug!(endpoint = %self.endpoint, chars = request.text.chars().count(), "sending analysis request");

        let response = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(status = status.as_u16(), "analyzer rejected request");
            return Err(AnalyzerError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let analysis = match self.transport {
            Transport::Batch => {
                let body = response.text()?;
                serde_json::from_str(&body)?
            }
            Transport::Stream => decode_ndjson(std::io::BufReader::new(response))?,
        };

        debug!(tokens = analysis.tokens.len(), "analysis received");
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_response_without_entities_or_sentences() {
        let json = r#"{"tokens": [{"text": "Hi", "start": 0, "end": 2, "pos": "INTJ"}]}"#;
        let response: AnalysisResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.tokens.len(), 1);
        assert!(response.entities.is_empty());
        assert!(response.sentences.is_empty());
    }

    #[test]
    fn test_response_with_null_pos_still_decodes() {
        let json = r#"{"tokens": [
            {"text": "The", "start": 0, "end": 3, "pos": "DET"},
            {"text": "zz", "start": 4, "end": 6, "pos": null, "dep": null, "shape": null}
        ]}"#;
        let response: AnalysisResponse = serde_json::from_str(json).unwrap();
        let processed = crate::annotation::classify(&response.tokens, crate::annotation::Mode::Simple);
        assert_eq!(processed[0].label_strings(), vec!["Determiner"]);
        assert!(processed[1].labels.is_empty());
    }

    #[test]
    fn test_request_serializes_text() {
        let request = AnalysisRequest {
            text: "The cat".to_string(),
        };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"text":"The cat"}"#);
    }

    #[test]
    fn test_decode_ndjson_tokens_and_entities() {
        let stream = concat!(
            r#"{"type": "token", "data": {"text": "Paris", "start": 0, "end": 5, "pos": "PROPN"}}"#,
            "\n\n",
            r#"{"type": "token", "data": {"text": "!", "start": 5, "end": 6, "pos": "PUNCT"}}"#,
            "\n",
            r#"{"type": "entity", "data": {"text": "Paris", "start": 0, "end": 5, "label": "GPE"}}"#,
            "\n"
        );
        let response = decode_ndjson(Cursor::new(stream)).unwrap();
        assert_eq!(response.tokens.len(), 2);
        assert_eq!(response.tokens[1].text, "!");
        assert_eq!(response.entities[0].label, "GPE");
    }

    #[test]
    fn test_decode_ndjson_error_line() {
        let stream = "{\"error\": \"NLP model is not available.\"}\n";
        match decode_ndjson(Cursor::new(stream)) {
            Err(AnalyzerError::Remote(msg)) => assert_eq!(msg, "NLP model is not available."),
            other => panic!("expected remote error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_ndjson_garbage_line() {
        let stream = "not json\n";
        assert!(matches!(
            decode_ndjson(Cursor::new(stream)),
            Err(AnalyzerError::Decode(_))
        ));
    }

    #[test]
    fn test_http_analyzer_uses_transport_endpoint() {
        let config = AnalyzerConfig {
            transport: Transport::Stream,
            ..AnalyzerConfig::default()
        };
        let analyzer = HttpAnalyzer::new(&config).unwrap();
        assert_eq!(analyzer.endpoint(), "http://localhost:8000/analyze-stream");
    }
}
