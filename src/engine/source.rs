//! Text sources for the input box: files and the system clipboard.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub fn load_file_safe(path: &str) -> Result<String, SourceError> {
    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(SourceError::FileNotFound(path));
    }

    let content = std::fs::read_to_string(&path)?;
    if content.trim().is_empty() {
        return Err(SourceError::EmptyFile(path));
    }

    Ok(content)
}

pub fn load_clipboard() -> Result<String, SourceError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| SourceError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| SourceError::Clipboard(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(SourceError::Clipboard("clipboard is empty".to_string()));
    }
    Ok(text)
}
