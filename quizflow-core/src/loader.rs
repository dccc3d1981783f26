//! Document loading from a file path or an http(s) URL.
//!
//! This is the only blocking I/O in the crate. Hosts that own a UI run it off
//! the main thread.

use std::fmt;
use std::path::PathBuf;

use crate::document::QuizDocument;
use crate::error::LoadError;

/// Where a quiz document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Path(PathBuf),
    Url(String),
}

impl DocumentSource {
    /// `http://` and `https://` strings are URLs; anything else is a path.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DocumentSource::Url(trimmed.to_string())
        } else {
            DocumentSource::Path(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Path(path) => write!(f, "{}", path.display()),
            DocumentSource::Url(url) => f.write_str(url),
        }
    }
}

/// Fetch and decode a document.
pub fn load_document(source: &DocumentSource) -> Result<QuizDocument, LoadError> {
    let body = match source {
        DocumentSource::Path(path) => {
            std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?
        }
        DocumentSource::Url(url) => fetch(url)?,
    };
    let document = parse_document(&body)?;
    tracing::debug!(%source, steps = document.step_count(), "quiz document loaded");
    Ok(document)
}

/// Decode a document from JSON text.
pub fn parse_document(json: &str) -> Result<QuizDocument, LoadError> {
    serde_json::from_str(json).map_err(|e| LoadError::Parse(e.to_string()))
}

fn fetch(url: &str) -> Result<String, LoadError> {
    let network = |e: reqwest::Error| LoadError::Network {
        url: url.to_string(),
        message: e.to_string(),
    };
    let response = reqwest::blocking::get(url).map_err(network)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    response.text().map_err(network)
}
