//! Structured error types for loading and starting a quiz session.
//!
//! Both are fatal to the session and are displayed in place of the quiz
//! content. Wrong answers are not errors (see [`crate::widget::WidgetOutcome`]).

use std::path::PathBuf;

use thiserror::Error;

/// Shown when the document could not be fetched or parsed.
pub const LOAD_FAILURE_MESSAGE: &str =
    "Failed to load quiz data. Please check the source and try again later.";

/// Shown when the first render or wiring fails.
pub const INIT_FAILURE_MESSAGE: &str =
    "An error occurred while initializing the quiz. Please restart.";

/// Errors from fetching or decoding a quiz document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("malformed quiz document: {0}")]
    Parse(String),
}

/// Session-fatal errors.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to load quiz data: {0}")]
    Load(#[from] LoadError),

    #[error("quiz initialization failed: {0}")]
    Initialization(String),
}

impl QuizError {
    /// The fixed message the user sees for this failure class.
    pub fn user_message(&self) -> &'static str {
        match self {
            QuizError::Load(_) => LOAD_FAILURE_MESSAGE,
            QuizError::Initialization(_) => INIT_FAILURE_MESSAGE,
        }
    }
}
