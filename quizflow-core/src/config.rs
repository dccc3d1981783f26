//! Session configuration, loaded from TOML. Every field has a default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunables for the engine and its hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Pause before a failed sequence resets, in milliseconds.
    pub reset_delay_ms: u64,
    /// Event-loop poll interval for interactive hosts, in milliseconds.
    pub tick_ms: u64,
    /// Continue control label on every step but the last.
    pub continue_label: String,
    /// Continue control label on the last step.
    pub final_label: String,
    /// Radio feedback when submitting without a selection.
    pub missing_selection_message: String,
    /// Log destination for hosts that own the terminal.
    pub log_file: PathBuf,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: 1500,
            tick_ms: 50,
            continue_label: "Continue".to_string(),
            final_label: "Next lesson".to_string(),
            missing_selection_message: "Please select an answer.".to_string(),
            log_file: PathBuf::from("quizflow.log"),
        }
    }
}

impl QuizConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
