//! Scripted replay: drive an [`Engine`] from a JSON event file.
//!
//! A script is a JSON array. Each entry is either an engine event
//! (`{"event": "drop", "item_id": "scope-mvp"}`) or a pause
//! (`{"wait_ms": 1600}`) that advances a virtual clock, so deferred sequence
//! resets fire deterministically without sleeping.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use quizflow_core::{AnswerRecord, Effect, Engine, Event};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("cannot read script {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid script: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    Wait(Wait),
    Event(Event),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Wait {
    pub wait_ms: u64,
}

pub fn parse_script(json: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>, ScriptError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&content)
}

/// Final state of a replayed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub final_step: String,
    /// 1-based.
    pub step_number: usize,
    pub completed: bool,
    pub answers: AnswerRecord,
    /// Every effect, in emission order.
    pub effects: Vec<Effect>,
}

/// Run `script` against `engine`. Time only moves on `wait_ms` entries.
pub fn replay(engine: &mut Engine, script: &[ScriptStep]) -> ReplayReport {
    let start = Instant::now();
    let mut elapsed = Duration::ZERO;
    let mut effects = Vec::new();

    for step in script {
        let event = match step {
            ScriptStep::Wait(wait) => {
                elapsed += Duration::from_millis(wait.wait_ms);
                Event::Tick
            }
            ScriptStep::Event(event) => event.clone(),
        };
        let response = engine.dispatch(event, start + elapsed);
        if let Some(outcome) = &response.outcome {
            tracing::debug!(?outcome, step = %engine.current_step().id, "script event handled");
        }
        effects.extend(response.effects);
    }

    ReplayReport {
        final_step: engine.current_step().id.clone(),
        step_number: engine.current_index() + 1,
        completed: engine.is_complete(),
        answers: engine.answers().clone(),
        effects,
    }
}
