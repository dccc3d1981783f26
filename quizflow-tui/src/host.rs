//! Host handlers for engine effects: alerts, downloads and quiz completion.

use chrono::{DateTime, Local};

use quizflow_core::{AnswerRecord, Effect};

use crate::app::{AppState, Overlay};

/// What the completion overlay shows.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub title: String,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub answers: AnswerRecord,
}

impl SessionSummary {
    /// Elapsed session time as `Xm YYs`.
    pub fn duration_label(&self) -> String {
        let secs = (self.finished_at - self.started_at).num_seconds().max(0);
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}

/// Perform `effects` in order.
pub fn apply(app: &mut AppState, effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::Alert(text) => {
                app.overlay = Overlay::Alert(text.clone());
            }
            Effect::Download(payload) => {
                tracing::info!(payload = %payload, "download requested");
                app.set_status(format!("Download would start for: {payload}"));
            }
            Effect::QuizComplete => {
                if let Some(summary) = app.summary() {
                    tracing::info!(
                        title = %summary.title,
                        duration = %summary.duration_label(),
                        "session finished"
                    );
                    app.overlay = Overlay::Complete(summary);
                }
            }
        }
    }
}
