//! Background document loader: the one blocking fetch at session start.
//!
//! Communication with the main thread is a single message over `mpsc`.

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use quizflow_core::{load_document, DocumentSource, LoadError, QuizDocument};

/// Sent once by the loader thread.
#[derive(Debug)]
pub enum LoaderResponse {
    Loaded(Box<QuizDocument>),
    Failed(LoadError),
}

/// Spawn the loader thread. It exits after sending one response.
pub fn spawn_loader(
    source: DocumentSource,
    tx: Sender<LoaderResponse>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("quiz-loader".into())
        .spawn(move || {
            let response = match load_document(&source) {
                Ok(document) => LoaderResponse::Loaded(Box::new(document)),
                Err(err) => {
                    tracing::error!(%source, error = %err, "quiz document failed to load");
                    LoaderResponse::Failed(err)
                }
            };
            // The receiver is gone only if the UI already quit.
            let _ = tx.send(response);
        })
}
