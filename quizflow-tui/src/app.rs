//! Application state: single-owner, main-thread only.
//!
//! All TUI state lives here. The loader thread talks to it over a channel and
//! every quiz interaction goes through [`AppState::dispatch_at`].

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Instant;

use chrono::{DateTime, Local};

use quizflow_core::view::ContentBlock;
use quizflow_core::{
    Engine, Event, QuizConfig, QuizDocument, QuizError, Response, ScreenView, WidgetKind,
    WidgetOutcome,
};

use crate::host::{self, SessionSummary};
use crate::loader::LoaderResponse;

/// Lifecycle of the quiz session.
#[derive(Debug)]
pub enum Phase {
    /// Waiting for the loader thread.
    Loading,
    Ready(Box<Engine>),
    /// Fatal: the message replaces the quiz content until the user quits.
    Failed {
        message: &'static str,
        detail: String,
    },
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    None,
    Help,
    Alert(String),
    Complete(SessionSummary),
}

/// A keyboard-focusable group on the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Drag items still in the pool.
    Drag(Vec<String>),
    Checkboxes(Vec<String>),
    Radios(Vec<String>),
    Buttons(Vec<String>),
}

impl Target {
    pub fn ids(&self) -> &[String] {
        match self {
            Target::Drag(ids)
            | Target::Checkboxes(ids)
            | Target::Radios(ids)
            | Target::Buttons(ids) => ids,
        }
    }

    /// The interaction this target performs on the item at `cursor`.
    fn event_at(&self, cursor: usize) -> Option<Event> {
        let item_id = self.ids().get(cursor)?.clone();
        Some(match self {
            Target::Drag(_) => Event::Drop { item_id },
            Target::Checkboxes(_) => Event::Toggle { item_id },
            Target::Radios(_) => Event::Select { item_id },
            Target::Buttons(_) => Event::PressButton { button_id: item_id },
        })
    }

    fn submit_kind(&self) -> Option<WidgetKind> {
        match self {
            Target::Checkboxes(_) => Some(WidgetKind::Checkbox),
            Target::Radios(_) => Some(WidgetKind::Radio),
            _ => None,
        }
    }
}

/// The focus target a content block provides, if any. A settled drag pool
/// provides none.
pub fn block_target(block: &ContentBlock) -> Option<Target> {
    match block {
        ContentBlock::Drag(drag) if !drag.settled && !drag.available.is_empty() => Some(
            Target::Drag(drag.available.iter().map(|item| item.id.clone()).collect()),
        ),
        ContentBlock::Checkboxes(choices) => Some(Target::Checkboxes(
            choices.options.iter().map(|o| o.id.clone()).collect(),
        )),
        ContentBlock::Radios(choices) => Some(Target::Radios(
            choices.options.iter().map(|o| o.id.clone()).collect(),
        )),
        ContentBlock::Buttons(buttons) => Some(Target::Buttons(
            buttons.iter().map(|b| b.id.clone()).collect(),
        )),
        ContentBlock::DownloadButton(button) => Some(Target::Buttons(vec![button.id.clone()])),
        _ => None,
    }
}

/// Focusable groups in render order.
pub fn focus_targets(view: &ScreenView) -> Vec<Target> {
    view.blocks.iter().filter_map(block_target).collect()
}

/// Top-level application state.
pub struct AppState {
    pub phase: Phase,
    pub running: bool,

    // Keyboard focus on the current step
    pub focus: usize,
    pub cursor: usize,

    // Cross-cutting
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
    pub config: QuizConfig,
    pub source_label: String,
    pub started_at: DateTime<Local>,

    loader_rx: Option<Receiver<LoaderResponse>>,
}

impl AppState {
    pub fn new(
        config: QuizConfig,
        source_label: impl Into<String>,
        loader_rx: Receiver<LoaderResponse>,
    ) -> Self {
        Self {
            phase: Phase::Loading,
            running: true,
            focus: 0,
            cursor: 0,
            overlay: Overlay::None,
            status_message: None,
            config,
            source_label: source_label.into(),
            started_at: Local::now(),
            loader_rx: Some(loader_rx),
        }
    }

    pub fn engine(&self) -> Option<&Engine> {
        match &self.phase {
            Phase::Ready(engine) => Some(engine),
            _ => None,
        }
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Drain the loader channel (non-blocking).
    pub fn poll_loader(&mut self) {
        let Some(rx) = &self.loader_rx else {
            return;
        };
        let response = match rx.try_recv() {
            Ok(response) => response,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                self.loader_rx = None;
                if matches!(self.phase, Phase::Loading) {
                    self.fail(QuizError::Initialization(
                        "loader exited without a response".into(),
                    ));
                }
                return;
            }
        };
        self.loader_rx = None;
        match response {
            LoaderResponse::Loaded(document) => self.start(*document),
            LoaderResponse::Failed(err) => self.fail(QuizError::Load(err)),
        }
    }

    /// Begin the session on a loaded document.
    pub fn start(&mut self, document: QuizDocument) {
        match Engine::new(document, self.config.clone()) {
            Ok(engine) => {
                self.started_at = Local::now();
                self.focus = 0;
                self.cursor = 0;
                self.set_status(format!("Loaded {}", self.source_label));
                self.phase = Phase::Ready(Box::new(engine));
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: QuizError) {
        tracing::error!(error = %err, "quiz session cannot start");
        self.set_error(err.user_message());
        self.phase = Phase::Failed {
            message: err.user_message(),
            detail: err.to_string(),
        };
    }

    // ── Focus ───────────────────────────────────────────────────────

    pub fn targets(&self) -> Vec<Target> {
        self.engine()
            .map(|engine| focus_targets(&engine.view()))
            .unwrap_or_default()
    }

    pub fn focused(&self) -> Option<Target> {
        self.targets().into_iter().nth(self.focus)
    }

    pub fn move_focus(&mut self, forward: bool) {
        let count = self.targets().len();
        if count == 0 {
            return;
        }
        self.focus = if forward {
            (self.focus + 1) % count
        } else {
            (self.focus + count - 1) % count
        };
        self.cursor = 0;
    }

    pub fn move_cursor(&mut self, down: bool) {
        let Some(target) = self.focused() else {
            return;
        };
        let len = target.ids().len();
        if down {
            if self.cursor + 1 < len {
                self.cursor += 1;
            }
        } else {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    fn clamp_focus(&mut self) {
        let targets = self.targets();
        if self.focus >= targets.len() {
            self.focus = 0;
            self.cursor = 0;
        }
        let len = targets.get(self.focus).map_or(0, |t| t.ids().len());
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    // ── Quiz actions ────────────────────────────────────────────────

    /// Drop, toggle, select or press whatever the cursor is on.
    pub fn activate(&mut self) {
        if let Some(event) = self.focused().and_then(|t| t.event_at(self.cursor)) {
            self.dispatch(event);
        }
    }

    /// Validate the focused choice set, or the first one on the step.
    pub fn submit(&mut self) {
        let focused = self.focused().and_then(|t| t.submit_kind());
        let kind = focused.or_else(|| self.targets().iter().find_map(Target::submit_kind));
        if let Some(widget) = kind {
            self.dispatch(Event::Submit { widget });
        }
    }

    pub fn go_back(&mut self) {
        self.dispatch(Event::Back);
    }

    pub fn go_forward(&mut self) {
        let blocked = self.engine().is_some_and(|engine| !engine.can_continue());
        if blocked {
            self.set_warning("Complete this step to continue");
            return;
        }
        self.dispatch(Event::Continue);
    }

    pub fn tick(&mut self) {
        if self.engine().is_some() {
            self.dispatch(Event::Tick);
        }
    }

    pub fn dispatch(&mut self, event: Event) -> Response {
        self.dispatch_at(event, Instant::now())
    }

    /// Feed one event to the engine and apply its effects.
    pub fn dispatch_at(&mut self, event: Event, now: Instant) -> Response {
        let Phase::Ready(engine) = &mut self.phase else {
            return Response::default();
        };
        let idle_tick = event == Event::Tick;
        let before = engine.current_index();
        let response = engine.dispatch(event, now);
        let moved = engine.current_index() != before;

        if moved {
            self.focus = 0;
            self.cursor = 0;
            self.status_message = None;
        } else if !(idle_tick && response.outcome.is_none()) {
            // A tick that changed nothing leaves the targets as they were.
            self.clamp_focus();
        }
        match &response.outcome {
            Some(WidgetOutcome::Accepted(_)) => self.set_status("Correct"),
            Some(WidgetOutcome::Mismatch) => self.set_warning("Not quite. Try again."),
            _ => {}
        }
        host::apply(self, &response.effects);
        response
    }

    /// Snapshot for the completion overlay.
    pub fn summary(&self) -> Option<SessionSummary> {
        self.engine().map(|engine| SessionSummary {
            title: engine.document().title.clone(),
            started_at: self.started_at,
            finished_at: Local::now(),
            answers: engine.answers().clone(),
        })
    }

    // ── Status ──────────────────────────────────────────────────────

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}
