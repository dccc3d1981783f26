//! Engine root: owns the document, the session and the live widgets of the
//! current step, and processes one [`Event`] at a time to completion.
//!
//! Hosts feed events in and receive a [`Response`] carrying the widget outcome
//! and any [`Effect`]s to perform. The screen is re-read with
//! [`Engine::view`] after every event.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::answers::{AnswerRecord, InteractiveStep};
use crate::config::QuizConfig;
use crate::document::{ButtonAction, QuizDocument, StepDescriptor};
use crate::error::QuizError;
use crate::interpreter::render_step;
use crate::navigation::{is_step_completed, Navigator};
use crate::view::ScreenView;
use crate::widget::{StepWidgets, WidgetKind, WidgetOutcome, WidgetState};

// ── Events & effects ────────────────────────────────────────────────

/// One user or timer input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Back,
    Continue,
    /// Drop a drag item on the step's drop zone.
    Drop { item_id: String },
    /// Flip one checkbox.
    Toggle { item_id: String },
    /// Choose one radio option.
    Select { item_id: String },
    /// Validate a checkbox or radio set.
    Submit { widget: WidgetKind },
    PressButton { button_id: String },
    /// Time passed; fires due deferred actions.
    Tick,
}

/// Work the host performs on the engine's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", content = "data", rename_all = "snake_case")]
pub enum Effect {
    Alert(String),
    Download(String),
    QuizComplete,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Set when the event reached a widget (or a tick changed one).
    pub outcome: Option<WidgetOutcome>,
    pub effects: Vec<Effect>,
}

impl Response {
    fn effect(effect: Effect) -> Self {
        Self {
            outcome: None,
            effects: vec![effect],
        }
    }

    fn outcome(outcome: Option<WidgetOutcome>) -> Self {
        Self {
            outcome,
            effects: Vec::new(),
        }
    }
}

// ── Session ─────────────────────────────────────────────────────────

/// Mutable per-run state: validated answers and the step position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub answers: AnswerRecord,
    pub navigator: Navigator,
    completed: bool,
}

impl Session {
    fn new(step_count: usize) -> Self {
        Self {
            answers: AnswerRecord::new(),
            navigator: Navigator::new(step_count),
            completed: false,
        }
    }

    /// True once continue has been triggered on the last step.
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

// ── Engine ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Engine {
    document: QuizDocument,
    config: QuizConfig,
    session: Session,
    widgets: StepWidgets,
}

impl Engine {
    /// Start a session on step 0. Fails when the document has no steps.
    pub fn new(document: QuizDocument, config: QuizConfig) -> Result<Self, QuizError> {
        let Some(first) = document.steps.first() else {
            tracing::error!(title = %document.title, "quiz document has no steps");
            return Err(QuizError::Initialization(
                "quiz document has no steps".to_string(),
            ));
        };
        let widgets = StepWidgets::for_content(&first.content);
        let session = Session::new(document.step_count());
        tracing::info!(
            title = %document.title,
            steps = document.step_count(),
            "quiz session started"
        );
        Ok(Self {
            document,
            config,
            session,
            widgets,
        })
    }

    pub fn document(&self) -> &QuizDocument {
        &self.document
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.session.answers
    }

    pub fn widgets(&self) -> &StepWidgets {
        &self.widgets
    }

    pub fn current_index(&self) -> usize {
        self.session.navigator.current()
    }

    pub fn current_step(&self) -> &StepDescriptor {
        // Navigator keeps the index in bounds and the document is never empty.
        &self.document.steps[self.current_index()]
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_completed()
    }

    pub fn can_go_back(&self) -> bool {
        !self.session.navigator.is_first()
    }

    /// Continue-gating for the current step.
    pub fn can_continue(&self) -> bool {
        let step = self.current_step();
        !step.content.has_interaction()
            || self.widgets.all_passed()
            || is_step_completed(&step.id, &self.session.answers)
    }

    /// Build the render model for the current state.
    pub fn view(&self) -> ScreenView {
        let navigator = &self.session.navigator;
        let continue_label = if navigator.is_last() {
            &self.config.final_label
        } else {
            &self.config.continue_label
        };
        ScreenView {
            title: self.document.title.clone(),
            current_step: navigator.current() + 1,
            total_steps: navigator.step_count(),
            progress_percent: navigator.progress_percent(),
            back_enabled: self.can_go_back(),
            continue_enabled: self.can_continue(),
            continue_label: continue_label.clone(),
            blocks: render_step(self.current_step(), &self.widgets),
        }
    }

    /// Process one event to completion.
    pub fn dispatch(&mut self, event: Event, now: Instant) -> Response {
        match event {
            Event::Back => {
                if self.session.navigator.back() {
                    self.enter_step();
                }
                Response::default()
            }
            Event::Continue => self.continue_forward(),
            Event::PressButton { button_id } => self.press_button(&button_id),
            Event::Tick => {
                let changed = self.widgets.tick(now);
                Response::outcome(changed.then_some(WidgetOutcome::Updated))
            }
            interaction => Response::outcome(self.interact(&interaction, now)),
        }
    }

    fn continue_forward(&mut self) -> Response {
        if !self.can_continue() {
            tracing::debug!(step = %self.current_step().id, "continue blocked by gating");
            return Response::default();
        }
        if self.session.navigator.advance() {
            self.enter_step();
            return Response::default();
        }
        self.session.completed = true;
        tracing::info!(title = %self.document.title, "quiz complete");
        Response::effect(Effect::QuizComplete)
    }

    /// Re-create the widgets for the step the navigator points at.
    fn enter_step(&mut self) {
        let step = self.current_step();
        let widgets = StepWidgets::for_content(&step.content);
        tracing::debug!(
            step = %step.id,
            index = self.current_index(),
            widgets = widgets.iter().count(),
            "entered step"
        );
        self.widgets = widgets;
    }

    fn press_button(&self, button_id: &str) -> Response {
        let Some(button) = self.current_step().content.button(button_id) else {
            tracing::debug!(button_id, "no such button on this step");
            return Response::default();
        };
        match button.action {
            ButtonAction::Alert => Response::effect(Effect::Alert(button.action_data.clone())),
            ButtonAction::Download => {
                Response::effect(Effect::Download(button.action_data.clone()))
            }
            ButtonAction::Unsupported => {
                tracing::warn!(button_id, "button has an unsupported action");
                Response::default()
            }
        }
    }

    /// Route a widget interaction to the live widget it targets.
    fn interact(&mut self, event: &Event, now: Instant) -> Option<WidgetOutcome> {
        let step = self.document.steps.get(self.session.navigator.current())?;
        let content = &step.content;

        let outcome = match event {
            Event::Drop { item_id } => match self.widgets.drag_mut()? {
                WidgetState::SingleDrop(state) => {
                    state.drop_item(&content.single_drop()?, item_id)
                }
                WidgetState::Sequence(state) => state.drop_item(
                    &content.sequence_drop()?,
                    item_id,
                    now,
                    self.config.reset_delay(),
                ),
                _ => return None,
            },
            Event::Toggle { item_id } => match self.widgets.get_mut(WidgetKind::Checkbox)? {
                WidgetState::Checkbox(state) => state.toggle(&content.checkbox_set()?, item_id),
                _ => return None,
            },
            Event::Select { item_id } => match self.widgets.get_mut(WidgetKind::Radio)? {
                WidgetState::Radio(state) => state.select(&content.radio_set()?, item_id),
                _ => return None,
            },
            Event::Submit { widget } => match self.widgets.get_mut(*widget)? {
                WidgetState::Checkbox(state) => state.submit(&content.checkbox_set()?),
                WidgetState::Radio(state) => state.submit(
                    &content.radio_set()?,
                    &self.config.missing_selection_message,
                ),
                _ => return None,
            },
            _ => return None,
        };

        match &outcome {
            WidgetOutcome::Accepted(answer) => match InteractiveStep::from_id(&step.id) {
                Some(target) => {
                    self.session.answers.record(target, answer.clone());
                    tracing::info!(step = %step.id, "answer accepted");
                }
                None => {
                    tracing::debug!(step = %step.id, "answer accepted on unrecorded step")
                }
            },
            WidgetOutcome::Mismatch => tracing::debug!(step = %step.id, "answer mismatch"),
            _ => {}
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_document;
    use std::time::Duration;

    fn engine(json: &str) -> Engine {
        Engine::new(parse_document(json).unwrap(), QuizConfig::default()).unwrap()
    }

    const TWO_STEPS: &str = r#"{
        "title": "Release planning",
        "steps": [
            {"id": "project-scope", "content": {
                "dragItems": [{"id": "web", "text": "Web app"}, {"id": "cli", "text": "CLI"}],
                "dropZones": [{"id": "z", "correctId": "web",
                               "feedbackCorrect": "Yes", "feedbackIncorrect": "No"}]
            }},
            {"id": "done", "content": {
                "starIcon": true,
                "buttons": [{"id": "tip", "text": "Tip", "action": "alert", "actionData": "Well done"}],
                "downloadButton": {"id": "dl", "text": "Get", "action": "download", "actionData": "plan.pdf"}
            }}
        ]
    }"#;

    #[test]
    fn empty_document_fails_initialization() {
        let document = parse_document(r#"{"title": "Empty", "steps": []}"#).unwrap();
        let err = Engine::new(document, QuizConfig::default()).unwrap_err();
        assert!(matches!(err, QuizError::Initialization(_)));
    }

    #[test]
    fn continue_is_gated_until_correct_drop() {
        let mut engine = engine(TWO_STEPS);
        let now = Instant::now();
        assert!(!engine.can_continue());

        engine.dispatch(Event::Continue, now);
        assert_eq!(engine.current_index(), 0);

        let wrong = engine.dispatch(Event::Drop { item_id: "cli".into() }, now);
        assert_eq!(wrong.outcome, Some(WidgetOutcome::Mismatch));
        assert!(!engine.can_continue());

        engine.dispatch(Event::Drop { item_id: "web".into() }, now);
        assert!(engine.can_continue());
        assert_eq!(engine.answers().project_scope(), "Web app");

        engine.dispatch(Event::Continue, now);
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn last_step_emits_completion_and_labels_final() {
        let mut engine = engine(TWO_STEPS);
        let now = Instant::now();
        engine.dispatch(Event::Drop { item_id: "web".into() }, now);
        engine.dispatch(Event::Continue, now);

        let view = engine.view();
        assert_eq!(view.continue_label, "Next lesson");
        assert_eq!(view.current_step, 2);
        assert_eq!(view.progress_percent, 100.0);

        let response = engine.dispatch(Event::Continue, now);
        assert_eq!(response.effects, vec![Effect::QuizComplete]);
        assert!(engine.is_complete());
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn buttons_produce_host_effects() {
        let mut engine = engine(TWO_STEPS);
        let now = Instant::now();
        engine.dispatch(Event::Drop { item_id: "web".into() }, now);
        engine.dispatch(Event::Continue, now);

        let alert = engine.dispatch(Event::PressButton { button_id: "tip".into() }, now);
        assert_eq!(alert.effects, vec![Effect::Alert("Well done".into())]);
        let download = engine.dispatch(Event::PressButton { button_id: "dl".into() }, now);
        assert_eq!(download.effects, vec![Effect::Download("plan.pdf".into())]);
        let missing = engine.dispatch(Event::PressButton { button_id: "nope".into() }, now);
        assert!(missing.effects.is_empty());
    }

    #[test]
    fn revisit_renders_fresh_but_stays_open() {
        let mut engine = engine(TWO_STEPS);
        let now = Instant::now();
        engine.dispatch(Event::Drop { item_id: "web".into() }, now);
        engine.dispatch(Event::Continue, now);
        engine.dispatch(Event::Back, now);

        assert!(!engine.widgets().all_passed());
        assert!(engine.can_continue());
    }

    #[test]
    fn empty_sequence_step_can_be_passed() {
        let mut engine = engine(
            r#"{"title": "T", "steps": [
                {"id": "release-plan", "content": {
                    "dragItems": [],
                    "sequenceDropZone": {"id": "s", "correctSequence": []}
                }},
                {"id": "end"}
            ]}"#,
        );
        assert!(engine.can_continue());
        engine.dispatch(Event::Continue, Instant::now());
        assert_eq!(engine.current_step().id, "end");
        assert!(engine.answers().release_plan().is_empty());
    }

    #[test]
    fn tick_reports_sequence_reset() {
        let mut engine = engine(
            r#"{"title": "T", "steps": [{"id": "release-plan", "content": {
                "dragItems": [{"id": "a", "text": "A"}, {"id": "b", "text": "B"}],
                "sequenceDropZone": {"id": "s", "correctSequence": ["B", "A"]}
            }}]}"#,
        );
        let start = Instant::now();
        engine.dispatch(Event::Drop { item_id: "a".into() }, start);
        engine.dispatch(Event::Drop { item_id: "b".into() }, start);

        assert_eq!(engine.dispatch(Event::Tick, start).outcome, None);
        let later = start + engine.config().reset_delay() + Duration::from_millis(1);
        assert_eq!(
            engine.dispatch(Event::Tick, later).outcome,
            Some(WidgetOutcome::Updated)
        );
    }

    #[test]
    fn events_deserialize_from_tagged_json() {
        let event: Event = serde_json::from_str(r#"{"event": "drop", "item_id": "a"}"#).unwrap();
        assert_eq!(event, Event::Drop { item_id: "a".into() });
        let submit: Event =
            serde_json::from_str(r#"{"event": "submit", "widget": "checkbox"}"#).unwrap();
        assert_eq!(submit, Event::Submit { widget: WidgetKind::Checkbox });
    }
}
