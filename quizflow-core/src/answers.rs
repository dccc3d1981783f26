//! Session answer record: validated answers keyed by interactive step identity.

use indexmap::IndexSet;
use serde::Serialize;

/// Step ids whose answers are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractiveStep {
    ProjectScope,
    ReleasePlan,
    Consumers,
    FeedbackMethods,
    AcceptanceCriteria,
}

impl InteractiveStep {
    pub const ALL: [InteractiveStep; 5] = [
        InteractiveStep::ProjectScope,
        InteractiveStep::ReleasePlan,
        InteractiveStep::Consumers,
        InteractiveStep::FeedbackMethods,
        InteractiveStep::AcceptanceCriteria,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            InteractiveStep::ProjectScope => "project-scope",
            InteractiveStep::ReleasePlan => "release-plan",
            InteractiveStep::Consumers => "consumers",
            InteractiveStep::FeedbackMethods => "feedback-methods",
            InteractiveStep::AcceptanceCriteria => "acceptance-criteria",
        }
    }
}

/// The value a widget reports on a successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedAnswer {
    Text(String),
    Sequence(Vec<String>),
    Selection(IndexSet<String>),
}

impl RecordedAnswer {
    pub fn is_empty(&self) -> bool {
        match self {
            RecordedAnswer::Text(text) => text.is_empty(),
            RecordedAnswer::Sequence(items) => items.is_empty(),
            RecordedAnswer::Selection(items) => items.is_empty(),
        }
    }

    fn into_text(self) -> String {
        match self {
            RecordedAnswer::Text(text) => text,
            RecordedAnswer::Sequence(items) => items.join(", "),
            RecordedAnswer::Selection(items) => items.into_iter().collect::<Vec<_>>().join(", "),
        }
    }

    fn into_list(self) -> Vec<String> {
        match self {
            RecordedAnswer::Text(text) => vec![text],
            RecordedAnswer::Sequence(items) => items,
            RecordedAnswer::Selection(items) => items.into_iter().collect(),
        }
    }
}

/// Validated answers for the current session. Never persisted.
///
/// Fields start empty and are only written by [`AnswerRecord::record`], which
/// refuses empty values, so a field once set stays set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    project_scope: String,
    release_plan: Vec<String>,
    consumers: IndexSet<String>,
    feedback_methods: IndexSet<String>,
    acceptance_criteria: String,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_scope(&self) -> &str {
        &self.project_scope
    }

    pub fn release_plan(&self) -> &[String] {
        &self.release_plan
    }

    pub fn consumers(&self) -> &IndexSet<String> {
        &self.consumers
    }

    pub fn feedback_methods(&self) -> &IndexSet<String> {
        &self.feedback_methods
    }

    pub fn acceptance_criteria(&self) -> &str {
        &self.acceptance_criteria
    }

    /// Write `answer` into the field owned by `step`, coercing its shape.
    /// Returns false (and leaves the record untouched) for empty answers.
    pub fn record(&mut self, step: InteractiveStep, answer: RecordedAnswer) -> bool {
        if answer.is_empty() {
            return false;
        }
        match step {
            InteractiveStep::ProjectScope => set_text(&mut self.project_scope, answer),
            InteractiveStep::ReleasePlan => {
                self.release_plan = answer.into_list();
                true
            }
            InteractiveStep::Consumers => {
                self.consumers = answer.into_list().into_iter().collect();
                true
            }
            InteractiveStep::FeedbackMethods => {
                self.feedback_methods = answer.into_list().into_iter().collect();
                true
            }
            InteractiveStep::AcceptanceCriteria => {
                set_text(&mut self.acceptance_criteria, answer)
            }
        }
    }

    /// Whether the field owned by `step` holds a value.
    pub fn is_recorded(&self, step: InteractiveStep) -> bool {
        match step {
            InteractiveStep::ProjectScope => !self.project_scope.is_empty(),
            InteractiveStep::ReleasePlan => !self.release_plan.is_empty(),
            InteractiveStep::Consumers => !self.consumers.is_empty(),
            InteractiveStep::FeedbackMethods => !self.feedback_methods.is_empty(),
            InteractiveStep::AcceptanceCriteria => !self.acceptance_criteria.is_empty(),
        }
    }
}

/// A list of blank strings joins to an empty text; keep the old value then.
fn set_text(field: &mut String, answer: RecordedAnswer) -> bool {
    let text = answer.into_text();
    if text.is_empty() {
        return false;
    }
    *field = text;
    true
}
