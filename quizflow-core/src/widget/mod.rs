//! Interaction widgets and their validators.
//!
//! Each widget owns a small state object that is created fresh whenever its
//! step is rendered. Every handler is a plain function of (state, spec, input)
//! returning a [`WidgetOutcome`], so validation is testable without a display.

pub mod checkbox;
pub mod radio;
pub mod sections;
pub mod sequence;
pub mod single_drop;

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::answers::RecordedAnswer;
use crate::document::StepContent;

pub use checkbox::CheckboxState;
pub use radio::RadioState;
pub use sequence::{SequencePhase, SequenceState};
pub use single_drop::SingleDropState;

/// The interactive widget variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    SingleDrop,
    SequenceDrop,
    Checkbox,
    Radio,
}

impl WidgetKind {
    pub fn label(self) -> &'static str {
        match self {
            WidgetKind::SingleDrop => "drag-and-drop",
            WidgetKind::SequenceDrop => "sequence",
            WidgetKind::Checkbox => "checkboxes",
            WidgetKind::Radio => "single choice",
        }
    }

    pub fn is_drag(self) -> bool {
        matches!(self, WidgetKind::SingleDrop | WidgetKind::SequenceDrop)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Success,
    Error,
}

/// Text shown on a widget's feedback surface after its last validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub tone: FeedbackTone,
    pub text: String,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: FeedbackTone::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            tone: FeedbackTone::Error,
            text: text.into(),
        }
    }
}

/// Result of feeding one interaction to a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetOutcome {
    /// Nothing changed: unknown item, repeated drop, or the widget is locked.
    Ignored,
    /// Local state changed without a validation.
    Updated,
    /// Validation failed; failure feedback is shown and a retry is allowed.
    Mismatch,
    /// Input guidance only (radio submitted with nothing selected).
    Guidance,
    /// Validation passed; carries the value to record.
    Accepted(RecordedAnswer),
}

/// One live widget on the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetState {
    SingleDrop(SingleDropState),
    Sequence(SequenceState),
    Checkbox(CheckboxState),
    Radio(RadioState),
}

impl WidgetState {
    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetState::SingleDrop(_) => WidgetKind::SingleDrop,
            WidgetState::Sequence(_) => WidgetKind::SequenceDrop,
            WidgetState::Checkbox(_) => WidgetKind::Checkbox,
            WidgetState::Radio(_) => WidgetKind::Radio,
        }
    }

    pub fn is_passed(&self) -> bool {
        match self {
            WidgetState::SingleDrop(state) => state.is_passed(),
            WidgetState::Sequence(state) => state.is_passed(),
            WidgetState::Checkbox(state) => state.is_passed(),
            WidgetState::Radio(state) => state.is_passed(),
        }
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        match self {
            WidgetState::SingleDrop(state) => state.feedback(),
            WidgetState::Sequence(state) => state.feedback(),
            WidgetState::Checkbox(state) => state.feedback(),
            WidgetState::Radio(state) => state.feedback(),
        }
    }
}

/// The widgets of one step, in render order, all freshly initialised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepWidgets {
    slots: Vec<WidgetState>,
}

impl StepWidgets {
    pub fn for_content(content: &StepContent) -> Self {
        let slots = content
            .interactive_widgets()
            .into_iter()
            .filter_map(|kind| match kind {
                WidgetKind::SingleDrop => Some(WidgetState::SingleDrop(SingleDropState::new())),
                WidgetKind::SequenceDrop => content
                    .sequence_drop()
                    .map(|spec| WidgetState::Sequence(SequenceState::new(spec.items.len()))),
                WidgetKind::Checkbox => content
                    .checkbox_set()
                    .map(|spec| WidgetState::Checkbox(CheckboxState::new(spec.items.len()))),
                WidgetKind::Radio => Some(WidgetState::Radio(RadioState::new())),
            })
            .collect();
        Self { slots }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WidgetState> {
        self.slots.iter()
    }

    pub fn get(&self, kind: WidgetKind) -> Option<&WidgetState> {
        self.slots.iter().find(|slot| slot.kind() == kind)
    }

    pub fn get_mut(&mut self, kind: WidgetKind) -> Option<&mut WidgetState> {
        self.slots.iter_mut().find(|slot| slot.kind() == kind)
    }

    /// The drag widget, single or sequence.
    pub fn drag_mut(&mut self) -> Option<&mut WidgetState> {
        self.slots.iter_mut().find(|slot| slot.kind().is_drag())
    }

    /// True when the step has widgets and every one has passed.
    pub fn all_passed(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(WidgetState::is_passed)
    }

    /// Fire any due deferred actions. Returns true if some state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for slot in &mut self.slots {
            if let WidgetState::Sequence(state) = slot {
                changed |= state.tick(now);
            }
        }
        changed
    }
}
