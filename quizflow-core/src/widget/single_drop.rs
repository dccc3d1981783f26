//! Single-target drag widget: one zone, one correct item.
//!
//! idle → (drop) → correct: item settles in the zone, source item leaves the pool
//!               → incorrect: failure feedback, zone stays empty and re-droppable

use crate::answers::RecordedAnswer;
use crate::document::{DragItem, SingleDropSpec};

use super::{Feedback, WidgetOutcome};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleDropState {
    /// Id of the item settled in the zone. Set at most once.
    placed: Option<String>,
    feedback: Option<Feedback>,
}

impl SingleDropState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drop_item(&mut self, spec: &SingleDropSpec<'_>, item_id: &str) -> WidgetOutcome {
        if self.placed.is_some() {
            return WidgetOutcome::Ignored;
        }
        let Some(item) = spec.items.iter().find(|item| item.id == item_id) else {
            return WidgetOutcome::Ignored;
        };

        if item.id == spec.zone.correct_id {
            self.placed = Some(item.id.clone());
            self.feedback = Some(Feedback::success(&spec.zone.feedback_correct));
            WidgetOutcome::Accepted(RecordedAnswer::Text(item.text.clone()))
        } else {
            self.feedback = Some(Feedback::error(&spec.zone.feedback_incorrect));
            WidgetOutcome::Mismatch
        }
    }

    /// Items still available to drag.
    pub fn available<'a>(&self, spec: &SingleDropSpec<'a>) -> Vec<&'a DragItem> {
        spec.items
            .iter()
            .filter(|item| self.placed.as_deref() != Some(item.id.as_str()))
            .collect()
    }

    /// Text of the settled item, if any.
    pub fn placed_text<'a>(&self, spec: &SingleDropSpec<'a>) -> Option<&'a str> {
        let placed = self.placed.as_deref()?;
        spec.items
            .iter()
            .find(|item| item.id == placed)
            .map(|item| item.text.as_str())
    }

    pub fn is_passed(&self) -> bool {
        self.placed.is_some()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }
}
