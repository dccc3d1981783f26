//! Multi-select checkbox widget. All-or-nothing: every box must match its
//! `correct` flag, including the ones that should stay unchecked.

use indexmap::IndexSet;

use crate::answers::RecordedAnswer;
use crate::document::ChoiceSpec;

use super::{Feedback, WidgetOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxState {
    checked: Vec<bool>,
    passed: bool,
    feedback: Option<Feedback>,
}

impl CheckboxState {
    pub fn new(len: usize) -> Self {
        Self {
            checked: vec![false; len],
            passed: false,
            feedback: None,
        }
    }

    pub fn toggle(&mut self, spec: &ChoiceSpec<'_>, item_id: &str) -> WidgetOutcome {
        match spec.item(item_id) {
            Some((index, _)) if index < self.checked.len() => {
                self.checked[index] = !self.checked[index];
                WidgetOutcome::Updated
            }
            _ => WidgetOutcome::Ignored,
        }
    }

    pub fn submit(&mut self, spec: &ChoiceSpec<'_>) -> WidgetOutcome {
        let all_match = spec.items.len() == self.checked.len()
            && spec
                .items
                .iter()
                .zip(&self.checked)
                .all(|(item, checked)| item.correct == *checked);

        if !all_match {
            self.feedback = Some(Feedback::error(spec.feedback_incorrect));
            return WidgetOutcome::Mismatch;
        }

        let selected: IndexSet<String> = spec
            .items
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(item, _)| item.text.clone())
            .collect();
        self.passed = true;
        self.feedback = Some(Feedback::success(spec.feedback_correct));
        WidgetOutcome::Accepted(RecordedAnswer::Selection(selected))
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    pub fn is_passed(&self) -> bool {
        self.passed
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }
}
