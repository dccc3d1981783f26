//! Single-select radio widget. The selection group is scoped to its step.

use crate::answers::RecordedAnswer;
use crate::document::ChoiceSpec;

use super::{Feedback, WidgetOutcome};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioState {
    selected: Option<String>,
    passed: bool,
    feedback: Option<Feedback>,
}

impl RadioState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `item_id`, replacing any previous selection.
    pub fn select(&mut self, spec: &ChoiceSpec<'_>, item_id: &str) -> WidgetOutcome {
        if spec.item(item_id).is_none() {
            return WidgetOutcome::Ignored;
        }
        self.selected = Some(item_id.to_string());
        WidgetOutcome::Updated
    }

    /// Validate the current selection. With nothing selected, shows
    /// `missing_selection` and changes nothing else.
    pub fn submit(&mut self, spec: &ChoiceSpec<'_>, missing_selection: &str) -> WidgetOutcome {
        let Some((_, item)) = self.selected.as_deref().and_then(|id| spec.item(id)) else {
            self.feedback = Some(Feedback::error(missing_selection));
            return WidgetOutcome::Guidance;
        };

        if item.correct {
            self.passed = true;
            self.feedback = Some(Feedback::success(spec.feedback_correct));
            WidgetOutcome::Accepted(RecordedAnswer::Text(item.text.clone()))
        } else {
            self.feedback = Some(Feedback::error(spec.feedback_incorrect));
            WidgetOutcome::Mismatch
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_passed(&self) -> bool {
        self.passed
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ChoiceItem;

    const MISSING: &str = "Please select an answer.";

    fn items() -> Vec<ChoiceItem> {
        vec![
            ChoiceItem { id: "vague".into(), text: "It works".into(), correct: false },
            ChoiceItem { id: "testable".into(), text: "p95 latency under 200ms".into(), correct: true },
        ]
    }

    fn spec(items: &[ChoiceItem]) -> ChoiceSpec<'_> {
        ChoiceSpec {
            header: "Pick the best acceptance criterion",
            items,
            feedback_correct: "Measurable!",
            feedback_incorrect: "Too vague",
        }
    }

    #[test]
    fn submit_without_selection_is_guidance() {
        let items = items();
        let spec = spec(&items);
        let mut state = RadioState::new();

        assert_eq!(state.submit(&spec, MISSING), WidgetOutcome::Guidance);
        assert_eq!(state.feedback(), Some(&Feedback::error(MISSING)));
        assert!(!state.is_passed());
    }

    #[test]
    fn correct_selection_is_accepted() {
        let items = items();
        let spec = spec(&items);
        let mut state = RadioState::new();

        state.select(&spec, "testable");
        assert_eq!(
            state.submit(&spec, MISSING),
            WidgetOutcome::Accepted(RecordedAnswer::Text("p95 latency under 200ms".into()))
        );
        assert!(state.is_passed());
    }

    #[test]
    fn wrong_selection_allows_resubmit() {
        let items = items();
        let spec = spec(&items);
        let mut state = RadioState::new();

        state.select(&spec, "vague");
        assert_eq!(state.submit(&spec, MISSING), WidgetOutcome::Mismatch);
        assert_eq!(state.feedback(), Some(&Feedback::error("Too vague")));

        state.select(&spec, "testable");
        assert_eq!(state.selected(), Some("testable"));
        assert!(matches!(state.submit(&spec, MISSING), WidgetOutcome::Accepted(_)));
    }

    #[test]
    fn unknown_option_is_ignored() {
        let items = items();
        let spec = spec(&items);
        let mut state = RadioState::new();
        assert_eq!(state.select(&spec, "other"), WidgetOutcome::Ignored);
        assert_eq!(state.selected(), None);
    }
}
