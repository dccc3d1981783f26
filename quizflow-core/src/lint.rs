//! Static checks over a quiz document.
//!
//! Errors mark documents that cannot be completed as written; warnings mark
//! content that loads and runs but probably does not do what the author meant.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::answers::InteractiveStep;
use crate::document::{DragItem, QuizDocument, StepContent, StepDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    /// Id of the offending step.
    pub step: String,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{level}: step '{}': {}", self.step, self.message)
    }
}

impl QuizDocument {
    /// Run every check and return the findings in step order.
    pub fn lint(&self) -> Vec<Issue> {
        let mut issues = Vec::new();
        let mut seen_ids = HashSet::new();

        for step in &self.steps {
            let mut push = |severity, message: String| {
                issues.push(Issue {
                    severity,
                    step: step.id.clone(),
                    message,
                })
            };

            if !seen_ids.insert(step.id.as_str()) {
                push(Severity::Error, "duplicate step id".to_string());
            }
            for (severity, message) in check_step(step) {
                push(severity, message);
            }
        }
        issues
    }
}

fn check_step(step: &StepDescriptor) -> Vec<(Severity, String)> {
    let content = &step.content;
    let mut found = Vec::new();

    check_drag(content, &mut found);
    check_choices(content, &mut found);

    let recognised = InteractiveStep::from_id(&step.id).is_some();
    match (recognised, content.has_interaction()) {
        (true, false) => found.push((
            Severity::Warning,
            "recognised interactive step has no interactive widget".to_string(),
        )),
        (false, true) => found.push((
            Severity::Warning,
            "interactive widget on an unrecognised step id; its answer is not recorded"
                .to_string(),
        )),
        _ => {}
    }
    found
}

fn check_drag(content: &StepContent, found: &mut Vec<(Severity, String)>) {
    if let Some(zones) = &content.drop_zones {
        if zones.is_empty() {
            found.push((Severity::Error, "dropZones is empty".to_string()));
        }
        if content.sequence_drop_zone.is_some() {
            found.push((
                Severity::Warning,
                "both dropZones and sequenceDropZone are defined; the single drop zone is used"
                    .to_string(),
            ));
        }
    }

    let Some(items) = &content.drag_items else {
        return;
    };
    if items.is_empty() && content.drag_widget().is_some() {
        found.push((Severity::Error, "dragItems is empty".to_string()));
    }
    if duplicates(items.iter().map(|item| item.id.as_str())) {
        found.push((Severity::Error, "duplicate drag item id".to_string()));
    }
    if content.drag_widget().is_none() && content.drop_zones.as_ref().map_or(true, |z| !z.is_empty())
    {
        found.push((
            Severity::Error,
            "dragItems defined without a drop target".to_string(),
        ));
    }
    if let Some(spec) = content.single_drop() {
        if !items.iter().any(|item| item.id == spec.zone.correct_id) {
            found.push((
                Severity::Error,
                format!("correctId '{}' names no drag item", spec.zone.correct_id),
            ));
        }
    }
    if let Some(spec) = content.sequence_drop() {
        if spec.zone.correct_sequence.len() != items.len() {
            found.push((
                Severity::Error,
                format!(
                    "correctSequence has {} entries but there are {} drag items",
                    spec.zone.correct_sequence.len(),
                    items.len()
                ),
            ));
        } else if !same_texts(&spec.zone.correct_sequence, items) {
            found.push((
                Severity::Error,
                "correctSequence entries are not exactly the drag item texts".to_string(),
            ));
        }
    }
}

/// True when `expected` holds each item text exactly as often as the items do.
fn same_texts(expected: &[String], items: &[DragItem]) -> bool {
    let mut expected: Vec<&str> = expected.iter().map(String::as_str).collect();
    let mut texts: Vec<&str> = items.iter().map(|item| item.text.as_str()).collect();
    expected.sort_unstable();
    texts.sort_unstable();
    expected == texts
}

fn check_choices(content: &StepContent, found: &mut Vec<(Severity, String)>) {
    if let Some(spec) = content.checkbox_set() {
        if duplicates(spec.items.iter().map(|item| item.id.as_str())) {
            found.push((Severity::Error, "duplicate checkbox item id".to_string()));
        }
    }
    if let Some(spec) = content.radio_set() {
        if duplicates(spec.items.iter().map(|item| item.id.as_str())) {
            found.push((Severity::Error, "duplicate radio item id".to_string()));
        }
        if !spec.items.iter().any(|item| item.correct) {
            found.push((
                Severity::Warning,
                "radio set has no correct item and cannot be passed".to_string(),
            ));
        }
    }
}

fn duplicates<'a>(mut ids: impl Iterator<Item = &'a str>) -> bool {
    let mut seen = HashSet::new();
    ids.any(|id| !seen.insert(id))
}
