//! Quiz document schema: the read-only description of every step.
//!
//! The JSON layout uses camelCase keys (`dragItems`, `correctId`, ...). A step's
//! content is a record of optional fields; which widgets a step shows is decided
//! by which fields are present, resolved in a fixed order (see
//! [`StepContent::interactive_widgets`]).

use serde::Deserialize;

use crate::widget::WidgetKind;

/// The whole quiz: a title and an ordered list of steps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizDocument {
    pub title: String,
    pub steps: Vec<StepDescriptor>,
}

impl QuizDocument {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn step(&self, index: usize) -> Option<&StepDescriptor> {
        self.steps.get(index)
    }
}

/// One page of the quiz flow.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StepDescriptor {
    /// Stable key used for completion checks and answer routing.
    pub id: String,
    #[serde(default)]
    pub content: StepContent,
}

/// Everything a step may display. Any combination of fields may be present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepContent {
    pub text: Option<Vec<String>>,
    pub image: Option<String>,
    pub buttons: Option<Vec<ActionButton>>,

    pub drag_items: Option<Vec<DragItem>>,
    pub drop_zones: Option<Vec<DropZoneSpec>>,
    pub sequence_drop_zone: Option<SequenceDropZoneSpec>,

    pub checkbox_items: Option<Vec<ChoiceItem>>,
    pub radio_items: Option<Vec<ChoiceItem>>,
    /// Shared by the checkbox and radio widgets.
    pub header_text: Option<String>,
    pub feedback_correct: Option<String>,
    pub feedback_incorrect: Option<String>,

    pub sections: Option<Vec<Section>>,

    // Completion-page decorations.
    #[serde(default)]
    pub star_icon: bool,
    pub download_button: Option<ActionButton>,
    pub small_text: Option<String>,
}

/// A draggable item. `id` is unique within its step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DragItem {
    pub id: String,
    pub text: String,
}

/// Single-target drop zone: exactly one item id is correct.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropZoneSpec {
    pub id: String,
    #[serde(default)]
    pub header_text: String,
    pub correct_id: String,
    #[serde(default)]
    pub feedback_correct: String,
    #[serde(default)]
    pub feedback_incorrect: String,
}

/// Ordered drop zone: items must arrive in `correct_sequence` order (by text).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceDropZoneSpec {
    pub id: String,
    #[serde(default)]
    pub header_text: String,
    pub correct_sequence: Vec<String>,
    #[serde(default)]
    pub feedback_correct: String,
    #[serde(default)]
    pub feedback_incorrect: String,
}

/// A checkbox or radio option. `correct` is never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChoiceItem {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

pub type CheckboxItem = ChoiceItem;
pub type RadioItem = ChoiceItem;

/// A static, informational block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    pub header_text: String,
    pub content: Option<String>,
    pub items: Option<Vec<String>>,
}

/// A button that hands a payload to the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionButton {
    pub id: String,
    pub text: String,
    pub action: ButtonAction,
    #[serde(default)]
    pub action_data: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonAction {
    Alert,
    Download,
    #[serde(other)]
    Unsupported,
}

// ── Borrowed widget views ──────────────────────────────────────────

/// Inputs of the single-target drag widget.
#[derive(Debug, Clone, Copy)]
pub struct SingleDropSpec<'a> {
    pub items: &'a [DragItem],
    pub zone: &'a DropZoneSpec,
}

/// Inputs of the ordered-sequence drag widget.
#[derive(Debug, Clone, Copy)]
pub struct SequenceSpec<'a> {
    pub items: &'a [DragItem],
    pub zone: &'a SequenceDropZoneSpec,
}

/// Inputs of a checkbox or radio set.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceSpec<'a> {
    pub header: &'a str,
    pub items: &'a [ChoiceItem],
    pub feedback_correct: &'a str,
    pub feedback_incorrect: &'a str,
}

impl<'a> ChoiceSpec<'a> {
    pub fn item(&self, id: &str) -> Option<(usize, &'a ChoiceItem)> {
        self.items.iter().enumerate().find(|(_, item)| item.id == id)
    }
}

impl StepContent {
    /// Single-drop widget inputs. Only the first drop zone is used.
    pub fn single_drop(&self) -> Option<SingleDropSpec<'_>> {
        let items = self.drag_items.as_deref()?;
        let zone = self.drop_zones.as_deref()?.first()?;
        Some(SingleDropSpec { items, zone })
    }

    pub fn sequence_drop(&self) -> Option<SequenceSpec<'_>> {
        let items = self.drag_items.as_deref()?;
        let zone = self.sequence_drop_zone.as_ref()?;
        Some(SequenceSpec { items, zone })
    }

    pub fn checkbox_set(&self) -> Option<ChoiceSpec<'_>> {
        self.checkbox_items.as_deref().map(|items| self.choice_spec(items))
    }

    pub fn radio_set(&self) -> Option<ChoiceSpec<'_>> {
        self.radio_items.as_deref().map(|items| self.choice_spec(items))
    }

    fn choice_spec<'a>(&'a self, items: &'a [ChoiceItem]) -> ChoiceSpec<'a> {
        ChoiceSpec {
            header: self.header_text.as_deref().unwrap_or_default(),
            items,
            feedback_correct: self.feedback_correct.as_deref().unwrap_or_default(),
            feedback_incorrect: self.feedback_incorrect.as_deref().unwrap_or_default(),
        }
    }

    /// The drag widget this step shows, if any. Single-drop wins when a
    /// document defines both drop targets.
    pub fn drag_widget(&self) -> Option<WidgetKind> {
        if self.single_drop().is_some() {
            Some(WidgetKind::SingleDrop)
        } else if self.sequence_drop().is_some() {
            Some(WidgetKind::SequenceDrop)
        } else {
            None
        }
    }

    /// Interactive widgets in render order: drag, checkbox set, radio set.
    pub fn interactive_widgets(&self) -> Vec<WidgetKind> {
        let mut kinds = Vec::with_capacity(3);
        kinds.extend(self.drag_widget());
        if self.checkbox_items.is_some() {
            kinds.push(WidgetKind::Checkbox);
        }
        if self.radio_items.is_some() {
            kinds.push(WidgetKind::Radio);
        }
        kinds
    }

    pub fn has_interaction(&self) -> bool {
        !self.interactive_widgets().is_empty()
    }

    /// Look up an action button (inline buttons first, then the download button).
    pub fn button(&self, id: &str) -> Option<&ActionButton> {
        self.buttons
            .iter()
            .flatten()
            .chain(self.download_button.iter())
            .find(|b| b.id == id)
    }
}
