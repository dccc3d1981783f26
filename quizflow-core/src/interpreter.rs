//! Step interpreter: turns one step descriptor plus its live widget state into
//! an ordered list of content blocks.
//!
//! Order: text, image, buttons, drag widget (single or sequence), checkboxes,
//! radios, sections, star, download button, small text.

use crate::document::{ActionButton, ChoiceSpec, StepDescriptor};
use crate::view::{
    ButtonView, ChoiceView, ContentBlock, DropView, ItemView, OptionView, SectionView,
};
use crate::widget::{Feedback, StepWidgets, WidgetKind, WidgetState};

/// Render every applicable content field of `step`.
pub fn render_step(step: &StepDescriptor, widgets: &StepWidgets) -> Vec<ContentBlock> {
    let content = &step.content;
    let mut blocks = Vec::new();

    for paragraph in content.text.iter().flatten() {
        blocks.push(ContentBlock::Paragraph(paragraph.clone()));
    }

    if let Some(source) = &content.image {
        blocks.push(ContentBlock::Image {
            source: source.clone(),
        });
    }

    if let Some(buttons) = &content.buttons {
        blocks.push(ContentBlock::Buttons(buttons.iter().map(button_view).collect()));
    }

    if let Some(block) = drag_block(step, widgets) {
        blocks.push(block);
    }

    if let (Some(spec), Some(WidgetState::Checkbox(state))) =
        (content.checkbox_set(), widgets.get(WidgetKind::Checkbox))
    {
        let view = choice_view(&spec, state.feedback(), |index, _| state.is_checked(index));
        blocks.push(ContentBlock::Checkboxes(view));
    }

    if let (Some(spec), Some(WidgetState::Radio(state))) =
        (content.radio_set(), widgets.get(WidgetKind::Radio))
    {
        let view = choice_view(&spec, state.feedback(), |_, id| state.selected() == Some(id));
        blocks.push(ContentBlock::Radios(view));
    }

    for section in content.sections.iter().flatten() {
        blocks.push(ContentBlock::Section(SectionView::from(section)));
    }

    if content.star_icon {
        blocks.push(ContentBlock::Star);
    }

    if let Some(button) = &content.download_button {
        blocks.push(ContentBlock::DownloadButton(button_view(button)));
    }

    if let Some(text) = &content.small_text {
        blocks.push(ContentBlock::SmallText(text.clone()));
    }

    blocks
}

fn drag_block(step: &StepDescriptor, widgets: &StepWidgets) -> Option<ContentBlock> {
    let content = &step.content;
    let view = match widgets.iter().find(|w| w.kind().is_drag())? {
        WidgetState::SingleDrop(state) => {
            let spec = content.single_drop()?;
            DropView {
                kind: WidgetKind::SingleDrop,
                zone_id: spec.zone.id.clone(),
                header: spec.zone.header_text.clone(),
                available: state.available(&spec).into_iter().map(item_view).collect(),
                placed: state.placed_text(&spec).map(str::to_string).into_iter().collect(),
                feedback: state.feedback().cloned(),
                locked: false,
                settled: state.is_passed(),
            }
        }
        WidgetState::Sequence(state) => {
            let spec = content.sequence_drop()?;
            DropView {
                kind: WidgetKind::SequenceDrop,
                zone_id: spec.zone.id.clone(),
                header: spec.zone.header_text.clone(),
                available: state.available(&spec).into_iter().map(item_view).collect(),
                placed: state.placed_texts(&spec).into_iter().map(str::to_string).collect(),
                feedback: state.feedback().cloned(),
                locked: state.is_locked(),
                settled: state.is_passed(),
            }
        }
        _ => return None,
    };
    Some(ContentBlock::Drag(view))
}

fn item_view(item: &crate::document::DragItem) -> ItemView {
    ItemView {
        id: item.id.clone(),
        text: item.text.clone(),
    }
}

fn button_view(button: &ActionButton) -> ButtonView {
    ButtonView {
        id: button.id.clone(),
        label: button.text.clone(),
        action: button.action,
    }
}

fn choice_view(
    spec: &ChoiceSpec<'_>,
    feedback: Option<&Feedback>,
    marked: impl Fn(usize, &str) -> bool,
) -> ChoiceView {
    ChoiceView {
        header: spec.header.to_string(),
        options: spec
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| OptionView {
                id: item.id.clone(),
                text: item.text.clone(),
                marked: marked(index, &item.id),
            })
            .collect(),
        feedback: feedback.cloned(),
    }
}
