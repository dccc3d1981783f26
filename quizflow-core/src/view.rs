//! Render model handed to display surfaces.
//!
//! A [`ScreenView`] is rebuilt from engine state on every render and fully
//! replaces the previous one. Surfaces draw it as they like but must not assume
//! more structure than these types carry. Correctness flags never appear here.

use crate::document::ButtonAction;
use crate::widget::{Feedback, WidgetKind};

pub use crate::widget::sections::{SectionBody, SectionView};

/// Everything a surface needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView {
    pub title: String,
    /// 1-based step number.
    pub current_step: usize,
    pub total_steps: usize,
    /// Progress in [0, 100].
    pub progress_percent: f64,
    pub back_enabled: bool,
    pub continue_enabled: bool,
    pub continue_label: String,
    pub blocks: Vec<ContentBlock>,
}

/// One piece of step content, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Paragraph(String),
    Image { source: String },
    Buttons(Vec<ButtonView>),
    Drag(DropView),
    Checkboxes(ChoiceView),
    Radios(ChoiceView),
    Section(SectionView),
    Star,
    DownloadButton(ButtonView),
    SmallText(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub id: String,
    pub label: String,
    pub action: ButtonAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: String,
    pub text: String,
}

/// A drag widget: the pool of draggable items and the zone's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropView {
    pub kind: WidgetKind,
    pub zone_id: String,
    pub header: String,
    pub available: Vec<ItemView>,
    /// Texts settled in the zone, in drop order.
    pub placed: Vec<String>,
    pub feedback: Option<Feedback>,
    /// True while a failed sequence waits for its reset.
    pub locked: bool,
    /// The widget has passed and accepts no more drops.
    pub settled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub id: String,
    pub text: String,
    /// Checked (checkbox) or selected (radio).
    pub marked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    pub header: String,
    pub options: Vec<OptionView>,
    pub feedback: Option<Feedback>,
}
