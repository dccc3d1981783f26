//! Ordered-sequence drag widget.
//!
//! Items are appended to the zone in drop order. Once every item is in, the
//! displayed texts are compared element-wise against `correct_sequence`. A
//! wrong order locks the widget until the reset deadline passes, then the zone
//! empties and every item becomes available again.

use std::time::{Duration, Instant};

use crate::answers::RecordedAnswer;
use crate::document::{DragItem, SequenceSpec};

use super::{Feedback, WidgetOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencePhase {
    /// Accepting drops.
    Collecting,
    /// Wrong order shown; drops are refused until `due`.
    ResetPending { due: Instant },
    /// Correct order accepted; the widget is settled.
    Accepted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceState {
    /// Dropped item ids, in drop order.
    dropped: Vec<String>,
    capacity: usize,
    phase: SequencePhase,
    feedback: Option<Feedback>,
}

impl SequenceState {
    /// A zone with no items is complete as soon as it exists.
    pub fn new(capacity: usize) -> Self {
        let phase = if capacity == 0 {
            SequencePhase::Accepted
        } else {
            SequencePhase::Collecting
        };
        Self {
            dropped: Vec::with_capacity(capacity),
            capacity,
            phase,
            feedback: None,
        }
    }

    pub fn drop_item(
        &mut self,
        spec: &SequenceSpec<'_>,
        item_id: &str,
        now: Instant,
        reset_delay: Duration,
    ) -> WidgetOutcome {
        if self.phase != SequencePhase::Collecting {
            return WidgetOutcome::Ignored;
        }
        if !spec.items.iter().any(|item| item.id == item_id)
            || self.dropped.iter().any(|id| id == item_id)
        {
            return WidgetOutcome::Ignored;
        }

        self.dropped.push(item_id.to_string());
        if self.dropped.len() < self.capacity {
            return WidgetOutcome::Updated;
        }

        let current: Vec<String> = self
            .placed_texts(spec)
            .into_iter()
            .map(str::to_string)
            .collect();
        if current == spec.zone.correct_sequence {
            self.phase = SequencePhase::Accepted;
            self.feedback = Some(Feedback::success(&spec.zone.feedback_correct));
            WidgetOutcome::Accepted(RecordedAnswer::Sequence(current))
        } else {
            self.phase = SequencePhase::ResetPending {
                due: now + reset_delay,
            };
            self.feedback = Some(Feedback::error(&spec.zone.feedback_incorrect));
            WidgetOutcome::Mismatch
        }
    }

    /// Clear the zone if a pending reset is due. Returns true when it fired.
    ///
    /// The failure feedback stays visible after the reset.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            SequencePhase::ResetPending { due } if now >= due => {
                self.dropped.clear();
                self.phase = SequencePhase::Collecting;
                tracing::debug!("sequence reset after failed attempt");
                true
            }
            _ => false,
        }
    }

    /// Texts currently in the zone, in drop order.
    pub fn placed_texts<'a>(&self, spec: &SequenceSpec<'a>) -> Vec<&'a str> {
        self.dropped
            .iter()
            .filter_map(|id| spec.items.iter().find(|item| &item.id == id))
            .map(|item| item.text.as_str())
            .collect()
    }

    /// Items not yet dropped.
    pub fn available<'a>(&self, spec: &SequenceSpec<'a>) -> Vec<&'a DragItem> {
        spec.items
            .iter()
            .filter(|item| !self.dropped.contains(&item.id))
            .collect()
    }

    pub fn phase(&self) -> SequencePhase {
        self.phase
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.phase, SequencePhase::ResetPending { .. })
    }

    pub fn is_passed(&self) -> bool {
        self.phase == SequencePhase::Accepted
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }
}
