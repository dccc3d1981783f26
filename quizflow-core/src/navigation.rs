//! Navigation controller: the current step index, its bounds, progress and
//! the completion check used by continue-gating.

use crate::answers::{AnswerRecord, InteractiveStep};

/// Position within the step sequence. `current` is always a valid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    step_count: usize,
}

impl Navigator {
    /// Start at step 0. `step_count` must be non-zero.
    pub fn new(step_count: usize) -> Self {
        debug_assert!(step_count > 0);
        Self {
            current: 0,
            step_count: step_count.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.step_count
    }

    /// Move back one step. Returns false when already on the first step.
    pub fn back(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Move forward one step. Returns false when already on the last step.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// `current / (step_count - 1)` as a percentage, clamped to [0, 100].
    /// A single-step quiz is always at 100%.
    pub fn progress_percent(&self) -> f64 {
        if self.step_count <= 1 {
            return 100.0;
        }
        let ratio = self.current as f64 / (self.step_count - 1) as f64;
        (ratio * 100.0).clamp(0.0, 100.0)
    }
}

/// True for any id outside the recognised interactive set; otherwise whether
/// the matching answer field holds a value.
pub fn is_step_completed(step_id: &str, answers: &AnswerRecord) -> bool {
    match InteractiveStep::from_id(step_id) {
        Some(step) => answers.is_recorded(step),
        None => true,
    }
}
