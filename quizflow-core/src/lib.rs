//! Quizflow Core: document model, widget validators, navigation and the engine.
//!
//! This crate has no display code:
//! - Quiz document schema and loading (file or http(s))
//! - Session answer record keyed by interactive step id
//! - Single-drop, sequence, checkbox and radio validators plus static sections
//! - Step interpreter producing an ordered render model
//! - Navigation with continue-gating and progress
//! - Engine processing explicit events against an explicit clock

pub mod answers;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod interpreter;
pub mod lint;
pub mod loader;
pub mod navigation;
pub mod view;
pub mod widget;

pub use answers::{AnswerRecord, InteractiveStep, RecordedAnswer};
pub use config::{ConfigError, QuizConfig};
pub use document::{QuizDocument, StepContent, StepDescriptor};
pub use engine::{Effect, Engine, Event, Response};
pub use error::{LoadError, QuizError};
pub use lint::{Issue, Severity};
pub use loader::{load_document, parse_document, DocumentSource};
pub use view::{ContentBlock, ScreenView};
pub use widget::{Feedback, FeedbackTone, WidgetKind, WidgetOutcome};
