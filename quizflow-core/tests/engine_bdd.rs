//! BDD tests for the quiz engine, driven through the bundled demo lesson.
//!
//! These tests verify:
//! - Completion checks and continue-gating
//! - Each widget's accept / reject behaviour and what it records
//! - Navigation bounds, progress, and the completion signal
//! - Fresh widgets on revisit with gating taken from the answer record

use std::time::{Duration, Instant};

use quizflow_core::navigation::is_step_completed;
use quizflow_core::view::DropView;
use quizflow_core::{
    parse_document, ContentBlock, Effect, Engine, Event, FeedbackTone, QuizConfig, QuizDocument,
    WidgetKind, WidgetOutcome,
};

const DEMO: &str = include_str!("../../demos/quiz_data.json");

// ── Helpers ─────────────────────────────────────────────────────────

fn demo_document() -> QuizDocument {
    parse_document(DEMO).expect("demo document parses")
}

fn demo_engine() -> Engine {
    Engine::new(demo_document(), QuizConfig::default()).expect("demo document starts")
}

fn drop_item(engine: &mut Engine, id: &str, now: Instant) -> Option<WidgetOutcome> {
    engine
        .dispatch(Event::Drop { item_id: id.into() }, now)
        .outcome
}

/// Pass whatever the current demo step asks for.
fn solve_current(engine: &mut Engine, now: Instant) {
    match engine.current_step().id.as_str() {
        "project-scope" => {
            drop_item(engine, "scope-mvp", now);
        }
        "release-plan" => {
            for id in ["stage-alpha", "stage-beta", "stage-ga"] {
                drop_item(engine, id, now);
            }
        }
        "consumers" => {
            for id in ["consumer-users", "consumer-support", "consumer-partners"] {
                engine.dispatch(Event::Toggle { item_id: id.into() }, now);
            }
            engine.dispatch(Event::Submit { widget: WidgetKind::Checkbox }, now);
        }
        "feedback-methods" => {
            for id in ["method-survey", "method-metrics"] {
                engine.dispatch(Event::Toggle { item_id: id.into() }, now);
            }
            engine.dispatch(Event::Submit { widget: WidgetKind::Checkbox }, now);
        }
        "acceptance-criteria" => {
            engine.dispatch(Event::Select { item_id: "criterion-p95".into() }, now);
            engine.dispatch(Event::Submit { widget: WidgetKind::Radio }, now);
        }
        _ => {}
    }
}

/// Solve and continue until `step_id` is current.
fn walk_to(engine: &mut Engine, step_id: &str, now: Instant) {
    while engine.current_step().id != step_id {
        solve_current(engine, now);
        let before = engine.current_index();
        engine.dispatch(Event::Continue, now);
        assert_ne!(before, engine.current_index(), "stuck at {}", engine.current_step().id);
    }
}

fn drag_view(engine: &Engine) -> DropView {
    engine
        .view()
        .blocks
        .into_iter()
        .find_map(|block| match block {
            ContentBlock::Drag(view) => Some(view),
            _ => None,
        })
        .expect("step has a drag widget")
}

// ── Scenarios ───────────────────────────────────────────────────────

#[test]
fn bdd_scenario_non_interactive_steps_are_always_complete() {
    // GIVEN the demo document and an empty answer record
    let document = demo_document();
    let engine = demo_engine();

    // WHEN each step's completion is checked
    // THEN every step outside the five recognised ids reports complete
    for step in &document.steps {
        let recognised = quizflow_core::InteractiveStep::from_id(&step.id).is_some();
        assert_eq!(
            is_step_completed(&step.id, engine.answers()),
            !recognised,
            "step {}",
            step.id
        );
    }
}

#[test]
fn bdd_scenario_single_drop_records_only_the_correct_item() {
    // GIVEN the project-scope step
    let mut engine = demo_engine();
    let now = Instant::now();
    walk_to(&mut engine, "project-scope", now);
    assert!(!engine.can_continue());

    // WHEN a wrong item is dropped
    let outcome = drop_item(&mut engine, "scope-everything", now);

    // THEN failure feedback shows and nothing is recorded
    assert_eq!(outcome, Some(WidgetOutcome::Mismatch));
    assert_eq!(engine.answers().project_scope(), "");
    let view = drag_view(&engine);
    assert!(view.placed.is_empty());
    assert_eq!(view.feedback.map(|f| f.tone), Some(FeedbackTone::Error));

    // WHEN the correct item is dropped
    drop_item(&mut engine, "scope-mvp", now);

    // THEN its text is recorded and settles in the zone
    let expected = "The smallest set of features that solves the core problem";
    assert_eq!(engine.answers().project_scope(), expected);
    let view = drag_view(&engine);
    assert_eq!(view.placed, vec![expected.to_string()]);
    assert_eq!(view.available.len(), 2);
    assert!(engine.can_continue());

    // AND further drops change nothing
    assert_eq!(drop_item(&mut engine, "scope-polish", now), Some(WidgetOutcome::Ignored));
    assert_eq!(engine.answers().project_scope(), expected);
}

#[test]
fn bdd_scenario_sequence_accepts_exact_order() {
    // GIVEN the release-plan step
    let mut engine = demo_engine();
    let now = Instant::now();
    walk_to(&mut engine, "release-plan", now);

    // WHEN the stages are dropped in the correct order
    assert_eq!(drop_item(&mut engine, "stage-alpha", now), Some(WidgetOutcome::Updated));
    assert_eq!(drop_item(&mut engine, "stage-beta", now), Some(WidgetOutcome::Updated));
    let outcome = drop_item(&mut engine, "stage-ga", now);

    // THEN the order is accepted and recorded
    assert!(matches!(outcome, Some(WidgetOutcome::Accepted(_))));
    assert_eq!(
        engine.answers().release_plan(),
        ["Internal alpha", "Public beta", "General availability"]
    );
    assert!(engine.can_continue());
}

#[test]
fn bdd_scenario_sequence_resets_after_wrong_order() {
    // GIVEN the release-plan step
    let mut engine = demo_engine();
    let start = Instant::now();
    walk_to(&mut engine, "release-plan", start);

    // WHEN the stages are dropped with a transposition
    drop_item(&mut engine, "stage-beta", start);
    drop_item(&mut engine, "stage-alpha", start);
    let outcome = drop_item(&mut engine, "stage-ga", start);

    // THEN the attempt fails and the widget locks
    assert_eq!(outcome, Some(WidgetOutcome::Mismatch));
    assert!(engine.answers().release_plan().is_empty());
    let view = drag_view(&engine);
    assert!(view.locked);
    assert_eq!(view.placed.len(), 3);
    assert!(!engine.can_continue());

    // AND drops during the pending reset are ignored
    let during = start + Duration::from_millis(10);
    assert_eq!(drop_item(&mut engine, "stage-alpha", during), Some(WidgetOutcome::Ignored));

    // WHEN the reset delay elapses
    let after = start + engine.config().reset_delay();
    engine.dispatch(Event::Tick, after);

    // THEN the zone is empty and every item is available again
    let view = drag_view(&engine);
    assert!(!view.locked);
    assert!(view.placed.is_empty());
    assert_eq!(view.available.len(), 3);

    // AND a correct retry is accepted
    for id in ["stage-alpha", "stage-beta", "stage-ga"] {
        drop_item(&mut engine, id, after);
    }
    assert_eq!(engine.answers().release_plan().len(), 3);
}

#[test]
fn bdd_scenario_checkbox_requires_exact_match() {
    // GIVEN the feedback-methods step (two correct items, one incorrect)
    let mut engine = demo_engine();
    let now = Instant::now();
    walk_to(&mut engine, "feedback-methods", now);

    // WHEN all three items are checked and submitted
    for id in ["method-survey", "method-metrics", "method-guess"] {
        engine.dispatch(Event::Toggle { item_id: id.into() }, now);
    }
    let response = engine.dispatch(Event::Submit { widget: WidgetKind::Checkbox }, now);

    // THEN the submission fails and the record is unchanged
    assert_eq!(response.outcome, Some(WidgetOutcome::Mismatch));
    assert!(engine.answers().feedback_methods().is_empty());
    assert!(!engine.can_continue());

    // WHEN the incorrect item is unchecked and resubmitted
    engine.dispatch(Event::Toggle { item_id: "method-guess".into() }, now);
    engine.dispatch(Event::Submit { widget: WidgetKind::Checkbox }, now);

    // THEN exactly the two correct texts are recorded
    let recorded: Vec<&str> = engine
        .answers()
        .feedback_methods()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(recorded, vec!["In-app survey", "Usage metrics"]);
    assert!(engine.can_continue());
}

#[test]
fn bdd_scenario_radio_guides_then_accepts() {
    // GIVEN the acceptance-criteria step
    let mut engine = demo_engine();
    let now = Instant::now();
    walk_to(&mut engine, "acceptance-criteria", now);

    // WHEN submitted with nothing selected
    let response = engine.dispatch(Event::Submit { widget: WidgetKind::Radio }, now);

    // THEN only the guidance message appears
    assert_eq!(response.outcome, Some(WidgetOutcome::Guidance));
    let guidance = engine.view().blocks.into_iter().find_map(|block| match block {
        ContentBlock::Radios(view) => view.feedback,
        _ => None,
    });
    assert_eq!(guidance.map(|f| f.text), Some("Please select an answer.".to_string()));
    assert!(!engine.can_continue());

    // WHEN a wrong option is submitted
    engine.dispatch(Event::Select { item_id: "criterion-feel".into() }, now);
    let response = engine.dispatch(Event::Submit { widget: WidgetKind::Radio }, now);
    assert_eq!(response.outcome, Some(WidgetOutcome::Mismatch));
    assert!(!engine.can_continue());

    // WHEN the correct option is submitted
    engine.dispatch(Event::Select { item_id: "criterion-p95".into() }, now);
    engine.dispatch(Event::Submit { widget: WidgetKind::Radio }, now);

    // THEN continue unlocks and the text is recorded
    assert!(engine.can_continue());
    assert_eq!(
        engine.answers().acceptance_criteria(),
        "Search returns results in under 200 ms at p95"
    );
}

#[test]
fn bdd_scenario_navigation_stays_in_bounds() {
    // GIVEN a fresh session on step 0
    let mut engine = demo_engine();
    let now = Instant::now();

    // WHEN back is triggered
    engine.dispatch(Event::Back, now);

    // THEN the index stays at 0 and back is disabled
    assert_eq!(engine.current_index(), 0);
    assert!(!engine.view().back_enabled);

    // WHEN the whole lesson is walked through
    walk_to(&mut engine, "complete", now);
    let last = engine.document().step_count() - 1;
    assert_eq!(engine.current_index(), last);

    // AND continue is triggered on the last step twice
    let first = engine.dispatch(Event::Continue, now);
    let second = engine.dispatch(Event::Continue, now);

    // THEN the index never passes the last step and completion is signalled
    assert_eq!(engine.current_index(), last);
    assert_eq!(first.effects, vec![Effect::QuizComplete]);
    assert_eq!(second.effects, vec![Effect::QuizComplete]);
    assert!(engine.is_complete());
}

#[test]
fn bdd_scenario_progress_tracks_step_index() {
    // GIVEN the eight-step demo lesson
    let mut engine = demo_engine();
    let now = Instant::now();
    let n = engine.document().step_count();

    // WHEN walking forward step by step
    // THEN progress equals k / (n - 1) * 100 at every step
    for k in 0..n {
        let view = engine.view();
        let expected = k as f64 / (n - 1) as f64 * 100.0;
        assert!((view.progress_percent - expected).abs() < 1e-9);
        assert_eq!(view.current_step, k + 1);
        assert_eq!(view.total_steps, n);
        solve_current(&mut engine, now);
        engine.dispatch(Event::Continue, now);
    }
}

#[test]
fn bdd_scenario_revisit_renders_fresh_widgets_with_open_gate() {
    // GIVEN the consumers step has been passed
    let mut engine = demo_engine();
    let now = Instant::now();
    walk_to(&mut engine, "consumers", now);
    solve_current(&mut engine, now);
    engine.dispatch(Event::Continue, now);

    // WHEN the user goes back to it
    engine.dispatch(Event::Back, now);
    assert_eq!(engine.current_step().id, "consumers");

    // THEN the widget is unanswered
    let choices = engine
        .view()
        .blocks
        .into_iter()
        .find_map(|block| match block {
            ContentBlock::Checkboxes(view) => Some(view),
            _ => None,
        })
        .expect("consumers step has checkboxes");
    assert!(choices.options.iter().all(|option| !option.marked));
    assert!(choices.feedback.is_none());

    // AND continue is still enabled from the answer record
    assert!(engine.can_continue());
    assert_eq!(engine.answers().consumers().len(), 3);
}

#[test]
fn bdd_scenario_completion_page_buttons_reach_the_host() {
    // GIVEN the completion step
    let mut engine = demo_engine();
    let now = Instant::now();
    walk_to(&mut engine, "complete", now);

    // WHEN the view is built
    let view = engine.view();

    // THEN the decorations render in order and the final label is shown
    assert_eq!(view.continue_label, "Next lesson");
    assert!(view.blocks.contains(&ContentBlock::Star));
    assert!(matches!(view.blocks.last(), Some(ContentBlock::SmallText(_))));

    // WHEN the download button is pressed
    let response = engine.dispatch(
        Event::PressButton { button_id: "download-template".into() },
        now,
    );

    // THEN the host receives the payload
    assert_eq!(
        response.effects,
        vec![Effect::Download("release-plan-template.pdf".into())]
    );
}
