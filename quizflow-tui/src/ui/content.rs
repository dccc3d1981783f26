//! Step content: every block of the current screen, top to bottom.
//!
//! Interactive groups are numbered in the same order as
//! [`crate::app::focus_targets`], so the focused group and the row under the
//! cursor can be highlighted without any extra state.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use quizflow_core::view::{
    ButtonView, ChoiceView, ContentBlock, DropView, SectionBody, SectionView,
};
use quizflow_core::{Feedback, ScreenView, WidgetKind};

use crate::app::{block_target, AppState};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, view: &ScreenView) {
    let lines = build_lines(view, app.focus, app.cursor);
    let offset = scroll_offset(&lines, area.width, area.height);
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    f.render_widget(para, area);
}

/// First visible row so the cursor row stays on screen.
fn scroll_offset(lines: &[Line], width: u16, height: u16) -> u16 {
    let Some(cursor_line) = lines
        .iter()
        .position(|line| line.spans.iter().any(|s| s.style == theme::cursor()))
    else {
        return 0;
    };
    let width = usize::from(width.max(1));
    let cursor_row: usize = lines[..cursor_line]
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    let height = usize::from(height.max(1));
    let offset = (cursor_row + 1).saturating_sub(height);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// Lay out the blocks. `focus` indexes focusable groups, `cursor` a row in it.
fn build_lines(view: &ScreenView, focus: usize, cursor: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut target_index = 0;

    for block in &view.blocks {
        let cursor_row = if block_target(block).is_some() {
            let row = (target_index == focus).then_some(cursor);
            target_index += 1;
            row
        } else {
            None
        };

        match block {
            ContentBlock::Paragraph(text) => {
                lines.push(Line::from(Span::styled(text.clone(), theme::text())));
                lines.push(Line::from(""));
            }
            ContentBlock::Image { source } => {
                lines.push(Line::from(Span::styled(
                    format!("[image: {source}]"),
                    theme::neutral(),
                )));
                lines.push(Line::from(""));
            }
            ContentBlock::Buttons(buttons) => {
                push_buttons(&mut lines, buttons.iter(), cursor_row, "");
                lines.push(Line::from(""));
            }
            ContentBlock::Drag(drag) => push_drag(&mut lines, drag, cursor_row),
            ContentBlock::Checkboxes(choices) => {
                push_choices(&mut lines, choices, cursor_row, ("[x]", "[ ]"))
            }
            ContentBlock::Radios(choices) => {
                push_choices(&mut lines, choices, cursor_row, ("(•)", "( )"))
            }
            ContentBlock::Section(section) => push_section(&mut lines, section),
            ContentBlock::Star => {
                lines.push(Line::from(Span::styled("        ★", theme::warning())));
                lines.push(Line::from(""));
            }
            ContentBlock::DownloadButton(button) => {
                push_buttons(&mut lines, std::iter::once(button), cursor_row, "⤓ ");
                lines.push(Line::from(""));
            }
            ContentBlock::SmallText(text) => {
                lines.push(Line::from(Span::styled(text.clone(), theme::muted())));
            }
        }
    }
    lines
}

fn row_style(cursor_row: Option<usize>, index: usize, base: Style) -> Style {
    if cursor_row == Some(index) {
        theme::cursor()
    } else {
        base
    }
}

fn push_buttons<'a>(
    lines: &mut Vec<Line<'static>>,
    buttons: impl Iterator<Item = &'a ButtonView>,
    cursor_row: Option<usize>,
    icon: &str,
) {
    for (i, button) in buttons.enumerate() {
        lines.push(Line::from(Span::styled(
            format!("  [ {icon}{} ]", button.label),
            row_style(cursor_row, i, theme::accent()),
        )));
    }
}

fn push_drag(lines: &mut Vec<Line<'static>>, drag: &DropView, cursor_row: Option<usize>) {
    lines.push(Line::from(Span::styled(drag.header.clone(), theme::accent_bold())));

    for (i, item) in drag.available.iter().enumerate() {
        let base = if drag.locked || drag.settled {
            theme::muted()
        } else {
            theme::text()
        };
        lines.push(Line::from(Span::styled(
            format!("  ▸ {}", item.text),
            row_style(cursor_row, i, base),
        )));
    }

    let zone_style = theme::panel_border(cursor_row.is_some());
    lines.push(Line::from(Span::styled("  ┌ drop zone", zone_style)));
    if drag.placed.is_empty() {
        lines.push(Line::from(Span::styled("  │ (empty)", theme::muted())));
    }
    for (i, text) in drag.placed.iter().enumerate() {
        let label = match drag.kind {
            WidgetKind::SequenceDrop => format!("  │ {}. {text}", i + 1),
            _ => format!("  │ {text}"),
        };
        lines.push(Line::from(Span::styled(label, theme::text())));
    }
    lines.push(Line::from(Span::styled("  └", zone_style)));

    if drag.locked {
        lines.push(Line::from(Span::styled("  resetting…", theme::warning())));
    }
    push_feedback(lines, drag.feedback.as_ref());
    lines.push(Line::from(""));
}

fn push_choices(
    lines: &mut Vec<Line<'static>>,
    choices: &ChoiceView,
    cursor_row: Option<usize>,
    (on, off): (&str, &str),
) {
    lines.push(Line::from(Span::styled(
        choices.header.clone(),
        theme::accent_bold(),
    )));
    for (i, option) in choices.options.iter().enumerate() {
        let mark = if option.marked { on } else { off };
        lines.push(Line::from(Span::styled(
            format!("  {mark} {}", option.text),
            row_style(cursor_row, i, theme::text()),
        )));
    }
    push_feedback(lines, choices.feedback.as_ref());
    lines.push(Line::from(""));
}

fn push_feedback(lines: &mut Vec<Line<'static>>, feedback: Option<&Feedback>) {
    if let Some(feedback) = feedback {
        lines.push(Line::from(Span::styled(
            format!("  {}", feedback.text),
            theme::feedback(feedback.tone),
        )));
    }
}

fn push_section(lines: &mut Vec<Line<'static>>, section: &SectionView) {
    lines.push(Line::from(Span::styled(
        section.header.clone(),
        theme::accent_bold(),
    )));
    match &section.body {
        SectionBody::Text(text) => {
            lines.push(Line::from(Span::styled(format!("  {text}"), theme::text())));
        }
        SectionBody::Items(items) => {
            for item in items {
                lines.push(Line::from(Span::styled(format!("  • {item}"), theme::text())));
            }
        }
        SectionBody::Empty => {}
    }
    lines.push(Line::from(""));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::demo_app;
    use crate::ui::tests::render_text;
    use quizflow_core::Event;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn cursor_row_is_highlighted() {
        let mut app = demo_app();
        app.go_forward();
        app.move_cursor(true);
        let view = app.engine().unwrap().view();
        let lines = build_lines(&view, app.focus, app.cursor);

        let highlighted: Vec<String> = lines
            .iter()
            .filter(|line| line.spans.iter().any(|s| s.style == theme::cursor()))
            .map(|line| line.spans[0].content.to_string())
            .collect();
        assert_eq!(highlighted.len(), 1);
        assert!(highlighted[0].starts_with("  ▸ "));
    }

    #[test]
    fn scroll_keeps_cursor_row_visible() {
        let mut app = demo_app();
        walk_to(&mut app, "consumers");
        for _ in 0..3 {
            app.move_cursor(true);
        }
        let view = app.engine().unwrap().view();
        let lines = build_lines(&view, app.focus, app.cursor);
        let cursor_line = lines
            .iter()
            .position(|line| line.spans.iter().any(|s| s.style == theme::cursor()))
            .unwrap();

        // Tall enough: no scrolling.
        assert_eq!(scroll_offset(&lines, 200, 100), 0);
        // Two rows high: the cursor row is the last visible one.
        assert_eq!(
            scroll_offset(&lines, 200, 2),
            u16::try_from(cursor_line - 1).unwrap()
        );
    }

    #[test]
    fn short_terminal_still_shows_focused_row() {
        let mut app = demo_app();
        walk_to(&mut app, "consumers");
        for _ in 0..3 {
            app.move_cursor(true);
        }
        let text = render_text(&app, 80, 12);
        assert!(text.contains("[ ] Integration partners"), "{text}");
        assert!(!text.contains("Select everyone"), "{text}");
    }

    #[test]
    fn sequence_zone_numbers_placed_items() {
        let mut app = demo_app();
        app.dispatch(Event::Continue);
        app.dispatch(Event::Drop { item_id: "scope-mvp".into() });
        app.dispatch(Event::Continue);
        app.dispatch(Event::Drop { item_id: "stage-alpha".into() });

        let view = app.engine().unwrap().view();
        let text = plain(&build_lines(&view, 0, 0));
        assert!(text.iter().any(|l| l == "  │ 1. Internal alpha"));
        assert!(!text.iter().any(|l| l == "  ▸ Internal alpha"));
    }

    /// Solve each step with raw events until `step_id` is current.
    fn walk_to(app: &mut AppState, step_id: &str) {
        while app.engine().unwrap().current_step().id != step_id {
            let id = app.engine().unwrap().current_step().id.clone();
            let (drops, toggles, kind): (Vec<&str>, Vec<&str>, _) = match id.as_str() {
                "project-scope" => (vec!["scope-mvp"], vec![], None),
                "release-plan" => (vec!["stage-alpha", "stage-beta", "stage-ga"], vec![], None),
                "consumers" => (
                    vec![],
                    vec!["consumer-users", "consumer-support", "consumer-partners"],
                    Some(WidgetKind::Checkbox),
                ),
                "feedback-methods" => (
                    vec![],
                    vec!["method-survey", "method-metrics"],
                    Some(WidgetKind::Checkbox),
                ),
                "acceptance-criteria" => {
                    app.dispatch(Event::Select { item_id: "criterion-p95".into() });
                    (vec![], vec![], Some(WidgetKind::Radio))
                }
                _ => (vec![], vec![], None),
            };
            for item_id in drops {
                app.dispatch(Event::Drop { item_id: item_id.to_string() });
            }
            for item_id in toggles {
                app.dispatch(Event::Toggle { item_id: item_id.to_string() });
            }
            if let Some(widget) = kind {
                app.dispatch(Event::Submit { widget });
            }
            app.dispatch(Event::Continue);
        }
    }

    #[test]
    fn summary_sections_render_items() {
        let mut app = demo_app();
        walk_to(&mut app, "summary");

        let text = render_text(&app, 100, 40);
        assert!(text.contains("Step 7 of 8"));
        assert!(text.contains("•"));
    }

    #[test]
    fn radio_feedback_uses_tone_style() {
        let mut app = demo_app();
        walk_to(&mut app, "acceptance-criteria");

        app.dispatch(Event::Submit { widget: WidgetKind::Radio });
        let view = app.engine().unwrap().view();
        let lines = build_lines(&view, 0, 0);
        let feedback = lines
            .iter()
            .find(|line| line.spans[0].content.contains("Please select an answer."))
            .expect("missing-selection feedback");
        assert_eq!(
            feedback.spans[0].style,
            theme::feedback(quizflow_core::FeedbackTone::Error)
        );
    }

    #[test]
    fn completion_step_shows_download_button() {
        let mut app = demo_app();
        walk_to(&mut app, "complete");
        let text = render_text(&app, 100, 40);
        assert!(text.contains("⤓"));
        assert!(text.contains("★"));
    }
}
