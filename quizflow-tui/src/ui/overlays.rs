//! Overlay widgets: key help, button alerts and the completion summary.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::host::SessionSummary;
use crate::input::key_bindings_help;
use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keyboard [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();
    section(&mut lines, "Navigation and widgets");
    for (keys, desc) in key_bindings_help() {
        key(&mut lines, keys, desc);
    }
    lines.push(Line::from(""));

    section(&mut lines, "Widgets");
    key(&mut lines, "Drag pool", "Space drops the item under the cursor");
    key(&mut lines, "Sequence", "Drop in order; a wrong order resets");
    key(&mut lines, "Checkboxes", "Toggle with Space, then submit");
    key(&mut lines, "Radio", "Select with Space, then submit");

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Message from an alert button.
pub fn render_alert(f: &mut Frame, area: Rect, text: &str) {
    let popup = centered_rect(50, 30, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::warning())
        .title(" Notice ")
        .title_style(theme::warning());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(text, theme::text())),
        Line::from(""),
        Line::from(Span::styled("Press Enter to dismiss", theme::neutral())),
    ];
    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

pub fn render_complete(f: &mut Frame, area: Rect, summary: &SessionSummary) {
    let popup = centered_rect(70, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::positive())
        .title(" Quiz complete ")
        .title_style(theme::positive());

    let answers = &summary.answers;
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(summary.title.as_str(), theme::accent_bold())),
        Line::from(Span::styled(
            format!(
                "Finished {} in {}",
                summary.finished_at.format("%H:%M"),
                summary.duration_label()
            ),
            theme::muted(),
        )),
        Line::from(""),
    ];

    answer(&mut lines, "Project scope", answers.project_scope().to_string());
    answer(&mut lines, "Release plan", answers.release_plan().join(" → "));
    answer(&mut lines, "Consumers", join(answers.consumers()));
    answer(&mut lines, "Feedback methods", join(answers.feedback_methods()));
    answer(
        &mut lines,
        "Acceptance criteria",
        answers.acceptance_criteria().to_string(),
    );

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc to review  q to quit",
        theme::neutral(),
    )));

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

fn join<'a>(values: impl IntoIterator<Item = &'a String>) -> String {
    values
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn answer(lines: &mut Vec<Line<'_>>, label: &str, value: String) {
    let (value, style) = if value.is_empty() {
        ("(not answered)".to_string(), theme::muted())
    } else {
        (value, theme::text())
    };
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>20}  ", label), theme::accent()),
        Span::styled(value, style),
    ]));
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>20}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
