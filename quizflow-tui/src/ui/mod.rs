//! Top-level UI layout: header, progress gauge, step content, navigation bar
//! and a 1-line status bar.

pub mod content;
pub mod nav_bar;
pub mod overlays;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use quizflow_core::ScreenView;

use crate::app::{AppState, Overlay, Phase};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    match &app.phase {
        Phase::Loading => draw_loading(f, main_area, app),
        Phase::Failed { message, detail } => draw_failure(f, main_area, message, detail),
        Phase::Ready(engine) => draw_step(f, main_area, app, &engine.view()),
    }

    status_bar::render(f, status_area, app);

    match &app.overlay {
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::Alert(text) => overlays::render_alert(f, main_area, text),
        Overlay::Complete(summary) => overlays::render_complete(f, main_area, summary),
        Overlay::None => {}
    }
}

fn draw_step(f: &mut Frame, area: Rect, app: &AppState, view: &ScreenView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Line::from(vec![
        Span::styled(format!(" {} ", view.title), theme::accent_bold()),
        Span::styled(
            format!(" Step {} of {}", view.current_step, view.total_steps),
            theme::muted(),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    let percent = view.progress_percent.clamp(0.0, 100.0);
    let gauge = Gauge::default()
        .gauge_style(theme::positive())
        .ratio(percent / 100.0)
        .label(format!("{percent:.0}%"));
    f.render_widget(gauge, chunks[1]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true));
    let inner = block.inner(chunks[2]);
    f.render_widget(block, chunks[2]);
    content::render(f, inner, app, view);

    nav_bar::render(f, chunks[3], view);
}

fn draw_loading(f: &mut Frame, area: Rect, app: &AppState) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Loading quiz…", theme::accent_bold())),
        Line::from(Span::styled(app.source_label.as_str(), theme::muted())),
    ];
    let para = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border(false)),
    );
    f.render_widget(para, area);
}

fn draw_failure(f: &mut Frame, area: Rect, message: &str, detail: &str) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message, theme::negative())),
        Line::from(""),
        Line::from(Span::styled(detail, theme::muted())),
        Line::from(""),
        Line::from(Span::styled("Press q to quit.", theme::neutral())),
    ];
    let para = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::negative()),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
