//! Back / Continue controls under the step content.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use quizflow_core::ScreenView;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, view: &ScreenView) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::muted());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let back = Line::from(Span::styled(" ← Back ", theme::control(view.back_enabled)));
    f.render_widget(Paragraph::new(back), halves[0]);

    let next = Line::from(Span::styled(
        format!(" {} → ", view.continue_label),
        theme::control(view.continue_enabled),
    ));
    f.render_widget(Paragraph::new(next).alignment(Alignment::Right), halves[1]);
}
