//! Bottom status bar: key hints and the last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " ←/→ step  Tab focus  Space act  s submit  ? help  q quit",
        theme::muted(),
    ));

    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use crate::app::tests::demo_app;
    use crate::ui::tests::render_text;

    #[test]
    fn blocked_continue_warning_is_shown() {
        let mut app = demo_app();
        app.go_forward();
        app.go_forward();
        let text = render_text(&app, 120, 30);
        let last = text.lines().last().unwrap_or_default();
        assert!(last.contains("Complete this step to continue"));
    }
}
