//! Keyboard input dispatch: overlays → global keys → step interaction.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, Target};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter) {
                app.overlay = Overlay::None;
            } else if key.code == KeyCode::Char('q') {
                app.running = false;
            }
            return;
        }
        Overlay::Alert(_) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::Complete(_) => {
            match key.code {
                KeyCode::Char('q') => app.running = false,
                KeyCode::Esc | KeyCode::Enter => app.overlay = Overlay::None,
                _ => {}
            }
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        _ => {}
    }

    if app.engine().is_none() {
        return;
    }

    // 3. Step navigation and widget interaction.
    match key.code {
        KeyCode::Left | KeyCode::Char('p') | KeyCode::Backspace => app.go_back(),
        KeyCode::Right | KeyCode::Char('n') => app.go_forward(),
        KeyCode::Tab => app.move_focus(!key.modifiers.contains(KeyModifiers::SHIFT)),
        KeyCode::BackTab => app.move_focus(false),
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(true),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(false),
        KeyCode::Char(' ') => app.activate(),
        KeyCode::Char('s') => app.submit(),
        KeyCode::Enter => match app.focused() {
            Some(Target::Checkboxes(_)) | Some(Target::Radios(_)) => app.submit(),
            Some(_) => app.activate(),
            None => app.go_forward(),
        },
        _ => {}
    }
}

/// Key bindings for the help overlay.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("?", "Toggle this help"),
        ("←/p/Backspace", "Previous step"),
        ("→/n", "Next step (when unlocked)"),
        ("Tab / Shift+Tab", "Move focus between widgets"),
        ("↑/k, ↓/j", "Move cursor within the focused widget"),
        ("Space", "Drop item / toggle / select / press button"),
        ("s", "Submit checkboxes or radio choice"),
        ("Enter", "Submit choice set, otherwise act or continue"),
        ("Esc", "Close overlay"),
    ]
}
