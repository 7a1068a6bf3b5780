use crate::ui::app::App;
use crate::ui::presentation::Control;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {
            if let Some(control) = control_for(key.code) {
                app.press(control);
            }
        }
    }
}

/// Key bound to each control.
pub fn control_for(code: KeyCode) -> Option<Control> {
    match code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') | KeyCode::Up => {
            Some(Control::Increment)
        }
        KeyCode::Char('-') | KeyCode::Char('j') | KeyCode::Down => Some(Control::Decrement),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Control::Reset),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
