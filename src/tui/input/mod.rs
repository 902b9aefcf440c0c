mod controls;
mod title;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

use controls::*;
use title::*;

/// Handle a key event for the focused control
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match (key.modifiers, key.code) {
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => {
            app.press_back();
            return;
        }
        (_, KeyCode::Tab) => {
            leave_focus(app);
            app.focus = app.focus.next();
            return;
        }
        (_, KeyCode::BackTab) => {
            leave_focus(app);
            app.focus = app.focus.prev();
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Categories => handle_categories(app, key),
        Focus::Title => handle_title(app, key),
        Focus::WordCount => handle_word_count(app, key),
        Focus::Buttons => handle_buttons(app, key),
    }
}

/// Handle a bracketed paste. Only the title field accepts text.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.focus != Focus::Title || text.is_empty() {
        return;
    }
    let clean = text.replace(['\n', '\r'], " ");
    insert_text(app, &clean);
}

/// Hide the dropdown when focus moves away from the title field
fn leave_focus(app: &mut App) {
    if app.focus == Focus::Title {
        app.suggestions.visible = false;
        app.suggestions.selected = None;
    }
}
