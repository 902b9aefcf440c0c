use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Focus};
use crate::util::unicode;

pub(super) fn handle_title(app: &mut App, key: KeyEvent) {
    // Dropdown navigation takes precedence while it is open
    if app.suggestions.is_open() {
        match key.code {
            KeyCode::Up => {
                app.suggestions.move_up();
                return;
            }
            KeyCode::Down => {
                app.suggestions.move_down();
                return;
            }
            KeyCode::Home if app.suggestions.selected.is_some() => {
                app.suggestions.select_first();
                return;
            }
            KeyCode::End if app.suggestions.selected.is_some() => {
                app.suggestions.select_last();
                return;
            }
            KeyCode::Enter => {
                // No highlight: keep the typed text and just close the list
                if !app.accept_suggestion() {
                    app.suggestions.visible = false;
                }
                return;
            }
            // Hide, don't destroy: typing re-shows the list
            KeyCode::Esc => {
                app.suggestions.visible = false;
                app.suggestions.selected = None;
                return;
            }
            _ => {}
        }
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Down => {
            app.suggestions.visible = true;
            app.refresh_suggestions();
        }
        KeyCode::Enter => app.focus = Focus::WordCount,
        KeyCode::Esc => app.focus = Focus::Categories,
        KeyCode::Char('u') if ctrl => {
            app.edit_buffer.clear();
            app.edit_cursor = 0;
            app.title_input_changed();
        }
        KeyCode::Char('w') if ctrl => {
            let start = unicode::word_start_before(&app.edit_buffer, app.edit_cursor);
            app.edit_buffer.replace_range(start..app.edit_cursor, "");
            app.edit_cursor = start;
            app.title_input_changed();
        }
        KeyCode::Char('a') if ctrl => app.edit_cursor = 0,
        KeyCode::Char('e') if ctrl => app.edit_cursor = app.edit_buffer.len(),
        KeyCode::Char(c) if !ctrl => {
            let mut buf = [0u8; 4];
            insert_text(app, c.encode_utf8(&mut buf));
        }
        KeyCode::Backspace => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(prev..app.edit_cursor, "");
                app.edit_cursor = prev;
                app.title_input_changed();
            }
        }
        KeyCode::Delete => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(app.edit_cursor..next, "");
                app.title_input_changed();
            }
        }
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = next;
            }
        }
        KeyCode::Home => app.edit_cursor = 0,
        KeyCode::End => app.edit_cursor = app.edit_buffer.len(),
        _ => {}
    }
}

/// Insert text at the cursor and refilter
pub(super) fn insert_text(app: &mut App, text: &str) {
    app.edit_buffer.insert_str(app.edit_cursor, text);
    app.edit_cursor += text.len();
    app.title_input_changed();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SelectionPhase;
    use crate::tui::render::test_helpers::default_app;
    use pretty_assertions::assert_eq;

    fn title_app() -> App {
        let mut app = default_app();
        app.focus = Focus::Title;
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_title(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        handle_title(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn labels(app: &App) -> Vec<&str> {
        app.suggestions.options.iter().map(|o| o.label()).collect()
    }

    #[test]
    fn test_typing_filters_each_keystroke() {
        let mut app = title_app();
        type_str(&mut app, "s");
        assert!(labels(&app).contains(&"Escape rooms"));
        type_str(&mut app, "oc");
        assert_eq!(labels(&app), vec!["Social gaming", "Add \"soc\""]);
        assert_eq!(app.controller.resolved_title(), Some("soc"));
        assert_eq!(app.controller.phase(), SelectionPhase::FreeTyping);
    }

    #[test]
    fn test_exact_typed_title_has_no_create() {
        let mut app = title_app();
        type_str(&mut app, "escape rooms");
        assert_eq!(labels(&app), vec!["Escape rooms"]);
    }

    #[test]
    fn test_enter_without_highlight_keeps_free_text() {
        let mut app = title_app();
        type_str(&mut app, "Drone");
        press(&mut app, KeyCode::Enter);
        assert!(!app.suggestions.is_open());
        assert_eq!(app.controller.resolved_title(), Some("Drone"));
        assert_eq!(app.controller.state().chosen_title(), None);
        // A second Enter moves on to the slider
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, Focus::WordCount);
    }

    #[test]
    fn test_pick_then_retype_returns_to_free_typing() {
        let mut app = title_app();
        type_str(&mut app, "virtual");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.phase(), SelectionPhase::Committed);
        assert_eq!(app.edit_buffer, "Virtual reality");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.controller.phase(), SelectionPhase::FreeTyping);
        assert_eq!(app.controller.resolved_title(), Some("Virtual realit"));
    }

    #[test]
    fn test_home_end_jump_in_dropdown() {
        let mut app = title_app();
        type_str(&mut app, "e");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::End);
        assert!(app.suggestions.selected_option().is_some_and(|o| o.is_create()));
        press(&mut app, KeyCode::Home);
        assert_eq!(app.suggestions.selected, Some(0));
    }

    #[test]
    fn test_esc_hides_then_leaves() {
        let mut app = title_app();
        type_str(&mut app, "x");
        press(&mut app, KeyCode::Esc);
        assert!(!app.suggestions.is_open());
        assert_eq!(app.focus, Focus::Title);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Categories);
        // The typed text survives
        assert_eq!(app.controller.resolved_title(), Some("x"));
    }

    #[test]
    fn test_down_opens_closed_dropdown() {
        let mut app = title_app();
        assert!(!app.suggestions.is_open());
        press(&mut app, KeyCode::Down);
        assert!(app.suggestions.is_open());
        assert_eq!(app.suggestions.options.len(), 10);
        assert_eq!(app.suggestions.selected, None);
    }

    #[test]
    fn test_cursor_editing() {
        let mut app = title_app();
        type_str(&mut app, "ac");
        press(&mut app, KeyCode::Left);
        type_str(&mut app, "b");
        assert_eq!(app.edit_buffer, "abc");
        press(&mut app, KeyCode::Esc); // close dropdown
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.edit_buffer, "bc");
        assert_eq!(app.controller.resolved_title(), Some("bc"));
    }

    #[test]
    fn test_ctrl_u_clears_and_unresolves() {
        let mut app = title_app();
        type_str(&mut app, "Fest");
        ctrl(&mut app, 'u');
        assert_eq!(app.edit_buffer, "");
        assert_eq!(app.edit_cursor, 0);
        assert_eq!(app.controller.resolved_title(), None);
        assert_eq!(app.suggestions.options.len(), 10);
    }

    #[test]
    fn test_ctrl_w_deletes_word() {
        let mut app = title_app();
        type_str(&mut app, "Street perf");
        ctrl(&mut app, 'w');
        assert_eq!(app.edit_buffer, "Street ");
        assert_eq!(app.controller.resolved_title(), Some("Street "));
    }

    #[test]
    fn test_backspace_multibyte() {
        let mut app = title_app();
        type_str(&mut app, "café");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.edit_buffer, "caf");
        assert_eq!(app.edit_cursor, 3);
    }
}
