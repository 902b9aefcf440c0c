use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus, NavButton};

/// Slider positions moved by PageUp/PageDown
const PAGE_STEPS: i32 = 4;

pub(super) fn handle_categories(app: &mut App, key: KeyEvent) {
    let count = app.controller.registry().len();
    let current = app.category_index();
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            let idx = current.map_or(0, |i| i.saturating_sub(1));
            app.select_category_at(idx);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let idx = current.map_or(0, |i| (i + 1).min(count.saturating_sub(1)));
            app.select_category_at(idx);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let idx = (c as usize) - ('1' as usize);
            app.select_category_at(idx);
        }
        KeyCode::Enter | KeyCode::Down => app.focus = Focus::Title,
        KeyCode::Esc | KeyCode::Char('q') => app.press_back(),
        _ => {}
    }
}

pub(super) fn handle_word_count(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Down | KeyCode::Char('h') => {
            app.controller.step_word_count(-1);
        }
        KeyCode::Right | KeyCode::Up | KeyCode::Char('l') => {
            app.controller.step_word_count(1);
        }
        KeyCode::PageUp => {
            app.controller.step_word_count(PAGE_STEPS);
        }
        KeyCode::PageDown => {
            app.controller.step_word_count(-PAGE_STEPS);
        }
        KeyCode::Home => {
            let min = app.controller.word_count_bounds().min;
            app.controller.set_word_count(min);
        }
        KeyCode::End => {
            let max = app.controller.word_count_bounds().max;
            app.controller.set_word_count(max);
        }
        KeyCode::Enter => app.focus = Focus::Buttons,
        KeyCode::Esc | KeyCode::Char('q') => app.press_back(),
        _ => {}
    }
}

pub(super) fn handle_buttons(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') => app.button = NavButton::Back,
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') => app.button = NavButton::Next,
        KeyCode::Enter | KeyCode::Char(' ') => match app.button {
            NavButton::Back => app.press_back(),
            NavButton::Next => app.press_next(),
        },
        KeyCode::Esc | KeyCode::Char('q') => app.press_back(),
        _ => {}
    }
}
