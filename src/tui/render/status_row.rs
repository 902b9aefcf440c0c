use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::SelectionPhase;
use crate::tui::app::{App, Focus};
use crate::util::unicode;

/// Key hints for the focused control
pub fn key_hint(app: &App) -> String {
    match app.focus {
        Focus::Categories => "\u{2190}/\u{2192} category  Tab next  Esc back".into(),
        Focus::Title if app.suggestions.is_open() => {
            "\u{2191}/\u{2193} pick  Enter accept  Esc close".into()
        }
        Focus::Title => "type to search  \u{2193} suggestions  Tab next".into(),
        Focus::WordCount => format!(
            "\u{2190}/\u{2192} \u{00B1}{}  Home/End min/max  Tab next",
            app.controller.word_count_bounds().step
        ),
        Focus::Buttons => "\u{2190}/\u{2192} choose  Enter confirm  Esc back".into(),
    }
}

/// Short description of the resolved title
pub fn title_summary(app: &App) -> String {
    match (app.controller.phase(), app.controller.resolved_title()) {
        (SelectionPhase::Committed, Some(title)) => format!("title: {}", title),
        (SelectionPhase::FreeTyping, Some(title)) => format!("title: {} (new)", title),
        _ => "no title yet".into(),
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let hint = if app.config.ui.show_key_hints {
        key_hint(app)
    } else {
        String::new()
    };
    let hint_width = unicode::display_width(&hint);
    let summary_budget = width.saturating_sub(hint_width + 2);
    let summary = unicode::truncate_to_width(&title_summary(app), summary_budget);
    let summary_width = unicode::display_width(&summary);

    let mut spans = vec![Span::styled(
        summary,
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    if summary_width + hint_width < width {
        let padding = width - summary_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{default_app, render_to_string};

    #[test]
    fn test_summary_tracks_phase() {
        let mut app = default_app();
        assert_eq!(title_summary(&app), "no title yet");
        app.controller.enter_free_text("Kite surfing");
        assert_eq!(title_summary(&app), "title: Kite surfing (new)");
        app.controller.choose_existing_title("Escape rooms");
        assert_eq!(title_summary(&app), "title: Escape rooms");
        app.controller.enter_free_text("");
        assert_eq!(title_summary(&app), "no title yet");
    }

    #[test]
    fn test_word_count_hint_uses_step() {
        let mut app = default_app();
        app.focus = Focus::WordCount;
        assert!(key_hint(&app).contains("\u{00B1}50"));
    }

    #[test]
    fn test_status_row_layout() {
        let app = default_app();
        let out = render_to_string(80, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(out.starts_with("no title yet"));
        assert!(out.ends_with("Esc back"));
    }

    #[test]
    fn test_hints_can_be_hidden() {
        let mut app = default_app();
        app.config.ui.show_key_hints = false;
        let out = render_to_string(80, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(out, "no title yet");
    }
}
