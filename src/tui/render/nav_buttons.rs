use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus, NavButton};

/// Width of a button in the wide layout
const BUTTON_W: u16 = 12;

/// Render Back / Next: side by side on wide terminals, stacked otherwise
pub fn render_nav_buttons(frame: &mut Frame, app: &App, area: Rect, wide: bool) {
    let (back_area, next_area) = if wide {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BUTTON_W),
                Constraint::Min(0),
                Constraint::Length(BUTTON_W),
            ])
            .split(area);
        (cols[0], cols[2])
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);
        (rows[0], rows[1])
    };

    render_button(frame, app, back_area, NavButton::Back, app.theme.surface);
    render_button(frame, app, next_area, NavButton::Next, app.theme.accent);
}

fn render_button(frame: &mut Frame, app: &App, area: Rect, button: NavButton, fill: Color) {
    let label = match button {
        NavButton::Back => "Back",
        NavButton::Next => "Next",
    };
    let highlighted = app.focus == Focus::Buttons && app.button == button;
    let text = if highlighted {
        format!("\u{25B8} {} \u{25C2}", label)
    } else {
        label.to_string()
    };

    let mut style = Style::default().fg(app.theme.text_bright).bg(fill);
    if highlighted {
        style = style.add_modifier(Modifier::BOLD);
    }
    frame.render_widget(
        Paragraph::new(Line::from(text))
            .alignment(Alignment::Center)
            .style(style),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{default_app, render_to_string};

    #[test]
    fn test_wide_buttons_share_a_row() {
        let app = default_app();
        let out = render_to_string(60, 2, |frame, area| {
            render_nav_buttons(frame, &app, area, true);
        });
        let first = out.lines().next().unwrap();
        assert!(first.contains("Back"));
        assert!(first.contains("Next"));
        assert!(first.find("Back") < first.find("Next"));
    }

    #[test]
    fn test_narrow_buttons_stack() {
        let app = default_app();
        let out = render_to_string(30, 2, |frame, area| {
            render_nav_buttons(frame, &app, area, false);
        });
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("Back") && !lines[0].contains("Next"));
        assert!(lines[1].contains("Next"));
    }

    #[test]
    fn test_highlight_follows_focus() {
        let mut app = default_app();
        app.focus = Focus::Buttons;
        app.button = NavButton::Back;
        let out = render_to_string(60, 1, |frame, area| {
            render_nav_buttons(frame, &app, area, true);
        });
        assert!(out.contains("\u{25B8} Back \u{25C2}"));
        assert!(!out.contains("\u{25B8} Next"));
    }
}
