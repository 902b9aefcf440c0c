use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode;

/// Pills per row in the category selector
pub const PILLS_PER_ROW: usize = 3;

/// Rows needed to show `count` categories
pub fn row_count(count: usize) -> usize {
    count.div_ceil(PILLS_PER_ROW).max(1)
}

/// Render the category toggle pills in a grid, three per row
pub fn render_category_bar(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Categories;
    let active = app.controller.active_category();
    let pill_w = area.width / PILLS_PER_ROW as u16;
    if pill_w < 3 {
        return;
    }

    for (i, id) in app.controller.registry().ids().into_iter().enumerate() {
        let row = (i / PILLS_PER_ROW) as u16;
        let col = (i % PILLS_PER_ROW) as u16;
        if row >= area.height {
            break;
        }
        // One cell of gap between pills
        let cell = Rect::new(
            area.x + col * pill_w,
            area.y + row,
            pill_w.saturating_sub(1),
            1,
        );

        let is_active = id == active;
        let fill = if is_active { app.theme.accent } else { app.theme.surface };
        let style = if is_active {
            let mut s = Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.accent)
                .add_modifier(Modifier::BOLD);
            if focused {
                s = s.add_modifier(Modifier::UNDERLINED);
            }
            s
        } else {
            Style::default().fg(app.theme.text).bg(app.theme.surface)
        };

        let inner = (cell.width as usize).saturating_sub(4);
        let label = unicode::truncate_to_width(id, inner);
        let marker = if is_active && focused { "\u{25B8}" } else { " " };
        let line = Line::from(vec![
            Span::styled(format!("{} ", marker), style),
            Span::styled(label, style),
            Span::styled("  ", style),
        ]);
        frame.render_widget(
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .style(Style::default().bg(fill)),
            cell,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{default_app, render_to_string};

    #[test]
    fn test_row_count() {
        assert_eq!(row_count(0), 1);
        assert_eq!(row_count(3), 1);
        assert_eq!(row_count(4), 2);
        assert_eq!(row_count(6), 2);
    }

    #[test]
    fn test_pills_in_grid() {
        let app = default_app();
        let out = render_to_string(60, 2, |frame, area| {
            render_category_bar(frame, &app, area);
        });
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Fun"));
        assert!(lines[0].contains("Education"));
        assert!(lines[0].contains("Sports"));
        assert!(lines[1].contains("News"));
        assert!(lines[1].contains("Investment"));
        assert!(lines[1].contains("Facts"));
    }

    #[test]
    fn test_focus_marker_on_active_pill() {
        let mut app = default_app();
        app.select_category_at(2);
        let out = render_to_string(60, 2, |frame, area| {
            render_category_bar(frame, &app, area);
        });
        assert!(out.contains("\u{25B8} Sports"));

        app.focus = Focus::Title;
        let out = render_to_string(60, 2, |frame, area| {
            render_category_bar(frame, &app, area);
        });
        assert!(!out.contains('\u{25B8}'));
    }
}
