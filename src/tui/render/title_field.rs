use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Focus};
use crate::util::unicode;

const PLACEHOLDER: &str = "Type to search or add a title";

/// Render the category prompt and the search field. Returns the field's
/// rect so the dropdown can anchor to it.
pub fn render_title_field(frame: &mut Frame, app: &App, area: Rect) -> Rect {
    let bg = app.theme.background;
    let focused = app.focus == Focus::Title;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3)])
        .split(area);

    let prompt = format!(
        "Which type of \"{}\" content do you want to create?",
        app.controller.active_category()
    );
    frame.render_widget(
        Paragraph::new(Span::styled(prompt, Style::default().fg(app.theme.text).bg(bg))),
        rows[0],
    );

    let border_color = if focused { app.theme.accent } else { app.theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Search ", Style::default().fg(app.theme.dim).bg(bg)))
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(rows[1]);

    let width = inner.width.saturating_sub(1) as usize;
    let (start, cursor_col) = scroll_window(&app.edit_buffer, app.edit_cursor, width);

    let line = if app.edit_buffer.is_empty() && !focused {
        Line::from(Span::styled(
            unicode::truncate_to_width(PLACEHOLDER, width),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from(Span::styled(
            app.edit_buffer[start..].to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    };
    frame.render_widget(Paragraph::new(line).block(block), rows[1]);

    if focused {
        frame.set_cursor_position(Position::new(inner.x + cursor_col as u16, inner.y));
    }

    rows[1]
}

/// First visible byte offset and the cursor's column inside a field of
/// `width` cells, scrolled so the cursor stays visible.
pub fn scroll_window(text: &str, cursor: usize, width: usize) -> (usize, usize) {
    let mut start = 0;
    while unicode::display_col(text, cursor) - unicode::display_col(text, start) > width {
        match unicode::next_grapheme_boundary(text, start) {
            Some(next) if next <= cursor => start = next,
            _ => break,
        }
    }
    let col = unicode::display_col(text, cursor) - unicode::display_col(text, start);
    (start, col)
}
