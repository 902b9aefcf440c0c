use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::SuggestionOption;
use crate::tui::app::App;
use crate::util::unicode;

use super::push_highlighted_spans;

/// Maximum number of visible entries in the dropdown
pub const MAX_VISIBLE: usize = 8;

/// First row shown so that `selected` stays inside the window
pub fn scroll_start(selected: Option<usize>) -> usize {
    match selected {
        Some(i) if i >= MAX_VISIBLE => i - MAX_VISIBLE + 1,
        _ => 0,
    }
}

/// Render the suggestion dropdown attached to the search field
pub fn render_autocomplete(frame: &mut Frame, app: &App, field_area: Rect) {
    let list = &app.suggestions;
    if !list.is_open() {
        return;
    }

    let bg = app.theme.background;
    let count = list.options.len().min(MAX_VISIBLE);
    let popup_h = (count as u16) + 2; // +2 for borders
    let popup_w = field_area.width;

    // Below the field; above it when there is no room
    let term_area = frame.area();
    let y = if field_area.y + field_area.height + popup_h <= term_area.height {
        field_area.y + field_area.height
    } else {
        field_area.y.saturating_sub(popup_h)
    };
    let popup_area = Rect::new(field_area.x, y, popup_w, popup_h).intersection(term_area);

    let start = scroll_start(list.selected);
    let label_width = (popup_w as usize).saturating_sub(5);

    let mut lines: Vec<Line> = Vec::new();
    for (i, option) in list.options.iter().skip(start).take(MAX_VISIBLE).enumerate() {
        let is_selected = list.selected == Some(start + i);

        let style = if is_selected {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        let highlight = style.fg(app.theme.match_fg).add_modifier(Modifier::BOLD);

        let prefix = if is_selected { " \u{25B8} " } else { "   " };
        let mut spans = vec![Span::styled(prefix, style)];

        let label = unicode::truncate_to_width(option.label(), label_width);
        match option {
            SuggestionOption::Existing { .. } => {
                push_highlighted_spans(&mut spans, &label, &app.edit_buffer, style, highlight);
            }
            SuggestionOption::Create { .. } => {
                spans.push(Span::styled(
                    label.clone(),
                    style.fg(app.theme.accent).add_modifier(Modifier::ITALIC),
                ));
            }
        }

        // Pad so the selection bar spans the popup
        let used = unicode::display_width(&label);
        if used < label_width {
            spans.push(Span::styled(" ".repeat(label_width - used), style));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines).block(block).style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup_area);
}
