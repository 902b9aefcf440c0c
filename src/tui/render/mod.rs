pub mod autocomplete;
pub mod category_bar;
pub mod header;
pub mod nav_buttons;
pub mod status_row;
pub mod title_field;
pub mod word_count;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;

use crate::ops::suggest;

use super::app::App;

/// Main render function: lays out the form top to bottom
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let wide = app.is_wide(area.width);
    let category_rows = category_bar::row_count(app.controller.registry().len()) as u16;
    let button_rows = if wide { 1 } else { 2 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // header + separator
            Constraint::Length(3),             // heading, hint, question
            Constraint::Length(category_rows), // category pills
            Constraint::Length(1),             // spacer
            Constraint::Length(4),             // prompt + search field
            Constraint::Length(1),             // spacer
            Constraint::Length(3),             // word count label + slider
            Constraint::Length(1),             // spacer
            Constraint::Length(button_rows),   // back / next
            Constraint::Min(0),                // filler
            Constraint::Length(1),             // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0], wide);
    header::render_intro(frame, app, chunks[1]);
    category_bar::render_category_bar(frame, app, chunks[2]);
    let field_area = title_field::render_title_field(frame, app, chunks[4]);
    word_count::render_word_count(frame, app, chunks[6]);
    nav_buttons::render_nav_buttons(frame, app, chunks[8], wide);
    status_row::render_status_row(frame, app, chunks[10]);

    // Dropdown last so it floats over the controls below the field
    if app.suggestions.is_open() {
        autocomplete::render_autocomplete(frame, app, field_area);
    }
}

/// Push spans for `text`, styling case-insensitive occurrences of `query`
/// with `highlight_style`.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    query: &str,
    base_style: Style,
    highlight_style: Style,
) {
    let ranges = suggest::match_ranges(text, query);
    if ranges.is_empty() {
        spans.push(Span::styled(text.to_string(), base_style));
        return;
    }

    let mut last_end = 0;
    for range in ranges {
        if range.start > last_end {
            spans.push(Span::styled(
                text[last_end..range.start].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[range.start..range.end].to_string(),
            highlight_style,
        ));
        last_end = range.end;
    }
    if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}
