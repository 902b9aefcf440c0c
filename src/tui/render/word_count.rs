use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};

const KNOB: &str = "\u{25CF}";
const FILLED: &str = "\u{2501}";
const EMPTY: &str = "\u{2500}";

/// Column of the knob on a track `track_w` cells wide
pub fn knob_column(position: u32, positions: u32, track_w: usize) -> usize {
    if positions <= 1 || track_w == 0 {
        return 0;
    }
    (position as usize * (track_w - 1)) / (positions as usize - 1)
}

/// Render the label, the slider track and the value under the knob
pub fn render_word_count(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.focus == Focus::WordCount;
    let bounds = app.controller.word_count_bounds();

    let min_label = format!("{} ", bounds.min);
    let max_label = format!(" {}", bounds.max);
    let track_w = (area.width as usize).saturating_sub(min_label.len() + max_label.len());
    let knob = knob_column(
        app.controller.word_count_position(),
        bounds.positions(),
        track_w,
    );

    let accent = Style::default().fg(app.theme.accent).bg(bg);
    let knob_style = if focused {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        accent
    };
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let mut track = vec![Span::styled(min_label.clone(), dim)];
    if track_w > 0 {
        track.push(Span::styled(FILLED.repeat(knob), accent));
        track.push(Span::styled(KNOB, knob_style));
        track.push(Span::styled(
            EMPTY.repeat(track_w - knob - 1),
            Style::default().fg(app.theme.border).bg(bg),
        ));
    }
    track.push(Span::styled(max_label, dim));

    // Value label centered under the knob
    let value = app.controller.word_count().to_string();
    let knob_x = min_label.len() + knob;
    let pad = knob_x.saturating_sub(value.len() / 2);
    let value_line = Line::from(vec![
        Span::styled(" ".repeat(pad), Style::default().bg(bg)),
        Span::styled(
            value,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let lines = vec![
        Line::from(Span::styled(
            "Set the number of words for output text.",
            Style::default().fg(app.theme.text).bg(bg),
        )),
        Line::from(track),
        value_line,
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
