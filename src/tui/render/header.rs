use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

/// Profile glyph shown in place of the avatar
const PROFILE_GLYPH: &str = "\u{25C9}";

/// Render the breadcrumb header: workspace / campaign on the left,
/// profile on the right, separator line below.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect, wide: bool) {
    let bg = app.theme.background;
    let step = &app.config.step;

    let right_lines: Vec<Line> = if wide {
        vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", step.profile),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled(PROFILE_GLYPH, Style::default().fg(app.theme.text_bright).bg(bg)),
            ]),
            Line::from(Span::styled(
                "Change profile",
                Style::default().fg(app.theme.accent).bg(bg),
            )),
        ]
    } else {
        vec![Line::from(Span::styled(
            PROFILE_GLYPH,
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))]
    };
    let right_width = right_lines
        .iter()
        .map(|l| unicode::display_width(&l.to_string()))
        .max()
        .unwrap_or(0) as u16;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width + 1)])
        .split(rows[0]);

    let left_width = cols[0].width.saturating_sub(1) as usize;
    let left_lines = vec![
        Line::from(vec![
            Span::styled("\u{2190} ", Style::default().fg(app.theme.text_bright).bg(bg)),
            Span::styled(
                unicode::truncate_to_width(&step.workspace, left_width.saturating_sub(4)),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
            Span::styled(" \u{270E}", Style::default().fg(app.theme.dim).bg(bg)),
        ]),
        Line::from(Span::styled(
            unicode::truncate_to_width(&step.campaign, left_width),
            Style::default().fg(app.theme.text).bg(bg),
        )),
    ];

    frame.render_widget(
        Paragraph::new(left_lines).style(Style::default().bg(bg)),
        cols[0],
    );
    frame.render_widget(
        Paragraph::new(right_lines)
            .alignment(Alignment::Right)
            .style(Style::default().bg(bg)),
        cols[1],
    );

    let sep = "\u{2500}".repeat(rows[1].width as usize);
    frame.render_widget(
        Paragraph::new(sep).style(Style::default().fg(app.theme.border).bg(bg)),
        rows[1],
    );
}

/// Heading, hint and the category question above the selector
pub fn render_intro(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let lines = vec![
        Line::from(Span::styled(
            "Content type",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Choose a content type that best fits your needs.",
            Style::default().fg(app.theme.dim).bg(bg),
        )),
        Line::from(Span::styled(
            "What type of content are you creating?",
            Style::default().fg(app.theme.text).bg(bg),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{default_app, render_to_string};

    #[test]
    fn test_wide_header_shows_profile_name() {
        let app = default_app();
        let out = render_to_string(100, 3, |frame, area| {
            render_header(frame, &app, area, true);
        });
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("\u{2190} Media management \u{270E}"));
        assert!(lines[0].ends_with("Usman \u{25C9}"));
        assert!(lines[1].starts_with("Draft campaign"));
        assert!(lines[1].ends_with("Change profile"));
        assert!(lines[2].chars().all(|c| c == '\u{2500}'));
    }

    #[test]
    fn test_narrow_header_hides_profile_name() {
        let app = default_app();
        let out = render_to_string(40, 3, |frame, area| {
            render_header(frame, &app, area, false);
        });
        assert!(!out.contains("Usman"));
        assert!(!out.contains("Change profile"));
        assert!(out.lines().next().unwrap().ends_with("\u{25C9}"));
    }
}
