use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use textwrap::wrap;

use crate::domain::SubmissionRecord;

use super::layout::popup_rect;

/// Modal shown once the simulated send completes.
pub fn render_result_overlay(frame: &mut Frame<'_>, record: &SubmissionRecord) {
    let area = frame.area();
    let width = area.width.saturating_sub(4).min(62).max(20);
    let text_width = width.saturating_sub(4) as usize;

    let mut lines = vec![
        detail_line("Name", &record.name),
        detail_line("Email", &record.email),
        detail_line("Phone", &record.phone),
        detail_line("Submitted", &record.submitted_at),
        Line::default(),
        Line::from(Span::styled(
            "Your Message",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    for piece in wrap(&record.message, text_width.max(1)) {
        lines.push(Line::from(piece.into_owned()));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "We'll get back to you within 24 hours!",
        Style::default().fg(Color::Green),
    )));
    lines.push(Line::from(Span::styled(
        "Press Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    let height = (lines.len() as u16).saturating_add(2).min(area.height);
    let popup = popup_rect(area, width, height);
    frame.render_widget(Clear, popup);
    let widget = Paragraph::new(lines).block(
        Block::default()
            .title("Submission Details")
            .borders(Borders::ALL),
    );
    frame.render_widget(widget, popup);
}

fn detail_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.to_string()),
    ])
}
