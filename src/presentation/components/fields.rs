use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::form::{FieldState, FormState};

const VALUE_INDENT: u16 = 2;

pub fn render_form(
    frame: &mut Frame<'_>,
    area: Rect,
    form: &FormState,
    sending: bool,
    enable_cursor: bool,
) {
    let block = Block::default().title("Contact Us").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let value_width = inner.width.saturating_sub(VALUE_INDENT + 1) as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut cursor: Option<(u16, u16)> = None;

    for (idx, field) in form.fields().iter().enumerate() {
        let focused = idx == form.focus_index();
        lines.push(label_line(field, focused));

        let shown = tail_display(field.value(), value_width);
        if focused && enable_cursor {
            let x = inner.x + VALUE_INDENT + shown.width() as u16;
            let y = inner.y + lines.len() as u16;
            if y < inner.y + inner.height {
                cursor = Some((x, y));
            }
        }
        lines.push(value_line(field, shown, focused));

        if let Some(error) = field.error() {
            lines.push(Line::from(Span::styled(
                format!("  {error}"),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::default());
    }

    lines.push(send_button_line(sending));

    frame.render_widget(Paragraph::new(lines), inner);
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

fn label_line(field: &FieldState, focused: bool) -> Line<'static> {
    let marker = if focused { "» " } else { "  " };
    let style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    Line::from(Span::styled(
        format!("{marker}{} *", field.id.label()),
        style,
    ))
}

fn value_line(field: &FieldState, shown: String, focused: bool) -> Line<'static> {
    if shown.is_empty() && !focused {
        return Line::from(Span::styled(
            format!("  {}", field.id.hint()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let style = if field.error().is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    Line::from(Span::styled(format!("  {shown}"), style))
}

fn send_button_line(sending: bool) -> Line<'static> {
    if sending {
        Line::from(Span::styled(
            "[ Sending... ]",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            "[ Send Message ]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
    }
}

/// Keep the tail of an overlong value visible; the cursor sits at the end.
fn tail_display(value: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if value.width() <= max_width {
        return value.to_string();
    }
    let mut tail: String = value.to_string();
    while tail.width() + 1 > max_width && !tail.is_empty() {
        tail.remove(0);
    }
    format!("…{tail}")
}
