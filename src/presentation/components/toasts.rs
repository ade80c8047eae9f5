use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::notify::{Notification, NotificationLevel};

const TOAST_WIDTH: u16 = 38;
const TOAST_HEIGHT: u16 = 3;

/// Stack toasts down the top-right corner, newest below older ones.
pub fn render_toasts(frame: &mut Frame<'_>, toasts: &[Notification]) {
    let area = frame.area();
    if toasts.is_empty() || area.width < 8 {
        return;
    }
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));

    for (index, toast) in toasts.iter().enumerate() {
        let y = 1 + index as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.height {
            break;
        }
        let rect = Rect {
            x: area.width.saturating_sub(width + 1),
            y,
            width,
            height: TOAST_HEIGHT,
        };

        let color = match toast.level {
            NotificationLevel::Success => Color::Green,
            NotificationLevel::Error => Color::Red,
            NotificationLevel::Info => Color::Blue,
        };
        let mut style = Style::default().fg(color);
        if toast.is_leaving() {
            style = style.add_modifier(Modifier::DIM);
        }

        frame.render_widget(Clear, rect);
        let widget = Paragraph::new(toast.message.clone())
            .wrap(Wrap { trim: true })
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(widget, rect);
    }
}
