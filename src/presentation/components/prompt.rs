use ratatui::{
    Frame,
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::super::view::PromptRender;
use super::layout::popup_rect;

pub fn render_name_prompt(frame: &mut Frame<'_>, prompt: &PromptRender<'_>) {
    let area = frame.area();
    let width = area.width.saturating_sub(4).min(44).max(16);
    let popup = popup_rect(area, width, 3);
    frame.render_widget(Clear, popup);

    let widget = Paragraph::new(prompt.value.to_string()).block(
        Block::default()
            .title(prompt.title.to_string())
            .borders(Borders::ALL),
    );
    frame.render_widget(widget, popup);

    let cursor_x = popup
        .x
        .saturating_add(1)
        .saturating_add(prompt.value.width() as u16)
        .min(popup.x + popup.width.saturating_sub(2));
    frame.set_cursor_position((cursor_x, popup.y.saturating_add(1)));
}
