use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_header(frame: &mut Frame<'_>, area: Rect, site_title: &str, greeting: &str) {
    let widget = Paragraph::new(greeting)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(site_title.to_string())
                .borders(Borders::ALL),
        );
    frame.render_widget(widget, area);
}
