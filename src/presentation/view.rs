use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{domain::SubmissionRecord, form::FormState, notify::Notification};

use super::components::{
    render_footer, render_form, render_header, render_name_prompt, render_result_overlay,
    render_toasts,
};

pub struct UiContext<'a> {
    pub greeting: String,
    pub site_title: &'a str,
    pub form: &'a FormState,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
    pub sending: bool,
    pub dirty: bool,
    pub error_count: usize,
    pub overlay: Option<&'a SubmissionRecord>,
    pub prompt: Option<PromptRender<'a>>,
    pub toasts: &'a [Notification],
}

pub struct PromptRender<'a> {
    pub title: &'a str,
    pub value: &'a str,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(frame.area());

    // Overlays steal the cursor; only the bare form shows one.
    let cursor_enabled = ctx.overlay.is_none() && ctx.prompt.is_none();

    render_header(frame, chunks[0], ctx.site_title, &ctx.greeting);
    render_form(frame, chunks[1], ctx.form, ctx.sending, cursor_enabled);
    render_footer(frame, chunks[2], &ctx);

    if let Some(record) = ctx.overlay {
        render_result_overlay(frame, record);
    }
    if let Some(prompt) = &ctx.prompt {
        render_name_prompt(frame, prompt);
    }
    render_toasts(frame, ctx.toasts);
}
