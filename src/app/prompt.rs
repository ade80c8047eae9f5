use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::presentation::PromptRender;

/// Modal text prompt for the "set my name" interaction.
#[derive(Debug, Clone)]
pub(crate) struct NamePrompt {
    buffer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PromptOutcome {
    Pending,
    Cancelled,
    Confirmed(String),
}

impl NamePrompt {
    pub(crate) fn new(current: &str) -> Self {
        Self {
            buffer: current.to_string(),
        }
    }

    pub(crate) fn handle_key(&mut self, key: &KeyEvent) -> PromptOutcome {
        match key.code {
            KeyCode::Esc => PromptOutcome::Cancelled,
            KeyCode::Enter => PromptOutcome::Confirmed(self.buffer.clone()),
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return PromptOutcome::Pending;
                }
                self.buffer.push(c);
                PromptOutcome::Pending
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                PromptOutcome::Pending
            }
            KeyCode::Delete => {
                self.buffer.clear();
                PromptOutcome::Pending
            }
            _ => PromptOutcome::Pending,
        }
    }

    pub(crate) fn as_render(&self) -> PromptRender<'_> {
        PromptRender {
            title: "Please enter your name",
            value: &self.buffer,
        }
    }
}
