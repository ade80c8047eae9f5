#[derive(Debug, Clone)]
pub(crate) struct StatusLine {
    message: String,
}

pub(crate) const READY_STATUS: &str = "Ready. Ctrl+S or Enter to send your message.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub(crate) fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub(crate) fn sending(&mut self) {
        self.message = "Sending...".to_string();
    }

    pub(crate) fn sent(&mut self) {
        self.message = "Message sent".to_string();
    }

    pub(crate) fn issues_remaining(&mut self, count: usize) {
        self.message = format!("{count} issue(s) remaining");
    }

    pub(crate) fn naming(&mut self) {
        self.message = "Enter your name and press Enter".to_string();
    }

    pub(crate) fn pending_exit(&mut self) {
        self.message = "Unsent input. Press Ctrl+Q again to quit anyway.".to_string();
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }
}
