use std::time::Duration;

/// Runtime tuning for the contact desk UI. The defaults reproduce the
/// shipped behavior: a 2 s simulated send, 4 s toasts with a 300 ms exit.
#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    /// Revalidate a field when focus leaves it.
    pub validate_on_blur: bool,
    pub confirm_exit: bool,
    pub show_help: bool,
    pub send_delay: Duration,
    pub toast_duration: Duration,
    pub toast_exit: Duration,
    pub site_title: String,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            validate_on_blur: true,
            confirm_exit: true,
            show_help: true,
            send_delay: Duration::from_millis(2000),
            toast_duration: Duration::from_millis(4000),
            toast_exit: Duration::from_millis(300),
            site_title: "TechVision Solutions".to_string(),
        }
    }
}

impl UiOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_validate_on_blur(mut self, enabled: bool) -> Self {
        self.validate_on_blur = enabled;
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_send_delay(mut self, delay: Duration) -> Self {
        self.send_delay = delay;
        self
    }

    pub fn with_toast_timing(mut self, duration: Duration, exit: Duration) -> Self {
        self.toast_duration = duration;
        self.toast_exit = exit;
        self
    }

    pub fn with_site_title(mut self, title: impl Into<String>) -> Self {
        self.site_title = title.into();
        self
    }
}
