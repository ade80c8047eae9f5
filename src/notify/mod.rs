use std::time::{Duration, Instant};

use tracing::debug;

pub const DISMISS_AFTER: Duration = Duration::from_millis(4000);
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationLevel {
    Success,
    Error,
    #[default]
    Info,
}

/// One transient toast. Lives `dismiss_after`, then spends `exit_transition`
/// in a leaving phase before removal.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    stage: Stage,
}

#[derive(Debug, Clone, Copy)]
enum Stage {
    Visible { since: Instant },
    Leaving { since: Instant },
}

impl Notification {
    pub fn is_leaving(&self) -> bool {
        matches!(self.stage, Stage::Leaving { .. })
    }
}

/// Owns the stack of live toasts. Each toast manages its own timer; the
/// runtime advances them all from its tick.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    toasts: Vec<Notification>,
    dismiss_after: Duration,
    exit_transition: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DISMISS_AFTER, EXIT_TRANSITION)
    }
}

impl NotificationCenter {
    pub fn new(dismiss_after: Duration, exit_transition: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            dismiss_after,
            exit_transition,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, level: NotificationLevel, now: Instant) {
        let message = message.into();
        debug!(%message, ?level, "notification shown");
        self.toasts.push(Notification {
            message,
            level,
            stage: Stage::Visible { since: now },
        });
    }

    /// Advance every toast's lifecycle: visible past its dismissal duration
    /// moves to leaving, leaving past the exit transition is removed.
    pub fn tick(&mut self, now: Instant) {
        for toast in &mut self.toasts {
            if let Stage::Visible { since } = toast.stage
                && now.duration_since(since) >= self.dismiss_after
            {
                // The leaving phase starts when the dismissal duration
                // elapsed, not when the tick noticed.
                toast.stage = Stage::Leaving {
                    since: since + self.dismiss_after,
                };
            }
        }
        let exit_transition = self.exit_transition;
        self.toasts.retain(|toast| match toast.stage {
            Stage::Visible { .. } => true,
            Stage::Leaving { since } => now.duration_since(since) < exit_transition,
        });
    }

    pub fn toasts(&self) -> &[Notification] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Earliest instant at which some toast changes stage, for poll timeouts.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.toasts
            .iter()
            .map(|toast| match toast.stage {
                Stage::Visible { since } => since + self.dismiss_after,
                Stage::Leaving { since } => since + self.exit_transition,
            })
            .min()
    }
}
