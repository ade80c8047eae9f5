use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::info;

use crate::{
    domain::SubmissionRecord,
    form::{FormState, SubmitAttempt, SubmitWorkflow},
    notify::{NotificationCenter, NotificationLevel},
    presentation::{self, UiContext},
    visitor::{KeyValueStore, VisitorProfile},
};

use super::{
    input::{KeyAction, classify},
    options::UiOptions,
    prompt::{NamePrompt, PromptOutcome},
    status::StatusLine,
    terminal::TerminalGuard,
};

const HELP_TEXT: &str = "Tab/Shift+Tab move • Ctrl+S send • Ctrl+N set name • Ctrl+Q quit";

pub(crate) struct App {
    form: FormState,
    workflow: SubmitWorkflow,
    notices: NotificationCenter,
    profile: VisitorProfile,
    options: UiOptions,
    status: StatusLine,
    overlay: Option<SubmissionRecord>,
    prompt: Option<NamePrompt>,
    submissions: Vec<SubmissionRecord>,
    exit_armed: bool,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(
        form: FormState,
        workflow: SubmitWorkflow,
        notices: NotificationCenter,
        profile: VisitorProfile,
        options: UiOptions,
    ) -> Self {
        Self {
            form,
            workflow,
            notices,
            profile,
            options,
            status: StatusLine::new(),
            overlay: None,
            prompt: None,
            submissions: Vec::new(),
            exit_armed: false,
            should_quit: false,
        }
    }

    pub(crate) fn run(&mut self, store: &mut dyn KeyValueStore) -> Result<Vec<SubmissionRecord>> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| presentation::draw(frame, self.ui_context()))?;
            if event::poll(self.poll_timeout())? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key, store)?,
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
            self.advance_timers(Instant::now());
        }
        info!(submissions = self.submissions.len(), "session finished");
        Ok(std::mem::take(&mut self.submissions))
    }

    /// Sleep until the next timer would fire, capped by the tick rate.
    fn poll_timeout(&self) -> Duration {
        let now = Instant::now();
        let mut timeout = self.options.tick_rate;
        let deadlines = self
            .workflow
            .deadline()
            .into_iter()
            .chain(self.notices.next_deadline());
        for deadline in deadlines {
            timeout = timeout.min(deadline.saturating_duration_since(now));
        }
        timeout
    }

    fn advance_timers(&mut self, now: Instant) {
        if let Some(record) = self.workflow.poll(now) {
            self.complete_send(record, now);
        }
        self.notices.tick(now);
    }

    /// Sending finished: show the result overlay, clear the form, toast.
    fn complete_send(&mut self, record: SubmissionRecord, now: Instant) {
        self.submissions.push(record.clone());
        self.overlay = Some(record);
        self.form.reset();
        self.notices
            .push("Message sent successfully!", NotificationLevel::Success, now);
        self.status.sent();
    }

    fn handle_key(&mut self, key: KeyEvent, store: &mut dyn KeyValueStore) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        let now = Instant::now();

        if self.prompt.is_some() {
            return self.handle_prompt_key(&key, store, now);
        }

        if self.overlay.is_some() {
            if matches!(
                classify(&key),
                KeyAction::Dismiss | KeyAction::Submit | KeyAction::Quit
            ) {
                self.overlay = None;
                self.status.ready();
            }
            return Ok(());
        }

        match classify(&key) {
            KeyAction::Submit => self.on_submit(now),
            KeyAction::SetName => {
                self.prompt = Some(NamePrompt::new(""));
                self.exit_armed = false;
                self.status.naming();
            }
            KeyAction::Quit => self.on_exit(),
            KeyAction::FieldStep(delta) => {
                if self.options.validate_on_blur {
                    self.form.blur_focused();
                }
                self.form.step_focus(delta);
                self.exit_armed = false;
            }
            KeyAction::Dismiss => {
                self.exit_armed = false;
                self.status.ready();
            }
            KeyAction::Edit(key) => {
                let label = self.form.focused_field().id.label().to_string();
                if self.form.focused_field_mut().handle_key(&key) {
                    self.exit_armed = false;
                    self.status.editing(&label);
                }
            }
            KeyAction::None => {}
        }
        Ok(())
    }

    fn handle_prompt_key(
        &mut self,
        key: &KeyEvent,
        store: &mut dyn KeyValueStore,
        now: Instant,
    ) -> Result<()> {
        let Some(prompt) = self.prompt.as_mut() else {
            return Ok(());
        };
        match prompt.handle_key(key) {
            PromptOutcome::Pending => {}
            PromptOutcome::Cancelled => {
                self.prompt = None;
                self.status.ready();
            }
            PromptOutcome::Confirmed(raw) => {
                self.prompt = None;
                if self.profile.set_name(store, &raw)? {
                    self.notices.push(
                        format!("Welcome {}! Thanks for visiting us.", self.profile.name()),
                        NotificationLevel::Success,
                        now,
                    );
                }
                self.status.ready();
            }
        }
        Ok(())
    }

    fn on_submit(&mut self, now: Instant) {
        match self.workflow.submit(&mut self.form, now) {
            SubmitAttempt::Accepted => self.status.sending(),
            SubmitAttempt::Rejected { issues } => {
                self.notices.push(
                    "Please correct the errors in the form.",
                    NotificationLevel::Error,
                    now,
                );
                self.status.issues_remaining(issues);
            }
            // The send button is disabled while sending; ignore the press.
            SubmitAttempt::AlreadySending => {}
        }
        self.exit_armed = false;
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.form.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }

    fn ui_context(&self) -> UiContext<'_> {
        UiContext {
            greeting: self.profile.greeting(&self.options.site_title),
            site_title: &self.options.site_title,
            form: &self.form,
            status_message: self.status.message(),
            help: self.options.show_help.then_some(HELP_TEXT),
            sending: self.workflow.is_sending(),
            dirty: self.form.is_dirty(),
            error_count: self.form.error_count(),
            overlay: self.overlay.as_ref(),
            prompt: self.prompt.as_ref().map(|prompt| prompt.as_render()),
            toasts: self.notices.toasts(),
        }
    }
}
