use std::path::Path;

use anyhow::Result;

use crate::{
    domain::SubmissionRecord,
    form::{FormState, SubmitWorkflow},
    io::{self, OutputOptions},
    notify::NotificationCenter,
    visitor::{FileStore, KeyValueStore, MemoryStore, VisitorProfile},
};

use super::{options::UiOptions, runtime::App};

/// Entry point for the contact desk TUI.
///
/// ```no_run
/// # fn main() -> anyhow::Result<()> {
/// use contactui::ContactUI;
///
/// let submissions = ContactUI::new().run()?;
/// # Ok(())
/// # }
/// ```
pub struct ContactUI {
    store: Box<dyn KeyValueStore>,
    options: UiOptions,
    output: Option<OutputOptions>,
}

impl Default for ContactUI {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactUI {
    /// A desk with no persistence; visitor name changes last for the session.
    pub fn new() -> Self {
        Self {
            store: Box::new(MemoryStore::default()),
            options: UiOptions::default(),
            output: None,
        }
    }

    /// Persist the visitor name (and any future pairs) to a JSON state file.
    pub fn with_state_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.store = Box::new(FileStore::open(path)?);
        Ok(self)
    }

    /// Use a caller-provided key/value store.
    pub fn with_store(mut self, store: impl KeyValueStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options.site_title = title.into();
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Emit the session's submissions on exit.
    pub fn with_output(mut self, output: OutputOptions) -> Self {
        self.output = Some(output);
        self
    }

    /// Run the event loop until the visitor quits. Returns every submission
    /// captured during the session, oldest first.
    pub fn run(self) -> Result<Vec<SubmissionRecord>> {
        let ContactUI {
            mut store,
            options,
            output,
        } = self;

        let profile = VisitorProfile::load(&*store)?;
        let form = FormState::new();
        let workflow = SubmitWorkflow::new(options.send_delay);
        let notices = NotificationCenter::new(options.toast_duration, options.toast_exit);

        let mut app = App::new(form, workflow, notices, profile, options);
        let submissions = app.run(&mut *store)?;

        if let Some(output) = output {
            io::emit(&submissions, &output)?;
        }
        Ok(submissions)
    }
}
