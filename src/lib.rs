#![deny(rust_2018_idioms)]

mod app;
mod domain;
mod form;
mod io;
mod notify;
mod presentation;
mod visitor;

#[cfg(test)]
mod tests;

pub use app::{ContactUI, UiOptions};
pub use domain::{FieldId, SubmissionRecord};
pub use form::{FieldState, FormState, SubmitAttempt, SubmitWorkflow, ValidationResult, validate};
pub use io::{DocumentFormat, OutputDestination, OutputOptions};
pub use notify::{Notification, NotificationCenter, NotificationLevel};
pub use visitor::{
    DEFAULT_VISITOR_NAME, FileStore, KeyValueStore, MemoryStore, USER_NAME_KEY, VisitorProfile,
};

pub mod prelude {
    pub use super::{
        ContactUI, FieldId, FormState, KeyValueStore, MemoryStore, NotificationLevel,
        SubmissionRecord, UiOptions, validate,
    };
}
