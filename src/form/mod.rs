mod field;
mod state;
mod submit;
mod validate;

pub use field::FieldState;
pub use state::FormState;
pub use submit::{SubmitAttempt, SubmitWorkflow};
pub use validate::{ValidationResult, validate};
