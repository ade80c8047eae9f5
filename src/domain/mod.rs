mod field;
mod record;

pub use field::FieldId;
pub use record::SubmissionRecord;
