use serde::{Deserialize, Serialize};

/// A captured contact inquiry. Only ever constructed once every form field
/// has passed validation for its current contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Human-readable local time the submission was accepted.
    pub submitted_at: String,
}
