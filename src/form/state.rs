use crate::domain::{FieldId, SubmissionRecord};

use super::{field::FieldState, validate::validate};

/// State for the whole contact form: the ordered field set plus focus.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<FieldState>,
    focus: usize,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: FieldId::ALL.iter().map(|id| FieldState::new(*id)).collect(),
            focus: 0,
        }
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> &FieldState {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .unwrap_or_else(|| unreachable!("form always holds every field"))
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FieldState {
        self.fields
            .iter_mut()
            .find(|field| field.id == id)
            .unwrap_or_else(|| unreachable!("form always holds every field"))
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focused_field(&self) -> &FieldState {
        &self.fields[self.focus]
    }

    pub fn focused_field_mut(&mut self) -> &mut FieldState {
        &mut self.fields[self.focus]
    }

    /// Move focus by delta, wrapping at both ends.
    pub fn step_focus(&mut self, delta: i32) {
        let len = self.fields.len() as i32;
        let next = ((self.focus as i32 + delta) % len + len) % len;
        self.focus = next as usize;
    }

    /// Blur path: revalidate the field losing focus so its error is surfaced.
    pub fn blur_focused(&mut self) -> bool {
        self.fields[self.focus].validate_now()
    }

    /// Run the validator over every field in form order, surfacing each
    /// field's error. No short-circuit: the user sees all problems at once.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for field in &mut self.fields {
            if !field.validate_now() {
                all_valid = false;
            }
        }
        all_valid
    }

    /// Build a SubmissionRecord from the current contents, but only when
    /// every field validates right now. Trimmed values are captured.
    pub fn try_snapshot(&self, submitted_at: impl Into<String>) -> Option<SubmissionRecord> {
        for field in &self.fields {
            if !validate(field.id, field.value()).is_valid {
                return None;
            }
        }
        Some(SubmissionRecord {
            name: self.field(FieldId::Name).value().trim().to_string(),
            email: self.field(FieldId::Email).value().trim().to_string(),
            phone: self.field(FieldId::Phone).value().trim().to_string(),
            message: self.field(FieldId::Message).value().trim().to_string(),
            submitted_at: submitted_at.into(),
        })
    }

    /// Clear every value and error, drop dirty flags, refocus the first field.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.focus = 0;
    }

    pub fn is_dirty(&self) -> bool {
        self.fields.iter().any(|field| field.is_dirty())
    }

    pub fn error_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|field| field.error().is_some())
            .count()
    }
}
