use std::sync::LazyLock;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use regex::Regex;

use crate::domain::FieldId;

use super::validate::validate;

/// Edit buffer plus displayed error for one form field.
#[derive(Debug, Clone)]
pub struct FieldState {
    pub id: FieldId,
    value: String,
    error: Option<String>,
    dirty: bool,
}

static PHONE_GROUPS_LONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{3,4})(\d{3,4})(\d+)").expect("invalid phone grouping"));
static PHONE_GROUPS_SHORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{3,4})(\d+)").expect("invalid phone grouping"));

impl FieldState {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            error: None,
            dirty: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Seed a value without marking the field dirty. The displayed error is
    /// dropped, same as for a keystroke.
    pub fn seed_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.error = None;
    }

    /// Apply a keystroke to the buffer. Returns true when the buffer changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                self.value.push(c);
                self.after_edit();
                true
            }
            KeyCode::Backspace => {
                self.value.pop();
                self.after_edit();
                true
            }
            KeyCode::Delete => {
                self.value.clear();
                self.after_edit();
                true
            }
            _ => false,
        }
    }

    /// Revalidate the current contents and surface the error. This is the
    /// blur/submit path; plain edits only clear the error.
    pub fn validate_now(&mut self) -> bool {
        let result = validate(self.id, &self.value);
        self.error = if result.is_valid {
            None
        } else {
            Some(result.message)
        };
        result.is_valid
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.error = None;
        self.dirty = false;
    }

    fn after_edit(&mut self) {
        self.dirty = true;
        if self.id == FieldId::Phone {
            self.value = format_phone(&self.value);
        }
        // An edited field never keeps a stale error; it comes back on blur.
        self.error = None;
    }
}

/// Regroup typed phone digits with hyphens. Non-digits are dropped first, so
/// the grouping only ever sees a digit run.
fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.chars().count() >= 6 {
        PHONE_GROUPS_LONG.replace(&digits, "$1-$2-$3").into_owned()
    } else if digits.chars().count() >= 3 {
        PHONE_GROUPS_SHORT.replace(&digits, "$1-$2").into_owned()
    } else {
        digits
    }
}
