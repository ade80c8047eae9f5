use std::sync::LazyLock;

use regex::Regex;

use crate::domain::FieldId;

/// Verdict for a single field's current contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub field: FieldId,
    pub is_valid: bool,
    /// Empty when the field is valid.
    pub message: String,
}

impl ValidationResult {
    fn valid(field: FieldId) -> Self {
        Self {
            field,
            is_valid: true,
            message: String::new(),
        }
    }

    fn invalid(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            is_valid: false,
            message: message.into(),
        }
    }
}

static NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("invalid name pattern"));
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email pattern"));
static PHONE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("invalid phone pattern"));

/// Validate one field. Trims the raw value internally; the required check
/// runs first and suppresses the field-specific check on empty input.
pub fn validate(field: FieldId, raw: &str) -> ValidationResult {
    let value = raw.trim();
    if value.is_empty() {
        return ValidationResult::invalid(field, format!("{} is required", field.label()));
    }

    match field {
        FieldId::Name => {
            if value.chars().count() < 2 {
                ValidationResult::invalid(field, "Name must be at least 2 characters long")
            } else if !NAME_CHARS.is_match(value) {
                ValidationResult::invalid(field, "Name can only contain letters and spaces")
            } else {
                ValidationResult::valid(field)
            }
        }
        FieldId::Email => {
            if EMAIL_SHAPE.is_match(value) {
                ValidationResult::valid(field)
            } else {
                ValidationResult::invalid(field, "Please enter a valid email address")
            }
        }
        FieldId::Phone => {
            let digits = strip_phone_separators(value);
            if PHONE_SHAPE.is_match(&digits) {
                ValidationResult::valid(field)
            } else {
                ValidationResult::invalid(field, "Please enter a valid phone number")
            }
        }
        FieldId::Message => {
            let length = value.chars().count();
            if length < 10 {
                ValidationResult::invalid(field, "Message must be at least 10 characters long")
            } else if length > 1000 {
                ValidationResult::invalid(field, "Message must be less than 1000 characters")
            } else {
                ValidationResult::valid(field)
            }
        }
    }
}

/// Spaces, hyphens and parentheses are display separators, not phone data.
fn strip_phone_separators(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}
