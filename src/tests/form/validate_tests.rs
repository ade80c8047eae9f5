use crate::domain::FieldId;
use crate::form::validate;

#[test]
fn empty_and_whitespace_values_report_required() {
    for field in FieldId::ALL {
        for raw in ["", "   ", "\t\n"] {
            let result = validate(field, raw);
            assert!(!result.is_valid, "{field} should reject {raw:?}");
            assert_eq!(result.message, format!("{} is required", field.label()));
        }
    }
}

#[test]
fn required_messages_use_display_labels() {
    assert_eq!(
        validate(FieldId::Phone, "").message,
        "Phone Number is required"
    );
    assert_eq!(validate(FieldId::Email, " ").message, "Email is required");
}

#[test]
fn name_accepts_letters_and_spaces() {
    assert!(validate(FieldId::Name, "Al").is_valid);
    assert!(validate(FieldId::Name, "Anna Lee").is_valid);
}

#[test]
fn name_rejects_single_character() {
    let result = validate(FieldId::Name, "A");
    assert!(!result.is_valid);
    assert_eq!(result.message, "Name must be at least 2 characters long");
}

#[test]
fn name_rejects_non_letter_characters() {
    let result = validate(FieldId::Name, "Anna23");
    assert!(!result.is_valid);
    assert_eq!(result.message, "Name can only contain letters and spaces");
}

#[test]
fn name_trims_before_length_check() {
    // "  A  " trims to one character.
    let result = validate(FieldId::Name, "  A  ");
    assert_eq!(result.message, "Name must be at least 2 characters long");
}

#[test]
fn email_requires_at_and_dot_in_domain() {
    assert!(validate(FieldId::Email, "a@b.com").is_valid);
    assert!(!validate(FieldId::Email, "a@b").is_valid);
    assert_eq!(
        validate(FieldId::Email, "a@b").message,
        "Please enter a valid email address"
    );
}

#[test]
fn email_rejects_whitespace() {
    assert!(!validate(FieldId::Email, "a b@c.com").is_valid);
}

#[test]
fn phone_accepts_international_and_separated_forms() {
    assert!(validate(FieldId::Phone, "+14155551234").is_valid);
    assert!(validate(FieldId::Phone, "(415) 555-1234").is_valid);
    assert!(validate(FieldId::Phone, "415-555-1234").is_valid);
    // Short but well-formed digit runs pass; only the shape is checked.
    assert!(validate(FieldId::Phone, "123").is_valid);
}

#[test]
fn phone_rejects_leading_zero() {
    let result = validate(FieldId::Phone, "0123456789");
    assert!(!result.is_valid);
    assert_eq!(result.message, "Please enter a valid phone number");
}

#[test]
fn phone_rejects_letters_and_overlong_runs() {
    assert!(!validate(FieldId::Phone, "call me").is_valid);
    // 17 digits exceeds the 16 digit cap.
    assert!(!validate(FieldId::Phone, "12345678901234567").is_valid);
    assert!(validate(FieldId::Phone, "1234567890123456").is_valid);
}

#[test]
fn message_length_bounds() {
    assert!(!validate(FieldId::Message, &"a".repeat(9)).is_valid);
    assert_eq!(
        validate(FieldId::Message, &"a".repeat(9)).message,
        "Message must be at least 10 characters long"
    );
    assert!(validate(FieldId::Message, &"a".repeat(10)).is_valid);
    assert!(validate(FieldId::Message, &"a".repeat(1000)).is_valid);
    assert_eq!(
        validate(FieldId::Message, &"a".repeat(1001)).message,
        "Message must be less than 1000 characters"
    );
}

#[test]
fn valid_results_carry_empty_messages() {
    let result = validate(FieldId::Name, "Jane Doe");
    assert!(result.is_valid);
    assert!(result.message.is_empty());
    assert_eq!(result.field, FieldId::Name);
}
