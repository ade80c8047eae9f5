use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::FieldId;
use crate::form::FieldState;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_str(field: &mut FieldState, text: &str) {
    for c in text.chars() {
        field.handle_key(&key(KeyCode::Char(c)));
    }
}

#[test]
fn typing_builds_the_buffer_and_marks_dirty() {
    let mut field = FieldState::new(FieldId::Name);
    assert!(!field.is_dirty());
    type_str(&mut field, "Jane");
    assert_eq!(field.value(), "Jane");
    assert!(field.is_dirty());
}

#[test]
fn control_characters_are_rejected() {
    let mut field = FieldState::new(FieldId::Name);
    let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
    assert!(!field.handle_key(&ctrl_a));
    assert_eq!(field.value(), "");
}

#[test]
fn backspace_pops_and_delete_clears() {
    let mut field = FieldState::new(FieldId::Email);
    type_str(&mut field, "abc");
    field.handle_key(&key(KeyCode::Backspace));
    assert_eq!(field.value(), "ab");
    field.handle_key(&key(KeyCode::Delete));
    assert_eq!(field.value(), "");
}

#[test]
fn editing_clears_a_surfaced_error() {
    let mut field = FieldState::new(FieldId::Email);
    type_str(&mut field, "nope");
    assert!(!field.validate_now());
    assert!(field.error().is_some());
    field.handle_key(&key(KeyCode::Char('x')));
    assert!(field.error().is_none(), "edits must drop the stale error");
}

#[test]
fn blur_revalidation_surfaces_the_error_again() {
    let mut field = FieldState::new(FieldId::Email);
    type_str(&mut field, "nope");
    field.validate_now();
    field.handle_key(&key(KeyCode::Char('!')));
    assert!(field.error().is_none());
    assert!(!field.validate_now());
    assert_eq!(field.error(), Some("Please enter a valid email address"));
}

#[test]
fn phone_keystrokes_are_regrouped_with_hyphens() {
    let mut field = FieldState::new(FieldId::Phone);
    type_str(&mut field, "415");
    assert_eq!(field.value(), "415");
    field.handle_key(&key(KeyCode::Char('5')));
    assert_eq!(field.value(), "415-5");
    type_str(&mut field, "551234");
    assert_eq!(field.value(), "4155-5512-34");
}

#[test]
fn phone_drops_non_digit_input() {
    let mut field = FieldState::new(FieldId::Phone);
    type_str(&mut field, "+1a");
    assert_eq!(field.value(), "1");
}

#[test]
fn six_digit_phone_stays_ungrouped() {
    // The long grouping needs a third run; six digits split 3+3 leave none.
    let mut field = FieldState::new(FieldId::Phone);
    type_str(&mut field, "415555");
    assert_eq!(field.value(), "415555");
}

#[test]
fn reset_returns_the_field_to_pristine() {
    let mut field = FieldState::new(FieldId::Message);
    type_str(&mut field, "short");
    field.validate_now();
    field.reset();
    assert_eq!(field.value(), "");
    assert!(field.error().is_none());
    assert!(!field.is_dirty());
}

#[test]
fn seeded_values_are_not_dirty() {
    let mut field = FieldState::new(FieldId::Name);
    field.seed_value("Jane");
    assert_eq!(field.value(), "Jane");
    assert!(!field.is_dirty());
}
