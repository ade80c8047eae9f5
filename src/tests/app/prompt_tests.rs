use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::prompt::{NamePrompt, PromptOutcome};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn typed_text_is_confirmed_with_enter() {
    let mut prompt = NamePrompt::new("");
    for c in "Sam".chars() {
        assert_eq!(
            prompt.handle_key(&key(KeyCode::Char(c))),
            PromptOutcome::Pending
        );
    }
    let outcome = prompt.handle_key(&key(KeyCode::Enter));
    assert_eq!(outcome, PromptOutcome::Confirmed("Sam".to_string()));
}

#[test]
fn escape_cancels_without_a_value() {
    let mut prompt = NamePrompt::new("");
    prompt.handle_key(&key(KeyCode::Char('S')));
    assert_eq!(
        prompt.handle_key(&key(KeyCode::Esc)),
        PromptOutcome::Cancelled
    );
}

#[test]
fn backspace_edits_the_buffer() {
    let mut prompt = NamePrompt::new("Sam");
    prompt.handle_key(&key(KeyCode::Backspace));
    let outcome = prompt.handle_key(&key(KeyCode::Enter));
    assert_eq!(outcome, PromptOutcome::Confirmed("Sa".to_string()));
}

#[test]
fn control_characters_are_ignored() {
    let mut prompt = NamePrompt::new("");
    let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
    assert_eq!(prompt.handle_key(&ctrl_a), PromptOutcome::Pending);
    let outcome = prompt.handle_key(&key(KeyCode::Enter));
    assert_eq!(outcome, PromptOutcome::Confirmed(String::new()));
}
