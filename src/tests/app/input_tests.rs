use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::input::{KeyAction, classify};

fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

#[test]
fn ctrl_s_and_enter_submit() {
    let ctrl_s = classify(&key(KeyCode::Char('s'), KeyModifiers::CONTROL));
    let enter = classify(&key(KeyCode::Enter, KeyModifiers::NONE));
    assert!(matches!(ctrl_s, KeyAction::Submit));
    assert!(matches!(enter, KeyAction::Submit));
}

#[test]
fn ctrl_n_opens_the_name_prompt() {
    let action = classify(&key(KeyCode::Char('n'), KeyModifiers::CONTROL));
    assert!(matches!(action, KeyAction::SetName));
}

#[test]
fn ctrl_q_and_ctrl_c_quit() {
    let ctrl_q = classify(&key(KeyCode::Char('q'), KeyModifiers::CONTROL));
    let ctrl_c = classify(&key(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(matches!(ctrl_q, KeyAction::Quit));
    assert!(matches!(ctrl_c, KeyAction::Quit));
}

#[test]
fn tab_and_arrows_step_between_fields() {
    let next = classify(&key(KeyCode::Tab, KeyModifiers::NONE));
    let down = classify(&key(KeyCode::Down, KeyModifiers::NONE));
    let prev = classify(&key(KeyCode::BackTab, KeyModifiers::SHIFT));
    let up = classify(&key(KeyCode::Up, KeyModifiers::NONE));
    assert!(matches!(next, KeyAction::FieldStep(1)));
    assert!(matches!(down, KeyAction::FieldStep(1)));
    assert!(matches!(prev, KeyAction::FieldStep(-1)));
    assert!(matches!(up, KeyAction::FieldStep(-1)));
}

#[test]
fn escape_dismisses_and_plain_characters_edit() {
    let esc = classify(&key(KeyCode::Esc, KeyModifiers::NONE));
    let char_a = classify(&key(KeyCode::Char('a'), KeyModifiers::NONE));
    assert!(matches!(esc, KeyAction::Dismiss));
    assert!(matches!(char_a, KeyAction::Edit(_)));
}

#[test]
fn unknown_control_chords_do_nothing() {
    let action = classify(&key(KeyCode::Char('x'), KeyModifiers::CONTROL));
    assert!(matches!(action, KeyAction::None));
}
