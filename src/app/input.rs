use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy)]
pub(crate) enum KeyAction {
    Submit,
    Quit,
    SetName,
    FieldStep(i32),
    Dismiss,
    Edit(KeyEvent),
    None,
}

/// Classify a key event against the form context. Overlay and prompt input
/// is routed before this runs.
pub(crate) fn classify(key: &KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Submit,
            KeyCode::Char('n') | KeyCode::Char('N') => KeyAction::SetName,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }

    match key.code {
        // Enter submits, like a browser form; Tab/arrows move between fields.
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Tab | KeyCode::Down => KeyAction::FieldStep(1),
        KeyCode::BackTab | KeyCode::Up => KeyAction::FieldStep(-1),
        KeyCode::Esc => KeyAction::Dismiss,
        _ => KeyAction::Edit(*key),
    }
}
