use crate::ui::app::App;
use crate::vdom::Tag;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means given the focused node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    FocusNext,
    FocusPrev,
    /// Press the focused button.
    Activate,
    /// Append a character to the focused input.
    Insert(char),
    /// Delete the last character of the focused input.
    Backspace,
}

/// Map a key press to an action. `None` means the key is ignored and
/// nothing is dispatched.
pub fn key_action(key: KeyEvent, focused: Option<Tag>) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        return Some(KeyAction::Quit);
    }

    let on_input = focused == Some(Tag::Input);
    match key.code {
        KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Tab | KeyCode::Down => Some(KeyAction::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(KeyAction::FocusPrev),
        KeyCode::Enter if on_input => Some(KeyAction::FocusNext),
        KeyCode::Enter => Some(KeyAction::Activate),
        KeyCode::Backspace if on_input => Some(KeyAction::Backspace),
        KeyCode::Char(' ') if !on_input => Some(KeyAction::Activate),
        KeyCode::Char(ch) if on_input && !has_command_modifier(key) => {
            Some(KeyAction::Insert(ch))
        }
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    let Some(action) = key_action(key, app.focused_tag()) else {
        return;
    };

    match action {
        KeyAction::Quit => app.request_quit(),
        KeyAction::FocusNext => app.focus_next(),
        KeyAction::FocusPrev => app.focus_prev(),
        KeyAction::Activate => {
            app.activate();
        }
        KeyAction::Insert(ch) => {
            app.type_char(ch);
        }
        KeyAction::Backspace => {
            app.backspace();
        }
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}
