//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Length up one step.
    Increase,
    /// Length down one step.
    Decrease,
    /// Length up one page of steps.
    PageIncrease,
    /// Length down one page of steps.
    PageDecrease,
    /// Jump to the shortest length.
    Min,
    /// Jump to the longest length.
    Max,
    SelectPrev,
    SelectNext,
    ToggleDetails,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Right | KeyCode::Char('l' | '+' | '=') => KeyAction::Increase,
        KeyCode::Left | KeyCode::Char('h' | '-') => KeyAction::Decrease,
        KeyCode::PageUp => KeyAction::PageIncrease,
        KeyCode::PageDown => KeyAction::PageDecrease,
        KeyCode::Home => KeyAction::Min,
        KeyCode::End => KeyAction::Max,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::SelectPrev,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::SelectNext,
        KeyCode::Char('d') => KeyAction::ToggleDetails,
        _ => KeyAction::None,
    }
}
