//! TUI message types (Elm Messages).

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TuiMessage {
    /// Key press mapped to an action.
    KeyPress(KeyAction),
    /// Set the part length directly, in mm. Clamped and snapped.
    SetLength(f64),
    /// Terminal resized; triggers a redraw.
    Resize,
    /// Tick event for periodic redraws.
    Tick,
    /// Quit the application.
    Quit,
}
