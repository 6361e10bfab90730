//! Keyboard mapping
//!
//! Translates raw key events into shell actions. Screen components
//! receive the already-mapped action, never the raw event.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Decrease value / move left (arrow left, h)
    Left,
    /// Increase value / move right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back / close overlay (Esc, Backspace)
    Back,
    /// Open or close the navigation drawer (m, Tab)
    ToggleDrawer,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Convert a keyboard event to a shell action
pub fn key_to_action(key: KeyEvent) -> Action {
    match key.code {
        // Quit keys
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,

        // Drawer toggle
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Tab => Action::ToggleDrawer,

        // Navigation keys
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::Left | KeyCode::Char('h') => Action::Left,
        KeyCode::Right | KeyCode::Char('l') => Action::Right,

        // Selection and confirmation
        KeyCode::Enter | KeyCode::Char(' ') => Action::Select,

        // Back / close overlay
        KeyCode::Esc | KeyCode::Backspace => Action::Back,

        _ => Action::None,
    }
}

/// Key bindings shown in the help line
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("m", "Menu"),
        ("↑/k ↓/j", "Navigate"),
        ("Enter", "Select"),
        ("Esc", "Back"),
        ("q", "Quit"),
    ]
}
