//! Action types shared by the frontend panels
//!
//! Panels return `AppAction`s instead of touching the session directly; the
//! app applies them in one place after all panels have been drawn.

use crate::session::Command;
use crate::types::Mode;

/// Actions that any panel can emit
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Forward a command to the visualizer session
    Dispatch(Command),
    /// Show or hide the pseudocode side panel
    TogglePseudocode,
    /// Switch between dark and light visuals
    ToggleDarkMode,
}

/// Toolbar input that persists between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarState {
    /// Insert `custom_value` instead of a generated one
    pub use_custom: bool,
    pub custom_value: i32,
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self {
            use_custom: false,
            custom_value: 42,
        }
    }
}

impl ToolbarState {
    /// The value an insert should carry; `None` lets the session pick one
    pub fn insert_value(&self) -> Option<i32> {
        self.use_custom.then_some(self.custom_value)
    }
}

/// The "add" operation of a mode
pub fn insert_command(mode: Mode, value: Option<i32>) -> Command {
    match mode {
        Mode::LinkedList => Command::ListInsertTail(value),
        Mode::Bst => Command::TreeInsert(value),
        Mode::Array => Command::ArrayAppend(value),
    }
}

/// The "remove" operation of a mode; trees have none
pub fn remove_command(mode: Mode) -> Option<Command> {
    match mode {
        Mode::LinkedList => Some(Command::ListRemoveTail),
        Mode::Bst => None,
        Mode::Array => Some(Command::ArrayRemoveLast),
    }
}

pub fn step_command(mode: Mode) -> Command {
    match mode {
        Mode::LinkedList => Command::ListStep,
        Mode::Bst => Command::TreeStep,
        Mode::Array => Command::ArrayStep,
    }
}

pub fn next_mode_command(mode: Mode) -> Command {
    Command::SelectMode(mode.next())
}

pub fn reset_command(mode: Mode) -> Command {
    match mode {
        Mode::LinkedList => Command::ListClear,
        Mode::Bst => Command::TreeClear,
        Mode::Array => Command::ArrayReset(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_commands_match_mode() {
        for mode in Mode::ALL {
            assert_eq!(insert_command(mode, None).mode(), Some(mode));
            assert_eq!(step_command(mode).mode(), Some(mode));
            assert_eq!(reset_command(mode).mode(), Some(mode));
            if let Some(cmd) = remove_command(mode) {
                assert_eq!(cmd.mode(), Some(mode));
            }
        }
        assert_eq!(remove_command(Mode::Bst), None);
    }

    #[test]
    fn test_next_mode_command_cycles_structures() {
        let mut mode = Mode::LinkedList;
        let mut seen = Vec::new();
        for _ in 0..3 {
            match next_mode_command(mode) {
                Command::SelectMode(next) => mode = next,
                other => panic!("unexpected {:?}", other),
            }
            seen.push(mode);
        }
        assert_eq!(seen, vec![Mode::Bst, Mode::Array, Mode::LinkedList]);
    }

    #[test]
    fn test_custom_value_only_when_enabled() {
        let mut state = ToolbarState::default();
        assert_eq!(state.insert_value(), None);
        state.use_custom = true;
        state.custom_value = 7;
        assert_eq!(state.insert_value(), Some(7));
    }
}
