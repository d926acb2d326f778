//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like Exit, ToggleTheme, etc.
//! Cursor movement is NOT mapped here - it goes directly to the PointerTracker.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Switch between dark and light theme and persist it (T key)
    ToggleTheme,
    /// Unmount or remount the particle layer (Space)
    TogglePause,
    /// Re-initialize the particle field (R key)
    ResetField,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for bound keys on press, `None` otherwise
    pub fn map_keyboard(key: KeyCode, state: ElementState, repeat: bool) -> Option<InputAction> {
        // Only handle fresh presses, not releases or auto-repeat
        if state != ElementState::Pressed || repeat {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::KeyT => Some(InputAction::ToggleTheme),
            KeyCode::Space => Some(InputAction::TogglePause),
            KeyCode::KeyR => Some(InputAction::ResetField),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed, false);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_unbound_keys_not_mapped() {
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::KeyS, KeyCode::KeyD] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed, false);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released, false);
        assert_eq!(action, None);
    }

    #[test]
    fn test_repeat_ignored() {
        // Holding Space must not flicker the layer
        let action = InputMapper::map_keyboard(KeyCode::Space, ElementState::Pressed, true);
        assert_eq!(action, None);
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Pressed, false),
            Some(InputAction::ToggleFullscreen)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyT, ElementState::Pressed, false),
            Some(InputAction::ToggleTheme)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Space, ElementState::Pressed, false),
            Some(InputAction::TogglePause)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyR, ElementState::Pressed, false),
            Some(InputAction::ResetField)
        );
    }
}
