//! Input state for player controls.
//!
//! The host feeds raw key and mouse transitions plus the cursor position in
//! world space. Gameplay reads held and just-pressed states. Call
//! [`InputState::end_frame`] once per frame after gameplay has run.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key codes the game binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// E key
    E,
    /// Z key
    Z,
}

/// Mouse button codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
}

/// State of a button (pressed, just pressed, released).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// Whether the button is currently held down
    pub pressed: bool,
    /// Whether the button was just pressed this frame
    pub just_pressed: bool,
    /// Whether the button was just released this frame
    pub just_released: bool,
}

impl ButtonState {
    /// Update the button state based on whether it's currently pressed.
    pub fn update(&mut self, is_pressed: bool) {
        self.just_pressed = is_pressed && !self.pressed;
        self.just_released = !is_pressed && self.pressed;
        self.pressed = is_pressed;
    }

    /// Clear the frame-specific state (just_pressed, just_released).
    pub fn clear_frame(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Keyboard, mouse and cursor state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<KeyCode, ButtonState>,
    mouse: HashMap<MouseButton, ButtonState>,
    cursor_world: Vec2,
}

impl InputState {
    /// Create an empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a key state.
    pub fn update_key(&mut self, key: KeyCode, is_pressed: bool) {
        self.keys.entry(key).or_default().update(is_pressed);
    }

    /// Update a mouse button state.
    pub fn update_mouse_button(&mut self, button: MouseButton, is_pressed: bool) {
        self.mouse.entry(button).or_default().update(is_pressed);
    }

    /// Set the cursor position, already converted to world space.
    pub fn set_cursor_world(&mut self, position: Vec2) {
        self.cursor_world = position;
    }

    /// Cursor position in world space.
    #[must_use]
    pub fn cursor_world(&self) -> Vec2 {
        self.cursor_world
    }

    /// Clear frame-specific state. Call at the end of each frame.
    pub fn end_frame(&mut self) {
        for state in self.keys.values_mut() {
            state.clear_frame();
        }
        for state in self.mouse.values_mut() {
            state.clear_frame();
        }
    }

    /// Check if a key is currently pressed.
    #[must_use]
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys.get(&key).is_some_and(|state| state.pressed)
    }

    /// Check if a key was just pressed this frame.
    #[must_use]
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys.get(&key).is_some_and(|state| state.just_pressed)
    }

    /// Check if a mouse button is currently pressed.
    #[must_use]
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse.get(&button).is_some_and(|state| state.pressed)
    }

    /// Check if a mouse button was just pressed this frame.
    #[must_use]
    pub fn is_mouse_just_pressed(&self, button: MouseButton) -> bool {
        self.mouse.get(&button).is_some_and(|state| state.just_pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_state_transitions() {
        let mut state = ButtonState::default();

        state.update(true);
        assert!(state.pressed);
        assert!(state.just_pressed);

        state.clear_frame();
        state.update(true);
        assert!(state.pressed);
        assert!(!state.just_pressed);

        state.update(false);
        assert!(!state.pressed);
        assert!(state.just_released);
    }

    #[test]
    fn test_just_pressed_lasts_one_frame() {
        let mut input = InputState::new();
        input.update_mouse_button(MouseButton::Left, true);
        assert!(input.is_mouse_just_pressed(MouseButton::Left));

        input.end_frame();
        assert!(!input.is_mouse_just_pressed(MouseButton::Left));
        assert!(input.is_mouse_pressed(MouseButton::Left));
    }

    #[test]
    fn test_unknown_keys_are_released() {
        let input = InputState::new();
        assert!(!input.is_key_pressed(KeyCode::Z));
        assert!(!input.is_mouse_pressed(MouseButton::Right));
    }
}
