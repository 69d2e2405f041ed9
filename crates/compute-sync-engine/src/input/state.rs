use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Current keyboard state for a single window.
///
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies an input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = m;
            }

            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Releases never arrive for keys held while focus moves away.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
                ..
            } => {
                self.modifiers = modifiers;

                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(key) {
                            frame.keys_pressed.insert(key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(&key) {
                            frame.keys_released.insert(key);
                        }
                    }
                }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            repeat,
        }
    }

    #[test]
    fn press_and_release_recorded_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Space, KeyState::Pressed, false));
        state.apply_event(&mut frame, key(Key::Space, KeyState::Pressed, true));
        assert!(frame.pressed(Key::Space));
        assert!(state.key_down(Key::Space));

        frame.clear();
        state.apply_event(&mut frame, key(Key::Space, KeyState::Pressed, true));
        assert!(!frame.pressed(Key::Space), "repeat is not a new press");

        state.apply_event(&mut frame, key(Key::Space, KeyState::Released, false));
        assert!(frame.keys_released.contains(&Key::Space));
        assert!(!state.key_down(Key::Space));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed, false));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.focused);
        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn key_event_updates_modifiers() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let shift = Modifiers { shift: true, ..Modifiers::default() };

        state.apply_event(
            &mut frame,
            InputEvent::Key { key: Key::R, state: KeyState::Pressed, modifiers: shift, repeat: false },
        );
        assert!(state.modifiers.shift);
        assert!(!state.modifiers.ctrl);
    }
}
