//! Input events and how they move the car
//!
//! Only key transitions matter: auto-repeat events are ignored, so holding a
//! key does nothing beyond its first press.

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Right,
    Up,
    Other,
}

/// A platform-neutral input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Quit,
    KeyDown { key: Key, repeat: bool },
    KeyUp { key: Key, repeat: bool },
    Other,
}

impl InputEvent {
    /// Fresh (non-repeat) key press
    pub const fn press(key: Key) -> Self {
        InputEvent::KeyDown { key, repeat: false }
    }

    /// Fresh (non-repeat) key release
    pub const fn release(key: Key) -> Self {
        InputEvent::KeyUp { key, repeat: false }
    }
}

/// Apply one input event to the game state
pub fn apply_input(state: &mut GameState, event: &InputEvent) {
    let screen = state.screen;
    match *event {
        InputEvent::Quit => state.request_quit(),
        InputEvent::KeyDown { repeat: true, .. } | InputEvent::KeyUp { repeat: true, .. } => {}
        InputEvent::KeyDown { key: Key::Right, .. } => state.player.drive(),
        InputEvent::KeyDown { key: Key::Up, .. } => state.player.jump(screen),
        InputEvent::KeyUp { key: Key::Up, .. } => state.player.land(screen),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn state() -> GameState {
        let mut state = GameState::new(IVec2::new(800, 600));
        state.player.reset_frame(state.screen);
        state
    }

    #[test]
    fn test_right_press_moves_five() {
        let mut state = state();
        apply_input(&mut state, &InputEvent::press(Key::Right));
        assert_eq!(state.player.rect.x, 5);
        assert_eq!(state.player.rect.y, 300);
    }

    #[test]
    fn test_repeat_is_ignored() {
        let mut state = state();
        apply_input(&mut state, &InputEvent::KeyDown { key: Key::Right, repeat: true });
        apply_input(&mut state, &InputEvent::KeyDown { key: Key::Up, repeat: true });
        assert_eq!(state.player.rect.x, 0);
        assert!(!state.player.airborne);

        apply_input(&mut state, &InputEvent::press(Key::Up));
        apply_input(&mut state, &InputEvent::KeyUp { key: Key::Up, repeat: true });
        assert!(state.player.airborne);
    }

    #[test]
    fn test_jump_then_release() {
        let mut state = state();
        apply_input(&mut state, &InputEvent::press(Key::Up));
        assert_eq!(state.player.rect.y, 150);
        assert_eq!(state.player.rect.x, 3);

        apply_input(&mut state, &InputEvent::release(Key::Up));
        assert_eq!(state.player.rect.y, 300);
        assert_eq!(state.player.rect.x, 3);
    }

    #[test]
    fn test_releasing_right_does_nothing() {
        let mut state = state();
        apply_input(&mut state, &InputEvent::press(Key::Right));
        apply_input(&mut state, &InputEvent::release(Key::Right));
        assert_eq!(state.player.rect.x, 5);
    }

    #[test]
    fn test_other_events_ignored() {
        let mut state = state();
        let before = state.player.clone();
        apply_input(&mut state, &InputEvent::Other);
        apply_input(&mut state, &InputEvent::press(Key::Other));
        apply_input(&mut state, &InputEvent::release(Key::Other));
        assert_eq!(state.player, before);
        assert!(state.is_running());
    }

    #[test]
    fn test_quit_stops_running() {
        let mut state = state();
        apply_input(&mut state, &InputEvent::Quit);
        assert!(!state.is_running());
    }
}
