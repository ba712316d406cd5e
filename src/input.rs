//! Arrow keys to velocity changes.

use macroquad::input::KeyCode;

use crate::state::{Direction, GameState};

/// Order in which keys held down in the same frame are applied.
pub const DIRECTION_KEYS: [KeyCode; 4] = [KeyCode::Left, KeyCode::Up, KeyCode::Right, KeyCode::Down];

pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Down => Some(Direction::Down),
        _ => None,
    }
}

/// Applies one key press straight to the velocity. Presses are not queued,
/// so the last one before a tick is the one that moves the snake.
pub fn change_direction(state: &mut GameState, key: KeyCode) {
    if let Some(direction) = direction_for_key(key) {
        state.steer(direction);
    }
}

/// Applies every direction key reported as pressed, in [`DIRECTION_KEYS`]
/// order.
pub fn change_direction_pressed<F>(state: &mut GameState, is_pressed: F)
where
    F: Fn(KeyCode) -> bool,
{
    for key in DIRECTION_KEYS {
        if is_pressed(key) {
            change_direction(state, key);
        }
    }
}
