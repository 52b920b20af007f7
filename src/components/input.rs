use bevy_ecs::prelude::*;

/// Which movement keys are held down this frame. Written by the frame driver.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
}

impl KeyState {
    pub fn only(key: Key) -> Self {
        let mut keys = KeyState::default();
        match key {
            Key::Left => keys.left = true,
            Key::Right => keys.right = true,
            Key::Up => keys.up = true,
            Key::Down => keys.down = true,
        }
        keys
    }
}

/// Previous frame's key snapshot, used to detect press edges.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    pub previous: KeyState,
}
