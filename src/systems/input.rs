use bevy_ecs::prelude::*;

use crate::components::action::{Action, PendingAction};
use crate::components::input::{KeyState, PlayerInput};
use crate::components::world::Player;

/// System: turns fresh key presses into the player's pending action.
pub fn sample_input_system(
    keys: Res<KeyState>,
    mut players: Query<(&mut PlayerInput, &mut PendingAction), With<Player>>,
) {
    for (mut input, mut action) in players.iter_mut() {
        if let Some(pressed) = pressed_action(input.previous, *keys) {
            action.0 = pressed;
        }
        input.previous = *keys;
    }
}

/// Last newly-pressed direction in left, right, up, down scan order.
pub fn pressed_action(previous: KeyState, current: KeyState) -> Option<Action> {
    let mut action = None;
    if current.left && !previous.left {
        action = Some(Action::MoveLeft);
    }
    if current.right && !previous.right {
        action = Some(Action::MoveRight);
    }
    if current.up && !previous.up {
        action = Some(Action::MoveUp);
    }
    if current.down && !previous.down {
        action = Some(Action::MoveDown);
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::input::Key;

    #[test]
    fn held_keys_do_not_repeat() {
        let held = KeyState::only(Key::Left);
        assert_eq!(
            pressed_action(KeyState::default(), held),
            Some(Action::MoveLeft)
        );
        assert_eq!(pressed_action(held, held), None);
        assert_eq!(pressed_action(held, KeyState::default()), None);
    }

    #[test]
    fn later_direction_wins_on_simultaneous_press() {
        let keys = KeyState {
            left: true,
            right: false,
            up: true,
            down: false,
        };
        assert_eq!(
            pressed_action(KeyState::default(), keys),
            Some(Action::MoveUp)
        );
    }

    #[test]
    fn only_fresh_presses_count() {
        let previous = KeyState {
            down: true,
            ..KeyState::default()
        };
        let current = KeyState {
            left: true,
            down: true,
            ..KeyState::default()
        };
        assert_eq!(pressed_action(previous, current), Some(Action::MoveLeft));
    }

    #[test]
    fn system_writes_player_action() {
        let mut world = World::new();
        world.insert_resource(KeyState::only(Key::Right));
        let player = world
            .spawn((Player, PlayerInput::default(), PendingAction::default()))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(sample_input_system);
        schedule.run(&mut world);

        assert_eq!(
            world.get::<PendingAction>(player),
            Some(&PendingAction(Action::MoveRight))
        );
        assert_eq!(
            world.get::<PlayerInput>(player).map(|input| input.previous),
            Some(KeyState::only(Key::Right))
        );
    }
}
