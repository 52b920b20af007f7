use bevy_ecs::prelude::*;
use bevy_utils::tracing::debug;

use crate::components::action::{MoveBlocked, PendingAction, PendingDestination};
use crate::components::world::Position;

/// System: settles chained blocks, moves every unblocked entity to its destination and
/// clears all pending actions.
pub fn commit_moves_system(
    mut movers: Query<(
        Entity,
        &mut Position,
        &PendingDestination,
        &mut MoveBlocked,
        &mut PendingAction,
    )>,
) {
    let mut claims: Vec<Claim> = movers
        .iter()
        .map(|(entity, position, destination, blocked, _)| Claim {
            entity,
            position: *position,
            destination: destination.0,
            blocked: blocked.0,
        })
        .collect();
    settle(&mut claims);

    for (entity, mut position, destination, mut blocked, mut action) in movers.iter_mut() {
        if let Some(claim) = claims.iter().find(|claim| claim.entity == entity) {
            blocked.0 = claim.blocked;
        }
        if !blocked.0 && *position != destination.0 {
            *position = destination.0;
        }
        action.clear();
    }
}

#[derive(Debug, Clone, Copy)]
struct Claim {
    entity: Entity,
    position: Position,
    destination: Position,
    blocked: bool,
}

impl Claim {
    fn final_cell(&self) -> Position {
        if self.blocked {
            self.position
        } else {
            self.destination
        }
    }
}

/// Blocks any mover whose destination is where another entity ends up, or who trades places
/// with another mover, until stable.
fn settle(claims: &mut [Claim]) {
    loop {
        let mut changed = false;
        for idx in 0..claims.len() {
            let claim = claims[idx];
            if claim.blocked || claim.destination == claim.position {
                continue;
            }
            let contested = claims.iter().enumerate().any(|(other_idx, other)| {
                other_idx != idx
                    && (other.final_cell() == claim.destination
                        || (other.position == claim.destination
                            && other.destination == claim.position))
            });
            if contested {
                debug!(entity = ?claim.entity, "move blocked while settling");
                claims[idx].blocked = true;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::action::Action;

    fn claim(id: u32, from: (i32, i32), to: (i32, i32), blocked: bool) -> Claim {
        Claim {
            entity: Entity::from_raw(id),
            position: Position::new(from.0, from.1),
            destination: Position::new(to.0, to.1),
            blocked,
        }
    }

    #[test]
    fn blocked_entity_blocks_follower() {
        let mut claims = vec![
            claim(0, (0, 0), (1, 0), false),
            claim(1, (1, 0), (2, 0), true),
        ];
        settle(&mut claims);
        assert!(claims[0].blocked);
    }

    #[test]
    fn chains_resolve_transitively() {
        let mut claims = vec![
            claim(0, (0, 0), (1, 0), false),
            claim(1, (1, 0), (2, 0), false),
            claim(2, (2, 0), (3, 0), true),
        ];
        settle(&mut claims);
        assert!(claims.iter().all(|c| c.blocked));
    }

    #[test]
    fn swapping_movers_block_each_other() {
        let mut claims = vec![
            claim(0, (0, 0), (1, 0), false),
            claim(1, (1, 0), (0, 0), false),
        ];
        settle(&mut claims);
        assert!(claims.iter().all(|c| c.blocked));
    }

    #[test]
    fn rotation_of_three_still_moves() {
        let mut claims = vec![
            claim(0, (0, 0), (1, 0), false),
            claim(1, (1, 0), (1, 1), false),
            claim(2, (1, 1), (0, 0), false),
        ];
        settle(&mut claims);
        assert!(claims.iter().all(|c| !c.blocked));
    }

    #[test]
    fn convoy_moves_together() {
        let mut claims = vec![
            claim(0, (0, 0), (1, 0), false),
            claim(1, (1, 0), (2, 0), false),
        ];
        settle(&mut claims);
        assert!(claims.iter().all(|c| !c.blocked));
    }

    #[test]
    fn commit_moves_and_clears_actions() {
        let mut world = World::new();
        let mover = world
            .spawn((
                Position::new(0, 0),
                PendingDestination(Position::new(0, 1)),
                MoveBlocked(false),
                PendingAction(Action::MoveDown),
            ))
            .id();
        let stuck = world
            .spawn((
                Position::new(5, 5),
                PendingDestination(Position::new(6, 5)),
                MoveBlocked(true),
                PendingAction(Action::MoveRight),
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(commit_moves_system);
        schedule.run(&mut world);

        assert_eq!(world.get::<Position>(mover), Some(&Position::new(0, 1)));
        assert_eq!(world.get::<Position>(stuck), Some(&Position::new(5, 5)));
        for entity in [mover, stuck] {
            let action = world.get::<PendingAction>(entity);
            assert!(action.map_or(false, |a| a.is_none()));
        }
    }
}
