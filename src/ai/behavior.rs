//! Behavior states: one action per plan step.

use rand::Rng;

use crate::ai::view::{ActorView, WorldView};
use crate::components::action::Action;
use crate::components::world::Position;

/// Outcome of a single plan step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub action: Action,
    /// Healers only: whether healing magic is armed for the coming resolution.
    pub healing: bool,
}

impl Plan {
    pub fn act(action: Action) -> Self {
        Self {
            action,
            healing: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Behavior {
    /// Wander around the spawn point, stepping back once farther than `radius`.
    Patrol { radius: f32 },
    ApproachNearestEnemy,
    Flee,
    /// Shoot when an enemy is within `range`, otherwise close the distance.
    RangedAttack { range: f32 },
    /// Follow the protected ally (the player).
    ApproachAlly,
    ApproachAndHeal,
    Idle,
}

impl Behavior {
    pub fn plan<R: Rng>(
        &self,
        view: &WorldView,
        me: &ActorView,
        anchor: Position,
        rng: &mut R,
    ) -> Plan {
        match self {
            Behavior::Patrol { radius } => {
                if me.position.distance(anchor) > *radius {
                    Plan::act(Action::toward(me.position, anchor))
                } else {
                    Plan::act(Action::MOVES[rng.gen_range(0..Action::MOVES.len())])
                }
            }
            Behavior::ApproachNearestEnemy => Plan::act(approach_enemy(view, me)),
            Behavior::Flee => {
                let action = view.nearest_enemy(me).map_or(Action::Nop, |enemy| {
                    Action::away_from(me.position, enemy.position)
                });
                Plan::act(action)
            }
            Behavior::RangedAttack { range } => {
                if view.enemy_within(me, *range) {
                    Plan::act(Action::RangedAttack)
                } else {
                    Plan::act(approach_enemy(view, me))
                }
            }
            Behavior::ApproachAlly => Plan::act(approach_ally(view, me)),
            Behavior::ApproachAndHeal => Plan {
                action: approach_ally(view, me),
                healing: true,
            },
            Behavior::Idle => Plan::act(Action::Nop),
        }
    }
}

fn approach_enemy(view: &WorldView, me: &ActorView) -> Action {
    view.nearest_enemy(me).map_or(Action::Nop, |enemy| {
        Action::toward(me.position, enemy.position)
    })
}

fn approach_ally(view: &WorldView, me: &ActorView) -> Action {
    view.player()
        .filter(|player| player.entity != me.entity)
        .map_or(Action::Nop, |player| {
            Action::toward(me.position, player.position)
        })
}
