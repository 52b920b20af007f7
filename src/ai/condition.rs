//! Transition predicates guarding state machine edges.

use crate::ai::view::{ActorView, WorldView};

/// Pure boolean condition over the world relative to one actor.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Some opposing actor lies within this Euclidean radius (inclusive).
    EnemyWithinRange(f32),
    SelfHitpointsBelow(f32),
    /// False when there is no player.
    PlayerHitpointsBelow(f32),
    Not(Box<Condition>),
    And(Box<Condition>, Box<Condition>),
}

impl Condition {
    pub fn negate(self) -> Self {
        Condition::Not(Box::new(self))
    }

    pub fn and(self, other: Condition) -> Self {
        Condition::And(Box::new(self), Box::new(other))
    }

    pub fn evaluate(&self, view: &WorldView, me: &ActorView) -> bool {
        match self {
            Condition::EnemyWithinRange(radius) => view.enemy_within(me, *radius),
            Condition::SelfHitpointsBelow(threshold) => me.hitpoints < *threshold,
            Condition::PlayerHitpointsBelow(threshold) => view
                .player()
                .map_or(false, |player| player.hitpoints < *threshold),
            Condition::Not(inner) => !inner.evaluate(view, me),
            Condition::And(lhs, rhs) => lhs.evaluate(view, me) && rhs.evaluate(view, me),
        }
    }
}
