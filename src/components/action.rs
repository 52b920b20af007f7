use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::world::Position;

/// Intent an entity wants to carry out this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    #[default]
    Nop,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    RangedAttack,
}

impl Action {
    /// Cardinal moves in the order they are scanned for tie-breaks.
    pub const MOVES: [Action; 4] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
    ];

    pub fn is_move(self) -> bool {
        matches!(
            self,
            Action::MoveLeft | Action::MoveRight | Action::MoveUp | Action::MoveDown
        )
    }

    /// Step along the dominant axis from `from` toward `to`.
    pub fn toward(from: Position, to: Position) -> Action {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if dx == 0 && dy == 0 {
            return Action::Nop;
        }
        if dx.abs() > dy.abs() {
            if dx > 0 {
                Action::MoveRight
            } else {
                Action::MoveLeft
            }
        } else if dy < 0 {
            Action::MoveUp
        } else {
            Action::MoveDown
        }
    }

    /// Cardinal step that ends farthest from `threat`; earlier moves win ties.
    pub fn away_from(from: Position, threat: Position) -> Action {
        let mut best = Action::Nop;
        let mut best_dist = f32::NEG_INFINITY;
        for action in Action::MOVES {
            let dist = from.step(action).distance_sq(threat);
            if dist > best_dist {
                best = action;
                best_dist = dist;
            }
        }
        best
    }
}

impl Position {
    /// Cell reached by carrying out `action`; non-moves stay put.
    pub fn step(self, action: Action) -> Position {
        match action {
            Action::MoveLeft => Position::new(self.x - 1, self.y),
            Action::MoveRight => Position::new(self.x + 1, self.y),
            Action::MoveUp => Position::new(self.x, self.y - 1),
            Action::MoveDown => Position::new(self.x, self.y + 1),
            Action::Nop | Action::RangedAttack => self,
        }
    }
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingAction(pub Action);

impl PendingAction {
    pub fn is_none(&self) -> bool {
        self.0 == Action::Nop
    }

    pub fn clear(&mut self) {
        self.0 = Action::Nop;
    }
}

/// Proposed cell for the current tick, rebuilt from Position on every resolution pass.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingDestination(pub Position);

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveBlocked(pub bool);
