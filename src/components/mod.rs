pub mod action;
pub mod appearance;
pub mod combat;
pub mod input;
pub mod items;
pub mod world;

use bevy_ecs::prelude::*;

use crate::components::action::{MoveBlocked, PendingAction, PendingDestination};
use crate::components::combat::Hitpoints;
use crate::components::world::{Position, Team};

/// Components every turn-taking entity carries.
#[derive(Bundle, Debug, Clone)]
pub struct ActorBundle {
    pub position: Position,
    pub destination: PendingDestination,
    pub blocked: MoveBlocked,
    pub action: PendingAction,
    pub hitpoints: Hitpoints,
    pub team: Team,
}

impl ActorBundle {
    pub fn new(position: Position, hitpoints: f32, team: u8) -> Self {
        Self {
            position,
            destination: PendingDestination(position),
            blocked: MoveBlocked(false),
            action: PendingAction::default(),
            hitpoints: Hitpoints(hitpoints),
            team: Team(team),
        }
    }
}
