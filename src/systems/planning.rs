use bevy_ecs::prelude::*;
use bevy_ecs::query::Has;
use bevy_utils::tracing::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::ai::machine::StateMachine;
use crate::ai::view::{ActorView, WorldView};
use crate::components::action::PendingAction;
use crate::components::combat::{HealingMagic, Hitpoints};
use crate::components::world::{Player, Position, SpawnPoint, Team};

/// Seeded RNG shared by the planners so runs are reproducible.
#[derive(Resource, Debug, Clone)]
pub struct AiRng(pub ChaCha8Rng);

impl AiRng {
    pub fn new(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// System: every state machine plans one action for its entity.
pub fn plan_system(
    mut rng: ResMut<AiRng>,
    actors: Query<(Entity, &Position, &Team, &Hitpoints, Has<Player>)>,
    mut brains: Query<(
        Entity,
        &mut StateMachine,
        &mut PendingAction,
        Option<&SpawnPoint>,
        Option<&mut HealingMagic>,
    )>,
) {
    let view = WorldView::new(
        actors
            .iter()
            .map(|(entity, position, team, hitpoints, is_player)| ActorView {
                entity,
                position: *position,
                team: *team,
                hitpoints: hitpoints.0,
                is_player,
            })
            .collect(),
    );

    let mut planned = 0usize;
    for (entity, mut machine, mut action, spawn, healing) in brains.iter_mut() {
        let Some(me) = view.get(entity) else {
            continue;
        };
        let anchor = spawn.map_or(me.position, |spawn| spawn.0);
        let plan = machine.plan(&view, me, anchor, &mut rng.0);
        action.0 = plan.action;
        if let Some(mut healing) = healing {
            healing.active = plan.healing;
        }
        planned += 1;
    }
    info!(planned, "AI planning pass");
}
