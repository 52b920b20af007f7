use bevy_ecs::prelude::*;
use bevy_utils::tracing::info;

use crate::components::combat::Hitpoints;
use crate::systems::combat::CombatLog;

/// System: despawns everything at or below zero hitpoints. Despawns are queued and applied
/// once the sweep finishes.
pub fn death_sweep_system(
    mut commands: Commands,
    mut log: ResMut<CombatLog>,
    query: Query<(Entity, &Hitpoints)>,
) {
    for (entity, hitpoints) in query.iter() {
        if hitpoints.is_dead() {
            info!(entity = ?entity, "entity died");
            log.0.push(format!("{:?} is defeated.", entity));
            commands.entity(entity).despawn();
        }
    }
}
