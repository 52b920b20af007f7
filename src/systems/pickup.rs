use bevy_ecs::prelude::*;
use bevy_utils::tracing::info;

use crate::components::combat::{Hitpoints, MeleeDamage};
use crate::components::items::{HealAmount, PowerupAmount};
use crate::components::world::{Player, Position};
use crate::systems::combat::CombatLog;

/// System: the player consumes every heal and power-up item on its cell.
pub fn pickup_system(
    mut commands: Commands,
    mut log: ResMut<CombatLog>,
    mut players: Query<(&Position, &mut Hitpoints, Option<&mut MeleeDamage>), With<Player>>,
    heals: Query<(Entity, &Position, &HealAmount)>,
    powerups: Query<(Entity, &Position, &PowerupAmount)>,
) {
    for (position, mut hitpoints, mut melee) in players.iter_mut() {
        for (item, item_position, amount) in heals.iter() {
            if item_position != position {
                continue;
            }
            hitpoints.0 += amount.0;
            info!(item = ?item, amount = amount.0, "heal picked up");
            log.0.push(format!("Picked up a heal (+{} hp).", amount.0));
            commands.entity(item).despawn();
        }
        for (item, item_position, amount) in powerups.iter() {
            if item_position != position {
                continue;
            }
            if let Some(melee) = melee.as_mut() {
                melee.0 += amount.0;
            }
            info!(item = ?item, amount = amount.0, "power-up picked up");
            log.0.push(format!("Picked up a power-up (+{} power).", amount.0));
            commands.entity(item).despawn();
        }
    }
}
