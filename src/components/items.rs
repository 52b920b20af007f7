use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Pickup restoring hitpoints to the player.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealAmount(pub f32);

/// Pickup adding to the player's melee damage.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerupAmount(pub f32);
