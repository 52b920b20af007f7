use bevy_ecs::prelude::*;

use crate::ai::presets::BrainPreset;
use crate::components::appearance::{Glyph, Tint};
use crate::components::combat::{ActionBudget, HealingMagic, MeleeDamage, RangedDamage};
use crate::components::input::PlayerInput;
use crate::components::items::{HealAmount, PowerupAmount};
use crate::components::world::{Player, Position, SpawnPoint};
use crate::components::ActorBundle;
use crate::data::roster::{ActorKind, ActorSpec, PickupKind, PickupSpec, PlayerSpec, RosterCatalog};

const PLAYER_TEAM: u8 = 0;
const DEFAULT_FIRING_RANGE: f32 = 5.0;

/// Spawns the whole roster and returns the player entity.
pub fn spawn_roster(world: &mut World, roster: &RosterCatalog) -> Entity {
    let player = spawn_player(world, &roster.player);
    for actor in &roster.actors {
        spawn_actor(world, actor);
    }
    for pickup in &roster.pickups {
        spawn_pickup(world, pickup);
    }
    player
}

pub fn spawn_player(world: &mut World, spec: &PlayerSpec) -> Entity {
    world
        .spawn((
            Player,
            ActorBundle::new(spec.position, spec.hitpoints, PLAYER_TEAM),
            PlayerInput::default(),
            ActionBudget::new(spec.actions_per_turn),
            MeleeDamage(spec.melee_damage),
            tint(&spec.color),
            Glyph('@'),
        ))
        .id()
}

pub fn spawn_actor(world: &mut World, spec: &ActorSpec) -> Entity {
    let firing_range = spec.ranged.map_or(DEFAULT_FIRING_RANGE, |ranged| ranged.range);
    let glyph = match spec.kind {
        ActorKind::Monster => 'M',
        ActorKind::Archer => 'a',
        ActorKind::Healer => 'h',
    };
    let mut entity = world.spawn((
        ActorBundle::new(spec.position, spec.hitpoints, spec.team),
        SpawnPoint(spec.position),
        spec.brain.build(firing_range),
        tint(&spec.color),
        Glyph(glyph),
    ));
    if let Some(melee) = spec.melee_damage {
        entity.insert(MeleeDamage(melee));
    }
    if let Some(ranged) = spec.ranged {
        entity.insert(RangedDamage {
            amount: ranged.amount,
            range: ranged.range,
        });
    }
    if let Some(healing) = spec.healing {
        entity.insert(HealingMagic::new(healing.amount, healing.cooldown));
    }
    entity.id()
}

pub fn spawn_pickup(world: &mut World, spec: &PickupSpec) -> Entity {
    match spec.kind {
        PickupKind::Heal => world
            .spawn((
                spec.position,
                HealAmount(spec.amount),
                Tint::from_hex(0x44ff44ff),
                Glyph('+'),
            ))
            .id(),
        PickupKind::Powerup => world
            .spawn((
                spec.position,
                PowerupAmount(spec.amount),
                Tint::rgba(255, 255, 0, 255),
                Glyph('*'),
            ))
            .id(),
    }
}

/// Bare AI actor with the given preset, mostly useful for scenarios.
pub fn spawn_brain(
    world: &mut World,
    position: Position,
    team: u8,
    hitpoints: f32,
    preset: BrainPreset,
) -> Entity {
    world
        .spawn((
            ActorBundle::new(position, hitpoints, team),
            SpawnPoint(position),
            preset.build(DEFAULT_FIRING_RANGE),
        ))
        .id()
}

fn tint(color: &str) -> Tint {
    Tint::parse(color).unwrap_or(Tint::WHITE)
}
