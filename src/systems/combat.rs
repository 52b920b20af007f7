use bevy_ecs::prelude::*;
use bevy_ecs::query::Has;
use bevy_utils::tracing::debug;

use crate::components::action::{Action, MoveBlocked, PendingAction, PendingDestination};
use crate::components::combat::{HealingMagic, Hitpoints, MeleeDamage, RangedDamage};
use crate::components::world::{Player, Position, Team};

/// Resource capturing the combat entries of the most recent turn.
#[derive(Resource, Default, Debug)]
pub struct CombatLog(pub Vec<String>);

/// Everything that can stand in a cell and take damage.
type Occupants<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static Position,
        &'static PendingDestination,
        &'static mut Hitpoints,
        &'static Team,
        Has<Player>,
    ),
>;

/// A move into `to` from `from` collides with an occupant heading for the same cell, or with
/// one trading places with the mover.
fn collides(from: Position, to: Position, other_at: Position, other_to: Position) -> bool {
    other_to == to || (from != to && other_at == to && other_to == from)
}

/// System: proposes this tick's destination from the current position and action.
pub fn compute_destinations_system(
    mut movers: Query<(&Position, &PendingAction, &mut PendingDestination, &mut MoveBlocked)>,
) {
    for (position, action, mut destination, mut blocked) in movers.iter_mut() {
        destination.0 = position.step(action.0);
        blocked.0 = false;
    }
}

/// System: melee movers are blocked by any other claimant of their cell and bump-attack
/// opposing ones.
pub fn resolve_melee_system(
    mut log: ResMut<CombatLog>,
    mut attackers: Query<
        (Entity, &Position, &PendingDestination, &mut MoveBlocked, &MeleeDamage, &Team),
        Without<HealingMagic>,
    >,
    mut occupants: Occupants,
) {
    for (entity, position, destination, mut blocked, damage, team) in attackers.iter_mut() {
        let step = (*position, destination.0);
        if bump(entity, step, damage.0, *team, &mut occupants, &mut log) {
            blocked.0 = true;
        }
    }
}

/// System: ranged movers block like everyone else; a ranged attack hits every opposing
/// entity in range of the shooter's destination, blocked or not.
pub fn resolve_ranged_system(
    mut log: ResMut<CombatLog>,
    mut shooters: Query<(
        Entity,
        &PendingAction,
        &Position,
        &PendingDestination,
        &mut MoveBlocked,
        &RangedDamage,
        &Team,
    )>,
    mut occupants: Occupants,
) {
    for (entity, action, position, destination, mut blocked, ranged, team) in shooters.iter_mut() {
        let shooting = action.0 == Action::RangedAttack;
        let (from, to) = (*position, destination.0);
        for (other, other_position, other_destination, mut hitpoints, other_team, _) in
            occupants.iter_mut()
        {
            if other == entity {
                continue;
            }
            if collides(from, to, *other_position, other_destination.0) {
                blocked.0 = true;
            }
            if shooting
                && other_team != team
                && destination.0.distance(other_destination.0) <= ranged.range
            {
                hitpoints.0 -= ranged.amount;
                debug!(shooter = ?entity, target = ?other, amount = ranged.amount, "ranged hit");
                log.0.push(format!(
                    "{:?} shoots {:?} for {} ({} left).",
                    entity, other, ranged.amount, hitpoints.0
                ));
            }
        }
    }
}

/// System: healers fight like melee movers, then tick their cooldown and heal the player
/// when adjacent to its destination.
pub fn resolve_healer_system(
    mut log: ResMut<CombatLog>,
    mut healers: Query<(
        Entity,
        &Position,
        &PendingDestination,
        &mut MoveBlocked,
        &MeleeDamage,
        &Team,
        &mut HealingMagic,
    )>,
    mut occupants: Occupants,
) {
    for (entity, position, destination, mut blocked, damage, team, mut magic) in
        healers.iter_mut()
    {
        let step = (*position, destination.0);
        if bump(entity, step, damage.0, *team, &mut occupants, &mut log) {
            blocked.0 = true;
        }

        magic.tick_cooldown();
        if !magic.ready() {
            continue;
        }
        for (ally, _, ally_destination, mut hitpoints, _, is_player) in occupants.iter_mut() {
            if !is_player || ally == entity {
                continue;
            }
            if ally_destination.0.manhattan(destination.0) <= 1 {
                hitpoints.0 += magic.amount;
                magic.reset_cooldown();
                debug!(healer = ?entity, ally = ?ally, amount = magic.amount, "heal");
                log.0.push(format!(
                    "{:?} heals {:?} for {} ({} now).",
                    entity, ally, magic.amount, hitpoints.0
                ));
            }
        }
    }
}

/// Blocks on every occupant the `(from, to)` step collides with and damages the opposing
/// ones. Returns whether the move is blocked.
fn bump(
    entity: Entity,
    (from, to): (Position, Position),
    damage: f32,
    team: Team,
    occupants: &mut Occupants,
    log: &mut CombatLog,
) -> bool {
    let mut blocked = false;
    for (other, other_position, other_destination, mut hitpoints, other_team, _) in
        occupants.iter_mut()
    {
        if other == entity || !collides(from, to, *other_position, other_destination.0) {
            continue;
        }
        blocked = true;
        if *other_team != team {
            hitpoints.0 -= damage;
            debug!(attacker = ?entity, target = ?other, damage, "melee hit");
            log.0.push(format!(
                "{:?} hits {:?} for {} ({} left).",
                entity, other, damage, hitpoints.0
            ));
        } else {
            debug!(entity = ?entity, blocker = ?other, "move blocked by ally");
        }
    }
    blocked
}
