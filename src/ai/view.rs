//! Read-only snapshot of the actors the planner reasons about.

use bevy_ecs::prelude::*;

use crate::components::world::{Position, Team};

/// What the planner knows about a single actor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorView {
    pub entity: Entity,
    pub position: Position,
    pub team: Team,
    pub hitpoints: f32,
    pub is_player: bool,
}

/// Actors sorted by entity so every scan has a stable order.
#[derive(Debug, Clone, Default)]
pub struct WorldView {
    actors: Vec<ActorView>,
}

impl WorldView {
    pub fn new(mut actors: Vec<ActorView>) -> Self {
        actors.sort_by_key(|actor| actor.entity);
        Self { actors }
    }

    pub fn get(&self, entity: Entity) -> Option<&ActorView> {
        self.actors
            .binary_search_by_key(&entity, |actor| actor.entity)
            .ok()
            .map(|idx| &self.actors[idx])
    }

    pub fn player(&self) -> Option<&ActorView> {
        self.actors.iter().find(|actor| actor.is_player)
    }

    pub fn enemies_of<'a>(&'a self, me: &ActorView) -> impl Iterator<Item = &'a ActorView> + 'a {
        let (id, team) = (me.entity, me.team);
        self.actors
            .iter()
            .filter(move |other| other.entity != id && other.team != team)
    }

    /// Closest opposing actor; the first in entity order wins ties.
    pub fn nearest_enemy(&self, me: &ActorView) -> Option<&ActorView> {
        let mut best: Option<(&ActorView, f32)> = None;
        for enemy in self.enemies_of(me) {
            let dist = me.position.distance_sq(enemy.position);
            if best.map_or(true, |(_, best_dist)| dist < best_dist) {
                best = Some((enemy, dist));
            }
        }
        best.map(|(enemy, _)| enemy)
    }

    pub fn enemy_within(&self, me: &ActorView, radius: f32) -> bool {
        self.enemies_of(me)
            .any(|enemy| me.position.distance(enemy.position) <= radius)
    }
}
