use bevy_ecs::prelude::*;

use crate::components::combat::{Hitpoints, MeleeDamage};
use crate::components::input::{Key, KeyState};
use crate::components::world::{Position, Team};
use crate::core::ecs::{create_schedule, create_world};
use crate::core::spawn::spawn_roster;
use crate::data::roster::{RosterCatalog, RosterDataError};
use crate::render::{collect_draw_commands, DrawCommand};
use crate::simulation::time::TurnClock;
use crate::systems::combat::CombatLog;

/// Data snapshot returned to the presentation layer after each frame.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub clock: TurnClock,
    pub player_hitpoints: f32,
    pub player_power: f32,
    pub player_pos: (i32, i32),
    /// The player has been removed by the death sweep.
    pub game_over: bool,
    pub combat_log: Vec<String>,
    pub draw: Vec<DrawCommand>,
    pub entities: Vec<EntitySummary>,
}

#[derive(Debug, Clone)]
pub struct EntitySummary {
    pub entity: Entity,
    pub position: (i32, i32),
    pub team: Option<u8>,
    pub hitpoints: Option<f32>,
}

/// Wrapper around the ECS world and frame schedule.
pub struct Game {
    world: World,
    schedule: Schedule,
    player: Entity,
    seed: u64,
}

impl Game {
    /// Create a game with the built-in roster.
    pub fn new(seed: u64) -> Self {
        Self::spawn(&RosterCatalog::demo(), seed)
    }

    /// Validates `roster` before spawning it.
    pub fn from_roster(roster: &RosterCatalog, seed: u64) -> Result<Self, RosterDataError> {
        roster.validate()?;
        Ok(Self::spawn(roster, seed))
    }

    fn spawn(roster: &RosterCatalog, seed: u64) -> Self {
        let mut world = create_world(seed);
        let player = spawn_roster(&mut world, roster);
        Self {
            world,
            schedule: create_schedule(),
            player,
            seed,
        }
    }

    /// Run one frame with the keys currently held and return a snapshot for rendering.
    pub fn frame(&mut self, keys: KeyState) -> Snapshot {
        *self.world.resource_mut::<KeyState>() = keys;
        self.schedule.run(&mut self.world);
        Snapshot::capture(self.player, &self.world)
    }

    /// Press and release `key` over two frames; the press frame drives the turn.
    pub fn press(&mut self, key: Key) -> Snapshot {
        self.frame(KeyState::only(key));
        self.frame(KeyState::default())
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

impl Snapshot {
    fn capture(player: Entity, world: &World) -> Self {
        let clock = world.resource::<TurnClock>().clone();
        let player_ref = world.get_entity(player);

        let player_hitpoints = player_ref
            .and_then(|p| p.get::<Hitpoints>())
            .map_or(0.0, |hp| hp.0);
        let player_power = player_ref
            .and_then(|p| p.get::<MeleeDamage>())
            .map_or(0.0, |dmg| dmg.0);
        let player_pos = player_ref
            .and_then(|p| p.get::<Position>())
            .map_or((0, 0), |pos| (pos.x, pos.y));

        let entities = world
            .iter_entities()
            .filter(|e| e.id() != player)
            .filter_map(|e| {
                let position = e.get::<Position>()?;
                Some(EntitySummary {
                    entity: e.id(),
                    position: (position.x, position.y),
                    team: e.get::<Team>().map(|team| team.0),
                    hitpoints: e.get::<Hitpoints>().map(|hp| hp.0),
                })
            })
            .collect();

        let combat_log = world
            .get_resource::<CombatLog>()
            .map(|log| log.0.clone())
            .unwrap_or_default();

        Snapshot {
            clock,
            player_hitpoints,
            player_pos,
            player_power,
            game_over: player_ref.is_none(),
            combat_log,
            draw: collect_draw_commands(world),
            entities,
        }
    }

    /// HUD line: hitpoints and melee power, as whole numbers.
    pub fn hud(&self) -> String {
        format!(
            "hp: {}  power: {}",
            self.player_hitpoints as i32, self.player_power as i32
        )
    }
}
