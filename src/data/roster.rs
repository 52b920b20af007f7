use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::presets::BrainPreset;
use crate::components::appearance::Tint;
use crate::components::world::Position;

pub const DEFAULT_ROSTER_PATH: &str = "./assets/data/roster.json";
const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterCatalog {
    pub schema_version: u32,
    pub player: PlayerSpec,
    #[serde(default)]
    pub actors: Vec<ActorSpec>,
    #[serde(default)]
    pub pickups: Vec<PickupSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub position: Position,
    pub hitpoints: f32,
    pub melee_damage: f32,
    /// Player actions per AI planning pass.
    pub actions_per_turn: u32,
    #[serde(default = "default_player_color")]
    pub color: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Monster,
    Archer,
    Healer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorSpec {
    pub kind: ActorKind,
    pub position: Position,
    pub team: u8,
    pub hitpoints: f32,
    #[serde(default)]
    pub melee_damage: Option<f32>,
    #[serde(default)]
    pub ranged: Option<RangedSpec>,
    #[serde(default)]
    pub healing: Option<HealingSpec>,
    pub brain: BrainPreset,
    pub color: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RangedSpec {
    pub amount: f32,
    pub range: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HealingSpec {
    pub amount: f32,
    pub cooldown: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PickupKind {
    Heal,
    Powerup,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupSpec {
    pub kind: PickupKind,
    pub position: Position,
    pub amount: f32,
}

fn default_player_color() -> String {
    "#eeeeeeff".to_string()
}

#[derive(Debug, Error)]
pub enum RosterDataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("{0}")]
    Validation(String),
}

pub fn load_roster_catalog(path: impl AsRef<Path>) -> Result<RosterCatalog, RosterDataError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| RosterDataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_roster(&raw, &path.display().to_string())
}

pub fn parse_roster(raw: &str, origin: &str) -> Result<RosterCatalog, RosterDataError> {
    let catalog: RosterCatalog =
        serde_json::from_str(raw).map_err(|source| RosterDataError::Json {
            path: origin.to_string(),
            source,
        })?;
    catalog.validate()?;
    Ok(catalog)
}

impl RosterCatalog {
    pub fn validate(&self) -> Result<(), RosterDataError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(invalid(format!(
                "unsupported roster schema_version {} (expected {})",
                self.schema_version, SCHEMA_VERSION
            )));
        }

        let player = &self.player;
        if player.actions_per_turn == 0 {
            return Err(invalid(
                "player actions_per_turn must be at least 1".to_string(),
            ));
        }
        check_hitpoints("player", player.hitpoints)?;
        check_amount("player melee_damage", player.melee_damage)?;
        check_color("player", &player.color)?;

        for (idx, actor) in self.actors.iter().enumerate() {
            let label = format!("actor {} ({:?})", idx, actor.kind);
            check_hitpoints(&label, actor.hitpoints)?;
            check_color(&label, &actor.color)?;
            if let Some(melee) = actor.melee_damage {
                check_amount(&format!("{} melee_damage", label), melee)?;
            }
            if let Some(ranged) = actor.ranged {
                check_amount(&format!("{} ranged amount", label), ranged.amount)?;
                if !(ranged.range.is_finite() && ranged.range > 0.0) {
                    return Err(invalid(format!("{} ranged range must be positive", label)));
                }
            }
            if let Some(healing) = actor.healing {
                check_amount(&format!("{} healing amount", label), healing.amount)?;
            }
            match actor.kind {
                ActorKind::Monster if actor.melee_damage.is_none() => {
                    return Err(invalid(format!("{} needs melee_damage", label)));
                }
                ActorKind::Archer if actor.ranged.is_none() => {
                    return Err(invalid(format!("{} needs ranged stats", label)));
                }
                ActorKind::Healer if actor.melee_damage.is_none() || actor.healing.is_none() => {
                    return Err(invalid(format!(
                        "{} needs melee_damage and healing stats",
                        label
                    )));
                }
                _ => {}
            }
        }

        for (idx, pickup) in self.pickups.iter().enumerate() {
            let label = format!("pickup {} ({:?})", idx, pickup.kind);
            check_amount(&label, pickup.amount)?;
        }
        Ok(())
    }

    /// Built-in roster used when no file is supplied.
    pub fn demo() -> Self {
        let monster = |x, y, brain, color: &str| ActorSpec {
            kind: ActorKind::Monster,
            position: Position::new(x, y),
            team: 1,
            hitpoints: 100.0,
            melee_damage: Some(20.0),
            ranged: None,
            healing: None,
            brain,
            color: color.to_string(),
        };
        let pickup = |kind, x, y, amount| PickupSpec {
            kind,
            position: Position::new(x, y),
            amount,
        };

        RosterCatalog {
            schema_version: SCHEMA_VERSION,
            player: PlayerSpec {
                position: Position::new(0, 0),
                hitpoints: 10.0,
                melee_damage: 50.0,
                actions_per_turn: 2,
                color: default_player_color(),
            },
            actors: vec![
                monster(5, 5, BrainPreset::PatrolAttackFlee, "#ee00eeff"),
                monster(10, -5, BrainPreset::PatrolAttackFlee, "#ee00eeff"),
                monster(-5, -5, BrainPreset::PatrolFlee, "#111111ff"),
                monster(-8, 2, BrainPreset::Attack, "#880000ff"),
                ActorSpec {
                    kind: ActorKind::Archer,
                    position: Position::new(-5, 5),
                    team: 1,
                    hitpoints: 100.0,
                    melee_damage: None,
                    ranged: Some(RangedSpec {
                        amount: 20.0,
                        range: 5.0,
                    }),
                    healing: None,
                    brain: BrainPreset::Archer,
                    color: "#00ff00ff".to_string(),
                },
                ActorSpec {
                    kind: ActorKind::Healer,
                    position: Position::new(0, 2),
                    team: 0,
                    hitpoints: 100.0,
                    melee_damage: Some(50.0),
                    ranged: None,
                    healing: Some(HealingSpec {
                        amount: 10.0,
                        cooldown: 10,
                    }),
                    brain: BrainPreset::Healer,
                    color: "#ffeeeeff".to_string(),
                },
            ],
            pickups: vec![
                pickup(PickupKind::Powerup, 7, 7, 10.0),
                pickup(PickupKind::Powerup, 10, -6, 10.0),
                pickup(PickupKind::Powerup, 10, -4, 10.0),
                pickup(PickupKind::Heal, -4, -5, 50.0),
                pickup(PickupKind::Heal, -4, 5, 50.0),
            ],
        }
    }
}

fn invalid(message: String) -> RosterDataError {
    RosterDataError::Validation(message)
}

fn check_hitpoints(label: &str, hitpoints: f32) -> Result<(), RosterDataError> {
    if hitpoints.is_finite() && hitpoints > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{} hitpoints must be positive", label)))
    }
}

fn check_amount(label: &str, amount: f32) -> Result<(), RosterDataError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{} must be a non-negative number", label)))
    }
}

fn check_color(label: &str, color: &str) -> Result<(), RosterDataError> {
    match Tint::parse(color) {
        Some(_) => Ok(()),
        None => Err(invalid(format!(
            "{} has malformed color {:?}",
            label, color
        ))),
    }
}
