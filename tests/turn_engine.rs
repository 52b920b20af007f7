use bevy_ecs::prelude::*;
use proptest::prelude::*;

use grid_tactics::ai::behavior::Behavior;
use grid_tactics::ai::machine::StateMachine;
use grid_tactics::ai::presets::BrainPreset;
use grid_tactics::components::action::{Action, PendingAction};
use grid_tactics::components::combat::{
    ActionBudget, HealingMagic, Hitpoints, MeleeDamage, RangedDamage,
};
use grid_tactics::components::world::Position;
use grid_tactics::components::ActorBundle;
use grid_tactics::core::ecs::{create_schedule, create_world};
use grid_tactics::core::spawn::{spawn_actor, spawn_brain, spawn_pickup, spawn_player};
use grid_tactics::data::roster::{
    ActorKind, ActorSpec, HealingSpec, PickupKind, PickupSpec, PlayerSpec, RosterCatalog,
    RosterDataError,
};
use grid_tactics::simulation::time::TurnClock;
use grid_tactics::{Game, Key, KeyState};

struct Harness {
    world: World,
    schedule: Schedule,
    player: Entity,
}

impl Harness {
    fn new(player_at: (i32, i32), hitpoints: f32, actions_per_turn: u32) -> Self {
        let mut world = create_world(7);
        let player = spawn_player(
            &mut world,
            &PlayerSpec {
                position: Position::new(player_at.0, player_at.1),
                hitpoints,
                melee_damage: 50.0,
                actions_per_turn,
                color: "#eeeeeeff".to_string(),
            },
        );
        Self {
            world,
            schedule: create_schedule(),
            player,
        }
    }

    fn frame(&mut self, keys: KeyState) {
        *self.world.resource_mut::<KeyState>() = keys;
        self.schedule.run(&mut self.world);
    }

    fn press(&mut self, key: Key) {
        self.frame(KeyState::only(key));
        self.frame(KeyState::default());
    }

    fn position(&self, entity: Entity) -> Option<Position> {
        self.world.get::<Position>(entity).copied()
    }

    fn hitpoints(&self, entity: Entity) -> Option<f32> {
        self.world.get::<Hitpoints>(entity).map(|hp| hp.0)
    }

    fn clock(&self) -> TurnClock {
        self.world.resource::<TurnClock>().clone()
    }

    fn behavior(&self, entity: Entity) -> Option<Behavior> {
        self.world
            .get::<StateMachine>(entity)
            .map(|sm| sm.current_behavior().clone())
    }
}

#[test]
fn patroller_engages_nearby_enemy_then_returns_to_patrol() {
    let mut h = Harness::new((0, 0), 100.0, 1);
    let monster = spawn_brain(
        &mut h.world,
        Position::new(2, 0),
        1,
        100.0,
        BrainPreset::PatrolAttackFlee,
    );

    h.press(Key::Up);
    assert_eq!(h.behavior(monster), Some(Behavior::ApproachNearestEnemy));
    assert_eq!(h.position(monster), Some(Position::new(1, 0)));
    assert_eq!(h.position(h.player), Some(Position::new(0, -1)));

    if let Some(mut position) = h.world.get_mut::<Position>(h.player) {
        *position = Position::new(20, 0);
    }
    h.press(Key::Down);
    assert!(matches!(h.behavior(monster), Some(Behavior::Patrol { .. })));
}

#[test]
fn contested_cell_stays_empty_and_melee_side_hits() {
    let mut h = Harness::new((50, 50), 100.0, 100);

    let mut brawler = ActorBundle::new(Position::new(0, 0), 100.0, 0);
    brawler.action = PendingAction(Action::MoveRight);
    let brawler = h.world.spawn((brawler, MeleeDamage(20.0))).id();

    let mut archer = ActorBundle::new(Position::new(2, 0), 100.0, 1);
    archer.action = PendingAction(Action::MoveLeft);
    let archer = h
        .world
        .spawn((
            archer,
            RangedDamage {
                amount: 20.0,
                range: 5.0,
            },
        ))
        .id();

    h.press(Key::Right);

    assert_eq!(h.clock().planning_passes, 0);
    assert_eq!(h.hitpoints(archer), Some(80.0));
    assert_eq!(h.hitpoints(brawler), Some(100.0));
    assert_eq!(h.position(brawler), Some(Position::new(0, 0)));
    assert_eq!(h.position(archer), Some(Position::new(2, 0)));
    assert_eq!(h.position(h.player), Some(Position::new(51, 50)));
}

#[test]
fn head_on_swap_fights_instead_of_passing_through() {
    let mut h = Harness::new((0, 0), 100.0, 100);
    let mut monster = ActorBundle::new(Position::new(1, 0), 100.0, 1);
    monster.action = PendingAction(Action::MoveLeft);
    let monster = h.world.spawn((monster, MeleeDamage(20.0))).id();

    h.press(Key::Right);

    assert_eq!(h.position(h.player), Some(Position::new(0, 0)));
    assert_eq!(h.position(monster), Some(Position::new(1, 0)));
    assert_eq!(h.hitpoints(monster), Some(50.0));
    assert_eq!(h.hitpoints(h.player), Some(80.0));
}

#[test]
fn passive_movers_cannot_trade_places() {
    let mut h = Harness::new((50, 50), 100.0, 100);
    let mut left = ActorBundle::new(Position::new(0, 0), 100.0, 1);
    left.action = PendingAction(Action::MoveRight);
    let left = h.world.spawn(left).id();
    let mut right = ActorBundle::new(Position::new(1, 0), 100.0, 2);
    right.action = PendingAction(Action::MoveLeft);
    let right = h.world.spawn(right).id();

    h.press(Key::Up);

    assert_eq!(h.position(left), Some(Position::new(0, 0)));
    assert_eq!(h.position(right), Some(Position::new(1, 0)));
}

#[test]
fn heal_and_powerup_on_same_cell_are_both_consumed() {
    let mut h = Harness::new((0, 0), 10.0, 2);
    let heal = spawn_pickup(
        &mut h.world,
        &PickupSpec {
            kind: PickupKind::Heal,
            position: Position::new(1, 0),
            amount: 50.0,
        },
    );
    let powerup = spawn_pickup(
        &mut h.world,
        &PickupSpec {
            kind: PickupKind::Powerup,
            position: Position::new(1, 0),
            amount: 10.0,
        },
    );

    h.press(Key::Right);

    assert_eq!(h.position(h.player), Some(Position::new(1, 0)));
    assert_eq!(h.hitpoints(h.player), Some(60.0));
    assert_eq!(
        h.world.get::<MeleeDamage>(h.player).map(|d| d.0),
        Some(60.0)
    );
    assert!(h.world.get_entity(heal).is_none());
    assert!(h.world.get_entity(powerup).is_none());
}

#[test]
fn bump_kill_removes_target_and_keeps_attacker_in_place() {
    let mut h = Harness::new((0, 0), 100.0, 100);
    let victim = h
        .world
        .spawn(ActorBundle::new(Position::new(1, 0), 30.0, 1))
        .id();

    h.press(Key::Right);

    assert!(h.world.get_entity(victim).is_none());
    assert_eq!(h.position(h.player), Some(Position::new(0, 0)));

    // the cell is free on the next turn
    h.press(Key::Right);
    assert_eq!(h.position(h.player), Some(Position::new(1, 0)));
}

#[test]
fn planning_runs_once_per_budget_cycle() {
    let mut h = Harness::new((0, 0), 100.0, 3);
    for _ in 0..7 {
        h.press(Key::Left);
    }
    let clock = h.clock();
    assert_eq!(clock.turns_resolved, 7);
    assert_eq!(clock.planning_passes, 2);
    assert_eq!(
        h.world.get::<ActionBudget>(h.player).map(|b| b.current),
        Some(1)
    );
}

#[test]
fn holding_a_key_acts_once() {
    let mut h = Harness::new((0, 0), 100.0, 1);
    let held = KeyState::only(Key::Down);
    h.frame(held);
    h.frame(held);
    h.frame(held);
    assert_eq!(h.clock().turns_resolved, 1);
    assert_eq!(h.clock().frame, 3);
    assert_eq!(h.position(h.player), Some(Position::new(0, 1)));
}

#[test]
fn idle_frames_do_not_advance_npcs() {
    let mut h = Harness::new((0, 0), 100.0, 1);
    let monster = spawn_brain(
        &mut h.world,
        Position::new(3, 0),
        1,
        100.0,
        BrainPreset::Attack,
    );
    h.frame(KeyState::default());
    h.frame(KeyState::default());
    assert_eq!(h.clock().turns_resolved, 0);
    assert_eq!(h.position(monster), Some(Position::new(3, 0)));
}

#[test]
fn healer_follows_the_player() {
    let mut h = Harness::new((0, 0), 100.0, 1);
    let healer = spawn_actor(
        &mut h.world,
        &ActorSpec {
            kind: ActorKind::Healer,
            position: Position::new(0, 3),
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
    );

    h.press(Key::Left);

    assert_eq!(h.behavior(healer), Some(Behavior::ApproachAlly));
    assert_eq!(h.position(healer), Some(Position::new(0, 2)));
}

#[test]
fn wounded_player_gets_healed() {
    let mut h = Harness::new((0, 0), 20.0, 1);
    let healer = spawn_actor(
        &mut h.world,
        &ActorSpec {
            kind: ActorKind::Healer,
            position: Position::new(0, 3),
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
    );

    // destinations (0, 1) and (0, 2) are adjacent
    h.press(Key::Down);

    assert_eq!(h.behavior(healer), Some(Behavior::ApproachAndHeal));
    assert_eq!(h.hitpoints(h.player), Some(30.0));
    assert_eq!(h.position(healer), Some(Position::new(0, 2)));
    assert_eq!(h.position(h.player), Some(Position::new(0, 1)));
    assert_eq!(
        h.world
            .get::<HealingMagic>(healer)
            .map(|magic| magic.cooldown_remaining),
        Some(10)
    );
}

#[test]
fn game_wrapper_reports_hud_and_draws() {
    let mut game = Game::new(11);
    let snapshot = game.press(Key::Up);
    assert!(!snapshot.game_over);
    assert_eq!(snapshot.clock.turns_resolved, 1);
    assert_eq!(snapshot.player_power, 50.0);
    assert!(snapshot.hud().starts_with("hp: "));
    let roster = RosterCatalog::demo();
    assert_eq!(
        snapshot.draw.len(),
        roster.actors.len() + roster.pickups.len() + 1
    );
    assert_eq!(
        snapshot.entities.len(),
        roster.actors.len() + roster.pickups.len()
    );
    let player = game.player();
    assert!(snapshot.entities.iter().all(|summary| summary.entity != player));
    assert_eq!(game.seed(), 11);
}

#[test]
fn unvalidated_roster_is_rejected() {
    let mut roster = RosterCatalog::demo();
    roster.player.actions_per_turn = 0;
    assert!(matches!(
        Game::from_roster(&roster, 1),
        Err(RosterDataError::Validation(_))
    ));
    assert!(Game::from_roster(&RosterCatalog::demo(), 1).is_ok());
}

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::Left),
        Just(Key::Right),
        Just(Key::Up),
        Just(Key::Down),
    ]
}

proptest! {
    #[test]
    fn turns_leave_no_dead_and_no_pending_actions(
        seed in 0u64..1_000,
        keys in proptest::collection::vec(key_strategy(), 1..40),
    ) {
        let mut game = Game::new(seed);
        for key in keys {
            let snapshot = game.press(key);
            let world = game.world_mut();

            let mut hitpoints = world.query::<&Hitpoints>();
            prop_assert!(hitpoints.iter(world).all(|hp| hp.0 > 0.0));

            let mut actions = world.query::<&PendingAction>();
            prop_assert!(actions.iter(world).all(|action| action.is_none()));

            if snapshot.game_over {
                break;
            }
        }
    }

    #[test]
    fn planning_fires_once_per_capacity_actions(capacity in 1u32..6, presses in 0u64..20) {
        let mut h = Harness::new((0, 0), 100.0, capacity);
        for _ in 0..presses {
            h.press(Key::Up);
        }
        let clock = h.clock();
        prop_assert_eq!(clock.turns_resolved, presses);
        prop_assert_eq!(clock.planning_passes, presses / capacity as u64);
    }
}
