use bevy_ecs::prelude::*;
use bevy_ecs::schedule::{ExecutorKind, SystemSet};

use crate::components::input::KeyState;
use crate::simulation::time::{advance_frame_system, TurnClock};
use crate::systems::{
    advance_turn_system, commit_moves_system, compute_destinations_system, death_sweep_system,
    pickup_system, plan_system, planning_due, resolve_healer_system, resolve_melee_system,
    resolve_ranged_system, sample_input_system, turn_advancing, AiRng, CombatLog, TurnGate,
};

/// Canonical phase ordering for one frame.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum TurnSet {
    Input,
    Gate,
    Plan,
    Resolve,
    Commit,
    Cleanup,
}

/// Build the ECS world with baseline resources.
pub fn create_world(seed: u64) -> World {
    let mut world = World::new();
    world.insert_resource(TurnClock::default());
    world.insert_resource(TurnGate::default());
    world.insert_resource(KeyState::default());
    world.insert_resource(CombatLog::default());
    world.insert_resource(AiRng::new(seed));
    world
}

/// Build the frame schedule in the canonical order. Despawns queued by a phase are applied
/// before the next phase runs.
pub fn create_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);

    schedule.configure_sets(
        (
            TurnSet::Input,
            TurnSet::Gate,
            TurnSet::Plan,
            TurnSet::Resolve,
            TurnSet::Commit,
            TurnSet::Cleanup,
        )
            .chain(),
    );
    schedule.configure_sets(TurnSet::Plan.run_if(planning_due));
    schedule.configure_sets(TurnSet::Resolve.run_if(turn_advancing));
    schedule.configure_sets(TurnSet::Commit.run_if(turn_advancing));
    schedule.configure_sets(TurnSet::Cleanup.run_if(turn_advancing));

    schedule.add_systems((
        (advance_frame_system, sample_input_system)
            .chain()
            .in_set(TurnSet::Input),
        advance_turn_system.in_set(TurnSet::Gate),
        plan_system.in_set(TurnSet::Plan),
        (
            compute_destinations_system,
            resolve_melee_system,
            resolve_ranged_system,
            resolve_healer_system,
        )
            .chain()
            .in_set(TurnSet::Resolve),
        commit_moves_system.in_set(TurnSet::Commit),
        (death_sweep_system, pickup_system)
            .chain()
            .in_set(TurnSet::Cleanup),
    ));

    schedule
}
