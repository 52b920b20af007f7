use bevy_ecs::prelude::*;
use bevy_utils::tracing::debug;

use crate::components::action::PendingAction;
use crate::components::combat::ActionBudget;
use crate::components::world::Player;
use crate::simulation::time::TurnClock;
use crate::systems::combat::CombatLog;

/// Per-frame decision of which turn phases run.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TurnGate {
    /// The player acted, so pending actions get resolved.
    pub advancing: bool,
    /// The player's budget wrapped, so the AI plans first.
    pub planning_due: bool,
}

/// System: gates the turn on the player's action and spends one unit of budget.
pub fn advance_turn_system(
    mut gate: ResMut<TurnGate>,
    mut clock: ResMut<TurnClock>,
    mut log: ResMut<CombatLog>,
    mut players: Query<(&PendingAction, Option<&mut ActionBudget>), With<Player>>,
) {
    *gate = TurnGate::default();
    for (action, budget) in players.iter_mut() {
        if action.is_none() {
            continue;
        }
        gate.advancing = true;
        // A player without a budget lets the AI plan on every action.
        gate.planning_due |= budget.map_or(true, |mut budget| budget.advance());
    }

    if gate.advancing {
        log.0.clear();
        clock.turns_resolved += 1;
        if gate.planning_due {
            clock.planning_passes += 1;
        }
        debug!(turn = clock.turns_resolved, planning = gate.planning_due, "turn advancing");
    }
}

pub fn turn_advancing(gate: Res<TurnGate>) -> bool {
    gate.advancing
}

pub fn planning_due(gate: Res<TurnGate>) -> bool {
    gate.advancing && gate.planning_due
}
