pub mod cleanup;
pub mod combat;
pub mod input;
pub mod movement;
pub mod pickup;
pub mod planning;
pub mod turn;

pub use cleanup::death_sweep_system;
pub use combat::{
    compute_destinations_system, resolve_healer_system, resolve_melee_system,
    resolve_ranged_system, CombatLog,
};
pub use input::sample_input_system;
pub use movement::commit_moves_system;
pub use pickup::pickup_system;
pub use planning::{plan_system, AiRng};
pub use turn::{advance_turn_system, planning_due, turn_advancing, TurnGate};
