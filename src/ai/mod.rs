//! State-machine AI: predicates, behaviors and the per-entity machine.

pub mod behavior;
pub mod condition;
pub mod machine;
pub mod presets;
pub mod view;

pub use behavior::{Behavior, Plan};
pub use condition::Condition;
pub use machine::{StateMachine, StateMachineBuilder, Transition};
pub use presets::BrainPreset;
pub use view::{ActorView, WorldView};
