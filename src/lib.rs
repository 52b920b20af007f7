// Re-export core modules for use by the binary or other consumers
pub mod ai;
pub mod components;
pub mod core;
pub mod data;
pub mod render;
pub mod simulation;
pub mod systems;

// Expose the main Game wrapper and types needed for interaction
pub use crate::components::input::{Key, KeyState};
pub use crate::core::world::{EntitySummary, Game, Snapshot};
