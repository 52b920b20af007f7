use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Health pool; the entity is removed once this drops to zero or below.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitpoints(pub f32);

impl Hitpoints {
    pub fn is_dead(&self) -> bool {
        self.0 <= 0.0
    }
}

/// Bump-attack damage dealt when a move is blocked by an opposing entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeleeDamage(pub f32);

#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangedDamage {
    pub amount: f32,
    /// Inclusive firing range, measured from the shooter's pending destination.
    pub range: f32,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealingMagic {
    pub amount: f32,
    pub cooldown_length: u32,
    pub cooldown_remaining: u32,
    /// Set by the planner while the healer is in a healing state.
    pub active: bool,
}

impl HealingMagic {
    pub fn new(amount: f32, cooldown_length: u32) -> Self {
        Self {
            amount,
            cooldown_length,
            cooldown_remaining: 0,
            active: false,
        }
    }

    pub fn tick_cooldown(&mut self) {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(1);
    }

    pub fn ready(&self) -> bool {
        self.active && self.cooldown_remaining == 0
    }

    pub fn reset_cooldown(&mut self) {
        self.cooldown_remaining = self.cooldown_length;
    }
}

/// Counts player actions between AI planning passes.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionBudget {
    pub capacity: u32,
    pub current: u32,
}

impl ActionBudget {
    pub fn new(capacity: u32) -> Self {
        assert!(capacity > 0, "action budget capacity must be at least 1");
        Self {
            capacity,
            current: 0,
        }
    }

    /// Spend one action. Returns true when the counter wraps back to zero.
    pub fn advance(&mut self) -> bool {
        self.current = (self.current + 1) % self.capacity;
        self.current == 0
    }
}
