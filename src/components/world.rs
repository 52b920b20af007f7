use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents a physical location on the tactical grid.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance_sq(self, other: Position) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        dx * dx + dy * dy
    }

    /// Euclidean distance between two cells.
    pub fn distance(self, other: Position) -> f32 {
        self.distance_sq(other).sqrt()
    }

    pub fn manhattan(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Marker component for the human player to distinguish them from NPCs.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Damage applies across differing teams, healing within the same team.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team(pub u8);

/// Anchor cell a patrolling entity wanders around.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnPoint(pub Position);
