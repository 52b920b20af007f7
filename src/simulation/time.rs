use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Global resource tracking turn cadence.
#[derive(Resource, Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TurnClock {
    /// Frames driven through the schedule.
    pub frame: u64,
    /// Frames where the player acted and every pending action was resolved.
    pub turns_resolved: u64,
    /// Times the AI state machines were asked to plan.
    pub planning_passes: u64,
}

impl std::fmt::Display for TurnClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Frame {}, Turn {} (AI pass {})",
            self.frame, self.turns_resolved, self.planning_passes
        )
    }
}

/// System: Advances the frame counter.
pub fn advance_frame_system(mut clock: ResMut<TurnClock>) {
    clock.frame += 1;
}
