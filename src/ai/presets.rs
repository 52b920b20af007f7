use serde::{Deserialize, Serialize};

use crate::ai::behavior::Behavior;
use crate::ai::condition::Condition;
use crate::ai::machine::StateMachine;

const LOW_HITPOINTS: f32 = 60.0;
const ALLY_LOW_HITPOINTS: f32 = 40.0;
const NOTICE_RADIUS: f32 = 3.0;
const ENGAGE_RADIUS: f32 = 5.0;
const SAFE_RADIUS: f32 = 7.0;
const PATROL_RADIUS: f32 = 3.0;

/// Named state machine layouts used by the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrainPreset {
    PatrolAttackFlee,
    PatrolFlee,
    Attack,
    Archer,
    Healer,
    Idle,
}

impl BrainPreset {
    pub fn build(self, firing_range: f32) -> StateMachine {
        match self {
            BrainPreset::PatrolAttackFlee => patrol_attack_flee(),
            BrainPreset::PatrolFlee => patrol_flee(),
            BrainPreset::Attack => StateMachine::new(Behavior::ApproachNearestEnemy),
            BrainPreset::Archer => archer(firing_range),
            BrainPreset::Healer => healer(),
            BrainPreset::Idle => StateMachine::new(Behavior::Idle),
        }
    }
}

fn enemy_within(radius: f32) -> Condition {
    Condition::EnemyWithinRange(radius)
}

pub fn patrol_attack_flee() -> StateMachine {
    let mut sm = StateMachine::builder();
    let patrol = sm.state(Behavior::Patrol {
        radius: PATROL_RADIUS,
    });
    let approach = sm.state(Behavior::ApproachNearestEnemy);
    let flee = sm.state(Behavior::Flee);

    sm.transition(enemy_within(NOTICE_RADIUS), patrol, approach)
        .transition(enemy_within(ENGAGE_RADIUS).negate(), approach, patrol)
        .transition(
            Condition::SelfHitpointsBelow(LOW_HITPOINTS).and(enemy_within(ENGAGE_RADIUS)),
            approach,
            flee,
        )
        .transition(
            Condition::SelfHitpointsBelow(LOW_HITPOINTS).and(enemy_within(NOTICE_RADIUS)),
            patrol,
            flee,
        )
        .transition(enemy_within(SAFE_RADIUS).negate(), flee, patrol);
    sm.build()
}

pub fn patrol_flee() -> StateMachine {
    let mut sm = StateMachine::builder();
    let patrol = sm.state(Behavior::Patrol {
        radius: PATROL_RADIUS,
    });
    let flee = sm.state(Behavior::Flee);

    sm.transition(enemy_within(NOTICE_RADIUS), patrol, flee)
        .transition(enemy_within(ENGAGE_RADIUS).negate(), flee, patrol);
    sm.build()
}

pub fn archer(firing_range: f32) -> StateMachine {
    let mut sm = StateMachine::builder();
    let idle = sm.state(Behavior::Idle);
    let flee = sm.state(Behavior::Flee);
    let shoot = sm.state(Behavior::RangedAttack {
        range: firing_range,
    });

    sm.transition(enemy_within(ENGAGE_RADIUS), idle, shoot)
        .transition(enemy_within(NOTICE_RADIUS), shoot, flee)
        .transition(enemy_within(ENGAGE_RADIUS).negate(), shoot, idle)
        .transition(enemy_within(SAFE_RADIUS).negate(), flee, idle);
    sm.build()
}

pub fn healer() -> StateMachine {
    let ally_hurt = || Condition::PlayerHitpointsBelow(ALLY_LOW_HITPOINTS);
    let ally_fine = || ally_hurt().negate();

    let mut sm = StateMachine::builder();
    let follow = sm.state(Behavior::ApproachAlly);
    let follow_and_heal = sm.state(Behavior::ApproachAndHeal);
    let approach = sm.state(Behavior::ApproachNearestEnemy);

    sm.transition(
        ally_fine().and(enemy_within(ENGAGE_RADIUS)),
        follow,
        approach,
    )
    .transition(ally_hurt(), follow, follow_and_heal)
    .transition(
        ally_fine().and(enemy_within(ENGAGE_RADIUS).negate()),
        approach,
        follow,
    )
    .transition(ally_hurt(), approach, follow_and_heal)
    .transition(
        ally_fine().and(enemy_within(ENGAGE_RADIUS).negate()),
        follow_and_heal,
        follow,
    )
    .transition(
        ally_fine().and(enemy_within(ENGAGE_RADIUS)),
        follow_and_heal,
        approach,
    );
    sm.build()
}
