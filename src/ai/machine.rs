//! Per-entity finite state machine over behavior states.

use bevy_ecs::prelude::*;
use bevy_utils::tracing::debug;
use rand::Rng;

use crate::ai::behavior::{Behavior, Plan};
use crate::ai::condition::Condition;
use crate::ai::view::{ActorView, WorldView};
use crate::components::world::Position;

/// Guarded edge between two states.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub condition: Condition,
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct StateMachine {
    states: Vec<Behavior>,
    transitions: Vec<Transition>,
    current: usize,
}

impl StateMachine {
    /// Machine starting (and for now staying) in `initial`, which gets index 0.
    pub fn new(initial: Behavior) -> Self {
        Self {
            states: vec![initial],
            transitions: Vec::new(),
            current: 0,
        }
    }

    pub fn builder() -> StateMachineBuilder {
        StateMachineBuilder::default()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_behavior(&self) -> &Behavior {
        &self.states[self.current]
    }

    pub fn add_state(&mut self, behavior: Behavior) -> usize {
        self.states.push(behavior);
        self.states.len() - 1
    }

    /// Edges leaving the same state are tried in the order they were added.
    pub fn add_transition(&mut self, condition: Condition, from: usize, to: usize) {
        assert!(
            from < self.states.len() && to < self.states.len(),
            "transition {} -> {} references a missing state ({} states)",
            from,
            to,
            self.states.len()
        );
        self.transitions.push(Transition {
            from,
            to,
            condition,
        });
    }

    /// Take the first satisfied edge out of the current state, then plan with whichever
    /// state is current afterwards.
    pub fn plan<R: Rng>(
        &mut self,
        view: &WorldView,
        me: &ActorView,
        anchor: Position,
        rng: &mut R,
    ) -> Plan {
        let fired = self
            .transitions
            .iter()
            .filter(|transition| transition.from == self.current)
            .find(|transition| transition.condition.evaluate(view, me))
            .map(|transition| transition.to);

        if let Some(next) = fired {
            debug!(
                entity = ?me.entity,
                from = ?self.states[self.current],
                to = ?self.states[next],
                "state transition"
            );
            self.current = next;
        }

        self.states[self.current].plan(view, me, anchor, rng)
    }
}

/// Collects states and edges before the machine is handed to an entity.
#[derive(Debug, Default)]
pub struct StateMachineBuilder {
    states: Vec<Behavior>,
    transitions: Vec<(Condition, usize, usize)>,
}

impl StateMachineBuilder {
    pub fn state(&mut self, behavior: Behavior) -> usize {
        self.states.push(behavior);
        self.states.len() - 1
    }

    pub fn transition(&mut self, condition: Condition, from: usize, to: usize) -> &mut Self {
        self.transitions.push((condition, from, to));
        self
    }

    /// The first registered state becomes the initial one.
    pub fn build(self) -> StateMachine {
        let mut states = self.states.into_iter();
        let Some(initial) = states.next() else {
            panic!("state machine needs at least one state");
        };
        let mut machine = StateMachine::new(initial);
        for behavior in states {
            machine.add_state(behavior);
        }
        for (condition, from, to) in self.transitions {
            machine.add_transition(condition, from, to);
        }
        machine
    }
}
