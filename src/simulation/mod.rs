//! Plant simulation: periodic ticks and player actions
//!
//! Nothing in here touches the terminal. The UI reads `PlantState` and the
//! returned `SimulationEvent`s; it never writes to the plant itself.

pub mod action;
pub mod random;
pub mod session;
pub mod tick;

pub use action::perform_action;
pub use random::{RandomSource, ScriptedRandom};
pub use session::Session;
pub use tick::{tick, SimulationEvent};

use crate::actions::catalog::Action;
use crate::core::config::SimulationConfig;
use crate::entity::plant::PlantState;

/// Anything that can change the plant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantEvent {
    Tick,
    Action(Action),
}

/// Outcome of applying a `PlantEvent`
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: PlantState,
    pub events: Vec<SimulationEvent>,
}

/// Pure form of the simulation: `(state, event) -> state`
///
/// The input state is left as is; callers that own their state can use
/// `tick` and `perform_action` directly.
pub fn update<R: RandomSource + ?Sized>(
    state: &PlantState,
    event: PlantEvent,
    config: &SimulationConfig,
    rng: &mut R,
) -> Transition {
    let mut next = state.clone();
    let events = match event {
        PlantEvent::Tick => tick(&mut next, config, rng),
        PlantEvent::Action(action) => perform_action(&mut next, action, config),
    };
    Transition {
        state: next,
        events,
    }
}
