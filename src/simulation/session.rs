//! A running game: one plant, its RNG, and the activity log

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::actions::catalog::Action;
use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::Tick;
use crate::entity::plant::PlantState;
use crate::simulation::action::perform_action;
use crate::simulation::tick::{tick, SimulationEvent};
use crate::ui::state::{ActivityLog, LogCategory};

pub struct Session {
    plant: PlantState,
    config: SimulationConfig,
    rng: ChaCha8Rng,
    seed: u64,
    current_tick: Tick,
    log: ActivityLog,
}

impl Session {
    pub fn new(config: SimulationConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        let mut log = ActivityLog::new(config.max_log_entries);
        log.log(0, "A new seed is planted.".into(), LogCategory::System);
        tracing::info!(seed, "New plant session");

        Ok(Self {
            plant: PlantState::new(&config),
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            seed,
            current_tick: 0,
            log,
        })
    }

    /// Advance the simulation by one timer interval
    pub fn tick(&mut self) -> Vec<SimulationEvent> {
        if self.plant.alive {
            self.current_tick += 1;
        }
        let events = tick(&mut self.plant, &self.config, &mut self.rng);
        self.record(&events);
        events
    }

    pub fn perform(&mut self, action: Action) -> Vec<SimulationEvent> {
        let events = perform_action(&mut self.plant, action, &self.config);
        self.record(&events);
        events
    }

    /// Perform an action by its identifier; unknown identifiers are ignored
    pub fn perform_named(&mut self, name: &str) -> Vec<SimulationEvent> {
        match name.parse::<Action>() {
            Ok(action) => self.perform(action),
            Err(e) => {
                tracing::trace!("Ignoring input: {}", e);
                Vec::new()
            }
        }
    }

    fn record(&mut self, events: &[SimulationEvent]) {
        for event in events {
            let category = if event.is_warning() {
                LogCategory::Warning
            } else if matches!(
                event,
                SimulationEvent::ActionApplied { .. }
                    | SimulationEvent::PestsRemoved
                    | SimulationEvent::Diagnosis { .. }
            ) {
                LogCategory::Action
            } else {
                LogCategory::Growth
            };
            self.log.log(self.current_tick, event.to_string(), category);
        }
    }

    pub fn plant(&self) -> &PlantState {
        &self.plant
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }
}
