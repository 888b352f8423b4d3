//! Tick system - the periodic plant update
//!
//! Each tick runs, in order:
//! water/nutrient decay -> health from bands -> death check -> growth ->
//! pests -> second death check
//!
//! A dead plant is left untouched.

use std::fmt;

use crate::actions::catalog::Action;
use crate::core::config::SimulationConfig;
use crate::core::types::BandPosition;
use crate::entity::plant::{PlantState, Stage, Stat};
use crate::simulation::random::RandomSource;

/// Events generated while updating the plant
///
/// Returned by `tick` and `perform_action` so the UI can narrate them.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationEvent {
    /// Water dropped below its band
    Thirsty,
    /// Water rose above its band
    Waterlogged,
    /// Nutrients dropped below their band
    Hungry,
    /// Both water and nutrients came back inside their bands
    Comfortable,
    /// Growth crossed a stage threshold (either direction)
    StageChanged { from: Stage, to: Stage },
    /// Pests moved in
    Infested,
    /// Pests damaged the plant
    PestDamage { health_lost: f32 },
    /// Health hit zero
    Died,
    /// A care action was applied
    ActionApplied { action: Action },
    /// Pruning removed the pests
    PestsRemoved,
    /// Result of an inspection
    Diagnosis {
        water: BandPosition,
        nutrients: BandPosition,
        pests: bool,
        stage: Stage,
    },
    /// An action was attempted on a dead plant
    ActionOnDeadPlant { action: Action },
}

impl SimulationEvent {
    /// Whether the event is bad news for the player
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            SimulationEvent::Thirsty
                | SimulationEvent::Waterlogged
                | SimulationEvent::Hungry
                | SimulationEvent::Infested
                | SimulationEvent::PestDamage { .. }
                | SimulationEvent::Died
                | SimulationEvent::ActionOnDeadPlant { .. }
        )
    }
}

impl fmt::Display for SimulationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationEvent::Thirsty => write!(f, "The soil is dry. Your plant is thirsty."),
            SimulationEvent::Waterlogged => {
                write!(f, "The pot is waterlogged. The roots are drowning.")
            }
            SimulationEvent::Hungry => write!(f, "The leaves are pale. It needs nutrients."),
            SimulationEvent::Comfortable => write!(f, "Water and nutrients are just right."),
            SimulationEvent::StageChanged { from, to } => {
                if to > from {
                    write!(f, "Your plant has grown into: {}!", to)
                } else {
                    write!(f, "Your plant has shrunk back to: {}.", to)
                }
            }
            SimulationEvent::Infested => write!(f, "Pests have found your plant!"),
            SimulationEvent::PestDamage { health_lost } => {
                write!(f, "Pests are chewing the leaves (-{:.0} health).", health_lost)
            }
            SimulationEvent::Died => write!(f, "Your plant has withered and died."),
            SimulationEvent::ActionApplied { action } => match action {
                Action::Water => write!(f, "You watered the plant."),
                Action::Fertilize => write!(f, "You added fertilizer."),
                Action::Sun => write!(f, "You moved the plant into the sun."),
                Action::Prune => write!(f, "You pruned the plant."),
                Action::Mist => write!(f, "You misted the leaves."),
                Action::Inspect => write!(f, "You inspected the plant."),
            },
            SimulationEvent::PestsRemoved => write!(f, "The pests are gone."),
            SimulationEvent::Diagnosis {
                water,
                nutrients,
                pests,
                stage,
            } => {
                let water = match water {
                    BandPosition::Below => "dry",
                    BandPosition::Within => "fine",
                    BandPosition::Above => "soaked",
                };
                let nutrients = match nutrients {
                    BandPosition::Below => "low",
                    BandPosition::Within => "fine",
                    BandPosition::Above => "rich",
                };
                let pests = if *pests { "pests present" } else { "no pests" };
                write!(
                    f,
                    "Inspection: {} | soil {} | nutrients {} | {}",
                    stage, water, nutrients, pests
                )
            }
            SimulationEvent::ActionOnDeadPlant { action } => write!(
                f,
                "{} does nothing. The plant is dead.",
                action.label()
            ),
        }
    }
}

/// Run one periodic update on the plant
pub fn tick<R: RandomSource + ?Sized>(
    plant: &mut PlantState,
    config: &SimulationConfig,
    rng: &mut R,
) -> Vec<SimulationEvent> {
    let mut events = Vec::new();

    if !plant.alive {
        return events;
    }

    let stage_before = plant.stage();
    let water_before = config.water_band.classify(plant.water());
    let nutrients_before = config.nutrient_band.classify(plant.nutrients());

    // 1. Decay
    let water_loss = rng.between(config.water_decay.0, config.water_decay.1);
    let nutrient_loss = rng.between(config.nutrient_decay.0, config.nutrient_decay.1);
    plant.adjust(Stat::Water, -water_loss);
    plant.adjust(Stat::Nutrients, -nutrient_loss);

    let water_now = config.water_band.classify(plant.water());
    let nutrients_now = config.nutrient_band.classify(plant.nutrients());
    narrate_bands(
        (water_before, water_now),
        (nutrients_before, nutrients_now),
        &mut events,
    );

    // 2. Health from bands
    let in_band = water_now == BandPosition::Within && nutrients_now == BandPosition::Within;
    if in_band {
        plant.adjust(Stat::Health, config.health_recovery);
    } else {
        if water_now != BandPosition::Within {
            plant.adjust(Stat::Health, -config.water_penalty);
        }
        if nutrients_now != BandPosition::Within {
            plant.adjust(Stat::Health, -config.nutrient_penalty);
        }
    }

    // 3. Death
    if plant.check_death() {
        tracing::warn!("Plant died of neglect");
        events.push(SimulationEvent::Died);
        return events;
    }

    // 4. Growth
    let favorable =
        plant.health() >= config.growth_health_threshold && in_band && !plant.pests;
    if favorable {
        let gain = rng.between(config.growth_rate.0, config.growth_rate.1);
        plant.adjust(Stat::Growth, gain);
    } else {
        plant.adjust(Stat::Growth, -config.growth_decay);
    }

    // 5. Pests
    if !plant.pests {
        if rng.chance(config.pest_infestation_chance) {
            plant.pests = true;
            tracing::debug!("Pest infestation started");
            events.push(SimulationEvent::Infested);
        }
    } else if rng.chance(config.pest_damage_chance) {
        plant.adjust(Stat::Health, -config.pest_health_damage);
        plant.adjust(Stat::Growth, -config.pest_growth_damage);
        events.push(SimulationEvent::PestDamage {
            health_lost: config.pest_health_damage,
        });
    }

    let stage_after = plant.stage();
    if stage_after != stage_before {
        events.push(SimulationEvent::StageChanged {
            from: stage_before,
            to: stage_after,
        });
    }

    // 6. Pests can finish the plant off
    if plant.check_death() {
        tracing::warn!("Plant killed by pests");
        events.push(SimulationEvent::Died);
    }

    tracing::trace!(
        water = plant.water(),
        nutrients = plant.nutrients(),
        health = plant.health(),
        growth = plant.growth(),
        pests = plant.pests,
        "tick"
    );

    events
}

/// Push a log line for every band the plant just left or re-entered
pub(crate) fn narrate_bands(
    water: (BandPosition, BandPosition),
    nutrients: (BandPosition, BandPosition),
    events: &mut Vec<SimulationEvent>,
) {
    if water.0 != water.1 {
        match water.1 {
            BandPosition::Below => events.push(SimulationEvent::Thirsty),
            BandPosition::Above => events.push(SimulationEvent::Waterlogged),
            BandPosition::Within => {}
        }
    }
    if nutrients.0 != nutrients.1 && nutrients.1 == BandPosition::Below {
        events.push(SimulationEvent::Hungry);
    }

    let was_comfortable = water.0 == BandPosition::Within && nutrients.0 == BandPosition::Within;
    let is_comfortable = water.1 == BandPosition::Within && nutrients.1 == BandPosition::Within;
    if is_comfortable && !was_comfortable {
        events.push(SimulationEvent::Comfortable);
    }
}
