//! Simulation configuration with documented constants
//!
//! Gameplay tuning numbers (timing, decay, bands, penalties, growth, pests,
//! status thresholds) are collected here with explanations of their purpose
//! and how they interact with each other. They are fixed at build time;
//! nothing loads them from disk.
//!
//! Stage cut-offs are part of what a stage is and live on
//! `Stage::THRESHOLDS`. Colors and art proportions live in `render`.

use std::time::Duration;

use crate::core::error::{PlantError, Result};
use crate::core::types::Band;

/// Configuration for the plant simulation
///
/// These values set the pacing of the toy. With the defaults an untended
/// plant goes thirsty after roughly six ticks (half a minute) and dies a
/// couple of minutes after that.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    // === TIMER ===
    /// Wall-clock time between two ticks
    pub tick_interval: Duration,

    // === STARTING STATE ===
    pub initial_water: f32,
    pub initial_nutrients: f32,
    pub initial_health: f32,
    pub initial_growth: f32,

    // === DECAY ===
    /// Water lost per tick, sampled uniformly from [min, max)
    pub water_decay: (f32, f32),

    /// Nutrients lost per tick, sampled uniformly from [min, max)
    ///
    /// Slower than water so that watering is the most frequent chore.
    pub nutrient_decay: (f32, f32),

    // === HEALTH BANDS ===
    /// Water level the plant is comfortable with
    ///
    /// Below the band the plant is thirsty, above it the roots drown.
    pub water_band: Band,

    /// Nutrient level the plant is comfortable with
    pub nutrient_band: Band,

    /// Health lost per tick while water is outside its band
    pub water_penalty: f32,

    /// Health lost per tick while nutrients are outside their band
    pub nutrient_penalty: f32,

    /// Health regained per tick while both water and nutrients are in band
    pub health_recovery: f32,

    // === GROWTH ===
    /// Minimum health required for the plant to grow
    pub growth_health_threshold: f32,

    /// Growth per favorable tick, sampled uniformly from [min, max)
    pub growth_rate: (f32, f32),

    /// Growth lost on any unfavorable tick
    pub growth_decay: f32,

    // === PESTS ===
    /// Chance per tick that a healthy plant becomes infested
    pub pest_infestation_chance: f64,

    /// Chance per tick that an infestation does damage
    pub pest_damage_chance: f64,

    /// Health lost when pests do damage
    pub pest_health_damage: f32,

    /// Growth lost when pests do damage
    pub pest_growth_damage: f32,

    // === STATUS ===
    /// Below this health the status line calls the plant weak
    pub weak_health_threshold: f32,

    // === LOG ===
    /// Maximum activity log entries kept for display
    pub max_log_entries: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(5),

            initial_water: 70.0,
            initial_nutrients: 60.0,
            initial_health: 100.0,
            initial_growth: 0.0,

            water_decay: (3.0, 7.0),
            nutrient_decay: (1.0, 4.0),

            water_band: Band::new(40.0, 85.0),
            nutrient_band: Band::new(30.0, 85.0),
            water_penalty: 6.0,
            nutrient_penalty: 4.0,
            health_recovery: 2.0,

            growth_health_threshold: 60.0,
            growth_rate: (1.0, 3.0),
            growth_decay: 0.5,

            pest_infestation_chance: 0.08,
            pest_damage_chance: 0.10,
            pest_health_damage: 8.0,
            pest_growth_damage: 2.0,

            weak_health_threshold: 40.0,

            max_log_entries: 10,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval.is_zero() {
            return Err(PlantError::InvalidConfig(
                "tick_interval must be non-zero".into(),
            ));
        }

        for (name, (low, high)) in [
            ("water_decay", self.water_decay),
            ("nutrient_decay", self.nutrient_decay),
            ("growth_rate", self.growth_rate),
        ] {
            // gen_range panics on an empty range
            let valid = low >= 0.0 && low < high;
            if !valid {
                return Err(PlantError::InvalidConfig(format!(
                    "{} range ({}, {}) must satisfy 0 <= min < max",
                    name, low, high
                )));
            }
        }

        for (name, band) in [
            ("water_band", self.water_band),
            ("nutrient_band", self.nutrient_band),
        ] {
            if band.low > band.high || band.low < 0.0 || band.high > 100.0 {
                return Err(PlantError::InvalidConfig(format!(
                    "{} ({}, {}) must be an ordered range inside [0, 100]",
                    name, band.low, band.high
                )));
            }
        }

        for (name, value) in [
            ("growth_health_threshold", self.growth_health_threshold),
            ("weak_health_threshold", self.weak_health_threshold),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(PlantError::InvalidConfig(format!(
                    "{} ({}) must lie inside [0, 100]",
                    name, value
                )));
            }
        }

        for (name, p) in [
            ("pest_infestation_chance", self.pest_infestation_chance),
            ("pest_damage_chance", self.pest_damage_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(PlantError::InvalidConfig(format!(
                    "{} ({}) must be a probability",
                    name, p
                )));
            }
        }

        if self.max_log_entries == 0 {
            return Err(PlantError::InvalidConfig(
                "max_log_entries must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
