//! The plant being cared for

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::types::clamp_stat;

/// Complete state of the plant
///
/// All four stats live in [0, 100]. Mutation goes through the setters,
/// which clamp, so the range holds no matter which system writes.
/// Serialized for the headless report only; nothing deserializes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantState {
    water: f32,
    nutrients: f32,
    health: f32,
    growth: f32,
    /// Whether the plant currently has a pest infestation
    pub pests: bool,
    /// Once false, only a restart brings the plant back
    pub alive: bool,
}

impl Default for PlantState {
    fn default() -> Self {
        Self::new(&SimulationConfig::default())
    }
}

impl PlantState {
    /// Fresh plant with the configured starting values
    pub fn new(config: &SimulationConfig) -> Self {
        Self::with_stats(
            config.initial_water,
            config.initial_nutrients,
            config.initial_health,
            config.initial_growth,
        )
    }

    /// Living, pest-free plant with the given stats (clamped)
    pub fn with_stats(water: f32, nutrients: f32, health: f32, growth: f32) -> Self {
        Self {
            water: clamp_stat(water),
            nutrients: clamp_stat(nutrients),
            health: clamp_stat(health),
            growth: clamp_stat(growth),
            pests: false,
            alive: true,
        }
    }

    pub fn water(&self) -> f32 {
        self.water
    }

    pub fn nutrients(&self) -> f32 {
        self.nutrients
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn growth(&self) -> f32 {
        self.growth
    }

    pub fn set_water(&mut self, value: f32) {
        self.water = clamp_stat(value);
    }

    pub fn set_nutrients(&mut self, value: f32) {
        self.nutrients = clamp_stat(value);
    }

    pub fn set_health(&mut self, value: f32) {
        self.health = clamp_stat(value);
    }

    pub fn set_growth(&mut self, value: f32) {
        self.growth = clamp_stat(value);
    }

    /// Add a (possibly negative) delta to a stat, clamping the result
    pub fn adjust(&mut self, stat: Stat, delta: f32) {
        match stat {
            Stat::Water => self.set_water(self.water + delta),
            Stat::Nutrients => self.set_nutrients(self.nutrients + delta),
            Stat::Health => self.set_health(self.health + delta),
            Stat::Growth => self.set_growth(self.growth + delta),
        }
    }

    pub fn get(&self, stat: Stat) -> f32 {
        match stat {
            Stat::Water => self.water,
            Stat::Nutrients => self.nutrients,
            Stat::Health => self.health,
            Stat::Growth => self.growth,
        }
    }

    /// Derived from growth, never stored
    pub fn stage(&self) -> Stage {
        Stage::from_growth(self.growth)
    }

    /// Kill the plant if health has run out. Returns true on the transition.
    pub fn check_death(&mut self) -> bool {
        if self.alive && self.health <= 0.0 {
            self.health = 0.0;
            self.alive = false;
            return true;
        }
        false
    }
}

/// The four bounded stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Water,
    Nutrients,
    Health,
    Growth,
}

impl Stat {
    pub const ALL: [Stat; 4] = [Stat::Water, Stat::Nutrients, Stat::Health, Stat::Growth];

    pub fn label(&self) -> &'static str {
        match self {
            Stat::Water => "Water",
            Stat::Nutrients => "Nutrients",
            Stat::Health => "Health",
            Stat::Growth => "Growth",
        }
    }
}

/// Life stage derived from growth percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Seed,
    Sprout,
    Young,
    Mature,
    Blooming,
}

impl Stage {
    /// Growth at which each stage begins, highest first. Below the last
    /// entry the plant is a seed.
    pub const THRESHOLDS: [(f32, Stage); 4] = [
        (90.0, Stage::Blooming),
        (60.0, Stage::Mature),
        (30.0, Stage::Young),
        (10.0, Stage::Sprout),
    ];

    pub fn from_growth(growth: f32) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| growth >= *min)
            .map_or(Stage::Seed, |&(_, stage)| stage)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Seed => "Seed",
            Stage::Sprout => "Sprout",
            Stage::Young => "Young plant",
            Stage::Mature => "Mature plant",
            Stage::Blooming => "Blooming",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
