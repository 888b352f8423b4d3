//! Plant appearance
//!
//! Derives the decorative style parameters from plant state.
//! This module is READ-ONLY - it never modifies simulation state.

pub mod colors;

use crate::core::config::SimulationConfig;
use crate::entity::plant::{PlantState, Stage};
use colors::Color;

/// Tallest stem, in terminal rows
pub const MAX_STEM_HEIGHT: u16 = 10;

/// Width of every line produced by [`PlantVisual::art`]
pub const ART_WIDTH: usize = 9;

/// Style parameters for drawing the plant
#[derive(Debug, Clone, PartialEq)]
pub struct PlantVisual {
    /// Stem height in rows, proportional to growth
    pub stem_height: u16,
    pub leaf_count: u8,
    pub leaf_color: Color,
    /// 0.0 = upright, 1.0 = fully wilted (from water deficit)
    pub droop: f32,
    pub pests: bool,
    pub bloom: bool,
    pub alive: bool,
}

impl PlantVisual {
    pub fn from_state(plant: &PlantState, config: &SimulationConfig) -> Self {
        let stage = plant.stage();
        let stem_height =
            ((plant.growth() / 100.0) * MAX_STEM_HEIGHT as f32).round() as u16;

        let leaf_count = match stage {
            Stage::Seed => 0,
            Stage::Sprout => 2,
            Stage::Young => 4,
            Stage::Mature | Stage::Blooming => 6,
        };

        let droop = if plant.alive {
            let low = config.water_band.low;
            if low > 0.0 {
                ((low - plant.water()) / low).clamp(0.0, 1.0)
            } else {
                0.0
            }
        } else {
            1.0
        };

        let leaf_color = if plant.alive {
            colors::leaf_color(plant.health())
        } else {
            colors::WITHERED
        };

        Self {
            stem_height,
            leaf_count,
            leaf_color,
            droop,
            pests: plant.pests && plant.alive,
            bloom: stage == Stage::Blooming && plant.alive,
            alive: plant.alive,
        }
    }

    /// ASCII drawing of the plant in its pot, top row first
    pub fn art(&self) -> Vec<String> {
        let mut rows = Vec::new();

        if self.bloom {
            rows.push("   (@)   ".to_string());
        }

        let (stem, left, right) = if !self.alive {
            ('.', '_', '_')
        } else if self.droop > 0.5 {
            ('|', '/', '\\')
        } else {
            ('|', '\\', '/')
        };

        if self.stem_height == 0 {
            rows.push("    .    ".to_string());
        }

        let mut leaves_left = self.leaf_count;
        for row in 0..self.stem_height {
            let from_bottom = self.stem_height - 1 - row;
            if from_bottom % 2 == 1 && leaves_left >= 2 {
                leaves_left -= 2;
                rows.push(format!("   {}{}{}   ", left, stem, right));
            } else {
                rows.push(format!("    {}    ", stem));
            }
        }

        if self.pests {
            if let Some(top) = rows.first_mut() {
                top.replace_range(ART_WIDTH - 2..ART_WIDTH - 1, "*");
            }
        }

        rows.push("  ~~~~~  ".to_string());
        rows.push(" \\_____/ ".to_string());
        rows
    }
}
