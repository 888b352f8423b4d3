//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Simulation tick counter (one tick per timer interval)
pub type Tick = u64;

/// Lower bound of every plant stat
pub const STAT_MIN: f32 = 0.0;

/// Upper bound of every plant stat
pub const STAT_MAX: f32 = 100.0;

/// Clamp a stat value into [0, 100]
pub fn clamp_stat(value: f32) -> f32 {
    value.clamp(STAT_MIN, STAT_MAX)
}

/// Inclusive target range for a stat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub low: f32,
    pub high: f32,
}

impl Band {
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.low && value <= self.high
    }

    /// Where a value sits relative to the band
    pub fn classify(&self, value: f32) -> BandPosition {
        if value < self.low {
            BandPosition::Below
        } else if value > self.high {
            BandPosition::Above
        } else {
            BandPosition::Within
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BandPosition {
    Below,
    Within,
    Above,
}
