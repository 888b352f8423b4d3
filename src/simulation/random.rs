//! Injectable randomness for the simulation
//!
//! Every random decision a tick makes goes through [`RandomSource`]. Any
//! `rand::Rng` works as a source; tests can use [`ScriptedRandom`] to pin
//! outcomes exactly.

use rand::Rng;

pub trait RandomSource {
    /// True with probability `p`
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform sample from `[low, high)`
    fn between(&mut self, low: f32, high: f32) -> f32;
}

impl<R: Rng> RandomSource for R {
    fn chance(&mut self, p: f64) -> bool {
        self.gen_bool(p)
    }

    fn between(&mut self, low: f32, high: f32) -> f32 {
        self.gen_range(low..high)
    }
}

/// Deterministic source with fixed answers
///
/// `chance` returns true exactly when `p` is at least `chance_threshold`,
/// so a threshold of 0.0 makes every roll succeed and anything above 1.0
/// makes every roll fail. `between` returns the point at `fraction` of the
/// way through the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedRandom {
    pub chance_threshold: f64,
    pub fraction: f32,
}

impl ScriptedRandom {
    /// No random event ever fires; ranges yield their midpoint
    pub fn calm() -> Self {
        Self {
            chance_threshold: f64::INFINITY,
            fraction: 0.5,
        }
    }

    /// Every random event fires; ranges yield their midpoint
    pub fn unlucky() -> Self {
        Self {
            chance_threshold: 0.0,
            fraction: 0.5,
        }
    }

    pub fn with_fraction(mut self, fraction: f32) -> Self {
        self.fraction = fraction.clamp(0.0, 1.0);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn chance(&mut self, p: f64) -> bool {
        p >= self.chance_threshold
    }

    fn between(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rng_source_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.between(3.0, 7.0);
            assert!((3.0..7.0).contains(&v));
        }
    }

    #[test]
    fn test_rng_source_extreme_chances() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(!RandomSource::chance(&mut rng, 0.0));
        assert!(RandomSource::chance(&mut rng, 1.0));
    }

    #[test]
    fn test_scripted_random() {
        let mut calm = ScriptedRandom::calm();
        assert!(!calm.chance(1.0));
        assert_eq!(calm.between(2.0, 4.0), 3.0);

        let mut unlucky = ScriptedRandom::unlucky().with_fraction(0.0);
        assert!(unlucky.chance(0.08));
        assert_eq!(unlucky.between(2.0, 4.0), 2.0);
    }
}
