//! Service-duration model
//!
//! Maps an account class to a service time in simulated minutes. The
//! production model draws uniformly from the class's inclusive range;
//! tests swap in a fixed model so tick counts are exact.

use serde::{Deserialize, Serialize};

use crate::models::class::AccountClass;
use crate::rng::SeededRng;

/// Source of service durations for newly admitted transactions.
pub trait DurationModel {
    /// Sample a duration in minutes for an item of `class`.
    fn sample(&mut self, class: AccountClass, rng: &mut SeededRng) -> u32;
}

/// Uniform draw from the class's configured inclusive range.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassUniformDurations;

impl DurationModel for ClassUniformDurations {
    fn sample(&mut self, class: AccountClass, rng: &mut SeededRng) -> u32 {
        let (min, max) = class.duration_range();
        rng.range_inclusive(min, max)
    }
}

/// Constant duration regardless of class. Test model.
#[derive(Debug, Clone, Copy)]
pub struct FixedDurations {
    minutes: u32,
}

impl FixedDurations {
    /// Create a fixed model.
    ///
    /// # Panics
    /// Panics if `minutes` is zero; transactions require positive
    /// durations.
    pub fn new(minutes: u32) -> Self {
        assert!(minutes > 0, "fixed duration must be positive");
        Self { minutes }
    }
}

impl DurationModel for FixedDurations {
    fn sample(&mut self, _class: AccountClass, _rng: &mut SeededRng) -> u32 {
        self.minutes
    }
}

/// Duration model selection for [`OrchestratorConfig`].
///
/// [`OrchestratorConfig`]: crate::orchestrator::OrchestratorConfig
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationConfig {
    /// Per-class uniform ranges (production behavior).
    ClassUniform,

    /// Every item takes the same number of minutes (tests).
    Fixed { minutes: u32 },
}

impl DurationConfig {
    /// Build the configured model.
    pub fn build(&self) -> Box<dyn DurationModel> {
        match self {
            DurationConfig::ClassUniform => Box::new(ClassUniformDurations),
            DurationConfig::Fixed { minutes } => Box::new(FixedDurations::new(*minutes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_samples_stay_in_class_range() {
        let mut rng = SeededRng::new(2024);
        let mut model = ClassUniformDurations;
        for class in AccountClass::ALL {
            let (min, max) = class.duration_range();
            for _ in 0..500 {
                let d = model.sample(class, &mut rng);
                assert!(
                    (min..=max).contains(&d),
                    "{} minutes outside [{min}, {max}] for {:?}",
                    d,
                    class
                );
            }
        }
    }

    #[test]
    fn test_fixed_ignores_class_and_rng() {
        let mut rng = SeededRng::new(1);
        let mut model = FixedDurations::new(6);
        for class in AccountClass::ALL {
            assert_eq!(model.sample(class, &mut rng), 6);
        }
    }

    #[test]
    #[should_panic(expected = "fixed duration must be positive")]
    fn test_fixed_zero_panics() {
        FixedDurations::new(0);
    }
}
