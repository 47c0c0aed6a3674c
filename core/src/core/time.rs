//! Time management for the simulation
//!
//! The simulation operates in discrete ticks; one tick is one simulated
//! minute. The clock advances exactly once per tick regardless of how
//! many channels are busy, so elapsed time is wall time on the teller
//! floor, not summed service time.

use serde::{Deserialize, Serialize};

/// Discrete simulation clock in one-minute ticks.
///
/// # Example
/// ```
/// use teller_simulator_core_rs::SimClock;
///
/// let mut clock = SimClock::new();
/// clock.advance_tick();
/// assert_eq!(clock.elapsed_minutes(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimClock {
    /// Minutes elapsed since simulation start
    elapsed_minutes: usize,
}

impl SimClock {
    /// Create a clock at minute zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick (one simulated minute).
    pub fn advance_tick(&mut self) {
        self.elapsed_minutes += 1;
    }

    /// Total minutes elapsed since start.
    pub fn elapsed_minutes(&self) -> usize {
        self.elapsed_minutes
    }

    /// Elapsed time as (hours, minutes) for display layers.
    ///
    /// # Example
    /// ```
    /// use teller_simulator_core_rs::SimClock;
    ///
    /// let mut clock = SimClock::new();
    /// for _ in 0..125 {
    ///     clock.advance_tick();
    /// }
    /// assert_eq!(clock.hh_mm(), (2, 5));
    /// ```
    pub fn hh_mm(&self) -> (usize, usize) {
        (self.elapsed_minutes / 60, self.elapsed_minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let clock = SimClock::new();
        assert_eq!(clock.elapsed_minutes(), 0);
        assert_eq!(clock.hh_mm(), (0, 0));
    }

    #[test]
    fn test_one_increment_per_tick() {
        let mut clock = SimClock::new();
        for _ in 0..59 {
            clock.advance_tick();
        }
        assert_eq!(clock.elapsed_minutes(), 59);
        assert_eq!(clock.hh_mm(), (0, 59));
        clock.advance_tick();
        assert_eq!(clock.hh_mm(), (1, 0));
    }
}
