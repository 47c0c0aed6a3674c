//! Transaction model
//!
//! One unit of teller work. A transaction is created at admission time and
//! never mutated afterwards: the stub number, amount, class and sampled
//! service duration are fixed for its whole lifetime. Scheduler bookkeeping
//! (remaining service time) lives in the channel, not here.

use serde::{Deserialize, Serialize};

use crate::models::class::AccountClass;

/// A single admitted work item.
///
/// # Example
/// ```
/// use teller_simulator_core_rs::{AccountClass, Transaction};
///
/// let tx = Transaction::new(1, 500, AccountClass::Checking, 6);
/// assert_eq!(tx.stub(), 1);
/// assert_eq!(tx.duration_minutes(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Stub number: unique, monotonically increasing, assigned at admission
    stub: u64,

    /// Transaction amount in minor units
    amount: i64,

    /// Account class, decides routing and capacity thresholds
    class: AccountClass,

    /// Service duration in simulated minutes, sampled once at admission
    duration_minutes: u32,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// # Panics
    /// Panics if `duration_minutes` is zero; durations are sampled from
    /// strictly positive class ranges, so a zero here is a caller bug.
    pub fn new(stub: u64, amount: i64, class: AccountClass, duration_minutes: u32) -> Self {
        assert!(duration_minutes > 0, "duration must be positive");
        Self {
            stub,
            amount,
            class,
            duration_minutes,
        }
    }

    /// Stub number assigned at admission.
    pub fn stub(&self) -> u64 {
        self.stub
    }

    /// Amount in minor units.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Account class.
    pub fn class(&self) -> AccountClass {
        self.class
    }

    /// Service duration in simulated minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "duration must be positive")]
    fn test_zero_duration_panics() {
        Transaction::new(1, 100, AccountClass::New, 0);
    }
}
