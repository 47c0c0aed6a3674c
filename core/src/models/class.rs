//! Account class lookup table
//!
//! Each work item belongs to one of four fixed account classes. The class
//! determines three things:
//! - which teller (channel) the item is routed to
//! - the maximum number of items its queues accept for that class
//! - the inclusive range its service duration is drawn from
//!
//! All three live here as one closed table so no magic numbers leak into
//! the router or scheduler.

use serde::{Deserialize, Serialize};

use crate::orchestrator::SimulationError;

/// Number of primary teller channels (one per class).
pub const NUM_PRIMARY_CHANNELS: usize = 4;

/// Index of the lazily activated overflow channel.
pub const OVERFLOW_CHANNEL: usize = 4;

/// Account class of a work item.
///
/// Closed enumeration: raw caller input is converted through
/// [`AccountClass::from_code`], which is the only place an out-of-range
/// class can be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountClass {
    /// New accounts (code 0)
    New,
    /// Government accounts (code 1)
    Government,
    /// Checking accounts (code 2)
    Checking,
    /// Savings accounts (code 3)
    Savings,
}

impl AccountClass {
    /// All classes in code order.
    pub const ALL: [AccountClass; 4] = [
        AccountClass::New,
        AccountClass::Government,
        AccountClass::Checking,
        AccountClass::Savings,
    ];

    /// Parse a raw class code as supplied by the caller.
    ///
    /// # Example
    /// ```
    /// use teller_simulator_core_rs::AccountClass;
    ///
    /// assert_eq!(AccountClass::from_code(2).unwrap(), AccountClass::Checking);
    /// assert!(AccountClass::from_code(99).is_err());
    /// ```
    pub fn from_code(code: u8) -> Result<Self, SimulationError> {
        match code {
            0 => Ok(AccountClass::New),
            1 => Ok(AccountClass::Government),
            2 => Ok(AccountClass::Checking),
            3 => Ok(AccountClass::Savings),
            other => Err(SimulationError::InvalidClass(other)),
        }
    }

    /// Raw code of this class.
    pub fn code(&self) -> u8 {
        match self {
            AccountClass::New => 0,
            AccountClass::Government => 1,
            AccountClass::Checking => 2,
            AccountClass::Savings => 3,
        }
    }

    /// Index of the dedicated teller channel for this class.
    pub fn home_channel(&self) -> usize {
        self.code() as usize
    }

    /// Maximum number of items a queue holds for this class.
    pub fn queue_capacity(&self) -> usize {
        match self {
            AccountClass::New => 3,
            AccountClass::Government => 4,
            AccountClass::Checking => 5,
            AccountClass::Savings => 5,
        }
    }

    /// Inclusive service-duration range in simulated minutes.
    pub fn duration_range(&self) -> (u32, u32) {
        match self {
            AccountClass::New => (8, 10),
            AccountClass::Government => (10, 15),
            AccountClass::Checking => (5, 8),
            AccountClass::Savings => (5, 7),
        }
    }

    /// Human-readable label for display layers.
    pub fn label(&self) -> &'static str {
        match self {
            AccountClass::New => "New",
            AccountClass::Government => "Government",
            AccountClass::Checking => "Checking",
            AccountClass::Savings => "Savings",
        }
    }

    /// Sum of all class queue capacities.
    ///
    /// Used by queue construction to validate that a physical buffer can
    /// never wrap onto live entries.
    pub fn total_queue_capacity() -> usize {
        Self::ALL.iter().map(|c| c.queue_capacity()).sum()
    }
}
