//! Bounded FIFO queue with class-aware admission thresholds
//!
//! Teller input queues and the shared pending queue are FIFO containers
//! with two distinct limits:
//!
//! - a **physical capacity**: the hard buffer bound, asserted at
//!   construction to strictly exceed every logical threshold so the
//!   ring can never wrap onto live entries;
//! - a **logical capacity** per [`CapacityRule`]: "full" is evaluated
//!   against the class of the item being offered, not the raw slot
//!   count. A queue at three items is already full for `New` (cap 3)
//!   while still accepting `Checking` (cap 5).
//!
//! All operations are atomic with respect to this container: a failed
//! enqueue or dequeue changes nothing.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::class::AccountClass;
use crate::models::transaction::Transaction;

/// Default physical buffer size for teller and pending queues.
pub const DEFAULT_PHYSICAL_CAPACITY: usize = 40;

/// Errors raised by [`BoundedQueue`] operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// The logical capacity for the offered class is already reached.
    #[error("queue is full for class {class:?} (threshold {threshold})")]
    Full {
        class: AccountClass,
        threshold: usize,
    },

    /// Dequeue from an empty queue.
    #[error("queue is empty")]
    Empty,
}

/// How a queue evaluates "full" for an offered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityRule {
    /// Threshold comes from the item's class table entry.
    PerClass,

    /// One flat threshold regardless of class (overflow channel).
    Flat(usize),
}

impl CapacityRule {
    fn threshold(&self, class: AccountClass) -> usize {
        match self {
            CapacityRule::PerClass => class.queue_capacity(),
            CapacityRule::Flat(cap) => *cap,
        }
    }

    /// Largest threshold this rule can yield.
    fn max_threshold(&self) -> usize {
        match self {
            CapacityRule::PerClass => AccountClass::ALL
                .iter()
                .map(|c| c.queue_capacity())
                .max()
                .unwrap_or(0),
            CapacityRule::Flat(cap) => *cap,
        }
    }
}

/// Fixed-capacity FIFO queue of transactions.
///
/// # Example
/// ```
/// use teller_simulator_core_rs::{AccountClass, BoundedQueue, CapacityRule, Transaction};
///
/// let mut q = BoundedQueue::new(40, CapacityRule::PerClass);
/// q.enqueue(Transaction::new(1, 100, AccountClass::New, 9)).unwrap();
/// assert_eq!(q.len(), 1);
/// assert_eq!(q.dequeue().unwrap().stub(), 1);
/// assert!(q.dequeue().is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundedQueue {
    items: VecDeque<Transaction>,
    physical_capacity: usize,
    rule: CapacityRule,
}

impl BoundedQueue {
    /// Create an empty queue.
    ///
    /// # Panics
    /// Panics if `physical_capacity` does not strictly exceed the sum of
    /// all class thresholds reachable under `rule`; otherwise a wrapped
    /// buffer could corrupt live entries.
    pub fn new(physical_capacity: usize, rule: CapacityRule) -> Self {
        let required = match rule {
            CapacityRule::PerClass => AccountClass::total_queue_capacity(),
            CapacityRule::Flat(cap) => cap,
        };
        assert!(
            physical_capacity > required,
            "physical capacity {} must exceed logical capacity {}",
            physical_capacity,
            required
        );
        Self {
            items: VecDeque::with_capacity(physical_capacity),
            physical_capacity,
            rule,
        }
    }

    /// Whether the queue is full for an item of `class`.
    pub fn is_full(&self, class: AccountClass) -> bool {
        self.items.len() >= self.rule.threshold(class)
    }

    /// Whether the queue is full for every class simultaneously.
    pub fn is_full_for_all_classes(&self) -> bool {
        self.items.len() >= self.rule.max_threshold()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Physical buffer bound.
    pub fn physical_capacity(&self) -> usize {
        self.physical_capacity
    }

    /// Capacity rule this queue applies.
    pub fn rule(&self) -> CapacityRule {
        self.rule
    }

    /// Append at the rear.
    ///
    /// Fails with [`QueueError::Full`] when the logical threshold for the
    /// item's class is reached; the queue is unchanged in that case.
    pub fn enqueue(&mut self, transaction: Transaction) -> Result<(), QueueError> {
        let class = transaction.class();
        if self.is_full(class) {
            return Err(QueueError::Full {
                class,
                threshold: self.rule.threshold(class),
            });
        }
        self.items.push_back(transaction);
        Ok(())
    }

    /// Remove from the front, FIFO order.
    pub fn dequeue(&mut self) -> Result<Transaction, QueueError> {
        self.items.pop_front().ok_or(QueueError::Empty)
    }

    /// Peek at the front without removing it.
    pub fn front(&self) -> Option<&Transaction> {
        self.items.front()
    }

    /// Iterate front-to-rear without consuming.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.items.iter()
    }
}
