//! Bounded LIFO stack for completed work
//!
//! Each teller collects finished transactions on its own stack. Unlike the
//! input queues there is no class-based threshold, only one global
//! capacity. Push and pop are atomic; a failed operation changes nothing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::transaction::Transaction;

/// Default completion stack capacity per channel.
pub const DEFAULT_STACK_CAPACITY: usize = 100;

/// Errors raised by [`BoundedStack`] operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("stack is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("stack is empty")]
    Empty,
}

/// Fixed-capacity LIFO stack of transactions.
///
/// # Example
/// ```
/// use teller_simulator_core_rs::{AccountClass, BoundedStack, Transaction};
///
/// let mut s = BoundedStack::new(100);
/// s.push(Transaction::new(1, 100, AccountClass::Savings, 6)).unwrap();
/// assert_eq!(s.pop().unwrap().stub(), 1);
/// assert!(s.pop().is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundedStack {
    items: Vec<Transaction>,
    capacity: usize,
}

impl BoundedStack {
    /// Create an empty stack with the given capacity.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "stack capacity must be positive");
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Whether the stack holds `capacity` items.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of stacked items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Push onto the top.
    pub fn push(&mut self, transaction: Transaction) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Full {
                capacity: self.capacity,
            });
        }
        self.items.push(transaction);
        Ok(())
    }

    /// Pop from the top, LIFO order.
    pub fn pop(&mut self) -> Result<Transaction, StackError> {
        self.items.pop().ok_or(StackError::Empty)
    }

    /// Peek at the top without removing it.
    pub fn peek(&self) -> Option<&Transaction> {
        self.items.last()
    }
}
