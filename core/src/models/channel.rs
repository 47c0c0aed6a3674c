//! Teller channel
//!
//! One service unit: an input queue, a completion stack, and at most one
//! transaction in service. A channel owns its containers exclusively; no
//! two channels ever share a queue or stack.
//!
//! Remaining service time is scheduler bookkeeping and lives here in
//! [`InService`], never in the transaction itself.

use serde::{Deserialize, Serialize};

use crate::models::queue::{BoundedQueue, CapacityRule, QueueError};
use crate::models::stack::{BoundedStack, StackError};
use crate::models::transaction::Transaction;

/// A transaction currently being served, with its countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InService {
    transaction: Transaction,
    remaining_minutes: u32,
}

impl InService {
    /// The transaction being served.
    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// Minutes of service still outstanding.
    pub fn remaining_minutes(&self) -> u32 {
        self.remaining_minutes
    }
}

/// One teller: input queue, in-service slot, completion stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    index: usize,
    queue: BoundedQueue,
    completed: BoundedStack,
    current: Option<InService>,
}

impl Channel {
    /// Create an idle channel with empty containers.
    pub fn new(
        index: usize,
        physical_capacity: usize,
        rule: CapacityRule,
        stack_capacity: usize,
    ) -> Self {
        Self {
            index,
            queue: BoundedQueue::new(physical_capacity, rule),
            completed: BoundedStack::new(stack_capacity),
            current: None,
        }
    }

    /// Channel index (stable for the lifetime of the simulation).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether a transaction is currently in service.
    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    /// The in-service slot, if occupied.
    pub fn current(&self) -> Option<&InService> {
        self.current.as_ref()
    }

    /// Input queue (read-only).
    pub fn queue(&self) -> &BoundedQueue {
        &self.queue
    }

    /// Completion stack (read-only).
    pub fn completed(&self) -> &BoundedStack {
        &self.completed
    }

    /// Offer a transaction to this channel's queue.
    pub fn enqueue(&mut self, transaction: Transaction) -> Result<(), QueueError> {
        self.queue.enqueue(transaction)
    }

    /// If idle and work is queued, move the head item into service.
    ///
    /// Returns the stub number of the transaction that started, or `None`
    /// if the channel stays idle or was already busy.
    pub fn start_next(&mut self) -> Option<u64> {
        if self.current.is_some() {
            return None;
        }
        let transaction = self.queue.dequeue().ok()?;
        let stub = transaction.stub();
        let remaining_minutes = transaction.duration_minutes();
        self.current = Some(InService {
            transaction,
            remaining_minutes,
        });
        Some(stub)
    }

    /// Advance the in-service transaction by one minute.
    ///
    /// On completion the transaction is pushed onto this channel's stack
    /// and returned; the channel becomes idle. Returns `Ok(None)` while
    /// still busy or when idle.
    pub fn advance_minute(&mut self) -> Result<Option<Transaction>, StackError> {
        let Some(service) = self.current.as_mut() else {
            return Ok(None);
        };
        // Guarded so a retry after a full-stack error does not underflow.
        if service.remaining_minutes > 0 {
            service.remaining_minutes -= 1;
        }
        if service.remaining_minutes > 0 {
            return Ok(None);
        }
        // Push before clearing the slot: a full completion stack leaves
        // the channel state untouched and the item in service.
        self.completed.push(service.transaction.clone())?;
        Ok(self.current.take().map(|s| s.transaction))
    }

    /// Drain the completion stack, top first.
    pub fn drain_completed(&mut self) -> Vec<Transaction> {
        let mut drained = Vec::with_capacity(self.completed.len());
        while let Ok(transaction) = self.completed.pop() {
            drained.push(transaction);
        }
        drained
    }
}
