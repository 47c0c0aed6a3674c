//! Event logging for replay and debugging.
//!
//! Every significant state change during a simulation run is appended to
//! an in-memory [`EventLog`]: admissions, routing decisions, service
//! starts, completions, overflow activation, and consolidations. The log
//! is append-only and ordered by occurrence within a tick.

use serde::{Deserialize, Serialize};

use crate::models::class::AccountClass;

/// Why an admission was dropped instead of queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropReason {
    /// Overflow teller active but its queue had no room.
    OverflowFull,

    /// Pending queue already at this class's threshold.
    PendingFull,

    /// Saturated, but the overflow-opening conditions were not met.
    OverflowClosed,
}

/// A state change captured during simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A transaction passed validation and entered the system.
    Admitted {
        tick: usize,
        stub: u64,
        amount: i64,
        class: AccountClass,
        duration_minutes: u32,
    },

    /// Routed directly to a channel queue.
    Routed {
        tick: usize,
        stub: u64,
        channel: usize,
    },

    /// Redirected to the shared pending queue.
    SentToPending { tick: usize, stub: u64 },

    /// The overflow teller was activated.
    OverflowOpened {
        tick: usize,
        /// Items moved from pending into the overflow queue at opening.
        drained_from_pending: usize,
    },

    /// Routed to the overflow teller's queue.
    RoutedOverflow { tick: usize, stub: u64 },

    /// Admission dropped; the caller was told why.
    Dropped {
        tick: usize,
        stub: u64,
        reason: DropReason,
    },

    /// A channel pulled a transaction into service.
    ServiceStarted {
        tick: usize,
        channel: usize,
        stub: u64,
    },

    /// A channel finished a transaction.
    Completed {
        tick: usize,
        channel: usize,
        stub: u64,
        duration_minutes: u32,
    },

    /// A channel finished a transaction but its completion stack was
    /// full; the item stays in service and the push retries next tick.
    CompletionStalled {
        tick: usize,
        channel: usize,
        stub: u64,
    },

    /// Completion stacks were drained into a report.
    Consolidated { tick: usize, transactions: usize },
}

impl Event {
    /// Tick at which this event occurred.
    pub fn tick(&self) -> usize {
        match self {
            Event::Admitted { tick, .. } => *tick,
            Event::Routed { tick, .. } => *tick,
            Event::SentToPending { tick, .. } => *tick,
            Event::OverflowOpened { tick, .. } => *tick,
            Event::RoutedOverflow { tick, .. } => *tick,
            Event::Dropped { tick, .. } => *tick,
            Event::ServiceStarted { tick, .. } => *tick,
            Event::Completed { tick, .. } => *tick,
            Event::CompletionStalled { tick, .. } => *tick,
            Event::Consolidated { tick, .. } => *tick,
        }
    }

    /// Short event-type label.
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Admitted { .. } => "Admitted",
            Event::Routed { .. } => "Routed",
            Event::SentToPending { .. } => "SentToPending",
            Event::OverflowOpened { .. } => "OverflowOpened",
            Event::RoutedOverflow { .. } => "RoutedOverflow",
            Event::Dropped { .. } => "Dropped",
            Event::ServiceStarted { .. } => "ServiceStarted",
            Event::Completed { .. } => "Completed",
            Event::CompletionStalled { .. } => "CompletionStalled",
            Event::Consolidated { .. } => "Consolidated",
        }
    }
}

/// Append-only log of simulation events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Number of logged events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in occurrence order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events of one type, in occurrence order.
    pub fn of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }
}
