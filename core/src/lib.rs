//! Teller Simulator Core - Rust Engine
//!
//! Multi-channel service-counter simulation with deterministic execution.
//! Incoming transactions are routed to bounded per-class teller queues,
//! overflow into a shared pending queue under load, and may activate an
//! extra overflow teller under sustained saturation. A discrete tick loop
//! serves at most one item per teller at a time.
//!
//! # Architecture
//!
//! - **core**: Time management (one tick = one simulated minute)
//! - **models**: Domain types (class table, transaction, queue, stack, channel, state, events)
//! - **rng**: Deterministic seeded random number generation
//! - **durations**: Service-duration model (per-class uniform ranges)
//! - **admission**: Admission router and two-tier overflow policy
//! - **report**: Consolidation of completed work
//! - **orchestrator**: External interface (admit / tick / consolidate / snapshot)
//!
//! # Critical Invariants
//!
//! 1. Stub numbers are unique and strictly increasing per simulation
//! 2. A transaction lives in exactly one container at any instant
//! 3. No channel queue ever exceeds its per-class threshold
//! 4. All randomness is deterministic (seeded RNG)

// Module declarations
pub mod admission;
pub mod core;
pub mod durations;
pub mod models;
pub mod orchestrator;
pub mod report;
pub mod rng;

// Re-exports for convenience
pub use crate::core::time::SimClock;
pub use admission::{AdmissionOutcome, AdmissionRouter};
pub use durations::{ClassUniformDurations, DurationConfig, DurationModel, FixedDurations};
pub use models::{
    channel::{Channel, InService},
    class::{AccountClass, NUM_PRIMARY_CHANNELS, OVERFLOW_CHANNEL},
    event::{DropReason, Event, EventLog},
    queue::{BoundedQueue, CapacityRule, QueueError},
    stack::{BoundedStack, StackError},
    state::SimulationState,
    transaction::Transaction,
};
pub use orchestrator::{
    ChannelSnapshot, CompletionEvent, Orchestrator, OrchestratorConfig, SimulationError,
    SimulationSnapshot, TickResult,
};
pub use report::{consolidate, ChannelStats, Report};
pub use rng::SeededRng;
