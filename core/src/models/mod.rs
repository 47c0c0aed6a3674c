//! Domain models for the teller simulator

pub mod channel;
pub mod class;
pub mod event;
pub mod queue;
pub mod stack;
pub mod state;
pub mod transaction;

// Re-exports
pub use channel::{Channel, InService};
pub use class::{AccountClass, NUM_PRIMARY_CHANNELS, OVERFLOW_CHANNEL};
pub use event::{DropReason, Event, EventLog};
pub use queue::{BoundedQueue, CapacityRule, QueueError};
pub use stack::{BoundedStack, StackError};
pub use state::SimulationState;
pub use transaction::Transaction;
