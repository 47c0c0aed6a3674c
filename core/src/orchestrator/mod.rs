//! Orchestrator - main simulation object
//!
//! See `engine.rs` for the tick loop and external interface, and
//! `snapshot.rs` for read-only state views.

pub mod engine;
pub mod snapshot;

// Re-export main types for convenience
pub use engine::{
    CompletionEvent, Orchestrator, OrchestratorConfig, SimulationError, TickResult,
};
pub use snapshot::{ChannelSnapshot, SimulationSnapshot};
